//! C and C++ profiles
//!
//! Both place the preprocessor-directive rule and the `<...>` include-path
//! rule ahead of everything else, so `#include` is never claimed as an
//! identifier and an include path is never claimed by the operator rule.

use crate::error::Result;
use crate::profile::{LanguageProfile, ProfileSpec};

pub fn c() -> Result<LanguageProfile> {
    ProfileSpec {
        name: "C",
        extensions: &["c", "h"],
        keywords: &[
            "auto", "break", "case", "char", "const", "continue", "default", "do", "double",
            "else", "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long",
            "register", "restrict", "return", "short", "signed", "sizeof", "static", "struct",
            "switch", "typedef", "union", "unsigned", "void", "volatile", "while", "_Bool",
            "_Complex", "_Imaginary",
        ],
        builtins: &[
            "NULL", "EOF", "stdin", "stdout", "stderr", "printf", "scanf", "malloc", "free",
            "true", "false",
        ],
        line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        string_delimiters: &['"'],
        preprocessor: true,
        operators: true,
        identifiers: true,
        ..ProfileSpec::default()
    }
    .build()
}

pub fn cpp() -> Result<LanguageProfile> {
    ProfileSpec {
        name: "C++",
        extensions: &["cpp", "cxx", "cc", "hpp", "hxx", "hh"],
        keywords: &[
            "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool",
            "break", "case", "catch", "char", "char16_t", "char32_t", "class", "compl",
            "concept", "const", "consteval", "constexpr", "constinit", "const_cast", "continue",
            "co_await", "co_return", "co_yield", "decltype", "default", "delete", "do", "double",
            "dynamic_cast", "else", "enum", "explicit", "export", "extern", "false", "float",
            "for", "friend", "goto", "if", "inline", "int", "long", "mutable", "namespace",
            "new", "noexcept", "not", "not_eq", "nullptr", "operator", "or", "or_eq", "private",
            "protected", "public", "register", "reinterpret_cast", "requires", "return", "short",
            "signed", "sizeof", "static", "static_assert", "static_cast", "struct", "switch",
            "template", "this", "thread_local", "throw", "true", "try", "typedef", "typeid",
            "typename", "union", "unsigned", "using", "virtual", "void", "volatile", "wchar_t",
            "while", "xor", "xor_eq",
        ],
        builtins: &[
            "std", "cout", "cin", "endl", "string", "vector", "map", "set", "list", "queue",
            "stack", "pair", "make_pair", "unique_ptr", "shared_ptr", "weak_ptr", "NULL",
        ],
        line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        string_delimiters: &['"'],
        preprocessor: true,
        operators: true,
        identifiers: true,
        ..ProfileSpec::default()
    }
    .build()
}
