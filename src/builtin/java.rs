//! Java and C# profiles

use crate::error::Result;
use crate::profile::{LanguageProfile, ProfileSpec};

pub fn java() -> Result<LanguageProfile> {
    ProfileSpec {
        name: "Java",
        extensions: &["java"],
        keywords: &[
            "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char",
            "class", "const", "continue", "default", "do", "double", "else", "enum",
            "extends", "final", "finally", "float", "for", "goto", "if", "implements",
            "import", "instanceof", "int", "interface", "long", "native", "new", "package",
            "private", "protected", "public", "return", "short", "static", "strictfp",
            "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
            "void", "volatile", "while",
        ],
        builtins: &[
            "String", "System", "Integer", "Double", "Float", "Boolean", "Character", "Byte",
            "Short", "Long", "Object", "Class", "Exception", "RuntimeException", "Thread",
            "Runnable", "true", "false", "null",
        ],
        line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        string_delimiters: &['"'],
        class_names: true,
        decorators: true,
        operators: true,
        identifiers: true,
        ..ProfileSpec::default()
    }
    .build()
}

pub fn csharp() -> Result<LanguageProfile> {
    ProfileSpec {
        name: "C#",
        extensions: &["cs"],
        keywords: &[
            "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char",
            "checked", "class", "const", "continue", "decimal", "default", "delegate", "do",
            "double", "else", "enum", "event", "explicit", "extern", "false", "finally",
            "fixed", "float", "for", "foreach", "goto", "if", "implicit", "in", "int",
            "interface", "internal", "is", "lock", "long", "namespace", "new", "null",
            "object", "operator", "out", "override", "params", "private", "protected",
            "public", "readonly", "ref", "return", "sbyte", "sealed", "short", "sizeof",
            "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
            "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using",
            "virtual", "void", "volatile", "while", "async", "await", "var", "dynamic",
            "yield", "partial", "get", "set", "add", "remove", "value", "where", "select",
            "from", "orderby", "group",
        ],
        builtins: &[
            "Console", "String", "Int32", "Int64", "Double", "Boolean", "Object", "Array",
            "List", "Dictionary", "Exception", "Task", "Action", "Func",
        ],
        line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        string_delimiters: &['"'],
        class_names: true,
        operators: true,
        identifiers: true,
        ..ProfileSpec::default()
    }
    .build()
}
