//! Python profile

use crate::error::Result;
use crate::profile::{LanguageProfile, ProfileSpec};

pub fn python() -> Result<LanguageProfile> {
    ProfileSpec {
        name: "Python",
        extensions: &["py", "pyw", "pyi"],
        keywords: &[
            "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
            "continue", "def", "del", "elif", "else", "except", "finally", "for", "from",
            "global", "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass",
            "raise", "return", "try", "while", "with", "yield",
        ],
        builtins: &[
            "abs", "all", "any", "bin", "bool", "bytes", "callable", "chr", "classmethod",
            "compile", "complex", "dict", "dir", "divmod", "enumerate", "eval", "exec",
            "filter", "float", "format", "frozenset", "getattr", "globals", "hasattr", "hash",
            "help", "hex", "id", "input", "int", "isinstance", "issubclass", "iter", "len",
            "list", "locals", "map", "max", "memoryview", "min", "next", "object", "oct",
            "open", "ord", "pow", "print", "property", "range", "repr", "reversed", "round",
            "set", "setattr", "slice", "sorted", "staticmethod", "str", "sum", "super",
            "tuple", "type", "vars", "zip",
        ],
        line_comment: Some("#"),
        string_delimiters: &['"', '\''],
        triple_strings: true,
        decorators: true,
        class_names: true,
        operators: true,
        identifiers: true,
        ..ProfileSpec::default()
    }
    .build()
}
