//! JavaScript and TypeScript profiles

use crate::error::Result;
use crate::profile::{LanguageProfile, ProfileSpec};

pub fn javascript() -> Result<LanguageProfile> {
    ProfileSpec {
        name: "JavaScript",
        extensions: &["js", "jsx", "mjs", "cjs"],
        keywords: &[
            "await", "break", "case", "catch", "class", "const", "continue", "debugger",
            "default", "delete", "do", "else", "export", "extends", "finally", "for",
            "function", "if", "import", "in", "instanceof", "let", "new", "of", "return",
            "static", "super", "switch", "this", "throw", "try", "typeof", "var", "void",
            "while", "with", "yield", "async", "enum", "implements", "interface", "package",
            "private", "protected", "public",
        ],
        builtins: &[
            "Array", "Boolean", "Date", "Error", "Function", "JSON", "Math", "Number",
            "Object", "Promise", "RegExp", "String", "Symbol", "console", "window",
            "document", "undefined", "null", "true", "false", "NaN", "Infinity", "parseInt",
            "parseFloat", "isNaN", "isFinite", "Map", "Set", "WeakMap", "WeakSet", "Proxy",
            "Reflect",
        ],
        line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        string_delimiters: &['"', '\'', '`'],
        class_names: true,
        operators: true,
        identifiers: true,
        ..ProfileSpec::default()
    }
    .build()
}

pub fn typescript() -> Result<LanguageProfile> {
    ProfileSpec {
        name: "TypeScript",
        extensions: &["ts", "tsx"],
        keywords: &[
            "await", "break", "case", "catch", "class", "const", "continue", "debugger",
            "default", "delete", "do", "else", "export", "extends", "finally", "for",
            "function", "if", "import", "in", "instanceof", "let", "new", "of", "return",
            "static", "super", "switch", "this", "throw", "try", "typeof", "var", "void",
            "while", "with", "yield", "async", "enum", "implements", "interface", "package",
            "private", "protected", "public", "type", "namespace", "abstract", "as",
            "readonly", "declare", "module", "keyof", "infer", "never", "unknown",
        ],
        builtins: &[
            "Array", "Boolean", "Date", "Error", "Function", "JSON", "Math", "Number",
            "Object", "Promise", "RegExp", "String", "Symbol", "console", "window",
            "document", "undefined", "null", "true", "false", "any", "string", "number",
            "boolean", "object",
        ],
        line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        string_delimiters: &['"', '\'', '`'],
        class_names: true,
        operators: true,
        identifiers: true,
        ..ProfileSpec::default()
    }
    .build()
}
