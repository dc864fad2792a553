//! Rust profile

use crate::error::Result;
use crate::profile::{LanguageProfile, ProfileSpec};

pub fn rust() -> Result<LanguageProfile> {
    ProfileSpec {
        name: "Rust",
        extensions: &["rs"],
        keywords: &[
            "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else",
            "enum", "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match",
            "mod", "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct",
            "super", "trait", "true", "type", "unsafe", "use", "where", "while",
        ],
        builtins: &[
            "bool", "char", "str", "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16",
            "i32", "i64", "i128", "isize", "f32", "f64", "String", "Vec", "Option", "Result",
            "Box", "Rc", "Arc", "Cell", "RefCell", "Some", "None", "Ok", "Err", "println",
            "print", "format", "panic",
        ],
        line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        string_delimiters: &['"'],
        operators: true,
        identifiers: true,
        ..ProfileSpec::default()
    }
    .build()
}
