//! Go profile

use crate::error::Result;
use crate::profile::{LanguageProfile, ProfileSpec};

pub fn go() -> Result<LanguageProfile> {
    ProfileSpec {
        name: "Go",
        extensions: &["go"],
        keywords: &[
            "break", "case", "chan", "const", "continue", "default", "defer", "else",
            "fallthrough", "for", "func", "go", "goto", "if", "import", "interface", "map",
            "package", "range", "return", "select", "struct", "switch", "type", "var",
        ],
        builtins: &[
            "bool", "byte", "complex64", "complex128", "error", "float32", "float64", "int",
            "int8", "int16", "int32", "int64", "rune", "string", "uint", "uint8", "uint16",
            "uint32", "uint64", "uintptr", "true", "false", "iota", "nil", "append", "cap",
            "close", "complex", "copy", "delete", "imag", "len", "make", "new", "panic",
            "print", "println", "real", "recover",
        ],
        line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        string_delimiters: &['"', '`'],
        operators: true,
        identifiers: true,
        ..ProfileSpec::default()
    }
    .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::LexState;
    use crate::tokens::TokenType;

    #[test]
    fn test_short_declaration() {
        let profile = go().unwrap();
        let text = "x := len(items)";
        let (spans, _) = profile.tokenize(text, LexState::Default);
        assert!(spans
            .iter()
            .any(|s| s.token == TokenType::Builtin && &text[s.start..s.end] == "len"));
        assert!(spans.contains(&crate::tokens::Span::new(2, 4, TokenType::Operator)));
    }
}
