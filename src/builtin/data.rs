//! JSON, YAML and TOML profiles

use crate::error::Result;
use crate::profile::{LanguageProfile, ProfileSpec};
use crate::rules::PatternRule;
use crate::tokens::TokenType;

pub fn json() -> Result<LanguageProfile> {
    ProfileSpec {
        name: "JSON",
        extensions: &["json"],
        keywords: &["true", "false", "null"],
        string_delimiters: &['"'],
        ..ProfileSpec::default()
    }
    .build()
}

pub fn yaml() -> Result<LanguageProfile> {
    ProfileSpec {
        name: "YAML",
        extensions: &["yml", "yaml"],
        keywords: &["true", "false", "null", "yes", "no", "on", "off"],
        line_comment: Some("#"),
        string_delimiters: &['"', '\''],
        ..ProfileSpec::default()
    }
    .build()
}

pub fn toml() -> Result<LanguageProfile> {
    let mut profile = ProfileSpec {
        name: "TOML",
        extensions: &["toml"],
        keywords: &["true", "false"],
        line_comment: Some("#"),
        string_delimiters: &['"', '\''],
        ..ProfileSpec::default()
    }
    .build()?;

    // Table headers and bare keys.
    profile.add_rule(PatternRule::new(
        "table_header",
        r"^\s*\[\[?[^\]]+\]\]?",
        TokenType::Keyword,
    )?);
    profile.add_rule(PatternRule::with_capture(
        "key",
        r"^\s*([A-Za-z0-9_.-]+)\s*=",
        TokenType::Property,
    )?);
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::LexState;

    #[test]
    fn test_json_literals() {
        let profile = json().unwrap();
        let text = r#"{"a": true, "b": 1.5}"#;
        let (spans, _) = profile.tokenize(text, LexState::Default);
        assert!(spans
            .iter()
            .any(|s| s.token == TokenType::String && &text[s.start..s.end] == "\"a\""));
        assert!(spans
            .iter()
            .any(|s| s.token == TokenType::Keyword && &text[s.start..s.end] == "true"));
        assert!(spans
            .iter()
            .any(|s| s.token == TokenType::Number && &text[s.start..s.end] == "1.5"));
    }

    #[test]
    fn test_toml_table_and_key() {
        let profile = toml().unwrap();

        let text = "[dependencies]";
        let (spans, _) = profile.tokenize(text, LexState::Default);
        assert_eq!(spans[0].token, TokenType::Keyword);
        assert_eq!((spans[0].start, spans[0].end), (0, text.len()));

        let text = "version = \"1.0\"";
        let (spans, _) = profile.tokenize(text, LexState::Default);
        assert!(spans
            .iter()
            .any(|s| s.token == TokenType::Property && &text[s.start..s.end] == "version"));
        assert!(spans
            .iter()
            .any(|s| s.token == TokenType::String && &text[s.start..s.end] == "\"1.0\""));
    }

    #[test]
    fn test_yaml_comment() {
        let profile = yaml().unwrap();
        let text = "key: value # note";
        let (spans, _) = profile.tokenize(text, LexState::Default);
        assert!(spans
            .iter()
            .any(|s| s.token == TokenType::Comment && &text[s.start..s.end] == "# note"));
    }
}
