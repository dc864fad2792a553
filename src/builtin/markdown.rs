//! Markdown profile
//!
//! Built rule by rule rather than from a word list; markdown has no
//! keywords, only line shapes.

use crate::error::Result;
use crate::profile::LanguageProfile;
use crate::rules::{DelimiterRule, PatternRule};
use crate::tokens::TokenType;

pub fn markdown() -> Result<LanguageProfile> {
    let mut lang = LanguageProfile::plain("Markdown");
    lang.add_extension("md");
    lang.add_extension("markdown");
    lang.add_extension("mdown");
    lang.add_extension("mkd");

    // Fenced code blocks span lines.
    let id = lang.next_state_id();
    lang.add_delimiter(DelimiterRule::new(
        "code_fence",
        r"^```",
        r"^```",
        TokenType::String,
        id,
    )?);

    lang.add_rule(PatternRule::new(
        "header",
        r"^#{1,6}\s+.*$",
        TokenType::Keyword,
    )?);
    lang.add_rule(PatternRule::new(
        "blockquote",
        r"^>\s+.*$",
        TokenType::Comment,
    )?);
    lang.add_rule(PatternRule::new(
        "inline_code",
        r"`[^`]+`",
        TokenType::String,
    )?);
    lang.add_rule(PatternRule::new(
        "bold",
        r"\*\*[^*]+\*\*|__[^_]+__",
        TokenType::ClassName,
    )?);
    lang.add_rule(PatternRule::new(
        "italic",
        r"\*[^*]+\*|_[^_]+_",
        TokenType::Decorator,
    )?);
    lang.add_rule(PatternRule::new(
        "image",
        r"!\[[^\]]*\]\([^)]+\)",
        TokenType::Function,
    )?);
    lang.add_rule(PatternRule::new(
        "link",
        r"\[[^\]]+\]\([^)]+\)|\[[^\]]+\]\[[^\]]*\]",
        TokenType::Function,
    )?);
    lang.add_rule(PatternRule::new(
        "horizontal_rule",
        r"^(?:---+|\*\*\*+|___+)\s*$",
        TokenType::Operator,
    )?);
    lang.add_rule(PatternRule::new(
        "list_marker",
        r"^\s*(?:[-*+]|\d+\.)\s",
        TokenType::Operator,
    )?);
    lang.add_rule(PatternRule::new(
        "strikethrough",
        r"~~[^~]+~~",
        TokenType::Comment,
    )?);

    Ok(lang)
}
