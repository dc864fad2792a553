//! Language profiles and the block tokenizer
//!
//! A [`LanguageProfile`] combines pattern rules and delimiter rules for one
//! language. [`LanguageProfile::tokenize`] is the central algorithm: it
//! turns one block of text plus an incoming lexical state into a list of
//! spans that exactly tile the block, plus the outgoing state for the next
//! block.
//!
//! Most profiles are assembled from a declarative [`ProfileSpec`]: a
//! static description of keywords, builtins, comment markers and string
//! delimiters from which the generic rule set is generated.

use regex::escape;

use crate::error::Result;
use crate::rules::{DelimiterRule, LexState, PatternRule};
use crate::tokens::{Span, TokenType};

/// A complete language profile for syntax highlighting
///
/// Immutable once built; shared by reference across documents and threads.
pub struct LanguageProfile {
    /// Language name (e.g., "Rust", "Python")
    pub name: String,
    /// File extensions, lowercase, without the dot (e.g., ["py", "pyw"])
    pub extensions: Vec<String>,
    /// Pattern rules in precedence order (earlier rules claim text first)
    rules: Vec<PatternRule>,
    /// Multi-line delimiter rules; state id = 1-based position
    delimiters: Vec<DelimiterRule>,
}

/// A candidate match while scanning a block
enum Hit<'p> {
    Rule(&'p PatternRule, usize, usize),
    Delim(&'p DelimiterRule, usize, usize),
}

impl Hit<'_> {
    fn start(&self) -> usize {
        match self {
            Hit::Rule(_, start, _) | Hit::Delim(_, start, _) => *start,
        }
    }
}

impl LanguageProfile {
    /// Create a profile with no rules (plain text)
    pub fn plain(name: &str) -> Self {
        Self {
            name: name.to_string(),
            extensions: Vec::new(),
            rules: Vec::new(),
            delimiters: Vec::new(),
        }
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.to_lowercase());
    }

    /// Append a pattern rule (lowest precedence so far)
    pub fn add_rule(&mut self, rule: PatternRule) {
        self.rules.push(rule);
    }

    /// Append a delimiter rule; its state id must be `delimiters.len() + 1`
    pub fn add_delimiter(&mut self, rule: DelimiterRule) {
        debug_assert_eq!(rule.state_id as usize, self.delimiters.len() + 1);
        self.delimiters.push(rule);
    }

    /// Next free delimiter state id
    pub fn next_state_id(&self) -> u8 {
        self.delimiters.len() as u8 + 1
    }

    /// Look up a delimiter rule by state id
    fn delimiter(&self, state_id: u8) -> Option<&DelimiterRule> {
        if state_id == 0 {
            return None;
        }
        self.delimiters.get(state_id as usize - 1)
    }

    /// The delimiter state id for a rule name, if the profile has it
    ///
    /// Convenience for hosts and tests that need to compare outgoing
    /// states against a named construct.
    pub fn state_id_of(&self, name: &str) -> Option<u8> {
        self.delimiters
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.state_id)
    }

    /// Tokenize one block of text
    ///
    /// Deterministic: identical `(text, incoming)` always yields identical
    /// output. The returned spans are sorted, non-overlapping, and cover
    /// `[0, text.len())` exactly; unclaimed text is tagged
    /// [`TokenType::Default`]. Never fails.
    pub fn tokenize(&self, text: &str, incoming: LexState) -> (Vec<Span>, LexState) {
        let mut spans = Vec::new();
        let mut pos = 0;

        // Resume an open multi-line construct from the previous block.
        if let LexState::Inside(id) = incoming {
            if let Some(rule) = self.delimiter(id) {
                match rule.find_end(text, 0) {
                    Some(end) => {
                        push_span(&mut spans, 0, end, rule.token);
                        pos = end;
                    }
                    None => {
                        push_span(&mut spans, 0, text.len(), rule.token);
                        return (spans, incoming);
                    }
                }
            }
            // A state id the profile does not know (profile switched under
            // the host) degrades to a plain scan.
        }

        while pos < text.len() {
            match self.earliest_hit(text, pos) {
                None => {
                    push_span(&mut spans, pos, text.len(), TokenType::Default);
                    pos = text.len();
                }
                Some(Hit::Delim(rule, start, open_end)) => {
                    push_span(&mut spans, pos, start, TokenType::Default);
                    match rule.find_end(text, open_end) {
                        Some(close) => {
                            push_span(&mut spans, start, close, rule.token);
                            pos = close;
                        }
                        None => {
                            push_span(&mut spans, start, text.len(), rule.token);
                            return (spans, LexState::Inside(rule.state_id));
                        }
                    }
                }
                Some(Hit::Rule(rule, start, end)) => {
                    push_span(&mut spans, pos, start, TokenType::Default);
                    push_span(&mut spans, start, end, rule.token);
                    pos = end;
                }
            }
        }

        (spans, LexState::Default)
    }

    /// Earliest match among delimiter openers and pattern rules
    ///
    /// Delimiters are tried before pattern rules so an opener wins an
    /// equal-offset tie (`/*` is never swallowed by an operator rule);
    /// among rules of the same kind, declared order breaks ties.
    fn earliest_hit(&self, text: &str, from: usize) -> Option<Hit<'_>> {
        let mut best: Option<Hit> = None;

        for rule in &self.delimiters {
            if let Some((start, end)) = rule.find_start(text, from) {
                if best.as_ref().map_or(true, |b| start < b.start()) {
                    best = Some(Hit::Delim(rule, start, end));
                    if start == from {
                        break;
                    }
                }
            }
        }
        if let Some(hit) = &best {
            if hit.start() == from {
                return best;
            }
        }

        for rule in &self.rules {
            if let Some((start, end)) = rule.find_at(text, from) {
                if best.as_ref().map_or(true, |b| start < b.start()) {
                    best = Some(Hit::Rule(rule, start, end));
                    if start == from {
                        break;
                    }
                }
            }
        }

        best
    }
}

/// Append a span, merging into the previous one when contiguous and
/// same-token, and dropping empty ranges
fn push_span(spans: &mut Vec<Span>, start: usize, end: usize, token: TokenType) {
    if start >= end {
        return;
    }
    if let Some(last) = spans.last_mut() {
        if last.end == start && last.token == token {
            last.end = end;
            return;
        }
    }
    spans.push(Span::new(start, end, token));
}

/// Declarative description of a language, from which the generic rule set
/// is generated
///
/// Mirrors one entry of the original static language table: keyword and
/// builtin word lists, comment markers, string delimiters, plus a handful
/// of flags for the language-specific rules (C preprocessor, Python
/// decorators, markup attributes).
#[derive(Default)]
pub struct ProfileSpec<'a> {
    pub name: &'a str,
    pub extensions: &'a [&'a str],
    pub keywords: &'a [&'a str],
    /// Match keywords case-insensitively (SQL)
    pub keywords_ignore_case: bool,
    pub builtins: &'a [&'a str],
    /// Markup tag names; a tag rule is placed ahead of all bracket rules
    pub tags: &'a [&'a str],
    /// CSS property names, matched before a `:`
    pub properties: &'a [&'a str],
    /// Line comment marker (`//`, `#`, `--`)
    pub line_comment: Option<&'a str>,
    /// Block comment markers, matched literally
    pub block_comment: Option<(&'a str, &'a str)>,
    /// Single-line string quote characters
    pub string_delimiters: &'a [char],
    /// C/C++ preprocessor directives and `<...>` include paths, claimed
    /// ahead of every other rule
    pub preprocessor: bool,
    /// `@name` decorator rule (Python)
    pub decorators: bool,
    /// `class NAME` definition rule (Python)
    pub class_names: bool,
    /// ` name=` attribute rule (HTML/XML)
    pub attributes: bool,
    /// Triple-quoted string delimiters (Python)
    pub triple_strings: bool,
    /// Generic operator rule
    pub operators: bool,
    /// Trailing identifier rule
    pub identifiers: bool,
}

impl ProfileSpec<'_> {
    /// Compile this description into a profile
    ///
    /// Fails only on an uncompilable pattern; the registry treats that as
    /// a startup-time failure for this one language.
    pub fn build(&self) -> Result<LanguageProfile> {
        let mut profile = LanguageProfile::plain(self.name);
        for ext in self.extensions {
            profile.add_extension(ext);
        }

        // Delimiters. Ids are their 1-based positions.
        if let Some((open, close)) = self.block_comment {
            let id = profile.next_state_id();
            profile.add_delimiter(DelimiterRule::new(
                "block_comment",
                &escape(open),
                &escape(close),
                TokenType::Comment,
                id,
            )?);
        }
        if self.triple_strings {
            let id = profile.next_state_id();
            profile.add_delimiter(DelimiterRule::with_escape(
                "triple_double",
                r#"""""#,
                r#"""""#,
                TokenType::String,
                id,
                '\\',
            )?);
            let id = profile.next_state_id();
            profile.add_delimiter(DelimiterRule::with_escape(
                "triple_single",
                "'''",
                "'''",
                TokenType::String,
                id,
                '\\',
            )?);
        }

        // Pattern rules, in precedence order.
        if self.preprocessor {
            profile.add_rule(PatternRule::new(
                "preprocessor",
                r"#[ \t]*(?:include|define|ifdef|ifndef|if|else|elif|endif|pragma|error|warning|undef)\b",
                TokenType::Preprocessor,
            )?);
            profile.add_rule(PatternRule::new(
                "include_path",
                r"<[^<>]+>",
                TokenType::String,
            )?);
        }

        if !self.tags.is_empty() {
            let alt = self.tags.join("|");
            profile.add_rule(PatternRule::with_capture(
                "tag",
                &format!(r"(?i)</?({alt})(?:\s|>|/)"),
                TokenType::Tag,
            )?);
        }

        if let Some(marker) = self.line_comment {
            profile.add_rule(PatternRule::new(
                "line_comment",
                &format!("{}.*$", escape(marker)),
                TokenType::Comment,
            )?);
        }

        if self.decorators {
            profile.add_rule(PatternRule::new(
                "decorator",
                r"@[A-Za-z_][A-Za-z0-9_]*",
                TokenType::Decorator,
            )?);
        }
        if self.class_names {
            profile.add_rule(PatternRule::with_capture(
                "class_name",
                r"\bclass\s+([A-Za-z_][A-Za-z0-9_]*)",
                TokenType::ClassName,
            )?);
        }

        if !self.keywords.is_empty() {
            let flags = if self.keywords_ignore_case { "(?i)" } else { "" };
            let alt = join_words(self.keywords);
            profile.add_rule(PatternRule::new(
                "keyword",
                &format!(r"{flags}\b(?:{alt})\b"),
                TokenType::Keyword,
            )?);
        }
        if !self.builtins.is_empty() {
            let alt = join_words(self.builtins);
            profile.add_rule(PatternRule::new(
                "builtin",
                &format!(r"\b(?:{alt})\b"),
                TokenType::Builtin,
            )?);
        }

        if !self.properties.is_empty() {
            let alt = join_words(self.properties);
            profile.add_rule(PatternRule::with_capture(
                "property",
                &format!(r"\b({alt})\s*:"),
                TokenType::Property,
            )?);
        }
        if self.attributes {
            profile.add_rule(PatternRule::with_capture(
                "attribute",
                r"\s([a-zA-Z-]+)=",
                TokenType::Attribute,
            )?);
        }

        for &quote in self.string_delimiters {
            let (name, pattern) = match quote {
                '"' => ("double_string", r#""(?:[^"\\]|\\.)*""#),
                '\'' => ("single_string", r"'(?:[^'\\]|\\.)*'"),
                '`' => ("backtick_string", r"`(?:[^`\\]|\\.)*`"),
                _ => continue,
            };
            profile.add_rule(PatternRule::new(name, pattern, TokenType::String)?);
        }

        profile.add_rule(PatternRule::new(
            "hex",
            r"\b0x[0-9a-fA-F]+\b",
            TokenType::Number,
        )?);
        profile.add_rule(PatternRule::new(
            "number",
            r"\b[0-9]+\.?[0-9]*(?:[eE][+-]?[0-9]+)?\b",
            TokenType::Number,
        )?);

        profile.add_rule(PatternRule::with_capture(
            "function_call",
            r"\b([A-Za-z_][A-Za-z0-9_]*)\s*\(",
            TokenType::Function,
        )?);

        if self.operators {
            // Single characters; adjacent operator spans merge, so runs
            // like `>=` still render as one span without ever swallowing
            // a delimiter opener.
            profile.add_rule(PatternRule::new(
                "operator",
                r"[+\-*/%&|^!<>=~?:]",
                TokenType::Operator,
            )?);
        }
        if self.identifiers {
            profile.add_rule(PatternRule::new(
                "identifier",
                r"\b[A-Za-z_][A-Za-z0-9_]*\b",
                TokenType::Identifier,
            )?);
        }

        Ok(profile)
    }
}

/// Escape and join a word list into an alternation body
fn join_words(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_profile() -> LanguageProfile {
        ProfileSpec {
            name: "Test",
            extensions: &["tst"],
            keywords: &["if", "else", "return"],
            builtins: &["print"],
            line_comment: Some("//"),
            block_comment: Some(("/*", "*/")),
            string_delimiters: &['"'],
            operators: true,
            identifiers: true,
            ..ProfileSpec::default()
        }
        .build()
        .unwrap()
    }

    fn assert_tiles(text: &str, spans: &[Span]) {
        let mut pos = 0;
        for span in spans {
            assert_eq!(span.start, pos, "gap or overlap before {span:?}");
            assert!(span.end > span.start, "empty span {span:?}");
            pos = span.end;
        }
        assert_eq!(pos, text.len(), "spans do not reach end of block");
    }

    #[test]
    fn test_keywords_and_numbers() {
        let profile = test_profile();
        let text = "if x > 42 { return; }";
        let (spans, out) = profile.tokenize(text, LexState::Default);
        assert!(out.is_default());
        assert_tiles(text, &spans);
        assert!(spans.contains(&Span::new(0, 2, TokenType::Keyword)));
        assert!(spans.contains(&Span::new(7, 9, TokenType::Number)));
        assert!(spans.contains(&Span::new(12, 18, TokenType::Keyword)));
    }

    #[test]
    fn test_line_comment_beats_operator() {
        let profile = test_profile();
        let text = "x = 1 // note";
        let (spans, _) = profile.tokenize(text, LexState::Default);
        assert_tiles(text, &spans);
        assert!(spans.contains(&Span::new(6, 13, TokenType::Comment)));
    }

    #[test]
    fn test_block_comment_opens() {
        let profile = test_profile();
        let (spans, out) = profile.tokenize("code /* open", LexState::Default);
        assert_eq!(out, LexState::Inside(1));
        assert_eq!(spans.last().unwrap().token, TokenType::Comment);
        assert_eq!(spans.last().unwrap().end, "code /* open".len());
    }

    #[test]
    fn test_block_comment_continues_and_closes() {
        let profile = test_profile();

        let (spans, out) = profile.tokenize("still inside", LexState::Inside(1));
        assert_eq!(out, LexState::Inside(1));
        assert_eq!(spans, vec![Span::new(0, 12, TokenType::Comment)]);

        let text = "end */ return;";
        let (spans, out) = profile.tokenize(text, LexState::Inside(1));
        assert!(out.is_default());
        assert_tiles(text, &spans);
        assert_eq!(spans[0], Span::new(0, 6, TokenType::Comment));
        assert!(spans.contains(&Span::new(7, 13, TokenType::Keyword)));
    }

    #[test]
    fn test_block_comment_within_one_block() {
        let profile = test_profile();
        let text = "a /* b */ c";
        let (spans, out) = profile.tokenize(text, LexState::Default);
        assert!(out.is_default());
        assert_tiles(text, &spans);
        assert!(spans.contains(&Span::new(2, 9, TokenType::Comment)));
    }

    #[test]
    fn test_operator_never_swallows_comment_opener() {
        let profile = test_profile();
        // `=/*`: the operator rule claims `=`, then the delimiter opens.
        let (spans, out) = profile.tokenize("x=/*", LexState::Default);
        assert_eq!(out, LexState::Inside(1));
        assert!(spans.contains(&Span::new(1, 2, TokenType::Operator)));
        assert!(spans.contains(&Span::new(2, 4, TokenType::Comment)));
    }

    #[test]
    fn test_string_claims_keyword() {
        let profile = test_profile();
        let text = r#"print("if else")"#;
        let (spans, _) = profile.tokenize(text, LexState::Default);
        assert_tiles(text, &spans);
        assert!(spans.contains(&Span::new(6, 15, TokenType::String)));
        assert!(!spans.iter().any(|s| s.token == TokenType::Keyword));
    }

    #[test]
    fn test_unknown_state_degrades_to_plain_scan() {
        let profile = test_profile();
        let text = "return 1";
        let (spans, out) = profile.tokenize(text, LexState::Inside(99));
        assert!(out.is_default());
        assert_tiles(text, &spans);
        assert!(spans.contains(&Span::new(0, 6, TokenType::Keyword)));
    }

    #[test]
    fn test_empty_block() {
        let profile = test_profile();
        let (spans, out) = profile.tokenize("", LexState::Default);
        assert!(spans.is_empty());
        assert!(out.is_default());

        let (spans, out) = profile.tokenize("", LexState::Inside(1));
        assert!(spans.is_empty());
        assert_eq!(out, LexState::Inside(1));
    }

    #[test]
    fn test_determinism() {
        let profile = test_profile();
        let text = "if a /* b */ \"c\" 12 zz";
        let first = profile.tokenize(text, LexState::Default);
        for _ in 0..3 {
            assert_eq!(profile.tokenize(text, LexState::Default), first);
        }
    }

    #[test]
    fn test_plain_profile_single_default_span() {
        let profile = LanguageProfile::plain("Plain");
        let text = "anything at all";
        let (spans, out) = profile.tokenize(text, LexState::Default);
        assert!(out.is_default());
        assert_eq!(spans, vec![Span::new(0, text.len(), TokenType::Default)]);
    }

    #[test]
    fn test_state_id_of() {
        let profile = test_profile();
        assert_eq!(profile.state_id_of("block_comment"), Some(1));
        assert_eq!(profile.state_id_of("no_such_rule"), None);
    }
}
