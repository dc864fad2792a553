//! Lexical rules
//!
//! Pattern rules match within a single block; delimiter rules describe
//! multi-line constructs and carry the lexical state that survives across
//! blocks. Both compile their patterns at construction time; a pattern
//! that does not compile is a profile-construction error, never a
//! tokenize-time failure.

use regex::Regex;

use crate::error::{ProfileError, Result};
use crate::tokens::TokenType;

/// A single-block pattern rule
///
/// Rules are tried in declared order; the order is the precedence
/// contract. A rule built with [`PatternRule::with_capture`] emits a span
/// over the pattern's first capture group instead of the whole match, so
/// context (a trailing `(` or `=`) can steer the match without being
/// claimed by it.
pub struct PatternRule {
    /// Name for diagnostics
    pub name: String,
    /// Compiled pattern
    pattern: Regex,
    /// Token category assigned to matches
    pub token: TokenType,
    /// Emit the first capture group rather than the whole match
    capture: bool,
}

impl PatternRule {
    /// Create a new pattern rule
    pub fn new(name: &str, pattern: &str, token: TokenType) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| ProfileError::Pattern {
            rule: name.to_string(),
            source,
        })?;
        Ok(Self {
            name: name.to_string(),
            pattern,
            token,
            capture: false,
        })
    }

    /// Create a rule whose span covers the first capture group
    pub fn with_capture(name: &str, pattern: &str, token: TokenType) -> Result<Self> {
        let mut rule = Self::new(name, pattern, token)?;
        rule.capture = true;
        Ok(rule)
    }

    /// Find the earliest claimable span starting at or after `from`
    ///
    /// The whole block is searched so that anchors (`^`, `$`) and match
    /// context already claimed by earlier rules (the `class` in
    /// `class NAME`, the whitespace before an attribute) keep working;
    /// only the claimable span itself must lie past the cursor. Empty
    /// matches are ignored.
    pub fn find_at(&self, text: &str, from: usize) -> Option<(usize, usize)> {
        if from > text.len() {
            return None;
        }
        if self.capture {
            for caps in self.pattern.captures_iter(text) {
                let Some(group) = caps.get(1) else { continue };
                if group.start() >= from && group.end() > group.start() {
                    return Some((group.start(), group.end()));
                }
            }
        } else {
            for m in self.pattern.find_iter(text) {
                if m.start() >= from && m.end() > m.start() {
                    return Some((m.start(), m.end()));
                }
            }
        }
        None
    }
}

/// A multi-line construct rule (block comments, triple-quoted strings)
///
/// The construct opens at `start` and closes at the first occurrence of
/// `end` after the opener (the first unescaped occurrence when an escape
/// character is set). Constructs whose start and end patterns are
/// identical close at that first occurrence; nesting is not supported.
pub struct DelimiterRule {
    /// Name for diagnostics
    pub name: String,
    /// Pattern that opens the construct
    start: Regex,
    /// Pattern that closes the construct
    end: Regex,
    /// Token category for the whole construct
    pub token: TokenType,
    /// Escape character honored in front of the end pattern
    escape: Option<char>,
    /// Per-profile lexical state id (1-based; 0 means no open construct)
    pub state_id: u8,
}

impl DelimiterRule {
    /// Create a new delimiter rule
    pub fn new(
        name: &str,
        start_pattern: &str,
        end_pattern: &str,
        token: TokenType,
        state_id: u8,
    ) -> Result<Self> {
        let compile = |p: &str| {
            Regex::new(p).map_err(|source| ProfileError::Pattern {
                rule: name.to_string(),
                source,
            })
        };
        Ok(Self {
            name: name.to_string(),
            start: compile(start_pattern)?,
            end: compile(end_pattern)?,
            token,
            escape: None,
            state_id,
        })
    }

    /// Create a delimiter rule whose end pattern can be escaped
    pub fn with_escape(
        name: &str,
        start_pattern: &str,
        end_pattern: &str,
        token: TokenType,
        state_id: u8,
        escape: char,
    ) -> Result<Self> {
        let mut rule = Self::new(name, start_pattern, end_pattern, token, state_id)?;
        rule.escape = Some(escape);
        Ok(rule)
    }

    /// Find the opener at or after `from`; absolute offsets
    pub fn find_start(&self, text: &str, from: usize) -> Option<(usize, usize)> {
        if from > text.len() {
            return None;
        }
        let m = self.start.find(&text[from..])?;
        if m.start() == m.end() {
            return None;
        }
        Some((from + m.start(), from + m.end()))
    }

    /// Find the offset just past the closer, searching from `from`
    ///
    /// Skips escaped occurrences when an escape character is set (an odd
    /// number of preceding escape characters means escaped).
    pub fn find_end(&self, text: &str, from: usize) -> Option<usize> {
        if from > text.len() {
            return None;
        }
        let rest = &text[from..];
        let mut pos = 0;
        while let Some(m) = self.end.find(&rest[pos..]) {
            let match_start = pos + m.start();
            let match_end = pos + m.end();
            if let Some(esc) = self.escape {
                let escapes = rest[..match_start]
                    .chars()
                    .rev()
                    .take_while(|&c| c == esc)
                    .count();
                if escapes % 2 == 1 {
                    pos = match_end;
                    continue;
                }
            }
            return Some(from + match_end);
        }
        None
    }
}

/// Lexical state carried between blocks
///
/// The single persistent value the tokenizer threads through a document:
/// which unterminated multi-line construct, if any, is open at the end of
/// a block. `Inside(id)` refers to the delimiter rule with that state id
/// in the active profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexState {
    /// No open construct
    #[default]
    Default,
    /// Inside the delimiter rule with this state id
    Inside(u8),
}

impl LexState {
    /// State for being inside a delimiter rule
    pub fn inside(state_id: u8) -> Self {
        LexState::Inside(state_id)
    }

    /// Check for the no-open-construct state
    pub fn is_default(&self) -> bool {
        matches!(self, LexState::Default)
    }
}
