//! Token categories and spans
//!
//! This module defines the semantic token categories the tokenizer can
//! assign to text, and the span type it emits.

/// Semantic token categories for syntax highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Language keywords (if, else, fn, let, etc.)
    Keyword,
    /// Built-in functions and values (len, println, NULL, etc.)
    Builtin,
    /// String literals and include paths
    String,
    /// Numeric literals (integers, floats, hex)
    Number,
    /// Comments, single- and multi-line
    Comment,
    /// Decorators and annotations (@property)
    Decorator,
    /// Preprocessor directives (#include, #define)
    Preprocessor,
    /// Operators (+, -, *, /, etc.)
    Operator,
    /// Function names at call sites
    Function,
    /// Class names at definition sites
    ClassName,
    /// Markup tag names (div, body)
    Tag,
    /// Markup attribute names (href=, class=)
    Attribute,
    /// CSS property names (color:, margin:)
    Property,
    /// Plain identifiers
    Identifier,
    /// Anything no rule claims
    Default,
}

impl TokenType {
    /// Get a human-readable name for this token category
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Keyword => "Keyword",
            TokenType::Builtin => "Builtin",
            TokenType::String => "String",
            TokenType::Number => "Number",
            TokenType::Comment => "Comment",
            TokenType::Decorator => "Decorator",
            TokenType::Preprocessor => "Preprocessor",
            TokenType::Operator => "Operator",
            TokenType::Function => "Function",
            TokenType::ClassName => "ClassName",
            TokenType::Tag => "Tag",
            TokenType::Attribute => "Attribute",
            TokenType::Property => "Property",
            TokenType::Identifier => "Identifier",
            TokenType::Default => "Default",
        }
    }

    /// Parse a token category from its name (for TOML profile loading)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Keyword" => Some(TokenType::Keyword),
            "Builtin" => Some(TokenType::Builtin),
            "String" => Some(TokenType::String),
            "Number" => Some(TokenType::Number),
            "Comment" => Some(TokenType::Comment),
            "Decorator" => Some(TokenType::Decorator),
            "Preprocessor" => Some(TokenType::Preprocessor),
            "Operator" => Some(TokenType::Operator),
            "Function" => Some(TokenType::Function),
            "ClassName" => Some(TokenType::ClassName),
            "Tag" => Some(TokenType::Tag),
            "Attribute" => Some(TokenType::Attribute),
            "Property" => Some(TokenType::Property),
            "Identifier" => Some(TokenType::Identifier),
            "Default" => Some(TokenType::Default),
            _ => None,
        }
    }

    /// All categories, for exhaustive style-map checks
    pub fn all() -> &'static [TokenType] {
        &[
            TokenType::Keyword,
            TokenType::Builtin,
            TokenType::String,
            TokenType::Number,
            TokenType::Comment,
            TokenType::Decorator,
            TokenType::Preprocessor,
            TokenType::Operator,
            TokenType::Function,
            TokenType::ClassName,
            TokenType::Tag,
            TokenType::Attribute,
            TokenType::Property,
            TokenType::Identifier,
            TokenType::Default,
        ]
    }
}

/// A tagged span of text within one block
///
/// Half-open byte range `[start, end)`. The spans emitted for a block are
/// sorted by start offset, never overlap, and together cover the block
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    /// Token category for this span
    pub token: TokenType,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, token: TokenType) -> Self {
        Self { start, end, token }
    }

    /// Check if this span contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Get the length of this span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for token in TokenType::all() {
            assert_eq!(TokenType::from_name(token.name()), Some(*token));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(TokenType::from_name("NotAToken"), None);
        assert_eq!(TokenType::from_name(""), None);
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(5, 10, TokenType::Keyword);
        assert!(!span.contains(4));
        assert!(span.contains(5));
        assert!(span.contains(9));
        assert!(!span.contains(10));
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
    }
}
