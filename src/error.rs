//! Error types for tintline

use thiserror::Error;

/// Result type alias for profile construction and config loading
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Errors raised while building a language profile
///
/// All of these are construction-time failures. Tokenization itself never
/// fails: once a profile exists, every input block produces a well-formed
/// span list.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("rule `{rule}` has an invalid pattern: {source}")]
    Pattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("unknown token category `{0}`")]
    UnknownToken(String),

    #[error("profile `{profile}` is missing field `{field}`")]
    MissingField { profile: String, field: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid profile file: {0}")]
    Parse(#[from] toml::de::Error),
}
