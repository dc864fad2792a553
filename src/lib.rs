//! tintline - incremental multi-language syntax highlighting
//!
//! A deterministic, lexical-only highlighting engine:
//! - 20 built-in languages described by declarative rule tables, plus
//!   custom languages loaded from a TOML file
//! - multi-line lexical state (block comments, triple-quoted strings)
//!   carried between blocks, so edits re-tokenize only a minimal range
//! - spans that exactly tile each block, resolved to display attributes
//!   through a theme-aware style map
//!
//! The engine knows nothing about widgets, files or cursors: the host
//! passes block text in and gets spans and repaint indices back.

mod builtin;
mod config;
mod error;
mod profile;
mod registry;
mod rules;
mod schedule;
mod style;
mod tokens;

pub use config::{load_profiles, parse_profiles, CustomProfile};
pub use error::{ProfileError, Result};
pub use profile::{LanguageProfile, ProfileSpec};
pub use registry::LanguageRegistry;
pub use rules::{DelimiterRule, LexState, PatternRule};
pub use schedule::{BlockRecord, HighlightMap};
pub use style::{style_for, Color, Style, Theme};
pub use tokens::{Span, TokenType};
