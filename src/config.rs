//! Custom language profiles from a TOML file
//!
//! Hosts can ship extra languages without recompiling: a profile file
//! holds one `[[language]]` table per language, mirroring the fields of
//! the built-in descriptions plus optional raw rules.
//!
//! Example:
//! ```toml
//! [[language]]
//! name = "Ini"
//! extensions = ["ini", "cfg"]
//! line-comment = ";"
//! string-delimiters = ["\""]
//!
//! [[language.rules]]
//! name = "section"
//! pattern = '^\[[^\]]+\]'
//! token = "Keyword"
//! ```

use std::fs;
use std::path::Path;

use toml::{Table, Value};

use crate::error::{ProfileError, Result};
use crate::profile::{LanguageProfile, ProfileSpec};
use crate::rules::PatternRule;
use crate::tokens::TokenType;

/// A raw rule from a profile file, compiled during [`CustomProfile::build`]
struct RawRule {
    name: String,
    pattern: String,
    token: TokenType,
    capture: bool,
}

/// A parsed but not yet compiled custom language profile
pub struct CustomProfile {
    pub name: String,
    extensions: Vec<String>,
    keywords: Vec<String>,
    keywords_ignore_case: bool,
    builtins: Vec<String>,
    line_comment: Option<String>,
    block_comment: Option<(String, String)>,
    string_delimiters: Vec<char>,
    operators: bool,
    identifiers: bool,
    rules: Vec<RawRule>,
}

impl CustomProfile {
    /// Compile into a language profile
    ///
    /// Fails when a pattern does not compile; the caller decides whether
    /// to fall back.
    pub fn build(&self) -> Result<LanguageProfile> {
        let extensions: Vec<&str> = self.extensions.iter().map(String::as_str).collect();
        let keywords: Vec<&str> = self.keywords.iter().map(String::as_str).collect();
        let builtins: Vec<&str> = self.builtins.iter().map(String::as_str).collect();

        let mut profile = ProfileSpec {
            name: &self.name,
            extensions: &extensions,
            keywords: &keywords,
            keywords_ignore_case: self.keywords_ignore_case,
            builtins: &builtins,
            line_comment: self.line_comment.as_deref(),
            block_comment: self
                .block_comment
                .as_ref()
                .map(|(open, close)| (open.as_str(), close.as_str())),
            string_delimiters: &self.string_delimiters,
            operators: self.operators,
            identifiers: self.identifiers,
            ..ProfileSpec::default()
        }
        .build()?;

        for rule in &self.rules {
            let compiled = if rule.capture {
                PatternRule::with_capture(&rule.name, &rule.pattern, rule.token)?
            } else {
                PatternRule::new(&rule.name, &rule.pattern, rule.token)?
            };
            profile.add_rule(compiled);
        }
        Ok(profile)
    }

    /// Plain-text stand-in carrying this profile's name and extensions
    ///
    /// Used when [`build`](Self::build) fails, so files of the language
    /// still resolve (uncolored) instead of erroring on every open.
    pub fn fallback(&self) -> LanguageProfile {
        let mut profile = LanguageProfile::plain(&self.name);
        for ext in &self.extensions {
            profile.add_extension(ext);
        }
        profile
    }
}

/// Read and parse a profile file
pub fn load_profiles(path: &Path) -> Result<Vec<CustomProfile>> {
    parse_profiles(&fs::read_to_string(path)?)
}

/// Parse profile file contents
pub fn parse_profiles(contents: &str) -> Result<Vec<CustomProfile>> {
    let table: Table = contents.parse()?;
    let mut profiles = Vec::new();

    let Some(languages) = table.get("language").and_then(Value::as_array) else {
        return Ok(profiles);
    };
    for entry in languages {
        let Some(entry) = entry.as_table() else {
            continue;
        };
        profiles.push(parse_language(entry)?);
    }
    Ok(profiles)
}

fn parse_language(entry: &Table) -> Result<CustomProfile> {
    let name = entry
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ProfileError::MissingField {
            profile: entry
                .get("name")
                .map(Value::to_string)
                .unwrap_or_else(|| "?".into()),
            field: "name".into(),
        })?;

    let block_comment = match entry.get("block-comment").and_then(Value::as_array) {
        Some(pair) => {
            let open = pair.first().and_then(Value::as_str);
            let close = pair.get(1).and_then(Value::as_str);
            match (open, close) {
                (Some(open), Some(close)) => Some((open.to_string(), close.to_string())),
                _ => {
                    return Err(ProfileError::MissingField {
                        profile: name,
                        field: "block-comment".into(),
                    })
                }
            }
        }
        None => None,
    };

    let mut rules = Vec::new();
    if let Some(entries) = entry.get("rules").and_then(Value::as_array) {
        for rule in entries {
            let Some(rule) = rule.as_table() else {
                continue;
            };
            rules.push(parse_rule(&name, rule)?);
        }
    }

    Ok(CustomProfile {
        extensions: str_list(entry, "extensions"),
        keywords: str_list(entry, "keywords"),
        keywords_ignore_case: bool_field(entry, "case-insensitive"),
        builtins: str_list(entry, "builtins"),
        line_comment: str_field(entry, "line-comment"),
        block_comment,
        string_delimiters: str_list(entry, "string-delimiters")
            .iter()
            .filter_map(|s| s.chars().next())
            .collect(),
        operators: bool_field(entry, "operators"),
        identifiers: bool_field(entry, "identifiers"),
        rules,
        name,
    })
}

fn parse_rule(profile: &str, rule: &Table) -> Result<RawRule> {
    let field = |key: &str| {
        str_field(rule, key).ok_or_else(|| ProfileError::MissingField {
            profile: profile.to_string(),
            field: format!("rules.{key}"),
        })
    };
    let name = field("name")?;
    let pattern = field("pattern")?;
    let token_name = field("token")?;
    let token = TokenType::from_name(&token_name)
        .ok_or_else(|| ProfileError::UnknownToken(token_name))?;
    Ok(RawRule {
        name,
        pattern,
        token,
        capture: bool_field(rule, "capture"),
    })
}

fn str_field(table: &Table, key: &str) -> Option<String> {
    table.get(key).and_then(Value::as_str).map(str::to_string)
}

fn str_list(table: &Table, key: &str) -> Vec<String> {
    table
        .get(key)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn bool_field(table: &Table, key: &str) -> bool {
    table.get(key).and_then(Value::as_bool).unwrap_or(false)
}
