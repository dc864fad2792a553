//! Language registry
//!
//! Holds every language profile known to the process. Built once at
//! startup from the built-in set (plus any custom profiles from a config
//! file), then read-only: it can be shared by reference across documents
//! and threads.
//!
//! A language whose profile fails to compile is reported once with a
//! warning and falls back to the plain-text profile; the registry itself
//! never fails to construct.

use std::collections::HashMap;
use std::path::Path;

use crate::builtin;
use crate::config;
use crate::error::Result;
use crate::profile::LanguageProfile;

/// Immutable registry of language profiles
pub struct LanguageRegistry {
    /// Profiles by language name
    profiles: HashMap<String, LanguageProfile>,
    /// Lowercase extension to language name
    extensions: HashMap<String, String>,
    /// Fallback profile with no rules
    plain: LanguageProfile,
}

impl LanguageRegistry {
    /// Build the registry from the built-in languages
    pub fn new() -> Self {
        let mut registry = Self {
            profiles: HashMap::new(),
            extensions: HashMap::new(),
            plain: LanguageProfile::plain("Plain"),
        };

        for profile in builtin::all_profiles() {
            match profile {
                Ok(profile) => registry.add(profile),
                Err(err) => tracing::warn!("built-in language profile failed to load: {err}"),
            }
        }

        registry
    }

    /// Build the registry and extend it with custom profiles from a TOML
    /// file
    ///
    /// A custom profile with a bad pattern is registered as plain text
    /// under its own name and extensions, so files of that language still
    /// open (uncolored). An unreadable or unparsable file is an error.
    pub fn with_custom(path: &Path) -> Result<Self> {
        let mut registry = Self::new();
        registry.load_custom(path)?;
        Ok(registry)
    }

    /// Load custom profiles from a TOML file into this registry
    ///
    /// Returns how many profiles were added (fallbacks included).
    pub fn load_custom(&mut self, path: &Path) -> Result<usize> {
        let mut count = 0;
        for entry in config::load_profiles(path)? {
            match entry.build() {
                Ok(profile) => self.add(profile),
                Err(err) => {
                    tracing::warn!(
                        language = %entry.name,
                        "custom language profile failed to load, using plain text: {err}"
                    );
                    self.add(entry.fallback());
                }
            }
            count += 1;
        }
        Ok(count)
    }

    /// Add a profile, mapping its extensions
    ///
    /// A later profile with the same name or extensions replaces the
    /// earlier mapping.
    pub fn add(&mut self, profile: LanguageProfile) {
        for ext in &profile.extensions {
            self.extensions.insert(ext.clone(), profile.name.clone());
        }
        self.profiles.insert(profile.name.clone(), profile);
    }

    /// Get a profile by exact language name
    pub fn get(&self, name: &str) -> Option<&LanguageProfile> {
        self.profiles.get(name)
    }

    /// Get a profile by name, falling back to plain text
    pub fn resolve(&self, name: &str) -> &LanguageProfile {
        self.get(name).unwrap_or(&self.plain)
    }

    /// Detect the language name for a file path, by extension
    pub fn detect(&self, path: &Path) -> Option<&str> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        self.extensions.get(&ext).map(String::as_str)
    }

    /// Get the profile for a file path, falling back to plain text
    pub fn resolve_path(&self, path: &Path) -> &LanguageProfile {
        match self.detect(path) {
            Some(name) => self.resolve(name),
            None => &self.plain,
        }
    }

    /// The plain-text fallback profile
    pub fn plain(&self) -> &LanguageProfile {
        &self.plain
    }

    /// All language names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_builtin_languages() {
        let registry = LanguageRegistry::new();
        assert_eq!(registry.detect(Path::new("main.rs")), Some("Rust"));
        assert_eq!(registry.detect(Path::new("test.py")), Some("Python"));
        assert_eq!(registry.detect(Path::new("Cargo.toml")), Some("TOML"));
        assert_eq!(registry.detect(Path::new("index.HTML")), Some("HTML"));
        assert_eq!(registry.detect(Path::new("main.c")), Some("C"));
        assert_eq!(registry.detect(Path::new("main.cpp")), Some("C++"));
        assert_eq!(registry.detect(Path::new("no_extension")), None);
        assert_eq!(registry.detect(Path::new("photo.jpeg")), None);
    }

    #[test]
    fn test_resolve_falls_back_to_plain() {
        let registry = LanguageRegistry::new();
        assert_eq!(registry.resolve("Fortran").name, "Plain");
        assert_eq!(registry.resolve_path(Path::new("a.xyz")).name, "Plain");
        assert_eq!(registry.resolve("Rust").name, "Rust");
    }

    #[test]
    fn test_all_twenty_builtins_registered() {
        let registry = LanguageRegistry::new();
        assert_eq!(registry.names().len(), 20);
        for name in [
            "Python", "JavaScript", "TypeScript", "Java", "C#", "C", "C++", "Go", "Rust",
            "HTML", "CSS", "XML", "JSON", "YAML", "TOML", "SQL", "Bash", "Ruby", "PHP",
            "Markdown",
        ] {
            assert!(registry.get(name).is_some(), "missing {name}");
        }
    }
}
