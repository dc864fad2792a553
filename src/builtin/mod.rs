//! Built-in language profiles
//!
//! Twenty languages, each described declaratively and compiled into a
//! [`LanguageProfile`](crate::profile::LanguageProfile) at registry
//! construction time.

mod c;
mod data;
mod go;
mod java;
mod javascript;
mod markdown;
mod python;
mod ruby;
mod rust;
mod shell;
mod sql;
mod web;

use crate::error::Result;
use crate::profile::LanguageProfile;

/// Build every built-in profile
///
/// Individual results so the registry can report a failing language and
/// keep the rest.
pub fn all_profiles() -> Vec<Result<LanguageProfile>> {
    vec![
        python::python(),
        javascript::javascript(),
        javascript::typescript(),
        java::java(),
        java::csharp(),
        c::c(),
        c::cpp(),
        go::go(),
        rust::rust(),
        web::html(),
        web::css(),
        web::xml(),
        data::json(),
        data::yaml(),
        data::toml(),
        sql::sql(),
        shell::bash(),
        ruby::ruby(),
        ruby::php(),
        markdown::markdown(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_profiles_build() {
        let profiles = all_profiles();
        assert_eq!(profiles.len(), 20);
        for profile in profiles {
            let profile = profile.expect("built-in profile failed to compile");
            assert!(!profile.name.is_empty());
            assert!(!profile.extensions.is_empty());
        }
    }

    #[test]
    fn test_no_duplicate_extensions() {
        let mut seen = std::collections::HashSet::new();
        for profile in all_profiles() {
            let profile = profile.unwrap();
            for ext in &profile.extensions {
                assert!(seen.insert(ext.clone()), "extension `{ext}` claimed twice");
            }
        }
    }
}
