//! End-to-end scenarios: registry -> scheduler -> style map.

use std::path::Path;

use tintline::{
    parse_profiles, style_for, HighlightMap, LanguageRegistry, LexState, Theme, TokenType,
};

#[test]
fn include_line_under_cpp_profile() {
    let registry = LanguageRegistry::new();
    let profile = registry.resolve_path(Path::new("vec.cpp"));
    assert_eq!(profile.name, "C++");

    let text = "#include <vector>";
    let (spans, out) = profile.tokenize(text, LexState::Default);
    assert!(out.is_default());

    let styled: Vec<_> = spans
        .iter()
        .filter(|s| s.token != TokenType::Default)
        .collect();
    assert_eq!(styled.len(), 2);
    assert_eq!(
        (&text[styled[0].start..styled[0].end], styled[0].token),
        ("#include", TokenType::Preprocessor)
    );
    assert_eq!(
        (&text[styled[1].start..styled[1].end], styled[1].token),
        ("<vector>", TokenType::String)
    );
}

#[test]
fn comparison_under_non_c_profiles() {
    let registry = LanguageRegistry::new();
    for lang in ["Python", "Rust", "JavaScript", "Go", "Ruby"] {
        let profile = registry.resolve(lang);
        let text = "if (vec.size() < 10)";
        let (spans, _) = profile.tokenize(text, LexState::Default);
        assert!(
            !spans.iter().any(|s| s.token == TokenType::Preprocessor),
            "{lang} emitted a preprocessor span"
        );
        assert!(
            !spans
                .iter()
                .any(|s| s.token == TokenType::String && text[s.start..s.end].starts_with('<')),
            "{lang} claimed the angle bracket as a string"
        );
    }
}

#[test]
fn comment_opens_propagates_and_heals() {
    let registry = LanguageRegistry::new();
    let profile = registry.resolve_path(Path::new("demo.c"));
    let mut map = HighlightMap::new();

    let lines = vec!["int main(void) {", "    return 0;", "}"];
    map.highlight_all(&lines, profile);
    assert!(map.record(2).unwrap().outgoing.is_default());

    // Open a block comment on the first line: everything below turns
    // into comment text.
    let lines = vec!["int main(void) { /*", "    return 0;", "}"];
    let repaint = map.on_edit(0..1, &lines, profile);
    assert_eq!(repaint, vec![0, 1, 2]);
    for index in 1..3 {
        let spans = map.spans(index);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].token, TokenType::Comment);
    }

    // Close it again on line 1; line 2 heals back to plain code.
    let lines = vec!["int main(void) { /*", "    ret */ return 0;", "}"];
    let repaint = map.on_edit(1..2, &lines, profile);
    assert_eq!(repaint, vec![1, 2]);
    assert!(map
        .spans(1)
        .iter()
        .any(|s| s.token == TokenType::Keyword));
    assert!(map.record(2).unwrap().outgoing.is_default());

    // Editing the untouched last line alone repaints nothing new
    // downstream and stops immediately.
    let repaint = map.on_edit(2..3, &lines, profile);
    assert!(repaint.is_empty());
}

#[test]
fn theme_switch_keeps_span_geometry() {
    let registry = LanguageRegistry::new();
    let profile = registry.resolve("Python");
    let text = "def f(): return 1  # done";
    let (spans, _) = profile.tokenize(text, LexState::Default);

    // Spans are computed without any theme input; the style map resolves
    // them per theme without touching geometry.
    for span in &spans {
        let dark = style_for(span.token, Theme::Dark);
        let light = style_for(span.token, Theme::Light);
        let _ = (dark, light);
    }
    let number = spans.iter().find(|s| s.token == TokenType::Number).unwrap();
    assert_ne!(
        style_for(number.token, Theme::Dark),
        style_for(number.token, Theme::Light)
    );
}

#[test]
fn broken_custom_profile_falls_back_to_plain() {
    let mut registry = LanguageRegistry::new();
    let profiles = parse_profiles(
        r#"
[[language]]
name = "Weird"
extensions = ["wrd"]

[[language.rules]]
name = "broken"
pattern = '(?P<oops'
token = "Keyword"
"#,
    )
    .unwrap();

    for entry in profiles {
        match entry.build() {
            Ok(profile) => registry.add(profile),
            Err(_) => registry.add(entry.fallback()),
        }
    }

    let profile = registry.resolve_path(Path::new("notes.wrd"));
    assert_eq!(profile.name, "Weird");
    let (spans, out) = profile.tokenize("some text", LexState::Default);
    assert!(out.is_default());
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].token, TokenType::Default);
}

#[test]
fn custom_profile_loads_from_disk() {
    let path = std::env::temp_dir().join(format!("tintline-profiles-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        r#"
[[language]]
name = "Ini"
extensions = ["ini"]
line-comment = ";"
string-delimiters = ["\""]
"#,
    )
    .unwrap();

    let registry = LanguageRegistry::with_custom(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let profile = registry.resolve_path(Path::new("settings.ini"));
    assert_eq!(profile.name, "Ini");
    let (spans, _) = profile.tokenize("; a note", LexState::Default);
    assert_eq!(spans[0].token, TokenType::Comment);
}
