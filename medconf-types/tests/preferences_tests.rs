use medconf_types::{FontFamily, Language, Preferences};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn load_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let prefs = Preferences::load(&dir.path().join("prefs.json"));
    assert_eq!(prefs, Preferences::default());
    assert_eq!(prefs.language, Language::Ar);
    assert_eq!(prefs.font_family, FontFamily::Cairo);
}

#[test]
fn load_corrupt_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, "{not json").unwrap();
    assert_eq!(Preferences::load(&path), Preferences::default());
}

#[test]
fn save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    let prefs = Preferences {
        language: Language::En,
        font_family: FontFamily::Tajawal,
    };
    prefs.save(&path).unwrap();
    assert_eq!(Preferences::load(&path), prefs);
}

#[test]
fn partial_document_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, r#"{"language": "en"}"#).unwrap();
    let prefs = Preferences::load(&path);
    assert_eq!(prefs.language, Language::En);
    assert_eq!(prefs.font_family, FontFamily::Cairo);
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope").join("prefs.json");
    assert!(Preferences::default().save(&path).is_err());
}

// ── FontFamily ───────────────────────────────────────────────────

#[test]
fn font_keys_parse_back() {
    for font in FontFamily::ALL {
        assert_eq!(font.key().parse::<FontFamily>().unwrap(), font);
    }
}

#[test]
fn font_serde_matches_key() {
    let json = serde_json::to_string(&FontFamily::NotoKufiArabic).unwrap();
    assert_eq!(json, "\"noto-kufi-arabic\"");
}

#[test]
fn unknown_font_is_error() {
    assert!("comic-sans".parse::<FontFamily>().is_err());
}

#[test]
fn css_family_quotes_named_fonts() {
    assert_eq!(FontFamily::Cairo.css_family(), "'Cairo', sans-serif");
    assert_eq!(FontFamily::System.css_family(), "system-ui, sans-serif");
}
