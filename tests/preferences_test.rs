//! Tests for preference persistence and word list loading.

use std::fs;
use tempfile::TempDir;

use binary_words::{App, Catalog, Preferences, USER_SEQUENCE_ID};

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("prefs.toml");

    let prefs = Preferences::default()
        .with_selected_word_list_id("months-starsigns")
        .with_selected_sequence_id(USER_SEQUENCE_ID)
        .with_custom_sequence(Some("SEATJK".to_string()))
        .with_enable_psychological_profiling(true);
    prefs.save(&path).expect("Save failed");

    let loaded = Preferences::from_file(&path).expect("Load failed");
    assert_eq!(loaded, prefs);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let prefs = Preferences::load_or_default(dir.path().join("absent.toml")).expect("Defaults");
    assert_eq!(prefs, Preferences::default());
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "selected_word_list_id = [").expect("Write failed");

    let err = Preferences::load_or_default(&path).unwrap_err();
    assert!(err.message.contains("parse"));
}

#[test]
fn test_app_restores_saved_selection() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("prefs.toml");

    let mut app = App::new(Catalog::builtin(), Preferences::default());
    app.select_word_list("months-starsigns").expect("Known list");
    app.set_custom_sequence("mjas").expect("Valid letters");
    app.preferences().save(&path).expect("Save failed");

    let prefs = Preferences::from_file(&path).expect("Load failed");
    let restored = App::new(Catalog::builtin(), prefs);
    assert_eq!(restored.session().word_list().expect("Bound").id(), "months-starsigns");
    assert_eq!(restored.session().letters().to_string(), "MJAS");
}

#[test]
fn test_load_extra_word_lists() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("lists.toml");
    fs::write(
        &path,
        r#"
[[lists]]
id = "fruit"
name = "Fruit"
words = ["Apple", "Banana", "Cherry"]

[[lists]]
id = "default"
name = "Clash"
words = ["Nope"]
"#,
    )
    .expect("Write failed");

    let mut catalog = Catalog::builtin();
    let added = catalog.load_word_lists(&path).expect("Load failed");
    assert_eq!(added, 1);
    assert_eq!(catalog.word_list("fruit").expect("Loaded").len(), 3);
    assert_eq!(catalog.word_list("default").expect("Built-in").len(), 10);
}
