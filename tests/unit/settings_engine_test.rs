//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface:
//! default loading, persistence of changes, favorites and reset behavior.

use playground_browser::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use playground_browser::types::errors::SettingsError;
use playground_browser::types::settings::BrowserSettings;
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

/// When no config file exists on disk, `load()` returns the built-in defaults.
#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(
        settings,
        BrowserSettings::default(),
        "Loading without a config file must return default settings"
    );
    assert!(!settings.show_tabs_in_sidebar);
    assert_eq!(settings.homepage, "https://google.com");
    assert!(!settings.use_custom_homepage);
    assert!(!settings.beta_features);
}

/// A change made through `set_value` is visible to a fresh engine on the same file.
#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_value("homepage", serde_json::json!("https://www.rust-lang.org"))
            .unwrap();
        engine
            .set_value("use_custom_homepage", serde_json::Value::Bool(true))
            .unwrap();
    }

    {
        let mut engine2 = engine_in_temp(&dir);
        let loaded = engine2.load().unwrap();
        assert_eq!(loaded.homepage, "https://www.rust-lang.org");
        assert!(loaded.use_custom_homepage);
    }
}

#[test]
fn test_favorites_persist() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine.add_favorite("Docs", "https://docs.rs").unwrap();
        engine.add_favorite("Crates", "https://crates.io").unwrap();
        assert!(engine.remove_favorite("Crates").unwrap());
    }

    let mut engine2 = engine_in_temp(&dir);
    let loaded = engine2.load().unwrap();
    assert_eq!(loaded.favorites.len(), 1);
    assert_eq!(
        loaded.favorites.get("Docs").map(String::as_str),
        Some("https://docs.rs")
    );
}

/// Files written with only some keys still load; missing keys take defaults.
#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), r#"{"beta_features": true}"#).unwrap();

    let mut engine = engine_in_temp(&dir);
    let loaded = engine.load().unwrap();

    assert!(loaded.beta_features);
    assert_eq!(loaded.homepage, "https://google.com");
    assert!(loaded.favorites.is_empty());
}

#[test]
fn test_rejected_value_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine
        .set_value("show_tabs_in_sidebar", serde_json::Value::Bool(true))
        .unwrap();

    let result = engine.set_value("show_tabs_in_sidebar", serde_json::json!(42));
    assert!(matches!(result, Err(SettingsError::InvalidValue(_))));

    let mut engine2 = engine_in_temp(&dir);
    assert!(engine2.load().unwrap().show_tabs_in_sidebar);
}

/// After modifying settings and calling `reset()`, all values revert to
/// factory defaults and the defaults are persisted to disk.
#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();

        engine
            .set_value("beta_features", serde_json::Value::Bool(true))
            .unwrap();
        engine.add_favorite("Docs", "https://docs.rs").unwrap();

        assert!(engine.get_settings().beta_features);

        engine.reset().unwrap();

        assert_eq!(
            *engine.get_settings(),
            BrowserSettings::default(),
            "In-memory settings must equal defaults after reset"
        );
    }

    {
        let mut engine2 = engine_in_temp(&dir);
        let loaded = engine2.load().unwrap();
        assert_eq!(
            loaded,
            BrowserSettings::default(),
            "Reset must persist defaults to disk so a new engine reads them back"
        );
    }
}

/// A failed write leaves the in-memory settings as they were.
#[test]
fn test_failed_save_keeps_previous_settings() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();
    let path = blocker.join("settings.json").to_string_lossy().to_string();
    let mut engine = SettingsEngine::new(Some(path));

    let err = engine
        .set_value("beta_features", serde_json::Value::Bool(true))
        .unwrap_err();
    assert!(matches!(err, SettingsError::IoError(_)));
    assert!(!engine.get_settings().beta_features);

    let err = engine.add_favorite("Docs", "https://docs.rs").unwrap_err();
    assert!(matches!(err, SettingsError::IoError(_)));
    assert!(engine.get_settings().favorites.is_empty());
}
