use playground_browser::types::errors::*;
use playground_browser::types::navigation::NavigationPhase;
use playground_browser::types::tab::TabId;

// === TabError Tests ===

#[test]
fn tab_error_not_found_display() {
    let id = TabId::new();
    let err = TabError::NotFound(id);
    assert_eq!(err.to_string(), format!("Tab not found: {}", id));
}

#[test]
fn tab_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(TabError::NotFound(TabId::new()));
    assert!(err.source().is_none());
}

// === NavigationError Tests ===

#[test]
fn navigation_error_display_variants() {
    assert_eq!(
        NavigationError::MalformedUrl("hello world".to_string()).to_string(),
        "Malformed URL: hello world"
    );
    assert_eq!(
        NavigationError::NavigationFailure {
            phase: NavigationPhase::Provisional,
            message: "host not found".to_string(),
        }
        .to_string(),
        "Navigation failed (Provisional): host not found"
    );
    assert_eq!(
        NavigationError::NavigationFailure {
            phase: NavigationPhase::Committed,
            message: "connection reset".to_string(),
        }
        .to_string(),
        "Navigation failed (Committed): connection reset"
    );
}

#[test]
fn navigation_error_is_cloneable_and_comparable() {
    let err = NavigationError::MalformedUrl("x y".to_string());
    assert_eq!(err.clone(), err);
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(
        SettingsError::InvalidKey("nope".to_string()).to_string(),
        "Invalid settings key: nope"
    );
    assert_eq!(
        SettingsError::InvalidValue("not a bool".to_string()).to_string(),
        "Invalid settings value: not a bool"
    );
}

#[test]
fn settings_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(SettingsError::InvalidKey("k".to_string()));
    assert!(err.source().is_none());
}

// === PlatformError Tests ===

#[test]
fn platform_error_display() {
    assert_eq!(
        PlatformError::ClipboardError("no display".to_string()).to_string(),
        "Clipboard error: no display"
    );
    assert_eq!(
        PlatformError::OpenFailed("not found".to_string()).to_string(),
        "Failed to open URL: not found"
    );
    assert_eq!(
        PlatformError::UnsupportedUrl("about:blank".to_string()).to_string(),
        "Unsupported URL: about:blank"
    );
}
