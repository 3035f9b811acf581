use thiserror::Error;

use super::navigation::NavigationPhase;
use super::tab::TabId;

// === TabError ===

/// Errors related to tab registry operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TabError {
    /// Tab with the given ID was not found.
    #[error("Tab not found: {0}")]
    NotFound(TabId),
}

// === NavigationError ===

/// Non-fatal, per-tab navigation errors. These are recorded on the tab and
/// logged; they never reach other tabs or the registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The input could not be turned into a URL.
    #[error("Malformed URL: {0}")]
    MalformedUrl(String),
    /// The engine reported a load error.
    #[error("Navigation failed ({phase:?}): {message}")]
    NavigationFailure {
        phase: NavigationPhase,
        message: String,
    },
}

// === SettingsError ===

/// Errors related to settings operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// File I/O operation failed.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Serialization or deserialization failed.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === PlatformError ===

/// Errors from handing a page to the operating system.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The clipboard could not be opened or written.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),
    /// The default browser could not be launched.
    #[error("Failed to open URL: {0}")]
    OpenFailed(String),
    /// Only absolute http(s) URLs are handed to other applications.
    #[error("Unsupported URL: {0}")]
    UnsupportedUrl(String),
}
