use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{DEFAULT_HOMEPAGE, FALLBACK_HOMEPAGE};

/// Persisted user preferences.
///
/// Every field has a default so that files written by older builds, or
/// edited by hand, still load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BrowserSettings {
    /// Show the open tabs list in the sidebar menu.
    pub show_tabs_in_sidebar: bool,
    /// URL opened by new tabs and the home button.
    pub homepage: String,
    /// Whether the settings panel exposes the homepage field.
    pub use_custom_homepage: bool,
    /// Enables unstable features (favorites section, warning banner).
    pub beta_features: bool,
    /// Favorite sites, title to URL.
    pub favorites: BTreeMap<String, String>,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            show_tabs_in_sidebar: false,
            homepage: DEFAULT_HOMEPAGE.to_string(),
            use_custom_homepage: false,
            beta_features: false,
            favorites: BTreeMap::new(),
        }
    }
}

impl BrowserSettings {
    /// Homepage to open, falling back when the user cleared the field.
    pub fn effective_homepage(&self) -> &str {
        if self.homepage.trim().is_empty() {
            FALLBACK_HOMEPAGE
        } else {
            &self.homepage
        }
    }
}
