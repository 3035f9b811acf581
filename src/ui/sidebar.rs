//! Sidebar menu contents, derived from tab and settings state.

use serde::Serialize;

use crate::config::{APP_TITLE, BETA_WARNING, FEATURED_SITES};
use crate::managers::tab_registry::TabRegistry;
use crate::types::settings::BrowserSettings;
use crate::types::tab::TabListEntry;

/// A named navigation shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortcut {
    pub name: String,
    pub url: String,
}

/// An action in the "Shortcuts and Tools" section. `cmd` is the chrome
/// command it sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tool {
    pub label: String,
    pub cmd: String,
}

const TOOLS: &[(&str, &str)] = &[
    ("Share Current Page", "share_page"),
    ("Open Current Site in Default Browser", "open_external"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarModel {
    pub title: String,
    /// Shown while unstable features are enabled.
    pub beta_warning: Option<String>,
    /// Present only when the tab list is enabled in settings.
    pub tabs: Option<Vec<TabListEntry>>,
    /// The active tab may be closed only while another tab remains.
    pub can_close_tab: bool,
    pub featured: Vec<Shortcut>,
    /// Present only while unstable features are enabled.
    pub favorites: Option<Vec<Shortcut>>,
    /// The homepage field is editable only with a custom homepage enabled.
    pub show_homepage_field: bool,
    pub tools: Vec<Tool>,
}

impl SidebarModel {
    pub fn build(registry: &TabRegistry, settings: &BrowserSettings) -> Self {
        let favorites = settings.beta_features.then(|| {
            settings
                .favorites
                .iter()
                .map(|(name, url)| Shortcut {
                    name: name.clone(),
                    url: url.clone(),
                })
                .collect()
        });

        Self {
            title: APP_TITLE.to_string(),
            beta_warning: settings.beta_features.then(|| BETA_WARNING.to_string()),
            tabs: settings.show_tabs_in_sidebar.then(|| registry.tab_list()),
            can_close_tab: registry.active_id().is_some() && registry.len() > 1,
            featured: FEATURED_SITES
                .iter()
                .map(|(name, url)| Shortcut {
                    name: name.to_string(),
                    url: url.to_string(),
                })
                .collect(),
            favorites,
            show_homepage_field: settings.use_custom_homepage,
            tools: TOOLS
                .iter()
                .map(|(label, cmd)| Tool {
                    label: label.to_string(),
                    cmd: cmd.to_string(),
                })
                .collect(),
        }
    }
}
