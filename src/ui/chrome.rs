//! Toolbar state sent to the chrome view, and commands it sends back over IPC.

use serde::{Deserialize, Serialize};

use super::sidebar::SidebarModel;
use crate::types::settings::BrowserSettings;
use crate::types::tab::{TabId, TabListEntry};

/// Everything the chrome view needs to render, serialized as one JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChromeState {
    pub url_input: String,
    pub loading: bool,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub has_active_tab: bool,
    /// Tabs menu, always available regardless of the sidebar setting.
    pub tabs: Vec<TabListEntry>,
    pub sidebar: SidebarModel,
    pub settings: BrowserSettings,
}

impl ChromeState {
    /// Script that hands this state to the chrome view's renderer.
    pub fn to_render_script(&self) -> Result<String, serde_json::Error> {
        Ok(format!("window.__pb_render({});", serde_json::to_string(self)?))
    }
}

/// A user action reported by the chrome view.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum ChromeCommand {
    Navigate { url: String },
    Back,
    Forward,
    Home,
    NewTab,
    CloseTab,
    SelectTab { id: TabId },
    OpenFeatured { name: String },
    SetSetting { key: String, value: serde_json::Value },
    AddFavorite { title: String, url: String },
    RemoveFavorite { title: String },
    /// Copies the active page's URL for sharing.
    SharePage,
    /// Opens the active page in the system's default browser.
    OpenExternal,
}

impl ChromeCommand {
    /// Parses an IPC message body.
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}
