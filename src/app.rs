//! App core for Playground Browser.
//!
//! Holds the tab registry, the settings engine and the engine event sink,
//! and implements the toolbar/sidebar actions on top of them.

use tracing::{info, warn};

use crate::config::{featured_site_url, DEFAULT_USER_AGENT, SHARE_FALLBACK_URL};
use crate::engine::{EngineFactory, EventSink};
use crate::managers::tab_registry::TabRegistry;
use crate::platform::shell::{external_url, HeadlessShell, SystemShell};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::{PlatformError, SettingsError};
use crate::types::settings::BrowserSettings;
use crate::types::tab::TabId;
use crate::ui::chrome::{ChromeCommand, ChromeState};
use crate::ui::sidebar::SidebarModel;

pub struct App {
    pub registry: TabRegistry,
    pub settings_engine: SettingsEngine,
    events: EventSink,
    shell: Box<dyn SystemShell>,
}

impl App {
    /// Loads settings and opens the first tab at the homepage.
    ///
    /// `events` must be the sink the factory's engines push into. A settings
    /// file that cannot be read is reported and replaced by defaults. The
    /// system shell starts as a [`HeadlessShell`]; see [`App::with_shell`].
    pub fn new(
        factory: Box<dyn EngineFactory>,
        events: EventSink,
        settings_path: Option<String>,
    ) -> Self {
        let mut settings_engine = SettingsEngine::new(settings_path);
        if let Err(e) = settings_engine.load() {
            warn!(path = settings_engine.get_config_path(), error = %e, "using default settings");
        }

        let mut app = Self {
            registry: TabRegistry::new(factory),
            settings_engine,
            events,
            shell: Box::new(HeadlessShell::new()),
        };
        let home = app.settings().effective_homepage().to_string();
        app.registry.add_tab(&home, Some(DEFAULT_USER_AGENT));
        info!(homepage = %home, "browser started");
        app
    }

    /// Replaces the OS integration used by the sidebar tools.
    pub fn with_shell(mut self, shell: Box<dyn SystemShell>) -> Self {
        self.shell = shell;
        self
    }

    pub fn settings(&self) -> &BrowserSettings {
        self.settings_engine.get_settings()
    }

    /// Routes all pending engine events to their tabs. Returns how many
    /// events reached an open tab.
    pub fn pump_events(&mut self) -> usize {
        let mut delivered = 0;
        for event in self.events.drain() {
            if self.registry.dispatch(&event) {
                delivered += 1;
            }
        }
        delivered
    }

    /// Opens a tab at the homepage.
    pub fn new_tab(&mut self) -> TabId {
        let home = self.settings().effective_homepage().to_string();
        self.registry.add_tab(&home, None)
    }

    /// Closes the active tab, unless it is the only one.
    pub fn close_active_tab(&mut self) -> bool {
        match self.registry.active_id() {
            Some(id) if self.registry.len() > 1 => self.registry.remove_tab(id),
            _ => false,
        }
    }

    /// Loads address bar input in the active tab.
    pub fn navigate(&mut self, input: &str) {
        if let Some(session) = self.registry.active_session_mut() {
            session.load_url(input);
        }
    }

    pub fn go_home(&mut self) {
        let home = self.settings().effective_homepage().to_string();
        self.navigate(&home);
    }

    pub fn go_back(&mut self) {
        if let Some(session) = self.registry.active_session_mut() {
            session.go_back();
        }
    }

    pub fn go_forward(&mut self) {
        if let Some(session) = self.registry.active_session_mut() {
            session.go_forward();
        }
    }

    /// Loads a sidebar shortcut in the active tab. Returns false for unknown names.
    pub fn open_featured(&mut self, name: &str) -> bool {
        match featured_site_url(name) {
            Some(url) => {
                self.navigate(url);
                true
            }
            None => false,
        }
    }

    /// URL offered for sharing: the active page, or a fixed fallback.
    pub fn current_page_url(&self) -> String {
        self.registry
            .active_session()
            .map(|s| s.current_url().to_string())
            .unwrap_or_else(|| SHARE_FALLBACK_URL.to_string())
    }

    /// Copies the page URL to the clipboard and returns it.
    pub fn share_current_page(&mut self) -> Result<String, PlatformError> {
        let url = self.current_page_url();
        self.shell.copy_text(&url)?;
        info!(url = %url, "page shared");
        Ok(url)
    }

    /// Opens the active page in the default browser. Returns false when no
    /// tab is active.
    pub fn open_current_externally(&mut self) -> Result<bool, PlatformError> {
        let Some(session) = self.registry.active_session() else {
            return Ok(false);
        };
        let url = external_url(session.current_url())?;
        self.shell.open_external(&url)?;
        Ok(true)
    }

    pub fn set_setting(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        self.settings_engine.set_value(key, value)
    }

    pub fn sidebar(&self) -> SidebarModel {
        SidebarModel::build(&self.registry, self.settings())
    }

    pub fn chrome_state(&self) -> ChromeState {
        let active = self.registry.active_session();
        ChromeState {
            url_input: active.map(|s| s.current_url().to_string()).unwrap_or_default(),
            loading: active.is_some_and(|s| s.is_loading()),
            can_go_back: active.is_some_and(|s| s.can_go_back()),
            can_go_forward: active.is_some_and(|s| s.can_go_forward()),
            has_active_tab: active.is_some(),
            tabs: self.registry.tab_list(),
            sidebar: self.sidebar(),
            settings: self.settings().clone(),
        }
    }

    /// Applies a chrome command. Failures are logged, never fatal.
    pub fn apply_command(&mut self, command: ChromeCommand) {
        match command {
            ChromeCommand::Navigate { url } => self.navigate(&url),
            ChromeCommand::Back => self.go_back(),
            ChromeCommand::Forward => self.go_forward(),
            ChromeCommand::Home => self.go_home(),
            ChromeCommand::NewTab => {
                self.new_tab();
            }
            ChromeCommand::CloseTab => {
                self.close_active_tab();
            }
            ChromeCommand::SelectTab { id } => {
                // Unknown IDs are already logged by the registry.
                let _ = self.registry.set_active(id);
            }
            ChromeCommand::OpenFeatured { name } => {
                if !self.open_featured(&name) {
                    warn!(name = %name, "unknown featured site");
                }
            }
            ChromeCommand::SetSetting { key, value } => {
                if let Err(e) = self.set_setting(&key, value) {
                    warn!(key = %key, error = %e, "setting not applied");
                }
            }
            ChromeCommand::AddFavorite { title, url } => {
                if let Err(e) = self.settings_engine.add_favorite(&title, &url) {
                    warn!(title = %title, error = %e, "favorite not added");
                }
            }
            ChromeCommand::RemoveFavorite { title } => {
                if let Err(e) = self.settings_engine.remove_favorite(&title) {
                    warn!(title = %title, error = %e, "favorite not removed");
                }
            }
            ChromeCommand::SharePage => {
                if let Err(e) = self.share_current_page() {
                    warn!(error = %e, "page not shared");
                }
            }
            ChromeCommand::OpenExternal => match self.open_current_externally() {
                Ok(true) => {}
                Ok(false) => warn!("no active tab to open"),
                Err(e) => warn!(error = %e, "page not opened"),
            },
        }
    }
}
