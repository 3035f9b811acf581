//! Navigable state of a single tab.
//!
//! A `TabSession` owns its engine instance and mirrors the engine's state
//! (URL, loading flag, title) for the UI. Commands go to the engine
//! immediately; the resulting state arrives later through the
//! [`NavigationDelegate`] callbacks.

use std::fmt;

use tracing::{debug, warn};

use crate::config::{BLANK_URL, DEFAULT_TITLE, DEFAULT_USER_AGENT, ERROR_PAGE_HTML, UNTITLED};
use crate::engine::{NavigationDelegate, WebEngine};
use crate::managers::notifier::{Notifier, SubscriptionId};
use crate::services::navigation::resolve_input;
use crate::types::errors::NavigationError;
use crate::types::navigation::NavigationPhase;
use crate::types::tab::{LoadState, TabId};

/// Observable changes of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    UrlChanged(String),
    LoadingChanged(bool),
    TitleChanged(String),
    Failed(NavigationError),
}

pub struct TabSession {
    id: TabId,
    current_url: String,
    is_loading: bool,
    title: String,
    user_agent_override: Option<String>,
    load_state: LoadState,
    last_error: Option<NavigationError>,
    engine: Box<dyn WebEngine>,
    notifier: Notifier<SessionEvent>,
}

impl TabSession {
    /// Wraps an engine that was already pointed at `initial_url`.
    pub fn new(
        id: TabId,
        initial_url: &str,
        user_agent_override: Option<String>,
        engine: Box<dyn WebEngine>,
    ) -> Self {
        Self {
            id,
            current_url: initial_url.to_string(),
            is_loading: false,
            title: DEFAULT_TITLE.to_string(),
            user_agent_override,
            load_state: LoadState::Idle,
            last_error: None,
            engine,
            notifier: Notifier::new(),
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn user_agent_override(&self) -> Option<&str> {
        self.user_agent_override.as_deref()
    }

    /// User agent the engine was created with.
    pub fn effective_user_agent(&self) -> &str {
        self.user_agent_override().unwrap_or(DEFAULT_USER_AGENT)
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Most recent navigation error, cleared by the next successful dispatch.
    pub fn last_error(&self) -> Option<&NavigationError> {
        self.last_error.as_ref()
    }

    pub fn can_go_back(&self) -> bool {
        self.engine.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.engine.can_go_forward()
    }

    pub fn subscribe(&mut self, listener: impl Fn(&SessionEvent) + 'static) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Navigates to address bar input.
    ///
    /// Input without a scheme gets `http://`. Malformed input shows the
    /// inline error document and leaves the current URL untouched.
    pub fn load_url(&mut self, input: &str) {
        match resolve_input(input) {
            Ok(resolved) => {
                debug!(tab = %self.id, url = %resolved.url, "load requested");
                self.engine.load(resolved.url.as_str());
                self.last_error = None;
                self.set_current_url(resolved.display);
            }
            Err(err) => {
                warn!(tab = %self.id, input, "invalid URL");
                self.engine.display_inline_html(ERROR_PAGE_HTML);
                self.set_loading(false);
                self.load_state = LoadState::Failed;
                self.record_error(err);
            }
        }
    }

    /// Forwarded unconditionally; check `can_go_back` before offering it.
    pub fn go_back(&mut self) {
        self.engine.go_back();
    }

    /// Forwarded unconditionally; check `can_go_forward` before offering it.
    pub fn go_forward(&mut self) {
        self.engine.go_forward();
    }

    fn engine_url(&self) -> String {
        self.engine
            .current_url()
            .unwrap_or_else(|| BLANK_URL.to_string())
    }

    fn set_current_url(&mut self, url: String) {
        if self.current_url != url {
            self.current_url = url;
            self.notifier
                .notify(&SessionEvent::UrlChanged(self.current_url.clone()));
        }
    }

    fn set_loading(&mut self, loading: bool) {
        if self.is_loading != loading {
            self.is_loading = loading;
            self.notifier.notify(&SessionEvent::LoadingChanged(loading));
        }
    }

    fn set_title(&mut self, title: String) {
        if self.title != title {
            self.title = title;
            self.notifier
                .notify(&SessionEvent::TitleChanged(self.title.clone()));
        }
    }

    fn record_error(&mut self, err: NavigationError) {
        self.notifier.notify(&SessionEvent::Failed(err.clone()));
        self.last_error = Some(err);
    }
}

impl NavigationDelegate for TabSession {
    fn on_navigation_started(&mut self) {
        self.load_state = LoadState::Loading;
        self.set_loading(true);
        let url = self.engine_url();
        self.set_current_url(url);
        debug!(tab = %self.id, url = %self.current_url, "navigation started");
    }

    fn on_navigation_finished(&mut self) {
        self.load_state = LoadState::Loaded;
        self.set_loading(false);
        let url = self.engine_url();
        self.set_current_url(url);
        let title = self.engine.title().unwrap_or_else(|| UNTITLED.to_string());
        self.set_title(title);
        debug!(tab = %self.id, url = %self.current_url, title = %self.title, "navigation finished");
    }

    fn on_navigation_failed(&mut self, phase: NavigationPhase, message: &str) {
        self.load_state = LoadState::Failed;
        self.set_loading(false);
        warn!(tab = %self.id, ?phase, error = message, "navigation failed");
        if phase == NavigationPhase::Provisional {
            self.engine.display_inline_html(ERROR_PAGE_HTML);
        }
        self.record_error(NavigationError::NavigationFailure {
            phase,
            message: message.to_string(),
        });
    }
}

impl fmt::Debug for TabSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabSession")
            .field("id", &self.id)
            .field("current_url", &self.current_url)
            .field("is_loading", &self.is_loading)
            .field("title", &self.title)
            .field("load_state", &self.load_state)
            .finish_non_exhaustive()
    }
}
