//! Web engine seam.
//!
//! Rendering, script execution and networking live in an external engine.
//! The browser core talks to it only through [`WebEngine`], builds engines
//! through [`EngineFactory`], and receives lifecycle callbacks as
//! [`EngineEvent`]s pushed into an [`EventSink`].
//!
//! Engines never hold a reference back to the tab that owns them. Instead
//! they tag events with the tab ID; the owning thread drains the sink and
//! routes each event to the tab through [`NavigationDelegate`].

pub mod headless;
pub mod history;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::types::navigation::{EngineEvent, NavigationEvent, NavigationPhase};
use crate::types::tab::TabId;

/// Navigation API of one engine instance (one per tab).
pub trait WebEngine {
    /// Starts loading an absolute URL. Returns immediately.
    fn load(&mut self, url: &str);
    fn go_back(&mut self);
    fn go_forward(&mut self);
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    /// URL of the committed page, if any.
    fn current_url(&self) -> Option<String>;
    /// Document title of the committed page, if any.
    fn title(&self) -> Option<String>;
    /// Replaces the displayed content with an inline HTML document.
    fn display_inline_html(&mut self, html: &str);
}

/// Creates engine instances for new tabs.
pub trait EngineFactory {
    /// Creates an engine for `tab` that has already started loading `initial_url`.
    fn create(&mut self, tab: TabId, initial_url: &str, user_agent: Option<&str>)
        -> Box<dyn WebEngine>;
}

/// Receiver of engine lifecycle callbacks.
pub trait NavigationDelegate {
    fn on_navigation_started(&mut self);
    fn on_navigation_finished(&mut self);
    fn on_navigation_failed(&mut self, phase: NavigationPhase, message: &str);

    /// Routes an event to the matching callback.
    fn handle_event(&mut self, event: &NavigationEvent) {
        match event {
            NavigationEvent::Started => self.on_navigation_started(),
            NavigationEvent::Finished => self.on_navigation_finished(),
            NavigationEvent::Failed { phase, message } => {
                self.on_navigation_failed(*phase, message)
            }
        }
    }
}

/// Shared queue of engine events, filled by engines and drained by the owner.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    events: Arc<Mutex<Vec<EngineEvent>>>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, tab: TabId, event: NavigationEvent) {
        lock(&self.events).push(EngineEvent::new(tab, event));
    }

    /// Takes all pending events in arrival order.
    pub fn drain(&self) -> Vec<EngineEvent> {
        std::mem::take(&mut *lock(&self.events))
    }

    pub fn len(&self) -> usize {
        lock(&self.events).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Locks a mutex, recovering the data if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
