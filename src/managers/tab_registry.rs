//! Tab Registry for Playground Browser.
//!
//! Owns every open [`TabSession`], keeps the active-tab pointer valid and
//! routes engine events to the tab they belong to.

use tracing::{debug, info, warn};

use crate::config::DEFAULT_URL;
use crate::engine::{EngineFactory, NavigationDelegate};
use crate::managers::notifier::{Notifier, SubscriptionId};
use crate::managers::tab_session::TabSession;
use crate::services::navigation::resolve_input;
use crate::types::errors::TabError;
use crate::types::navigation::EngineEvent;
use crate::types::tab::{TabId, TabListEntry};

/// Observable changes of the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    TabAdded(TabId),
    TabRemoved(TabId),
    ActiveChanged(Option<TabId>),
}

/// Open tabs and the active-tab pointer.
///
/// Tabs are kept in creation order. When the active tab is removed, the
/// oldest remaining tab becomes active.
pub struct TabRegistry {
    factory: Box<dyn EngineFactory>,
    tabs: Vec<TabSession>,
    active_id: Option<TabId>,
    notifier: Notifier<RegistryEvent>,
}

impl TabRegistry {
    pub fn new(factory: Box<dyn EngineFactory>) -> Self {
        Self {
            factory,
            tabs: Vec::new(),
            active_id: None,
            notifier: Notifier::new(),
        }
    }

    fn position(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id() == id)
    }

    fn set_active_id(&mut self, id: Option<TabId>) {
        if self.active_id != id {
            self.active_id = id;
            self.notifier.notify(&RegistryEvent::ActiveChanged(id));
        }
    }

    /// Opens a tab at `url` (or [`DEFAULT_URL`] when blank) and activates it.
    ///
    /// `url` follows the address bar rules; input that cannot be resolved
    /// opens [`DEFAULT_URL`] instead.
    pub fn add_tab(&mut self, url: &str, user_agent: Option<&str>) -> TabId {
        let id = TabId::new();
        let requested = if url.trim().is_empty() { DEFAULT_URL } else { url };
        let (target, display) = match resolve_input(requested) {
            Ok(resolved) => (resolved.url.to_string(), resolved.display),
            Err(e) => {
                warn!(tab = %id, error = %e, "opening default page instead");
                (DEFAULT_URL.to_string(), DEFAULT_URL.to_string())
            }
        };

        let engine = self.factory.create(id, &target, user_agent);
        let session = TabSession::new(id, &display, user_agent.map(str::to_string), engine);
        self.tabs.push(session);
        info!(tab = %id, url = %target, "tab added");

        self.notifier.notify(&RegistryEvent::TabAdded(id));
        self.set_active_id(Some(id));
        id
    }

    /// Closes a tab. Returns false if no such tab was open.
    pub fn remove_tab(&mut self, id: TabId) -> bool {
        let Some(idx) = self.position(id) else {
            debug!(tab = %id, "remove ignored, tab not open");
            return false;
        };
        // Dropping the session releases its engine.
        drop(self.tabs.remove(idx));
        info!(tab = %id, remaining = self.tabs.len(), "tab removed");
        self.notifier.notify(&RegistryEvent::TabRemoved(id));

        if self.active_id == Some(id) {
            let next = self.tabs.first().map(TabSession::id);
            self.set_active_id(next);
        }
        true
    }

    /// Activates an open tab. Unknown IDs leave the state untouched.
    pub fn set_active(&mut self, id: TabId) -> Result<(), TabError> {
        if self.position(id).is_none() {
            warn!(tab = %id, "cannot activate unknown tab");
            return Err(TabError::NotFound(id));
        }
        self.set_active_id(Some(id));
        Ok(())
    }

    pub fn active_id(&self) -> Option<TabId> {
        self.active_id
    }

    pub fn active_session(&self) -> Option<&TabSession> {
        self.active_id.and_then(|id| self.session(id))
    }

    pub fn active_session_mut(&mut self) -> Option<&mut TabSession> {
        let id = self.active_id?;
        self.session_mut(id)
    }

    pub fn session(&self, id: TabId) -> Option<&TabSession> {
        self.tabs.iter().find(|t| t.id() == id)
    }

    pub fn session_mut(&mut self, id: TabId) -> Option<&mut TabSession> {
        self.tabs.iter_mut().find(|t| t.id() == id)
    }

    /// Tab IDs in creation order.
    pub fn ids(&self) -> Vec<TabId> {
        self.tabs.iter().map(TabSession::id).collect()
    }

    pub fn sessions(&self) -> impl Iterator<Item = &TabSession> {
        self.tabs.iter()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Tab list for menus, sorted by title (creation order breaks ties).
    pub fn tab_list(&self) -> Vec<TabListEntry> {
        let mut entries: Vec<TabListEntry> = self
            .tabs
            .iter()
            .map(|t| TabListEntry {
                id: t.id(),
                title: t.title().to_string(),
                active: self.active_id == Some(t.id()),
            })
            .collect();
        entries.sort_by(|a, b| a.title.cmp(&b.title));
        entries
    }

    /// Routes an engine event to its tab. Events for tabs that were closed
    /// while the event was in flight are dropped.
    pub fn dispatch(&mut self, event: &EngineEvent) -> bool {
        match self.session_mut(event.tab) {
            Some(session) => {
                session.handle_event(&event.event);
                true
            }
            None => {
                debug!(tab = %event.tab, event = ?event.event, "dropping event for closed tab");
                false
            }
        }
    }

    pub fn subscribe(&mut self, listener: impl Fn(&RegistryEvent) + 'static) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }
}
