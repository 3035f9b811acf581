use serde::{Deserialize, Serialize};

use super::tab::TabId;

/// Whether a failed navigation had already committed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationPhase {
    /// The load started but nothing was committed yet.
    Provisional,
    /// Content was committed before the failure.
    Committed,
}

/// Lifecycle callbacks emitted by a web engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    Started,
    Finished,
    Failed {
        phase: NavigationPhase,
        message: String,
    },
}

/// A navigation event tagged with the tab whose engine produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineEvent {
    pub tab: TabId,
    pub event: NavigationEvent,
}

impl EngineEvent {
    pub fn new(tab: TabId, event: NavigationEvent) -> Self {
        Self { tab, event }
    }
}
