// Playground Browser state managers
// Tab sessions, the tab registry and the observer list they both notify through.

pub mod notifier;
pub mod tab_registry;
pub mod tab_session;
