// Playground Browser data types
// Plain data shared across managers, services and the UI.

pub mod errors;
pub mod navigation;
pub mod settings;
pub mod tab;
