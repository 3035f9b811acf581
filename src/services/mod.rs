// Playground Browser services
// Stateless helpers and persistence: address bar input resolution and the settings store.

pub mod navigation;
pub mod settings_engine;
