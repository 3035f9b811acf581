//! Playground Browser: a minimal tabbed web browser shell.
//!
//! The library holds the tab model, settings persistence and the engine
//! seam; the binary drives it either through a `wry` window (`gui`
//! feature) or a headless console demo.

pub mod app;
pub mod config;
pub mod engine;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
pub mod ui;
