//! Browser chrome: sidebar and toolbar models shared by every front end.
//!
//! With the `gui` feature, `webview_app` renders them in a `wry` window:
//! - Windows: WebView2
//! - Linux: WebKitGTK (X11)
//! - macOS: WKWebView
//!
//! Each tab gets its own child WebView through `wry_engine`.

pub mod chrome;
pub mod sidebar;

#[cfg(feature = "gui")]
pub mod webview_app;
#[cfg(feature = "gui")]
pub mod wry_engine;
