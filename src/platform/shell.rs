// Playground Browser system shell
// Hands the current page to the OS: copies its URL for sharing or opens it in the default browser.

use std::sync::{Arc, Mutex};

use url::Url;

use crate::engine::lock;
use crate::types::errors::PlatformError;

/// OS integration used by the sidebar tools.
pub trait SystemShell {
    /// Opens `url` in the user's default browser.
    fn open_external(&mut self, url: &Url) -> Result<(), PlatformError>;
    /// Puts `text` on the system clipboard.
    fn copy_text(&mut self, text: &str) -> Result<(), PlatformError>;
}

/// Parses `input` and accepts it only as an absolute http(s) URL.
pub fn external_url(input: &str) -> Result<Url, PlatformError> {
    let url = Url::parse(input).map_err(|_| PlatformError::UnsupportedUrl(input.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(PlatformError::UnsupportedUrl(input.to_string())),
    }
}

#[derive(Debug, Default)]
struct ShellLog {
    opened: Vec<String>,
    copied: Vec<String>,
}

/// Records requests instead of touching the OS. Clones share one log.
#[derive(Debug, Clone, Default)]
pub struct HeadlessShell {
    log: Arc<Mutex<ShellLog>>,
}

impl HeadlessShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs passed to `open_external`, oldest first.
    pub fn opened(&self) -> Vec<String> {
        lock(&self.log).opened.clone()
    }

    /// Text passed to `copy_text`, oldest first.
    pub fn copied(&self) -> Vec<String> {
        lock(&self.log).copied.clone()
    }
}

impl SystemShell for HeadlessShell {
    fn open_external(&mut self, url: &Url) -> Result<(), PlatformError> {
        lock(&self.log).opened.push(url.to_string());
        Ok(())
    }

    fn copy_text(&mut self, text: &str) -> Result<(), PlatformError> {
        lock(&self.log).copied.push(text.to_string());
        Ok(())
    }
}

/// Real OS integration: `open` for the default browser, `arboard` for the
/// clipboard.
#[cfg(feature = "gui")]
#[derive(Default)]
pub struct DesktopShell {
    clipboard: Option<arboard::Clipboard>,
}

#[cfg(feature = "gui")]
impl DesktopShell {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "gui")]
impl SystemShell for DesktopShell {
    fn open_external(&mut self, url: &Url) -> Result<(), PlatformError> {
        open::that_detached(url.as_str()).map_err(|e| PlatformError::OpenFailed(e.to_string()))?;
        tracing::info!(url = %url, "opened in default browser");
        Ok(())
    }

    fn copy_text(&mut self, text: &str) -> Result<(), PlatformError> {
        // Opened lazily; some sessions have no clipboard at all.
        if self.clipboard.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| PlatformError::ClipboardError(e.to_string()))?;
            self.clipboard = Some(clipboard);
        }
        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_owned())
                .map_err(|e| PlatformError::ClipboardError(e.to_string())),
            None => Err(PlatformError::ClipboardError("clipboard unavailable".to_string())),
        }
    }
}
