// Playground Browser platform abstraction
// Resolves the per-OS configuration directory at compile time via `cfg(target_os)`,
// and hands pages to the OS through `shell`.

use std::path::PathBuf;

pub mod shell;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `~/.config/playground-browser` (or `$XDG_CONFIG_HOME/playground-browser`)
/// - **macOS**: `~/Library/Application Support/PlaygroundBrowser`
/// - **Windows**: `%APPDATA%/PlaygroundBrowser`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}
