// Config: $XDG_CONFIG_HOME/playground-browser, else ~/.config/playground-browser

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "playground-browser";

pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join(APP_DIR)
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join(APP_DIR)
    }
}
