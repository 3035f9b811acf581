// Playground Browser settings engine
// Loads, saves and edits user preferences stored as a JSON file at the platform config path.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::BrowserSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<BrowserSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &BrowserSettings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
    fn add_favorite(&mut self, title: &str, url: &str) -> Result<(), SettingsError>;
    fn remove_favorite(&mut self, title: &str) -> Result<bool, SettingsError>;
}

/// Settings engine implementation that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: BrowserSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses the platform-specific config directory with `settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("settings.json")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            config_path,
            settings: BrowserSettings::default(),
        }
    }

    fn write(&self, settings: &BrowserSettings) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))?;

        info!(path = %self.config_path, "settings saved");
        Ok(())
    }

    /// Persists `settings`, then adopts them. On error nothing changes.
    fn commit(&mut self, settings: BrowserSettings) -> Result<(), SettingsError> {
        self.write(&settings)?;
        self.settings = settings;
        Ok(())
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// If the file does not exist, returns default settings.
    /// If the file exists but is malformed, returns a serialization error.
    fn load(&mut self) -> Result<BrowserSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            debug!(path = %self.config_path, "no settings file, using defaults");
            self.settings = BrowserSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        let settings: BrowserSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;

        self.settings = settings;
        Ok(self.settings.clone())
    }

    /// Saves the current settings, creating parent directories as needed.
    fn save(&self) -> Result<(), SettingsError> {
        self.write(&self.settings)
    }

    fn get_settings(&self) -> &BrowserSettings {
        &self.settings
    }

    /// Updates an individual setting by dot-notation key path, e.g.
    /// `"homepage"` or `"favorites.Docs"`.
    ///
    /// The new value is validated by deserializing the whole document back
    /// into `BrowserSettings`, then saved to disk before it replaces the
    /// in-memory settings. Only existing keys can be
    /// replaced, except directly under `favorites`, where new entries are
    /// allowed.
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let parts: Vec<&str> = key.split('.').collect();

        let mut json_value = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        {
            let mut current = &mut json_value;
            for (i, part) in parts.iter().enumerate() {
                if i == parts.len() - 1 {
                    let open_map = i == 1 && parts[0] == "favorites";
                    match current {
                        serde_json::Value::Object(map) => {
                            if !open_map && !map.contains_key(*part) {
                                return Err(SettingsError::InvalidKey(format!(
                                    "Key '{}' not found in settings",
                                    key
                                )));
                            }
                            map.insert(part.to_string(), value.clone());
                        }
                        _ => {
                            return Err(SettingsError::InvalidKey(format!(
                                "Cannot navigate to key '{}': intermediate value is not an object",
                                key
                            )));
                        }
                    }
                } else {
                    current = match current.get_mut(*part) {
                        Some(v) => v,
                        None => {
                            return Err(SettingsError::InvalidKey(format!(
                                "Key '{}' not found in settings",
                                key
                            )));
                        }
                    };
                }
            }
        }

        let new_settings: BrowserSettings = serde_json::from_value(json_value).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;

        self.commit(new_settings)
    }

    /// Resets all settings to factory defaults and saves to disk.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.commit(BrowserSettings::default())
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }

    /// Adds or replaces a favorite and saves.
    fn add_favorite(&mut self, title: &str, url: &str) -> Result<(), SettingsError> {
        if title.trim().is_empty() {
            return Err(SettingsError::InvalidValue(
                "Favorite title cannot be empty".to_string(),
            ));
        }
        let mut updated = self.settings.clone();
        updated.favorites.insert(title.to_string(), url.to_string());
        self.commit(updated)
    }

    /// Removes a favorite by title. Returns false if it did not exist.
    fn remove_favorite(&mut self, title: &str) -> Result<bool, SettingsError> {
        if !self.settings.favorites.contains_key(title) {
            return Ok(false);
        }
        let mut updated = self.settings.clone();
        updated.favorites.remove(title);
        self.commit(updated)?;
        Ok(true)
    }
}
