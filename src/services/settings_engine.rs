// URLibrary Settings Engine
// Keeps `LibrarySettings` in memory and mirrors every change to a JSON file
// under the platform config directory.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::LibrarySettings;

const SETTINGS_FILE: &str = "settings.json";

pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<LibrarySettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &LibrarySettings;
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

pub struct SettingsEngine {
    config_path: String,
    settings: LibrarySettings,
}

impl SettingsEngine {
    /// `path_override` replaces `<config dir>/settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override.unwrap_or_else(|| {
            platform::get_config_dir()
                .join(SETTINGS_FILE)
                .to_string_lossy()
                .into_owned()
        });
        Self {
            config_path,
            settings: LibrarySettings::default(),
        }
    }

    fn as_tree(&self) -> Result<Value, SettingsError> {
        serde_json::to_value(&self.settings).map_err(|e| SettingsError::SerializationError(e.to_string()))
    }
}

/// Writes `value` at the dot-separated `key` of `tree`. Only existing leaves
/// may be replaced.
fn assign(tree: &mut Value, key: &str, value: Value) -> Result<(), SettingsError> {
    let unknown = || SettingsError::InvalidKey(format!("Key '{}' not found in settings", key));
    if key.is_empty() {
        return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
    }

    let (parent, leaf) = match key.rsplit_once('.') {
        Some((parent, leaf)) => (format!("/{}", parent.replace('.', "/")), leaf),
        None => (String::new(), key),
    };
    let slot = tree
        .pointer_mut(&parent)
        .and_then(Value::as_object_mut)
        .and_then(|map| map.get_mut(leaf))
        .ok_or_else(unknown)?;
    if slot.is_object() {
        return Err(SettingsError::InvalidKey(format!("Key '{}' names a section, not a value", key)));
    }
    *slot = value;
    Ok(())
}

impl SettingsEngineTrait for SettingsEngine {
    /// A missing file yields defaults; a malformed one is an error.
    fn load(&mut self) -> Result<LibrarySettings, SettingsError> {
        let path = Path::new(&self.config_path);
        self.settings = if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| SettingsError::IoError(format!("Failed to read {}: {}", self.config_path, e)))?;
            serde_json::from_str(&content)
                .map_err(|e| SettingsError::SerializationError(format!("Failed to parse {}: {}", self.config_path, e)))?
        } else {
            debug!(path = %self.config_path, "no settings file, using defaults");
            LibrarySettings::default()
        };
        Ok(self.settings.clone())
    }

    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| SettingsError::IoError(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(&self.settings)
            .map_err(|e| SettingsError::SerializationError(e.to_string()))?;
        fs::write(path, json).map_err(|e| SettingsError::IoError(format!("Failed to write {}: {}", self.config_path, e)))
    }

    fn get_settings(&self) -> &LibrarySettings {
        &self.settings
    }

    /// Sets one value by dot path, e.g. `"logging.level"`, and saves.
    /// The whole tree is re-parsed so a value of the wrong type is rejected.
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError> {
        let mut tree = self.as_tree()?;
        assign(&mut tree, key, value)?;
        self.settings = serde_json::from_value(tree)
            .map_err(|e| SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e)))?;
        self.save()?;
        debug!(%key, "setting updated");
        Ok(())
    }

    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = LibrarySettings::default();
        self.save()
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
