use serde::{Deserialize, Serialize};

/// Top-level application settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LibrarySettings {
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
    pub window: WindowSettings,
}

/// Where and how the bookmark list is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageSettings {
    /// Name of the storage slot holding the whole list.
    pub slot_key: String,
    /// Seed the demonstration records when the loaded list is empty.
    pub seed_demo_data: bool,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            slot_key: "deepURLibrary".to_string(),
            seed_demo_data: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Initial size of the main window, in logical pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowSettings {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 800.0,
        }
    }
}
