//! App Core for URLibrary.
//!
//! Central struct holding settings, the view controller (which owns the
//! bookmark store) and the logo modal.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::managers::bookmark_store::BookmarkStore;
use crate::managers::logo_modal::LogoModal;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::storage::SqliteStorage;
use crate::types::settings::LibrarySettings;
use crate::ui::view_controller::ViewController;

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub controller: ViewController<SqliteStorage>,
    pub logo_modal: LogoModal,
}

impl App {
    /// Loads settings (from `settings_path` or the platform config dir) and
    /// opens the bookmark database at `db_path`.
    ///
    /// Unreadable settings fall back to defaults.
    pub fn new(db_path: &str, settings_path: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(settings_path);
        if let Err(e) = settings_engine.load() {
            warn!(error = %e, "failed to load settings, using defaults");
        }
        Self::with_settings(settings_engine, db_path)
    }

    /// Opens the bookmark database using an already loaded settings engine.
    pub fn with_settings(
        settings_engine: SettingsEngine,
        db_path: &str,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(parent) = Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let storage = SqliteStorage::open(db_path)?;
        let store = BookmarkStore::open(storage, &settings_engine.get_settings().storage);
        info!(db = %db_path, "bookmark library opened");

        Ok(Self {
            settings_engine,
            controller: ViewController::new(store),
            logo_modal: LogoModal::new(),
        })
    }

    pub fn settings(&self) -> &LibrarySettings {
        self.settings_engine.get_settings()
    }
}
