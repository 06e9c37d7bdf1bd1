// URLibrary platform paths
// Picks the per-OS config and data directories at compile time.

use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
use linux as imp;

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
use macos as imp;

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
use windows as imp;

/// File name of the SQLite database inside the data directory.
pub const DATABASE_FILE: &str = "urlibrary.db";

/// Overrides the data directory when set to a non-empty path.
pub const DATA_DIR_ENV: &str = "URLIBRARY_DATA_DIR";

/// - **Linux**: `$XDG_CONFIG_HOME/urlibrary`, else `~/.config/urlibrary`
/// - **macOS**: `~/Library/Application Support/URLibrary`
/// - **Windows**: `%APPDATA%\URLibrary`
pub fn get_config_dir() -> PathBuf {
    imp::config_dir()
}

/// `$URLIBRARY_DATA_DIR` if set, otherwise:
///
/// - **Linux**: `$XDG_DATA_HOME/urlibrary`, else `~/.local/share/urlibrary`
/// - **macOS** and **Windows**: the config directory
pub fn get_data_dir() -> PathBuf {
    match env::var(DATA_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => imp::data_dir(),
    }
}

pub fn get_database_path() -> PathBuf {
    get_data_dir().join(DATABASE_FILE)
}
