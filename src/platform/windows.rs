// Config and data both live in %APPDATA%\URLibrary.

use std::env;
use std::path::PathBuf;

pub fn config_dir() -> PathBuf {
    env::var_os("APPDATA")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(r"C:\Users\Default\AppData\Roaming"))
        .join("URLibrary")
}

pub fn data_dir() -> PathBuf {
    config_dir()
}
