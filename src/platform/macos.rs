// Config and data both live in ~/Library/Application Support/URLibrary.

use std::env;
use std::path::PathBuf;

pub fn config_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
    PathBuf::from(home).join("Library/Application Support/URLibrary")
}

pub fn data_dir() -> PathBuf {
    config_dir()
}
