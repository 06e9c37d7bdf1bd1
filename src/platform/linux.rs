// XDG base directories, falling back to ~/.config and ~/.local/share.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "urlibrary";

fn xdg_or_home(var: &str, fallback: &[&str]) -> PathBuf {
    match env::var(var) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
            fallback.iter().fold(PathBuf::from(home), |p, part| p.join(part))
        }
    }
}

pub fn config_dir() -> PathBuf {
    xdg_or_home("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR)
}

pub fn data_dir() -> PathBuf {
    xdg_or_home("XDG_DATA_HOME", &[".local", "share"]).join(APP_DIR)
}
