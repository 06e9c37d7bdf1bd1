//! Logging setup.
//!
//! Binaries call [`init_logger`] once at startup; library code only emits
//! `tracing` events.

use tracing::Level;

/// Parses a level name, falling back to INFO.
pub fn parse_level(level: &str) -> Level {
    level.trim().parse().unwrap_or(Level::INFO)
}

/// Installs a formatted stderr subscriber at `level`.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_logger(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(parse_level(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
