//! Versioned schema for the library database.
//!
//! Steps are applied in order inside one transaction each, and every applied
//! step leaves a row in `schema_version`.

use rusqlite::{params, Connection, Transaction};
use tracing::info;

struct Step {
    version: i32,
    description: &'static str,
    sql: &'static str,
}

const STEPS: &[Step] = &[Step {
    version: 1,
    description: "Key-value slot table",
    // One row per named slot; the value is overwritten wholesale.
    sql: "CREATE TABLE IF NOT EXISTS kv_store (
              key TEXT PRIMARY KEY,
              value TEXT NOT NULL,
              updated_at INTEGER NOT NULL
          );",
}];

/// Highest version in [`STEPS`].
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Highest applied version, or 0 for a fresh file.
pub fn get_schema_version(conn: &Connection) -> i32 {
    conn.query_row("SELECT COALESCE(MAX(version), 0) FROM schema_version", [], |row| {
        row.get(0)
    })
    .unwrap_or(0)
}

/// Brings the schema up to [`CURRENT_SCHEMA_VERSION`].
pub fn run_all(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         CREATE TABLE IF NOT EXISTS schema_version (
             version INTEGER PRIMARY KEY,
             applied_at INTEGER NOT NULL,
             description TEXT NOT NULL
         );",
    )?;

    let current = get_schema_version(conn);
    for step in STEPS.iter().filter(|s| s.version > current) {
        let tx = conn.transaction()?;
        apply(&tx, step)?;
        tx.commit()?;
        info!(version = step.version, description = step.description, "schema migrated");
    }
    Ok(())
}

fn apply(tx: &Transaction<'_>, step: &Step) -> Result<(), rusqlite::Error> {
    tx.execute_batch(step.sql)?;
    tx.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at, description) VALUES (?1, ?2, ?3)",
        params![step.version, chrono::Utc::now().timestamp(), step.description],
    )?;
    Ok(())
}
