//! SQLite handle for the library database.

use std::path::Path;

use rusqlite::Connection;

use super::migrations;

/// A migrated SQLite connection. Dropping it closes the file.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens or creates the file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        Self::prepare(Connection::open(path)?)
    }

    /// A throwaway database, used by tests and the console build.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        Self::prepare(Connection::open_in_memory()?)
    }

    fn prepare(mut conn: Connection) -> Result<Self, rusqlite::Error> {
        migrations::run_all(&mut conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn schema_version(&self) -> i32 {
        migrations::get_schema_version(&self.conn)
    }
}
