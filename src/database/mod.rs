//! SQLite persistence for the storage slots.
//!
//! ```no_run
//! use urlibrary::database::Database;
//!
//! let db = Database::open("urlibrary.db")?;
//! assert_eq!(db.schema_version(), urlibrary::database::migrations::CURRENT_SCHEMA_VERSION);
//! # Ok::<(), rusqlite::Error>(())
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
