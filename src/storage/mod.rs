//! Key-value persistence for the bookmark list.
//!
//! The library lives in a single named slot whose value is the whole list
//! encoded as JSON. Backends only need to read and overwrite a slot.

pub mod codec;
pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use crate::types::errors::StorageError;

/// A string-keyed store of string values.
pub trait KeyValueStorage {
    /// Returns the value stored under `key`, or `None` if the slot is empty.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Overwrites the slot `key` with `value`.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Clears the slot `key`. Clearing an empty slot is not an error.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}
