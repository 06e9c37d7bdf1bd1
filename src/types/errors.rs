use thiserror::Error;

// === StorageError ===

/// Errors raised by a key-value storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend failed to read or write the slot.
    #[error("Storage backend error: {0}")]
    Backend(String),
    /// The library could not be serialized for writing.
    #[error("Storage serialization error: {0}")]
    Serialization(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::Backend(e.to_string())
    }
}

// === FormError ===

/// Rejections of bookmark form input. The messages are shown to the user as-is.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FormError {
    /// The url does not start with `http://` or `https://`.
    #[error("URL must start with http:// or https://")]
    InvalidUrl,
    /// No tag remained after splitting and trimming the tag field.
    #[error("Please add at least one tag")]
    MissingTags,
}

// === LibraryError ===

/// Errors surfaced by view controller operations.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

// === SettingsError ===

/// Errors related to the settings engine.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Reading or writing the settings file failed.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// The settings file could not be parsed or written as JSON.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The dot-notation key does not name a setting.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The value has the wrong type for the key.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}
