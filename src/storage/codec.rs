//! JSON encoding of the bookmark list.
//!
//! The slot holds an array of [`Bookmark`] objects, newest first. Decoding
//! validates the whole list and falls back to an empty one on any problem.

use std::collections::HashSet;

use tracing::warn;

use crate::services::validation::is_http_url;
use crate::types::bookmark::Bookmark;
use crate::types::errors::StorageError;

/// Serializes the list for writing to a slot.
pub fn encode_library(bookmarks: &[Bookmark]) -> Result<String, StorageError> {
    serde_json::to_string(bookmarks).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Parses a slot value. Unparsable or invalid data yields an empty list.
pub fn decode_library(raw: &str) -> Vec<Bookmark> {
    let bookmarks: Vec<Bookmark> = match serde_json::from_str(raw) {
        Ok(list) => list,
        Err(e) => {
            warn!(error = %e, "stored library is not valid JSON, starting empty");
            return Vec::new();
        }
    };
    if let Err(reason) = check_library(&bookmarks) {
        warn!(%reason, "stored library failed validation, starting empty");
        return Vec::new();
    }
    bookmarks
}

/// Checks the invariants every persisted list must satisfy.
pub fn check_library(bookmarks: &[Bookmark]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(bookmarks.len());
    for bm in bookmarks {
        if !seen.insert(bm.id.as_str()) {
            return Err(format!("duplicate id {}", bm.id));
        }
        if !is_http_url(&bm.url) {
            return Err(format!("record {} has a non-http url", bm.id));
        }
        if bm.tags.is_empty() || bm.tags.iter().any(|t| t.trim().is_empty()) {
            return Err(format!("record {} has no usable tags", bm.id));
        }
    }
    Ok(())
}
