use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved URL with its labels.
///
/// Serialized field names form the persisted schema of the library slot;
/// `date` is the name older blobs used for the creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bookmark {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub title: String,
    pub tags: Vec<String>,
    #[serde(rename = "createdAt", alias = "date")]
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    /// Returns true if the title is non-empty.
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// Url, title and tags joined by single spaces and lower-cased.
    /// An empty title still contributes its separator.
    pub fn search_text(&self) -> String {
        let mut parts = Vec::with_capacity(self.tags.len() + 2);
        parts.push(self.url.as_str());
        parts.push(self.title.as_str());
        parts.extend(self.tags.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }

    /// Returns true if `needle` (already lower-cased) occurs in
    /// [`search_text`](Self::search_text). A query may span field boundaries.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.search_text().contains(needle)
    }
}

/// Validated user input for creating or editing a bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkDraft {
    pub url: String,
    pub title: String,
    pub tags: Vec<String>,
}
