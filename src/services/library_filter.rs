// URLibrary search filter
// Case-insensitive substring match of a query against url, title and tags.

use crate::types::bookmark::Bookmark;

/// Trims and lower-cases a raw search box value.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Returns the bookmarks matching `query`, in list order.
///
/// A record matches when the normalized query occurs in its url, title and
/// tags joined by spaces, so a query may run across fields. An empty query
/// matches every record.
pub fn filter_bookmarks<'a>(bookmarks: &'a [Bookmark], query: &str) -> Vec<&'a Bookmark> {
    let needle = normalize_query(query);
    bookmarks.iter().filter(|bm| bm.matches(&needle)).collect()
}
