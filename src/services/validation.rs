// URLibrary form validation
// Normalises raw form fields into a `BookmarkDraft` or rejects them.

use crate::types::bookmark::BookmarkDraft;
use crate::types::errors::FormError;

/// Returns true if `url` starts with `http://` or `https://`, ignoring case.
pub fn is_http_url(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Splits a comma-separated tag field, trimming each tag and dropping empties.
///
/// Order is kept and duplicates are not removed.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validates the three form fields.
///
/// The url and title are trimmed first. The url is checked before the tags,
/// so input that fails both reports `InvalidUrl`.
pub fn validate_form(url: &str, title: &str, raw_tags: &str) -> Result<BookmarkDraft, FormError> {
    let url = url.trim();
    if !is_http_url(url) {
        return Err(FormError::InvalidUrl);
    }
    let tags = parse_tags(raw_tags);
    if tags.is_empty() {
        return Err(FormError::MissingTags);
    }
    Ok(BookmarkDraft {
        url: url.to_string(),
        title: title.trim().to_string(),
        tags,
    })
}
