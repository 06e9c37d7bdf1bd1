// URLibrary date formatting
// Renders creation timestamps for display on bookmark cards.

use chrono::{DateTime, Utc};

/// Formats a timestamp as a short human-readable date, e.g. `Jul 28, 2025`.
pub fn format_added_on(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}
