use serde::Serialize;

/// One rendered list item.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookmarkCard {
    pub id: String,
    pub url: String,
    pub title: Option<String>,
    pub tags: Vec<String>,
    /// Human-readable creation date, e.g. `Jul 28, 2025`.
    pub added_on: String,
}

/// Current contents of the add/edit form.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FormView {
    pub url: String,
    pub title: String,
    pub tags: String,
    pub submit_label: String,
    pub editing_id: Option<String>,
}

/// Everything the rendering surface needs to draw the library page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LibraryView {
    pub query: String,
    pub cards: Vec<BookmarkCard>,
    pub form: FormView,
}

impl LibraryView {
    /// True when the empty-state indicator replaces the list.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Visibility of the logo modal overlay.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ModalView {
    pub open: bool,
    pub scroll_locked: bool,
}
