//! Add/edit form state for URLibrary.
//!
//! The form is either `Idle` (submitting creates a bookmark) or
//! `Editing(id)` (submitting rewrites that bookmark). Field values are kept
//! here so a rejected submission leaves them untouched.

use crate::types::bookmark::Bookmark;
use crate::types::view::FormView;

pub const ADD_LABEL: &str = "Add Bookmark";
pub const SAVE_LABEL: &str = "Save Changes";

/// Which record, if any, the form is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Idle,
    Editing(String),
}

/// Field values plus mode of the bookmark form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub url: String,
    pub title: String,
    pub tags: String,
    mode: FormMode,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Idle => None,
            FormMode::Editing(id) => Some(id.as_str()),
        }
    }

    /// Stores what the user typed.
    pub fn set_fields(&mut self, url: &str, title: &str, tags: &str) {
        self.url = url.to_string();
        self.title = title.to_string();
        self.tags = tags.to_string();
    }

    /// Loads `bookmark` into the fields and enters `Editing`.
    ///
    /// Any previous edit is discarded without warning.
    pub fn begin_edit(&mut self, bookmark: &Bookmark) {
        self.url = bookmark.url.clone();
        self.title = bookmark.title.clone();
        self.tags = bookmark.tags.join(", ");
        self.mode = FormMode::Editing(bookmark.id.clone());
    }

    /// Clears every field and returns to `Idle`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Idle => ADD_LABEL,
            FormMode::Editing(_) => SAVE_LABEL,
        }
    }

    pub fn view(&self) -> FormView {
        FormView {
            url: self.url.clone(),
            title: self.title.clone(),
            tags: self.tags.clone(),
            submit_label: self.submit_label().to_string(),
            editing_id: self.editing_id().map(str::to_string),
        }
    }
}
