//! View Controller for URLibrary.
//!
//! Translates user input into [`BookmarkStore`] operations and builds the
//! [`LibraryView`] the page displays. The controller never edits the list
//! directly; every mutation goes through the store.

use tracing::{debug, info, warn};

use crate::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use crate::managers::form_state::FormState;
use crate::services::date_format::format_added_on;
use crate::services::library_filter::filter_bookmarks;
use crate::services::validation::validate_form;
use crate::storage::KeyValueStorage;
use crate::types::bookmark::Bookmark;
use crate::types::errors::{LibraryError, StorageError};
use crate::types::settings::StorageSettings;
use crate::types::view::{BookmarkCard, LibraryView};
use crate::ui::prompt::{UserPrompt, DELETE_CONFIRMATION};

/// Outcome of a successful form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Added(Bookmark),
    /// The edited record was rewritten; `false` if it had disappeared meanwhile.
    Updated { id: String, found: bool },
}

pub struct ViewController<S: KeyValueStorage> {
    store: BookmarkStore<S>,
    form: FormState,
    query: String,
}

impl<S: KeyValueStorage> ViewController<S> {
    /// Takes ownership of an already loaded store.
    pub fn new(store: BookmarkStore<S>) -> Self {
        Self {
            store,
            form: FormState::new(),
            query: String::new(),
        }
    }

    pub fn store(&self) -> &BookmarkStore<S> {
        &self.store
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Current search box value.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.form.editing_id()
    }

    /// Sets the search query and returns the filtered view.
    pub fn render(&mut self, query: &str) -> LibraryView {
        self.query = query.to_string();
        self.view()
    }

    /// Builds the view for the current query without changing any state.
    pub fn view(&self) -> LibraryView {
        let cards = filter_bookmarks(self.store.all(), &self.query)
            .into_iter()
            .map(card_for)
            .collect();
        LibraryView {
            query: self.query.clone(),
            cards,
            form: self.form.view(),
        }
    }

    /// Validates the form and adds or updates a bookmark.
    ///
    /// On rejection the user is alerted, the typed values stay in the form and
    /// nothing is stored. On success the form is reset to idle.
    pub fn submit_form(
        &mut self,
        url: &str,
        title: &str,
        raw_tags: &str,
        prompt: &mut dyn UserPrompt,
    ) -> Result<Submission, LibraryError> {
        self.form.set_fields(url, title, raw_tags);
        let draft = match validate_form(url, title, raw_tags) {
            Ok(draft) => draft,
            Err(e) => {
                debug!(error = %e, "form submission rejected");
                prompt.alert(&e.to_string());
                return Err(e.into());
            }
        };

        let result = match self.form.editing_id().map(str::to_string) {
            Some(id) => self
                .store
                .update(&id, &draft.url, &draft.title, draft.tags)
                .map(|found| Submission::Updated { id, found }),
            None => self
                .store
                .add(&draft.url, &draft.title, draft.tags)
                .map(Submission::Added),
        };

        match result {
            Ok(submission) => {
                info!(?submission, "bookmark saved");
                self.form.reset();
                Ok(submission)
            }
            Err(e) => {
                warn!(error = %e, "failed to persist bookmark");
                prompt.alert(&e.to_string());
                Err(e.into())
            }
        }
    }

    /// Loads the bookmark `id` into the form for editing.
    /// Returns `false` and changes nothing if no such bookmark exists.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        match self.store.find(id) {
            Some(bookmark) => {
                self.form.begin_edit(bookmark);
                debug!(%id, "editing bookmark");
                true
            }
            None => false,
        }
    }

    /// Asks for confirmation, then removes the bookmark `id`.
    /// Returns whether a bookmark was removed.
    pub fn request_delete(&mut self, id: &str, prompt: &mut dyn UserPrompt) -> Result<bool, StorageError> {
        if !prompt.confirm(DELETE_CONFIRMATION) {
            debug!(%id, "delete cancelled");
            return Ok(false);
        }
        self.store.remove(id)
    }

    /// Replaces the search query with `tag` and returns the filtered view.
    pub fn filter_by_tag(&mut self, tag: &str) -> LibraryView {
        self.render(tag)
    }

    /// Re-targets the store at a new slot. The form is reset since an edited
    /// record may not exist in the new list.
    pub fn apply_storage_settings(&mut self, settings: &StorageSettings) -> LibraryView {
        self.store.apply_settings(settings);
        self.form.reset();
        self.view()
    }

    /// Clears the form and leaves edit mode.
    pub fn reset_form(&mut self) {
        self.form.reset();
    }
}

fn card_for(bookmark: &Bookmark) -> BookmarkCard {
    BookmarkCard {
        id: bookmark.id.clone(),
        url: bookmark.url.clone(),
        title: bookmark.has_title().then(|| bookmark.title.clone()),
        tags: bookmark.tags.clone(),
        added_on: format_added_on(&bookmark.created_at),
    }
}
