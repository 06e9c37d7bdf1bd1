// URLibrary state managers
// Managers own mutable state: the bookmark list, the edit form, the logo modal.

pub mod bookmark_store;
pub mod form_state;
pub mod logo_modal;
