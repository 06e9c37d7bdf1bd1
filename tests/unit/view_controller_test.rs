//! Unit tests for the ViewController: form submission, editing, deletion,
//! filtering and the Idle/Editing form state machine.

use urlibrary::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use urlibrary::managers::form_state::{FormMode, ADD_LABEL, SAVE_LABEL};
use urlibrary::storage::{KeyValueStorage, MemoryStorage};
use urlibrary::types::errors::{FormError, LibraryError, StorageError};
use urlibrary::types::settings::StorageSettings;
use urlibrary::ui::prompt::{RecordedPrompt, DELETE_CONFIRMATION};
use urlibrary::ui::view_controller::{Submission, ViewController};

fn empty_controller() -> ViewController<MemoryStorage> {
    let settings = StorageSettings {
        seed_demo_data: false,
        ..StorageSettings::default()
    };
    ViewController::new(BookmarkStore::open(MemoryStorage::new(), &settings))
}

fn seeded_controller() -> ViewController<MemoryStorage> {
    ViewController::new(BookmarkStore::open(MemoryStorage::new(), &StorageSettings::default()))
}

fn add(controller: &mut ViewController<MemoryStorage>, url: &str, title: &str, tags: &str) -> String {
    let mut prompt = RecordedPrompt::default();
    match controller.submit_form(url, title, tags, &mut prompt).unwrap() {
        Submission::Added(bm) => bm.id,
        other => panic!("expected an add, got {:?}", other),
    }
}

#[test]
fn test_initial_state_is_idle() {
    let controller = empty_controller();
    assert_eq!(controller.form().mode(), &FormMode::Idle);
    assert!(controller.editing_id().is_none());
    assert_eq!(controller.view().form.submit_label, ADD_LABEL);
}

#[test]
fn test_submit_rejects_non_http_scheme() {
    let mut controller = empty_controller();
    let mut prompt = RecordedPrompt::default();

    let result = controller.submit_form("ftp://x.com", "T", "a,b", &mut prompt);
    assert!(matches!(result, Err(LibraryError::Form(FormError::InvalidUrl))));
    assert!(controller.store().all().is_empty());
    assert_eq!(prompt.last_alert(), Some("URL must start with http:// or https://"));

    // Entered values stay in the form.
    let form = controller.view().form;
    assert_eq!(form.url, "ftp://x.com");
    assert_eq!(form.title, "T");
    assert_eq!(form.tags, "a,b");
}

#[test]
fn test_submit_rejects_missing_tags() {
    let mut controller = empty_controller();
    let mut prompt = RecordedPrompt::default();

    let result = controller.submit_form("https://x.com", "", "", &mut prompt);
    assert!(matches!(result, Err(LibraryError::Form(FormError::MissingTags))));
    assert!(controller.store().all().is_empty());
    assert_eq!(prompt.alerts(), &["Please add at least one tag".to_string()]);

    let result = controller.submit_form("https://x.com", "", " , ", &mut prompt);
    assert!(result.is_err());
    assert!(controller.store().all().is_empty());
}

#[test]
fn test_submit_adds_and_resets_form() {
    let mut controller = empty_controller();
    let id = add(&mut controller, "  https://x.com ", " X ", "a, b");

    let all = controller.store().all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id);
    assert_eq!(all[0].url, "https://x.com");
    assert_eq!(all[0].title, "X");
    assert_eq!(all[0].tags, vec!["a", "b"]);

    let form = controller.view().form;
    assert!(form.url.is_empty() && form.title.is_empty() && form.tags.is_empty());
    assert_eq!(form.submit_label, ADD_LABEL);
}

#[test]
fn test_begin_edit_loads_form() {
    let mut controller = empty_controller();
    let id = add(&mut controller, "https://x.com", "X", "a,b");

    assert!(controller.begin_edit(&id));
    assert_eq!(controller.editing_id(), Some(id.as_str()));
    let form = controller.view().form;
    assert_eq!(form.url, "https://x.com");
    assert_eq!(form.title, "X");
    assert_eq!(form.tags, "a, b");
    assert_eq!(form.submit_label, SAVE_LABEL);
    assert_eq!(form.editing_id.as_deref(), Some(id.as_str()));
}

#[test]
fn test_begin_edit_unknown_id_is_noop() {
    let mut controller = empty_controller();
    assert!(!controller.begin_edit("missing"));
    assert_eq!(controller.form().mode(), &FormMode::Idle);
}

#[test]
fn test_submit_while_editing_updates_in_place() {
    let mut controller = empty_controller();
    let first = add(&mut controller, "https://a.io", "A", "a");
    let _second = add(&mut controller, "https://b.io", "B", "b");
    let created_at = controller.store().find(&first).unwrap().created_at;

    controller.begin_edit(&first);
    let mut prompt = RecordedPrompt::default();
    let outcome = controller
        .submit_form("https://c.io", "C", "c", &mut prompt)
        .unwrap();
    assert_eq!(outcome, Submission::Updated { id: first.clone(), found: true });

    let all = controller.store().all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].id, first);
    assert_eq!(all[1].url, "https://c.io");
    assert_eq!(all[1].created_at, created_at);
    assert_eq!(controller.form().mode(), &FormMode::Idle);
}

#[test]
fn test_failed_submit_keeps_editing() {
    let mut controller = empty_controller();
    let id = add(&mut controller, "https://a.io", "A", "a");
    controller.begin_edit(&id);

    let mut prompt = RecordedPrompt::default();
    assert!(controller.submit_form("nope", "A", "a", &mut prompt).is_err());
    assert_eq!(controller.editing_id(), Some(id.as_str()));
    assert_eq!(controller.store().find(&id).unwrap().url, "https://a.io");
}

#[test]
fn test_second_begin_edit_retargets() {
    let mut controller = empty_controller();
    let a = add(&mut controller, "https://a.io", "A", "a");
    let b = add(&mut controller, "https://b.io", "B", "b");

    controller.begin_edit(&a);
    controller.begin_edit(&b);
    assert_eq!(controller.editing_id(), Some(b.as_str()));
    assert_eq!(controller.view().form.url, "https://b.io");
}

#[test]
fn test_reset_form_returns_to_idle() {
    let mut controller = empty_controller();
    let id = add(&mut controller, "https://a.io", "A", "a");
    controller.begin_edit(&id);
    controller.reset_form();
    assert_eq!(controller.form().mode(), &FormMode::Idle);

    // A submit after reset adds rather than updates.
    let mut prompt = RecordedPrompt::default();
    let outcome = controller.submit_form("https://n.io", "", "n", &mut prompt).unwrap();
    assert!(matches!(outcome, Submission::Added(_)));
    assert_eq!(controller.store().all().len(), 2);
}

#[test]
fn test_request_delete_confirmed() {
    let mut controller = empty_controller();
    let id = add(&mut controller, "https://a.io", "A", "a");
    let mut prompt = RecordedPrompt::answering(true);

    assert!(controller.request_delete(&id, &mut prompt).unwrap());
    assert!(controller.store().all().is_empty());
    assert_eq!(prompt.confirmations(), &[DELETE_CONFIRMATION.to_string()]);
    assert!(controller.view().is_empty());
}

#[test]
fn test_request_delete_cancelled() {
    let mut controller = empty_controller();
    let id = add(&mut controller, "https://a.io", "A", "a");
    let mut prompt = RecordedPrompt::answering(false);

    assert!(!controller.request_delete(&id, &mut prompt).unwrap());
    assert_eq!(controller.store().all().len(), 1);
}

#[test]
fn test_render_filters_case_insensitively() {
    let mut controller = seeded_controller();
    let view = controller.render("VIDEO");
    assert_eq!(view.query, "VIDEO");
    assert_eq!(view.cards.len(), 1);
    assert_eq!(view.cards[0].title.as_deref(), Some("Head Video Editing Tutorial"));
    assert_eq!(view.cards[0].added_on, "Jul 28, 2025");

    assert_eq!(controller.render("editing").cards.len(), 2);
    assert_eq!(controller.render("").cards.len(), 2);
    assert!(controller.render("no-such-thing").is_empty());
}

#[test]
fn test_render_query_runs_across_fields() {
    let mut controller = seeded_controller();

    // Title "...Tutorial" is followed by the first tag "video".
    let view = controller.render("tutorial video");
    assert_eq!(view.cards.len(), 1);
    assert_eq!(view.cards[0].title.as_deref(), Some("Head Video Editing Tutorial"));

    // Last two tags of the same record.
    let view = controller.render("Tutorial Head");
    assert_eq!(view.cards.len(), 1);
    assert_eq!(view.cards[0].title.as_deref(), Some("Head Video Editing Tutorial"));

    assert_eq!(controller.render("suite software").cards.len(), 1);
    assert!(controller.render("head adobe").is_empty());
}

#[test]
fn test_filter_by_tag_sets_query() {
    let mut controller = seeded_controller();
    let id = add(&mut controller, "https://x.io", "", "a,b");

    let view = controller.filter_by_tag("a");
    assert_eq!(controller.query(), "a");
    assert!(view.cards.iter().any(|c| c.id == id));
    for card in &view.cards {
        let hit = card.url.to_lowercase().contains('a')
            || card.title.as_deref().unwrap_or("").to_lowercase().contains('a')
            || card.tags.iter().any(|t| t.to_lowercase().contains('a'));
        assert!(hit, "card {:?} should match 'a'", card);
    }

    // The stored query drives later views.
    assert_eq!(controller.view().cards, view.cards);
}

#[test]
fn test_untitled_card_has_no_title() {
    let mut controller = empty_controller();
    add(&mut controller, "https://x.io", "", "a");
    assert_eq!(controller.view().cards[0].title, None);
}

#[test]
fn test_new_records_render_first() {
    let mut controller = seeded_controller();
    let id = add(&mut controller, "https://x.io", "", "a");
    assert_eq!(controller.render("").cards[0].id, id);
}

/// Reads succeed, every write fails.
struct ReadOnlyStorage(MemoryStorage);

impl KeyValueStorage for ReadOnlyStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.get_item(key)
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("disk full".to_string()))
    }

    fn remove_item(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("disk full".to_string()))
    }
}

#[test]
fn test_retrying_failed_save_adds_nothing() {
    let settings = StorageSettings {
        seed_demo_data: false,
        ..StorageSettings::default()
    };
    let store = BookmarkStore::open(ReadOnlyStorage(MemoryStorage::new()), &settings);
    let mut controller = ViewController::new(store);
    let mut prompt = RecordedPrompt::default();

    for _ in 0..2 {
        let result = controller.submit_form("https://x.com", "X", "a", &mut prompt);
        assert!(matches!(result, Err(LibraryError::Storage(_))));
    }
    assert!(controller.store().all().is_empty());
    assert!(controller.view().is_empty());
    assert_eq!(prompt.alerts().len(), 2);
    assert_eq!(prompt.last_alert(), Some("Storage backend error: disk full"));

    // The typed values stay for another attempt.
    assert_eq!(controller.view().form.url, "https://x.com");
}
