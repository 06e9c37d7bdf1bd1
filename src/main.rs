//! URLibrary: a tag-based personal URL library.
//!
//! Entry point: opens the webview window. When built without the `gui`
//! feature, runs a console walkthrough against an in-memory library.

#[cfg(feature = "gui")]
fn main() {
    if let Err(e) = urlibrary::ui::webview_app::run() {
        eprintln!("urlibrary: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    use urlibrary::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
    use urlibrary::services::logger::init_logger;
    use urlibrary::storage::MemoryStorage;
    use urlibrary::types::settings::StorageSettings;
    use urlibrary::types::view::LibraryView;
    use urlibrary::ui::prompt::RecordedPrompt;
    use urlibrary::ui::view_controller::ViewController;

    fn print_view(label: &str, view: &LibraryView) {
        println!("── {} (query: {:?})", label, view.query);
        if view.is_empty() {
            println!("   (no bookmarks found)");
        }
        for card in &view.cards {
            println!(
                "   {}  {}  [{}]  added {}",
                card.url,
                card.title.as_deref().unwrap_or("-"),
                card.tags.join(", "),
                card.added_on
            );
        }
        println!();
    }

    init_logger("warn");

    let store = BookmarkStore::open(MemoryStorage::new(), &StorageSettings::default());
    let mut controller = ViewController::new(store);
    print_view("Seeded library", &controller.render(""));

    let mut prompt = RecordedPrompt::answering(true);
    let _ = controller.submit_form("ftp://x.com", "T", "a,b", &mut prompt);
    let _ = controller.submit_form("https://x.com", "", "", &mut prompt);
    for alert in prompt.alerts() {
        println!("   rejected: {}", alert);
    }

    if let Err(e) = controller.submit_form("https://docs.rs", "Docs.rs", "rust, docs", &mut prompt) {
        println!("   failed: {}", e);
    }
    print_view("After adding docs.rs", &controller.render(""));
    print_view("Filtered by tag", &controller.filter_by_tag("editing"));

    let first_id = controller.store().all().first().map(|b| b.id.clone());
    if let Some(id) = first_id {
        let _ = controller.request_delete(&id, &mut prompt);
    }
    print_view("After deleting the newest", &controller.render(""));
}
