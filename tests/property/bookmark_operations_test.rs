//! Property-based tests for bookmark store mutations.
//!
//! Adding always yields a fresh id at the front of the list, removing drops
//! exactly one record, and unknown ids never change the list.

use proptest::prelude::*;
use std::collections::HashSet;
use urlibrary::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use urlibrary::storage::MemoryStorage;
use urlibrary::types::settings::StorageSettings;

fn arb_url() -> impl Strategy<Value = String> {
    (prop_oneof![Just("https"), Just("http")], "[a-z][a-z0-9]{2,12}")
        .prop_map(|(scheme, host)| format!("{}://{}.com", scheme, host))
}

fn arb_entry() -> impl Strategy<Value = (String, String, Vec<String>)> {
    (arb_url(), "[a-zA-Z ]{0,20}", proptest::collection::vec("[a-z]{1,8}", 1..4))
}

fn empty_store() -> BookmarkStore<MemoryStorage> {
    let settings = StorageSettings {
        seed_demo_data: false,
        ..StorageSettings::default()
    };
    BookmarkStore::open(MemoryStorage::new(), &settings)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn add_prepends_with_unique_ids(entries in proptest::collection::vec(arb_entry(), 1..10)) {
        let mut store = empty_store();
        for (url, title, tags) in &entries {
            let added = store.add(url, title, tags.clone()).unwrap();
            prop_assert_eq!(&store.all()[0], &added);
            prop_assert_eq!(&added.url, url);
            prop_assert_eq!(&added.tags, tags);
        }
        let ids: HashSet<&str> = store.all().iter().map(|b| b.id.as_str()).collect();
        prop_assert_eq!(ids.len(), entries.len());
    }

    #[test]
    fn remove_drops_exactly_one(
        entries in proptest::collection::vec(arb_entry(), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = empty_store();
        for (url, title, tags) in &entries {
            store.add(url, title, tags.clone()).unwrap();
        }
        let before: Vec<String> = store.all().iter().map(|b| b.id.clone()).collect();
        let victim = before[pick.index(before.len())].clone();

        prop_assert!(store.remove(&victim).unwrap());
        let after: Vec<String> = store.all().iter().map(|b| b.id.clone()).collect();
        let expected: Vec<String> = before.into_iter().filter(|id| *id != victim).collect();
        prop_assert_eq!(after, expected);
    }

    #[test]
    fn update_keeps_position_and_identity(
        entries in proptest::collection::vec(arb_entry(), 1..6),
        replacement in arb_entry(),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = empty_store();
        for (url, title, tags) in &entries {
            store.add(url, title, tags.clone()).unwrap();
        }
        let idx = pick.index(store.all().len());
        let original = store.all()[idx].clone();
        let (url, title, tags) = replacement;

        prop_assert!(store.update(&original.id, &url, &title, tags.clone()).unwrap());
        let updated = &store.all()[idx];
        prop_assert_eq!(&updated.id, &original.id);
        prop_assert_eq!(updated.created_at, original.created_at);
        prop_assert_eq!(&updated.url, &url);
        prop_assert_eq!(&updated.title, &title);
        prop_assert_eq!(&updated.tags, &tags);
        prop_assert_eq!(store.all().len(), entries.len());
    }

    #[test]
    fn unknown_id_changes_nothing(entries in proptest::collection::vec(arb_entry(), 0..5)) {
        let mut store = empty_store();
        for (url, title, tags) in &entries {
            store.add(url, title, tags.clone()).unwrap();
        }
        let before = store.all().to_vec();
        prop_assert!(!store.remove("not-a-real-id").unwrap());
        prop_assert!(!store.update("not-a-real-id", "https://x.com", "", vec!["x".into()]).unwrap());
        prop_assert_eq!(store.all(), before.as_slice());
    }
}
