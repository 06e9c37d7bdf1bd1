//! Bookmark Store for URLibrary.
//!
//! Implements `BookmarkStoreTrait`: owns the ordered bookmark list (newest
//! first) and writes the whole list back to its storage slot after every
//! mutation.

use chrono::{DateTime, TimeZone, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::storage::codec::{decode_library, encode_library};
use crate::storage::KeyValueStorage;
use crate::types::bookmark::Bookmark;
use crate::types::errors::StorageError;
use crate::types::settings::StorageSettings;

/// Trait defining bookmark store operations.
pub trait BookmarkStoreTrait {
    /// Replaces the in-memory list with the persisted one and returns it.
    ///
    /// A missing or malformed slot reads as empty; an empty list is then
    /// seeded with the demonstration records when seeding is enabled.
    fn load(&mut self) -> &[Bookmark];
    /// Prepends a new record with a fresh id and the current time.
    /// Every mutation is persisted before it becomes visible; on a storage
    /// error the list is unchanged.
    fn add(&mut self, url: &str, title: &str, tags: Vec<String>) -> Result<Bookmark, StorageError>;
    /// Replaces url, title and tags of the record `id` in place.
    /// Returns `Ok(false)` without persisting when no such record exists.
    fn update(&mut self, id: &str, url: &str, title: &str, tags: Vec<String>) -> Result<bool, StorageError>;
    /// Removes the record `id`. Returns `Ok(false)` when no such record exists.
    fn remove(&mut self, id: &str) -> Result<bool, StorageError>;
    /// Writes the current list to the storage slot.
    fn save(&mut self) -> Result<(), StorageError>;
    fn all(&self) -> &[Bookmark];
    fn find(&self, id: &str) -> Option<&Bookmark>;
}

/// Bookmark store backed by any [`KeyValueStorage`].
pub struct BookmarkStore<S: KeyValueStorage> {
    storage: S,
    slot_key: String,
    seed_demo_data: bool,
    records: Vec<Bookmark>,
}

impl<S: KeyValueStorage> BookmarkStore<S> {
    /// Creates an empty store using the default slot and demo seeding.
    /// Call [`BookmarkStoreTrait::load`] to read the persisted list.
    pub fn new(storage: S) -> Self {
        Self::with_settings(storage, &StorageSettings::default())
    }

    pub fn with_settings(storage: S, settings: &StorageSettings) -> Self {
        Self {
            storage,
            slot_key: settings.slot_key.clone(),
            seed_demo_data: settings.seed_demo_data,
            records: Vec::new(),
        }
    }

    /// Creates a store and loads the persisted list.
    pub fn open(storage: S, settings: &StorageSettings) -> Self {
        let mut store = Self::with_settings(storage, settings);
        store.load();
        store
    }

    /// Switches to another slot or seeding rule and reloads from it.
    pub fn apply_settings(&mut self, settings: &StorageSettings) -> &[Bookmark] {
        self.slot_key = settings.slot_key.clone();
        self.seed_demo_data = settings.seed_demo_data;
        info!(slot = %self.slot_key, "storage settings changed, reloading");
        self.load()
    }

    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the store, handing back its storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|b| b.id == id)
    }

    /// Writes `next` to the slot and adopts it only once the write succeeded,
    /// so a failed mutation leaves the list untouched.
    fn commit(&mut self, next: Vec<Bookmark>) -> Result<(), StorageError> {
        let encoded = encode_library(&next)?;
        self.storage.set_item(&self.slot_key, &encoded)?;
        self.records = next;
        Ok(())
    }

    fn read_slot(&self) -> Vec<Bookmark> {
        match self.storage.get_item(&self.slot_key) {
            Ok(Some(raw)) => decode_library(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, slot = %self.slot_key, "failed to read library slot, starting empty");
                Vec::new()
            }
        }
    }
}

impl<S: KeyValueStorage> BookmarkStoreTrait for BookmarkStore<S> {
    fn load(&mut self) -> &[Bookmark] {
        self.records = self.read_slot();
        if self.records.is_empty() && self.seed_demo_data {
            info!("library is empty, seeding demonstration bookmarks");
            self.records = demo_bookmarks();
            if let Err(e) = self.save() {
                warn!(error = %e, "failed to persist demonstration bookmarks");
            }
        }
        debug!(count = self.records.len(), "library loaded");
        &self.records
    }

    fn add(&mut self, url: &str, title: &str, tags: Vec<String>) -> Result<Bookmark, StorageError> {
        let bookmark = Bookmark {
            id: Uuid::new_v4().to_string(),
            url: url.to_string(),
            title: title.to_string(),
            tags,
            created_at: Utc::now(),
        };
        let mut next = Vec::with_capacity(self.records.len() + 1);
        next.push(bookmark.clone());
        next.extend(self.records.iter().cloned());
        self.commit(next)?;
        debug!(id = %bookmark.id, "bookmark added");
        Ok(bookmark)
    }

    fn update(&mut self, id: &str, url: &str, title: &str, tags: Vec<String>) -> Result<bool, StorageError> {
        let Some(idx) = self.position(id) else {
            debug!(%id, "update ignored, no such bookmark");
            return Ok(false);
        };
        let mut next = self.records.clone();
        let bm = &mut next[idx];
        bm.url = url.to_string();
        bm.title = title.to_string();
        bm.tags = tags;
        self.commit(next)?;
        debug!(%id, "bookmark updated");
        Ok(true)
    }

    fn remove(&mut self, id: &str) -> Result<bool, StorageError> {
        let Some(idx) = self.position(id) else {
            debug!(%id, "remove ignored, no such bookmark");
            return Ok(false);
        };
        let mut next = self.records.clone();
        next.remove(idx);
        self.commit(next)?;
        debug!(%id, "bookmark removed");
        Ok(true)
    }

    fn save(&mut self) -> Result<(), StorageError> {
        let encoded = encode_library(&self.records)?;
        self.storage.set_item(&self.slot_key, &encoded)
    }

    fn all(&self) -> &[Bookmark] {
        &self.records
    }

    fn find(&self, id: &str) -> Option<&Bookmark> {
        self.records.iter().find(|b| b.id == id)
    }
}

/// The two records shown on first start.
pub fn demo_bookmarks() -> Vec<Bookmark> {
    let tags = |list: &[&str]| list.iter().map(|t| t.to_string()).collect::<Vec<_>>();
    vec![
        Bookmark {
            id: Uuid::new_v4().to_string(),
            url: "https://youtube.com/watch?v=headvideoeditingtutorial".to_string(),
            title: "Head Video Editing Tutorial".to_string(),
            tags: tags(&["video", "editing", "tutorial", "head"]),
            created_at: demo_time(2025, 7, 28),
        },
        Bookmark {
            id: Uuid::new_v4().to_string(),
            url: "https://adobe.com/products/creative-suite".to_string(),
            title: "Adobe Creative Suite".to_string(),
            tags: tags(&["software", "design", "editing", "adobe"]),
            created_at: demo_time(2025, 7, 27),
        },
    ]
}

fn demo_time(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}
