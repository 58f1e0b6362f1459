use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::app::{OsonewsError, Result};
use crate::domain::Bookmark;
use crate::store::PersistenceClient;

/// Key the serialized bookmark list lives under.
pub const BOOKMARKS_KEY: &str = "bookmarks";

#[derive(Debug, Default)]
struct BookmarkSet {
    entries: Vec<Bookmark>,
    urls: HashSet<String>,
}

impl BookmarkSet {
    /// Keeps the first entry for each url.
    fn from_entries(entries: Vec<Bookmark>) -> Self {
        let mut set = Self::default();
        for bookmark in entries {
            if set.urls.insert(bookmark.url.clone()) {
                set.entries.push(bookmark);
            }
        }
        set
    }
}

/// Deduplicated bookmarks, written through to persistence on every change.
pub struct BookmarkStore {
    persistence: Arc<dyn PersistenceClient + Send + Sync>,
    state: Mutex<BookmarkSet>,
}

impl BookmarkStore {
    /// Create a store and load whatever is persisted.
    pub fn new(persistence: Arc<dyn PersistenceClient + Send + Sync>) -> Self {
        let store = Self {
            persistence,
            state: Mutex::new(BookmarkSet::default()),
        };
        store.load();
        store
    }

    /// Replace the in-memory set with the persisted one. Missing or unreadable
    /// state loads as an empty set.
    pub fn load(&self) -> Vec<Bookmark> {
        let entries = match self.read_persisted() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Ignoring persisted bookmarks: {}", e);
                Vec::new()
            }
        };

        let mut state = self.lock();
        *state = BookmarkSet::from_entries(entries);
        tracing::debug!("Loaded {} bookmarks", state.entries.len());
        state.entries.clone()
    }

    /// Remove the bookmark for `url` if there is one, otherwise append it.
    ///
    /// The resulting list is persisted before it replaces the in-memory
    /// state; if persisting fails the in-memory state is left untouched.
    pub fn toggle(&self, url: &str, title: &str) -> Result<Vec<Bookmark>> {
        let mut state = self.lock();

        let next: Vec<Bookmark> = if state.urls.contains(url) {
            state
                .entries
                .iter()
                .filter(|b| b.url != url)
                .cloned()
                .collect()
        } else {
            let mut entries = state.entries.clone();
            entries.push(Bookmark::new(url, title));
            entries
        };

        let serialized = serde_json::to_string(&next)?;
        self.persistence.set(BOOKMARKS_KEY, &serialized)?;

        *state = BookmarkSet::from_entries(next);
        Ok(state.entries.clone())
    }

    pub fn is_bookmarked(&self, url: &str) -> bool {
        self.lock().urls.contains(url)
    }

    pub fn bookmarks(&self) -> Vec<Bookmark> {
        self.lock().entries.clone()
    }

    fn read_persisted(&self) -> Result<Vec<Bookmark>> {
        let Some(raw) = self.persistence.get(BOOKMARKS_KEY)? else {
            return Ok(Vec::new());
        };

        if raw.trim().is_empty() || raw.trim() == "null" {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|e| OsonewsError::PersistenceCorrupt(e.to_string()))
    }

    // The set is only replaced after a successful write, so a poisoned lock
    // still guards consistent data.
    fn lock(&self) -> MutexGuard<'_, BookmarkSet> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
