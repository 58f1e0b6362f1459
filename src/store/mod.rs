pub mod bookmarks;
pub mod memory;
pub mod sqlite;

use crate::app::Result;

pub use bookmarks::BookmarkStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Scoped string key-value storage.
pub trait PersistenceClient {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
