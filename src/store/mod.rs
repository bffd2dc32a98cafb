pub mod error;
mod migrate;
pub mod snapshot;
mod sqlite;

use std::collections::HashMap;

pub use error::{StoreError, StoreResult};
pub use snapshot::{CURRENT_VERSION, Snapshot};
pub use sqlite::SqliteStore;

/// Where the serialized dashboard state lives.
///
/// One writer, one reader: implementations need no locking.
pub trait KeyValueStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>>;
    fn save(&mut self, key: &str, blob: &str) -> StoreResult<()>;
    /// Delete `key`. Returns whether anything was stored under it.
    fn remove(&mut self, key: &str) -> StoreResult<bool>;
}

/// `HashMap` backed store. `fail_writes` makes every save fail, which is how
/// tests reproduce a full disk or exhausted quota.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, blob: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_string(), blob.to_string());
        store
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, blob: &str) -> StoreResult<()> {
        if self.fail_writes {
            return Err(StoreError::Unavailable("storage quota exceeded".into()));
        }
        self.entries.insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<bool> {
        Ok(self.entries.remove(key).is_some())
    }
}
