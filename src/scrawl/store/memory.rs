use super::ItemStore;
use crate::error::{Result, ScrawlError};
use crate::model::ItemId;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Clone)]
struct Entry {
    bytes: Vec<u8>,
    mtime: DateTime<Utc>,
}

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    items: RwLock<HashMap<ItemId, Entry>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test helper to set mtime directly for ordering tests.
    /// Returns true if the entry existed and was updated.
    pub fn set_modified(&self, id: &ItemId, mtime: DateTime<Utc>) -> bool {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        match items.get_mut(id) {
            Some(entry) => {
                entry.mtime = mtime;
                true
            }
            None => false,
        }
    }
}

impl ItemStore for InMemoryStore {
    fn list_ids(&self) -> Result<Vec<ItemId>> {
        let items = self.items.read().unwrap_or_else(|e| e.into_inner());
        Ok(items.keys().cloned().collect())
    }

    fn read(&self, id: &ItemId) -> Result<Option<Vec<u8>>> {
        let items = self.items.read().unwrap_or_else(|e| e.into_inner());
        Ok(items.get(id).map(|e| e.bytes.clone()))
    }

    fn create(&self, id: &ItemId, content: &[u8]) -> Result<()> {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        if items.contains_key(id) {
            return Err(ScrawlError::ItemExists(id.to_string()));
        }
        items.insert(
            id.clone(),
            Entry {
                bytes: content.to_vec(),
                mtime: Utc::now(),
            },
        );
        Ok(())
    }

    fn overwrite(&self, id: &ItemId, content: &[u8]) -> Result<()> {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        items.insert(
            id.clone(),
            Entry {
                bytes: content.to_vec(),
                mtime: Utc::now(),
            },
        );
        Ok(())
    }

    fn delete(&self, id: &ItemId) -> Result<()> {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        match items.remove(id) {
            Some(_) => Ok(()),
            None => Err(ScrawlError::ItemNotFound(id.to_string())),
        }
    }

    fn modified(&self, id: &ItemId) -> Result<Option<DateTime<Utc>>> {
        let items = self.items.read().unwrap_or_else(|e| e.into_inner());
        Ok(items.get(id).map(|e| e.mtime))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_notes(self, count: usize) -> Self {
            for i in 0..count {
                let content = format!("Note {}\nbody of note {}", i + 1, i + 1);
                self.store
                    .create(&ItemId::new_note(), content.as_bytes())
                    .unwrap();
            }
            self
        }

        pub fn with_item(self, id: &str, content: &str) -> Self {
            let id = ItemId::parse(id).unwrap();
            self.store.create(&id, content.as_bytes()).unwrap();
            self
        }

        pub fn with_scratch(self, content: &str) -> Self {
            self.store
                .overwrite(&ItemId::scratch(), content.as_bytes())
                .unwrap();
            self
        }
    }
}
