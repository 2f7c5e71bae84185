use crate::storage::traits::{StateStorage, StorageResult};
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory storage backend. Used by tests, and by sharing one handle
/// across store instances it doubles as a restart simulation.
#[derive(Default)]
pub struct MemoryStorage {
    records: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl StateStorage for MemoryStorage {
    async fn load(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.records.read().get(key).cloned())
    }

    async fn save(&self, key: &str, value: String) -> StorageResult<()> {
        self.records.write().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.records.write().remove(key);
        Ok(())
    }
}
