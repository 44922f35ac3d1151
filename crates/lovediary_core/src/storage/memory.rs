use super::{lock_poisoned, Store, StoreResult};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-process store backed by a map.
///
/// Used by tests and by sessions that should not touch the device.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a value is currently stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .lock()
            .map(|entries| entries.contains_key(key))
            .unwrap_or(false)
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| lock_poisoned("memory"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock().map_err(|_| lock_poisoned("memory"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock().map_err(|_| lock_poisoned("memory"))?;
        entries.remove(key);
        Ok(())
    }
}
