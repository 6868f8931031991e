//! In-memory store.

use rustc_hash::FxHashMap;

use super::KeyValueStore;
use crate::core::error::StorageError;

/// Key/value store that lives as long as the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one value already written.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.values.insert(key.into(), value.into());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
