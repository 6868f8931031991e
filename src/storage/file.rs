//! File-backed store.
//!
//! The whole store is one JSON object of string values. Every `set`
//! rewrites the file through a temporary sibling and a rename, so a crash
//! mid-write leaves the previous contents intact.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use super::KeyValueStore;
use crate::core::error::StorageError;

/// Key/value store persisted as a JSON file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Use `path` as the backing file. It is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(values)?;
        let tmp = self.path.with_extension("tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // Unreadable contents are replaced rather than blocking the write
        let mut values = match self.load() {
            Ok(values) => values,
            Err(StorageError::Json(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "discarding corrupt store");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
    }
}
