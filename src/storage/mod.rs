//! Durable key/value storage port.
//!
//! The score tracker reads and writes one string value through this
//! trait. Two implementations are provided:
//! - `MemoryStore`: process-lifetime map, for tests and embedding
//! - `JsonFileStore`: one JSON object on disk, survives restarts

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::core::error::StorageError;

/// String key/value store.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` if the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
