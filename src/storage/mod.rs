//! Durable key-value persistence.
//!
//! The budget store only ever needs two calls: read the serialized collection
//! under a key, and replace it wholesale. Anything that can do that atomically
//! can back a store.

mod schema;
mod sqlite;

pub(crate) use sqlite::SqliteStore;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage backend error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("stored collection is unreadable: {0}")]
    Decode(String),

    #[error("failed to serialize collection: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    /// Returns the value under `key`, or `None` if nothing was ever written.
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Replaces the value under `key`. Either the whole value lands or nothing
    /// does.
    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// Process-local store, used as a test double.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    values: std::collections::HashMap<String, String>,
    pub(crate) writes: usize,
}

#[cfg(test)]
impl MemoryStore {
    pub(crate) fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
