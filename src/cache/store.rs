//! Key-value store abstraction

use std::collections::HashMap;

use parking_lot::Mutex;
use thiserror::Error;

/// Errors raised by a key-value store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing storage failed
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// An entry could not be encoded for storage
    #[error("Failed to serialize entry: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The key cannot be represented by this store
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// A synchronous, string-keyed, string-valued persistent store
///
/// Mirrors browser `localStorage` semantics: no expiry or namespacing of its
/// own. Implementations must be safe to share between concurrent fetches.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key`; removing a missing key is not an error
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Lists every key currently present
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

/// In-memory store, used for ephemeral runs and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entries.lock().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.entries.lock().keys().cloned().collect())
    }
}
