//! In-memory key/value store implementation

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::storage::KeyValueStore;

/// In-memory implementation of KeyValueStore
///
/// Contents vanish when the process exits. Intended for development and
/// tests, and as the default backend.
#[derive(Debug, Default)]
pub struct InMemoryKvStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKvStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        Ok(entries.get(key).cloned())
    }

    async fn put(&self, key: &str, value: String) -> Result<(), DomainError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, DomainError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        Ok(entries.remove(key).is_some())
    }
}
