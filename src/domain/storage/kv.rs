//! Key/value store trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Generic key/value store over string keys holding serialized JSON documents.
///
/// There is exactly one logical writer (the serving process), so backends
/// provide no cross-process coordination: last writer wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync + Debug {
    /// Retrieves the value stored under a key, if any
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Stores a value under a key, replacing any previous value
    async fn put(&self, key: &str, value: String) -> Result<(), DomainError>;

    /// Removes a key, returns true if it was present
    async fn remove(&self, key: &str) -> Result<bool, DomainError>;

    /// Checks whether a key is present
    async fn contains(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.get(key).await?.is_some())
    }
}
