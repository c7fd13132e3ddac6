//! Storage factory for runtime backend selection

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::DomainError;
use crate::domain::storage::KeyValueStore;

use super::in_memory::InMemoryKvStore;
use super::json_file::JsonFileKvStore;

/// Supported storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Volatile in-memory store
    #[default]
    Memory,
    /// JSON documents on disk, one file per store key
    File,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Memory => write!(f, "memory"),
            StorageBackend::File => write!(f, "file"),
        }
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "in_memory" | "inmemory" => Ok(StorageBackend::Memory),
            "file" | "json_file" => Ok(StorageBackend::File),
            _ => Err(DomainError::configuration(format!(
                "Unknown storage backend: {}. Valid backends: memory, file",
                s
            ))),
        }
    }
}

/// Factory for creating key/value store instances
#[derive(Debug, Default)]
pub struct StorageFactory;

impl StorageFactory {
    pub fn new() -> Self {
        Self
    }

    /// Creates a store for the configured backend
    pub fn create(
        &self,
        backend: StorageBackend,
        data_dir: &PathBuf,
    ) -> Result<Arc<dyn KeyValueStore>, DomainError> {
        match backend {
            StorageBackend::Memory => Ok(Arc::new(InMemoryKvStore::new())),
            StorageBackend::File => Ok(Arc::new(JsonFileKvStore::new(data_dir)?)),
        }
    }
}
