//! File-backed key/value store implementation

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::storage::KeyValueStore;

/// File-backed implementation of KeyValueStore
///
/// Each key maps to one JSON document at `<data_dir>/<key>.json`. Writes go
/// through a temporary file and a rename so a crash mid-write never leaves a
/// truncated document behind.
#[derive(Debug)]
pub struct JsonFileKvStore {
    data_dir: PathBuf,
}

impl JsonFileKvStore {
    /// Creates a store rooted at the given directory, creating it if needed
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let data_dir = data_dir.into();

        std::fs::create_dir_all(&data_dir).map_err(|e| {
            DomainError::storage(format!(
                "Failed to create data directory '{}': {}",
                data_dir.display(),
                e
            ))
        })?;

        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, DomainError> {
        // Keys are fixed store names, never user input, but reject path
        // separators anyway so a bad key cannot escape the data directory.
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(DomainError::storage(format!("Invalid store key: '{key}'")));
        }

        Ok(self.data_dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.path_for(key)?;

        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::storage(format!(
                "Failed to read '{}': {}",
                path.display(),
                e
            ))),
        }
    }

    async fn put(&self, key: &str, value: String) -> Result<(), DomainError> {
        let path = self.path_for(key)?;
        let tmp_path = self.data_dir.join(format!("{key}.json.tmp"));

        tokio::fs::write(&tmp_path, value).await.map_err(|e| {
            DomainError::storage(format!("Failed to write '{}': {}", tmp_path.display(), e))
        })?;

        tokio::fs::rename(&tmp_path, &path).await.map_err(|e| {
            DomainError::storage(format!("Failed to replace '{}': {}", path.display(), e))
        })
    }

    async fn remove(&self, key: &str) -> Result<bool, DomainError> {
        let path = self.path_for(key)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DomainError::storage(format!(
                "Failed to remove '{}': {}",
                path.display(),
                e
            ))),
        }
    }
}
