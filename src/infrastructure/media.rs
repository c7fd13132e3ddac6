//! Payment receipt storage

use std::fmt::Debug;
use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::DomainError;

/// Stores uploaded payment receipt images and hands back an opaque reference
/// that is persisted on the registrant.
#[async_trait]
pub trait ReceiptStore: Send + Sync + Debug {
    /// Validates and stores a receipt image, returning its reference
    async fn store(
        &self,
        file_name: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<String, DomainError>;

    /// Remove a stored receipt by its reference. Removing a reference that
    /// no longer exists is not an error.
    async fn remove(&self, reference: &str) -> Result<(), DomainError>;
}

const MAX_RECEIPT_BYTES: usize = 5 * 1024 * 1024;

/// Filesystem-backed receipt store writing under `<data_dir>/uploads`
#[derive(Debug)]
pub struct FsReceiptStore {
    uploads_dir: PathBuf,
}

impl FsReceiptStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let uploads_dir = data_dir.into().join("uploads");

        std::fs::create_dir_all(&uploads_dir).map_err(|e| {
            DomainError::storage(format!(
                "Failed to create uploads directory '{}': {}",
                uploads_dir.display(),
                e
            ))
        })?;

        Ok(Self { uploads_dir })
    }

    fn validate_image(file_name: &str, content_type: Option<&str>) -> Result<(), DomainError> {
        // The declared content type wins; fall back to the file extension.
        let mime = match content_type {
            Some(ct) => ct.to_string(),
            None => mime_guess::from_path(file_name)
                .first_or_octet_stream()
                .to_string(),
        };

        if !mime.starts_with("image/") {
            return Err(DomainError::validation(
                "Payment receipt must be an image file",
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl ReceiptStore for FsReceiptStore {
    async fn store(
        &self,
        file_name: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<String, DomainError> {
        Self::validate_image(file_name, content_type)?;

        if bytes.is_empty() {
            return Err(DomainError::validation("Payment receipt file is empty"));
        }
        if bytes.len() > MAX_RECEIPT_BYTES {
            return Err(DomainError::validation(
                "Payment receipt must not exceed 5 MB",
            ));
        }

        let extension = PathBuf::from(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_else(|| "bin".to_string());

        let stored_name = format!("{}.{extension}", Uuid::new_v4());
        let path = self.uploads_dir.join(&stored_name);

        tokio::fs::write(&path, bytes).await.map_err(|e| {
            DomainError::storage(format!("Failed to store receipt '{}': {}", path.display(), e))
        })?;

        Ok(format!("uploads/{stored_name}"))
    }

    async fn remove(&self, reference: &str) -> Result<(), DomainError> {
        let name = reference.strip_prefix("uploads/").unwrap_or(reference);

        // References are generated names; anything path-like is not ours.
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(DomainError::validation("Invalid receipt reference"));
        }

        let path = self.uploads_dir.join(name);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::storage(format!(
                "Failed to remove receipt '{}': {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Mock receipt store recording what was stored
    #[derive(Debug, Default)]
    pub struct MockReceiptStore {
        pub stored: Mutex<Vec<String>>,
    }

    impl MockReceiptStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl ReceiptStore for MockReceiptStore {
        async fn store(
            &self,
            file_name: &str,
            content_type: Option<&str>,
            bytes: &[u8],
        ) -> Result<String, DomainError> {
            FsReceiptStore::validate_image(file_name, content_type)?;
            if bytes.is_empty() {
                return Err(DomainError::validation("Payment receipt file is empty"));
            }

            let reference = format!("uploads/{file_name}");
            self.stored.lock().unwrap().push(reference.clone());
            Ok(reference)
        }

        async fn remove(&self, reference: &str) -> Result<(), DomainError> {
            self.stored.lock().unwrap().retain(|r| r != reference);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (FsReceiptStore, PathBuf) {
        let dir = std::env::temp_dir().join(format!("receipt-store-test-{}", Uuid::new_v4()));
        let store = FsReceiptStore::new(&dir).unwrap();
        (store, dir)
    }

    #[tokio::test]
    async fn test_store_image_returns_reference() {
        let (store, dir) = temp_store();

        let reference = store
            .store("receipt.png", Some("image/png"), b"fake png bytes")
            .await
            .unwrap();

        assert!(reference.starts_with("uploads/"));
        assert!(reference.ends_with(".png"));
        assert!(dir.join(&reference).exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_content_type_falls_back_to_extension() {
        let (store, dir) = temp_store();

        let reference = store.store("receipt.jpg", None, b"fake jpeg").await.unwrap();
        assert!(reference.ends_with(".jpg"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_non_image_rejected() {
        let (store, dir) = temp_store();

        let result = store
            .store("receipt.pdf", Some("application/pdf"), b"%PDF-")
            .await;
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Validation { .. }
        ));

        let result = store.store("receipt.txt", None, b"plain text").await;
        assert!(result.is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_remove_deletes_stored_receipt() {
        let (store, dir) = temp_store();

        let reference = store
            .store("receipt.png", Some("image/png"), b"fake png bytes")
            .await
            .unwrap();
        assert!(dir.join(&reference).exists());

        store.remove(&reference).await.unwrap();
        assert!(!dir.join(&reference).exists());

        // Already gone is fine.
        store.remove(&reference).await.unwrap();

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_remove_rejects_path_like_references() {
        let (store, dir) = temp_store();

        let result = store.remove("uploads/../secrets.txt").await;
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Validation { .. }
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_empty_file_rejected() {
        let (store, dir) = temp_store();

        let result = store.store("receipt.png", Some("image/png"), b"").await;
        assert!(result.is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
