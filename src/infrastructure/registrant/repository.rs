//! Store-backed registrant repository

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::DomainError;
use crate::domain::registrant::{Registrant, RegistrantId, RegistrantRepository};
use crate::domain::storage::KeyValueStore;

/// Store key holding the full registrant list as one JSON array
pub const REGISTRANTS_KEY: &str = "registrants";

/// Registrant repository over a key/value store.
///
/// The whole collection lives under one key as an ordered JSON array, read
/// and rewritten wholesale on every mutation. A write lock serializes the
/// read-modify-write cycle within the process.
#[derive(Debug)]
pub struct StoreRegistrantRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl StoreRegistrantRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<Vec<Registrant>, DomainError> {
        match self.store.get(REGISTRANTS_KEY).await? {
            Some(json) => serde_json::from_str(&json).map_err(|e| {
                DomainError::storage(format!("Failed to deserialize registrant list: {e}"))
            }),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, registrants: &[Registrant]) -> Result<(), DomainError> {
        let json = serde_json::to_string(registrants).map_err(|e| {
            DomainError::storage(format!("Failed to serialize registrant list: {e}"))
        })?;

        self.store.put(REGISTRANTS_KEY, json).await
    }
}

#[async_trait]
impl RegistrantRepository for StoreRegistrantRepository {
    async fn get(&self, id: &RegistrantId) -> Result<Option<Registrant>, DomainError> {
        Ok(self.load().await?.into_iter().find(|r| r.id() == id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Registrant>, DomainError> {
        Ok(self.load().await?.into_iter().find(|r| r.email() == email))
    }

    async fn find_by_national_id(
        &self,
        national_id: &str,
    ) -> Result<Option<Registrant>, DomainError> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .find(|r| r.national_id() == national_id))
    }

    async fn create(&self, registrant: &Registrant) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut registrants = self.load().await?;

        if registrants.iter().any(|r| r.id() == registrant.id()) {
            return Err(DomainError::conflict(format!(
                "Registrant '{}' already exists",
                registrant.id()
            )));
        }

        registrants.push(registrant.clone());
        self.save(&registrants).await
    }

    async fn update(&self, registrant: &Registrant) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut registrants = self.load().await?;

        match registrants.iter_mut().find(|r| r.id() == registrant.id()) {
            Some(existing) => {
                *existing = registrant.clone();
                self.save(&registrants).await
            }
            None => Err(DomainError::not_found(format!(
                "Registrant '{}' not found",
                registrant.id()
            ))),
        }
    }

    async fn list(&self) -> Result<Vec<Registrant>, DomainError> {
        self.load().await
    }
}
