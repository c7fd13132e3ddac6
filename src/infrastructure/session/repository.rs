//! Store-backed session repository

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::session::{Session, SessionRepository};
use crate::domain::storage::KeyValueStore;

/// Store key holding the current session document
pub const SESSION_KEY: &str = "current_session";

/// Session repository over a key/value store
#[derive(Debug)]
pub struct StoreSessionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl StoreSessionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionRepository for StoreSessionRepository {
    async fn get(&self) -> Result<Option<Session>, DomainError> {
        match self.store.get(SESSION_KEY).await? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| DomainError::storage(format!("Failed to deserialize session: {e}"))),
            None => Ok(None),
        }
    }

    async fn set(&self, session: &Session) -> Result<(), DomainError> {
        let json = serde_json::to_string(session)
            .map_err(|e| DomainError::storage(format!("Failed to serialize session: {e}")))?;

        self.store.put(SESSION_KEY, json).await
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.store.remove(SESSION_KEY).await?;
        Ok(())
    }
}
