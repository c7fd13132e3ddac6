//! Session repository trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use super::entity::Session;
use crate::domain::DomainError;

/// Repository over the single current session
#[async_trait]
pub trait SessionRepository: Send + Sync + Debug {
    /// Retrieves the current session, if one is established
    async fn get(&self) -> Result<Option<Session>, DomainError>;

    /// Establishes a session, replacing any existing one
    async fn set(&self, session: &Session) -> Result<(), DomainError>;

    /// Clears the current session. Clearing an absent session is not an error.
    async fn clear(&self) -> Result<(), DomainError>;
}
