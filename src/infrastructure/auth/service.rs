//! Authentication service - login, logout and session resolution

use std::sync::Arc;
use std::time::Duration;

use crate::domain::DomainError;
use crate::domain::registrant::{LoginForm, Registrant, RegistrantRepository, validation};
use crate::domain::session::{Session, SessionRepository};

use super::PasswordHasher;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Authentication service over the registrant collection.
///
/// Login failures are always reported with the same message so a caller
/// cannot probe which emails are registered.
#[derive(Debug)]
pub struct AuthService<R: RegistrantRepository, S: SessionRepository, H: PasswordHasher> {
    registrants: Arc<R>,
    sessions: Arc<S>,
    hasher: Arc<H>,
    latency: Duration,
}

impl<R: RegistrantRepository, S: SessionRepository, H: PasswordHasher> AuthService<R, S, H> {
    pub fn new(registrants: Arc<R>, sessions: Arc<S>, hasher: Arc<H>, latency: Duration) -> Self {
        Self {
            registrants,
            sessions,
            hasher,
            latency,
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// Authenticate with email and password, establishing a session
    pub async fn login(&self, form: &LoginForm) -> Result<Registrant, DomainError> {
        self.simulate_latency().await;

        validation::validate_login(form).map_err(DomainError::invalid_form)?;

        let email = form.email.trim().to_lowercase();

        let registrant = self
            .registrants
            .find_by_email(&email)
            .await?
            .ok_or_else(|| DomainError::credentials(INVALID_CREDENTIALS))?;

        if !self.hasher.verify(&form.password, registrant.password_hash()) {
            return Err(DomainError::credentials(INVALID_CREDENTIALS));
        }

        self.sessions.set(&Session::new(*registrant.id())).await?;

        tracing::info!(registrant_id = %registrant.id(), "Login succeeded");

        Ok(registrant)
    }

    /// Clear the current session. Succeeds even when no session exists.
    pub async fn logout(&self) -> Result<(), DomainError> {
        self.simulate_latency().await;
        self.sessions.clear().await
    }

    /// Resolve the current session to its registrant.
    ///
    /// This is a plain read of persisted session state and carries no
    /// simulated latency; only login, logout and registration are delayed.
    ///
    /// A session pointing at a registrant that no longer exists is stale;
    /// it is cleared and treated as no session.
    pub async fn current(&self) -> Result<Option<Registrant>, DomainError> {
        let session = match self.sessions.get().await? {
            Some(session) => session,
            None => return Ok(None),
        };

        match self.registrants.get(session.registrant_id()).await? {
            Some(registrant) => Ok(Some(registrant)),
            None => {
                tracing::warn!(
                    registrant_id = %session.registrant_id(),
                    "Clearing session for missing registrant"
                );
                self.sessions.clear().await?;
                Ok(None)
            }
        }
    }
}
