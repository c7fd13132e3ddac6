//! Registration service - signup and admin review

use std::sync::Arc;
use std::time::Duration;

use crate::domain::DomainError;
use crate::domain::registrant::{
    Registrant, RegistrantId, RegistrantRepository, RegisterForm, validation,
};
use crate::domain::session::{Session, SessionRepository};

use super::super::auth::PasswordHasher;

/// Registration service.
///
/// Every public operation starts with the configured artificial delay, kept
/// from the mock backend this service replaces so clients exercise their
/// loading states. Deployments set it to zero to turn it off.
#[derive(Debug)]
pub struct RegistrationService<R: RegistrantRepository, S: SessionRepository, H: PasswordHasher> {
    registrants: Arc<R>,
    sessions: Arc<S>,
    hasher: Arc<H>,
    latency: Duration,
}

impl<R: RegistrantRepository, S: SessionRepository, H: PasswordHasher>
    RegistrationService<R, S, H>
{
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

    /// Register a new participant.
    ///
    /// Validates the form, rejects duplicate emails and national ids, then
    /// persists the pending registrant and establishes a session for them.
    pub async fn register(
        &self,
        form: &RegisterForm,
        payment_receipt: Option<String>,
    ) -> Result<Registrant, DomainError> {
        self.simulate_latency().await;

        let registration =
            validation::validate_registration(form).map_err(DomainError::invalid_form)?;

        if self
            .registrants
            .email_exists(&registration.profile.email)
            .await?
        {
            return Err(DomainError::conflict("Email already registered"));
        }

        if self
            .registrants
            .national_id_exists(&registration.profile.national_id)
            .await?
        {
            return Err(DomainError::conflict("National ID already registered"));
        }

        let password_hash = self.hasher.hash(&registration.password)?;

        let mut registrant =
            Registrant::new(RegistrantId::generate(), registration.profile, password_hash);

        if let Some(reference) = payment_receipt {
            registrant.set_payment_receipt(reference);
        }

        self.registrants.create(&registrant).await?;

        // Signing up logs the new registrant in.
        self.sessions.set(&Session::new(*registrant.id())).await?;

        tracing::info!(
            registrant_id = %registrant.id(),
            email = %registrant.email(),
            "Registrant created"
        );

        Ok(registrant)
    }

    /// List all registrants in signup order
    pub async fn list(&self) -> Result<Vec<Registrant>, DomainError> {
        self.simulate_latency().await;
        self.registrants.list().await
    }

    /// Approve a pending or rejected registrant
    pub async fn accept(&self, id: &RegistrantId) -> Result<Registrant, DomainError> {
        self.simulate_latency().await;

        let mut registrant = self.require(id).await?;
        registrant.accept()?;
        self.registrants.update(&registrant).await?;

        tracing::info!(registrant_id = %id, "Registrant accepted");

        Ok(registrant)
    }

    /// Reject a pending or accepted registrant
    pub async fn reject(&self, id: &RegistrantId) -> Result<Registrant, DomainError> {
        self.simulate_latency().await;

        let mut registrant = self.require(id).await?;
        registrant.reject()?;
        self.registrants.update(&registrant).await?;

        tracing::info!(registrant_id = %id, "Registrant rejected");

        Ok(registrant)
    }

    async fn require(&self, id: &RegistrantId) -> Result<Registrant, DomainError> {
        self.registrants
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Registrant '{id}' not found")))
    }
}
