//! Application state for shared services

use std::sync::Arc;

use crate::domain::DomainError;
use crate::domain::registrant::{
    LoginForm, Registrant, RegistrantId, RegistrantRepository, RegisterForm,
};
use crate::domain::session::SessionRepository;
use crate::domain::storage::KeyValueStore;
use crate::infrastructure::auth::{AuthService, PasswordHasher};
use crate::infrastructure::media::ReceiptStore;
use crate::infrastructure::registrant::RegistrationService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub registration_service: Arc<dyn RegistrationServiceTrait>,
    pub auth_service: Arc<dyn AuthServiceTrait>,
    pub receipt_store: Arc<dyn ReceiptStore>,
    pub store: Arc<dyn KeyValueStore>,
    pub admin_token: Option<String>,
}

/// Trait for registration service operations
#[async_trait::async_trait]
pub trait RegistrationServiceTrait: Send + Sync {
    async fn register(
        &self,
        form: &RegisterForm,
        payment_receipt: Option<String>,
    ) -> Result<Registrant, DomainError>;
    async fn list(&self) -> Result<Vec<Registrant>, DomainError>;
    async fn accept(&self, id: &str) -> Result<Registrant, DomainError>;
    async fn reject(&self, id: &str) -> Result<Registrant, DomainError>;
}

/// Trait for authentication service operations
#[async_trait::async_trait]
pub trait AuthServiceTrait: Send + Sync {
    async fn login(&self, form: &LoginForm) -> Result<Registrant, DomainError>;
    async fn logout(&self) -> Result<(), DomainError>;
    async fn current(&self) -> Result<Option<Registrant>, DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl<R, S, H> RegistrationServiceTrait for RegistrationService<R, S, H>
where
    R: RegistrantRepository + 'static,
    S: SessionRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn register(
        &self,
        form: &RegisterForm,
        payment_receipt: Option<String>,
    ) -> Result<Registrant, DomainError> {
        RegistrationService::register(self, form, payment_receipt).await
    }

    async fn list(&self) -> Result<Vec<Registrant>, DomainError> {
        RegistrationService::list(self).await
    }

    async fn accept(&self, id: &str) -> Result<Registrant, DomainError> {
        let id = RegistrantId::parse(id)?;
        RegistrationService::accept(self, &id).await
    }

    async fn reject(&self, id: &str) -> Result<Registrant, DomainError> {
        let id = RegistrantId::parse(id)?;
        RegistrationService::reject(self, &id).await
    }
}

#[async_trait::async_trait]
impl<R, S, H> AuthServiceTrait for AuthService<R, S, H>
where
    R: RegistrantRepository + 'static,
    S: SessionRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn login(&self, form: &LoginForm) -> Result<Registrant, DomainError> {
        AuthService::login(self, form).await
    }

    async fn logout(&self) -> Result<(), DomainError> {
        AuthService::logout(self).await
    }

    async fn current(&self) -> Result<Option<Registrant>, DomainError> {
        AuthService::current(self).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        registration_service: Arc<dyn RegistrationServiceTrait>,
        auth_service: Arc<dyn AuthServiceTrait>,
        receipt_store: Arc<dyn ReceiptStore>,
        store: Arc<dyn KeyValueStore>,
        admin_token: Option<String>,
    ) -> Self {
        Self {
            registration_service,
            auth_service,
            receipt_store,
            store,
            admin_token,
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::time::Duration;

    use crate::domain::registrant::mock::MockRegistrantRepository;
    use crate::domain::session::mock::MockSessionRepository;
    use crate::domain::storage::mock::MockKvStore;
    use crate::infrastructure::auth::Argon2Hasher;
    use crate::infrastructure::media::mock::MockReceiptStore;

    /// State wired to empty in-memory mocks, shared repositories across both
    /// services so registration is visible to login.
    pub fn test_state() -> AppState {
        let registrants = Arc::new(MockRegistrantRepository::new());
        let sessions = Arc::new(MockSessionRepository::new());
        let hasher = Arc::new(Argon2Hasher::new());

        AppState {
            registration_service: Arc::new(RegistrationService::new(
                registrants.clone(),
                sessions.clone(),
                hasher.clone(),
                Duration::ZERO,
            )),
            auth_service: Arc::new(AuthService::new(
                registrants,
                sessions,
                hasher,
                Duration::ZERO,
            )),
            receipt_store: Arc::new(MockReceiptStore::new()),
            store: Arc::new(MockKvStore::new()),
            admin_token: None,
        }
    }

    /// Like [`test_state`] but keeps a handle on the receipt store so tests
    /// can inspect what was stored.
    pub fn test_state_with_receipts() -> (AppState, Arc<MockReceiptStore>) {
        let receipts = Arc::new(MockReceiptStore::new());
        let mut state = test_state();
        state.receipt_store = receipts.clone();
        (state, receipts)
    }

    #[tokio::test]
    async fn test_state_registration_visible_to_auth() {
        let state = test_state();

        let form = crate::domain::registrant::RegisterForm {
            name_ar: "سليم هاشم".to_string(),
            name_en: "Sleem Hashem".to_string(),
            phone: "01012345678".to_string(),
            governorate: "cairo".to_string(),
            national_id: "29801011234567".to_string(),
            college: "engineering".to_string(),
            level: "3".to_string(),
            email: "sleem@example.com".to_string(),
            age: "21".to_string(),
            gender: "male".to_string(),
            password: "secret-pass".to_string(),
            payment_code: None,
            needs_transport: false,
        };

        state
            .registration_service
            .register(&form, None)
            .await
            .unwrap();

        let current = state.auth_service.current().await.unwrap().unwrap();
        assert_eq!(current.email(), "sleem@example.com");
    }

    #[tokio::test]
    async fn test_accept_rejects_malformed_id() {
        let state = test_state();

        let result = state.registration_service.accept("not-a-uuid").await;
        assert!(matches!(
            result.unwrap_err(),
            crate::domain::DomainError::Validation { .. }
        ));
    }
}
