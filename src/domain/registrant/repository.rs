//! Registrant repository trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use super::entity::{Registrant, RegistrantId};
use crate::domain::DomainError;

/// Repository over the registrant collection.
///
/// Implementations preserve insertion order: `list` returns registrants in
/// the order they signed up.
#[async_trait]
pub trait RegistrantRepository: Send + Sync + Debug {
    /// Retrieves a registrant by id, if present
    async fn get(&self, id: &RegistrantId) -> Result<Option<Registrant>, DomainError>;

    /// Retrieves a registrant by normalized email, if present
    async fn find_by_email(&self, email: &str) -> Result<Option<Registrant>, DomainError>;

    /// Retrieves a registrant by national id, if present
    async fn find_by_national_id(
        &self,
        national_id: &str,
    ) -> Result<Option<Registrant>, DomainError>;

    /// Persists a new registrant
    async fn create(&self, registrant: &Registrant) -> Result<(), DomainError>;

    /// Persists changes to an existing registrant
    async fn update(&self, registrant: &Registrant) -> Result<(), DomainError>;

    /// Lists all registrants in signup order
    async fn list(&self) -> Result<Vec<Registrant>, DomainError>;

    /// Counts registrants
    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.list().await?.len())
    }

    /// Checks whether an email is already taken
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    /// Checks whether a national id is already taken
    async fn national_id_exists(&self, national_id: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_national_id(national_id).await?.is_some())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use tokio::sync::RwLock;

    /// Mock registrant repository for testing
    #[derive(Debug, Default)]
    pub struct MockRegistrantRepository {
        registrants: RwLock<Vec<Registrant>>,
        should_fail: bool,
    }

    impl MockRegistrantRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_registrant(self, registrant: Registrant) -> Self {
            self.registrants.try_write().unwrap().push(registrant);
            self
        }

        pub fn failing() -> Self {
            Self {
                registrants: RwLock::new(Vec::new()),
                should_fail: true,
            }
        }

        fn check_failure(&self) -> Result<(), DomainError> {
            if self.should_fail {
                return Err(DomainError::storage("Simulated repository failure"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl RegistrantRepository for MockRegistrantRepository {
        async fn get(&self, id: &RegistrantId) -> Result<Option<Registrant>, DomainError> {
            self.check_failure()?;
            Ok(self
                .registrants
                .read()
                .await
                .iter()
                .find(|r| r.id() == id)
                .cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<Registrant>, DomainError> {
            self.check_failure()?;
            Ok(self
                .registrants
                .read()
                .await
                .iter()
                .find(|r| r.email() == email)
                .cloned())
        }

        async fn find_by_national_id(
            &self,
            national_id: &str,
        ) -> Result<Option<Registrant>, DomainError> {
            self.check_failure()?;
            Ok(self
                .registrants
                .read()
                .await
                .iter()
                .find(|r| r.national_id() == national_id)
                .cloned())
        }

        async fn create(&self, registrant: &Registrant) -> Result<(), DomainError> {
            self.check_failure()?;
            self.registrants.write().await.push(registrant.clone());
            Ok(())
        }

        async fn update(&self, registrant: &Registrant) -> Result<(), DomainError> {
            self.check_failure()?;
            let mut registrants = self.registrants.write().await;
            match registrants.iter_mut().find(|r| r.id() == registrant.id()) {
                Some(existing) => {
                    *existing = registrant.clone();
                    Ok(())
                }
                None => Err(DomainError::not_found(format!(
                    "Registrant '{}' not found",
                    registrant.id()
                ))),
            }
        }

        async fn list(&self) -> Result<Vec<Registrant>, DomainError> {
            self.check_failure()?;
            Ok(self.registrants.read().await.clone())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::domain::registrant::entity::test_profile;

        fn registrant(email: &str, national_id: &str) -> Registrant {
            Registrant::new(
                RegistrantId::generate(),
                test_profile(email, national_id),
                "hash",
            )
        }

        #[tokio::test]
        async fn test_mock_create_and_lookups() {
            let repository = MockRegistrantRepository::new();
            let created = registrant("a@example.com", "29801011234567");
            repository.create(&created).await.unwrap();

            let by_id = repository.get(created.id()).await.unwrap().unwrap();
            assert_eq!(by_id.email(), "a@example.com");

            assert!(repository.email_exists("a@example.com").await.unwrap());
            assert!(!repository.email_exists("b@example.com").await.unwrap());
            assert!(
                repository
                    .national_id_exists("29801011234567")
                    .await
                    .unwrap()
            );
        }

        #[tokio::test]
        async fn test_mock_list_keeps_signup_order() {
            let repository = MockRegistrantRepository::new();
            let first = registrant("a@example.com", "29801011234567");
            let second = registrant("b@example.com", "29801011234568");
            repository.create(&first).await.unwrap();
            repository.create(&second).await.unwrap();

            let listed = repository.list().await.unwrap();
            assert_eq!(listed.len(), 2);
            assert_eq!(listed[0].id(), first.id());
            assert_eq!(listed[1].id(), second.id());
            assert_eq!(repository.count().await.unwrap(), 2);
        }

        #[tokio::test]
        async fn test_mock_update_missing_registrant() {
            let repository = MockRegistrantRepository::new();
            let missing = registrant("a@example.com", "29801011234567");

            let result = repository.update(&missing).await;
            assert!(matches!(result.unwrap_err(), DomainError::NotFound { .. }));
        }

        #[tokio::test]
        async fn test_mock_failing_repository() {
            let repository = MockRegistrantRepository::failing();
            assert!(repository.list().await.is_err());
        }
    }
}
