//! Event Registrar API
//!
//! Backend for a bilingual (Arabic/English) student event registration flow:
//! - Registration with per-field validation and duplicate detection
//! - Email/password login over a single persisted session
//! - Admin review endpoints for accepting and rejecting registrations
//! - Pluggable key/value persistence (in-memory or JSON files on disk)

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use api::state::AppState;
use domain::registrant::{
    College, Gender, Governorate, Level, Registrant, RegistrantId, RegistrantProfile,
    RegistrantRepository,
};
use infrastructure::auth::{Argon2Hasher, AuthService, PasswordHasher};
use infrastructure::media::FsReceiptStore;
use infrastructure::registrant::{RegistrationService, StoreRegistrantRepository};
use infrastructure::session::StoreSessionRepository;
use infrastructure::storage::{StorageBackend, StorageFactory};

/// Create the application state from configuration.
///
/// Wires the configured storage backend into the repositories and services,
/// seeding demo registrants into an empty store when enabled.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let backend: StorageBackend = config.storage.backend.parse()?;
    let data_dir = PathBuf::from(&config.storage.data_dir);

    let store = StorageFactory::new().create(backend, &data_dir)?;
    info!("Storage backend: {}", backend);

    let registrants = Arc::new(StoreRegistrantRepository::new(store.clone()));
    let sessions = Arc::new(StoreSessionRepository::new(store.clone()));
    let hasher = Arc::new(Argon2Hasher::new());

    if config.storage.seed_demo_data {
        seed_demo_registrants(registrants.as_ref(), hasher.as_ref()).await?;
    }

    let latency = Duration::from_millis(config.storage.simulated_latency_ms);

    let registration_service = Arc::new(RegistrationService::new(
        registrants.clone(),
        sessions.clone(),
        hasher.clone(),
        latency,
    ));
    let auth_service = Arc::new(AuthService::new(registrants, sessions, hasher, latency));
    let receipt_store = Arc::new(FsReceiptStore::new(&data_dir)?);

    Ok(AppState::new(
        registration_service,
        auth_service,
        receipt_store,
        store,
        config.auth.admin_token.clone(),
    ))
}

/// All demo accounts share this password.
const DEMO_PASSWORD: &str = "password123";

struct SeedRow {
    name_ar: &'static str,
    name_en: &'static str,
    phone: &'static str,
    email: &'static str,
    national_id: &'static str,
    governorate: Governorate,
    college: College,
    level: Level,
    gender: Gender,
    age: u8,
    decision: Option<bool>,
}

fn seed_rows() -> [SeedRow; 5] {
    [
        SeedRow {
            name_ar: "سليم هاشم",
            name_en: "Sleem Hashem",
            phone: "01012345678",
            email: "sleem@example.com",
            national_id: "30101011234567",
            governorate: Governorate::Cairo,
            college: College::Engineering,
            level: Level::Third,
            gender: Gender::Male,
            age: 21,
            decision: None,
        },
        SeedRow {
            name_ar: "أحمد علي",
            name_en: "Ahmed Ali",
            phone: "01198765432",
            email: "ahmed@example.com",
            national_id: "30205151234568",
            governorate: Governorate::Giza,
            college: College::Commerce,
            level: Level::Second,
            gender: Gender::Male,
            age: 20,
            decision: Some(true),
        },
        SeedRow {
            name_ar: "فاطمة محمد",
            name_en: "Fatima Mohamed",
            phone: "01234567890",
            email: "fatima@example.com",
            national_id: "30003201234569",
            governorate: Governorate::Alexandria,
            college: College::Medicine,
            level: Level::Fourth,
            gender: Gender::Female,
            age: 22,
            decision: None,
        },
        SeedRow {
            name_ar: "محمد حسن",
            name_en: "Mohamed Hassan",
            phone: "01567890123",
            email: "mohamed@example.com",
            national_id: "30310101234570",
            governorate: Governorate::Dakahlia,
            college: College::Science,
            level: Level::First,
            gender: Gender::Male,
            age: 19,
            decision: Some(false),
        },
        SeedRow {
            name_ar: "سارة أحمد",
            name_en: "Sara Ahmed",
            phone: "01098765432",
            email: "sara@example.com",
            national_id: "30107071234571",
            governorate: Governorate::Cairo,
            college: College::Pharmacy,
            level: Level::Third,
            gender: Gender::Female,
            age: 21,
            decision: None,
        },
    ]
}

/// Seed demo registrants into an empty store. A store that already holds
/// registrants is left untouched.
async fn seed_demo_registrants(
    repository: &impl RegistrantRepository,
    hasher: &impl PasswordHasher,
) -> anyhow::Result<()> {
    if repository.count().await? > 0 {
        return Ok(());
    }

    let password_hash = hasher.hash(DEMO_PASSWORD)?;
    let rows = seed_rows();
    let total = rows.len();

    for row in rows {
        let profile = RegistrantProfile {
            name_ar: row.name_ar.to_string(),
            name_en: row.name_en.to_string(),
            phone: row.phone.to_string(),
            email: row.email.to_string(),
            national_id: row.national_id.to_string(),
            governorate: row.governorate,
            college: row.college,
            level: row.level,
            gender: row.gender,
            age: row.age,
            payment_code: None,
            needs_transport: false,
        };

        let mut registrant =
            Registrant::new(RegistrantId::generate(), profile, password_hash.clone());
        match row.decision {
            Some(true) => registrant.accept()?,
            Some(false) => registrant.reject()?,
            None => {}
        }

        repository.create(&registrant).await?;
    }

    info!("Seeded {} demo registrants", total);
    Ok(())
}
