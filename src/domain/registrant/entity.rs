//! Registrant entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainError;

/// Registrant identifier - UUID v4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegistrantId(Uuid);

impl RegistrantId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier from its string form
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| DomainError::validation(format!("'{value}' is not a valid registrant id")))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for RegistrantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Governorate of residence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Governorate {
    Cairo,
    Giza,
    Alexandria,
    Sharqia,
    Dakahlia,
    Beheira,
    Monufia,
    Qalyubia,
    Gharbia,
    KafrElSheikh,
}

impl Governorate {
    pub const ALL: [Self; 10] = [
        Self::Cairo,
        Self::Giza,
        Self::Alexandria,
        Self::Sharqia,
        Self::Dakahlia,
        Self::Beheira,
        Self::Monufia,
        Self::Qalyubia,
        Self::Gharbia,
        Self::KafrElSheikh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cairo => "cairo",
            Self::Giza => "giza",
            Self::Alexandria => "alexandria",
            Self::Sharqia => "sharqia",
            Self::Dakahlia => "dakahlia",
            Self::Beheira => "beheira",
            Self::Monufia => "monufia",
            Self::Qalyubia => "qalyubia",
            Self::Gharbia => "gharbia",
            Self::KafrElSheikh => "kafr_el_sheikh",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.as_str() == value)
    }
}

/// College of the registrant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum College {
    Engineering,
    Medicine,
    Pharmacy,
    Science,
    Commerce,
    Arts,
    Law,
}

impl College {
    pub const ALL: [Self; 7] = [
        Self::Engineering,
        Self::Medicine,
        Self::Pharmacy,
        Self::Science,
        Self::Commerce,
        Self::Arts,
        Self::Law,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Engineering => "engineering",
            Self::Medicine => "medicine",
            Self::Pharmacy => "pharmacy",
            Self::Science => "science",
            Self::Commerce => "commerce",
            Self::Arts => "arts",
            Self::Law => "law",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }
}

/// Academic year, "1" through "5"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "1")]
    First,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "3")]
    Third,
    #[serde(rename = "4")]
    Fourth,
    #[serde(rename = "5")]
    Fifth,
}

impl Level {
    pub const ALL: [Self; 5] = [
        Self::First,
        Self::Second,
        Self::Third,
        Self::Fourth,
        Self::Fifth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::First => "1",
            Self::Second => "2",
            Self::Third => "3",
            Self::Fourth => "4",
            Self::Fifth => "5",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }
}

/// Approval lifecycle of a registrant
///
/// Pending records can be accepted or rejected, and accepted/rejected records
/// can flip to the opposite decision. Nothing ever returns to pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RegistrantStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl RegistrantStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

/// Validated identity and categorical fields collected by the registration
/// form. Produced by form validation, consumed when building a `Registrant`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrantProfile {
    pub name_ar: String,
    pub name_en: String,
    pub phone: String,
    pub email: String,
    pub national_id: String,
    pub governorate: Governorate,
    pub college: College,
    pub level: Level,
    pub gender: Gender,
    pub age: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_code: Option<String>,
    #[serde(default)]
    pub needs_transport: bool,
}

/// Registrant entity
///
/// Serialization covers every field including the password hash: the entity
/// is what the key/value store persists. API responses go through a separate
/// DTO that never exposes the hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registrant {
    id: RegistrantId,
    #[serde(flatten)]
    profile: RegistrantProfile,
    password_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payment_receipt: Option<String>,
    status: RegistrantStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Registrant {
    /// Create a new pending registrant
    pub fn new(id: RegistrantId, profile: RegistrantProfile, password_hash: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            id,
            profile,
            password_hash: password_hash.into(),
            payment_receipt: None,
            status: RegistrantStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    // Getters

    pub fn id(&self) -> &RegistrantId {
        &self.id
    }

    pub fn profile(&self) -> &RegistrantProfile {
        &self.profile
    }

    pub fn email(&self) -> &str {
        &self.profile.email
    }

    pub fn national_id(&self) -> &str {
        &self.profile.national_id
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn payment_receipt(&self) -> Option<&str> {
        self.payment_receipt.as_deref()
    }

    pub fn status(&self) -> RegistrantStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Attach a stored payment-evidence reference
    pub fn set_payment_receipt(&mut self, reference: impl Into<String>) {
        self.payment_receipt = Some(reference.into());
        self.touch();
    }

    /// Approve the registrant. Fails if already accepted.
    pub fn accept(&mut self) -> Result<(), DomainError> {
        if self.status == RegistrantStatus::Accepted {
            return Err(DomainError::conflict(format!(
                "Registrant '{}' is already accepted",
                self.id
            )));
        }
        self.status = RegistrantStatus::Accepted;
        self.touch();
        Ok(())
    }

    /// Reject the registrant. Fails if already rejected.
    pub fn reject(&mut self) -> Result<(), DomainError> {
        if self.status == RegistrantStatus::Rejected {
            return Err(DomainError::conflict(format!(
                "Registrant '{}' is already rejected",
                self.id
            )));
        }
        self.status = RegistrantStatus::Rejected;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
pub(crate) fn test_profile(email: &str, national_id: &str) -> RegistrantProfile {
    RegistrantProfile {
        name_ar: "سليم هاشم".to_string(),
        name_en: "Sleem Hashem".to_string(),
        phone: "01012345678".to_string(),
        email: email.to_string(),
        national_id: national_id.to_string(),
        governorate: Governorate::Cairo,
        college: College::Engineering,
        level: Level::Third,
        gender: Gender::Male,
        age: 21,
        payment_code: None,
        needs_transport: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_registrant() -> Registrant {
        Registrant::new(
            RegistrantId::generate(),
            test_profile("sleem@example.com", "29801011234567"),
            "hashed_password",
        )
    }

    #[test]
    fn test_registrant_id_parse() {
        let id = RegistrantId::generate();
        let parsed = RegistrantId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_registrant_id_parse_invalid() {
        assert!(RegistrantId::parse("not-a-uuid").is_err());
    }

    #[test]
    fn test_enum_round_trips() {
        assert_eq!(Governorate::from_value("kafr_el_sheikh"), Some(Governorate::KafrElSheikh));
        assert_eq!(College::from_value("pharmacy"), Some(College::Pharmacy));
        assert_eq!(Level::from_value("4"), Some(Level::Fourth));
        assert_eq!(Gender::from_value("female"), Some(Gender::Female));
        assert_eq!(Governorate::from_value("atlantis"), None);
        assert_eq!(Level::from_value("6"), None);
    }

    #[test]
    fn test_new_registrant_is_pending() {
        let registrant = create_registrant();
        assert_eq!(registrant.status(), RegistrantStatus::Pending);
        assert!(registrant.payment_receipt().is_none());
    }

    #[test]
    fn test_accept_and_reject_flip() {
        let mut registrant = create_registrant();

        registrant.accept().unwrap();
        assert_eq!(registrant.status(), RegistrantStatus::Accepted);

        // Accepted records can still be rejected, and vice versa.
        registrant.reject().unwrap();
        assert_eq!(registrant.status(), RegistrantStatus::Rejected);

        registrant.accept().unwrap();
        assert_eq!(registrant.status(), RegistrantStatus::Accepted);
    }

    #[test]
    fn test_same_state_action_is_conflict() {
        let mut registrant = create_registrant();

        registrant.accept().unwrap();
        let result = registrant.accept();
        assert!(matches!(result.unwrap_err(), DomainError::Conflict { .. }));

        registrant.reject().unwrap();
        let result = registrant.reject();
        assert!(matches!(result.unwrap_err(), DomainError::Conflict { .. }));
    }

    #[test]
    fn test_set_payment_receipt_touches_timestamp() {
        let mut registrant = create_registrant();
        let original = registrant.updated_at();

        std::thread::sleep(std::time::Duration::from_millis(5));
        registrant.set_payment_receipt("uploads/receipt.png");

        assert_eq!(registrant.payment_receipt(), Some("uploads/receipt.png"));
        assert!(registrant.updated_at() > original);
    }

    #[test]
    fn test_serialization_round_trip_keeps_hash() {
        let registrant = create_registrant();

        let json = serde_json::to_string(&registrant).unwrap();
        let restored: Registrant = serde_json::from_str(&json).unwrap();

        // The hash must survive persistence, otherwise login breaks on restart.
        assert_eq!(restored.password_hash(), "hashed_password");
        assert_eq!(restored.email(), registrant.email());
        assert_eq!(restored.status(), RegistrantStatus::Pending);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&RegistrantStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&RegistrantStatus::Accepted).unwrap(),
            "\"accepted\""
        );
    }
}
