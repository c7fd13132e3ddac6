//! Registrant response types

use serde::Serialize;

use crate::domain::registrant::Registrant;

/// Registrant representation safe to expose to clients.
///
/// The password hash stays behind this boundary.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrantResponse {
    pub id: String,
    pub name_ar: String,
    pub name_en: String,
    pub phone: String,
    pub email: String,
    pub national_id: String,
    pub governorate: String,
    pub college: String,
    pub level: String,
    pub gender: String,
    pub age: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_code: Option<String>,
    pub needs_transport: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_receipt: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Registrant> for RegistrantResponse {
    fn from(registrant: &Registrant) -> Self {
        let profile = registrant.profile();

        Self {
            id: registrant.id().to_string(),
            name_ar: profile.name_ar.clone(),
            name_en: profile.name_en.clone(),
            phone: profile.phone.clone(),
            email: profile.email.clone(),
            national_id: profile.national_id.clone(),
            governorate: profile.governorate.as_str().to_string(),
            college: profile.college.as_str().to_string(),
            level: profile.level.as_str().to_string(),
            gender: profile.gender.as_str().to_string(),
            age: profile.age,
            payment_code: profile.payment_code.clone(),
            needs_transport: profile.needs_transport,
            payment_receipt: registrant.payment_receipt().map(String::from),
            status: registrant.status().as_str().to_string(),
            created_at: registrant.created_at().to_rfc3339(),
            updated_at: registrant.updated_at().to_rfc3339(),
        }
    }
}
