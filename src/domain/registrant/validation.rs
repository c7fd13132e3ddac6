//! Registration and login form validation
//!
//! Pure, synchronous, per-field checks over the raw (all-string) form. The
//! validator either produces a fully typed registration or the complete list
//! of field failures so the form can surface every message inline. User-facing
//! messages are bilingual: Arabic for the Arabic-labelled fields, English for
//! the rest, matching the registration form labels.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use super::entity::{College, Gender, Governorate, Level, RegistrantProfile};
use crate::domain::error::FieldError;

const MIN_AGE: u8 = 16;
const MAX_AGE: u8 = 100;
const MIN_PASSWORD_LENGTH: usize = 6;

static ARABIC_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\u{0600}-\u{06FF}]").unwrap());
static LATIN_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());
// Egyptian mobile numbers: 010, 011, 012 or 015 followed by eight digits.
static EGYPTIAN_MOBILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^01[0125]\d{8}$").unwrap());
static DIGITS_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Raw registration form as submitted. Every field arrives as a string (or is
/// absent, which defaults to empty and fails the required check).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub governorate: String,
    #[serde(default)]
    pub national_id: String,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub payment_code: Option<String>,
    #[serde(default)]
    pub needs_transport: bool,
}

/// Raw login form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// A validated registration: the typed profile plus the plaintext password,
/// which the service hashes before anything is persisted.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub profile: RegistrantProfile,
    pub password: String,
}

pub fn validate_name_ar(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("الاسم رباعي بالعربي مطلوب".to_string());
    }
    if !ARABIC_CHARS.is_match(value) {
        return Err("يجب أن يحتوي الاسم على أحرف عربية".to_string());
    }
    Ok(())
}

pub fn validate_name_en(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Full name in English is required".to_string());
    }
    if !LATIN_NAME.is_match(value) {
        return Err("Full name must contain only English letters".to_string());
    }
    Ok(())
}

pub fn validate_phone(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Phone number is required".to_string());
    }
    if !EGYPTIAN_MOBILE.is_match(value) {
        return Err(
            "Phone number must be a valid Egyptian number (11 digits starting with 01)".to_string(),
        );
    }
    Ok(())
}

pub fn validate_national_id(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("الرقم القومي مطلوب".to_string());
    }
    if !DIGITS_ONLY.is_match(value) {
        return Err("الرقم القومي يجب أن يحتوي على أرقام فقط".to_string());
    }
    if value.len() != 14 {
        return Err("الرقم القومي يجب أن يكون 14 رقم".to_string());
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Email is required".to_string());
    }
    if !EMAIL.is_match(value) {
        return Err("Invalid email address".to_string());
    }
    Ok(())
}

pub fn validate_age(value: &str) -> Result<u8, String> {
    if value.trim().is_empty() {
        return Err("السن مطلوب".to_string());
    }

    match value.trim().parse::<u8>() {
        Ok(age) if (MIN_AGE..=MAX_AGE).contains(&age) => Ok(age),
        _ => Err("السن يجب أن يكون بين 16 و 100".to_string()),
    }
}

pub fn validate_password(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Password is required".to_string());
    }
    if value.len() < MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 6 characters".to_string());
    }
    Ok(())
}

/// Validate a complete registration form.
///
/// Collects one message per failing field; never panics on expected bad
/// input. On success the email is normalized (trimmed, lowercased) and names
/// are trimmed.
pub fn validate_registration(form: &RegisterForm) -> Result<NewRegistration, Vec<FieldError>> {
    let mut errors = Vec::new();

    if let Err(message) = validate_name_ar(&form.name_ar) {
        errors.push(FieldError::new("name_ar", message));
    }
    if let Err(message) = validate_name_en(&form.name_en) {
        errors.push(FieldError::new("name_en", message));
    }
    if let Err(message) = validate_phone(&form.phone) {
        errors.push(FieldError::new("phone", message));
    }

    let governorate = if form.governorate.is_empty() {
        errors.push(FieldError::new("governorate", "المحافظة مطلوبة"));
        None
    } else {
        let parsed = Governorate::from_value(&form.governorate);
        if parsed.is_none() {
            errors.push(FieldError::new("governorate", "محافظة غير صالحة"));
        }
        parsed
    };

    if let Err(message) = validate_national_id(&form.national_id) {
        errors.push(FieldError::new("national_id", message));
    }

    let college = if form.college.is_empty() {
        errors.push(FieldError::new("college", "الكلية مطلوبة"));
        None
    } else {
        let parsed = College::from_value(&form.college);
        if parsed.is_none() {
            errors.push(FieldError::new("college", "كلية غير صالحة"));
        }
        parsed
    };

    let level = if form.level.is_empty() {
        errors.push(FieldError::new("level", "الفرقة مطلوبة"));
        None
    } else {
        let parsed = Level::from_value(&form.level);
        if parsed.is_none() {
            errors.push(FieldError::new("level", "فرقة غير صالحة"));
        }
        parsed
    };

    if let Err(message) = validate_email(form.email.trim()) {
        errors.push(FieldError::new("email", message));
    }

    let age = match validate_age(&form.age) {
        Ok(age) => Some(age),
        Err(message) => {
            errors.push(FieldError::new("age", message));
            None
        }
    };

    let gender = if form.gender.is_empty() {
        errors.push(FieldError::new("gender", "النوع مطلوب"));
        None
    } else {
        let parsed = Gender::from_value(&form.gender);
        if parsed.is_none() {
            errors.push(FieldError::new("gender", "النوع مطلوب"));
        }
        parsed
    };

    if let Err(message) = validate_password(&form.password) {
        errors.push(FieldError::new("password", message));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // All Options are Some once the error list is empty.
    Ok(NewRegistration {
        profile: RegistrantProfile {
            name_ar: form.name_ar.trim().to_string(),
            name_en: form.name_en.trim().to_string(),
            phone: form.phone.clone(),
            email: form.email.trim().to_lowercase(),
            national_id: form.national_id.clone(),
            governorate: governorate.unwrap(),
            college: college.unwrap(),
            level: level.unwrap(),
            gender: gender.unwrap(),
            age: age.unwrap(),
            payment_code: form
                .payment_code
                .as_deref()
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(String::from),
            needs_transport: form.needs_transport,
        },
        password: form.password.clone(),
    })
}

/// Validate a login form
pub fn validate_login(form: &LoginForm) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if let Err(message) = validate_email(form.email.trim()) {
        errors.push(FieldError::new("email", message));
    }
    if let Err(message) = validate_password(&form.password) {
        errors.push(FieldError::new("password", message));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegisterForm {
        RegisterForm {
            name_ar: "سليم هاشم".to_string(),
            name_en: "Sleem Hashem".to_string(),
            phone: "01012345678".to_string(),
            governorate: "cairo".to_string(),
            national_id: "29801011234567".to_string(),
            college: "engineering".to_string(),
            level: "3".to_string(),
            email: "Sleem@Example.com ".to_string(),
            age: "21".to_string(),
            gender: "male".to_string(),
            password: "secret-pass".to_string(),
            payment_code: None,
            needs_transport: false,
        }
    }

    fn failing_fields(form: &RegisterForm) -> Vec<String> {
        validate_registration(form)
            .unwrap_err()
            .into_iter()
            .map(|e| e.field)
            .collect()
    }

    #[test]
    fn test_valid_form_produces_typed_registration() {
        let registration = validate_registration(&valid_form()).unwrap();
        let profile = registration.profile;

        assert_eq!(profile.email, "sleem@example.com");
        assert_eq!(profile.age, 21);
        assert_eq!(profile.governorate, Governorate::Cairo);
        assert_eq!(profile.level, Level::Third);
        assert_eq!(registration.password, "secret-pass");
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = validate_registration(&RegisterForm::default()).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();

        for field in [
            "name_ar",
            "name_en",
            "phone",
            "governorate",
            "national_id",
            "college",
            "level",
            "email",
            "age",
            "gender",
            "password",
        ] {
            assert!(fields.contains(&field), "missing error for {field}");
        }

        // Every failure carries a human-readable message.
        assert!(errors.iter().all(|e| !e.message.is_empty()));
    }

    #[test]
    fn test_name_ar_requires_arabic_characters() {
        assert!(validate_name_ar("سليم").is_ok());
        assert!(validate_name_ar("Sleem").is_err());
        assert!(validate_name_ar("").is_err());
    }

    #[test]
    fn test_name_en_latin_only() {
        assert!(validate_name_en("Sleem Hashem").is_ok());
        assert!(validate_name_en("سليم").is_err());
        assert!(validate_name_en("Sleem42").is_err());
    }

    #[test]
    fn test_phone_prefixes() {
        assert!(validate_phone("01012345678").is_ok());
        assert!(validate_phone("01112345678").is_ok());
        assert!(validate_phone("01212345678").is_ok());
        assert!(validate_phone("01512345678").is_ok());
        assert!(validate_phone("01312345678").is_err()); // 013 is not a mobile prefix
        assert!(validate_phone("0101234567").is_err()); // 10 digits
        assert!(validate_phone("010123456789").is_err()); // 12 digits
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn test_national_id_exactly_14_digits() {
        assert!(validate_national_id("29801011234567").is_ok());
        assert!(validate_national_id("2980101123456").is_err()); // 13
        assert!(validate_national_id("298010112345678").is_err()); // 15
        assert!(validate_national_id("2980101123456a").is_err());
        assert!(validate_national_id("").is_err());
    }

    #[test]
    fn test_age_bounds() {
        assert_eq!(validate_age("16").unwrap(), 16);
        assert_eq!(validate_age("100").unwrap(), 100);
        assert!(validate_age("15").is_err());
        assert!(validate_age("101").is_err());
        assert!(validate_age("abc").is_err());
        assert!(validate_age("").is_err());
        assert!(validate_age("-5").is_err());
    }

    #[test]
    fn test_email_shape() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("a b@c.co").is_err());
    }

    #[test]
    fn test_password_minimum_length() {
        assert!(validate_password("123456").is_ok());
        assert!(validate_password("12345").is_err());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_unknown_enum_values_rejected() {
        let mut form = valid_form();
        form.governorate = "atlantis".to_string();
        form.college = "alchemy".to_string();
        form.level = "9".to_string();
        form.gender = "other".to_string();

        let fields = failing_fields(&form);
        assert_eq!(fields, vec!["governorate", "college", "level", "gender"]);
    }

    #[test]
    fn test_blank_payment_code_dropped() {
        let mut form = valid_form();
        form.payment_code = Some("  ".to_string());

        let registration = validate_registration(&form).unwrap();
        assert!(registration.profile.payment_code.is_none());

        form.payment_code = Some(" TX-1234 ".to_string());
        let registration = validate_registration(&form).unwrap();
        assert_eq!(registration.profile.payment_code.as_deref(), Some("TX-1234"));
    }

    #[test]
    fn test_login_validation() {
        let form = LoginForm {
            email: "sleem@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(validate_login(&form).is_ok());

        let form = LoginForm {
            email: "bad".to_string(),
            password: "123".to_string(),
        };
        let errors = validate_login(&form).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
