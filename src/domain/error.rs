use thiserror::Error;

/// A single per-field validation failure, surfaced inline next to the
/// offending form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Form validation failed for {} field(s)", errors.len())]
    InvalidForm { errors: Vec<FieldError> },

    #[error("{message}")]
    Credentials { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn invalid_form(errors: Vec<FieldError>) -> Self {
        Self::InvalidForm { errors }
    }

    pub fn credentials(message: impl Into<String>) -> Self {
        Self::Credentials {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Registrant 'abc' not found");
        assert_eq!(error.to_string(), "Not found: Registrant 'abc' not found");
    }

    #[test]
    fn test_conflict_error() {
        let error = DomainError::conflict("Email already registered");
        assert_eq!(error.to_string(), "Conflict: Email already registered");
    }

    #[test]
    fn test_invalid_form_error() {
        let error = DomainError::invalid_form(vec![
            FieldError::new("email", "Email is required"),
            FieldError::new("age", "out of range"),
        ]);
        assert_eq!(error.to_string(), "Form validation failed for 2 field(s)");
    }

    #[test]
    fn test_credentials_error_is_opaque() {
        // The same message regardless of which credential was wrong.
        let error = DomainError::credentials("Invalid email or password");
        assert_eq!(error.to_string(), "Invalid email or password");
    }
}
