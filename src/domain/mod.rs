//! Domain layer - entities, validation rules and repository contracts

pub mod error;
pub mod registrant;
pub mod session;
pub mod storage;

pub use error::{DomainError, FieldError};
