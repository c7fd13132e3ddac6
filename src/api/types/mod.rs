//! Shared API types

mod error;
mod json;
mod registrant;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use registrant::RegistrantResponse;
