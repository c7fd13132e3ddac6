//! Registrant infrastructure - persistence and registration workflow

mod repository;
mod service;

pub use repository::{REGISTRANTS_KEY, StoreRegistrantRepository};
pub use service::RegistrationService;
