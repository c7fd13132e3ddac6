//! Registrant domain - entities, validation and repository contract

mod entity;
mod repository;
pub mod validation;

pub use entity::{
    College, Gender, Governorate, Level, Registrant, RegistrantId, RegistrantProfile,
    RegistrantStatus,
};
pub use repository::RegistrantRepository;
pub use validation::{LoginForm, NewRegistration, RegisterForm};

#[cfg(test)]
pub(crate) use entity::test_profile;

#[cfg(test)]
pub use repository::mock;
