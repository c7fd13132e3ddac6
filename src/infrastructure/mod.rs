//! Infrastructure layer - storage backends, services and adapters

pub mod auth;
pub mod logging;
pub mod media;
pub mod registrant;
pub mod session;
pub mod storage;
