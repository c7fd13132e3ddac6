//! Session infrastructure

mod repository;

pub use repository::{SESSION_KEY, StoreSessionRepository};
