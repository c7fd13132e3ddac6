//! Session domain - the single current session and its repository contract

mod entity;
mod repository;

pub use entity::Session;
pub use repository::SessionRepository;

#[cfg(test)]
pub use repository::mock;
