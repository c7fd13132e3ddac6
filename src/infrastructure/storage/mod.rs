//! Key/value store implementations

mod factory;
mod in_memory;
mod json_file;

pub use factory::{StorageBackend, StorageFactory};
pub use in_memory::InMemoryKvStore;
pub use json_file::JsonFileKvStore;
