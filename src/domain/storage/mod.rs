//! Storage domain - key/value persistence abstraction
//!
//! The persisted layout mirrors the two-entry browser-storage scheme the
//! service replaces: one key for the ordered registrant list, one for the
//! current session record.

mod kv;

pub use kv::KeyValueStore;

#[cfg(test)]
pub use kv::mock;
