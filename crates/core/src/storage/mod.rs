//! Local key/value persistence.
//!
//! Mirrors the shape of browser local storage: string keys mapped to string
//! values, every write replacing the whole value for its key.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors for storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to serialize stored state: {0}")]
    Serialize(String),
}

/// String key/value store that survives restarts.
pub trait LocalStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
