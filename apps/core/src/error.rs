use std::io;
use thiserror::Error;

/// Errors from the key-value storage layer.
///
/// Callers treat any of these as "not persisted": the assistant degrades to
/// its default behavior instead of surfacing the failure to the user.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Represents standard input/output errors (store file unreadable, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents malformed data in the store (e.g., a corrupt JSON payload).
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
