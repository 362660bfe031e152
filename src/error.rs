//! Error types for persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by key-value stores.
///
/// The game session never surfaces these to the player: failed writes are
/// logged and play continues with in-memory state.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to read or write the backing file.
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Value could not be encoded or decoded as JSON.
    #[error("invalid JSON for {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
