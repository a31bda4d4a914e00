//! Project store errors

use crate::platform::StorageError;

/// Why a project store operation did not complete
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read '{key}': {source}")]
    Read { key: String, source: StorageError },

    /// The stored text does not parse as a JSON object
    #[error("stored project data under '{key}' is corrupt: {source}")]
    Corrupted {
        key: String,
        source: serde_json::Error,
    },

    #[error("no data object provided")]
    MissingData,

    #[error("project data must be an object, got {0}")]
    NotARecord(&'static str),

    /// The caller's value could not be turned into JSON
    #[error("failed to encode project data: {0}")]
    Encode(String),

    #[error("failed to serialize project data: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write '{key}': {source}")]
    Write { key: String, source: StorageError },

    #[error("failed to remove '{key}': {source}")]
    Remove { key: String, source: StorageError },
}
