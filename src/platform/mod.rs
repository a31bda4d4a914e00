//! Platform abstraction layer
//!
//! Handles browser/native differences for durable key-value storage:
//! - `WebStorage`: LocalStorage / SessionStorage (wasm32 only)
//! - `MemoryStorage`: in-process map with an optional quota (all targets)

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use memory::MemoryStorage;
#[cfg(target_arch = "wasm32")]
pub use web::WebStorage;

use serde::{Deserialize, Serialize};

/// Failure reported by a storage backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage area could be reached (no window, storage disabled, ...)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The write would exceed the backend's capacity
    #[error("storage quota exceeded while writing '{key}'")]
    QuotaExceeded { key: String },
    /// Any other exception raised by the host environment
    #[error("host storage error: {0}")]
    Host(String),
}

/// DOMException names browsers use for a full storage area
const QUOTA_EXCEEDED_NAMES: [&str; 2] = ["QuotaExceededError", "NS_ERROR_DOM_QUOTA_REACHED"];

impl StorageError {
    /// Classify an exception thrown while writing `key`
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub(crate) fn from_write_exception(key: &str, name: Option<&str>, detail: String) -> Self {
        match name {
            Some(name) if QUOTA_EXCEEDED_NAMES.contains(&name) => StorageError::QuotaExceeded {
                key: key.to_string(),
            },
            _ => StorageError::Host(detail),
        }
    }
}

/// Which browser storage area to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StorageArea {
    /// Persists across sessions, scoped to the origin
    #[default]
    Local,
    /// Cleared when the browsing context closes
    Session,
}

impl StorageArea {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageArea::Local => "localStorage",
            StorageArea::Session => "sessionStorage",
        }
    }
}

/// Synchronous string-keyed storage, modelled on the Web Storage API
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if absent
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_exception_names_map_to_quota_exceeded() {
        for name in QUOTA_EXCEEDED_NAMES {
            let err = StorageError::from_write_exception("biocharProjectData", Some(name), String::new());
            assert_eq!(
                err,
                StorageError::QuotaExceeded {
                    key: "biocharProjectData".to_string()
                }
            );
        }
    }

    #[test]
    fn test_other_exceptions_are_host_errors() {
        let err = StorageError::from_write_exception("k", Some("SecurityError"), "denied".to_string());
        assert_eq!(err, StorageError::Host("denied".to_string()));

        let err = StorageError::from_write_exception("k", None, "thrown string".to_string());
        assert_eq!(err, StorageError::Host("thrown string".to_string()));
    }
}
