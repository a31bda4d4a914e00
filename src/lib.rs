//! Biochar Engine - project document persistence for the browser
//!
//! Core modules:
//! - `persistence`: Cached load/save/clear of the project document
//! - `platform`: Browser/native key-value storage backends
//! - `selection`: Current project identifier
//! - `config`: Store configuration
//! - `engine`: Store paired with the caller's document handle
//! - `bindings`: JS-facing API (wasm32 only)

#[cfg(target_arch = "wasm32")]
pub mod bindings;
pub mod config;
pub mod engine;
pub mod persistence;
pub mod platform;
pub mod selection;

pub use config::StoreConfig;
pub use persistence::{ProjectData, ProjectStore, StoreError};
pub use platform::{KeyValueStore, MemoryStorage, StorageArea, StorageError};
#[cfg(target_arch = "wasm32")]
pub use platform::WebStorage;

/// Storage keys shared with the rest of the page
pub mod consts {
    /// Serialized project document
    pub const DATA_KEY: &str = "biocharProjectData";
    /// Current project identifier, owned by `selection`
    pub const CURRENT_PROJECT_KEY: &str = "currentProjectId";
}
