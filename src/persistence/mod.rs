//! Project document persistence
//!
//! Features:
//! - Plain JSON entry under a single fixed key
//! - Write-through in-memory cache (storage is read at most once)
//! - Never-fail `load`/`save`/`clear` that log and degrade
//! - `try_*` variants that report what went wrong

mod data;
mod error;

pub use data::ProjectData;
pub use error::StoreError;

use serde_json::Value;

use crate::config::StoreConfig;
use crate::consts::CURRENT_PROJECT_KEY;
use crate::platform::KeyValueStore;
use crate::selection;

/// Load/save/clear access to the one resident project document.
///
/// The cache starts unset. The first load fills it from storage (or with an
/// empty record), every successful save replaces it, and clear resets it to
/// an empty record. Once filled, storage is never re-read, so writes made to
/// the same key by someone else are not noticed.
pub struct ProjectStore<S> {
    storage: S,
    config: StoreConfig,
    cache: Option<ProjectData>,
}

impl<S: KeyValueStore> ProjectStore<S> {
    /// Create a store over `storage` with the default keys
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, StoreConfig::default())
    }

    pub fn with_config(storage: S, config: StoreConfig) -> Self {
        Self {
            storage,
            config,
            cache: None,
        }
    }

    /// Return the project document.
    ///
    /// Missing, unreadable or corrupt data all yield an empty record, which
    /// is then cached like any other load result.
    pub fn load(&mut self) -> &ProjectData {
        if let Err(e) = self.fill_cache() {
            log::error!("Error loading project data: {}", e);
            self.cache = Some(ProjectData::new());
        }
        self.cache.get_or_insert_with(ProjectData::new)
    }

    /// Like [`load`](Self::load), but reports read and parse failures.
    /// The cache stays unset on error.
    pub fn try_load(&mut self) -> Result<&ProjectData, StoreError> {
        self.fill_cache()?;
        Ok(self.cache.get_or_insert_with(ProjectData::new))
    }

    fn fill_cache(&mut self) -> Result<(), StoreError> {
        if self.cache.is_some() {
            log::debug!("Loaded project data from cache");
            return Ok(());
        }

        let key = &self.config.data_key;
        let stored = self
            .storage
            .get_item(key)
            .map_err(|source| StoreError::Read {
                key: key.clone(),
                source,
            })?;

        let data = match stored {
            // An empty string counts as nothing stored
            Some(json) if !json.is_empty() => {
                let data: ProjectData =
                    serde_json::from_str(&json).map_err(|source| StoreError::Corrupted {
                        key: key.clone(),
                        source,
                    })?;
                log::info!("Loaded project data ({} fields)", data.len());
                data
            }
            _ => {
                log::info!("No project data found, starting fresh");
                ProjectData::new()
            }
        };

        self.cache = Some(data);
        Ok(())
    }

    /// Persist `data` and make it the cached document. Failures are logged
    /// and leave the cache as it was.
    pub fn save(&mut self, data: ProjectData) {
        if let Err(e) = self.try_save(data) {
            log::error!("Error saving project data: {}", e);
        }
    }

    /// Like [`save`](Self::save), but reports failures
    pub fn try_save(&mut self, data: ProjectData) -> Result<(), StoreError> {
        let json = serde_json::to_string(&data).map_err(StoreError::Serialize)?;
        self.storage
            .set_item(&self.config.data_key, &json)
            .map_err(|source| StoreError::Write {
                key: self.config.data_key.clone(),
                source,
            })?;

        // Cache only after the write is confirmed
        self.cache = Some(data);
        log::debug!("Project data saved");
        Ok(())
    }

    /// Save an untyped JSON value. `null` is treated as missing input and
    /// non-objects are rejected; neither has any side effect.
    pub fn save_value(&mut self, value: Value) {
        if let Err(e) = self.try_save_value(value) {
            log::error!("Save failed: {}", e);
        }
    }

    pub fn try_save_value(&mut self, value: Value) -> Result<(), StoreError> {
        let data = ProjectData::try_from(value)?;
        self.try_save(data)
    }

    /// Remove the stored document (and, if configured, the current project
    /// selection) and reset the cache to an empty record.
    pub fn clear(&mut self) {
        if let Err(e) = self.try_clear() {
            log::error!("Error clearing project data: {}", e);
        }
    }

    /// Like [`clear`](Self::clear), but reports failures. Removal stops at
    /// the first failure; nothing already removed is restored and the cache
    /// is left untouched.
    pub fn try_clear(&mut self) -> Result<(), StoreError> {
        let key = &self.config.data_key;
        self.storage
            .remove_item(key)
            .map_err(|source| StoreError::Remove {
                key: key.clone(),
                source,
            })?;

        if self.config.clear_selection {
            selection::clear_current_project_id(&mut self.storage).map_err(|source| {
                StoreError::Remove {
                    key: CURRENT_PROJECT_KEY.to_string(),
                    source,
                }
            })?;
        }

        self.cache = Some(ProjectData::new());
        log::info!("Project data cleared");
        Ok(())
    }

    /// Whether a document is held in memory
    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Direct access to the backing store, bypassing the cache
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Drop the cache and hand back the backing store
    pub fn into_storage(self) -> S {
        self.storage
    }
}
