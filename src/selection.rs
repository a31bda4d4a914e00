//! Current project selection
//!
//! Owns the `currentProjectId` storage key. The project store may delete it
//! from `ProjectStore::clear` (see `StoreConfig::clear_selection`); nothing
//! else outside this module touches it.

use crate::consts::CURRENT_PROJECT_KEY;
use crate::platform::{KeyValueStore, StorageError};

/// Read the current project identifier, if one is selected
pub fn current_project_id<S: KeyValueStore>(storage: &S) -> Option<String> {
    match storage.get_item(CURRENT_PROJECT_KEY) {
        Ok(id) => id.filter(|id| !id.is_empty()),
        Err(e) => {
            log::error!("Error reading current project id: {}", e);
            None
        }
    }
}

/// Select `id` as the current project
pub fn set_current_project_id<S: KeyValueStore>(
    storage: &mut S,
    id: &str,
) -> Result<(), StorageError> {
    storage.set_item(CURRENT_PROJECT_KEY, id)
}

/// Drop the current selection
pub fn clear_current_project_id<S: KeyValueStore>(storage: &mut S) -> Result<(), StorageError> {
    storage.remove_item(CURRENT_PROJECT_KEY)
}
