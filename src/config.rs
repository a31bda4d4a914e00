//! Store configuration
//!
//! Which key the project document lives under, which storage area to open,
//! and whether clearing the project may also drop the current selection.

use serde::{Deserialize, Serialize};

use crate::consts::DATA_KEY;
use crate::platform::StorageArea;

/// Project store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Storage key holding the serialized project document
    pub data_key: String,
    /// Remove the current project identifier when the project is cleared
    pub clear_selection: bool,
    /// Browser storage area (ignored by non-web backends)
    pub area: StorageArea,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_key: DATA_KEY.to_string(),
            clear_selection: true,
            area: StorageArea::Local,
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the document under a different key
    pub fn with_data_key(mut self, key: impl Into<String>) -> Self {
        self.data_key = key.into();
        self
    }

    /// Enable or disable clearing the current selection on `clear`
    pub fn with_clear_selection(mut self, enabled: bool) -> Self {
        self.clear_selection = enabled;
        self
    }

    pub fn with_area(mut self, area: StorageArea) -> Self {
        self.area = area;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_fixed_keys() {
        let config = StoreConfig::default();
        assert_eq!(config.data_key, "biocharProjectData");
        assert!(config.clear_selection);
        assert_eq!(config.area, StorageArea::Local);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: StoreConfig = serde_json::from_str(r#"{"area":"Session"}"#).unwrap();
        assert_eq!(config.area, StorageArea::Session);
        assert_eq!(config.data_key, DATA_KEY);
        assert!(config.clear_selection);
    }

    #[test]
    fn test_builders() {
        let config = StoreConfig::new()
            .with_data_key("other")
            .with_clear_selection(false)
            .with_area(StorageArea::Session);
        assert_eq!(config.data_key, "other");
        assert!(!config.clear_selection);
        assert_eq!(config.area, StorageArea::Session);
    }
}
