//! Browser Web Storage backend (wasm32 only)

use wasm_bindgen::JsValue;

use super::{KeyValueStore, StorageArea, StorageError};

/// `KeyValueStore` over `window.localStorage` or `window.sessionStorage`
pub struct WebStorage {
    storage: web_sys::Storage,
}

impl WebStorage {
    /// Open the given storage area of the current window
    pub fn open(area: StorageArea) -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = match area {
            StorageArea::Local => window.local_storage(),
            StorageArea::Session => window.session_storage(),
        }
        .ok()
        .flatten()
        .ok_or_else(|| {
            StorageError::Unavailable(format!("{} is disabled", area.as_str()))
        })?;

        log::info!("Opened {}", area.as_str());
        Ok(Self { storage })
    }
}

/// Name of a thrown DOMException, if it has one
fn exception_name(err: &JsValue) -> Option<String> {
    js_sys::Reflect::get(err, &JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string())
}

fn host_error(err: JsValue) -> StorageError {
    StorageError::Host(format!("{:?}", err))
}

impl KeyValueStore for WebStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(host_error)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|err| {
            let name = exception_name(&err);
            StorageError::from_write_exception(key, name.as_deref(), format!("{:?}", err))
        })
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(host_error)
    }
}
