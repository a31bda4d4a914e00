//! JS-facing API
//!
//! Exposes `ProjectEngine` with `loadProjectData`, `saveProjectData` and
//! `clearProjectData`. Documents cross the boundary as JSON text.

use wasm_bindgen::prelude::*;

use crate::config::StoreConfig;
use crate::engine::Engine;
use crate::persistence::{ProjectData, ProjectStore, StoreError};
use crate::platform::WebStorage;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // A logger was already installed by the host page
        return;
    }
    log::info!("Biochar Engine ready");
}

/// Project store over `window.localStorage`.
///
/// `loadProjectData` hands back the same object until the next successful
/// save or clear, so edits made to it in place are visible to later loads
/// (but are only persisted by `saveProjectData`).
#[wasm_bindgen]
pub struct ProjectEngine {
    engine: Engine<WebStorage, JsValue>,
}

#[wasm_bindgen]
impl ProjectEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ProjectEngine, JsError> {
        let config = StoreConfig::default();
        let storage = WebStorage::open(config.area)?;
        Ok(Self {
            engine: Engine::new(ProjectStore::with_config(storage, config)),
        })
    }

    /// Current project document as a plain JS object
    #[wasm_bindgen(js_name = loadProjectData)]
    pub fn load_project_data(&mut self) -> JsValue {
        self.engine.load(to_js)
    }

    /// Persist a JS object. `null`/`undefined` are logged and ignored.
    #[wasm_bindgen(js_name = saveProjectData)]
    pub fn save_project_data(&mut self, data: JsValue) {
        let handle = (!data.is_null() && !data.is_undefined()).then_some(data);
        self.engine.save(handle, from_js);
    }

    #[wasm_bindgen(js_name = clearProjectData)]
    pub fn clear_project_data(&mut self) {
        self.engine.clear();
    }
}

fn to_js(data: &ProjectData) -> JsValue {
    let parsed = serde_json::to_string(data)
        .ok()
        .and_then(|json| js_sys::JSON::parse(&json).ok());
    match parsed {
        Some(value) => value,
        None => {
            log::error!("Error converting project data for JS");
            js_sys::Object::new().into()
        }
    }
}

/// Encode a JS value through `JSON.stringify`. Cyclic objects, BigInts and
/// values with no JSON form (functions, symbols) are encode errors.
fn from_js(data: &JsValue) -> Result<serde_json::Value, StoreError> {
    let text = js_sys::JSON::stringify(data)
        .map_err(|e| StoreError::Encode(format!("{:?}", e)))?
        .as_string()
        .ok_or_else(|| StoreError::Encode("value has no JSON representation".to_string()))?;
    serde_json::from_str(&text).map_err(|e| StoreError::Encode(e.to_string()))
}
