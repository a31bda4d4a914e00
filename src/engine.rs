//! Project store paired with the caller's own document handle
//!
//! A JS caller gets back the very object it last saved or loaded, so
//! in-place edits made to it show up on the next load even before they are
//! saved. `H` is that handle; the store keeps the JSON form.

use serde_json::Value;

use crate::persistence::{ProjectData, ProjectStore, StoreError};
use crate::platform::KeyValueStore;

pub struct Engine<S, H> {
    store: ProjectStore<S>,
    handle: Option<H>,
}

impl<S: KeyValueStore, H: Clone> Engine<S, H> {
    pub fn new(store: ProjectStore<S>) -> Self {
        Self {
            store,
            handle: None,
        }
    }

    /// Return the handle for the current document, building it from the
    /// stored document the first time.
    pub fn load(&mut self, build: impl FnOnce(&ProjectData) -> H) -> H {
        if let Some(handle) = &self.handle {
            return handle.clone();
        }
        let handle = build(self.store.load());
        self.handle = Some(handle.clone());
        handle
    }

    /// Save the document behind `handle`. `None` is missing input. Failures
    /// are logged and leave both the handle and the store untouched.
    pub fn save(
        &mut self,
        handle: Option<H>,
        encode: impl FnOnce(&H) -> Result<Value, StoreError>,
    ) {
        match self.try_save(handle, encode) {
            Ok(()) => {}
            Err(e @ StoreError::MissingData) => log::error!("Save failed: {}", e),
            Err(e) => log::error!("Error saving project data: {}", e),
        }
    }

    pub fn try_save(
        &mut self,
        handle: Option<H>,
        encode: impl FnOnce(&H) -> Result<Value, StoreError>,
    ) -> Result<(), StoreError> {
        let handle = handle.ok_or(StoreError::MissingData)?;
        let value = encode(&handle)?;
        self.store.try_save_value(value)?;
        self.handle = Some(handle);
        Ok(())
    }

    /// Clear the stored document; the next load builds a fresh handle
    pub fn clear(&mut self) {
        match self.store.try_clear() {
            Ok(()) => self.handle = None,
            Err(e) => log::error!("Error clearing project data: {}", e),
        }
    }

    pub fn store(&self) -> &ProjectStore<S> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DATA_KEY;
    use crate::platform::MemoryStorage;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shared mutable document, standing in for a JS object
    type Handle = Rc<RefCell<Value>>;

    fn build(data: &ProjectData) -> Handle {
        Rc::new(RefCell::new(data.clone().into_value()))
    }

    fn encode(handle: &Handle) -> Result<Value, StoreError> {
        Ok(handle.borrow().clone())
    }

    fn engine() -> Engine<MemoryStorage, Handle> {
        Engine::new(ProjectStore::new(MemoryStorage::new()))
    }

    #[test]
    fn test_load_returns_same_handle() {
        let mut engine = engine();
        let first = engine.load(build);
        first.borrow_mut()["draft"] = json!(true);

        let second = engine.load(build);
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(second.borrow()["draft"], json!(true));
        // The unsaved edit never reached storage
        assert_eq!(engine.store().storage().get_item(DATA_KEY).unwrap(), None);
    }

    #[test]
    fn test_save_keeps_callers_handle() {
        let mut engine = engine();
        let handle: Handle = Rc::new(RefCell::new(json!({"name": "Kiln"})));
        engine.save(Some(handle.clone()), encode);

        assert!(Rc::ptr_eq(&engine.load(build), &handle));
        assert_eq!(
            engine.store().storage().get_item(DATA_KEY).unwrap().as_deref(),
            Some(r#"{"name":"Kiln"}"#)
        );
    }

    #[test]
    fn test_missing_handle_is_missing_data() {
        let mut engine = engine();
        let err = engine.try_save(None, encode).unwrap_err();
        assert!(matches!(err, StoreError::MissingData));
        assert!(engine.store().storage().is_empty());
    }

    #[test]
    fn test_encode_failure_is_not_missing_data() {
        let mut engine = engine();
        let saved: Handle = Rc::new(RefCell::new(json!({"name": "Kiln"})));
        engine.save(Some(saved.clone()), encode);

        let cyclic: Handle = Rc::new(RefCell::new(json!({})));
        let err = engine
            .try_save(Some(cyclic), |_| {
                Err(StoreError::Encode("cyclic object value".to_string()))
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Encode(_)));

        // Previous handle and stored text are untouched
        assert!(Rc::ptr_eq(&engine.load(build), &saved));
        assert_eq!(
            engine.store().storage().get_item(DATA_KEY).unwrap().as_deref(),
            Some(r#"{"name":"Kiln"}"#)
        );
    }

    #[test]
    fn test_clear_drops_handle() {
        let mut engine = engine();
        let saved: Handle = Rc::new(RefCell::new(json!({"name": "Kiln"})));
        engine.save(Some(saved.clone()), encode);

        engine.clear();

        let fresh = engine.load(build);
        assert!(!Rc::ptr_eq(&fresh, &saved));
        assert_eq!(*fresh.borrow(), json!({}));
        assert!(!engine.store().storage().contains_key(DATA_KEY));
    }
}
