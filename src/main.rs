//! Biochar Engine entry point
//!
//! On the web the library's start hook does the setup; natively this runs a
//! short persistence self-check against in-memory storage.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Biochar Engine (native) starting...");
    log::info!("Native mode uses in-memory storage - build for wasm32 to use LocalStorage");

    println!("\nRunning persistence self-check...");
    self_check();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is bindings::start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn self_check() {
    use biochar_engine::consts::{CURRENT_PROJECT_KEY, DATA_KEY};
    use biochar_engine::{KeyValueStore, MemoryStorage, ProjectData, ProjectStore, selection};

    let mut store = ProjectStore::new(MemoryStorage::new());
    assert!(store.load().is_empty(), "Fresh store should load empty");

    let mut data = ProjectData::new();
    data.insert("name", "Self-check kiln");
    data.insert("batches", serde_json::json!([{"mass_kg": 12.5}]));
    store.save(data.clone());
    selection::set_current_project_id(store.storage_mut(), "self-check")
        .expect("Memory storage write failed");

    let mut reopened = ProjectStore::new(store.into_storage());
    assert_eq!(reopened.load(), &data, "Saved data should survive a reload");

    reopened.clear();
    assert!(reopened.load().is_empty(), "Cleared store should load empty");
    let storage = reopened.storage();
    assert!(matches!(storage.get_item(DATA_KEY), Ok(None)));
    assert!(matches!(storage.get_item(CURRENT_PROJECT_KEY), Ok(None)));

    println!("✓ Persistence self-check passed!");
}
