//! Preference storage backend for the current platform.
//!
//! Desktop keeps `preferences.json` in the data directory; the browser build
//! uses `localStorage` with raw string values.

use folio_core::PreferenceStore;

#[cfg(feature = "desktop")]
pub fn preference_store() -> Box<dyn PreferenceStore> {
    let dir = crate::get_data_dir();
    tracing::debug!("Preferences stored in {:?}", dir);
    Box::new(folio_core::FileStore::in_dir(dir))
}

#[cfg(not(feature = "desktop"))]
pub fn preference_store() -> Box<dyn PreferenceStore> {
    Box::new(LocalStore)
}

/// `window.localStorage`, one string per key.
#[cfg(not(feature = "desktop"))]
pub struct LocalStore;

#[cfg(not(feature = "desktop"))]
impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> folio_core::FolioResult<Option<String>> {
        use gloo::storage::{LocalStorage, Storage};

        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| folio_core::FolioError::Store(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> folio_core::FolioResult<()> {
        use gloo::storage::{LocalStorage, Storage};

        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| folio_core::FolioError::Store(format!("{:?}", e)))
    }
}
