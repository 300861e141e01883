//! # localStorage session store — browser-side persistence
//!
//! [`LocalStorageStore`] is the [`SessionStore`] used on the web platform. It
//! is a zero-size handle that looks up `window.localStorage` on every call, so
//! it stays `Clone` and never holds a JS object across await points.
//!
//! All operations silently ignore failures (no window, storage disabled,
//! quota exceeded). The server remains the source of truth for the session.

use crate::session::SessionStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStorageStore {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.set_item(key, value) {
                tracing::warn!("localStorage write failed: {:?}", e);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
