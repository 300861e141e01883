//! Shared session cache constructor for all platforms.
//!
//! Returns a [`store::SessionCache`] backed by the appropriate
//! [`store::SessionStore`]:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageStore`]
//! - **Server render / tests**: process memory via [`store::MemoryStore`]

use store::config::SessionConfig;

/// Create a platform-appropriate session cache under the configured key.
pub fn make_session(config: &SessionConfig) -> store::SessionCache<impl store::SessionStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::SessionCache::new(store::LocalStorageStore::new(), config.storage_key.clone())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::SessionCache::new(store::MemoryStore::new(), config.storage_key.clone())
    }
}
