//! # Session cache — the one piece of state that survives a reload
//!
//! The logged-in user is mirrored into a key/value [`SessionStore`] (browser
//! `localStorage` on the web, memory elsewhere). [`SessionCache`] wraps a store
//! with typed access. The stored value nests the user two levels deep, the
//! shape existing `reduxState` entries already have:
//!
//! ```json
//! { "user": { "user": { "id": 1, "username": "ada", ... } } }
//! ```
//!
//! Logged-out sessions are written as `{"user": {"user": null}}`.
//!
//! Store implementations swallow their own errors. A broken or unavailable
//! store degrades to "no cached session" rather than failing the page.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Synchronous key/value store for session data.
pub trait SessionStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Debug, Serialize, Deserialize)]
struct RootState<U> {
    user: UserSlice<U>,
}

#[derive(Debug, Serialize, Deserialize)]
struct UserSlice<U> {
    user: Option<U>,
}

/// Typed access to the cached user stored under a single key.
#[derive(Clone, Debug)]
pub struct SessionCache<S> {
    store: S,
    key: String,
}

impl<S: SessionStore> SessionCache<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Read the cached user, if any. Malformed data counts as logged out.
    pub fn load_user<U: DeserializeOwned>(&self) -> Option<U> {
        let raw = self.store.load(&self.key)?;
        match serde_json::from_str::<RootState<U>>(&raw) {
            Ok(state) => state.user.user,
            Err(e) => {
                tracing::warn!("Ignoring unreadable session under {}: {}", self.key, e);
                None
            }
        }
    }

    /// Replace the cached user. `None` records a logged-out session.
    pub fn store_user<U: Serialize>(&self, user: Option<&U>) {
        let state = RootState {
            user: UserSlice { user },
        };
        match serde_json::to_string(&state) {
            Ok(json) => self.store.save(&self.key, &json),
            Err(e) => tracing::warn!("Failed to serialise session: {}", e),
        }
    }

    /// Drop the cached session entirely.
    pub fn clear(&self) {
        self.store.remove(&self.key);
    }
}
