use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionStore;

/// In-memory SessionStore for testing and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionCache;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestUser {
        id: i64,
        username: String,
    }

    fn ada() -> TestUser {
        TestUser {
            id: 7,
            username: "ada".to_string(),
        }
    }

    #[test]
    fn test_empty_store_has_no_user() {
        let cache = SessionCache::new(MemoryStore::new(), "reduxState");
        assert!(cache.load_user::<TestUser>().is_none());
    }

    #[test]
    fn test_store_and_load_user() {
        let store = MemoryStore::new();
        let cache = SessionCache::new(store.clone(), "reduxState");

        cache.store_user(Some(&ada()));
        assert_eq!(cache.load_user::<TestUser>(), Some(ada()));

        // Nested root-state shape
        let raw = store.load("reduxState").unwrap();
        assert_eq!(raw, r#"{"user":{"user":{"id":7,"username":"ada"}}}"#);
    }

    #[test]
    fn test_logged_out_session_is_written_as_null() {
        let store = MemoryStore::new();
        let cache = SessionCache::new(store.clone(), "reduxState");

        cache.store_user(Some(&ada()));
        cache.store_user::<TestUser>(None);

        assert!(cache.load_user::<TestUser>().is_none());
        assert_eq!(store.load("reduxState").unwrap(), r#"{"user":{"user":null}}"#);
    }

    #[test]
    fn test_reads_session_written_by_other_client() {
        let store = MemoryStore::new();
        store.save(
            "reduxState",
            r#"{"user":{"user":{"id":7,"username":"ada","display_name":"Ada"}}}"#,
        );
        let cache = SessionCache::new(store, "reduxState");
        assert_eq!(cache.load_user::<TestUser>(), Some(ada()));
    }

    #[test]
    fn test_malformed_session_counts_as_logged_out() {
        let store = MemoryStore::new();
        store.save("reduxState", "not json");
        let cache = SessionCache::new(store.clone(), "reduxState");
        assert!(cache.load_user::<TestUser>().is_none());

        store.save("reduxState", "null");
        assert!(cache.load_user::<TestUser>().is_none());
    }

    #[test]
    fn test_clear_removes_entry() {
        let store = MemoryStore::new();
        let cache = SessionCache::new(store.clone(), "k");
        cache.store_user(Some(&ada()));
        cache.clear();
        assert!(store.load("k").is_none());
    }
}
