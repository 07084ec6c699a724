//! Session storage seam
//!
//! The browser keeps session state in origin-scoped `localStorage`; native
//! hosts and tests inject their own store.

use std::collections::HashMap;
use std::sync::Mutex;

/// Origin-scoped key-value storage for session state
pub trait SessionStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any prior value
    fn set(&self, key: &str, value: &str);

    /// Remove `key`; removing a missing key is a no-op
    fn remove(&self, key: &str);
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// In-memory store for native hosts and test doubles
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .expect("Failed to acquire store lock")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .expect("Failed to acquire store lock")
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values
            .lock()
            .expect("Failed to acquire store lock")
            .remove(key);
    }
}

/// Store over the window's `localStorage`.
///
/// A missing storage facility (storage disabled, detached window) degrades
/// to absent reads and dropped writes.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    /// Create a store over the window's `localStorage`
    pub fn new() -> Self {
        Self
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("auth_token"), None);

        store.set("auth_token", "tok123");
        assert_eq!(store.get("auth_token").as_deref(), Some("tok123"));

        store.set("auth_token", "tok456");
        assert_eq!(store.get("auth_token").as_deref(), Some("tok456"));

        store.remove("auth_token");
        assert_eq!(store.get("auth_token"), None);
    }

    #[test]
    fn memory_store_remove_missing_key() {
        let store = MemoryStore::new();
        store.remove("user");
        assert_eq!(store.get("user"), None);
    }
}
