//! Key/value storage backends for the durable client-side bits.
//!
//! [`MemoryKv`] serves native builds and tests; [`LocalStorageKv`] maps onto
//! the browser's `window.localStorage` on the web platform. Both silently
//! tolerate an unavailable backend — a blocked or full storage degrades to
//! "nothing persisted" rather than crashing the UI.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Durable string key/value storage.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory KvStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryKv {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

/// `window.localStorage`-backed KvStore for the web platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
#[derive(Clone, Debug, Default)]
pub struct LocalStorageKv;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl LocalStorageKv {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl KvStore for LocalStorageKv {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_kv_round_trips() {
        let kv = MemoryKv::new();
        assert_eq!(kv.get("k"), None);
        kv.set("k", "v");
        assert_eq!(kv.get("k").as_deref(), Some("v"));
        kv.remove("k");
        assert_eq!(kv.get("k"), None);
    }

    #[test]
    fn memory_kv_is_shared_between_clones() {
        let kv = MemoryKv::new();
        let other = kv.clone();
        kv.set("k", "v");
        assert_eq!(other.get("k").as_deref(), Some("v"));
    }
}
