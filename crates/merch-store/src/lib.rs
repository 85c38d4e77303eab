//! Local persistent state adapter.
//!
//! Widgets persist a small amount of state (the shopper's selected store
//! and location) across visits. The backing store is a string-keyed string
//! map behind the `KeyValueStore` trait so hosts can plug in browser
//! localStorage, a file, or the in-memory store shipped here.
//!
//! The adapter reads whole JSON objects and shallow-merges partial updates
//! over them. Malformed persisted payloads are swallowed and treated as
//! empty, never surfaced as errors. There is no delete operation.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::{Map, Value};

/// Namespaced persisted fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// The shopper's selected store id.
    SelectedStoreId,
    /// The shopper's location payload.
    Location,
}

impl StorageKey {
    /// The namespaced key string as persisted by the locator service.
    pub fn name(&self) -> &'static str {
        match self {
            StorageKey::SelectedStoreId => "Brauz_find_in_store_selected_store_id",
            StorageKey::Location => "Brauz_find_in_store_location",
        }
    }
}

/// Backing string store for persisted widget state.
///
/// Implementations use interior mutability; the adapter only needs shared
/// references. Last write wins, no concurrency control.
pub trait KeyValueStore {
    /// Read the raw string value for a key.
    fn get(&self, key: &str) -> Option<String>;
    /// Write the raw string value for a key.
    fn set(&self, key: &str, value: String);
}

/// In-memory store for tests and headless hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.values.lock().unwrap().insert(key.to_string(), value);
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: String) {
        (**self).set(key, value)
    }
}

/// JSON object read/merge over a `KeyValueStore`.
pub struct StateAdapter<S> {
    store: S,
}

impl<S: KeyValueStore> StateAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the persisted object under a key.
    ///
    /// Absent, malformed, or non-object payloads all yield an empty object.
    pub fn read(&self, key: StorageKey) -> Map<String, Value> {
        self.store
            .get(key.name())
            .and_then(|raw| serde_json::from_str::<Value>(&raw).ok())
            .and_then(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Shallow-merge a partial object over the persisted one and write the
    /// union back.
    pub fn merge(&self, key: StorageKey, partial: &Map<String, Value>) {
        let mut current = self.read(key);
        for (k, v) in partial {
            current.insert(k.clone(), v.clone());
        }
        self.store
            .set(key.name(), Value::Object(current).to_string());
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
