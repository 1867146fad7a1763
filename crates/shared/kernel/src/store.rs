//! Key-value persistence seam (the browser's `localStorage`, or a test double).

use crate::error::StoreError;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::fmt::Debug;
use std::sync::Arc;

/// String key-value storage with `localStorage` semantics.
///
/// Methods take `&self`: backends are expected to be shared between the
/// feature that owns them and the shell that created them.
pub trait KeyValueStore: Debug + Send + Sync {
    /// # Errors
    /// Returns [`StoreError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// # Errors
    /// Returns [`StoreError`] if the value cannot be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Process-local store; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<FxHashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with one entry.
    #[must_use]
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.write().insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.write().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let store = MemoryStore::new();
        assert_eq!(store.get("fam_age_verified_v1").unwrap(), None);
        store.set("fam_age_verified_v1", "true").unwrap();
        assert_eq!(store.get("fam_age_verified_v1").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn arc_forwards_to_inner_store() {
        let store = Arc::new(MemoryStore::new().with_entry("k", "v"));
        let shared: Arc<dyn KeyValueStore> = store.clone();
        shared.set("k2", "v2").unwrap();
        assert_eq!(store.len(), 2);
    }
}
