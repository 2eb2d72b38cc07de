//! In-memory store.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;

use super::{KeyValueStore, StoreError, apply_within_quota};

/// A store that keeps everything in process memory.
///
/// Useful for tests and throwaway sessions. Writes can be switched off with
/// [`MemoryStore::reject_writes`] to simulate an unavailable backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
    quota: Option<usize>,
    read_only: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store without a quota.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store limited to `quota` bytes (keys plus values).
    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Self::default()
        }
    }

    /// Make every subsequent write fail with `StoreError::Unavailable`.
    pub fn reject_writes(&self, reject: bool) {
        self.read_only.store(reject, Ordering::SeqCst);
    }

    /// Number of stored keys.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// True when no key is stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    async fn commit(&self, updates: Vec<(String, Option<String>)>) -> Result<(), StoreError> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("writes are disabled".to_string()));
        }
        let mut entries = self.entries.lock().await;
        let next = apply_within_quota(&entries, updates, self.quota)?;
        *entries = next;
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.commit(vec![(key.to_owned(), Some(value))]).await
    }

    async fn set_many(&self, entries: Vec<(String, String)>) -> Result<(), StoreError> {
        let updates = entries.into_iter().map(|(k, v)| (k, Some(v))).collect();
        self.commit(updates).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.commit(vec![(key.to_owned(), None)]).await
    }
}
