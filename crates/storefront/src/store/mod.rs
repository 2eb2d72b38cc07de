//! Key-value persistence for storefront data.
//!
//! # Layout
//!
//! Every logical collection lives under one key as a JSON array:
//!
//! - `<prefix>_watches` - catalog products
//! - `<prefix>_news` - news feed
//! - `<prefix>_orders` - append-only order log
//! - `<prefix>_cart` - cart lines
//!
//! # Backends
//!
//! - [`MemoryStore`] - in-process map, used by tests and ephemeral sessions
//! - [`FileStore`] - single JSON document on disk, rewritten atomically
//!
//! Both enforce an optional byte quota the way browser local storage does:
//! a write that would grow the store past the quota fails and changes nothing.

pub mod file;
pub mod memory;

use std::collections::BTreeMap;
use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The write would grow the store past its quota.
    #[error("storage quota exceeded: {needed} bytes needed, {limit} allowed")]
    QuotaExceeded {
        /// Size the store would have after the write.
        needed: usize,
        /// Configured quota.
        limit: usize,
    },

    /// The store refuses writes (read-only, disabled, shut down).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Filesystem error from a disk-backed store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be converted to or from JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A string key-value store with an all-or-nothing multi-key write.
///
/// Implementations are shared by reference between repositories, so every
/// method takes `&self` and handles its own locking.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    /// Store a raw value under `key`.
    fn set(&self, key: &str, value: String) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Store several values in one commit: either all land or none do.
    fn set_many(
        &self,
        entries: Vec<(String, String)>,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Delete `key`. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// Storage keys for each storefront collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// Catalog products.
    pub catalog: String,
    /// News feed.
    pub news: String,
    /// Order log.
    pub orders: String,
    /// Cart lines.
    pub cart: String,
}

impl StorageKeys {
    /// Default key prefix.
    pub const DEFAULT_PREFIX: &'static str = "sonero";

    /// Build the key set for a prefix (e.g. `sonero` → `sonero_watches`).
    #[must_use]
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            catalog: format!("{prefix}_watches"),
            news: format!("{prefix}_news"),
            orders: format!("{prefix}_orders"),
            cart: format!("{prefix}_cart"),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::with_prefix(Self::DEFAULT_PREFIX)
    }
}

// =============================================================================
// JSON Helpers
// =============================================================================

/// Read and deserialize a value.
///
/// # Errors
///
/// Returns `StoreError` if the backend fails or the stored value is not valid
/// JSON for `T`.
pub async fn get_json<S, T>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    match store.get(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Records stored under a key as a JSON array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Records<T> {
    /// Records that decoded, in stored order.
    pub items: Vec<T>,
    /// Array elements that did not decode as `T`.
    pub skipped: usize,
}

impl<T> Records<T> {
    const fn empty() -> Self {
        Self {
            items: Vec::new(),
            skipped: 0,
        }
    }

    /// True when every stored element decoded.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.skipped == 0
    }
}

/// Read a JSON array, decoding each element on its own.
///
/// A missing key, or a value that is not a JSON array at all, reads as an
/// empty list. Elements that fail to decode are logged and counted in
/// [`Records::skipped`] so callers can refuse to write the list back.
///
/// # Errors
///
/// Returns `StoreError` only if the backend read fails.
pub async fn get_records<S, T>(store: &S, key: &str) -> Result<Records<T>, StoreError>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key).await? else {
        return Ok(Records::empty());
    };

    let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(values) => values,
        Err(e) => {
            tracing::warn!(key, error = %e, "Stored value is not a JSON array, reading as empty");
            return Ok(Records::empty());
        }
    };

    let total = values.len();
    let items: Vec<T> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(key, index, error = %e, "Skipping undecodable record");
                None
            }
        })
        .collect();

    Ok(Records {
        skipped: total - items.len(),
        items,
    })
}

/// Serialize a value into a `(key, json)` entry for [`KeyValueStore::set_many`].
///
/// # Errors
///
/// Returns `StoreError::Serialization` if `value` cannot be serialized.
pub fn to_entry<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<(String, String), StoreError> {
    Ok((key.to_owned(), serde_json::to_string(value)?))
}

/// Serialize and store a value.
///
/// # Errors
///
/// Returns `StoreError` if serialization or the backend write fails.
pub async fn set_json<S, T>(store: &S, key: &str, value: &T) -> Result<(), StoreError>
where
    S: KeyValueStore,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, raw).await
}

// =============================================================================
// Quota Accounting
// =============================================================================

/// Bytes used by a map: the sum of key and value lengths.
fn usage(entries: &BTreeMap<String, String>) -> usize {
    entries.iter().map(|(k, v)| k.len() + v.len()).sum()
}

/// Apply `updates` to a copy of `current`, rejecting the result if it exceeds
/// `quota` and grows the store. `None` values delete their key.
fn apply_within_quota(
    current: &BTreeMap<String, String>,
    updates: Vec<(String, Option<String>)>,
    quota: Option<usize>,
) -> Result<BTreeMap<String, String>, StoreError> {
    let mut next = current.clone();
    for (key, value) in updates {
        match value {
            Some(value) => {
                next.insert(key, value);
            }
            None => {
                next.remove(&key);
            }
        }
    }

    if let Some(limit) = quota {
        let needed = usage(&next);
        if needed > limit && needed > usage(current) {
            return Err(StoreError::QuotaExceeded { needed, limit });
        }
    }
    Ok(next)
}
