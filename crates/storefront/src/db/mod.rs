//! Repositories over the key-value store.
//!
//! # Keys
//!
//! Each repository is the only writer of its key:
//!
//! - [`CatalogRepository`] - `<prefix>_watches`
//! - [`NewsRepository`] - `<prefix>_news`
//! - [`CartRepository`] - `<prefix>_cart` (checkout also appends to `<prefix>_orders`
//!   in the same commit)
//! - [`OrderLog`] - `<prefix>_orders`
//!
//! Repositories hold no state of their own: every call reads the current
//! value, applies the change and writes it back.

pub mod cart;
pub mod catalog;
pub mod news;
pub mod orders;

use serde::de::DeserializeOwned;
use thiserror::Error;

use sonero_core::{PriceError, ValidationReport};

use crate::store::{self, KeyValueStore, Records, StoreError};

pub use cart::CartRepository;
pub use catalog::{CatalogRepository, reconcile};
pub use news::NewsRepository;
pub use orders::OrderLog;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store rejected a read or write.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Stored data is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Product price could not be coerced to a number.
    #[error("invalid price: {0}")]
    InvalidPrice(#[from] PriceError),

    /// Submitted form fields failed validation.
    #[error("validation failed: {0}")]
    Validation(ValidationReport),

    /// Checkout was attempted with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,
}

/// Read a record list for display. Store failures read as empty.
async fn read_records<S, T>(store: &S, key: &str) -> Records<T>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    store::get_records(store, key).await.unwrap_or_else(|e| {
        tracing::warn!(key, error = %e, "Store read failed, reading as empty");
        Records {
            items: Vec::new(),
            skipped: 0,
        }
    })
}

/// Read a record list that is about to be rewritten.
///
/// Writing back a list with undecodable records would drop them, so any
/// skipped record is reported as `DataCorruption` instead.
async fn read_for_update<S, T>(store: &S, key: &str) -> Result<Vec<T>, RepositoryError>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    let records = store::get_records(store, key).await?;
    if !records.is_complete() {
        return Err(RepositoryError::DataCorruption(format!(
            "{} record(s) under `{key}` cannot be read",
            records.skipped
        )));
    }
    Ok(records.items)
}
