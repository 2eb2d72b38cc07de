//! Integration tests for the Sonero storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sonero-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog` - seed reconciliation over a shared store
//! - `cart` - cart engine and transactional checkout
//! - `news` - news feed seeding and ordering
//! - `orders` - order log and inquiry validation
//! - `file_store` - disk persistence, reopen and quota
//!
//! Helpers in this crate build an [`AppState`] over an in-memory store so the
//! tests exercise the same repository wiring a front end uses.

#![cfg_attr(not(test), forbid(unsafe_code))]

use rust_decimal::Decimal;
use sonero_storefront::AppState;
use sonero_storefront::config::StorefrontConfig;
use sonero_storefront::models::NewProduct;
use sonero_storefront::seed::SeedData;
use sonero_storefront::store::MemoryStore;

/// A catalog preset with the given name and price.
#[must_use]
pub fn preset(name: &str, price: i64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price: Decimal::from(price),
        image: format!("https://img.example/{}.jpg", name.to_lowercase().replace(' ', "-")),
        ..NewProduct::default()
    }
}

/// State over an empty in-memory store with the given seed data.
#[must_use]
pub fn memory_state(seed: SeedData) -> AppState<MemoryStore> {
    AppState::new(StorefrontConfig::default(), MemoryStore::new(), seed)
}

/// State over an empty in-memory store with the bundled seed data.
///
/// # Panics
///
/// Panics if the bundled seed file does not parse.
#[must_use]
#[allow(clippy::expect_used)]
pub fn bundled_state() -> AppState<MemoryStore> {
    memory_state(SeedData::bundled().expect("bundled seed parses"))
}
