//! Sonero storefront library.
//!
//! Keeps the watch catalog, news feed, cart and order log in a key-value
//! store. Front ends open an [`AppState`] and work through its repositories:
//!
//! ```no_run
//! # async fn demo() -> sonero_storefront::error::Result<()> {
//! use sonero_storefront::{AppState, config::StorefrontConfig};
//!
//! let state = AppState::open(StorefrontConfig::from_env()?).await?;
//! let products = state.catalog().load().await?;
//! state.cart().add(&products[0].id).await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod seed;
pub mod state;
pub mod store;

pub use error::AppError;
pub use state::AppState;
