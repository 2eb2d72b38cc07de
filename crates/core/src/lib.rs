//! Sonero Core - Shared types library.
//!
//! This crate provides common types used across all Sonero components:
//! - `storefront` - Catalog, news, cart and order repositories over a key-value store
//! - `cli` - Command-line front end driving the storefront repositories
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, phones and kinds
//! - [`validation`] - Named form field validators

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;
pub mod validation;

pub use types::*;
pub use validation::{Rule, ValidationReport, validate};
