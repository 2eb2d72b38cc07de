//! Subcommand implementations.
//!
//! Each command works on an opened [`AppState`](sonero_storefront::AppState)
//! and reports results through `tracing` at `info` level.

pub mod cart;
pub mod catalog;
pub mod inquiry;
pub mod news;
pub mod orders;
