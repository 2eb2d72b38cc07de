//! Core types for Sonero.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod kind;
pub mod phone;
pub mod price;

pub use email::{Email, EmailError};
pub use id::*;
pub use kind::{NewsKind, OrderKind};
pub use phone::{PhoneError, PhoneNumber};
pub use price::{Price, PriceError, format_amount, parse_amount};
