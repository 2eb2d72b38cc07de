//! Phone number type.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Separators shoppers type between digit groups.
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-.()/]").expect("Invalid regex"));

/// Optional leading `+` followed by 8-15 digits.
static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{8,15}$").expect("Invalid regex"));

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input is not 8-15 digits with an optional leading +.
    #[error("phone number must have 8-15 digits: {0}")]
    Invalid(String),
}

/// A phone number, stored without separators.
///
/// ## Examples
///
/// ```
/// use sonero_core::PhoneNumber;
///
/// assert_eq!(PhoneNumber::parse("0722 123 456").unwrap().as_str(), "0722123456");
/// assert!(PhoneNumber::parse("+40 (722) 123-456").is_ok());
/// assert!(PhoneNumber::parse("123").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse a `PhoneNumber`, stripping spaces, `-`, `.`, `(`, `)` and `/`.
    ///
    /// # Errors
    ///
    /// Returns `PhoneError::Empty` for blank input and `PhoneError::Invalid`
    /// when the stripped value is not 8-15 digits with an optional leading `+`.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        let stripped = SEPARATORS.replace_all(s, "");
        if stripped.is_empty() {
            return Err(PhoneError::Empty);
        }
        if !DIGITS.is_match(&stripped) {
            return Err(PhoneError::Invalid(s.trim().to_owned()));
        }
        Ok(Self(stripped.into_owned()))
    }

    /// Returns the normalized number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
