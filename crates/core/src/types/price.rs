//! Type-safe price representation using decimal arithmetic.
//!
//! Amounts are formatted the way the storefront shows them to Romanian
//! shoppers: `.` groups thousands, `,` separates decimals and at most three
//! fraction digits are kept (`2450` → `2.450`, `1234.5` → `1.234,5`).

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Maximum fraction digits shown when formatting an amount.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Errors that can occur when coercing user input into an amount.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a number.
    #[error("price is not a number: {0}")]
    NotANumber(String),
    /// The input is a negative number.
    #[error("price cannot be negative: {0}")]
    Negative(String),
}

/// Currency every storefront price is quoted in.
const CURRENCY: &str = "RON";

/// A price in lei, displayed with Romanian grouping (`2.450 RON`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in lei, not bani.
    pub amount: Decimal,
}

impl Price {
    /// Create a price in the storefront's currency.
    #[must_use]
    pub const fn ron(amount: Decimal) -> Self {
        Self { amount }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {CURRENCY}", format_amount(self.amount))
    }
}

/// Format an amount with Romanian digit grouping.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(MAX_FRACTION_DIGITS).normalize();
    let text = rounded.abs().to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 + 4);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    if !fraction.is_empty() {
        grouped.push(',');
        grouped.push_str(fraction);
    }
    grouped
}

/// Coerce form input into a non-negative amount.
///
/// Surrounding whitespace is ignored, an empty input counts as zero and a
/// decimal comma is accepted (`"1290,50"`).
///
/// # Errors
///
/// Returns `PriceError::NotANumber` if the input cannot be parsed and
/// `PriceError::Negative` if it parses below zero.
pub fn parse_amount(input: &str) -> Result<Decimal, PriceError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let normalized = if trimmed.contains('.') {
        trimmed.to_owned()
    } else {
        trimmed.replacen(',', ".", 1)
    };

    let amount = Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|_| PriceError::NotANumber(trimmed.to_owned()))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(PriceError::Negative(trimmed.to_owned()));
    }
    Ok(amount)
}
