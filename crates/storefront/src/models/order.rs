//! Order log records.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sonero_core::{OrderId, OrderKind, Price};

use super::cart::{CartLine, CartTotals};

/// A submitted inquiry or cart checkout. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    #[serde(flatten)]
    pub details: OrderDetails,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Stamp submitted fields with a fresh id and the current time.
    #[must_use]
    pub fn create(details: OrderDetails) -> Self {
        Self {
            id: OrderId::generate(),
            details,
            created_at: Utc::now(),
        }
    }
}

/// Fields submitted with an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    #[serde(rename = "type")]
    pub kind: OrderKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Free text: the shopper's request, or the itemized cart summary.
    #[serde(default)]
    pub details: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<CartLine>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub total: Option<Decimal>,
}

impl OrderDetails {
    /// Build the details of a cart checkout.
    #[must_use]
    pub fn from_cart(lines: Vec<CartLine>, contact: Contact) -> Self {
        let totals = CartTotals::compute(&lines);
        Self {
            kind: OrderKind::Cart,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            details: cart_summary(&lines, &totals),
            items: lines,
            total: Some(totals.total),
        }
    }
}

/// Optional contact data attached to a checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Contact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Inquiry submitted through the order form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Request type picked on the form (e.g. `"comanda"`, `"service"`).
    #[serde(rename = "type")]
    pub kind: String,
    pub details: String,
}

impl InquiryForm {
    /// Field map for validation.
    #[must_use]
    pub fn fields(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("name".to_string(), self.name.clone()),
            ("email".to_string(), self.email.clone()),
            ("phone".to_string(), self.phone.clone()),
            ("details".to_string(), self.details.clone()),
        ])
    }
}

impl From<InquiryForm> for OrderDetails {
    fn from(form: InquiryForm) -> Self {
        Self {
            kind: OrderKind::from(form.kind.trim().to_owned()),
            name: Some(form.name.trim().to_owned()),
            email: Some(form.email.trim().to_owned()),
            phone: Some(form.phone.trim().to_owned()),
            details: form.details.trim().to_owned(),
            items: Vec::new(),
            total: None,
        }
    }
}

/// Human-readable itemized summary of a cart.
///
/// ```text
/// Comandă din coș:
/// - Sonero Classic Gold x2: 4.900 RON
/// - Sonero Minimalist x1: 1.290 RON
/// Total (3 produse): 6.190 RON
/// ```
#[must_use]
pub fn cart_summary(lines: &[CartLine], totals: &CartTotals) -> String {
    let mut summary = String::from("Comandă din coș:\n");
    for line in lines {
        let _ = writeln!(
            summary,
            "- {} x{}: {}",
            line.name,
            line.qty,
            Price::ron(line.line_total())
        );
    }
    let _ = write!(
        summary,
        "Total ({} produse): {}",
        totals.count,
        Price::ron(totals.total)
    );
    summary
}
