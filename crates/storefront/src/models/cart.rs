//! Cart line items and totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sonero_core::ProductId;

use super::product::Product;

/// One product in the cart.
///
/// `name`, `price` and `image` are copied from the catalog when the line is
/// created and are never refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
    pub qty: u32,
}

impl CartLine {
    /// Snapshot a product into a new line with quantity 1.
    #[must_use]
    pub fn snapshot(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.primary_image().to_owned(),
            qty: 1,
        }
    }

    /// Price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.qty)
    }
}

/// Item count and amount of a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CartTotals {
    /// Sum of quantities.
    pub count: u32,
    /// Sum of price × quantity.
    pub total: Decimal,
}

impl CartTotals {
    /// Compute totals for a list of lines.
    #[must_use]
    pub fn compute(lines: &[CartLine]) -> Self {
        lines.iter().fold(Self::default(), |acc, line| Self {
            count: acc.count.saturating_add(line.qty),
            total: acc.total + line.line_total(),
        })
    }
}
