//! Kind tags for news items and orders.
//!
//! Both are free-form strings in storage with one well-known value each, so
//! they serialize as plain strings and map unknown tags to `Other`.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Type tag of a news item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NewsKind {
    /// Regular announcement (`"noutate"`).
    #[default]
    Announcement,
    /// Any other tag chosen by the admin (e.g. `"promotie"`).
    Other(String),
}

impl NewsKind {
    /// Storage value of [`NewsKind::Announcement`].
    pub const ANNOUNCEMENT: &'static str = "noutate";

    /// The tag as stored and displayed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Announcement => Self::ANNOUNCEMENT,
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for NewsKind {
    fn from(tag: String) -> Self {
        if tag == Self::ANNOUNCEMENT {
            Self::Announcement
        } else {
            Self::Other(tag)
        }
    }
}

impl From<&str> for NewsKind {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_owned())
    }
}

impl From<NewsKind> for String {
    fn from(kind: NewsKind) -> Self {
        match kind {
            NewsKind::Announcement => NewsKind::ANNOUNCEMENT.to_owned(),
            NewsKind::Other(tag) => tag,
        }
    }
}

impl fmt::Display for NewsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type tag of an order.
///
/// Cart checkouts are tagged `"cos"`; inquiries carry whatever request type
/// the shopper picked on the order form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderKind {
    /// Checkout of the shopping cart (`"cos"`).
    Cart,
    /// Inquiry submitted through the order form.
    Inquiry(String),
}

impl OrderKind {
    /// Storage value of [`OrderKind::Cart`].
    pub const CART: &'static str = "cos";

    /// The tag as stored and displayed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cart => Self::CART,
            Self::Inquiry(tag) => tag,
        }
    }
}

impl From<String> for OrderKind {
    fn from(tag: String) -> Self {
        if tag == Self::CART {
            Self::Cart
        } else {
            Self::Inquiry(tag)
        }
    }
}

impl From<OrderKind> for String {
    fn from(kind: OrderKind) -> Self {
        match kind {
            OrderKind::Cart => OrderKind::CART.to_owned(),
            OrderKind::Inquiry(tag) => tag,
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
