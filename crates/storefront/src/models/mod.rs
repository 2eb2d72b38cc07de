//! Domain models for the storefront.
//!
//! Records serialize with camelCase field names so stored data keeps the
//! layout the browser storefront wrote.

pub mod cart;
pub mod news;
pub mod order;
pub mod product;

pub use cart::{CartLine, CartTotals};
pub use news::{NewNewsItem, NewsItem};
pub use order::{Contact, InquiryForm, Order, OrderDetails, cart_summary};
pub use product::{NewProduct, Product, ProductForm};
