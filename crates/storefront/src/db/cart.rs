//! Cart engine.
//!
//! Lines are keyed by product id: adding a product already in the cart bumps
//! its quantity. Checkout turns the cart into an order and empties the cart in
//! a single multi-key commit.

use tracing::instrument;

use sonero_core::ProductId;

use super::{RepositoryError, read_for_update, read_records};
use super::orders::read_log;
use crate::models::{CartLine, CartTotals, Contact, Order, OrderDetails, Product};
use crate::store::{self, KeyValueStore, StorageKeys};

/// Repository for the shopper's cart.
pub struct CartRepository<'a, S> {
    store: &'a S,
    keys: &'a StorageKeys,
}

impl<'a, S: KeyValueStore> CartRepository<'a, S> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(store: &'a S, keys: &'a StorageKeys) -> Self {
        Self { store, keys }
    }

    /// Current cart lines, skipping unreadable ones.
    pub async fn get(&self) -> Vec<CartLine> {
        read_records(self.store, &self.keys.cart).await.items
    }

    /// Add one unit of a catalog product.
    ///
    /// Returns the updated line, or `None` (writing nothing) if the product is
    /// not in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if stored cart lines cannot
    /// be read, or `RepositoryError::Store` if the cart cannot be persisted.
    #[instrument(skip(self), fields(key = %self.keys.cart))]
    pub async fn add(&self, product_id: &ProductId) -> Result<Option<CartLine>, RepositoryError> {
        let catalog: Vec<Product> = read_records(self.store, &self.keys.catalog).await.items;
        let Some(product) = catalog.iter().find(|p| &p.id == product_id) else {
            tracing::debug!(%product_id, "Product not in catalog");
            return Ok(None);
        };

        let mut lines: Vec<CartLine> = read_for_update(self.store, &self.keys.cart).await?;
        let line = if let Some(line) = lines.iter_mut().find(|l| &l.product_id == product_id) {
            line.qty = line.qty.saturating_add(1);
            line.clone()
        } else {
            let line = CartLine::snapshot(product);
            lines.push(line.clone());
            line
        };

        store::set_json(self.store, &self.keys.cart, &lines).await?;
        tracing::info!(%product_id, qty = line.qty, "Added to cart");
        Ok(Some(line))
    }

    /// Remove a product's line. Returns `false` (and writes nothing) if absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if stored cart lines cannot
    /// be read, or `RepositoryError::Store` if the cart cannot be persisted.
    #[instrument(skip(self), fields(key = %self.keys.cart))]
    pub async fn remove(&self, product_id: &ProductId) -> Result<bool, RepositoryError> {
        let mut lines: Vec<CartLine> = read_for_update(self.store, &self.keys.cart).await?;
        let before = lines.len();
        lines.retain(|l| &l.product_id != product_id);
        if lines.len() == before {
            return Ok(false);
        }

        store::set_json(self.store, &self.keys.cart, &lines).await?;
        tracing::info!(%product_id, "Removed from cart");
        Ok(true)
    }

    /// Item count and amount of the current cart.
    pub async fn totals(&self) -> CartTotals {
        CartTotals::compute(&self.get().await)
    }

    /// Empty the cart by removing its key.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the store rejects the removal.
    pub async fn clear(&self) -> Result<(), RepositoryError> {
        self.store.remove(&self.keys.cart).await?;
        Ok(())
    }

    /// Turn the cart into an order and empty it.
    ///
    /// The new order log and the empty cart are written in one commit: if the
    /// store rejects it, both keys keep their previous values.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::EmptyCart` if there is nothing to check out,
    /// `RepositoryError::DataCorruption` if the cart or the order log is
    /// unreadable, or `RepositoryError::Store` if the commit fails.
    #[instrument(skip_all, fields(key = %self.keys.cart))]
    pub async fn checkout(&self, contact: Contact) -> Result<Order, RepositoryError> {
        let lines: Vec<CartLine> = read_for_update(self.store, &self.keys.cart).await?;
        if lines.is_empty() {
            return Err(RepositoryError::EmptyCart);
        }

        let mut orders = read_log(self.store, &self.keys.orders).await?;
        let order = Order::create(OrderDetails::from_cart(lines, contact));
        orders.push(order.clone());

        self.store
            .set_many(vec![
                store::to_entry(&self.keys.orders, &orders)?,
                store::to_entry(&self.keys.cart, &Vec::<CartLine>::new())?,
            ])
            .await?;

        tracing::info!(
            id = %order.id,
            total = ?order.details.total,
            items = order.details.items.len(),
            "Checkout complete"
        );
        Ok(order)
    }
}
