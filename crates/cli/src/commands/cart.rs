//! Cart commands.

use sonero_core::{Price, ProductId};
use sonero_storefront::AppState;
use sonero_storefront::db::RepositoryError;
use sonero_storefront::models::Contact;
use sonero_storefront::store::FileStore;
use tracing::{info, warn};

/// Show cart lines and totals.
pub async fn show(state: &AppState<FileStore>) {
    let cart = state.cart();
    let lines = cart.get().await;
    if lines.is_empty() {
        info!("Cart is empty");
        return;
    }

    for line in &lines {
        info!(
            product_id = %line.product_id,
            qty = line.qty,
            total = %Price::ron(line.line_total()),
            "{}",
            line.name
        );
    }
    let totals = cart.totals().await;
    info!(count = totals.count, total = %Price::ron(totals.total), "Cart total");
}

/// Add one unit of a catalog product.
///
/// # Errors
///
/// Returns an error if the cart cannot be persisted.
pub async fn add(state: &AppState<FileStore>, product_id: &str) -> Result<(), RepositoryError> {
    state.catalog().load().await?;
    match state.cart().add(&ProductId::new(product_id)).await? {
        Some(line) => info!(qty = line.qty, "Added {} to cart", line.name),
        None => warn!(%product_id, "No product with this id"),
    }
    Ok(())
}

/// Remove a product's line from the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be persisted.
pub async fn remove(state: &AppState<FileStore>, product_id: &str) -> Result<(), RepositoryError> {
    if state.cart().remove(&ProductId::new(product_id)).await? {
        info!(%product_id, "Removed from cart");
    } else {
        warn!(%product_id, "Product is not in the cart");
    }
    Ok(())
}

/// Check out the cart.
///
/// # Errors
///
/// Returns an error if the cart is empty or the order cannot be recorded.
pub async fn checkout(state: &AppState<FileStore>, contact: Contact) -> Result<(), RepositoryError> {
    let order = state.cart().checkout(contact).await?;
    info!(id = %order.id, "Order placed");
    for line in order.details.details.lines() {
        info!("{line}");
    }
    Ok(())
}
