//! Catalog management commands.

use sonero_core::{Price, ProductId};
use sonero_storefront::AppState;
use sonero_storefront::db::RepositoryError;
use sonero_storefront::models::ProductForm;
use sonero_storefront::store::FileStore;
use tracing::{info, warn};

/// List the catalog, adding any preset watches missing from it.
///
/// # Errors
///
/// Returns an error if appended presets cannot be persisted.
pub async fn list(state: &AppState<FileStore>) -> Result<(), RepositoryError> {
    let products = state.catalog().load().await?;
    info!(count = products.len(), "Catalog");
    for product in &products {
        info!(
            id = %product.id,
            price = %Price::ron(product.price),
            images = product.gallery().len(),
            "{}",
            product.name
        );
    }
    Ok(())
}

/// Add a product from raw command-line fields.
///
/// # Errors
///
/// Returns an error if the price is invalid or the catalog cannot be persisted.
pub async fn add(state: &AppState<FileStore>, form: ProductForm) -> Result<(), RepositoryError> {
    let product = state.catalog().add_form(form).await?;
    info!(id = %product.id, price = %Price::ron(product.price), "Added {}", product.name);
    Ok(())
}

/// Delete a product by id.
///
/// # Errors
///
/// Returns an error if the catalog cannot be persisted.
pub async fn delete(state: &AppState<FileStore>, id: &str) -> Result<(), RepositoryError> {
    if state.catalog().delete(&ProductId::new(id)).await? {
        info!(%id, "Product deleted");
    } else {
        warn!(%id, "No product with this id");
    }
    Ok(())
}
