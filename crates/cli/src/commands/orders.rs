//! Order log commands.

use sonero_core::Price;
use sonero_storefront::AppState;
use sonero_storefront::db::RepositoryError;
use sonero_storefront::store::FileStore;
use tracing::info;

/// List every recorded order, oldest first.
///
/// # Errors
///
/// Returns an error if the order log is unreadable.
pub async fn list(state: &AppState<FileStore>) -> Result<(), RepositoryError> {
    let orders = state.orders().all().await?;
    info!(count = orders.len(), "Orders");
    for order in &orders {
        let details = &order.details;
        info!(
            id = %order.id,
            kind = %details.kind,
            created_at = %order.created_at.to_rfc3339(),
            name = details.name.as_deref().unwrap_or("-"),
            total = %details.total.map_or_else(|| "-".to_string(), |t| Price::ron(t).to_string()),
            "{}",
            details.details.lines().next().unwrap_or_default()
        );
    }
    Ok(())
}
