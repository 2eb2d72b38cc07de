//! News feed commands.

use sonero_core::NewsId;
use sonero_storefront::AppState;
use sonero_storefront::db::RepositoryError;
use sonero_storefront::models::NewNewsItem;
use sonero_storefront::store::FileStore;
use tracing::{info, warn};

/// List the feed, newest first.
///
/// # Errors
///
/// Returns an error if the welcome item cannot be persisted on first run.
pub async fn list(state: &AppState<FileStore>) -> Result<(), RepositoryError> {
    let news = state.news().load().await?;
    for item in &news {
        info!(id = %item.id, date = %item.date, kind = %item.kind, "{}", item.title);
    }
    Ok(())
}

/// Publish a news item at the top of the feed.
///
/// # Errors
///
/// Returns an error if the feed cannot be persisted.
pub async fn add(state: &AppState<FileStore>, item: NewNewsItem) -> Result<(), RepositoryError> {
    let item = state.news().add(item).await?;
    info!(id = %item.id, date = %item.date, "Published {}", item.title);
    Ok(())
}

/// Delete a news item by id.
///
/// # Errors
///
/// Returns an error if the feed cannot be persisted.
pub async fn delete(state: &AppState<FileStore>, id: &str) -> Result<(), RepositoryError> {
    if state.news().delete(&NewsId::new(id)).await? {
        info!(%id, "News item deleted");
    } else {
        warn!(%id, "No news item with this id");
    }
    Ok(())
}
