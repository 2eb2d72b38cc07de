//! News feed repository.

use tracing::instrument;

use sonero_core::NewsId;

use super::{RepositoryError, read_for_update, read_records};
use crate::models::{NewNewsItem, NewsItem};
use crate::store::{self, KeyValueStore};

/// Repository for news items, newest first.
pub struct NewsRepository<'a, S> {
    store: &'a S,
    key: &'a str,
    seed: &'a [NewNewsItem],
}

impl<'a, S: KeyValueStore> NewsRepository<'a, S> {
    /// Create a new news repository.
    #[must_use]
    pub const fn new(store: &'a S, key: &'a str, seed: &'a [NewNewsItem]) -> Self {
        Self { store, key, seed }
    }

    /// Load the feed, writing the seed items if it is empty.
    ///
    /// A feed holding only unreadable records is not empty and is left as is.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the seed items cannot be persisted.
    #[instrument(skip(self), fields(key = self.key))]
    pub async fn load(&self) -> Result<Vec<NewsItem>, RepositoryError> {
        let records = read_records(self.store, self.key).await;
        if !records.items.is_empty() || !records.is_complete() {
            return Ok(records.items);
        }

        let news: Vec<NewsItem> = self.seed.iter().cloned().map(NewsItem::create).collect();
        if !news.is_empty() {
            store::set_json(self.store, self.key, &news).await?;
            tracing::info!(count = news.len(), "Seeded news feed");
        }
        Ok(news)
    }

    /// Read the stored feed, skipping unreadable items.
    pub async fn all(&self) -> Vec<NewsItem> {
        read_records(self.store, self.key).await.items
    }

    /// Add an item at the top of the feed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if stored items cannot be
    /// read, or `RepositoryError::Store` if the feed cannot be persisted.
    #[instrument(skip(self, new_item), fields(key = self.key, title = %new_item.title))]
    pub async fn add(&self, new_item: NewNewsItem) -> Result<NewsItem, RepositoryError> {
        let mut news: Vec<NewsItem> = read_for_update(self.store, self.key).await?;
        let item = NewsItem::create(new_item);
        news.insert(0, item.clone());

        store::set_json(self.store, self.key, &news).await?;
        tracing::info!(id = %item.id, "News item added");
        Ok(item)
    }

    /// Delete an item by id. Returns `false` (and writes nothing) if absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if stored items cannot be
    /// read, or `RepositoryError::Store` if the feed cannot be persisted.
    #[instrument(skip(self), fields(key = self.key))]
    pub async fn delete(&self, id: &NewsId) -> Result<bool, RepositoryError> {
        let mut news: Vec<NewsItem> = read_for_update(self.store, self.key).await?;
        let before = news.len();
        news.retain(|n| &n.id != id);
        if news.len() == before {
            return Ok(false);
        }

        store::set_json(self.store, self.key, &news).await?;
        tracing::info!(%id, "News item deleted");
        Ok(true)
    }
}
