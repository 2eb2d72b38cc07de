//! Application state shared across front-end handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::db::{CartRepository, CatalogRepository, NewsRepository, OrderLog};
use crate::error::Result;
use crate::seed::SeedData;
use crate::store::{FileStore, KeyValueStore, StorageKeys};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and hands out repositories that
/// borrow the shared store.
pub struct AppState<S> {
    inner: Arc<AppStateInner<S>>,
}

struct AppStateInner<S> {
    config: StorefrontConfig,
    store: S,
    keys: StorageKeys,
    seed: SeedData,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStore> AppState<S> {
    /// Create a new application state over an already opened store.
    #[must_use]
    pub fn new(config: StorefrontConfig, store: S, seed: SeedData) -> Self {
        let keys = config.storage_keys();
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                keys,
                seed,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.inner.store
    }

    /// Storage keys for the configured prefix.
    #[must_use]
    pub fn keys(&self) -> &StorageKeys {
        &self.inner.keys
    }

    /// Seed data used for reconciliation.
    #[must_use]
    pub fn seed(&self) -> &SeedData {
        &self.inner.seed
    }

    /// Catalog repository.
    #[must_use]
    pub fn catalog(&self) -> CatalogRepository<'_, S> {
        CatalogRepository::new(&self.inner.store, &self.inner.keys.catalog, &self.inner.seed.catalog)
    }

    /// News repository.
    #[must_use]
    pub fn news(&self) -> NewsRepository<'_, S> {
        NewsRepository::new(&self.inner.store, &self.inner.keys.news, &self.inner.seed.news)
    }

    /// Cart repository.
    #[must_use]
    pub fn cart(&self) -> CartRepository<'_, S> {
        CartRepository::new(&self.inner.store, &self.inner.keys)
    }

    /// Order log.
    #[must_use]
    pub fn orders(&self) -> OrderLog<'_, S> {
        OrderLog::new(&self.inner.store, &self.inner.keys.orders)
    }
}

impl AppState<FileStore> {
    /// Open the configured file store and load seed data.
    ///
    /// Seeds come from `config.seed_file` when set, otherwise the bundled
    /// presets are used.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Store` if the store file is unreadable and
    /// `AppError::Seed` if the seed data cannot be loaded.
    #[tracing::instrument(skip_all, fields(path = %config.data_path.display()))]
    pub async fn open(config: StorefrontConfig) -> Result<Self> {
        let store = FileStore::open(&config.data_path, config.quota_bytes).await?;
        let seed = match &config.seed_file {
            Some(path) => SeedData::from_file(path).await?,
            None => SeedData::bundled()?,
        };
        tracing::debug!(
            presets = seed.catalog.len(),
            news = seed.news.len(),
            "Storefront opened"
        );
        Ok(Self::new(config, store, seed))
    }
}
