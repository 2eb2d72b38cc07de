//! Catalog repository.
//!
//! # Seed reconciliation
//!
//! The catalog grows between releases. Every [`CatalogRepository::load`]
//! compares the stored catalog with the current seed list by product name and
//! appends the presets that are missing, so existing shoppers see new watches
//! without losing products added from the admin panel. A first run is the
//! same operation on an empty catalog.

use std::collections::HashSet;

use tracing::instrument;

use sonero_core::ProductId;

use super::{RepositoryError, read_for_update, read_records};
use crate::models::{NewProduct, Product, ProductForm};
use crate::store::{self, KeyValueStore};

/// Repository for catalog products.
pub struct CatalogRepository<'a, S> {
    store: &'a S,
    key: &'a str,
    seed: &'a [NewProduct],
}

impl<'a, S: KeyValueStore> CatalogRepository<'a, S> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(store: &'a S, key: &'a str, seed: &'a [NewProduct]) -> Self {
        Self { store, key, seed }
    }

    /// Load the catalog, appending any seed products missing by name.
    ///
    /// Loading twice without changes in between returns identical catalogs.
    /// If some stored records cannot be read, the readable ones are returned
    /// and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if appended seed products cannot be
    /// persisted.
    #[instrument(skip(self), fields(key = self.key))]
    pub async fn load(&self) -> Result<Vec<Product>, RepositoryError> {
        let records = read_records(self.store, self.key).await;
        if !records.is_complete() {
            tracing::warn!(
                skipped = records.skipped,
                "Catalog has unreadable records, skipping seed reconciliation"
            );
            return Ok(records.items);
        }

        let mut products = records.items;
        if products.is_empty() {
            tracing::info!("Catalog is empty, seeding presets");
        }

        let appended = reconcile(&mut products, self.seed);
        if appended > 0 {
            store::set_json(self.store, self.key, &products).await?;
            tracing::info!(appended, total = products.len(), "Added seed products to catalog");
        }
        Ok(products)
    }

    /// Read the stored catalog without reconciling.
    ///
    /// Unreadable records are skipped; a value that is not a list reads as empty.
    pub async fn all(&self) -> Vec<Product> {
        read_records(self.store, self.key).await.items
    }

    /// Find a product by id in the stored catalog.
    pub async fn find(&self, id: &ProductId) -> Option<Product> {
        self.all().await.into_iter().find(|p| &p.id == id)
    }

    /// Add a product with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if stored records cannot be
    /// read, or `RepositoryError::Store` if the catalog cannot be persisted.
    #[instrument(skip(self, new_product), fields(key = self.key, name = %new_product.name))]
    pub async fn add(&self, new_product: NewProduct) -> Result<Product, RepositoryError> {
        let mut products: Vec<Product> = read_for_update(self.store, self.key).await?;
        let product = Product::create(new_product);
        products.push(product.clone());

        store::set_json(self.store, self.key, &products).await?;
        tracing::info!(id = %product.id, "Product added");
        Ok(product)
    }

    /// Add a product from raw form fields, coercing the price.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidPrice` if the price is not a
    /// non-negative number (nothing is written), or `RepositoryError::Store`
    /// if the catalog cannot be persisted.
    pub async fn add_form(&self, form: ProductForm) -> Result<Product, RepositoryError> {
        let new_product = NewProduct::try_from(form)?;
        self.add(new_product).await
    }

    /// Delete a product by id. Returns `false` (and writes nothing) if absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if stored records cannot be
    /// read, or `RepositoryError::Store` if the catalog cannot be persisted.
    #[instrument(skip(self), fields(key = self.key))]
    pub async fn delete(&self, id: &ProductId) -> Result<bool, RepositoryError> {
        let mut products: Vec<Product> = read_for_update(self.store, self.key).await?;
        let before = products.len();
        products.retain(|p| &p.id != id);
        if products.len() == before {
            tracing::debug!(%id, "Product not found, nothing to delete");
            return Ok(false);
        }

        store::set_json(self.store, self.key, &products).await?;
        tracing::info!(%id, "Product deleted");
        Ok(true)
    }
}

/// Append every seed product whose name is not yet in `catalog`.
///
/// Names compare exactly (case-sensitive). A name appended earlier in the same
/// pass counts as present, so duplicate seed names yield one product: the
/// first one listed. Returns the number of products appended.
pub fn reconcile(catalog: &mut Vec<Product>, seed: &[NewProduct]) -> usize {
    let mut names: HashSet<String> = catalog.iter().map(|p| p.name.clone()).collect();
    let before = catalog.len();
    for preset in seed {
        if names.insert(preset.name.clone()) {
            catalog.push(Product::create(preset.clone()));
        }
    }
    catalog.len() - before
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::store::MemoryStore;

    fn preset(name: &str, price: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price: Decimal::from(price),
            image: format!("{name}.jpg"),
            ..NewProduct::default()
        }
    }

    fn seed() -> Vec<NewProduct> {
        vec![
            preset("Sonero Classic Gold", 2450),
            preset("Sonero Sport Chrono", 1890),
            preset("Sonero Minimalist", 1290),
        ]
    }

    #[tokio::test]
    async fn test_first_load_seeds_and_persists() {
        let store = MemoryStore::new();
        let seed = seed();
        let repo = CatalogRepository::new(&store, "watches", &seed);

        let products = repo.load().await.unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(repo.all().await, products);
    }

    #[tokio::test]
    async fn test_load_is_idempotent() {
        let store = MemoryStore::new();
        let seed = seed();
        let repo = CatalogRepository::new(&store, "watches", &seed);

        let first = repo.load().await.unwrap();
        let raw_first = store.get("watches").await.unwrap();
        let second = repo.load().await.unwrap();
        let raw_second = store.get("watches").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(raw_first, raw_second);
    }

    #[tokio::test]
    async fn test_load_appends_new_presets_only() {
        let store = MemoryStore::new();
        let old_seed = seed();
        let old = CatalogRepository::new(&store, "watches", &old_seed);
        old.load().await.unwrap();
        let custom = old.add(preset("Atelier Unicat", 5000)).await.unwrap();

        let mut new_seed = seed();
        new_seed.push(preset("Sonero Diver Pro", 2790));
        let repo = CatalogRepository::new(&store, "watches", &new_seed);
        let products = repo.load().await.unwrap();

        assert_eq!(products.len(), 5);
        assert!(products.iter().any(|p| p.id == custom.id));
        assert_eq!(
            products.iter().filter(|p| p.name == "Sonero Diver Pro").count(),
            1
        );
        assert_eq!(products.last().unwrap().name, "Sonero Diver Pro");
    }

    #[test]
    fn test_reconcile_duplicate_seed_names_first_wins() {
        let mut catalog = Vec::new();
        let appended = reconcile(
            &mut catalog,
            &[preset("Twin", 100), preset("Twin", 200)],
        );
        assert_eq!(appended, 1);
        assert_eq!(catalog[0].price, Decimal::from(100));
    }

    #[test]
    fn test_reconcile_is_case_sensitive() {
        let mut catalog = Vec::new();
        reconcile(&mut catalog, &[preset("sonero minimalist", 1)]);
        let appended = reconcile(&mut catalog, &[preset("Sonero Minimalist", 1)]);
        assert_eq!(appended, 1);
    }

    #[tokio::test]
    async fn test_renamed_product_blocks_matching_preset() {
        let store = MemoryStore::new();
        let seed = vec![preset("Sonero Diver Pro", 2790)];
        let mut existing = vec![Product::create(preset("Old Name", 10))];
        existing[0].name = "Sonero Diver Pro".to_string();
        store::set_json(&store, "watches", &existing).await.unwrap();

        let repo = CatalogRepository::new(&store, "watches", &seed);
        let products = repo.load().await.unwrap();
        assert_eq!(products, existing);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_noop() {
        let store = MemoryStore::new();
        let seed = seed();
        let repo = CatalogRepository::new(&store, "watches", &seed);
        repo.load().await.unwrap();

        let removed = repo.delete(&ProductId::new("nope")).await.unwrap();
        assert!(!removed);
        assert_eq!(repo.all().await.len(), 3);
    }

    #[tokio::test]
    async fn test_add_and_delete() {
        let store = MemoryStore::new();
        let repo = CatalogRepository::new(&store, "watches", &[]);

        let product = repo.add(preset("Sonero Pilot", 2100)).await.unwrap();
        assert_eq!(repo.find(&product.id).await, Some(product.clone()));

        assert!(repo.delete(&product.id).await.unwrap());
        assert!(repo.all().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_form_coerces_price() {
        let store = MemoryStore::new();
        let repo = CatalogRepository::new(&store, "watches", &[]);

        let product = repo
            .add_form(ProductForm {
                name: "Sonero Pilot".to_string(),
                price: " 2100,50 ".to_string(),
                image: "pilot.jpg".to_string(),
                ..ProductForm::default()
            })
            .await
            .unwrap();
        assert_eq!(product.price, Decimal::new(210_050, 2));
        assert_eq!(product.desc, "");

        let result = repo
            .add_form(ProductForm {
                name: "Broken".to_string(),
                price: "ieftin".to_string(),
                ..ProductForm::default()
            })
            .await;
        assert!(matches!(result, Err(RepositoryError::InvalidPrice(_))));
        assert_eq!(repo.all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_unreadable_record_blocks_writes() {
        let store = MemoryStore::new();
        let seed = seed();
        let kept = Product::create(preset("Atelier Unicat", 5000));
        let mut broken = serde_json::to_value(Product::create(preset("Atelier Doi", 10))).unwrap();
        broken["price"] = serde_json::Value::Null;
        let raw = serde_json::to_string(&vec![serde_json::to_value(&kept).unwrap(), broken]).unwrap();
        store.set("watches", raw.clone()).await.unwrap();

        let repo = CatalogRepository::new(&store, "watches", &seed);
        assert_eq!(repo.load().await.unwrap(), vec![kept.clone()]);
        assert_eq!(repo.all().await, vec![kept.clone()]);

        let added = repo.add(preset("Sonero Pilot", 2100)).await;
        assert!(matches!(added, Err(RepositoryError::DataCorruption(_))));
        let deleted = repo.delete(&kept.id).await;
        assert!(matches!(deleted, Err(RepositoryError::DataCorruption(_))));
        assert_eq!(store.get("watches").await.unwrap(), Some(raw));
    }

    #[tokio::test]
    async fn test_add_reports_store_failure() {
        let store = MemoryStore::new();
        store.reject_writes(true);
        let repo = CatalogRepository::new(&store, "watches", &[]);

        let result = repo.add(preset("Sonero Pilot", 2100)).await;
        assert!(matches!(result, Err(RepositoryError::Store(_))));
        assert!(repo.all().await.is_empty());
    }
}
