//! Integration tests for the disk-backed store.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use sonero_storefront::AppState;
use sonero_storefront::config::StorefrontConfig;
use sonero_storefront::models::Contact;
use sonero_storefront::store::{FileStore, KeyValueStore, StoreError};

fn config_in(dir: &tempfile::TempDir) -> StorefrontConfig {
    StorefrontConfig {
        data_path: dir.path().join("data").join("store.json"),
        ..StorefrontConfig::default()
    }
}

#[tokio::test]
async fn test_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let order_id = {
        let state = AppState::open(config_in(&dir)).await.unwrap();
        let products = state.catalog().load().await.unwrap();
        state.cart().add(&products[0].id).await.unwrap();
        state.cart().checkout(Contact::default()).await.unwrap().id
    };

    let state = AppState::open(config_in(&dir)).await.unwrap();
    let orders = state.orders().all().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, order_id);
    assert!(state.cart().get().await.is_empty());

    let before = state.catalog().all().await;
    assert_eq!(state.catalog().load().await.unwrap(), before);
}

#[tokio::test]
async fn test_multi_key_write_lands_together() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let store = FileStore::open(&path, None).await.unwrap();
    store
        .set_many(vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
        ])
        .await
        .unwrap();

    let reopened = FileStore::open(&path, None).await.unwrap();
    assert_eq!(reopened.get("a").await.unwrap().as_deref(), Some("1"));
    assert_eq!(reopened.get("b").await.unwrap().as_deref(), Some("2"));
}

#[tokio::test]
async fn test_quota_overflow_changes_nothing_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let store = FileStore::open(&path, Some(16)).await.unwrap();
    store.set("k", "small".to_string()).await.unwrap();
    let on_disk = std::fs::read_to_string(&path).unwrap();

    let err = store
        .set_many(vec![
            ("k".to_string(), "tiny".to_string()),
            ("big".to_string(), "x".repeat(64)),
        ])
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::QuotaExceeded { limit: 16, .. }));
    assert_eq!(store.get("k").await.unwrap().as_deref(), Some("small"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), on_disk);
}

#[tokio::test]
async fn test_custom_seed_file_and_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let seed_path = dir.path().join("seed.yaml");
    std::fs::write(
        &seed_path,
        "catalog:\n  - name: Sonero Pilot\n    price: 2100\n    image: pilot.jpg\n",
    )
    .unwrap();

    let config = StorefrontConfig {
        key_prefix: "demo".to_string(),
        seed_file: Some(seed_path),
        ..config_in(&dir)
    };
    let state = AppState::open(config).await.unwrap();

    let products = state.catalog().load().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Sonero Pilot");
    assert!(state.store().get("demo_watches").await.unwrap().is_some());
    assert!(state.news().load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unreadable_store_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    std::fs::create_dir_all(config.data_path.parent().unwrap()).unwrap();
    std::fs::write(&config.data_path, "not json").unwrap();

    assert!(AppState::open(config).await.is_err());
}
