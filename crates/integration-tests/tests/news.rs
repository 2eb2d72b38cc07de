//! Integration tests for the news feed.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use sonero_core::NewsKind;
use sonero_integration_tests::bundled_state;
use sonero_storefront::models::NewNewsItem;
use sonero_storefront::store::KeyValueStore;

#[tokio::test]
async fn test_first_run_writes_welcome_item() {
    let state = bundled_state();

    let news = state.news().load().await.unwrap();

    assert_eq!(news.len(), 1);
    assert_eq!(news[0].title, "Bine ai venit la Sonero!");
    assert_eq!(news[0].kind, NewsKind::Announcement);
    assert_eq!(state.news().all().await, news);
}

#[tokio::test]
async fn test_feed_is_not_reseeded_once_populated() {
    let state = bundled_state();
    let welcome = state.news().load().await.unwrap();
    state.news().delete(&welcome[0].id).await.unwrap();
    state
        .news()
        .add(NewNewsItem {
            title: "Reduceri de Black Friday".to_string(),
            kind: Some(NewsKind::from("promotie")),
            ..NewNewsItem::default()
        })
        .await
        .unwrap();

    let news = state.news().load().await.unwrap();
    assert_eq!(news.len(), 1);
    assert_eq!(news[0].kind.as_str(), "promotie");
}

#[tokio::test]
async fn test_newest_item_comes_first() {
    let state = bundled_state();
    state.news().load().await.unwrap();

    for title in ["Prima", "A doua"] {
        state
            .news()
            .add(NewNewsItem {
                title: title.to_string(),
                ..NewNewsItem::default()
            })
            .await
            .unwrap();
    }

    let titles: Vec<_> = state.news().all().await.into_iter().map(|n| n.title).collect();
    assert_eq!(titles, vec!["A doua", "Prima", "Bine ai venit la Sonero!"]);
}

#[tokio::test]
async fn test_stored_kind_uses_type_field() {
    let state = bundled_state();
    state.news().load().await.unwrap();

    let raw = state.store().get(&state.keys().news).await.unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["type"], "noutate");
}

#[tokio::test]
async fn test_blank_kind_is_published_as_announcement() {
    let state = bundled_state();

    let item = state
        .news()
        .add(NewNewsItem {
            title: "Reduceri de sezon".to_string(),
            kind: Some(NewsKind::from("")),
            ..NewNewsItem::default()
        })
        .await
        .unwrap();

    assert_eq!(item.kind, NewsKind::Announcement);
    let raw = state.store().get(&state.keys().news).await.unwrap().unwrap();
    assert!(raw.contains(r#""type":"noutate""#));
}

#[tokio::test]
async fn test_item_with_bad_date_is_not_overwritten() {
    let state = bundled_state();
    let key = state.keys().news.clone();
    let raw = serde_json::json!([
        { "id": "n-1", "title": "Fără dată", "type": "noutate", "desc": "", "date": "" }
    ])
    .to_string();
    state.store().set(&key, raw.clone()).await.unwrap();

    assert!(state.news().load().await.unwrap().is_empty());
    assert_eq!(state.store().get(&key).await.unwrap(), Some(raw));
}
