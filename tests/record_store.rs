mod common;

use chrono::Utc;
use short_alias::AppError;
use short_alias::domain::entities::NewUrlRecord;
use short_alias::domain::repositories::RecordStore;
use short_alias::infrastructure::persistence::{SqliteRecordStore, StoreOptions};
use std::sync::Arc;

#[tokio::test]
async fn test_insert_record() {
    let pool = common::test_pool().await;
    let store = common::create_test_store(&pool).await;

    let created_at = Utc::now();
    let record = store
        .insert(NewUrlRecord {
            original_url: "https://example.com/a".to_string(),
            alias: "Ab3xQ9".to_string(),
            created_at,
        })
        .await
        .unwrap();

    assert!(record.id > 0);
    assert_eq!(record.alias, "Ab3xQ9");
    assert_eq!(record.original_url, "https://example.com/a");
    assert_eq!(record.created_at.timestamp(), created_at.timestamp());
    assert_eq!(record.request_count, 0);
}

#[tokio::test]
async fn test_insert_duplicate_alias_is_conflict() {
    let pool = common::test_pool().await;
    let store = common::create_test_store(&pool).await;

    store
        .insert(NewUrlRecord::now("https://example.com/1", "dup123"))
        .await
        .unwrap();

    let result = store
        .insert(NewUrlRecord::now("https://example.com/2", "dup123"))
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, AppError::Conflict { .. }));
    assert_eq!(err.to_error_info().details["alias"], "dup123");
}

#[tokio::test]
async fn test_duplicate_original_url_is_allowed() {
    let pool = common::test_pool().await;
    let store = common::create_test_store(&pool).await;

    let first = store
        .insert(NewUrlRecord::now("https://example.com", "first1"))
        .await
        .unwrap();
    let second = store
        .insert(NewUrlRecord::now("https://example.com", "second"))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_exists() {
    let pool = common::test_pool().await;
    let store = common::create_test_store(&pool).await;

    common::insert_record(&pool, "exists", "https://example.com").await;

    assert!(store.exists("exists").await.unwrap());
    assert!(!store.exists("absent").await.unwrap());
}

#[tokio::test]
async fn test_exists_is_case_sensitive() {
    let pool = common::test_pool().await;
    let store = common::create_test_store(&pool).await;

    common::insert_record(&pool, "AbCdEf", "https://example.com").await;

    assert!(store.exists("AbCdEf").await.unwrap());
    assert!(!store.exists("abcdef").await.unwrap());
}

#[tokio::test]
async fn test_lookup_by_alias() {
    let pool = common::test_pool().await;
    let store = common::create_test_store(&pool).await;

    common::insert_record(&pool, "look01", "https://example.com/target").await;

    let record = store.lookup_by_alias("look01").await.unwrap().unwrap();
    assert_eq!(record.alias, "look01");
    assert_eq!(record.original_url, "https://example.com/target");
    assert_eq!(record.request_count, 0);
}

#[tokio::test]
async fn test_lookup_by_alias_not_found() {
    let pool = common::test_pool().await;
    let store = common::create_test_store(&pool).await;

    let result = store.lookup_by_alias("zzzzzz").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_increment_request_count() {
    let pool = common::test_pool().await;
    let store = common::create_test_store(&pool).await;

    common::insert_record(&pool, "count1", "https://example.com").await;

    for _ in 0..3 {
        assert!(store.increment_request_count("count1").await.unwrap());
    }

    assert_eq!(common::request_count(&pool, "count1").await, 3);
}

#[tokio::test]
async fn test_increment_targets_only_matching_alias() {
    let pool = common::test_pool().await;
    let store = common::create_test_store(&pool).await;

    common::insert_record(&pool, "same01", "https://example.com/same").await;
    common::insert_record(&pool, "same02", "https://example.com/same").await;

    store.increment_request_count("same02").await.unwrap();

    assert_eq!(common::request_count(&pool, "same01").await, 0);
    assert_eq!(common::request_count(&pool, "same02").await, 1);
}

#[tokio::test]
async fn test_increment_missing_alias() {
    let pool = common::test_pool().await;
    let store = common::create_test_store(&pool).await;

    common::insert_record(&pool, "keep01", "https://example.com").await;

    assert!(!store.increment_request_count("nope00").await.unwrap());
    assert_eq!(common::total_request_count(&pool).await, 0);
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent() {
    let pool = common::test_pool().await;
    let store = common::create_test_store(&pool).await;

    common::insert_record(&pool, "keepme", "https://example.com").await;
    store.increment_request_count("keepme").await.unwrap();

    store.ensure_schema().await.unwrap();
    store.ensure_schema().await.unwrap();

    let record = store.lookup_by_alias("keepme").await.unwrap().unwrap();
    assert_eq!(record.request_count, 1);
    assert_eq!(store.summary().await.unwrap().records, 1);

    let duplicate = store
        .insert(NewUrlRecord::now("https://example.com/other", "keepme"))
        .await;
    assert!(matches!(duplicate.unwrap_err(), AppError::Conflict { .. }));
}

#[tokio::test]
async fn test_summary() {
    let pool = common::test_pool().await;
    let store = common::create_test_store(&pool).await;

    let empty = store.summary().await.unwrap();
    assert_eq!(empty.records, 0);
    assert_eq!(empty.total_requests, 0);

    common::insert_record(&pool, "sum001", "https://example.com/1").await;
    common::insert_record(&pool, "sum002", "https://example.com/2").await;
    store.increment_request_count("sum001").await.unwrap();
    store.increment_request_count("sum001").await.unwrap();
    store.increment_request_count("sum002").await.unwrap();

    let summary = store.summary().await.unwrap();
    assert_eq!(summary.records, 2);
    assert_eq!(summary.total_requests, 3);
}

#[tokio::test]
async fn test_top_requested_orders_by_count() {
    let pool = common::test_pool().await;
    let store = common::create_test_store(&pool).await;

    common::insert_record(&pool, "low001", "https://example.com/low").await;
    common::insert_record(&pool, "high01", "https://example.com/high").await;
    common::insert_record(&pool, "mid001", "https://example.com/mid").await;

    for _ in 0..5 {
        store.increment_request_count("high01").await.unwrap();
    }
    for _ in 0..2 {
        store.increment_request_count("mid001").await.unwrap();
    }

    let top = store.top_requested(2).await.unwrap();

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].alias, "high01");
    assert_eq!(top[0].request_count, 5);
    assert_eq!(top[1].alias, "mid001");
}

#[tokio::test]
async fn test_schema_exists() {
    let pool = common::test_pool().await;
    let store = SqliteRecordStore::new(Arc::new(pool.clone()));

    assert!(!store.schema_exists().await.unwrap());

    store.ensure_schema().await.unwrap();
    assert!(store.schema_exists().await.unwrap());
}

#[tokio::test]
async fn test_schema_exists_propagates_outage() {
    let pool = common::test_pool().await;
    let store = common::create_test_store(&pool).await;

    pool.close().await;

    assert!(matches!(
        store.schema_exists().await,
        Err(AppError::StoreUnavailable { .. })
    ));
}

#[tokio::test]
async fn test_health_check() {
    let pool = common::test_pool().await;
    let store = common::create_test_store(&pool).await;

    assert!(store.health_check().await);

    pool.close().await;
    assert!(!store.health_check().await);
}

#[tokio::test]
async fn test_closed_pool_is_store_unavailable() {
    let pool = common::test_pool().await;
    let store = SqliteRecordStore::new(Arc::new(pool.clone()));

    pool.close().await;

    let result = store.exists("Ab3xQ9").await;
    assert!(matches!(
        result.unwrap_err(),
        AppError::StoreUnavailable { .. }
    ));
}

#[tokio::test]
async fn test_connect_creates_database_file() {
    let path = common::temp_db_path("connect");

    let store = common::create_file_store(&path).await;
    store
        .insert(NewUrlRecord::now("https://example.com", "file01"))
        .await
        .unwrap();
    store.close().await;

    assert!(path.exists());

    let reopened = common::create_file_store(&path).await;
    assert!(reopened.exists("file01").await.unwrap());
    reopened.close().await;

    common::remove_db_files(&path);
}

#[tokio::test]
async fn test_connect_invalid_location_is_store_unavailable() {
    let result = SqliteRecordStore::connect(
        "sqlite:///nonexistent-dir/definitely/missing/urls.db",
        &StoreOptions {
            acquire_timeout: std::time::Duration::from_secs(2),
            ..StoreOptions::default()
        },
    )
    .await;

    assert!(matches!(
        result.err(),
        Some(AppError::StoreUnavailable { .. })
    ));
}
