#![allow(dead_code)]

use chrono::Utc;
use short_alias::application::services::{AliasPolicy, AliasService};
use short_alias::domain::repositories::RecordStore;
use short_alias::infrastructure::persistence::{SqliteRecordStore, StoreOptions};
use short_alias::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Fresh in-memory database. A single connection keeps every query on the
/// same database and serializes writers.
pub async fn test_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

pub async fn create_test_store(pool: &SqlitePool) -> Arc<SqliteRecordStore> {
    let store = SqliteRecordStore::new(Arc::new(pool.clone()));
    store.ensure_schema().await.unwrap();
    Arc::new(store)
}

pub async fn create_test_service(pool: &SqlitePool) -> AliasService<SqliteRecordStore> {
    AliasService::new(create_test_store(pool).await)
}

pub async fn create_test_state(pool: &SqlitePool) -> AppState {
    create_test_state_with_policy(pool, AliasPolicy::default()).await
}

pub async fn create_test_state_with_policy(pool: &SqlitePool, policy: AliasPolicy) -> AppState {
    let store: Arc<dyn RecordStore> = create_test_store(pool).await;
    AppState::new(Arc::new(AliasService::with_policy(store, policy)))
}

pub async fn insert_record(pool: &SqlitePool, alias: &str, url: &str) {
    sqlx::query(
        "INSERT INTO urls (original_url, alias, created_at, request_count) VALUES (?1, ?2, ?3, 0)",
    )
    .bind(url)
    .bind(alias)
    .bind(Utc::now())
    .execute(pool)
    .await
    .unwrap();
}

pub async fn request_count(pool: &SqlitePool, alias: &str) -> i64 {
    sqlx::query_scalar("SELECT request_count FROM urls WHERE alias = ?1")
        .bind(alias)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn total_request_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COALESCE(SUM(request_count), 0) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn record_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Unique database file under the system temp dir.
pub fn temp_db_path(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "short-alias-{label}-{}-{}.db",
        std::process::id(),
        Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ))
}

/// File-backed store with a multi-connection pool and its schema in place.
pub async fn create_file_store(path: &Path) -> Arc<SqliteRecordStore> {
    let url = format!("sqlite://{}", path.display());
    let store = SqliteRecordStore::connect(&url, &StoreOptions::default())
        .await
        .unwrap();
    store.ensure_schema().await.unwrap();
    Arc::new(store)
}

pub fn remove_db_files(path: &Path) {
    let _ = std::fs::remove_file(path);
    let _ = std::fs::remove_file(path.with_extension("db-wal"));
    let _ = std::fs::remove_file(path.with_extension("db-shm"));
}
