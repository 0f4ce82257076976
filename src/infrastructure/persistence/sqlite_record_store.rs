//! SQLite implementation of the record store.

use async_trait::async_trait;
use serde_json::json;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{RecordStore, StoreSummary};
use crate::error::{AppError, map_sqlx_error};

const CREATE_URLS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS urls (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    original_url TEXT NOT NULL,
    alias TEXT NOT NULL,
    created_at TEXT NOT NULL,
    request_count INTEGER NOT NULL DEFAULT 0 CHECK (request_count >= 0)
)
"#;

const CREATE_ALIAS_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS urls_alias_key ON urls (alias)";

/// Connection pool settings for [`SqliteRecordStore::connect`].
#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    /// How long a connection waits on a locked database before failing.
    pub busy_timeout: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            max_lifetime: Duration::from_secs(1800),
            busy_timeout: Duration::from_secs(5),
        }
    }
}

/// SQLite repository for URL records.
///
/// Owns its connection pool: every operation acquires a connection for the
/// duration of a single statement and returns it to the pool afterwards.
pub struct SqliteRecordStore {
    pool: Arc<SqlitePool>,
}

impl SqliteRecordStore {
    /// Creates a new store over an existing connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Opens (creating if missing) the database at `database_url`.
    ///
    /// The database runs in WAL mode so readers do not block the writer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the location is malformed or the
    /// database cannot be opened.
    pub async fn connect(database_url: &str, options: &StoreOptions) -> Result<Self, AppError> {
        let connect_options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| {
                AppError::store_unavailable(
                    "Invalid database location",
                    json!({ "reason": e.to_string() }),
                )
            })?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(options.busy_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(options.max_connections)
            .acquire_timeout(options.acquire_timeout)
            .idle_timeout(options.idle_timeout)
            .max_lifetime(options.max_lifetime)
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                AppError::store_unavailable(
                    "Failed to open record store",
                    json!({ "reason": e.to_string() }),
                )
            })?;

        Ok(Self::new(Arc::new(pool)))
    }

    /// Returns the version of the linked SQLite library.
    pub async fn sqlite_version(&self) -> Result<String, AppError> {
        let version: String = sqlx::query_scalar("SELECT sqlite_version()")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(version)
    }

    /// Returns true if the `urls` table has been created.
    pub async fn schema_exists(&self) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'urls')",
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(CREATE_URLS_TABLE)
            .execute(self.pool.as_ref())
            .await?;
        sqlx::query(CREATE_ALIAS_INDEX)
            .execute(self.pool.as_ref())
            .await?;

        tracing::debug!("Record store schema ensured");
        Ok(())
    }

    async fn exists(&self, alias: &str) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM urls WHERE alias = ?1)")
            .bind(alias)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(exists)
    }

    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        sqlx::query_as::<_, UrlRecord>(
            r#"
            INSERT INTO urls (original_url, alias, created_at, request_count)
            VALUES (?1, ?2, ?3, 0)
            RETURNING id, original_url, alias, created_at, request_count
            "#,
        )
        .bind(&new_record.original_url)
        .bind(&new_record.alias)
        .bind(new_record.created_at)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| match map_sqlx_error(e) {
            AppError::Conflict { .. } => AppError::conflict(
                "Alias already exists",
                json!({ "alias": &new_record.alias }),
            ),
            other => other,
        })
    }

    async fn lookup_by_alias(&self, alias: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, original_url, alias, created_at, request_count
            FROM urls
            WHERE alias = ?1
            "#,
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn increment_request_count(&self, alias: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE urls SET request_count = request_count + 1 WHERE alias = ?1")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }

    async fn summary(&self) -> Result<StoreSummary, AppError> {
        let (records, total_requests): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(request_count), 0) FROM urls",
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(StoreSummary {
            records,
            total_requests,
        })
    }

    async fn top_requested(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        let records = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, original_url, alias, created_at, request_count
            FROM urls
            ORDER BY request_count DESC, id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(records)
    }
}
