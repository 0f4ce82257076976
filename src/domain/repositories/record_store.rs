//! Repository trait for URL record persistence.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Aggregate counters over the whole store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreSummary {
    pub records: i64,
    pub total_requests: i64,
}

/// Durable storage for URL records.
///
/// The store knows nothing about alias generation; it enforces alias
/// uniqueness at the storage level and owns its connection lifecycle.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteRecordStore`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/record_store.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Creates the backing table and indexes if they are missing.
    ///
    /// Idempotent; safe to call on every startup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the database cannot be reached.
    async fn ensure_schema(&self) -> Result<(), AppError>;

    /// Returns true iff a record with this alias is present.
    async fn exists(&self, alias: &str) -> Result<bool, AppError>;

    /// Inserts a new record with `request_count = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the alias is already taken.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Point lookup by alias.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if not found
    async fn lookup_by_alias(&self, alias: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Adds one to the counter of the record with this alias.
    ///
    /// Returns `Ok(false)` if no record matched.
    async fn increment_request_count(&self, alias: &str) -> Result<bool, AppError>;

    /// Performs a trivial round-trip to the database.
    async fn health_check(&self) -> bool;

    /// Counts records and sums their request counters.
    async fn summary(&self) -> Result<StoreSummary, AppError>;

    /// Lists the most requested records, newest first among equal counts.
    async fn top_requested(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError>;
}
