//! Alias creation and resolution service.

use std::sync::Arc;

use metrics::counter;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{RecordStore, StoreSummary};
use crate::error::AppError;
use crate::utils::alias_generator::{DEFAULT_ALIAS_LENGTH, generate_alias, is_reserved};

/// Alias shape and retry bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasPolicy {
    /// Number of characters in every generated alias.
    pub length: usize,
    /// Maximum number of candidates tried per creation. `None` retries until
    /// an unused alias is found.
    pub max_attempts: Option<u32>,
}

impl Default for AliasPolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_ALIAS_LENGTH,
            max_attempts: None,
        }
    }
}

/// Service for creating short aliases and resolving them back to URLs.
///
/// Uniqueness is enforced twice: each candidate is checked with
/// [`RecordStore::exists`], and the store's unique index rejects an insert that
/// lost a race with a concurrent creator. Both cases lead to a fresh candidate.
pub struct AliasService<S: RecordStore + ?Sized = dyn RecordStore> {
    store: Arc<S>,
    policy: AliasPolicy,
}

impl<S: RecordStore + ?Sized> AliasService<S> {
    /// Creates a new alias service with the default policy.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_policy(store, AliasPolicy::default())
    }

    /// Creates a new alias service with an explicit policy.
    pub fn with_policy(store: Arc<S>, policy: AliasPolicy) -> Self {
        Self { store, policy }
    }

    /// Stores `original_url` under a freshly generated alias and returns the alias.
    ///
    /// Duplicate URLs are allowed; each call yields a new, distinct alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `original_url` is empty.
    /// Returns [`AppError::Internal`] if a configured attempt limit is exhausted.
    /// Propagates store errors other than alias conflicts.
    pub async fn create_short_url(&self, original_url: &str) -> Result<String, AppError> {
        let record = self.create_record(original_url).await?;
        Ok(record.alias)
    }

    /// Like [`Self::create_short_url`] but returns the whole persisted record.
    pub async fn create_record(&self, original_url: &str) -> Result<UrlRecord, AppError> {
        if original_url.trim().is_empty() {
            return Err(AppError::bad_request(
                "long_url must not be empty",
                json!({ "field": "long_url" }),
            ));
        }

        let mut attempts: u32 = 0;

        loop {
            if let Some(max_attempts) = self.policy.max_attempts
                && attempts >= max_attempts
            {
                return Err(AppError::internal(
                    "Failed to generate unique alias",
                    json!({ "reason": "Too many collisions", "attempts": attempts }),
                ));
            }
            attempts += 1;

            let candidate = generate_alias(self.policy.length);
            if is_reserved(&candidate) {
                continue;
            }

            if self.store.exists(&candidate).await? {
                counter!("alias_collisions_total", "stage" => "exists").increment(1);
                debug!(alias = %candidate, attempts, "Alias already taken, regenerating");
                continue;
            }

            match self
                .store
                .insert(NewUrlRecord::now(original_url, candidate))
                .await
            {
                Ok(record) => {
                    counter!("aliases_created_total").increment(1);
                    info!(alias = %record.alias, attempts, "Short URL created");
                    return Ok(record);
                }
                Err(e) if e.is_conflict() => {
                    counter!("alias_collisions_total", "stage" => "insert").increment(1);
                    warn!(attempts, "Alias claimed concurrently, regenerating");
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Resolves an alias to its original URL, counting the resolution.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the alias exists; its `request_count` is incremented
    /// - `Ok(None)` if it does not; nothing is modified
    pub async fn get_long_url(&self, alias: &str) -> Result<Option<String>, AppError> {
        let Some(record) = self.store.lookup_by_alias(alias).await? else {
            counter!("alias_resolutions_total", "outcome" => "miss").increment(1);
            debug!(alias, "Alias not found");
            return Ok(None);
        };

        if !self.store.increment_request_count(&record.alias).await? {
            warn!(alias = %record.alias, "Resolved record vanished before counting");
        }

        counter!("alias_resolutions_total", "outcome" => "hit").increment(1);
        Ok(Some(record.original_url))
    }

    /// Retrieves a record by alias without counting a resolution.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this alias.
    pub async fn get_record(&self, alias: &str) -> Result<UrlRecord, AppError> {
        self.store
            .lookup_by_alias(alias)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "short_url": alias })))
    }

    /// Returns record and request totals.
    pub async fn summary(&self) -> Result<StoreSummary, AppError> {
        self.store.summary().await
    }

    /// Returns up to `limit` records with the highest request counts.
    pub async fn top_requested(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        if limit <= 0 {
            return Ok(Vec::new());
        }
        self.store.top_requested(limit).await
    }

    /// Returns true if the store answers a trivial query.
    pub async fn is_store_healthy(&self) -> bool {
        self.store.health_check().await
    }
}
