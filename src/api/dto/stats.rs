//! DTOs for per-alias statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// Stored state of a single alias.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_url: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub request_count: i64,
}

impl From<UrlRecord> for StatsResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            short_url: record.alias,
            long_url: record.original_url,
            created_at: record.created_at,
            request_count: record.request_count,
        }
    }
}
