//! URL record entity: one alias pointing at one original URL.

use chrono::{DateTime, Utc};

/// A persisted alias-to-URL mapping with its resolution counter.
///
/// `alias` is unique across all records; `original_url` is not. Apart from
/// `request_count`, a record never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub alias: String,
    pub created_at: DateTime<Utc>,
    pub request_count: i64,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        original_url: String,
        alias: String,
        created_at: DateTime<Utc>,
        request_count: i64,
    ) -> Self {
        Self {
            id,
            original_url,
            alias,
            created_at,
            request_count,
        }
    }
}

/// Input data for inserting a new record.
///
/// The counter always starts at zero, so it is not part of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub original_url: String,
    pub alias: String,
    pub created_at: DateTime<Utc>,
}

impl NewUrlRecord {
    /// Builds an insert stamped with the current time.
    pub fn now(original_url: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            alias: alias.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_record_creation() {
        let now = Utc::now();
        let record = UrlRecord::new(
            1,
            "https://example.com/a".to_string(),
            "Ab3xQ9".to_string(),
            now,
            0,
        );

        assert_eq!(record.id, 1);
        assert_eq!(record.original_url, "https://example.com/a");
        assert_eq!(record.alias, "Ab3xQ9");
        assert_eq!(record.created_at, now);
        assert_eq!(record.request_count, 0);
    }

    #[test]
    fn test_new_url_record_now() {
        let before = Utc::now();
        let new_record = NewUrlRecord::now("https://rust-lang.org", "Rust01");

        assert_eq!(new_record.original_url, "https://rust-lang.org");
        assert_eq!(new_record.alias, "Rust01");
        assert!(new_record.created_at >= before);
    }
}
