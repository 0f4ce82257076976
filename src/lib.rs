//! # Short Alias
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! Long URLs are stored under short, collision-free alphanumeric aliases;
//! resolving an alias redirects to the original URL and increments its request
//! counter.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The URL record entity and the record store trait
//! - **Application Layer** ([`application`]) - Alias generation and resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite record store
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_FILE_PATH="data/urls.db"
//! cargo run
//!
//! curl -X POST localhost:8000/shorten -H 'content-type: application/json' \
//!      -d '{"long_url": "https://example.com/a"}'
//! # {"short_url":"Ab3xQ9"}
//!
//! curl -i localhost:8000/Ab3xQ9
//! # HTTP/1.1 307 Temporary Redirect
//! # location: https://example.com/a
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AliasPolicy, AliasService};
    pub use crate::domain::entities::{NewUrlRecord, UrlRecord};
    pub use crate::domain::repositories::RecordStore;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteRecordStore;
    pub use crate::state::AppState;
}
