//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{short_url}`        - Alias redirect
//! - `POST /shorten`            - Create an alias
//! - `GET  /stats/{short_url}`  - Stored record for an alias
//! - `GET  /health`             - Health check
//!
//! Static segments take precedence over `/{short_url}`, which is why the
//! generator never emits `health`, `shorten` or `stats`.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{short_url}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
