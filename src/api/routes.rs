//! API route configuration.

use crate::api::handlers::{shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Shorten and inspection routes.
///
/// # Endpoints
///
/// - `POST /shorten`             - Create an alias for a long URL
/// - `GET  /stats/{short_url}`   - Stored record for an alias (not counted)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{short_url}", get(stats_handler))
}
