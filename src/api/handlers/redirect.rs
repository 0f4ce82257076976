//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its original URL.
///
/// # Endpoint
///
/// `GET /{short_url}`
///
/// Every successful redirect increments the alias's request counter.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
/// Returns 503 Service Unavailable if the record store cannot be reached.
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state
        .alias_service
        .get_long_url(&short_url)
        .await?
        .ok_or_else(|| AppError::not_found("URL not found", json!({ "short_url": short_url })))?;

    debug!("Redirecting {} -> {}", short_url, long_url);

    Ok(Redirect::temporary(&long_url))
}
