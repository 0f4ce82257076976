//! Handler for per-alias statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored record for an alias without counting a resolution.
///
/// # Endpoint
///
/// `GET /stats/{short_url}`
///
/// # Response
///
/// ```json
/// {
///   "short_url": "Ab3xQ9",
///   "long_url": "https://example.com/a",
///   "created_at": "2026-01-15T10:30:00Z",
///   "request_count": 1
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(short_url): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let record = state.alias_service.get_record(&short_url).await?;

    Ok(Json(record.into()))
}
