//! Handler for the shorten endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short alias for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "Ab3xQ9" }
/// ```
///
/// Shortening the same URL twice yields two different aliases.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON, lacks `long_url`,
/// or `long_url` is empty.
/// Returns 503 Service Unavailable if the record store cannot be reached.
pub async fn shorten_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let short_url = state
        .alias_service
        .create_short_url(&payload.long_url)
        .await?;

    Ok(Json(ShortenResponse { short_url }))
}
