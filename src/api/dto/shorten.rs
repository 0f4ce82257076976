//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL. Only emptiness is checked; the value is stored as given.
    #[validate(length(min = 1, message = "long_url must not be empty"))]
    pub long_url: String,
}

/// Response carrying the generated alias.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
