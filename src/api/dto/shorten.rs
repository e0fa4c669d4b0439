//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The target URL to shorten (must be a syntactically valid absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Response carrying the composed short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub url: String,
}
