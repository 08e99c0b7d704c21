//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// The field is an `Option` so that a missing `url` key fails validation with
/// a 400 rather than a deserialization rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be a valid absolute URL).
    #[validate(required(message = "URL is required"))]
    #[validate(url(message = "Invalid URL format"))]
    pub url: Option<String>,
}

/// Response for a created short link: the issued slug and the echoed URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub slug: String,
    pub url: String,
}
