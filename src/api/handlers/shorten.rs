//! Handler for the link creation endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::{ShortenRequest, ShortenResponse};
use crate::api::extractors::AppJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for the submitted URL.
///
/// # Endpoint
///
/// `POST /` (requires the shared API secret)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// { "slug": "aB3xY9Qz", "url": "https://example.com/some/long/path" }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is not valid JSON, the URL is missing or malformed
/// (nothing is persisted), or slug generation exhausted its collision retries.
pub async fn shorten_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let url = payload
        .url
        .ok_or_else(|| AppError::bad_request("URL is required"))?;

    let link = state.link_service.create_short_link(url).await?;

    Ok(Json(ShortenResponse {
        slug: link.slug,
        url: link.url,
    }))
}
