//! Handler for short link resolution.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header, header::HeaderValue},
    response::{IntoResponse, Response},
};

use crate::api::dto::MessageResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a slug to its stored URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Behavior
///
/// - Known slug: 301 Moved Permanently with the stored URL in `Location`.
/// - Unknown slug: 200 with `{"msg": "URL with slug '<slug>' not found"}`.
///   The 200-with-message shape is deliberate, inherited behavior; clients
///   depend on it, so it is not a 404.
///
/// Read-only; repeated resolution of the same slug always returns the same
/// URL.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.link_service.resolve(&slug).await? {
        Some(link) => {
            // Stored URLs are validated at creation, so this only fails if the
            // store was seeded out of band with control characters.
            let location = HeaderValue::from_str(&link.url)
                .map_err(|_| AppError::internal("Stored URL is not a valid redirect target"))?;

            Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
        }
        None => Ok(Json(MessageResponse {
            msg: format!("URL with slug '{}' not found", slug),
        })
        .into_response()),
    }
}
