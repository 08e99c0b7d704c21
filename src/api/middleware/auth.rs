//! Shared-secret authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Authenticates requests against the configured shared secret.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <api key>
/// ```
///
/// There is no per-client identity: a single static secret guards the whole
/// service. Creation is always behind this layer; whether the redirect path
/// is too depends on the `AUTH_PROTECT_REDIRECTS` flag (see
/// [`crate::routes::app_router`]).
///
/// # Errors
///
/// Returns `401 Unauthorized` with `{"error": "Incorrect authentication
/// details"}` if the header is missing, malformed, or carries the wrong
/// secret. The pipeline halts before any store access.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::unauthorized("Incorrect authentication details"))?;

    if token != *st.api_key {
        return Err(AppError::unauthorized("Incorrect authentication details"));
    }

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
