//! Handler for the service banner endpoint.

use axum::{Json, extract::State};

use crate::api::dto::MessageResponse;
use crate::state::AppState;

/// Returns the service banner.
///
/// # Endpoint
///
/// `GET /` (public) - doubles as a liveness probe.
pub async fn banner_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    Json(MessageResponse {
        msg: state.banner.as_ref().clone(),
    })
}
