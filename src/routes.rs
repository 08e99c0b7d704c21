//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`        - Service banner / liveness (public)
//! - `GET  /{slug}`  - Short link redirect (public by default, see below)
//! - `POST /`        - Create a short link (shared secret required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive cross-origin policy on every route
//! - **Authentication** - Shared-secret Bearer token on the creation path;
//!   also on the redirect path when `protect_redirects` is set

use crate::api::handlers::{banner_handler, redirect_handler, shorten_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `protect_redirects` - when `true`, resolving `GET /{slug}` also requires
///   the shared secret; the banner stays public either way
pub fn app_router(state: AppState, protect_redirects: bool) -> Router {
    let mut protected = Router::new().route("/", post(shorten_handler));
    let mut public = Router::new().route("/", get(banner_handler));

    if protect_redirects {
        protected = protected.route("/{slug}", get(redirect_handler));
    } else {
        public = public.route("/{slug}", get(redirect_handler));
    }

    let protected =
        protected.route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    // Browser clients on any origin may call the API, matching the original
    // deployment. Auth failures still apply after the preflight.
    Router::new()
        .merge(protected)
        .merge(public)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer())
}
