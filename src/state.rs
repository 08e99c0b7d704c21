//! Shared application state injected into request handlers.
//!
//! Constructed once at startup from the loaded [`Config`]; handlers receive
//! it by extraction, never through globals.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// The shared secret checked by the authentication guard.
    pub api_key: Arc<String>,
    /// Text returned by the `GET /` liveness endpoint.
    pub banner: Arc<String>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, config: &Config) -> Self {
        Self {
            link_service,
            api_key: Arc::new(config.api_key.clone()),
            banner: Arc::new(config.banner.clone()),
        }
    }
}
