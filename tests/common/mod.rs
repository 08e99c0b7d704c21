#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use nomad_shortener::application::services::LinkService;
use nomad_shortener::domain::entities::{NewShortLink, ShortLink};
use nomad_shortener::domain::repositories::LinkStore;
use nomad_shortener::error::AppError;
use nomad_shortener::routes::app_router;
use nomad_shortener::state::AppState;

pub const TEST_API_KEY: &str = "test-secret-key";
pub const TEST_BANNER: &str = "Test URL Shortener";

#[derive(Default)]
struct MemoryInner {
    links: HashMap<String, ShortLink>,
    next_id: i64,
}

/// In-memory [`LinkStore`] mirroring the Postgres behavior handlers rely on:
/// point lookups return `None` for unknown slugs and a duplicate slug insert
/// fails with a conflict.
#[derive(Default)]
pub struct MemoryLinkStore {
    inner: Mutex<MemoryInner>,
}

impl MemoryLinkStore {
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().links.len()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let mut inner = self.inner.lock().unwrap();

        if inner.links.contains_key(&new_link.slug) {
            return Err(AppError::conflict("Slug already exists"));
        }

        inner.next_id += 1;
        let link = ShortLink {
            id: inner.next_id,
            slug: new_link.slug.clone(),
            url: new_link.url,
            created_at: Utc::now(),
        };

        inner.links.insert(new_link.slug, link.clone());

        Ok(link)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.inner.lock().unwrap().links.get(slug).cloned())
    }
}

pub fn create_test_state(store: Arc<dyn LinkStore>) -> AppState {
    AppState {
        link_service: Arc::new(LinkService::new(store)),
        api_key: Arc::new(TEST_API_KEY.to_string()),
        banner: Arc::new(TEST_BANNER.to_string()),
    }
}

/// Spins up a test server over the real router with an in-memory store.
///
/// Returns the store handle too, so tests can seed records and assert on
/// persistence side effects.
pub fn test_server(protect_redirects: bool) -> (TestServer, Arc<MemoryLinkStore>) {
    let store = Arc::new(MemoryLinkStore::default());
    let state = create_test_state(store.clone());
    let server = TestServer::new(app_router(state, protect_redirects)).unwrap();

    (server, store)
}

/// Seeds a link directly into the store, bypassing the HTTP surface.
pub async fn seed_link(store: &MemoryLinkStore, slug: &str, url: &str) {
    store
        .insert(NewShortLink {
            slug: slug.to_string(),
            url: url.to_string(),
        })
        .await
        .unwrap();
}
