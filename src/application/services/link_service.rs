//! Short link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::slug::generate_slug;
use crate::utils::url_validator::validate_target_url;

/// Bounded number of insert attempts before a slug collision is surfaced to
/// the caller. With 62^8 possible slugs a single collision is already rare;
/// hitting the bound means something is systematically wrong.
const MAX_SLUG_ATTEMPTS: usize = 5;

/// Service for creating and resolving shortened links.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
}

impl LinkService {
    /// Creates a new link service backed by the given store.
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    /// Creates a short link for the given URL.
    ///
    /// The URL is validated before any store access and is stored exactly as
    /// submitted. A fresh random slug is generated per attempt; on a
    /// uniqueness conflict the insert is retried with a new slug up to
    /// [`MAX_SLUG_ATTEMPTS`] times before the conflict is surfaced.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is not an absolute HTTP(S)
    /// URL, [`AppError::Conflict`] if every attempt collided, and
    /// [`AppError::StoreUnavailable`] on store timeouts.
    pub async fn create_short_link(&self, url: String) -> Result<ShortLink, AppError> {
        validate_target_url(&url)?;

        let mut last_conflict = None;

        for attempt in 0..MAX_SLUG_ATTEMPTS {
            let slug = generate_slug();

            match self
                .store
                .insert(NewShortLink {
                    slug,
                    url: url.clone(),
                })
                .await
            {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict(message)) => {
                    tracing::warn!("Slug collision on attempt {}", attempt + 1);
                    last_conflict = Some(AppError::Conflict(message));
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_conflict
            .unwrap_or_else(|| AppError::internal("Failed to generate a unique slug")))
    }

    /// Resolves a slug to its stored link, if any.
    ///
    /// An unknown slug is `Ok(None)`, not an error; the handler turns it into
    /// the informational not-found response.
    pub async fn resolve(&self, slug: &str) -> Result<Option<ShortLink>, AppError> {
        self.store.find_by_slug(slug).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkStore;
    use chrono::Utc;
    use mockall::Sequence;

    fn stored_link(id: i64, slug: &str, url: &str) -> ShortLink {
        ShortLink {
            id,
            slug: slug.to_string(),
            url: url.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_short_link_success() {
        let mut mock_store = MockLinkStore::new();

        mock_store
            .expect_insert()
            .withf(|new_link| {
                new_link.slug.len() == 8
                    && new_link.slug.chars().all(|c| c.is_ascii_alphanumeric())
                    && new_link.url == "https://example.com/page"
            })
            .times(1)
            .returning(|new_link| Ok(stored_link(1, &new_link.slug, &new_link.url)));

        let service = LinkService::new(Arc::new(mock_store));

        let link = service
            .create_short_link("https://example.com/page".to_string())
            .await
            .unwrap();

        assert_eq!(link.url, "https://example.com/page");
        assert_eq!(link.slug.len(), 8);
    }

    #[tokio::test]
    async fn test_create_short_link_invalid_url_skips_store() {
        let mut mock_store = MockLinkStore::new();
        mock_store.expect_insert().times(0);

        let service = LinkService::new(Arc::new(mock_store));

        let result = service.create_short_link("not-a-url".to_string()).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_short_link_retries_on_collision() {
        let mut mock_store = MockLinkStore::new();
        let mut seq = Sequence::new();

        mock_store
            .expect_insert()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(AppError::conflict("Slug already exists")));

        mock_store
            .expect_insert()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|new_link| Ok(stored_link(2, &new_link.slug, &new_link.url)));

        let service = LinkService::new(Arc::new(mock_store));

        let link = service
            .create_short_link("https://example.com".to_string())
            .await
            .unwrap();

        assert_eq!(link.id, 2);
    }

    #[tokio::test]
    async fn test_create_short_link_surfaces_conflict_after_bounded_retries() {
        let mut mock_store = MockLinkStore::new();

        mock_store
            .expect_insert()
            .times(MAX_SLUG_ATTEMPTS)
            .returning(|_| Err(AppError::conflict("Slug already exists")));

        let service = LinkService::new(Arc::new(mock_store));

        let result = service
            .create_short_link("https://example.com".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_create_short_link_does_not_retry_transient_failures() {
        let mut mock_store = MockLinkStore::new();

        mock_store
            .expect_insert()
            .times(1)
            .returning(|_| Err(AppError::unavailable("Link store timed out")));

        let service = LinkService::new(Arc::new(mock_store));

        let result = service
            .create_short_link("https://example.com".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let mut mock_store = MockLinkStore::new();

        mock_store
            .expect_find_by_slug()
            .withf(|slug| slug == "aB3xY9Qz")
            .times(1)
            .returning(|slug| Ok(Some(stored_link(7, slug, "https://example.com"))));

        let service = LinkService::new(Arc::new(mock_store));

        let link = service.resolve("aB3xY9Qz").await.unwrap();
        assert_eq!(link.unwrap().url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_absent_is_none_not_error() {
        let mut mock_store = MockLinkStore::new();

        mock_store
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_store));

        assert!(service.resolve("ZZZZZZZZ").await.unwrap().is_none());
    }
}
