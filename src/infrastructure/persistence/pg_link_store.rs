//! PostgreSQL implementation of the link store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// PostgreSQL store for short link records.
///
/// All queries run against the shared connection pool and are bounded by
/// `op_timeout`; an elapsed timeout surfaces as [`AppError::StoreUnavailable`]
/// with no partial state written.
pub struct PgLinkStore {
    pool: Arc<PgPool>,
    op_timeout: Duration,
}

impl PgLinkStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>, op_timeout: Duration) -> Self {
        Self { pool, op_timeout }
    }

    async fn bounded<T, F>(&self, fut: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.op_timeout, fut).await {
            Ok(result) => result.map_err(AppError::from),
            Err(_) => Err(AppError::unavailable("Link store timed out")),
        }
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        self.bounded(
            sqlx::query(
                r#"
                CREATE TABLE IF NOT EXISTS short_urls (
                    id         BIGSERIAL PRIMARY KEY,
                    slug       TEXT NOT NULL UNIQUE,
                    url        TEXT NOT NULL,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
                )
                "#,
            )
            .execute(self.pool.as_ref()),
        )
        .await?;

        Ok(())
    }

    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        self.bounded(
            sqlx::query_as::<_, ShortLink>(
                r#"
                INSERT INTO short_urls (slug, url)
                VALUES ($1, $2)
                RETURNING id, slug, url, created_at
                "#,
            )
            .bind(&new_link.slug)
            .bind(&new_link.url)
            .fetch_one(self.pool.as_ref()),
        )
        .await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ShortLink>, AppError> {
        self.bounded(
            sqlx::query_as::<_, ShortLink>(
                r#"
                SELECT id, slug, url, created_at
                FROM short_urls
                WHERE slug = $1
                "#,
            )
            .bind(slug)
            .fetch_optional(self.pool.as_ref()),
        )
        .await
    }
}
