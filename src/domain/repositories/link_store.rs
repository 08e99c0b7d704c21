//! Store trait for short link persistence.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence abstraction over the table of short link records.
///
/// The store's uniqueness constraint on the slug column is the only
/// cross-request coordination point in the whole service; no application-level
/// locking exists.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL implementation
/// - An in-memory implementation lives in `tests/common` for handler tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Idempotent schema bootstrap, run once at process startup.
    ///
    /// Running it against an already-initialized store must not error and must
    /// not alter existing records. A failure here is logged by the caller and
    /// never aborts startup.
    async fn ensure_schema(&self) -> Result<(), AppError>;

    /// Inserts a new short link record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug already exists.
    /// Returns [`AppError::StoreUnavailable`] on timeout or connection loss.
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Point lookup by exact slug match.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if absent (not an error)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on timeout or connection loss.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<ShortLink>, AppError>;
}
