//! Short link entity representing a slug to URL mapping.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A persisted slug to URL mapping.
///
/// Records are append-only: once created, `slug` and `url` never change and
/// the record is never deleted. The `id` is store-assigned and not exposed to
/// clients.
#[derive(Debug, Clone, FromRow)]
pub struct ShortLink {
    pub id: i64,
    pub slug: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new short link.
///
/// `id` and `created_at` are assigned by the store at insert time.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub slug: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link_construction() {
        let now = Utc::now();
        let link = ShortLink {
            id: 1,
            slug: "aB3xY9Qz".to_string(),
            url: "https://example.com".to_string(),
            created_at: now,
        };

        assert_eq!(link.id, 1);
        assert_eq!(link.slug, "aB3xY9Qz");
        assert_eq!(link.url, "https://example.com");
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_new_short_link_construction() {
        let new_link = NewShortLink {
            slug: "xyz78901".to_string(),
            url: "https://rust-lang.org".to_string(),
        };

        assert_eq!(new_link.slug, "xyz78901");
        assert_eq!(new_link.url, "https://rust-lang.org");
    }
}
