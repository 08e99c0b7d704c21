//! Random slug generation.
//!
//! Slugs are 8 characters drawn uniformly from the 62-symbol alphanumeric
//! alphabet (digits + uppercase + lowercase), giving 62^8 possible values.
//! The generator is deliberately unaware of the store: collision probability
//! is negligible at realistic scale, and the store's unique constraint is the
//! safety net when one does occur.

use rand::{Rng, distr::Alphanumeric};

/// Length of generated slugs.
pub const SLUG_LENGTH: usize = 8;

/// Generates a random 8-character alphanumeric slug.
///
/// Uses the thread-local CSPRNG, so each call is independent and
/// unpredictable.
///
/// # Examples
///
/// ```ignore
/// let slug = generate_slug();
/// assert_eq!(slug.len(), 8);
/// assert!(slug.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_slug() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SLUG_LENGTH)
        .map(char::from)
        .collect()
}
