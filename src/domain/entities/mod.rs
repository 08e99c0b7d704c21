//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation uses a
//! separate struct (`NewShortLink`) from the persisted record (`ShortLink`),
//! since `id` and `created_at` are assigned by the store.

pub mod short_link;

pub use short_link::{NewShortLink, ShortLink};
