//! PostgreSQL store implementation.

pub mod pg_link_store;

pub use pg_link_store::PgLinkStore;
