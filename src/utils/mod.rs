//! Utility functions for slug generation, URL validation, and error
//! classification.
//!
//! - [`slug`] - Random slug generation
//! - [`url_validator`] - Target URL validation
//! - [`db_error`] - sqlx error classification

pub mod db_error;
pub mod slug;
pub mod url_validator;
