//! Domain layer containing the core data model and store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; the [`repositories::LinkStore`] trait is implemented in
//! [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
