//! Infrastructure layer for external integrations.
//!
//! Implements the store contract defined by the domain layer.

pub mod persistence;
