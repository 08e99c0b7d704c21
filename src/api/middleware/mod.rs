//! HTTP middleware for request protection and observability.

pub mod auth;
pub mod tracing;
