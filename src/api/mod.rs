//! HTTP API layer.
//!
//! Translates HTTP requests into domain operations and formats responses
//! according to the service's JSON contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extractors`] - Request extractors aligned with the error contract
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication and request tracing middleware

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
