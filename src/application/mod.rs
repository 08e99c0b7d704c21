//! Application layer services implementing business logic.
//!
//! Orchestrates domain operations by coordinating store calls and validation,
//! providing a clean API for HTTP handlers.

pub mod services;
