//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod message;
pub mod shorten;

pub use message::MessageResponse;
pub use shorten::{ShortenRequest, ShortenResponse};
