//! Informational message body used by the banner and not-found responses.

use serde::Serialize;

/// `{"msg": "..."}` body for non-error informational responses.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}
