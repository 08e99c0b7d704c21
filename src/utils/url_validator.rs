//! Target URL validation.
//!
//! The service stores and echoes URLs exactly as submitted; this module only
//! rejects input that is not a well-formed absolute HTTP(S) URL. No
//! normalization is applied.

use crate::error::AppError;
use url::Url;

/// Validates that the input is an absolute HTTP(S) URL with a host.
///
/// # Security
///
/// Rejects non-web schemes like `javascript:`, `data:`, and `file:` so the
/// redirect endpoint can never send clients somewhere a browser would treat
/// as executable.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for malformed URLs, unsupported schemes,
/// or URLs without a host.
pub fn validate_target_url(input: &str) -> Result<(), AppError> {
    let url = Url::parse(input)
        .map_err(|e| AppError::bad_request(format!("Invalid URL format: {}", e)))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => {
            return Err(AppError::bad_request(
                "Only HTTP and HTTPS URLs can be shortened",
            ));
        }
    }

    if url.host_str().is_none() {
        return Err(AppError::bad_request("URL must have a host"));
    }

    Ok(())
}
