//! Request extractors with error responses matching the service contract.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor whose rejection follows the uniform error shape.
///
/// The stock [`Json`] extractor rejects malformed or type-mismatched bodies
/// with a plain-text 422; every error leaving this service must instead be a
/// `{"error": "<message>"}` document, so the rejection is remapped to a 400
/// validation error carrying the deserializer's message.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        Ok(Self(value))
    }
}
