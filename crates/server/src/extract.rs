use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use models::validation::{FieldError, FromPayload};
use serde_json::Value;

use crate::errors::ApiError;

/// JSON body validated field by field through [`FromPayload`].
///
/// Unlike `axum::Json`, a bad body is reported as a 422 listing every
/// offending field, and fields the type does not declare are ignored.
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: FromPayload,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(IntoResponse::into_response)?;
        let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
            ApiError::field(FieldError::new(["body"], &format!("JSON decode error: {e}"), "json_invalid"))
                .into_response()
        })?;
        T::from_payload(&value)
            .map(Payload)
            .map_err(|errors| ApiError::Unprocessable(errors).into_response())
    }
}
