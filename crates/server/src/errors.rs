use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ModelError;
use models::validation::{FieldError, FieldErrors};
use serde_json::json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Request-scoped failure rendered as a `{"detail": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("unprocessable request: {0}")]
    Unprocessable(FieldErrors),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// 422 for a single field error.
    pub fn field(error: FieldError) -> Self {
        Self::Unprocessable(FieldErrors::single(error))
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => Self::NotFound(msg),
            ServiceError::Model(ModelError::InvalidPayload(errors)) => Self::Unprocessable(errors),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        Self::Unprocessable(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, Json(json!({ "detail": msg }))).into_response(),
            ApiError::Unprocessable(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "detail": errors }))).into_response()
            }
            ApiError::Internal(cause) => {
                error!(error = %cause, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "detail": "Internal Server Error" }))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_codes() {
        let cases = [
            (ServiceError::not_found("Produto não encontrado"), StatusCode::NOT_FOUND),
            (ServiceError::Model(ModelError::InvalidPayload(FieldErrors::new())), StatusCode::UNPROCESSABLE_ENTITY),
            (ServiceError::Db("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ServiceError::Model(ModelError::Decode("x".into())), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }
}
