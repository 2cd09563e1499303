use axum::{extract::State, Json};
use models::{StatusCheck, StatusCheckCreate};

use crate::errors::ApiError;
use crate::extract::Payload;
use crate::routes::AppState;

#[utoipa::path(post, path = "/api/status", tag = "status",
    request_body = crate::openapi::StatusCheckCreateDoc,
    responses((status = 200, body = crate::openapi::StatusCheckDoc), (status = 422)))]
pub async fn create(
    State(state): State<AppState>,
    Payload(input): Payload<StatusCheckCreate>,
) -> Result<Json<StatusCheck>, ApiError> {
    Ok(Json(state.services.status_checks.create(input).await?))
}

#[utoipa::path(get, path = "/api/status", tag = "status",
    responses((status = 200, body = [crate::openapi::StatusCheckDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<StatusCheck>>, ApiError> {
    Ok(Json(state.services.status_checks.list().await?))
}
