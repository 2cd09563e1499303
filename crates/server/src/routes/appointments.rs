use axum::{
    extract::{Path, Query, State},
    Json,
};
use common::types::MessageResponse;
use models::validation::FieldError;
use models::{Appointment, AppointmentCreate};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::errors::ApiError;
use crate::extract::Payload;
use crate::routes::AppState;

pub const STATUS_UPDATED: &str = "Status atualizado com sucesso";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatusQuery {
    /// New status; any text is accepted.
    pub status: Option<String>,
}

#[utoipa::path(get, path = "/api/appointments", tag = "appointments",
    responses((status = 200, body = [crate::openapi::AppointmentDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Appointment>>, ApiError> {
    Ok(Json(state.services.appointments.list().await?))
}

#[utoipa::path(post, path = "/api/appointments", tag = "appointments",
    request_body = crate::openapi::AppointmentCreateDoc,
    responses((status = 200, body = crate::openapi::AppointmentDoc), (status = 422)))]
pub async fn create(
    State(state): State<AppState>,
    Payload(input): Payload<AppointmentCreate>,
) -> Result<Json<Appointment>, ApiError> {
    Ok(Json(state.services.appointments.create(input).await?))
}

#[utoipa::path(get, path = "/api/appointments/{id}", tag = "appointments",
    params(("id" = String, Path, description = "Appointment id")),
    responses((status = 200, body = crate::openapi::AppointmentDoc), (status = 404, body = crate::openapi::DetailDoc)))]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Appointment>, ApiError> {
    Ok(Json(state.services.appointments.get(&id).await?))
}

#[utoipa::path(patch, path = "/api/appointments/{id}", tag = "appointments",
    params(("id" = String, Path, description = "Appointment id"), StatusQuery),
    responses(
        (status = 200, body = crate::openapi::MessageDoc),
        (status = 404, body = crate::openapi::DetailDoc),
        (status = 422)
    ))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let status = query
        .status
        .ok_or_else(|| ApiError::field(FieldError::missing("query", "status")))?;
    state.services.appointments.update_status(&id, &status).await?;
    Ok(Json(MessageResponse::new(STATUS_UPDATED)))
}
