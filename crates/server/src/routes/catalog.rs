//! Clinic reference data. No store access.

use axum::{extract::Query, Json};
use models::validation::FieldError;
use serde::{Deserialize, Serialize};
use service::reference::{self, Category, ClinicService};
use utoipa::IntoParams;

use crate::errors::ApiError;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: &'static [Category],
}

#[derive(Debug, Serialize)]
pub struct ServicesResponse {
    pub services: &'static [ClinicService],
}

#[derive(Debug, Serialize)]
pub struct AvailableTimesResponse {
    pub available_times: Vec<&'static str>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateQuery {
    /// Day to check, e.g. `2024-07-10`.
    pub date: Option<String>,
}

#[utoipa::path(get, path = "/api/categories", tag = "catalog",
    responses((status = 200, body = crate::openapi::CategoriesDoc)))]
pub async fn categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse { categories: reference::categories() })
}

#[utoipa::path(get, path = "/api/services", tag = "catalog",
    responses((status = 200, body = crate::openapi::ServicesDoc)))]
pub async fn services() -> Json<ServicesResponse> {
    Json(ServicesResponse { services: reference::services() })
}

#[utoipa::path(get, path = "/api/available-times", tag = "catalog", params(DateQuery),
    responses((status = 200, body = crate::openapi::AvailableTimesDoc), (status = 422)))]
pub async fn available_times(Query(query): Query<DateQuery>) -> Result<Json<AvailableTimesResponse>, ApiError> {
    let date = query
        .date
        .ok_or_else(|| ApiError::field(FieldError::missing("query", "date")))?;
    Ok(Json(AvailableTimesResponse { available_times: reference::available_times(&date) }))
}
