use axum::{extract::State, Json};
use common::types::MessageResponse;

use crate::errors::ApiError;
use crate::routes::AppState;

pub const SEEDED: &str = "Dados iniciais criados com sucesso";

/// Fill empty product and testimonial collections with sample data.
#[utoipa::path(post, path = "/api/seed", tag = "seed",
    responses((status = 200, body = crate::openapi::MessageDoc)))]
pub async fn seed(State(state): State<AppState>) -> Result<Json<MessageResponse>, ApiError> {
    state.services.seed().await?;
    Ok(Json(MessageResponse::new(SEEDED)))
}
