use axum::{extract::State, Json};
use models::{ContactMessage, ContactMessageCreate};

use crate::errors::ApiError;
use crate::extract::Payload;
use crate::routes::AppState;

#[utoipa::path(post, path = "/api/contact", tag = "contact",
    request_body = crate::openapi::ContactMessageCreateDoc,
    responses((status = 200, body = crate::openapi::ContactMessageDoc), (status = 422)))]
pub async fn create(
    State(state): State<AppState>,
    Payload(input): Payload<ContactMessageCreate>,
) -> Result<Json<ContactMessage>, ApiError> {
    Ok(Json(state.services.contacts.create(input).await?))
}
