use axum::Json;
use common::types::MessageResponse;

pub const WELCOME: &str = "Petstore Dr. Artur Teixeira API";

#[utoipa::path(get, path = "/api/", tag = "info",
    responses((status = 200, body = crate::openapi::MessageDoc)))]
pub async fn index() -> Json<MessageResponse> {
    Json(MessageResponse::new(WELCOME))
}
