use axum::{extract::State, Json};
use models::{Testimonial, TestimonialCreate};

use crate::errors::ApiError;
use crate::extract::Payload;
use crate::routes::AppState;

#[utoipa::path(get, path = "/api/testimonials", tag = "testimonials",
    responses((status = 200, body = [crate::openapi::TestimonialDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Testimonial>>, ApiError> {
    Ok(Json(state.services.testimonials.list().await?))
}

#[utoipa::path(post, path = "/api/testimonials", tag = "testimonials",
    request_body = crate::openapi::TestimonialCreateDoc,
    responses((status = 200, body = crate::openapi::TestimonialDoc), (status = 422)))]
pub async fn create(
    State(state): State<AppState>,
    Payload(input): Payload<TestimonialCreate>,
) -> Result<Json<Testimonial>, ApiError> {
    Ok(Json(state.services.testimonials.create(input).await?))
}
