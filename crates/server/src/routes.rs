use std::path::Path;

use axum::{
    extract::Request,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use common::types::Health;
use service::AppServices;
use tower::ServiceExt;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::errors::ApiError;
use crate::openapi::ApiDoc;

pub mod root;
pub mod status;
pub mod products;
pub mod appointments;
pub mod testimonials;
pub mod contact;
pub mod catalog;
pub mod seed;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub services: AppServices,
}

impl AppState {
    pub fn new(services: AppServices) -> Self {
        Self { services }
    }
}

#[utoipa::path(get, path = "/health", tag = "info",
    responses((status = 200, body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".into())
}

fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

/// Every `/api` route.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api", get(root::index))
        .route("/api/", get(root::index))
        .route("/api/openapi.json", get(openapi_json))
        .route("/api/status", get(status::list).post(status::create))
        .route("/api/products", get(products::list).post(products::create))
        .route("/api/products/:id", get(products::get))
        .route("/api/appointments", get(appointments::list).post(appointments::create))
        .route("/api/appointments/:id", get(appointments::get).patch(appointments::update_status))
        .route("/api/testimonials", get(testimonials::list).post(testimonials::create))
        .route("/api/contact", post(contact::create))
        .route("/api/categories", get(catalog::categories))
        .route("/api/services", get(catalog::services))
        .route("/api/available-times", get(catalog::available_times))
        .route("/api/seed", post(seed::seed))
}

/// Build the full application: API, health check and optional static frontend.
pub fn build_router(state: AppState, cors: CorsLayer, static_dir: Option<&Path>) -> Router {
    let app = api_routes().route("/health", get(health));

    // Unknown non-API paths go to the frontend (SPA fallback) when one is served
    let app = match static_dir {
        Some(dir) => {
            let frontend = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
            app.fallback(move |req: Request| {
                let frontend = frontend.clone();
                async move {
                    if is_api_path(req.uri().path()) {
                        return not_found().await.into_response();
                    }
                    match frontend.oneshot(req).await {
                        Ok(res) => res.into_response(),
                        Err(never) => match never {},
                    }
                }
            })
        }
        None => app.fallback(not_found),
    };

    app.with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
