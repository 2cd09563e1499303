use axum::{
    extract::{Path, Query, State},
    Json,
};
use models::validation::{parse_bool, FieldError};
use models::{Product, ProductCreate, ProductFilter};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::errors::ApiError;
use crate::extract::Payload;
use crate::routes::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Exact category id; empty means any.
    pub category: Option<String>,
    /// Boolean (`true/false/1/0/yes/no/on/off`).
    pub featured: Option<String>,
}

impl ProductQuery {
    fn into_filter(self) -> Result<ProductFilter, ApiError> {
        let featured = match self.featured.as_deref() {
            None => None,
            Some(raw) => Some(parse_bool(raw).ok_or_else(|| {
                ApiError::field(FieldError::new(
                    ["query", "featured"],
                    "Input should be a valid boolean, unable to interpret input",
                    "bool_parsing",
                ))
            })?),
        };
        Ok(ProductFilter { category: self.category, featured })
    }
}

#[utoipa::path(get, path = "/api/products", tag = "products", params(ProductQuery),
    responses((status = 200, body = [crate::openapi::ProductDoc]), (status = 422)))]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let filter = query.into_filter()?;
    Ok(Json(state.services.products.list(&filter).await?))
}

#[utoipa::path(get, path = "/api/products/{id}", tag = "products",
    params(("id" = String, Path, description = "Product id")),
    responses((status = 200, body = crate::openapi::ProductDoc), (status = 404, body = crate::openapi::DetailDoc)))]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.services.products.get(&id).await?))
}

#[utoipa::path(post, path = "/api/products", tag = "products",
    request_body = crate::openapi::ProductCreateDoc,
    responses((status = 200, body = crate::openapi::ProductDoc), (status = 422)))]
pub async fn create(
    State(state): State<AppState>,
    Payload(input): Payload<ProductCreate>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.services.products.create(input).await?))
}
