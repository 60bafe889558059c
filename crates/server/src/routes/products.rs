use std::collections::HashMap;

use axum::{extract::State, http::StatusCode, Json};
use models::product::{Product, ProductQuery};

use crate::errors::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(product): JsonBody<Product>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let created = state.products.create(product).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, Product>>, ApiError> {
    Ok(Json(state.products.list().await?))
}

/// POST /product: lookup by name, optionally priced in another currency.
pub async fn get_product(
    State(state): State<AppState>,
    JsonBody(query): JsonBody<ProductQuery>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.products.get(&query).await?))
}
