use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::{debug, instrument};

use crate::domain::{Product, ProductId};
use crate::product_actor::ProductError;

use super::ApiState;

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", get(get_product))
}

#[instrument(skip(state))]
pub async fn list_products(State(state): State<ApiState>) -> Result<Json<Vec<Product>>, ProductError> {
    let products = state.products.list_products().await?;
    debug!(count = products.len(), "Listing products");
    Ok(Json(products))
}

/// Stores the payload as-is (no validation) and echoes the stored product.
#[instrument(skip(state, product))]
pub async fn create_product(
    State(state): State<ApiState>,
    Json(product): Json<Product>,
) -> Result<impl IntoResponse, ProductError> {
    let stored = state.products.create_product(product).await?;
    Ok((StatusCode::CREATED, [(header::LOCATION, "/products")], Json(stored)))
}

#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<ApiState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>, ProductError> {
    state.products.get_product(id).await.map(Json)
}
