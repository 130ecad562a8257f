//! HTTP adapter: routes requests to the product client and maps results to
//! status codes.

pub mod error;
pub mod products;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::json;

use crate::clients::ProductClient;

/// Shared handler state. Cloned per request; holds only actor handles.
#[derive(Clone)]
pub struct ApiState {
    pub products: ProductClient,
}

/// Build the full API router.
pub fn router(products: ProductClient) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(products::routes())
        .with_state(ApiState { products })
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": "product-registry" })))
}
