use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::product_actor::ProductError;

/// Stable, machine-readable identifiers. Clients match on these,
/// never on the human-readable message string.
pub mod error_code {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INTERNAL: &str = "INTERNAL";
}

impl ProductError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ProductError::NotFound(_) => error_code::NOT_FOUND,
            ProductError::ActorCommunicationError(_) => error_code::INTERNAL,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ProductError::NotFound(_) => StatusCode::NOT_FOUND,
            ProductError::ActorCommunicationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Renders `{"code": "NOT_FOUND", "message": "Product not found: 99"}`.
impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        let body = serde_json::json!({
            "code": self.error_code(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
