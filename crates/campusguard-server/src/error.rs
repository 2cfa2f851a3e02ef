//! Mapping engine errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error returned from handlers. Client errors carry their message; every
/// other failure is logged and reported generically.
#[derive(Debug)]
pub struct ApiError(pub campusguard_core::Error);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    pub fn body(&self) -> serde_json::Value {
        let message = if self.0.is_client_error() {
            self.0.to_string()
        } else {
            INTERNAL_ERROR_MESSAGE.to_string()
        };
        serde_json::json!({
            "success": false,
            "error": message,
        })
    }
}

impl<E: Into<campusguard_core::Error>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if !self.0.is_client_error() {
            error!("Request failed: {}", self.0);
        }
        (self.status(), Json(self.body())).into_response()
    }
}
