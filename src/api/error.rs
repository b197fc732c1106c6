//! Error types and response mapping for the API server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced by API handlers.
///
/// Not-found is deliberately absent: update and delete report a missing id
/// as a `null`/`false` contract value, not a fault.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The record store failed to read or write its backing file.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Map error variant to HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable error type string for JSON responses.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Store(_) => "store_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        let body = serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        });
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    fn store_error() -> ApiError {
        ApiError::Store(StoreError::Write {
            path: PathBuf::from("/tmp/users.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        })
    }

    #[test]
    fn store_error_maps_to_internal_server_error() {
        let err = store_error();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_type(), "store_error");
    }

    #[test]
    fn error_response_is_json() {
        let response = store_error().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }
}
