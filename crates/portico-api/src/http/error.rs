//! Application error type mapping to HTTP status codes.
//!
//! The wire shape is the flat `{"error": "..."}` body the site's front-end
//! scripts already parse, not an envelope.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use portico_types::error::TransportError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// A required request field is missing or empty.
    Validation(String),
    /// The datastore rejected the submission.
    Datastore(TransportError),
    /// Anything else.
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Datastore(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to save submission: {err}"),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal server error: {msg}"),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let response = AppError::Validation("Message is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn datastore_failure_maps_to_server_error() {
        let response = AppError::Datastore(TransportError::Http {
            status: 403,
            message: "row level security violation".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
