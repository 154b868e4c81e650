// LogTriage - api/error.rs
//
// Typed error for the HTTP boundary. Carries a message plus the status
// code it maps to, and renders as the service's structured JSON error
// body. No string-based error propagation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

/// An error produced by an API handler.
///
/// Every variant of failure the boundary can report flows through this
/// type so clients always receive the same body shape:
/// `{"error": true, "message": <string>, "status": <code>}`.
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status: StatusCode,
}

impl ApiError {
    /// Request was well-formed JSON but the content fails validation.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.status)
    }
}

impl std::error::Error for ApiError {}

/// Convenience alias for handler return types.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status, message = %self.message, "Request rejected");
        let body = Json(json!({
            "error": true,
            "message": self.message,
            "status": self.status.as_u16(),
        }));
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_422() {
        let err = ApiError::validation("log_text must not be empty");
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message, "log_text must not be empty");
    }

    #[test]
    fn test_display_includes_message_and_status() {
        let err = ApiError::validation("bad request body");
        let rendered = err.to_string();
        assert!(rendered.contains("bad request body"));
        assert!(rendered.contains("422"));
    }

    #[test]
    fn test_into_response_preserves_status() {
        let response = ApiError::validation("nope").into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
