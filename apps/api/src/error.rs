//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stitch                                 │
//! │                                                                         │
//! │  Handler ── Result<T, ApiError>                                        │
//! │     │                                                                   │
//! │     ├─ JsonRejection ─────────────────────────► 400 INVALID_JSON        │
//! │     ├─ StoreError::Domain(InvalidOrder/...) ──► 400 VALIDATION_ERROR    │
//! │     ├─ StoreError::Domain(OrderNotFound) ─────► 404 NOT_FOUND           │
//! │     └─ StoreError::Io / Serialization ────────► 500 STORAGE_ERROR       │
//! │                                                 (detail logged only)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Response Body
//! ```json
//! { "error": "Invalid order: customer is required", "code": "VALIDATION_ERROR" }
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use stitch_core::CoreError;
use stitch_store::StoreError;

/// Error returned from HTTP handlers.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub error: String,

    /// Extra diagnostic text, only on endpoints that expose it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Request body was not valid JSON (400)
    InvalidJson,

    /// Reading or writing the data file failed (500)
    StorageError,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError | ErrorCode::InvalidJson => StatusCode::BAD_REQUEST,
            ErrorCode::StorageError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            error: message.into(),
            details: None,
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Attaches diagnostic details to the response body.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::OrderNotFound(_) => ApiError::new(ErrorCode::NotFound, err.to_string()),
            CoreError::InvalidOrder(_)
            | CoreError::InvalidConfig(_)
            | CoreError::InvalidQuote(_)
            | CoreError::InvalidSettings(_) => ApiError::validation(err.to_string()),
        }
    }
}

/// Converts store errors to API errors.
///
/// Storage failures are logged with their cause and reported to the client
/// with a generic message.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Domain(core) => core.into(),
            other => {
                tracing::error!(error = %other, "Storage operation failed");
                ApiError::new(ErrorCode::StorageError, "Failed to access order data")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(ErrorCode::InvalidJson, rejection.body_text())
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use stitch_core::ValidationError;

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::OrderNotFound("abc".into()).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.error, "Order not found: abc");

        let err: ApiError = CoreError::InvalidConfig(ValidationError::MustBeNonNegative {
            field: "basePrice".into(),
        })
        .into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_storage_error_is_generic() {
        let err: ApiError = StoreError::Io(std::io::Error::other("/secret/path: denied")).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.error.contains("secret"));
    }

    #[test]
    fn test_body_shape() {
        let body = serde_json::to_value(ApiError::validation("id is required")).unwrap();
        assert_eq!(body["error"], "id is required");
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body.get("details").is_none());
    }
}
