//! Request-path error taxonomy and its HTTP contract.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Caller-facing message for every validation failure shape.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid body, missing or invalid url";

/// Caller-facing message for every internal failure; detail stays in logs.
pub const INTERNAL_MESSAGE: &str = "Unexpected error";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors produced while handling a shorten request.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body unparseable, field missing, or URL malformed.
    #[error("{message}")]
    Validation { message: String },

    /// Conditional create observed an existing key (lost the allocation race).
    #[error("short code already taken: {code}")]
    Conflict { code: String },

    /// Store existence check failed for a reason other than "not found".
    #[error("existence probe failed: {message}")]
    Probe { message: String },

    /// Store create-write failed for a non-conflict reason.
    #[error("store write failed: {message}")]
    Write { message: String },

    /// Allocation retry ceiling reached without finding a free code.
    #[error("no free short code after {attempts} attempts")]
    Exhausted { attempts: usize },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// The single validation error surfaced for all malformed-input shapes.
    pub fn invalid_input() -> Self {
        Self::validation(INVALID_INPUT_MESSAGE)
    }

    pub fn conflict(code: impl Into<String>) -> Self {
        Self::Conflict { code: code.into() }
    }

    pub fn probe(message: impl Into<String>) -> Self {
        Self::Probe {
            message: message.into(),
        }
    }

    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(_: validator::ValidationErrors) -> Self {
        Self::invalid_input()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");

        // Validation failures return 404, not 400: existing clients of this
        // endpoint depend on that status.
        let (status, message) = match self {
            AppError::Validation { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { .. }
            | AppError::Probe { .. }
            | AppError::Write { .. }
            | AppError::Exhausted { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_MESSAGE.to_string(),
            ),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn response_parts(error: AppError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_maps_to_404_with_message() {
        let (status, body) = response_parts(AppError::invalid_input()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], INVALID_INPUT_MESSAGE);
    }

    #[tokio::test]
    async fn test_probe_error_maps_to_500_without_detail() {
        let (status, body) =
            response_parts(AppError::probe("connection reset by s3.amazonaws.com")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], INTERNAL_MESSAGE);
    }

    #[tokio::test]
    async fn test_write_error_maps_to_500() {
        let (status, _) = response_parts(AppError::write("access denied")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_conflict_maps_to_500() {
        let (status, body) = response_parts(AppError::conflict("abc123")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], INTERNAL_MESSAGE);
    }

    #[tokio::test]
    async fn test_exhausted_maps_to_500() {
        let (status, body) = response_parts(AppError::Exhausted { attempts: 10 }).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], INTERNAL_MESSAGE);
    }

    #[tokio::test]
    async fn test_response_shaping_is_stable_across_calls() {
        let first = response_parts(AppError::invalid_input()).await;
        let second = response_parts(AppError::invalid_input()).await;

        assert_eq!(first, second);
    }

    #[test]
    fn test_validator_errors_convert_to_invalid_input() {
        let error: AppError = validator::ValidationErrors::new().into();

        assert!(matches!(
            error,
            AppError::Validation { ref message } if message == INVALID_INPUT_MESSAGE
        ));
    }
}
