//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow in Teller                           │
//! │                                                                     │
//! │  Client                       Rust Backend                         │
//! │  ──────                       ────────────                         │
//! │                                                                     │
//! │  POST /api/withdraw                                                 │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │  Handler: Result<Json<Breakdown>, ApiError>                   │ │
//! │  │         │                                                     │ │
//! │  │         ├── ValidationError ── 400 + validator message ──────►│ │
//! │  │         ├── BreakdownError ─── 400 + engine message ─────────►│ │
//! │  │         └── anything else ──── 500 + generic message ────────►│ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! │                                                                     │
//! │  { "error": "validation failed",                                   │
//! │    "message": "the amount must be an integer" }                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Domain errors carry their message into the envelope verbatim; the
//! boundary never rewrites them. Conversions are explicit pattern matches
//! on the core enums, not downcasts.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use teller_core::{BreakdownError, ValidationError};

/// The JSON error envelope every failed request receives.
///
/// ```json
/// { "error": "validation failed", "message": "the amount field is required" }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Short category for programmatic handling
    pub error: String,

    /// Human-readable message for display
    pub message: String,
}

/// API error returned from handlers.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    response: ErrorResponse,
}

impl ApiError {
    /// A 400 rejection from the validation layer.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            response: ErrorResponse {
                error: "validation failed".to_string(),
                message: message.into(),
            },
        }
    }

    /// A 400 rejection from the breakdown engine.
    pub fn withdrawal(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            response: ErrorResponse {
                error: "withdrawal failed".to_string(),
                message: message.into(),
            },
        }
    }

    /// A 500 for unexpected faults. Deliberately generic: internal detail
    /// never leaks into the envelope.
    pub fn internal() -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            response: ErrorResponse {
                error: "internal error".to_string(),
                message: "an unexpected error occurred while processing the withdrawal"
                    .to_string(),
            },
        }
    }

    /// The HTTP status this error renders as.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The message carried in the envelope.
    pub fn message(&self) -> &str {
        &self.response.message
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::NotANumber
            | ValidationError::NotInteger
            | ValidationError::NotPositive
            | ValidationError::BelowMinimum { .. } => ApiError::validation(err.to_string()),
        }
    }
}

impl From<BreakdownError> for ApiError {
    fn from(err: BreakdownError) -> Self {
        match err {
            BreakdownError::Unrepresentable { .. } | BreakdownError::AmountTooLarge { .. } => {
                ApiError::withdrawal(err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validator_message_passes_through_verbatim() {
        let err: ApiError = ValidationError::NotInteger.into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "the amount must be an integer");
    }

    #[test]
    fn test_engine_message_passes_through_verbatim() {
        let core_err = BreakdownError::Unrepresentable {
            amount: 73,
            available: "100, 50, 20, 10, 5, 2".to_string(),
        };
        let expected = core_err.to_string();
        let err: ApiError = core_err.into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), expected);
    }

    #[test]
    fn test_internal_error_is_generic() {
        let err = ApiError::internal();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.response.error, "internal error");
    }
}
