//! # HTTP Handlers
//!
//! Route handlers for the withdrawal API.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  POST /api/withdraw   { "amount": 380 }                             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  extract "amount" ── missing/null? ── 400 "field is required"      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  numeric? ─────────── no? ─────────── 400 "must be a number"       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  validate_amount ──── Err? ────────── 400 validator message        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  engine.breakdown ─── Err? ────────── 400 engine message           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  200  { "100": 3, "50": 1, "20": 1, "10": 1, "5": 0, "2": 0 }       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The whole flow is the pure [`process_withdrawal`] function; the axum
//! handlers are thin wrappers around it, so the mapping is unit-testable
//! without a running server.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use teller_core::{validate_amount, Breakdown, BreakdownEngine};
use tracing::{info, warn};

use crate::error::ApiError;

// =============================================================================
// Shared State
// =============================================================================

/// Shared application state.
///
/// The engine is stateless and cheap, but sharing one instance keeps the
/// denomination set in a single place.
pub struct AppState {
    pub engine: BreakdownEngine,
}

impl AppState {
    /// State over the production denomination set.
    pub fn standard() -> Self {
        AppState {
            engine: BreakdownEngine::standard(),
        }
    }
}

// =============================================================================
// Withdrawal
// =============================================================================

/// Handler for `POST /api/withdraw`.
pub async fn withdraw_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Breakdown>, ApiError> {
    match process_withdrawal(&state.engine, &body) {
        Ok(breakdown) => {
            info!(
                amount = breakdown.total(),
                notes = breakdown.notes(),
                "Withdrawal dispensed"
            );
            Ok(Json(breakdown))
        }
        Err(err) => {
            warn!(status = %err.status(), message = err.message(), "Withdrawal rejected");
            Err(err)
        }
    }
}

/// Extracts the amount from the request payload, runs the Validator, then
/// the Breakdown Engine, and maps each outcome per the boundary contract.
///
/// Pure: no I/O, no logging, fully deterministic, so tests drive it
/// directly with JSON values.
pub fn process_withdrawal(engine: &BreakdownEngine, body: &Value) -> Result<Breakdown, ApiError> {
    let raw = match body.get("amount") {
        None | Some(Value::Null) => {
            return Err(ApiError::validation("the amount field is required"))
        }
        Some(value) => value,
    };

    let Some(value) = raw.as_f64() else {
        return Err(ApiError::validation("the amount must be a number"));
    };

    let amount = validate_amount(value, engine.denominations().minimum())?;
    let breakdown = engine.breakdown(amount)?;

    Ok(breakdown)
}

// =============================================================================
// Health
// =============================================================================

/// Body of the health endpoint response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
}

/// Handler for `GET /api/health`.
///
/// Fixed operational indicator plus the current timestamp; carries no
/// business behavior.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "Teller API is operational",
        timestamp: Utc::now().to_rfc3339(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;

    fn engine() -> BreakdownEngine {
        BreakdownEngine::standard()
    }

    #[test]
    fn test_missing_amount_field() {
        let err = process_withdrawal(&engine(), &json!({})).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "the amount field is required");
    }

    #[test]
    fn test_null_amount_field() {
        let err = process_withdrawal(&engine(), &json!({ "amount": null })).unwrap_err();
        assert_eq!(err.message(), "the amount field is required");
    }

    #[test]
    fn test_non_numeric_amount() {
        for body in [json!({ "amount": "380" }), json!({ "amount": true })] {
            let err = process_withdrawal(&engine(), &body).unwrap_err();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
            assert_eq!(err.message(), "the amount must be a number");
        }
    }

    #[test]
    fn test_fractional_amount_fails_validation_before_breakdown() {
        let err = process_withdrawal(&engine(), &json!({ "amount": 100.5 })).unwrap_err();
        assert_eq!(err.message(), "the amount must be an integer");
    }

    #[test]
    fn test_zero_and_below_minimum() {
        let err = process_withdrawal(&engine(), &json!({ "amount": 0 })).unwrap_err();
        assert_eq!(err.message(), "the amount must be greater than zero");

        // 1 is rejected by the minimum-withdrawal policy, never by the engine.
        let err = process_withdrawal(&engine(), &json!({ "amount": 1 })).unwrap_err();
        assert_eq!(err.message(), "the minimum withdrawal amount is 2");
    }

    #[test]
    fn test_unrepresentable_amount_carries_engine_message() {
        let err = process_withdrawal(&engine(), &json!({ "amount": 73 })).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.message().contains("73"));
        assert!(err.message().contains("100, 50, 20, 10, 5, 2"));
    }

    #[test]
    fn test_successful_withdrawal_body() {
        let breakdown = process_withdrawal(&engine(), &json!({ "amount": 380 })).unwrap();
        let body = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(
            body,
            json!({ "100": 3, "50": 1, "20": 1, "10": 1, "5": 0, "2": 0 })
        );
    }

    #[tokio::test]
    async fn test_health_reports_operational() {
        let Json(health) = health_handler().await;
        assert_eq!(health.status, "OK");
        assert!(!health.timestamp.is_empty());
    }
}
