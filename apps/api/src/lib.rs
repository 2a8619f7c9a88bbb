//! # Teller API
//!
//! HTTP boundary for the teller-core breakdown engine.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Teller API Routes                          │
//! │                                                                     │
//! │  POST /api/withdraw   { "amount": 380 }                             │
//! │    200 → { "100": 3, "50": 1, "20": 1, "10": 1, "5": 0, "2": 0 }    │
//! │    400 → { "error": "...", "message": "..." }                       │
//! │    500 → generic internal error envelope                            │
//! │                                                                     │
//! │  GET /api/health                                                    │
//! │    200 → { "status": "OK", "message": "...", "timestamp": "..." }   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything with business meaning happens in teller-core; this crate only
//! extracts the amount, invokes Validator then Breakdown Engine, and renders
//! the outcome.

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{health_handler, withdraw_handler, AppState};

/// Builds the application router.
///
/// Shared by `main` and tests so both exercise the same routing table.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/withdraw", post(withdraw_handler))
        .route("/api/health", get(health_handler))
        .with_state(state)
}
