//! # teller-core: Pure Business Logic for Teller
//!
//! This crate is the **heart** of Teller. It contains the withdrawal
//! validation and note-breakdown logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Teller Architecture                           │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                    HTTP Boundary (apps/api)                    │ │
//! │  │   POST /api/withdraw ──► extract amount ──► map result        │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │               ★ teller-core (THIS CRATE) ★                    │ │
//! │  │                                                               │ │
//! │  │   ┌──────────────┐  ┌────────────┐  ┌─────────────────────┐  │ │
//! │  │   │denominations │  │ validation │  │      breakdown      │  │ │
//! │  │   │  note set    │  │   checks   │  │  min-note-count DP  │  │ │
//! │  │   └──────────────┘  └────────────┘  └─────────────────────┘  │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO TRANSPORT • PURE FUNCTIONS                      │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`denominations`] - The fixed banknote set and its invariants
//! - [`validation`] - Ordered input checks for requested amounts
//! - [`breakdown`] - Minimum-note-count engine (dynamic programming)
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every call is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, transport concerns are FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed enums, never strings or panics
//! 4. **Injected Configuration**: The engine takes its denomination set as a
//!    value, so tests can exercise the DP against non-canonical sets
//!
//! ## Example Usage
//!
//! ```rust
//! use teller_core::{validate_amount, BreakdownEngine};
//!
//! let engine = BreakdownEngine::standard();
//!
//! // Validator first, engine second - the order is part of the contract.
//! let amount = validate_amount(380.0, engine.denominations().minimum())?;
//! let breakdown = engine.breakdown(amount)?;
//!
//! assert_eq!(breakdown.count(100), 3);
//! assert_eq!(breakdown.count(50), 1);
//! assert_eq!(breakdown.count(20), 1);
//! assert_eq!(breakdown.count(10), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod breakdown;
pub mod denominations;
pub mod error;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use teller_core::BreakdownEngine` instead of
// `use teller_core::breakdown::BreakdownEngine`

pub use breakdown::{Breakdown, BreakdownEngine, MAX_AMOUNT};
pub use denominations::{DenominationSet, STANDARD_NOTES};
pub use error::{BreakdownError, DenominationError, ValidationError};
pub use validation::validate_amount;
