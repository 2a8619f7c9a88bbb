//! # Error Types
//!
//! Domain-specific error types for teller-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                  │
//! │                                                                     │
//! │  teller-core errors (this file)                                     │
//! │  ├── DenominationError - Bad denomination set construction          │
//! │  ├── ValidationError   - Requested amount fails input validation    │
//! │  └── BreakdownError    - Amount cannot be broken into notes         │
//! │                                                                     │
//! │  API errors (in app)                                                │
//! │  └── ApiError          - What HTTP clients see (serialized)         │
//! │                                                                     │
//! │  Flow: ValidationError / BreakdownError → ApiError → Client        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (amount, available notes)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message, so the message
//!    text is part of the contract and covered by tests

use thiserror::Error;

// =============================================================================
// Denomination Error
// =============================================================================

/// Errors raised when constructing a [`DenominationSet`](crate::DenominationSet).
///
/// These only occur in test or setup code that builds custom sets; the
/// production set is a compile-time constant and can never hit them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DenominationError {
    /// The set contains no values at all.
    #[error("denomination set must not be empty")]
    Empty,

    /// A note value of zero or less makes no sense.
    #[error("denomination {value} must be positive")]
    NotPositive { value: i64 },

    /// Values must be strictly descending, which also rules out duplicates.
    #[error("denomination {value} breaks descending order")]
    NotDescending { value: i64 },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for a requested withdrawal amount.
///
/// These occur before any breakdown computation runs. The checks are
/// ordered, and the first failing check wins — see
/// [`validate_amount`](crate::validation::validate_amount).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is not a usable number (NaN or infinite).
    #[error("the amount must be a number")]
    NotANumber,

    /// The value is numeric but carries a fractional part.
    #[error("the amount must be an integer")]
    NotInteger,

    /// Zero and negative amounts cannot be withdrawn.
    #[error("the amount must be greater than zero")]
    NotPositive,

    /// Positive, but below the smallest note we can dispense.
    ///
    /// ## Policy Note
    /// This is the established minimum-withdrawal policy, not a
    /// decomposability check: 1 is rejected here, never by the engine.
    #[error("the minimum withdrawal amount is {minimum}")]
    BelowMinimum { minimum: i64 },
}

// =============================================================================
// Breakdown Error
// =============================================================================

/// Errors raised by the breakdown engine for a validated amount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BreakdownError {
    /// No non-negative combination of the available notes sums to the amount.
    ///
    /// ## When This Occurs
    /// With the standard set every odd amount lands here, since the
    /// smallest note is 2 and all notes are even.
    ///
    /// `available` is the denomination list rendered in set order
    /// (e.g. `"100, 50, 20, 10, 5, 2"`), so the message is deterministic
    /// and testable.
    #[error("cannot dispense {amount}: available notes are {available}")]
    Unrepresentable { amount: i64, available: String },

    /// Amount exceeds the engine's table budget.
    ///
    /// The DP table is O(amount) in memory, so the engine caps the amount
    /// it will compute for rather than allocating unbounded tables.
    #[error("amount {amount} exceeds the maximum withdrawal of {max}")]
    AmountTooLarge { amount: i64, max: i64 },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convenience type alias for breakdown results.
pub type BreakdownResult<T> = Result<T, BreakdownError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::NotANumber.to_string(),
            "the amount must be a number"
        );
        assert_eq!(
            ValidationError::NotInteger.to_string(),
            "the amount must be an integer"
        );
        assert_eq!(
            ValidationError::NotPositive.to_string(),
            "the amount must be greater than zero"
        );
        assert_eq!(
            ValidationError::BelowMinimum { minimum: 2 }.to_string(),
            "the minimum withdrawal amount is 2"
        );
    }

    #[test]
    fn test_unrepresentable_message_names_amount_and_notes() {
        let err = BreakdownError::Unrepresentable {
            amount: 73,
            available: "100, 50, 20, 10, 5, 2".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("73"));
        assert!(msg.contains("100, 50, 20, 10, 5, 2"));
    }

    #[test]
    fn test_denomination_error_messages() {
        assert_eq!(
            DenominationError::Empty.to_string(),
            "denomination set must not be empty"
        );
        assert_eq!(
            DenominationError::NotPositive { value: -5 }.to_string(),
            "denomination -5 must be positive"
        );
        assert_eq!(
            DenominationError::NotDescending { value: 50 }.to_string(),
            "denomination 50 breaks descending order"
        );
    }
}
