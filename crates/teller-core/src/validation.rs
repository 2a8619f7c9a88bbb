//! # Validation Module
//!
//! Input validation for requested withdrawal amounts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Boundary (apps/api)                                       │
//! │  ├── Field presence ("amount" missing/null)                         │
//! │  └── JSON type check (value is numeric at all)                      │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE                                               │
//! │  ├── Finite number check (NaN, ±inf)                                │
//! │  ├── Integer check (no fractional part)                             │
//! │  ├── Positivity check (> 0)                                         │
//! │  └── Minimum-withdrawal check (≥ smallest note)                     │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Breakdown engine                                          │
//! │  └── Representability (can the notes actually sum to it?)           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The check order above is part of the contract: the first failing check
//! short-circuits, so error messages are deterministic. An amount of 1 is
//! reported as below-minimum even though it is also unrepresentable.

use crate::error::{ValidationError, ValidationResult};

/// Validates a requested withdrawal amount.
///
/// Takes the raw numeric value as received at the boundary and, on success,
/// returns it as an exact integer. `minimum` is the smallest note of the
/// denomination set in use (2 for the production set).
///
/// ## Check Order (fixed, short-circuiting)
/// 1. Not finite (NaN, ±inf) → [`ValidationError::NotANumber`]
/// 2. Fractional part → [`ValidationError::NotInteger`]
/// 3. ≤ 0 → [`ValidationError::NotPositive`]
/// 4. < `minimum` → [`ValidationError::BelowMinimum`]
///
/// ## Example
/// ```rust
/// use teller_core::validation::validate_amount;
///
/// assert_eq!(validate_amount(380.0, 2), Ok(380));
/// assert!(validate_amount(100.5, 2).is_err());
/// assert!(validate_amount(0.0, 2).is_err());
/// assert!(validate_amount(1.0, 2).is_err());
/// ```
pub fn validate_amount(value: f64, minimum: i64) -> ValidationResult<i64> {
    if !value.is_finite() {
        return Err(ValidationError::NotANumber);
    }

    if value.fract() != 0.0 {
        return Err(ValidationError::NotInteger);
    }

    let amount = value as i64;

    if amount <= 0 {
        return Err(ValidationError::NotPositive);
    }

    if amount < minimum {
        return Err(ValidationError::BelowMinimum { minimum });
    }

    Ok(amount)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_integers_at_or_above_minimum() {
        assert_eq!(validate_amount(2.0, 2), Ok(2));
        assert_eq!(validate_amount(3.0, 2), Ok(3));
        assert_eq!(validate_amount(380.0, 2), Ok(380));
        assert_eq!(validate_amount(100_000.0, 2), Ok(100_000));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        assert_eq!(validate_amount(f64::NAN, 2), Err(ValidationError::NotANumber));
        assert_eq!(
            validate_amount(f64::INFINITY, 2),
            Err(ValidationError::NotANumber)
        );
        assert_eq!(
            validate_amount(f64::NEG_INFINITY, 2),
            Err(ValidationError::NotANumber)
        );
    }

    #[test]
    fn test_rejects_fractional_values() {
        assert_eq!(validate_amount(100.5, 2), Err(ValidationError::NotInteger));
        assert_eq!(validate_amount(2.001, 2), Err(ValidationError::NotInteger));
    }

    #[test]
    fn test_rejects_zero_and_negative() {
        assert_eq!(validate_amount(0.0, 2), Err(ValidationError::NotPositive));
        assert_eq!(validate_amount(-50.0, 2), Err(ValidationError::NotPositive));
    }

    #[test]
    fn test_rejects_below_minimum() {
        assert_eq!(
            validate_amount(1.0, 2),
            Err(ValidationError::BelowMinimum { minimum: 2 })
        );
    }

    #[test]
    fn test_check_order_short_circuits() {
        // A negative fractional value fails the integer check first,
        // never reaching the positivity check.
        assert_eq!(validate_amount(-0.5, 2), Err(ValidationError::NotInteger));
        // NaN fails the number check before anything else.
        assert_eq!(validate_amount(f64::NAN, 2), Err(ValidationError::NotANumber));
    }

    #[test]
    fn test_minimum_is_injected() {
        // With a set whose smallest note is 5, 3 is below minimum.
        assert_eq!(
            validate_amount(3.0, 5),
            Err(ValidationError::BelowMinimum { minimum: 5 })
        );
        assert_eq!(validate_amount(5.0, 5), Ok(5));
    }
}
