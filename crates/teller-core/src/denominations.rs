//! # Denominations Module
//!
//! The fixed set of banknote values available for dispensing.
//!
//! ## Design Decisions
//! - **Injected, not hardcoded**: the breakdown engine receives a
//!   [`DenominationSet`] instead of reading a global, so tests can exercise
//!   the DP logic against alternate sets (e.g. `[4, 3]`) independently of
//!   the production set.
//! - **Descending order is an invariant**: the order drives tie-breaking in
//!   the engine and the rendering of error messages, so it is validated at
//!   construction instead of re-sorted on every use.

use std::fmt;

use crate::error::DenominationError;

// =============================================================================
// Constants
// =============================================================================

/// The production note values, largest first.
///
/// Values are distinct, positive, known at compile time, never mutated.
pub const STANDARD_NOTES: [i64; 6] = [100, 50, 20, 10, 5, 2];

// =============================================================================
// Denomination Set
// =============================================================================

/// An immutable, ordered set of banknote values, descending.
///
/// ## Invariants
/// - Non-empty
/// - Every value positive
/// - Strictly descending (which also guarantees distinctness)
///
/// ## Example
/// ```rust
/// use teller_core::DenominationSet;
///
/// let set = DenominationSet::standard();
/// assert_eq!(set.minimum(), 2);
/// assert_eq!(set.to_string(), "100, 50, 20, 10, 5, 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenominationSet {
    values: Vec<i64>,
}

impl DenominationSet {
    /// Creates a denomination set, validating the invariants.
    ///
    /// ## Errors
    /// - [`DenominationError::Empty`] for an empty slice
    /// - [`DenominationError::NotPositive`] for a value ≤ 0
    /// - [`DenominationError::NotDescending`] when a value is not strictly
    ///   smaller than its predecessor
    ///
    /// ## Example
    /// ```rust
    /// use teller_core::DenominationSet;
    ///
    /// assert!(DenominationSet::new(&[50, 20, 5]).is_ok());
    /// assert!(DenominationSet::new(&[20, 50]).is_err());
    /// assert!(DenominationSet::new(&[]).is_err());
    /// ```
    pub fn new(values: &[i64]) -> Result<Self, DenominationError> {
        if values.is_empty() {
            return Err(DenominationError::Empty);
        }

        for (i, &value) in values.iter().enumerate() {
            if value <= 0 {
                return Err(DenominationError::NotPositive { value });
            }
            if i > 0 && value >= values[i - 1] {
                return Err(DenominationError::NotDescending { value });
            }
        }

        Ok(DenominationSet {
            values: values.to_vec(),
        })
    }

    /// Returns the production set, `[100, 50, 20, 10, 5, 2]`.
    ///
    /// Infallible: [`STANDARD_NOTES`] satisfies the invariants by
    /// construction.
    pub fn standard() -> Self {
        DenominationSet {
            values: STANDARD_NOTES.to_vec(),
        }
    }

    /// The note values in set order (largest first).
    #[inline]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// The smallest note in the set.
    ///
    /// This doubles as the minimum withdrawal amount: anything below it can
    /// never be dispensed, so validation rejects it up front.
    #[inline]
    pub fn minimum(&self) -> i64 {
        // Invariant: non-empty and descending, so the last value is smallest
        self.values[self.values.len() - 1]
    }

    /// Number of denominations in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: the constructor rejects empty sets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for DenominationSet {
    /// Renders the values in set order, comma-separated.
    ///
    /// This exact rendering appears verbatim in the unrepresentable-amount
    /// error message, so it must stay stable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in &self.values {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
            first = false;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_set() {
        let set = DenominationSet::standard();
        assert_eq!(set.values(), &[100, 50, 20, 10, 5, 2]);
        assert_eq!(set.minimum(), 2);
        assert_eq!(set.len(), 6);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_display_matches_set_order() {
        let set = DenominationSet::standard();
        assert_eq!(set.to_string(), "100, 50, 20, 10, 5, 2");

        let small = DenominationSet::new(&[25, 10, 1]).unwrap();
        assert_eq!(small.to_string(), "25, 10, 1");
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(DenominationSet::new(&[]), Err(DenominationError::Empty));
    }

    #[test]
    fn test_rejects_non_positive_values() {
        assert_eq!(
            DenominationSet::new(&[100, 0]),
            Err(DenominationError::NotPositive { value: 0 })
        );
        assert_eq!(
            DenominationSet::new(&[-10]),
            Err(DenominationError::NotPositive { value: -10 })
        );
    }

    #[test]
    fn test_rejects_unordered_and_duplicate_values() {
        assert_eq!(
            DenominationSet::new(&[20, 50]),
            Err(DenominationError::NotDescending { value: 50 })
        );
        assert_eq!(
            DenominationSet::new(&[50, 50]),
            Err(DenominationError::NotDescending { value: 50 })
        );
    }
}
