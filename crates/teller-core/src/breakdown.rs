//! # Breakdown Module
//!
//! Computes the minimum number of banknotes needed to dispense an amount.
//!
//! ## Why Dynamic Programming, Not Greedy?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE GREEDY TRAP                                                    │
//! │                                                                     │
//! │  Notes [25, 10, 1], amount 30:                                      │
//! │    Greedy:  25 + 1 + 1 + 1 + 1 + 1  =  6 notes  ❌ WRONG!           │
//! │    Optimal: 10 + 10 + 10           =  3 notes  ✅                   │
//! │                                                                     │
//! │  Notes [4, 3], amount 6:                                            │
//! │    Greedy:  4 + ??? → stuck, reports unrepresentable ❌              │
//! │    Optimal: 3 + 3                                                   │
//! │                                                                     │
//! │  The production set [100, 50, 20, 10, 5, 2] happens to be greedy-   │
//! │  safe, but the engine must not depend on that property: it uses     │
//! │  the minimum-note-count DP so any injected set stays correct.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Complexity
//! O(amount × |denominations|) time, O(amount) space. The table size is
//! capped by [`MAX_AMOUNT`] so a single request can never allocate an
//! unbounded table.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::denominations::DenominationSet;
use crate::error::{BreakdownError, BreakdownResult};

// =============================================================================
// Constants
// =============================================================================

/// Largest amount the engine will compute a breakdown for.
///
/// The DP table holds `amount + 1` entries, so this caps a request at a few
/// megabytes of table. Well above any realistic withdrawal; amounts beyond
/// it are rejected explicitly rather than silently misbehaving.
pub const MAX_AMOUNT: i64 = 1_000_000;

// =============================================================================
// Breakdown Result
// =============================================================================

/// A denomination → count mapping whose weighted sum equals the requested
/// amount.
///
/// Every denomination of the engine's set is present, zero counts included,
/// kept in set order (largest note first). Serializes as a JSON object keyed
/// by note value:
///
/// ```json
/// { "100": 3, "50": 1, "20": 1, "10": 1, "5": 0, "2": 0 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown {
    /// (denomination, count) pairs in set order.
    entries: Vec<(i64, i64)>,
}

impl Breakdown {
    /// The count for one denomination (0 for values outside the set).
    pub fn count(&self, denomination: i64) -> i64 {
        self.entries
            .iter()
            .find(|(d, _)| *d == denomination)
            .map_or(0, |(_, count)| *count)
    }

    /// The (denomination, count) pairs in set order.
    pub fn entries(&self) -> &[(i64, i64)] {
        &self.entries
    }

    /// The weighted sum `Σ denomination × count`.
    ///
    /// Equals the requested amount whenever the breakdown was produced
    /// successfully.
    pub fn total(&self) -> i64 {
        self.entries.iter().map(|(d, count)| d * count).sum()
    }

    /// The total number of physical notes, `Σ count`.
    pub fn notes(&self) -> i64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

impl Serialize for Breakdown {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (denomination, count) in &self.entries {
            map.serialize_entry(denomination, count)?;
        }
        map.end()
    }
}

// =============================================================================
// Breakdown Engine
// =============================================================================

/// Computes minimum-note breakdowns against an injected denomination set.
///
/// ## Example
/// ```rust
/// use teller_core::BreakdownEngine;
///
/// let engine = BreakdownEngine::standard();
/// let breakdown = engine.breakdown(380).unwrap();
///
/// assert_eq!(breakdown.count(100), 3);
/// assert_eq!(breakdown.count(50), 1);
/// assert_eq!(breakdown.total(), 380);
/// ```
#[derive(Debug, Clone)]
pub struct BreakdownEngine {
    denominations: DenominationSet,
}

impl BreakdownEngine {
    /// Creates an engine over the given denomination set.
    pub fn new(denominations: DenominationSet) -> Self {
        BreakdownEngine { denominations }
    }

    /// Creates an engine over the production set `[100, 50, 20, 10, 5, 2]`.
    pub fn standard() -> Self {
        BreakdownEngine::new(DenominationSet::standard())
    }

    /// The denomination set this engine dispenses from.
    pub fn denominations(&self) -> &DenominationSet {
        &self.denominations
    }

    /// Breaks `amount` into the minimum number of notes.
    ///
    /// `amount` must already have passed
    /// [`validate_amount`](crate::validation::validate_amount); the engine
    /// itself only fails for amounts no note combination can reach, or for
    /// amounts above [`MAX_AMOUNT`].
    ///
    /// Pure and deterministic: the same amount always yields the identical
    /// mapping.
    ///
    /// ## Algorithm
    /// Classic minimum-coin-count DP. `best[i]` is the fewest notes that sum
    /// to exactly `i` (unreachable sums stay `None`), `chosen[i]` remembers
    /// the note that achieved it. Ties go to the first denomination in set
    /// order, i.e. the largest note. Reconstruction walks `chosen` from
    /// `amount` down to zero.
    pub fn breakdown(&self, amount: i64) -> BreakdownResult<Breakdown> {
        if amount > MAX_AMOUNT {
            return Err(BreakdownError::AmountTooLarge {
                amount,
                max: MAX_AMOUNT,
            });
        }

        // Validation rejects non-positive amounts upstream; clamping keeps
        // the table index well-defined regardless.
        let target = amount.max(0) as usize;

        let mut best: Vec<Option<i64>> = vec![None; target + 1];
        let mut chosen: Vec<i64> = vec![0; target + 1];
        best[0] = Some(0);

        for i in 1..=target {
            for &d in self.denominations.values() {
                let d_idx = d as usize;
                if d_idx > i {
                    continue;
                }
                if let Some(prev) = best[i - d_idx] {
                    let candidate = prev + 1;
                    if best[i].is_none_or(|current| candidate < current) {
                        best[i] = Some(candidate);
                        chosen[i] = d;
                    }
                }
            }
        }

        if best[target].is_none() {
            return Err(BreakdownError::Unrepresentable {
                amount,
                available: self.denominations.to_string(),
            });
        }

        // Full key coverage: every denomination starts at zero.
        let mut entries: Vec<(i64, i64)> = self
            .denominations
            .values()
            .iter()
            .map(|&d| (d, 0))
            .collect();

        let mut remainder = target;
        while remainder > 0 {
            let d = chosen[remainder];
            if let Some(entry) = entries.iter_mut().find(|(value, _)| *value == d) {
                entry.1 += 1;
            }
            remainder -= d as usize;
        }

        Ok(Breakdown { entries })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
