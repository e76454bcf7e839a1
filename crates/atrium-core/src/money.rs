//! # Money Module
//!
//! Provides the `Money` type for the catalog price tags.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Units                                            │
//! │    Catalog prices are whole currency units (3500, 5500, ...),           │
//! │    stored and serialized as plain integers                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals and pricing math live in a higher layer of the product; this crate
//! only carries the price tags through the state, so `Money` stays a thin
//! newtype with no arithmetic surface.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A price tag in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: Matches the rest of the numeric state fields
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Transparent serialization**: The frontend sees the bare number
///   (`"price": 3500`), exactly the shape the form expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use atrium_core::money::Money;
    ///
    /// let price = Money::from_units(3500);
    /// assert_eq!(price.units(), 3500);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. Use frontend formatting for actual UI
/// display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(3500);
        assert_eq!(money.units(), 3500);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_units(3500)), "$3500");
        assert_eq!(format!("{}", Money::from_units(0)), "$0");
    }

    #[test]
    fn test_zero_and_default() {
        assert!(Money::zero().is_zero());
        assert_eq!(Money::default(), Money::zero());
        assert!(!Money::from_units(35).is_zero());
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&Money::from_units(5500)).unwrap();
        assert_eq!(json, "5500");

        let back: Money = serde_json::from_str("5500").unwrap();
        assert_eq!(back, Money::from_units(5500));
    }
}
