//! # Store Error Type
//!
//! The single failure mode of the store boundary.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Errors at the Store Boundary                         │
//! │                                                                         │
//! │  Ordinary inputs are PERMISSIVE and never error:                        │
//! │    • unknown catalog id          ──► dispatch is a no-op                │
//! │    • negative quantity/headcount ──► stored as given                    │
//! │                                                                         │
//! │  The one real failure is a CONTRACT VIOLATION:                          │
//! │    • StoreHandle used after its BookingSession ended                    │
//! │      ──► Err(StoreError::SessionEnded), never a default state           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String

use thiserror::Error;

/// Errors returned by [`StoreHandle`](crate::session::StoreHandle) accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The handle outlived its session.
    ///
    /// ## When This Occurs
    /// - A view kept a `StoreHandle` after the enclosing `BookingSession`
    ///   was dropped
    /// - Store access was attempted before any session was started
    ///
    /// This is a programming-contract violation, not a user error. It is
    /// surfaced immediately and is not retried or recovered.
    #[error("Booking store accessed outside an active booking session")]
    SessionEnded,
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        assert_eq!(
            StoreError::SessionEnded.to_string(),
            "Booking store accessed outside an active booking session"
        );
    }
}
