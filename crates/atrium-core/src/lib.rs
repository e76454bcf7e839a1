//! # atrium-core: Pure Booking Logic for Atrium Booking
//!
//! This crate is the **heart** of the Atrium booking form. It contains the
//! entire booking selection model as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Atrium Booking Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Booking Form (frontend)                      │   │
//! │  │    Rooms View ──► Add-ons View ──► Meals View ──► Headcount     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ read / dispatch / subscribe            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    atrium-store                                 │   │
//! │  │    BookingSession ──► BookingStore ──► subscribers              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ atrium-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │  reducer  │   │   │
//! │  │   │   Room    │  │   Money   │  │   seed    │  │   apply   │   │   │
//! │  │   │   Meal    │  │           │  │  literals │  │           │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Room, AddOn, Meal, BookingState)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The literal catalog seed
//! - [`action`] - The four booking actions and their wire shapes
//! - [`reducer`] - The pure state transition
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: `apply` is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Structural Sharing**: New states reuse every unaffected entity
//! 4. **Permissive Inputs**: Unknown ids are no-ops, never errors
//!
//! ## Example Usage
//!
//! ```rust
//! use atrium_core::{BookingAction, BookingState};
//!
//! let state = BookingState::initial();
//! let next = state.apply(&BookingAction::SetRoomQuantity {
//!     id: "auditorium".to_string(),
//!     quantity: 2,
//! });
//!
//! assert_eq!(next.rooms[1].quantity, 2);
//! // The input state is untouched.
//! assert_eq!(state.rooms[1].quantity, 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod action;
pub mod catalog;
pub mod money;
pub mod reducer;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use atrium_core::BookingState` instead of
// `use atrium_core::types::BookingState`

pub use action::BookingAction;
pub use money::Money;
pub use types::{AddOn, BookingState, Meal, Room};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of bookable rooms in the catalog.
///
/// ## Why a constant?
/// The catalog is fixed at session start and never grows or shrinks at
/// runtime. The counts are part of the contract with the form frontend.
pub const ROOM_COUNT: usize = 5;

/// Number of add-ons in the catalog.
pub const ADD_ON_COUNT: usize = 5;

/// Number of meal options in the catalog.
pub const MEAL_COUNT: usize = 4;
