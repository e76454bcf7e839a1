//! # Domain Types
//!
//! Core domain types for the booking selection state.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │      Room       │   │      AddOn      │   │      Meal       │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  id (string)    │   │  id (string)    │   │  id (string)    │        │
//! │  │  name           │   │  name           │   │  name           │        │
//! │  │  capacity       │   │  price          │   │  price          │        │
//! │  │  price          │   │  quantity       │   │  selected       │        │
//! │  │  quantity       │   └─────────────────┘   └─────────────────┘        │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                       BookingState                              │    │
//! │  │   rooms: [Room; 5]  addOns: [AddOn; 5]  meals: [Meal; 4]        │    │
//! │  │   numberOfPeople: integer                                       │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Structural Sharing
//! The three sequences are `Arc<[Arc<T>]>`. A state transition rebuilds at
//! most one sequence, and inside it at most one entity gets a fresh
//! allocation. Everything else keeps pointer identity across versions, so a
//! UI layer can detect "what changed" by identity comparison instead of deep
//! diffing.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Room
// =============================================================================

/// A bookable conference room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Room {
    /// Unique catalog key, fixed at session start.
    pub id: String,

    /// Display name shown on the form.
    pub name: String,

    /// Seating capacity of the room.
    pub capacity: i64,

    /// Price per booking in whole currency units.
    pub price: Money,

    /// Number of this room currently selected on the form.
    pub quantity: i64,
}

// =============================================================================
// AddOn
// =============================================================================

/// Bookable equipment offered alongside the rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AddOn {
    /// Unique catalog key, fixed at session start.
    pub id: String,

    /// Display name shown on the form.
    pub name: String,

    /// Price per unit in whole currency units.
    pub price: Money,

    /// Number of units currently selected on the form.
    pub quantity: i64,
}

// =============================================================================
// Meal
// =============================================================================

/// A catering option, selected on or off rather than counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Meal {
    /// Unique catalog key, fixed at session start.
    pub id: String,

    /// Display name shown on the form.
    pub name: String,

    /// Price per head in whole currency units.
    pub price: Money,

    /// Whether this meal is currently selected.
    pub selected: bool,
}

// =============================================================================
// BookingState
// =============================================================================

/// The complete booking selection state.
///
/// ## Invariants
/// - Ids are unique within each sequence and fixed at session start
/// - Sequence order is the catalog insertion order and never changes
/// - Membership never grows or shrinks at runtime
///
/// ## Cloning
/// Cloning a state clones four `Arc`s and an integer. States are cheap to
/// snapshot and hand out to any number of consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BookingState {
    /// The bookable rooms, in catalog order.
    #[ts(as = "Vec<Room>")]
    pub rooms: Arc<[Arc<Room>]>,

    /// The equipment add-ons, in catalog order.
    #[ts(as = "Vec<AddOn>")]
    pub add_ons: Arc<[Arc<AddOn>]>,

    /// The catering options, in catalog order.
    #[ts(as = "Vec<Meal>")]
    pub meals: Arc<[Arc<Meal>]>,

    /// Headcount entered on the form.
    pub number_of_people: i64,
}

impl BookingState {
    /// Looks up a room by its catalog id.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id).map(Arc::as_ref)
    }

    /// Looks up an add-on by its catalog id.
    pub fn add_on(&self, id: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.id == id).map(Arc::as_ref)
    }

    /// Looks up a meal by its catalog id.
    pub fn meal(&self, id: &str) -> Option<&Meal> {
        self.meals.iter().find(|m| m.id == id).map(Arc::as_ref)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        let state = BookingState::initial();

        assert_eq!(state.room("auditorium").unwrap().name, "Auditorium Hall");
        assert_eq!(state.add_on("speakers").unwrap().name, "Speaker");
        assert_eq!(state.meal("high-tea").unwrap().name, "High Tea");

        assert!(state.room("penthouse").is_none());
        assert!(state.add_on("lasers").is_none());
        assert!(state.meal("brunch").is_none());
    }

    #[test]
    fn test_state_serializes_with_frontend_field_names() {
        let state = BookingState::initial();
        let json = serde_json::to_value(&state).unwrap();

        // The form frontend consumes camelCase keys.
        assert!(json.get("rooms").is_some());
        assert!(json.get("addOns").is_some());
        assert!(json.get("meals").is_some());
        assert_eq!(json["numberOfPeople"], 0);
        assert_eq!(json["rooms"][0]["id"], "conference");
        assert_eq!(json["rooms"][0]["price"], 3500);
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let state = BookingState::initial();
        let json = serde_json::to_string(&state).unwrap();
        let back: BookingState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
