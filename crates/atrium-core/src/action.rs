//! # Booking Actions
//!
//! The four actions the form can dispatch, with their wire shapes.
//!
//! ## Wire Compatibility
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Action Wire Shapes                                   │
//! │                                                                         │
//! │  { "type": "UPDATE_ROOM_QUANTITY",  "id": "...", "quantity": n }        │
//! │  { "type": "UPDATE_ADDON_QUANTITY", "id": "...", "quantity": n }        │
//! │  { "type": "TOGGLE_MEAL",           "id": "..." }                       │
//! │  { "type": "SET_NUMBER_OF_PEOPLE",  "count": n }                        │
//! │                                                                         │
//! │  The tags and field names are a contract with the form frontend.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The enum is closed: an action value that is not one of these four kinds
//! cannot be constructed, so the "unknown action is a no-op" default case of
//! a stringly-typed dispatcher is unrepresentable here.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single update to the booking selection.
///
/// All payload values are accepted permissively: unmatched ids make the
/// dispatch a no-op, and quantities/headcounts are not sign-checked (that
/// belongs to a higher validation layer of the product).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type")]
#[ts(export)]
pub enum BookingAction {
    /// Replaces the selected quantity of one room.
    #[serde(rename = "UPDATE_ROOM_QUANTITY")]
    SetRoomQuantity { id: String, quantity: i64 },

    /// Replaces the selected quantity of one add-on.
    #[serde(rename = "UPDATE_ADDON_QUANTITY")]
    SetAddOnQuantity { id: String, quantity: i64 },

    /// Flips the selected flag of one meal.
    #[serde(rename = "TOGGLE_MEAL")]
    ToggleMeal { id: String },

    /// Replaces the headcount.
    #[serde(rename = "SET_NUMBER_OF_PEOPLE")]
    SetHeadcount { count: i64 },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_wire_shapes() {
        let action = BookingAction::SetRoomQuantity {
            id: "auditorium".to_string(),
            quantity: 2,
        };
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({ "type": "UPDATE_ROOM_QUANTITY", "id": "auditorium", "quantity": 2 })
        );

        let action = BookingAction::SetAddOnQuantity {
            id: "projectors".to_string(),
            quantity: 3,
        };
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({ "type": "UPDATE_ADDON_QUANTITY", "id": "projectors", "quantity": 3 })
        );

        let action = BookingAction::ToggleMeal {
            id: "lunch".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({ "type": "TOGGLE_MEAL", "id": "lunch" })
        );

        let action = BookingAction::SetHeadcount { count: 120 };
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({ "type": "SET_NUMBER_OF_PEOPLE", "count": 120 })
        );
    }

    #[test]
    fn test_action_parses_from_frontend_json() {
        let action: BookingAction =
            serde_json::from_value(json!({ "type": "TOGGLE_MEAL", "id": "dinner" })).unwrap();
        assert_eq!(
            action,
            BookingAction::ToggleMeal {
                id: "dinner".to_string()
            }
        );

        let action: BookingAction =
            serde_json::from_value(json!({ "type": "SET_NUMBER_OF_PEOPLE", "count": -4 })).unwrap();
        assert_eq!(action, BookingAction::SetHeadcount { count: -4 });
    }

    #[test]
    fn test_unknown_action_kind_is_rejected_at_parse_time() {
        // The enum is closed; a stray action tag never reaches the reducer.
        let result: Result<BookingAction, _> =
            serde_json::from_value(json!({ "type": "CLEAR_EVERYTHING" }));
        assert!(result.is_err());
    }
}
