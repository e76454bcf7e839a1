//! # State Transition
//!
//! The pure transition from one booking state to the next.
//!
//! ## Transition Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    apply(state, action) -> new state                    │
//! │                                                                         │
//! │  SetRoomQuantity ───► rebuild rooms, one entity replaced                │
//! │  SetAddOnQuantity ──► rebuild addOns, one entity replaced               │
//! │  ToggleMeal ────────► rebuild meals, one flag flipped                   │
//! │  SetHeadcount ──────► replace numberOfPeople, all sequences shared      │
//! │                                                                         │
//! │  Unmatched id ──────► input state returned unchanged (no error)         │
//! │                                                                         │
//! │  The input state is NEVER mutated. Unaffected sequences and entities    │
//! │  keep pointer identity in the new state.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use crate::action::BookingAction;
use crate::types::{AddOn, BookingState, Meal, Room};

/// Rebuilds a sequence with the entity at `index` replaced.
///
/// Every other slot is an `Arc::clone` of the original entity, so identity
/// is preserved for everything except the replaced slot.
fn with_entity_at<T: Clone>(seq: &Arc<[Arc<T>]>, index: usize, updated: T) -> Arc<[Arc<T>]> {
    seq.iter()
        .enumerate()
        .map(|(i, entity)| {
            if i == index {
                Arc::new(updated.clone())
            } else {
                Arc::clone(entity)
            }
        })
        .collect()
}

impl BookingState {
    /// Applies one action and returns the next state.
    ///
    /// ## Guarantees
    /// - Side-effect-free: `self` is left untouched
    /// - Permissive: an id not present in the catalog is a no-op
    /// - No ordering constraints: any action is valid in any state
    pub fn apply(&self, action: &BookingAction) -> BookingState {
        match action {
            BookingAction::SetRoomQuantity { id, quantity } => {
                match self.rooms.iter().position(|r| r.id == *id) {
                    Some(index) => {
                        let updated = Room {
                            quantity: *quantity,
                            ..Room::clone(&self.rooms[index])
                        };
                        BookingState {
                            rooms: with_entity_at(&self.rooms, index, updated),
                            ..self.clone()
                        }
                    }
                    None => self.clone(),
                }
            }
            BookingAction::SetAddOnQuantity { id, quantity } => {
                match self.add_ons.iter().position(|a| a.id == *id) {
                    Some(index) => {
                        let updated = AddOn {
                            quantity: *quantity,
                            ..AddOn::clone(&self.add_ons[index])
                        };
                        BookingState {
                            add_ons: with_entity_at(&self.add_ons, index, updated),
                            ..self.clone()
                        }
                    }
                    None => self.clone(),
                }
            }
            BookingAction::ToggleMeal { id } => {
                match self.meals.iter().position(|m| m.id == *id) {
                    Some(index) => {
                        let current = &self.meals[index];
                        let updated = Meal {
                            selected: !current.selected,
                            ..Meal::clone(current)
                        };
                        BookingState {
                            meals: with_entity_at(&self.meals, index, updated),
                            ..self.clone()
                        }
                    }
                    None => self.clone(),
                }
            }
            BookingAction::SetHeadcount { count } => BookingState {
                number_of_people: *count,
                ..self.clone()
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
