//! # Catalog Seed
//!
//! The literal catalog the booking form starts from.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Catalog Lifecycle                                 │
//! │                                                                         │
//! │  Session start ──► BookingState::initial() ──► dispatches mutate        │
//! │                    (this module)               quantities/flags only    │
//! │                                                      │                  │
//! │                                                      ▼                  │
//! │  Session end ────────────────────────────────► state discarded          │
//! │                                                                         │
//! │  Membership NEVER changes: 5 rooms, 5 add-ons, 4 meals, always in       │
//! │  this order. Nothing here is persisted.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The literal values are a compatibility contract with the form frontend;
//! change them only together with the frontend.

use std::sync::Arc;

use crate::money::Money;
use crate::types::{AddOn, BookingState, Meal, Room};

fn room(id: &str, name: &str, capacity: i64, price: i64) -> Arc<Room> {
    Arc::new(Room {
        id: id.to_string(),
        name: name.to_string(),
        capacity,
        price: Money::from_units(price),
        quantity: 0,
    })
}

fn add_on(id: &str, name: &str, price: i64) -> Arc<AddOn> {
    Arc::new(AddOn {
        id: id.to_string(),
        name: name.to_string(),
        price: Money::from_units(price),
        quantity: 0,
    })
}

fn meal(id: &str, name: &str, price: i64) -> Arc<Meal> {
    Arc::new(Meal {
        id: id.to_string(),
        name: name.to_string(),
        price: Money::from_units(price),
        selected: false,
    })
}

impl BookingState {
    /// Builds the initial booking state: the full catalog with nothing
    /// selected and a headcount of zero.
    pub fn initial() -> Self {
        BookingState {
            rooms: [
                room("conference", "Conference Room", 15, 3500),
                room("auditorium", "Auditorium Hall", 200, 5500),
                room("presentation", "Presentation Room", 50, 700),
                room("large-meeting", "Large Meeting Room", 10, 900),
                room("small-meeting", "Small Meeting Room", 5, 1100),
            ]
            .into_iter()
            .collect(),
            add_ons: [
                add_on("projectors", "Projectors", 200),
                add_on("speakers", "Speaker", 35),
                add_on("microphones", "Microphones", 45),
                add_on("whiteboards", "Whiteboards", 80),
                add_on("signage", "Signage", 80),
            ]
            .into_iter()
            .collect(),
            meals: [
                meal("breakfast", "Breakfast", 50),
                meal("lunch", "Lunch", 60),
                meal("high-tea", "High Tea", 25),
                meal("dinner", "Dinner", 70),
            ]
            .into_iter()
            .collect(),
            number_of_people: 0,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
