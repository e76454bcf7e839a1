//! # atrium-store: Shared Booking State for the Form UI
//!
//! This crate owns the one shared state value behind the booking form and
//! exposes it through read, dispatch, and subscribe accessors.
//!
//! ## Module Organization
//! ```text
//! atrium_store/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── session.rs      ◄─── BookingSession + StoreHandle (bounded lifetime)
//! ├── store.rs        ◄─── BookingStore (state + subscriber registry)
//! └── error.rs        ◄─── StoreError (out-of-scope access)
//! ```
//!
//! ## Access Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Access Model                                   │
//! │                                                                         │
//! │  let session = BookingSession::start();   // seeds the catalog          │
//! │  let handle = session.handle();           // cheap, cloneable           │
//! │                                                                         │
//! │  handle.state()?                 ──► snapshot of the current state      │
//! │  handle.dispatch(&action)?       ──► next state + synchronous notify    │
//! │  handle.subscribe(callback)?     ──► SubscriptionId                     │
//! │                                                                         │
//! │  drop(session);                                                         │
//! │  handle.state()  ──► Err(StoreError::SessionEnded)  // fails LOUDLY     │
//! │                                                                         │
//! │  WHY: a handle used outside an active session is a programming error,   │
//! │       never answered with a default or empty state.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no locking ceremony for consumers: on the UI's single logical
//! thread of control each dispatch fully completes (next immutable state
//! produced, subscribers notified) before the next one begins. Subscriber
//! callbacks run outside the store's locks, so they are free to dispatch
//! follow-up actions or manage their own subscriptions.

pub mod error;
pub mod session;
pub mod store;

pub use error::StoreError;
pub use session::{BookingSession, StoreHandle};
pub use store::{BookingStore, SubscriptionId};
