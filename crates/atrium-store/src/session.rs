//! # Booking Session
//!
//! Bounds the lifetime of the shared store.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Session Lifecycle                                 │
//! │                                                                         │
//! │  BookingSession::start()                                                │
//! │       │                                                                 │
//! │       ├── seeds the catalog (BookingState::initial)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  session.handle() ──► StoreHandle ──► read / dispatch / subscribe       │
//! │       │                   (any number of clones, passed through the     │
//! │       │                    call graph instead of an ambient singleton)  │
//! │       ▼                                                                 │
//! │  drop(session)                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  every surviving handle ──► Err(StoreError::SessionEnded)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is persisted: the selection state lives exactly as long as the
//! session and is discarded with it.

use std::sync::{Arc, Weak};

use tracing::{debug, info};

use atrium_core::{BookingAction, BookingState};

use crate::error::{StoreError, StoreResult};
use crate::store::{BookingStore, SubscriptionId};

// =============================================================================
// BookingSession
// =============================================================================

/// An active booking-form session owning the shared store.
///
/// Constructed explicitly and injected through the call graph; there is no
/// global store. Dropping the session ends the scope and invalidates every
/// outstanding [`StoreHandle`].
#[derive(Debug)]
pub struct BookingSession {
    store: Arc<BookingStore>,
}

impl BookingSession {
    /// Starts a session with a freshly seeded catalog.
    pub fn start() -> Self {
        info!("Booking session started");
        BookingSession {
            store: Arc::new(BookingStore::new()),
        }
    }

    /// Direct access to the store for the owner of the session.
    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    /// Creates a handle for a consumer (a form view, a test, ...).
    pub fn handle(&self) -> StoreHandle {
        StoreHandle {
            store: Arc::downgrade(&self.store),
        }
    }
}

impl Drop for BookingSession {
    fn drop(&mut self) {
        debug!("Booking session ended");
    }
}

// =============================================================================
// StoreHandle
// =============================================================================

/// A consumer's access point to the session store.
///
/// Handles are cheap to clone and hold only a weak reference: they never
/// keep the store alive past its session. Every accessor re-checks the
/// session scope and fails loudly instead of answering with a default state.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    store: Weak<BookingStore>,
}

impl StoreHandle {
    fn store(&self) -> StoreResult<Arc<BookingStore>> {
        self.store.upgrade().ok_or(StoreError::SessionEnded)
    }

    /// Returns a snapshot of the current booking state.
    pub fn state(&self) -> StoreResult<BookingState> {
        Ok(self.store()?.state())
    }

    /// Dispatches one action and returns the state it produced.
    pub fn dispatch(&self, action: &BookingAction) -> StoreResult<BookingState> {
        Ok(self.store()?.dispatch(action))
    }

    /// Registers a callback invoked after every dispatch.
    pub fn subscribe<F>(&self, callback: F) -> StoreResult<SubscriptionId>
    where
        F: Fn(&BookingState) + Send + Sync + 'static,
    {
        Ok(self.store()?.subscribe(callback))
    }

    /// Removes a subscription made through this session's store.
    pub fn unsubscribe(&self, id: SubscriptionId) -> StoreResult<bool> {
        Ok(self.store()?.unsubscribe(id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
