//! # Booking Store
//!
//! Owns the current booking state and funnels all mutation through dispatch.
//!
//! ## Thread Safety
//! The state is wrapped in a `Mutex` because:
//! 1. Any number of consumers may hold a handle to the store
//! 2. Only one dispatch may swap the state at a time
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Operations                                     │
//! │                                                                         │
//! │  Form Action              Store Call              State Change          │
//! │  ───────────              ──────────              ────────────          │
//! │                                                                         │
//! │  Change room qty ────────► dispatch() ──────────► next = apply(action)  │
//! │  Toggle a meal ──────────► dispatch() ──────────► (pure, atrium-core)   │
//! │  Edit headcount ─────────► dispatch() ──────────► then notify all       │
//! │                                                                         │
//! │  Render a view ──────────► state() ─────────────► (read only snapshot)  │
//! │                                                                         │
//! │  NOTE: On the form's single logical thread each dispatch fully          │
//! │        completes, including synchronous subscriber notification,        │
//! │        before the next one begins. Callbacks run outside both store     │
//! │        locks, so a subscriber may dispatch a follow-up action or        │
//! │        (un)subscribe from inside its own notification.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::debug;

use atrium_core::{BookingAction, BookingState};

/// Identifies one subscription so it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// One registered state listener.
///
/// The callback is `Arc`-wrapped so notification can clone the registered
/// list and release the registry lock before running any subscriber code.
struct Subscriber {
    id: SubscriptionId,
    callback: Arc<dyn Fn(&BookingState) + Send + Sync + 'static>,
}

/// The shared booking store.
///
/// ## Invariants
/// - The state only ever changes through [`dispatch`](BookingStore::dispatch)
/// - Every state version is immutable once produced; `state()` snapshots are
///   cheap `Arc`-backed clones and never observe a half-applied action
pub struct BookingStore {
    state: Mutex<BookingState>,
    subscribers: Mutex<Vec<Subscriber>>,
    next_subscription: AtomicU64,
}

impl BookingStore {
    /// Creates a store seeded with the initial catalog.
    ///
    /// Crate-private: stores are only handed out through a
    /// [`BookingSession`](crate::session::BookingSession), which bounds
    /// their lifetime.
    pub(crate) fn new() -> Self {
        BookingStore {
            state: Mutex::new(BookingState::initial()),
            subscribers: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
        }
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> BookingState {
        self.state.lock().expect("State mutex poisoned").clone()
    }

    /// Applies one action, swaps in the next state, and synchronously
    /// notifies every subscriber with it.
    ///
    /// Neither store lock is held while a callback runs: the state lock is
    /// released before notification and the registry is snapshotted first.
    /// A subscriber may therefore dispatch a follow-up action or
    /// unsubscribe itself without deadlocking.
    ///
    /// ## Returns
    /// The state produced by the action (also what subscribers see).
    pub fn dispatch(&self, action: &BookingAction) -> BookingState {
        debug!(?action, "dispatch");

        let next = {
            let mut state = self.state.lock().expect("State mutex poisoned");
            let next = state.apply(action);
            *state = next.clone();
            next
        };

        let callbacks: Vec<_> = {
            let subscribers = self.subscribers.lock().expect("Subscriber mutex poisoned");
            subscribers
                .iter()
                .map(|s| Arc::clone(&s.callback))
                .collect()
        };
        for callback in callbacks {
            callback(&next);
        }

        next
    }

    /// Registers a callback invoked after every dispatch with the new state.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let id = store.subscribe(|state| render_summary(state));
    /// ```
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&BookingState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        debug!(subscription = id.0, "subscribe");

        self.subscribers
            .lock()
            .expect("Subscriber mutex poisoned")
            .push(Subscriber {
                id,
                callback: Arc::new(callback),
            });
        id
    }

    /// Removes a subscription. Returns `false` if the id was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.lock().expect("Subscriber mutex poisoned");
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);

        let removed = subscribers.len() != before;
        debug!(subscription = id.0, removed, "unsubscribe");
        removed
    }
}

impl std::fmt::Debug for BookingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
            .try_init();
    }

    #[test]
    fn test_dispatch_updates_the_stored_state() {
        init_tracing();
        let store = BookingStore::new();

        store.dispatch(&BookingAction::SetRoomQuantity {
            id: "conference".to_string(),
            quantity: 1,
        });
        store.dispatch(&BookingAction::SetHeadcount { count: 12 });

        let state = store.state();
        assert_eq!(state.room("conference").unwrap().quantity, 1);
        assert_eq!(state.number_of_people, 12);
    }

    #[test]
    fn test_subscribers_are_notified_synchronously() {
        let store = BookingStore::new();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |state| {
            sink.lock().unwrap().push(state.number_of_people);
        });

        store.dispatch(&BookingAction::SetHeadcount { count: 10 });
        store.dispatch(&BookingAction::SetHeadcount { count: 25 });

        // Dispatch returned, so the notifications already happened.
        assert_eq!(*seen.lock().unwrap(), vec![10, 25]);
    }

    #[test]
    fn test_subscribers_see_the_dispatched_state() {
        let store = BookingStore::new();

        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        store.subscribe(move |state| {
            *sink.lock().unwrap() = Some(state.clone());
        });

        let returned = store.dispatch(&BookingAction::ToggleMeal {
            id: "dinner".to_string(),
        });

        let notified = seen.lock().unwrap().clone().unwrap();
        assert_eq!(notified, returned);
        assert!(notified.meal("dinner").unwrap().selected);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = BookingStore::new();

        let count = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&count);
        let id = store.subscribe(move |_| {
            *sink.lock().unwrap() += 1;
        });

        store.dispatch(&BookingAction::SetHeadcount { count: 1 });
        assert!(store.unsubscribe(id));
        store.dispatch(&BookingAction::SetHeadcount { count: 2 });

        assert_eq!(*count.lock().unwrap(), 1);

        // A second removal of the same id reports nothing removed.
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn test_subscriber_may_dispatch_a_follow_up_action() {
        let store = Arc::new(BookingStore::new());

        let inner = Arc::clone(&store);
        store.subscribe(move |state| {
            // React to the first headcount change with a correction.
            if state.number_of_people == 10 {
                inner.dispatch(&BookingAction::SetHeadcount { count: 11 });
            }
        });

        store.dispatch(&BookingAction::SetHeadcount { count: 10 });
        assert_eq!(store.state().number_of_people, 11);
    }

    #[test]
    fn test_one_shot_subscriber_may_unsubscribe_itself() {
        let store = Arc::new(BookingStore::new());

        let calls = Arc::new(Mutex::new(0));
        let own_id: Arc<Mutex<Option<SubscriptionId>>> = Arc::new(Mutex::new(None));

        let inner = Arc::clone(&store);
        let sink = Arc::clone(&calls);
        let slot = Arc::clone(&own_id);
        let id = store.subscribe(move |_| {
            *sink.lock().unwrap() += 1;
            if let Some(id) = *slot.lock().unwrap() {
                inner.unsubscribe(id);
            }
        });
        *own_id.lock().unwrap() = Some(id);

        store.dispatch(&BookingAction::SetHeadcount { count: 1 });
        store.dispatch(&BookingAction::SetHeadcount { count: 2 });

        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_store_starts_from_the_initial_catalog() {
        let store = BookingStore::new();
        assert_eq!(store.state(), BookingState::initial());
    }
}
