//! Replay-latest cache of the current dataset snapshot
//!
//! The cache holds the last published [`Snapshot`] together with a registry of
//! observers. Publishing a new snapshot swaps it in as a whole, then notifies
//! every observer synchronously, in subscription order. New observers are
//! immediately handed the current snapshot before anything else.

use crate::dataset::Snapshot;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, MutexGuard, PoisonError, Weak,
};

/// Callback that receives every snapshot published after its subscription
pub type Observer = Arc<dyn Fn(&Snapshot) + Send + Sync>;

/// Shared handle to the dataset snapshot cache
///
/// Cloning the handle does not clone the cache: all clones publish to, and
/// observe, the same snapshot.
///
/// Observers are called synchronously from [`replace()`](Self::replace) and
/// [`subscribe()`](Self::subscribe). They may release their own or other
/// subscriptions, but must not publish or subscribe from within a delivery.
#[derive(Clone, Default)]
pub struct SnapshotCache(Arc<Shared>);
//
impl SnapshotCache {
    /// Set up an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot, without registering an observer
    pub fn current(&self) -> Snapshot {
        self.0.state().current.clone()
    }

    /// Truth that a dataset is currently available
    pub fn is_ready(&self) -> bool {
        self.0.state().current.is_some()
    }

    /// Number of observers that are currently subscribed
    pub fn num_observers(&self) -> usize {
        self.0.state().observers.len()
    }

    /// Install a new snapshot and notify every observer about it
    ///
    /// All observers that were subscribed when this call began have received
    /// the new snapshot by the time it returns, except for those that were
    /// released in the meantime.
    pub fn replace(&self, snapshot: Snapshot) {
        // Serialize publications so that observers see them in a single order
        let _publishing = self.0.publishing();

        // Swap in the new snapshot and collect the observers to be notified
        let recipients = {
            let mut state = self.0.state();
            state.current = snapshot.clone();
            state
                .observers
                .iter()
                .map(|registration| (registration.active.clone(), registration.observer.clone()))
                .collect::<Vec<_>>()
        };
        match &snapshot {
            Some(dataset) => log::debug!(
                "Published a dataset with {} countries to {} observer(s)",
                dataset.countries().len(),
                recipients.len()
            ),
            None => log::debug!(
                "Cleared the dataset, notifying {} observer(s)",
                recipients.len()
            ),
        }

        // Notify observers without holding the state lock, so that they can
        // release subscriptions or query the cache
        for (active, observer) in recipients {
            if active.load(Ordering::Acquire) {
                observer(&snapshot);
            }
        }
    }

    /// Register an observer, which immediately receives the current snapshot
    ///
    /// The observer will then receive every snapshot published by
    /// [`replace()`](Self::replace) until the returned [`Subscription`] is
    /// released or dropped.
    pub fn subscribe(&self, observer: impl Fn(&Snapshot) + Send + Sync + 'static) -> Subscription {
        // No publication may occur between the replay and the registration
        let _publishing = self.0.publishing();
        let observer: Observer = Arc::new(observer);
        let active = Arc::new(AtomicBool::new(true));
        let (id, current) = {
            let mut state = self.0.state();
            let id = state.next_id;
            state.next_id += 1;
            state.observers.push(Registration {
                id,
                active: active.clone(),
                observer: observer.clone(),
            });
            (id, state.current.clone())
        };
        log::trace!("Registered snapshot observer #{id}");
        observer(&current);
        Subscription {
            cache: Arc::downgrade(&self.0),
            id,
            active,
        }
    }
}
//
impl std::fmt::Debug for SnapshotCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.0.state();
        f.debug_struct("SnapshotCache")
            .field("current", &state.current)
            .field("num_observers", &state.observers.len())
            .finish()
    }
}

/// Handle to an observer registration
///
/// The observer stops receiving snapshots once this handle is released or
/// dropped. A delivery that is already underway is not interrupted.
#[must_use = "dropping a subscription immediately unregisters the observer"]
#[derive(Debug)]
pub struct Subscription {
    /// Cache that the observer is registered with
    cache: Weak<Shared>,

    /// Identifier of the registration within the cache
    id: ObserverId,

    /// Truth that the observer should still receive snapshots
    active: Arc<AtomicBool>,
}
//
impl Subscription {
    /// Stop delivering snapshots to the observer
    pub fn release(self) {}
}
//
impl Drop for Subscription {
    fn drop(&mut self) {
        self.active.store(false, Ordering::Release);
        if let Some(cache) = self.cache.upgrade() {
            cache.state().observers.retain(|registration| registration.id != self.id);
            log::trace!("Released snapshot observer #{}", self.id);
        }
    }
}

/// Identifier of an observer registration
type ObserverId = u64;

/// State shared by all handles to a cache
#[derive(Default)]
struct Shared {
    /// Held for the whole duration of a publication or subscription
    publishing: Mutex<()>,

    /// Current snapshot and observers
    state: Mutex<State>,
}
//
impl Shared {
    /// Acquire the publication lock
    ///
    /// A panicking observer can poison this lock, but the guarded data is a
    /// unit value so there is nothing to recover.
    fn publishing(&self) -> MutexGuard<'_, ()> {
        self.publishing.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquire the state lock
    ///
    /// The state is only ever updated through single assignments and vector
    /// operations, which leave it consistent even if a panic occurs.
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Mutable part of the cache
#[derive(Default)]
struct State {
    /// Last published snapshot
    current: Snapshot,

    /// Registered observers, in subscription order
    observers: Vec<Registration>,

    /// Identifier of the next registration
    next_id: ObserverId,
}

/// Observer registration
struct Registration {
    id: ObserverId,
    active: Arc<AtomicBool>,
    observer: Observer,
}
