//! Store container
//!
//! Holds the current `RootState` snapshot and hands it to subscribers. One
//! instance is created by the application root and passed to everything that
//! reads or dispatches; there is no global store.

use std::sync::Arc;

use shared::store::{Action, RootState};
use tokio::sync::watch;

#[derive(Clone)]
pub struct Store {
    tx: Arc<watch::Sender<Arc<RootState>>>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(RootState::default())
    }

    pub fn with_state(state: RootState) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(state));
        Self { tx: Arc::new(tx) }
    }

    /// Current snapshot
    pub fn state(&self) -> Arc<RootState> {
        self.tx.borrow().clone()
    }

    /// Apply one transition atomically. Receivers observe the new snapshot
    /// as soon as this returns.
    pub fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        tracing::debug!(action = action.name(), "store transition");
        self.tx.send_modify(|state| {
            *state = Arc::new(state.reduce(&action));
        });
    }

    /// Apply `action` only if `still_wanted` holds when the write lock is
    /// taken. Returns whether it was applied; subscribers are not woken
    /// otherwise.
    pub fn dispatch_if(&self, action: impl Into<Action>, still_wanted: impl FnOnce() -> bool) -> bool {
        let action = action.into();
        let applied = self.tx.send_if_modified(|state| {
            if !still_wanted() {
                return false;
            }
            *state = Arc::new(state.reduce(&action));
            true
        });
        if applied {
            tracing::debug!(action = action.name(), "store transition");
        } else {
            tracing::debug!(action = action.name(), "store transition skipped");
        }
        applied
    }

    /// Subscribe to snapshot changes
    pub fn subscribe(&self) -> watch::Receiver<Arc<RootState>> {
        self.tx.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").field("state", &self.state()).finish()
    }
}
