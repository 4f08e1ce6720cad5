//! Thread safe list of event listeners
//!
//! Every mutation and every snapshot takes the same lock, but listeners are
//! always called on a snapshot with the lock released. A listener may add or
//! remove listeners (itself included) while being notified; the change only
//! affects later notifications.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::trace;

/// Registry of listeners of type `L`, shared by reference
pub struct ListenerList<L: ?Sized> {
    listeners: Mutex<Vec<Arc<L>>>,
}

impl<L: ?Sized> ListenerList<L> {
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
        }
    }

    // Every critical section is a single Vec operation, so the list stays
    // consistent even if a thread panicked while holding the lock.
    fn lock(&self) -> MutexGuard<'_, Vec<Arc<L>>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add(&self, listener: Arc<L>) {
        self.lock().push(listener);
    }

    /// Remove the first registration of `listener`, compared by identity
    ///
    /// Returns whether a registration was found.
    pub fn remove(&self, listener: &Arc<L>) -> bool {
        let mut listeners = self.lock();
        match listeners.iter().position(|l| Arc::ptr_eq(l, listener)) {
            Some(index) => {
                listeners.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the current registrations in registration order
    pub fn snapshot(&self) -> Vec<Arc<L>> {
        self.lock().clone()
    }

    /// Call `dispatch` once for every listener registered right now
    ///
    /// The dispatch function picks the callback to invoke, so one list serves
    /// any number of event kinds.
    pub fn notify<E: ?Sized>(&self, event: &E, dispatch: impl Fn(&L, &E)) {
        let listeners = self.snapshot();
        trace!("Notifying {} listeners", listeners.len());
        for listener in &listeners {
            dispatch(&**listener, event);
        }
    }
}

impl<L: ?Sized> Default for ListenerList<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning copies the current registrations into an independent list
impl<L: ?Sized> Clone for ListenerList<L> {
    fn clone(&self) -> Self {
        Self {
            listeners: Mutex::new(self.snapshot()),
        }
    }
}

impl<L: ?Sized> std::fmt::Debug for ListenerList<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerList")
            .field("listeners", &self.len())
            .finish()
    }
}
