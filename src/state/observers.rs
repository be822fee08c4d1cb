//! Synchronous observer registry shared by the stores.
//!
//! DESIGN
//! ======
//! A plain callback list stands in for framework reactivity at the store
//! boundary: stores stay renderer-agnostic and host-testable, and the UI
//! layer bridges notifications into its own signals. Delivery is synchronous
//! and in subscription order; there is no queue.

#[cfg(test)]
#[path = "observers_test.rs"]
mod observers_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Capability returned by [`Observers::subscribe`]; pass it back to
/// [`Observers::unsubscribe`] to remove the callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObserverId(usize);

/// Registry of callbacks notified with a `&T` on every state change.
pub struct Observers<T> {
    entries: RefCell<Vec<(usize, Rc<dyn Fn(&T)>)>>,
    next: Cell<usize>,
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
            next: Cell::new(0),
        }
    }
}

impl<T> Observers<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` and return the capability that removes it.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> ObserverId {
        let id = self.next.get();
        self.next.set(id + 1);
        self.entries.borrow_mut().push((id, Rc::new(callback)));
        ObserverId(id)
    }

    /// Remove the callback registered under `id`. No-op if already removed.
    pub fn unsubscribe(&self, id: ObserverId) {
        self.entries.borrow_mut().retain(|(entry, _)| *entry != id.0);
    }

    /// Invoke every registered callback with `value`, synchronously.
    ///
    /// Callbacks are snapshotted before the first call, so a callback may
    /// subscribe or unsubscribe without poisoning the iteration.
    pub fn notify(&self, value: &T) {
        let callbacks: Vec<Rc<dyn Fn(&T)>> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in callbacks {
            callback(value);
        }
    }
}
