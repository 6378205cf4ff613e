// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ordered observer registry for inbound events.
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`ObserverList`] - Registry that stores observers and dispatches events

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use super::InboundEvent;

/// Unique identifier for a registered observer.
///
/// IDs are unique within one [`ObserverList`] and increase with registration
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Type alias for event observers.
type Observer = Arc<dyn Fn(&InboundEvent) + Send + Sync>;

/// Registry of event observers, kept in registration order.
///
/// Dispatch iterates a snapshot taken when the event arrives: observers
/// registered while a dispatch is running (including from inside an
/// observer) only see later events, and observers can unsubscribe
/// themselves without deadlocking.
pub struct ObserverList {
    /// Counter for generating unique subscription IDs.
    next_id: AtomicU64,
    /// Observers in registration order.
    observers: RwLock<Vec<(SubscriptionId, Observer)>>,
}

impl ObserverList {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Appends an observer and returns its subscription ID.
    pub fn register<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&InboundEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers.write().push((id, Arc::new(observer)));
        id
    }

    /// Removes an observer.
    ///
    /// Returns `true` if an observer was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.write();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    /// Removes every observer.
    pub fn clear(&self) {
        self.observers.write().clear();
    }

    /// Returns the number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.read().len()
    }

    /// Returns true if no observer is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.read().is_empty()
    }

    /// Delivers `event` to every observer, in registration order.
    ///
    /// Returns the number of observers invoked.
    pub fn dispatch(&self, event: &InboundEvent) -> usize {
        let snapshot: Vec<Observer> = self
            .observers
            .read()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        for observer in &snapshot {
            observer(event);
        }
        snapshot.len()
    }
}

impl Default for ObserverList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList")
            .field("observers", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;

    fn event(json: &str) -> InboundEvent {
        InboundEvent::from_text(json).unwrap()
    }

    #[test]
    fn ids_increase_with_registration() {
        let list = ObserverList::new();
        let first = list.register(|_| {});
        let second = list.register(|_| {});
        assert!(first < second);
        assert_eq!(first.value() + 1, second.value());
    }

    #[test]
    fn dispatch_follows_registration_order() {
        let list = ObserverList::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        for label in ["A", "B", "C"] {
            let log = Arc::clone(&log);
            list.register(move |_| log.lock().push(label));
        }

        let delivered = list.dispatch(&event(r#"{"type":"x"}"#));

        assert_eq!(delivered, 3);
        assert_eq!(*log.lock(), vec!["A", "B", "C"]);
    }

    #[test]
    fn unsubscribe_removes_only_that_observer() {
        let list = ObserverList::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let log_a = Arc::clone(&log);
        let a = list.register(move |_| log_a.lock().push("A"));
        let log_b = Arc::clone(&log);
        list.register(move |_| log_b.lock().push("B"));

        assert!(list.unsubscribe(a));
        assert!(!list.unsubscribe(a));

        list.dispatch(&event("1"));
        assert_eq!(*log.lock(), vec!["B"]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn observer_registered_during_dispatch_sees_next_event_only() {
        let list = Arc::new(ObserverList::new());
        let late_calls = Arc::new(AtomicU64::new(0));

        let registrar = Arc::clone(&list);
        let counter = Arc::clone(&late_calls);
        let registered = Arc::new(std::sync::atomic::AtomicBool::new(false));
        list.register(move |_| {
            if !registered.swap(true, Ordering::SeqCst) {
                let counter = Arc::clone(&counter);
                registrar.register(move |_| {
                    counter.fetch_add(1, Ordering::SeqCst);
                });
            }
        });

        assert_eq!(list.dispatch(&event("1")), 1);
        assert_eq!(late_calls.load(Ordering::SeqCst), 0);

        assert_eq!(list.dispatch(&event("2")), 2);
        assert_eq!(late_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn clear_empties_registry() {
        let list = ObserverList::new();
        list.register(|_| {});
        list.register(|_| {});
        assert_eq!(list.len(), 2);

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.dispatch(&event("null")), 0);
    }
}
