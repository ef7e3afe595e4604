// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element gesture listeners.
//!
//! A listener is registered for one or more gesture names at once; names are
//! separated by whitespace (`"swipeleft swiperight"`). Removing some of its
//! names keeps the listener for the rest.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;
use understory_gesture::GestureEvent;

use crate::dispatcher::Outcome;

/// Handle returned by [`Gestures::on`](crate::Gestures::on).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// A gesture listener: receives the element it is registered on and the event.
pub type Handler<K> = Box<dyn FnMut(&K, &mut GestureEvent<K>) -> Outcome>;

struct Entry<K> {
    id: ListenerId,
    names: Vec<String>,
    handler: Handler<K>,
}

impl<K> fmt::Debug for Entry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("id", &self.id)
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}

/// Listeners keyed by element.
pub struct Listeners<K> {
    next_id: u64,
    by_element: HashMap<K, Vec<Entry<K>>>,
}

impl<K> Default for Listeners<K> {
    fn default() -> Self {
        Self {
            next_id: 0,
            by_element: HashMap::new(),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Listeners<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("by_element", &self.by_element)
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq + Hash> Listeners<K> {
    /// No listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` on `element` for every whitespace-separated name in
    /// `names`.
    pub fn add(&mut self, element: K, names: &str, handler: Handler<K>) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        let names = names.split_whitespace().map(ToString::to_string).collect();
        self.by_element.entry(element).or_default().push(Entry {
            id,
            names,
            handler,
        });
        id
    }

    /// Stop delivering `names` to listener `id` on `element`. Returns `true` if
    /// anything was removed.
    pub fn remove(&mut self, element: &K, names: &str, id: ListenerId) -> bool {
        let Some(entries) = self.by_element.get_mut(element) else {
            return false;
        };
        let mut removed = false;
        for entry in entries.iter_mut().filter(|e| e.id == id) {
            for name in names.split_whitespace() {
                let before = entry.names.len();
                entry.names.retain(|n| n != name);
                removed |= entry.names.len() != before;
            }
        }
        entries.retain(|e| !e.names.is_empty());
        if entries.is_empty() {
            self.by_element.remove(element);
        }
        removed
    }

    /// Number of listeners on `element` that receive `name`.
    #[must_use]
    pub fn count(&self, element: &K, name: &str) -> usize {
        self.by_element.get(element).map_or(0, |entries| {
            entries
                .iter()
                .filter(|e| e.names.iter().any(|n| n == name))
                .count()
        })
    }

    /// Call every listener on `element` that receives `name`, in registration
    /// order. Returns the strongest outcome any of them asked for.
    pub fn call(&mut self, element: &K, name: &str, event: &mut GestureEvent<K>) -> Outcome {
        let Some(entries) = self.by_element.get_mut(element) else {
            return Outcome::Continue;
        };
        let mut outcome = Outcome::Continue;
        for entry in entries
            .iter_mut()
            .filter(|e| e.names.iter().any(|n| n == name))
        {
            outcome = outcome.max((entry.handler)(element, event));
        }
        outcome
    }
}
