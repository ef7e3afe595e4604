// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where recognized gestures go.
//!
//! The detector hands every emitted gesture to an [`EventSink`]. Closures of
//! the right shape are sinks, and [`Recorder`] keeps a copy of everything for
//! tests and tools.
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::event::GestureEvent;
//! use understory_gesture::sink::{EventSink, Recorder};
//!
//! let mut rec = Recorder::default();
//! let mut ev = GestureEvent::at(Point::ORIGIN, 0, 7_u32);
//! rec.dispatch(&7, "tap", &mut ev);
//! assert_eq!(rec.names(), ["tap"]);
//! ```

use alloc::vec::Vec;

use crate::event::GestureEvent;

/// Receives gestures as recognizers emit them.
///
/// `element` is the bound element of the session; `event.target` is the
/// element the input was delivered to. Listeners may call the control methods
/// on `event`; the detector reads them back after the recognizer returns.
pub trait EventSink<K> {
    /// Deliver one named gesture.
    fn dispatch(&mut self, element: &K, name: &'static str, event: &mut GestureEvent<K>);
}

impl<K, F> EventSink<K> for F
where
    F: FnMut(&K, &'static str, &mut GestureEvent<K>),
{
    fn dispatch(&mut self, element: &K, name: &'static str, event: &mut GestureEvent<K>) {
        self(element, name, event);
    }
}

/// One gesture captured by a [`Recorder`].
#[derive(Clone, Debug, PartialEq)]
pub struct Emitted<K> {
    /// Bound element of the session.
    pub element: K,
    /// Gesture name.
    pub name: &'static str,
    /// The event as it looked when dispatched.
    pub event: GestureEvent<K>,
}

/// A sink that keeps everything it receives.
#[derive(Clone, Debug)]
pub struct Recorder<K> {
    /// Gestures in dispatch order.
    pub emitted: Vec<Emitted<K>>,
}

impl<K> Default for Recorder<K> {
    fn default() -> Self {
        Self {
            emitted: Vec::new(),
        }
    }
}

impl<K> Recorder<K> {
    /// Names of all captured gestures, in order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.emitted.iter().map(|e| e.name).collect()
    }

    /// How often `name` was captured.
    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        self.emitted.iter().filter(|e| e.name == name).count()
    }

    /// Forget everything captured so far.
    pub fn clear(&mut self) {
        self.emitted.clear();
    }
}

impl<K: Clone> EventSink<K> for Recorder<K> {
    fn dispatch(&mut self, element: &K, name: &'static str, event: &mut GestureEvent<K>) {
        self.emitted.push(Emitted {
            element: element.clone(),
            name,
            event: event.clone(),
        });
    }
}
