// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture hub: bound elements, their listeners, and the detector that
//! serves them.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;
use understory_gesture::{
    Detector, EventSink, FrameOutcome, GestureEvent, GestureOptions, InputEvent, Normalizer,
    Phase, Registry,
};

use crate::dispatcher::{self, Outcome};
use crate::error::BindError;
use crate::listeners::{ListenerId, Listeners};
use crate::tree::{ElementTree, bubble_path, is_descendant_or_self, nearest_ancestor_or_self};

#[derive(Clone, Debug)]
struct Instance {
    options: Rc<GestureOptions>,
    enabled: bool,
}

/// Gesture recognition bound to elements of a host tree.
///
/// One hub serves one tree. It owns the input [`Normalizer`], a [`Detector`]
/// built from the registry it was given, and the listeners registered with
/// [`on`](Self::on). At most one session is open at a time, on the nearest
/// enabled bound element above the first contact's target.
pub struct Gestures<K, T> {
    tree: T,
    input: Normalizer,
    detector: Detector<K>,
    instances: HashMap<K, Instance>,
    listeners: Listeners<K>,
}

impl<K: fmt::Debug, T: fmt::Debug> fmt::Debug for Gestures<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gestures")
            .field("tree", &self.tree)
            .field("input", &self.input)
            .field("detector", &self.detector)
            .field("instances", &self.instances)
            .finish_non_exhaustive()
    }
}

impl<K, T> Gestures<K, T>
where
    K: Copy + Eq + Hash + fmt::Debug,
    T: ElementTree<K>,
{
    /// A hub over `tree` that recognizes the gestures in `registry`.
    pub fn new(tree: T, registry: Registry<K>) -> Self {
        Self {
            tree,
            input: Normalizer::new(),
            detector: Detector::new(registry),
            instances: HashMap::new(),
            listeners: Listeners::new(),
        }
    }

    /// A hub over `tree` with the built-in recognizers.
    pub fn with_default_recognizers(tree: T) -> Self {
        Self::new(tree, Registry::with_default_recognizers())
    }

    /// The host tree.
    pub fn tree(&self) -> &T {
        &self.tree
    }

    /// The host tree, for structural edits.
    pub fn tree_mut(&mut self) -> &mut T {
        &mut self.tree
    }

    /// The detector, for registry access and session inspection.
    pub fn detector(&self) -> &Detector<K> {
        &self.detector
    }

    /// The detector. Register recognizers only while no session is open.
    pub fn detector_mut(&mut self) -> &mut Detector<K> {
        &mut self.detector
    }

    /// Bind `element` with `options`.
    ///
    /// Recognizer defaults are merged under `options`; keys the caller set
    /// win. Binding an element that is already bound replaces its options and
    /// keeps its enabled flag; an open session keeps the options it started
    /// with.
    pub fn bind(&mut self, element: K, options: GestureOptions) -> Result<(), BindError> {
        if !self.tree.contains(&element) {
            return Err(BindError::NotAnElement);
        }
        let options = Rc::new(self.detector.registry().defaults(options));
        match self.instances.get_mut(&element) {
            Some(instance) => {
                log::debug!("rebound {element:?}");
                instance.options = options;
            }
            None => {
                log::debug!("bound {element:?}");
                self.instances.insert(
                    element,
                    Instance {
                        options,
                        enabled: true,
                    },
                );
            }
        }
        Ok(())
    }

    /// Forget `element`'s binding. Its listeners stay registered.
    pub fn unbind(&mut self, element: &K) -> Result<(), BindError> {
        if self.instances.remove(element).is_none() {
            return Err(BindError::NotBound);
        }
        log::debug!("unbound {element:?}");
        Ok(())
    }

    /// Allow or refuse new sessions on `element`. An open session continues.
    pub fn enable(&mut self, element: &K, enabled: bool) -> Result<(), BindError> {
        let instance = self.instances.get_mut(element).ok_or(BindError::NotBound)?;
        instance.enabled = enabled;
        Ok(())
    }

    /// Returns `true` if `element` is bound and enabled.
    pub fn is_enabled(&self, element: &K) -> bool {
        self.instances.get(element).is_some_and(|i| i.enabled)
    }

    /// The options `element` is bound with, defaults merged.
    pub fn options(&self, element: &K) -> Option<&GestureOptions> {
        self.instances.get(element).map(|i| &*i.options)
    }

    /// Listen on `element` for each whitespace-separated gesture in `names`.
    pub fn on(
        &mut self,
        element: K,
        names: &str,
        handler: impl FnMut(&K, &mut GestureEvent<K>) -> Outcome + 'static,
    ) -> ListenerId {
        self.listeners.add(element, names, Box::new(handler))
    }

    /// Stop listener `id` on `element` from receiving `names`.
    pub fn off(&mut self, element: &K, names: &str, id: ListenerId) -> bool {
        self.listeners.remove(element, names, id)
    }

    /// Deliver gesture `name` for `element` by hand.
    ///
    /// The event goes to its target when that lies within `element`, else to
    /// `element`, and bubbles from there to the root. Returns `true` if a
    /// listener consumed it.
    pub fn trigger(&mut self, element: K, name: &str, event: &mut GestureEvent<K>) -> bool {
        deliver(&self.tree, &mut self.listeners, element, name, event)
    }

    /// Feed one native input event.
    ///
    /// A starting frame with no session open looks for the nearest enabled
    /// bound element at or above the target and opens a session there. A
    /// starting frame while a session is open (another finger landing) only
    /// updates the normalizer; the next move picks up the new contacts. Other
    /// frames drive the open session, whichever element it belongs to. Returns
    /// `None` when the event took no part in detection.
    pub fn handle_input(&mut self, input: InputEvent<K>) -> Option<FrameOutcome> {
        let snapshot = self.input.handle(input)?;
        let mut sink = HubSink {
            tree: &self.tree,
            listeners: &mut self.listeners,
        };
        if snapshot.phase == Phase::Start {
            if self.detector.is_active() {
                log::debug!(
                    "start with {} contact(s) ignored: a session is already open",
                    snapshot.contacts.len()
                );
                return None;
            }
            let instances = &self.instances;
            let Some(element) = nearest_ancestor_or_self(&self.tree, snapshot.target, |n| {
                instances.get(n).is_some_and(|i| i.enabled)
            }) else {
                log::trace!("no enabled instance above {:?}", snapshot.target);
                return None;
            };
            let options = self.instances.get(&element)?.options.clone();
            self.detector
                .start_detect(element, options, snapshot, &mut sink)
        } else {
            self.detector.detect(snapshot, &mut sink)
        }
    }

    /// Fire gesture timers due at or before `now`. Returns how many fired.
    pub fn advance(&mut self, now: u64) -> usize {
        let mut sink = HubSink {
            tree: &self.tree,
            listeners: &mut self.listeners,
        };
        self.detector.advance(now, &mut sink)
    }

    /// When [`advance`](Self::advance) next has work, if ever.
    pub fn next_deadline(&self) -> Option<u64> {
        self.detector.next_deadline()
    }

    /// Returns `true` while a session is open.
    pub fn is_detecting(&self) -> bool {
        self.detector.is_active()
    }

    /// Close the open session and forget partial input.
    pub fn cancel(&mut self) {
        self.detector.stop_detect();
        self.input.reset();
    }
}

fn deliver<K, T>(
    tree: &T,
    listeners: &mut Listeners<K>,
    element: K,
    name: &str,
    event: &mut GestureEvent<K>,
) -> bool
where
    K: Copy + Eq + Hash + fmt::Debug,
    T: ElementTree<K>,
{
    let start = if is_descendant_or_self(tree, event.target, element) {
        event.target
    } else {
        element
    };
    log::trace!("`{name}` on {element:?}, dispatched from {start:?}");
    let path = bubble_path(tree, start);
    let mut stopped = false;
    let consumed = dispatcher::run(&path, event, |node, ev| {
        let outcome = listeners.call(node, name, ev);
        stopped |= outcome != Outcome::Continue;
        outcome
    });
    if stopped {
        event.stop_propagation();
    }
    consumed
}

struct HubSink<'a, K, T> {
    tree: &'a T,
    listeners: &'a mut Listeners<K>,
}

impl<K, T> EventSink<K> for HubSink<'_, K, T>
where
    K: Copy + Eq + Hash + fmt::Debug,
    T: ElementTree<K>,
{
    fn dispatch(&mut self, element: &K, name: &'static str, event: &mut GestureEvent<K>) {
        deliver(self.tree, self.listeners, *element, name, event);
    }
}
