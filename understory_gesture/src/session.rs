// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detection session: one interaction from first contact to last lift.
//!
//! A session records the start frame, the last processed frame, and which
//! recognizer currently owns the interaction. Ownership only changes through
//! [`Session::claim`], so continuous gestures (drag, transform) can notice when
//! another recognizer took over and wind themselves down.
//!
//! ```
//! use std::rc::Rc;
//! use understory_gesture::contact::{Contact, Phase, PointerKind, Snapshot, SourceKind};
//! use understory_gesture::options::GestureOptions;
//! use understory_gesture::session::Session;
//!
//! let start = Snapshot::new(
//!     Phase::Start,
//!     [Contact::new(1, 0.0, 0.0)].into_iter().collect(),
//!     0,
//!     "canvas",
//!     PointerKind::Touch,
//!     SourceKind::Touch,
//! );
//! let mut session = Session::new("canvas", Rc::new(GestureOptions::default()), start);
//! assert_eq!(session.claimed(), None);
//!
//! session.claim("drag");
//! assert!(session.is_claimed_by("drag"));
//! assert!(!session.is_claimed_by("transform"));
//! ```

use alloc::rc::Rc;

use crate::contact::{Contacts, Snapshot};
use crate::event::GestureEvent;
use crate::kinematics::Direction;
use crate::options::GestureOptions;

/// State of one interaction.
#[derive(Clone, Debug)]
pub struct Session<K> {
    element: K,
    options: Rc<GestureOptions>,
    start: Snapshot<K>,
    last: Option<GestureEvent<K>>,
    claimed: Option<&'static str>,
}

impl<K> Session<K> {
    /// Open a session on `element` with `start` as its first frame.
    #[must_use]
    pub fn new(element: K, options: Rc<GestureOptions>, start: Snapshot<K>) -> Self {
        Self {
            element,
            options,
            start,
            last: None,
            claimed: None,
        }
    }

    /// The bound element the session started on.
    #[must_use]
    pub fn element(&self) -> &K {
        &self.element
    }

    /// Options of the bound element, captured when the session opened.
    #[must_use]
    pub fn options(&self) -> &GestureOptions {
        &self.options
    }

    /// The frame all kinematics are measured against.
    #[must_use]
    pub fn start(&self) -> &Snapshot<K> {
        &self.start
    }

    /// The most recently completed frame, if any.
    #[must_use]
    pub fn last(&self) -> Option<&GestureEvent<K>> {
        self.last.as_ref()
    }

    /// Name of the recognizer that currently owns the session.
    #[must_use]
    pub fn claimed(&self) -> Option<&'static str> {
        self.claimed
    }

    /// Returns `true` if `name` owns the session.
    #[must_use]
    pub fn is_claimed_by(&self, name: &str) -> bool {
        self.claimed == Some(name)
    }

    /// Hand ownership of the session to `name`.
    pub fn claim(&mut self, name: &'static str) {
        if self.claimed != Some(name) {
            log::debug!("session claimed by `{name}` (was {:?})", self.claimed);
            self.claimed = Some(name);
        }
    }

    /// Direction reported by the last frame.
    #[must_use]
    pub fn last_direction(&self) -> Option<Direction> {
        self.last.as_ref().map(|ev| ev.direction)
    }

    /// Whether the last frame was locked to an axis.
    #[must_use]
    pub fn last_locked(&self) -> bool {
        self.last.as_ref().is_some_and(|ev| ev.locked_to_axis)
    }

    /// Replace the start contacts, keeping the start center and time.
    ///
    /// Fingers rarely land in the same frame; scale and rotation are measured
    /// against the contact set that is actually down.
    pub(crate) fn refresh_start_contacts(&mut self, contacts: &Contacts) {
        self.start.contacts.clone_from(contacts);
    }

    pub(crate) fn set_last(&mut self, event: GestureEvent<K>) {
        self.last = Some(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{Contact, Phase, PointerKind, SourceKind};
    use kurbo::Point;
    use smallvec::smallvec;

    fn session() -> Session<u32> {
        let start = Snapshot::new(
            Phase::Start,
            smallvec![Contact::new(1, 0.0, 0.0)],
            0,
            1,
            PointerKind::Touch,
            SourceKind::Touch,
        );
        Session::new(1, Rc::new(GestureOptions::default()), start)
    }

    #[test]
    fn claims_replace_each_other() {
        let mut s = session();
        s.claim("lontap");
        s.claim("drag");
        assert_eq!(s.claimed(), Some("drag"));
        assert!(!s.is_claimed_by("lontap"));
    }

    #[test]
    fn refresh_keeps_start_center() {
        let mut s = session();
        let two: Contacts = smallvec![Contact::new(1, 0.0, 0.0), Contact::new(2, 10.0, 0.0)];
        s.refresh_start_contacts(&two);
        assert_eq!(s.start().contacts.len(), 2);
        assert_eq!(s.start().center, Point::ORIGIN);
    }

    #[test]
    fn last_frame_queries() {
        let mut s = session();
        assert_eq!(s.last_direction(), None);
        assert!(!s.last_locked());

        let mut ev = GestureEvent::at(Point::ORIGIN, 5, 1);
        ev.direction = Direction::Up;
        ev.locked_to_axis = true;
        s.set_last(ev);
        assert_eq!(s.last_direction(), Some(Direction::Up));
        assert!(s.last_locked());
    }
}
