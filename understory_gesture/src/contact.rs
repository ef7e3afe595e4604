// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contacts and normalized input frames.
//!
//! A [`Snapshot`] is one platform-agnostic input frame: the set of active
//! [`Contact`]s, their mean position, and where the frame came from. The
//! [`input`](crate::input) normalizer produces snapshots; the
//! [`Detector`](crate::Detector) consumes them.

use kurbo::Point;
use smallvec::SmallVec;

/// Active contacts of a single frame.
///
/// Most interactions have one or two fingers down, so a handful live inline.
pub type Contacts = SmallVec<[Contact; 4]>;

/// One touch, pointer, or mouse position for a single frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact {
    /// Stable identity for the physical contact across frames.
    ///
    /// Touch identifier, pointer id, or [`Contact::MOUSE_ID`] for the mouse.
    pub id: u64,
    /// Position in the host's page/view coordinate space.
    pub position: Point,
}

impl Contact {
    /// The id used for the single mouse contact.
    pub const MOUSE_ID: u64 = 1;

    /// Create a contact at `(x, y)`.
    #[must_use]
    pub const fn new(id: u64, x: f64, y: f64) -> Self {
        Self {
            id,
            position: Point::new(x, y),
        }
    }
}

/// The lifecycle phase of an input frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// First contact of a session went down.
    Start,
    /// Contacts moved, or some (but not all) contacts lifted.
    Move,
    /// The last contact lifted (or the interaction was cancelled).
    End,
}

/// The kind of device behind a session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// A mouse or other indirect pointing device.
    Mouse,
    /// A finger on a touch surface.
    #[default]
    Touch,
    /// A stylus.
    Pen,
}

/// The native input family a frame was normalized from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Touch events carrying a full list of active touches.
    Touch,
    /// Pointer events, delivered one pointer at a time.
    Pointer,
    /// Plain mouse events.
    Mouse,
}

/// One normalized input frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<K> {
    /// Synthesized phase for this frame.
    pub phase: Phase,
    /// Active contacts. Never empty for `Start`/`Move`; an `End` frame carries
    /// the last contacts seen before everything lifted.
    pub contacts: Contacts,
    /// Arithmetic mean of all contact positions.
    pub center: Point,
    /// Frame time in milliseconds.
    pub timestamp: u64,
    /// The element the native event was delivered to.
    pub target: K,
    /// Device kind behind the frame.
    pub pointer_kind: PointerKind,
    /// Native input family the frame was built from.
    pub source: SourceKind,
}

impl<K> Snapshot<K> {
    /// Build a snapshot, computing [`center`](Self::center) from `contacts`.
    #[must_use]
    pub fn new(
        phase: Phase,
        contacts: Contacts,
        timestamp: u64,
        target: K,
        pointer_kind: PointerKind,
        source: SourceKind,
    ) -> Self {
        let center = center_of(&contacts);
        Self {
            phase,
            contacts,
            center,
            timestamp,
            target,
            pointer_kind,
            source,
        }
    }
}

/// Arithmetic mean of the contact positions.
///
/// An empty slice has no center; the result is NaN in both coordinates.
#[must_use]
pub fn center_of(contacts: &[Contact]) -> Point {
    let (sum_x, sum_y) = contacts
        .iter()
        .fold((0.0, 0.0), |(x, y), c| (x + c.position.x, y + c.position.y));
    let n = contacts.len() as f64;
    Point::new(sum_x / n, sum_y / n)
}
