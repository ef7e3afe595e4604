// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input normalizer: fold touch, pointer, and mouse events into one stream of
//! [`Snapshot`]s.
//!
//! ## Usage
//!
//! 1) Translate each native event into an [`InputEvent`]: touch events carry the
//!    full list of active touches, pointer events carry one pointer, mouse
//!    events carry one position and whether the primary button is down.
//! 2) Feed it to [`Normalizer::handle`]. A returned snapshot goes to the
//!    [`Detector`](crate::Detector): `Start` frames to `start_detect`, others to
//!    `detect`.
//!
//! ## Phase synthesis
//!
//! - A native end event that leaves contacts down becomes a `Move`, so a session
//!   only ends when the last contact lifts.
//! - When no contacts remain the frame is forced to `End` and reuses the last
//!   non-empty contact list, since end events usually carry no positions.
//! - Once any touch or pointer event has been seen, mouse events are ignored
//!   until every contact lifts. Hybrid devices fire both.
//!
//! ## Minimal example
//!
//! ```
//! use understory_gesture::contact::{Contact, Phase};
//! use understory_gesture::input::{InputEvent, Normalizer};
//!
//! let mut input = Normalizer::new();
//!
//! let two = [Contact::new(1, 0.0, 0.0), Contact::new(2, 40.0, 0.0)];
//! let snap = input.handle(InputEvent::touch(Phase::Start, &two, 0, ())).unwrap();
//! assert_eq!(snap.phase, Phase::Start);
//!
//! // One finger lifts: still a move.
//! let one = [Contact::new(2, 40.0, 0.0)];
//! let snap = input.handle(InputEvent::touch(Phase::End, &one, 10, ())).unwrap();
//! assert_eq!(snap.phase, Phase::Move);
//!
//! // Last finger lifts: end, with the last known contact.
//! let snap = input.handle(InputEvent::touch(Phase::End, &[], 20, ())).unwrap();
//! assert_eq!(snap.phase, Phase::End);
//! assert_eq!(snap.contacts.as_slice(), &one);
//! ```

use kurbo::Point;
use smallvec::SmallVec;

use crate::contact::{Contact, Contacts, Phase, PointerKind, Snapshot, SourceKind};

/// The payload of a native input event.
#[derive(Clone, Debug, PartialEq)]
pub enum InputSource {
    /// A touch event with every touch currently on the surface.
    Touch {
        /// Active touches after this event.
        touches: Contacts,
    },
    /// A pointer event for a single pointer.
    Pointer {
        /// Pointer id, stable while the pointer is down.
        id: u64,
        /// Device kind.
        kind: PointerKind,
        /// Pointer position.
        position: Point,
    },
    /// A mouse event.
    Mouse {
        /// Mouse position.
        position: Point,
        /// Whether the primary button is the one pressed (`which === 1` on the
        /// web). Ignored for end events.
        primary: bool,
    },
}

/// A native input event, before normalization.
#[derive(Clone, Debug, PartialEq)]
pub struct InputEvent<K> {
    /// Native phase: down/start, move, or up/end/cancel.
    pub phase: Phase,
    /// Event payload.
    pub source: InputSource,
    /// Event time in milliseconds.
    pub timestamp: u64,
    /// The element the native event was delivered to.
    pub target: K,
}

impl<K> InputEvent<K> {
    /// A touch event carrying the full list of active touches.
    pub fn touch(phase: Phase, touches: &[Contact], timestamp: u64, target: K) -> Self {
        Self {
            phase,
            source: InputSource::Touch {
                touches: SmallVec::from_slice(touches),
            },
            timestamp,
            target,
        }
    }

    /// A pointer event for one pointer.
    pub fn pointer(
        phase: Phase,
        id: u64,
        kind: PointerKind,
        position: Point,
        timestamp: u64,
        target: K,
    ) -> Self {
        Self {
            phase,
            source: InputSource::Pointer { id, kind, position },
            timestamp,
            target,
        }
    }

    /// A mouse event.
    pub fn mouse(phase: Phase, position: Point, primary: bool, timestamp: u64, target: K) -> Self {
        Self {
            phase,
            source: InputSource::Mouse { position, primary },
            timestamp,
            target,
        }
    }
}

/// Folds native input events into [`Snapshot`]s.
///
/// State lives for one interaction and resets when the contact count returns to
/// zero.
#[derive(Clone, Debug, Default)]
pub struct Normalizer {
    enabled: bool,
    touch_triggered: bool,
    last_contacts: Option<Contacts>,
    pointers: SmallVec<[Contact; 4]>,
}

impl Normalizer {
    /// Create an idle normalizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once a touch or pointer event has been seen in the
    /// current interaction.
    #[must_use]
    pub fn touch_triggered(&self) -> bool {
        self.touch_triggered
    }

    /// Number of pointers currently tracked from pointer events.
    #[must_use]
    pub fn tracked_pointers(&self) -> usize {
        self.pointers.len()
    }

    /// Normalize one native event.
    ///
    /// Returns `None` when the event does not take part in detection: mouse
    /// input after touch input, mouse movement without the primary button, or
    /// an end event with no contact ever recorded.
    pub fn handle<K>(&mut self, event: InputEvent<K>) -> Option<Snapshot<K>> {
        let InputEvent {
            phase,
            source,
            timestamp,
            target,
        } = event;

        let is_mouse = matches!(source, InputSource::Mouse { .. });
        if is_mouse && self.touch_triggered {
            log::trace!("mouse input suppressed after touch input");
            return None;
        }

        match &source {
            InputSource::Touch { .. } => self.enabled = true,
            InputSource::Pointer { .. } if phase == Phase::Start => self.enabled = true,
            InputSource::Pointer { .. } => {}
            // Releasing a button never disables an interaction in progress.
            InputSource::Mouse { .. } if phase == Phase::End => {}
            InputSource::Mouse { primary, .. } => self.enabled = *primary,
        }
        if !is_mouse {
            self.touch_triggered = true;
        }

        let mut snapshot = None;
        let mut count = 0;
        if self.enabled {
            let (contacts, pointer_kind, source_kind) = match source {
                InputSource::Touch { touches } => (touches, PointerKind::Touch, SourceKind::Touch),
                InputSource::Pointer { id, kind, position } => {
                    self.update_pointer(phase, id, position);
                    (self.pointers.clone(), kind, SourceKind::Pointer)
                }
                InputSource::Mouse { position, .. } => {
                    let contacts = if phase == Phase::End {
                        SmallVec::new()
                    } else {
                        SmallVec::from_elem(Contact::new(Contact::MOUSE_ID, position.x, position.y), 1)
                    };
                    (contacts, PointerKind::Mouse, SourceKind::Mouse)
                }
            };
            count = contacts.len();

            let phase = match phase {
                Phase::End if count > 0 => Phase::Move,
                _ if count == 0 => Phase::End,
                other => other,
            };

            if count > 0 || self.last_contacts.is_none() {
                self.last_contacts = Some(contacts);
            }
            snapshot = self.last_contacts.clone().map(|contacts| {
                Snapshot::new(phase, contacts, timestamp, target, pointer_kind, source_kind)
            });
        }

        if count == 0 {
            self.reset();
        }
        if let Some(snap) = &snapshot {
            log::trace!(
                "normalized {:?} frame: {} contact(s) at {:?}",
                snap.phase,
                snap.contacts.len(),
                snap.center
            );
        }
        snapshot.filter(|snap| !snap.contacts.is_empty())
    }

    /// Forget all interaction state.
    pub fn reset(&mut self) {
        self.enabled = false;
        self.touch_triggered = false;
        self.last_contacts = None;
        self.pointers.clear();
    }

    fn update_pointer(&mut self, phase: Phase, id: u64, position: Point) {
        let existing = self.pointers.iter().position(|c| c.id == id);
        match (phase, existing) {
            (Phase::End, Some(ix)) => {
                self.pointers.remove(ix);
            }
            (Phase::End, None) => {}
            (_, Some(ix)) => self.pointers[ix].position = position,
            (_, None) => self.pointers.push(Contact { id, position }),
        }
    }
}
