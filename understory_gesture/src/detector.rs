// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The detector: owns the open session and runs recognizers over each frame.
//!
//! ## Usage
//!
//! 1) Build a [`Detector`] around a [`Registry`].
//! 2) Hand `Start` snapshots to [`Detector::start_detect`] together with the
//!    element and options of the bound element that should own the session.
//! 3) Hand every other snapshot to [`Detector::detect`], whatever element it
//!    was delivered to.
//! 4) Call [`Detector::advance`] when [`Detector::next_deadline`] passes so
//!    long taps can fire.
//!
//! Each call reports a [`FrameOutcome`] so the host can suppress the native
//! default action or stop native propagation.
//!
//! ## Minimal example
//!
//! ```
//! use std::rc::Rc;
//! use understory_gesture::contact::{Contact, Phase, PointerKind, Snapshot, SourceKind};
//! use understory_gesture::options::GestureOptions;
//! use understory_gesture::sink::Recorder;
//! use understory_gesture::{Detector, Registry};
//!
//! let frame = |phase, x: f64, t| Snapshot::new(
//!     phase,
//!     [Contact::new(1, x, 0.0)].into_iter().collect(),
//!     t,
//!     1_u32,
//!     PointerKind::Touch,
//!     SourceKind::Touch,
//! );
//!
//! let mut detector = Detector::new(Registry::with_default_recognizers());
//! let mut sink = Recorder::default();
//! let options = Rc::new(GestureOptions::default());
//!
//! detector.start_detect(1, options, frame(Phase::Start, 0.0, 0), &mut sink);
//! detector.detect(frame(Phase::End, 2.0, 80), &mut sink);
//! assert_eq!(sink.names(), ["touch", "tap", "release"]);
//! assert!(!detector.is_active());
//! ```

use alloc::rc::Rc;

use crate::contact::{Phase, Snapshot};
use crate::event::GestureEvent;
use crate::options::GestureOptions;
use crate::recognizer::{Context, Flow};
use crate::registry::Registry;
use crate::session::Session;
use crate::sink::EventSink;
use crate::timer::TimerQueue;

/// What a frame asked of the host.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// Suppress the native default action of the input event.
    pub default_prevented: bool,
    /// Stop native propagation of the input event.
    pub propagation_stopped: bool,
    /// The frame ended the session.
    pub session_closed: bool,
}

/// Runs recognizers over one session at a time.
#[derive(Debug)]
pub struct Detector<K> {
    registry: Registry<K>,
    timers: TimerQueue,
    current: Option<Session<K>>,
    previous: Option<Session<K>>,
}

impl<K: Clone> Default for Detector<K> {
    fn default() -> Self {
        Self::new(Registry::with_default_recognizers())
    }
}

impl<K> Detector<K> {
    /// Create an idle detector.
    #[must_use]
    pub fn new(registry: Registry<K>) -> Self {
        Self {
            registry,
            timers: TimerQueue::new(),
            current: None,
            previous: None,
        }
    }

    /// The recognizers in use.
    #[must_use]
    pub fn registry(&self) -> &Registry<K> {
        &self.registry
    }

    /// Mutable access to the recognizers, for registering more.
    ///
    /// Register between sessions: pending timers refer to recognizers by
    /// position.
    pub fn registry_mut(&mut self) -> &mut Registry<K> {
        &mut self.registry
    }

    /// Returns `true` while a session is open.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// The open session.
    #[must_use]
    pub fn session(&self) -> Option<&Session<K>> {
        self.current.as_ref()
    }

    /// The most recently closed session.
    #[must_use]
    pub fn previous(&self) -> Option<&Session<K>> {
        self.previous.as_ref()
    }

    /// When [`advance`](Self::advance) next has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Close the open session now.
    ///
    /// The session becomes [`previous`](Self::previous) and every pending timer
    /// is dropped.
    pub fn stop_detect(&mut self) {
        if let Some(session) = self.current.take() {
            log::debug!("session closed (claimed by {:?})", session.claimed());
            self.previous = Some(session);
        }
        self.timers.clear();
    }
}

impl<K: Clone> Detector<K> {
    /// Open a session on `element` and run the first frame.
    ///
    /// Returns `None` without doing anything if a session is already open.
    pub fn start_detect(
        &mut self,
        element: K,
        options: Rc<GestureOptions>,
        snapshot: Snapshot<K>,
        sink: &mut dyn EventSink<K>,
    ) -> Option<FrameOutcome> {
        if self.current.is_some() {
            log::debug!("start ignored: a session is already open");
            return None;
        }
        log::debug!(
            "session opened with {} contact(s) at {:?}",
            snapshot.contacts.len(),
            snapshot.center
        );
        self.timers.clear();
        self.current = Some(Session::new(element, options, snapshot.clone()));
        self.detect(snapshot, sink)
    }

    /// Run one frame of the open session.
    ///
    /// Returns `None` without doing anything if no session is open.
    pub fn detect(
        &mut self,
        snapshot: Snapshot<K>,
        sink: &mut dyn EventSink<K>,
    ) -> Option<FrameOutcome> {
        let session = self.current.as_mut()?;
        if snapshot.contacts.len() != session.start().contacts.len() {
            session.refresh_start_contacts(&snapshot.contacts);
        }

        let mut ev = GestureEvent::from_frame(session.start(), &snapshot);
        let mut stopped = false;
        for (slot, recognizer) in self.registry.slots_mut().iter_mut().enumerate() {
            if !session.options().is_recognizer_enabled(recognizer.name()) {
                continue;
            }
            let mut ctx = Context::new(
                &mut *session,
                self.previous.as_ref(),
                &mut self.timers,
                &mut *sink,
                slot,
                snapshot.timestamp,
            );
            let flow = recognizer.handle(&mut ev, &mut ctx);
            if flow == Flow::Stop || ctx.stop_requested() || ev.is_detect_stopped() {
                log::debug!("`{}` stopped detection", recognizer.name());
                stopped = true;
                break;
            }
        }

        let outcome = FrameOutcome {
            default_prevented: ev.is_default_prevented(),
            propagation_stopped: ev.is_propagation_stopped(),
            session_closed: stopped || snapshot.phase == Phase::End,
        };
        session.set_last(ev);
        if outcome.session_closed {
            self.stop_detect();
        }
        Some(outcome)
    }

    /// Fire every timer due at or before `now`. Returns how many fired.
    pub fn advance(&mut self, now: u64, sink: &mut dyn EventSink<K>) -> usize {
        let mut fired = 0;
        while let Some((timer, slot)) = self.timers.pop_due(now) {
            let Some(session) = self.current.as_mut() else {
                break;
            };
            let Some(recognizer) = self.registry.slot_mut(slot) else {
                log::warn!("timer fired for missing recognizer slot {slot}");
                continue;
            };
            if !session.options().is_recognizer_enabled(recognizer.name()) {
                continue;
            }
            log::debug!("timer fired for `{}` at {now}", recognizer.name());
            let mut ctx = Context::new(
                session,
                self.previous.as_ref(),
                &mut self.timers,
                &mut *sink,
                slot,
                now,
            );
            recognizer.on_timer(timer, &mut ctx);
            fired += 1;
            if ctx.stop_requested() {
                self.stop_detect();
            }
        }
        fired
    }
}
