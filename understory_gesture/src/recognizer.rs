// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recognizer interface.
//!
//! A recognizer is a small state machine that sees every frame of a session,
//! in priority order, and may emit named gestures through its [`Context`].
//!
//! ## Writing a recognizer
//!
//! ```
//! use understory_gesture::event::GestureEvent;
//! use understory_gesture::options::{GestureOptions, OptionValue};
//! use understory_gesture::recognizer::{Context, Flow, Recognizer};
//! use understory_gesture::contact::Phase;
//!
//! /// Fires `flick` on release when the speed is high enough.
//! #[derive(Debug, Default)]
//! struct Flick;
//!
//! impl<K: Clone> Recognizer<K> for Flick {
//!     fn name(&self) -> &'static str { "flick" }
//!     fn priority(&self) -> i32 { 42 }
//!     fn defaults(&self, options: &mut GestureOptions) {
//!         options.set_default("flick_velocity", OptionValue::Number(2.0));
//!     }
//!     fn handle(&mut self, ev: &mut GestureEvent<K>, ctx: &mut Context<'_, K>) -> Flow {
//!         let min = ctx.options().number("flick_velocity").unwrap_or(2.0);
//!         if ev.phase == Phase::End && (ev.velocity.x >= min || ev.velocity.y >= min) {
//!             ctx.trigger("flick", ev);
//!         }
//!         Flow::Continue
//!     }
//! }
//! ```

use core::fmt::Debug;

use crate::event::GestureEvent;
use crate::options::GestureOptions;
use crate::session::Session;
use crate::sink::EventSink;
use crate::timer::{TimerId, TimerQueue};

/// What the detector does after a recognizer ran.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Run the remaining recognizers.
    Continue,
    /// Skip the remaining recognizers of this frame and close the session.
    Stop,
}

/// Priorities of the built-in recognizers. Lower runs first.
pub mod priority {
    /// The `touch` sentinel; always first.
    pub const TOUCH: i32 = i32::MIN;
    /// Long tap.
    pub const LONG_TAP: i32 = 10;
    /// Swipe.
    pub const SWIPE: i32 = 40;
    /// Pinch and rotate.
    pub const TRANSFORM: i32 = 45;
    /// Drag.
    pub const DRAG: i32 = 50;
    /// Tap and double tap.
    pub const TAP: i32 = 100;
    /// The `release` sentinel; always last.
    pub const RELEASE: i32 = i32::MAX;
}

/// A pluggable gesture state machine.
///
/// Instances live in a [`Registry`](crate::Registry) for the lifetime of the
/// detector, so any per-session state must be reset when a new session starts.
pub trait Recognizer<K>: Debug {
    /// Name used for claims and for the per-element enable switch.
    fn name(&self) -> &'static str;

    /// Sort key; lower runs first.
    fn priority(&self) -> i32;

    /// Seed default values into `options`, without replacing existing ones.
    fn defaults(&self, options: &mut GestureOptions) {
        let _ = options;
    }

    /// Inspect one frame.
    ///
    /// Returning [`Flow::Stop`] suppresses every recognizer after this one for
    /// the frame and ends the session.
    fn handle(&mut self, event: &mut GestureEvent<K>, ctx: &mut Context<'_, K>) -> Flow;

    /// A timer armed through [`Context::set_timer`] came due.
    fn on_timer(&mut self, timer: TimerId, ctx: &mut Context<'_, K>) {
        let _ = (timer, ctx);
    }
}

/// A recognizer's window onto the detector while it runs.
pub struct Context<'a, K> {
    session: &'a mut Session<K>,
    previous: Option<&'a Session<K>>,
    timers: &'a mut TimerQueue,
    sink: &'a mut dyn EventSink<K>,
    slot: usize,
    now: u64,
    stop_requested: bool,
}

impl<K> Debug for Context<'_, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Context")
            .field("slot", &self.slot)
            .field("now", &self.now)
            .field("claimed", &self.session.claimed())
            .field("stop_requested", &self.stop_requested)
            .finish_non_exhaustive()
    }
}

impl<'a, K> Context<'a, K> {
    pub(crate) fn new(
        session: &'a mut Session<K>,
        previous: Option<&'a Session<K>>,
        timers: &'a mut TimerQueue,
        sink: &'a mut dyn EventSink<K>,
        slot: usize,
        now: u64,
    ) -> Self {
        Self {
            session,
            previous,
            timers,
            sink,
            slot,
            now,
            stop_requested: false,
        }
    }

    /// Options of the bound element.
    #[must_use]
    pub fn options(&self) -> &GestureOptions {
        self.session.options()
    }

    /// The open session.
    #[must_use]
    pub fn session(&self) -> &Session<K> {
        &*self.session
    }

    /// The session that closed before this one, if any.
    #[must_use]
    pub fn previous(&self) -> Option<&Session<K>> {
        self.previous
    }

    /// Take ownership of the session.
    pub fn claim(&mut self, name: &'static str) {
        self.session.claim(name);
    }

    /// Returns `true` if `name` owns the session.
    #[must_use]
    pub fn is_claimed_by(&self, name: &str) -> bool {
        self.session.is_claimed_by(name)
    }

    /// Emit a named gesture on the session's element.
    pub fn trigger(&mut self, name: &'static str, event: &mut GestureEvent<K>) {
        log::trace!("emit `{name}`");
        self.sink.dispatch(self.session.element(), name, event);
        if event.is_detect_stopped() {
            self.stop_requested = true;
        }
    }

    /// Arm a timer that fires `delay` milliseconds from now.
    ///
    /// Every pending timer is dropped when the session closes.
    pub fn set_timer(&mut self, delay: u64) -> TimerId {
        self.timers.schedule(self.now.saturating_add(delay), self.slot)
    }

    /// Disarm a timer armed earlier.
    pub fn clear_timer(&mut self, timer: TimerId) -> bool {
        self.timers.cancel(timer)
    }

    /// End the session once this recognizer returns.
    pub fn stop_detect(&mut self) {
        self.stop_requested = true;
    }

    /// Current time in milliseconds: the frame time, or the time passed to
    /// [`Detector::advance`](crate::Detector::advance) for timers.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    pub(crate) fn stop_requested(&self) -> bool {
        self.stop_requested
    }
}
