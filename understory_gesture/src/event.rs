// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The payload delivered with every emitted gesture, and the event names.

use kurbo::{Point, Vec2};

use crate::contact::{Contacts, Phase, PointerKind, Snapshot, SourceKind};
use crate::kinematics::{Direction, Kinematics};

/// Gesture event names.
///
/// Directional variants are built with [`swipe`], [`drag`], and friends.
pub mod names {
    use crate::kinematics::Direction;

    /// First contact of a session.
    pub const TOUCH: &str = "touch";
    /// Last contact lifted.
    pub const RELEASE: &str = "release";
    /// Quick press and release.
    pub const TAP: &str = "tap";
    /// Second tap shortly after a first one.
    pub const DOUBLE_TAP: &str = "doubletap";
    /// Press held without moving.
    pub const LONG_TAP: &str = "lontap";
    /// Fast flick, on release.
    pub const SWIPE: &str = "swipe";
    /// Flick to the left.
    pub const SWIPE_LEFT: &str = "swipeleft";
    /// Flick to the right.
    pub const SWIPE_RIGHT: &str = "swiperight";
    /// Flick upwards.
    pub const SWIPE_UP: &str = "swipeup";
    /// Flick downwards.
    pub const SWIPE_DOWN: &str = "swipedown";
    /// Drag movement.
    pub const DRAG: &str = "drag";
    /// Drag movement to the left.
    pub const DRAG_LEFT: &str = "dragleft";
    /// Drag movement to the right.
    pub const DRAG_RIGHT: &str = "dragright";
    /// Drag movement upwards.
    pub const DRAG_UP: &str = "dragup";
    /// Drag movement downwards.
    pub const DRAG_DOWN: &str = "dragdown";
    /// A drag began.
    pub const DRAG_START: &str = "dragstart";
    /// A drag ended or was pre-empted.
    pub const DRAG_END: &str = "dragend";
    /// Two-finger transform movement.
    pub const TRANSFORM: &str = "transform";
    /// A transform began.
    pub const TRANSFORM_START: &str = "transformstart";
    /// A transform ended or was pre-empted.
    pub const TRANSFORM_END: &str = "transformend";
    /// Two-finger rotation.
    pub const ROTATE: &str = "rotate";
    /// Two-finger spread change.
    pub const PINCH: &str = "pinch";
    /// Fingers moved together.
    pub const PINCH_IN: &str = "pinchin";
    /// Fingers moved apart.
    pub const PINCH_OUT: &str = "pinchout";

    /// `swipe` plus direction.
    #[must_use]
    pub const fn swipe(direction: Direction) -> &'static str {
        match direction {
            Direction::Left => SWIPE_LEFT,
            Direction::Right => SWIPE_RIGHT,
            Direction::Up => SWIPE_UP,
            Direction::Down => SWIPE_DOWN,
        }
    }

    /// `drag` plus direction.
    #[must_use]
    pub const fn drag(direction: Direction) -> &'static str {
        match direction {
            Direction::Left => DRAG_LEFT,
            Direction::Right => DRAG_RIGHT,
            Direction::Up => DRAG_UP,
            Direction::Down => DRAG_DOWN,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct Control {
    default_prevented: bool,
    propagation_stopped: bool,
    detect_stopped: bool,
}

/// A gesture frame as seen by recognizers and listeners.
///
/// Built once per input frame and shared by every recognizer of that frame, so
/// a recognizer may adjust fields (Drag clamps [`direction`](Self::direction)
/// when locked to an axis) for the ones after it.
///
/// The control methods do not act on anything directly. The
/// [`Detector`](crate::Detector) reads them after each recognizer and reports
/// them to the host in a [`FrameOutcome`](crate::FrameOutcome).
#[derive(Clone, Debug, PartialEq)]
pub struct GestureEvent<K> {
    /// Synthesized phase of the frame.
    pub phase: Phase,
    /// Mean contact position.
    pub center: Point,
    /// Frame time in milliseconds.
    pub timestamp: u64,
    /// The element the native event was delivered to.
    pub target: K,
    /// Active contacts.
    pub contacts: Contacts,
    /// Device kind behind the session.
    pub pointer_kind: PointerKind,
    /// Native input family behind the frame.
    pub source: SourceKind,
    /// Center of the session's start frame.
    pub start_center: Point,
    /// Time of the session's start frame.
    pub start_timestamp: u64,
    /// Milliseconds since the start frame.
    pub delta_time: u64,
    /// Center movement since the start frame.
    pub delta: Vec2,
    /// Absolute per-axis speed in pixels per millisecond.
    pub velocity: Vec2,
    /// Distance moved since the start frame.
    pub distance: f64,
    /// Movement angle in degrees.
    pub angle: f64,
    /// Dominant movement direction.
    pub direction: Direction,
    /// Finger spread ratio against the start frame.
    pub scale: f64,
    /// Finger rotation in degrees against the start frame.
    pub rotation: f64,
    /// Set by Drag once its direction is locked to the initiating axis.
    pub locked_to_axis: bool,
    control: Control,
}

impl<K: Clone> GestureEvent<K> {
    /// Combine the current frame with its kinematics against `start`.
    #[must_use]
    pub fn from_frame(start: &Snapshot<K>, current: &Snapshot<K>) -> Self {
        let k = Kinematics::between(start, current);
        Self {
            phase: current.phase,
            center: current.center,
            timestamp: current.timestamp,
            target: current.target.clone(),
            contacts: current.contacts.clone(),
            pointer_kind: current.pointer_kind,
            source: current.source,
            start_center: start.center,
            start_timestamp: start.timestamp,
            delta_time: k.delta_time,
            delta: k.delta,
            velocity: k.velocity,
            distance: k.distance,
            angle: k.angle,
            direction: k.direction,
            scale: k.scale,
            rotation: k.rotation,
            locked_to_axis: false,
            control: Control::default(),
        }
    }
}

impl<K> GestureEvent<K> {
    /// A motionless event at `center`, for gestures triggered by hand.
    #[must_use]
    pub fn at(center: Point, timestamp: u64, target: K) -> Self {
        let k = Kinematics::default();
        Self {
            phase: Phase::End,
            center,
            timestamp,
            target,
            contacts: Contacts::new(),
            pointer_kind: PointerKind::default(),
            source: SourceKind::Touch,
            start_center: center,
            start_timestamp: timestamp,
            delta_time: k.delta_time,
            delta: k.delta,
            velocity: k.velocity,
            distance: k.distance,
            angle: k.angle,
            direction: k.direction,
            scale: k.scale,
            rotation: k.rotation,
            locked_to_axis: false,
            control: Control::default(),
        }
    }

    /// Ask the host to suppress the native default action of the input.
    pub fn prevent_default(&mut self) {
        self.control.default_prevented = true;
    }

    /// Ask the host to stop propagation of the native input event.
    pub fn stop_propagation(&mut self) {
        self.control.propagation_stopped = true;
    }

    /// End the current session now; no further recognizer runs this frame.
    pub fn stop_detect(&mut self) {
        self.control.detect_stopped = true;
    }

    /// Whether [`prevent_default`](Self::prevent_default) was called.
    #[must_use]
    pub fn is_default_prevented(&self) -> bool {
        self.control.default_prevented
    }

    /// Whether [`stop_propagation`](Self::stop_propagation) was called.
    #[must_use]
    pub fn is_propagation_stopped(&self) -> bool {
        self.control.propagation_stopped
    }

    /// Whether [`stop_detect`](Self::stop_detect) was called.
    #[must_use]
    pub fn is_detect_stopped(&self) -> bool {
        self.control.detect_stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Contact;

    #[test]
    fn directional_names() {
        assert_eq!(names::swipe(Direction::Left), "swipeleft");
        assert_eq!(names::drag(Direction::Down), "dragdown");
    }

    #[test]
    fn control_flags_start_clear_and_latch() {
        let mut ev = GestureEvent::at(Point::ORIGIN, 0, ());
        assert!(!ev.is_default_prevented());
        assert!(!ev.is_propagation_stopped());
        assert!(!ev.is_detect_stopped());
        ev.prevent_default();
        ev.stop_propagation();
        ev.stop_detect();
        assert!(ev.is_default_prevented());
        assert!(ev.is_propagation_stopped());
        assert!(ev.is_detect_stopped());
    }

    #[test]
    fn from_frame_copies_start_data() {
        let start = Snapshot::new(
            Phase::Start,
            [Contact::new(1, 2.0, 3.0)].into_iter().collect(),
            100,
            7_u32,
            PointerKind::Pen,
            SourceKind::Pointer,
        );
        let now = Snapshot::new(
            Phase::Move,
            [Contact::new(1, 2.0, 13.0)].into_iter().collect(),
            120,
            9_u32,
            PointerKind::Pen,
            SourceKind::Pointer,
        );
        let ev = GestureEvent::from_frame(&start, &now);
        assert_eq!(ev.start_center, Point::new(2.0, 3.0));
        assert_eq!(ev.start_timestamp, 100);
        assert_eq!(ev.target, 9);
        assert_eq!(ev.delta_time, 20);
        assert_eq!(ev.direction, Direction::Down);
        assert_eq!(ev.velocity, Vec2::new(0.0, 0.5));
    }
}
