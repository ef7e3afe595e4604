// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derived kinematics: deltas, velocity, distance, angle, direction, scale, and
//! rotation of a frame relative to the session's start frame.
//!
//! Everything here is a pure function of two snapshots. Nothing accumulates
//! across frames, so recomputing with the same inputs is bit-identical.
//!
//! ```
//! use understory_gesture::contact::{Contact, Phase, PointerKind, Snapshot, SourceKind};
//! use understory_gesture::kinematics::{Direction, Kinematics};
//!
//! let frame = |x: f64, t| Snapshot::new(
//!     Phase::Move,
//!     [Contact::new(1, x, 0.0)].into_iter().collect(),
//!     t,
//!     (),
//!     PointerKind::Touch,
//!     SourceKind::Touch,
//! );
//! let k = Kinematics::between(&frame(0.0, 0), &frame(50.0, 50));
//! assert_eq!(k.distance, 50.0);
//! assert_eq!(k.direction, Direction::Right);
//! assert_eq!(k.velocity.x, 1.0);
//! ```

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::contact::{Contact, Snapshot};

/// The dominant direction of movement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards negative x.
    Left,
    /// Towards positive x.
    Right,
    /// Towards negative y.
    Up,
    /// Towards positive y.
    Down,
}

impl Direction {
    /// Returns `true` for [`Up`](Self::Up) and [`Down`](Self::Down).
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Lowercase name, as used in directional event names (`swipeleft`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Direction of `delta` along one axis.
    ///
    /// Negative values point left/up, anything else right/down.
    #[must_use]
    pub fn along(vertical: bool, delta: f64) -> Self {
        match (vertical, delta < 0.0) {
            (true, true) => Self::Up,
            (true, false) => Self::Down,
            (false, true) => Self::Left,
            (false, false) => Self::Right,
        }
    }
}

/// Measurements of a frame against the session's start frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Kinematics {
    /// Milliseconds since the start frame.
    pub delta_time: u64,
    /// Center movement since the start frame.
    pub delta: Vec2,
    /// Absolute center speed per axis, in pixels per millisecond.
    pub velocity: Vec2,
    /// Straight-line distance between start and current center.
    pub distance: f64,
    /// Angle of the movement in degrees, `atan2` convention (0 is +x, 90 is +y).
    pub angle: f64,
    /// Dominant direction of the movement.
    pub direction: Direction,
    /// Ratio of the current to the start finger spread; `1` without two contacts.
    pub scale: f64,
    /// Change of the finger angle in degrees; `0` without two contacts.
    pub rotation: f64,
}

impl Default for Kinematics {
    fn default() -> Self {
        Self {
            delta_time: 0,
            delta: Vec2::ZERO,
            velocity: Vec2::ZERO,
            distance: 0.0,
            angle: 0.0,
            direction: Direction::Right,
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

impl Kinematics {
    /// Derive kinematics of `current` relative to `start`.
    #[must_use]
    pub fn between<K>(start: &Snapshot<K>, current: &Snapshot<K>) -> Self {
        let delta_time = current.timestamp.saturating_sub(start.timestamp);
        let delta = current.center - start.center;
        Self {
            delta_time,
            delta,
            velocity: velocity(delta_time, delta),
            distance: distance(start.center, current.center),
            angle: angle(start.center, current.center),
            direction: direction(start.center, current.center),
            scale: scale(&start.contacts, &current.contacts),
            rotation: rotation(&start.contacts, &current.contacts),
        }
    }
}

/// Absolute per-axis speed in pixels per millisecond.
///
/// Components that are not finite (zero elapsed time, NaN positions) are `0`.
#[must_use]
pub fn velocity(delta_time: u64, delta: Vec2) -> Vec2 {
    let dt = delta_time as f64;
    let finite_or_zero = |v: f64| if v.is_finite() { v.abs() } else { 0.0 };
    Vec2::new(finite_or_zero(delta.x / dt), finite_or_zero(delta.y / dt))
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (b - a).hypot()
}

/// Angle from `a` to `b` in degrees.
#[must_use]
pub fn angle(a: Point, b: Point) -> f64 {
    (b - a).atan2() * 180.0 / PI
}

/// Dominant direction from `a` to `b`.
///
/// Horizontal wins ties, and zero movement reads as [`Direction::Right`].
#[must_use]
pub fn direction(a: Point, b: Point) -> Direction {
    let d = b - a;
    if d.x.abs() >= d.y.abs() {
        Direction::along(false, d.x)
    } else {
        Direction::along(true, d.y)
    }
}

/// Finger spread ratio between the first two contacts of each frame.
#[must_use]
pub fn scale(start: &[Contact], current: &[Contact]) -> f64 {
    match (start, current) {
        ([s0, s1, ..], [c0, c1, ..]) => {
            distance(c0.position, c1.position) / distance(s0.position, s1.position)
        }
        _ => 1.0,
    }
}

/// Rotation in degrees of the line through the first two contacts.
#[must_use]
pub fn rotation(start: &[Contact], current: &[Contact]) -> f64 {
    match (start, current) {
        ([s0, s1, ..], [c0, c1, ..]) => {
            angle(c1.position, c0.position) - angle(s1.position, s0.position)
        }
        _ => 0.0,
    }
}
