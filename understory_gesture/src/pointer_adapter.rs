// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter from [`ui_events`] pointer events to normalizer input.
//!
//! [`PointerAdapter`] assigns each `ui_events` pointer a stable numeric contact
//! id while it is down, converts nanosecond timestamps to milliseconds, and
//! maps `Cancel` to an end event. Hover movement of pointers that are not down
//! is dropped.

use alloc::vec::Vec;

use kurbo::Point;
use ui_events::pointer::{PointerEvent, PointerId, PointerInfo, PointerType};

use crate::contact::{Phase, PointerKind};
use crate::input::InputEvent;

const NANOS_PER_MILLI: u64 = 1_000_000;

/// Converts [`PointerEvent`]s into [`InputEvent`]s.
#[derive(Clone, Debug, Default)]
pub struct PointerAdapter {
    down: Vec<(Option<PointerId>, u64)>,
    next_id: u64,
    last_time: u64,
}

impl PointerAdapter {
    /// Create an adapter with no pointers down.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pointers currently down.
    #[must_use]
    pub fn pointers_down(&self) -> usize {
        self.down.len()
    }

    /// Convert one pointer event delivered to `target`.
    ///
    /// Returns `None` for events that carry no contact (scroll, gesture, enter,
    /// leave) and for movement of pointers that are not down.
    pub fn convert<K>(&mut self, event: &PointerEvent, target: K) -> Option<InputEvent<K>> {
        let (phase, info, timestamp, position) = match event {
            PointerEvent::Down(e) => (
                Phase::Start,
                &e.pointer,
                nanos_to_millis(e.state.time),
                e.state.logical_point(),
            ),
            PointerEvent::Move(e) => (
                Phase::Move,
                &e.pointer,
                nanos_to_millis(e.current.time),
                e.current.logical_point(),
            ),
            PointerEvent::Up(e) => (
                Phase::End,
                &e.pointer,
                nanos_to_millis(e.state.time),
                e.state.logical_point(),
            ),
            // Cancel carries no state; reuse the last time seen.
            PointerEvent::Cancel(info) => (Phase::End, info, self.last_time, Point::ORIGIN),
            _ => return None,
        };
        self.last_time = timestamp;

        let id = match phase {
            Phase::Start => self.press(info),
            Phase::Move => self.lookup(info)?,
            Phase::End => self.release(info)?,
        };
        Some(InputEvent::pointer(
            phase,
            id,
            pointer_kind(info.pointer_type),
            position,
            timestamp,
            target,
        ))
    }

    fn lookup(&self, info: &PointerInfo) -> Option<u64> {
        self.down
            .iter()
            .find(|(p, _)| *p == info.pointer_id)
            .map(|(_, id)| *id)
    }

    fn press(&mut self, info: &PointerInfo) -> u64 {
        if let Some(id) = self.lookup(info) {
            return id;
        }
        self.next_id += 1;
        self.down.push((info.pointer_id, self.next_id));
        self.next_id
    }

    fn release(&mut self, info: &PointerInfo) -> Option<u64> {
        let ix = self.down.iter().position(|(p, _)| *p == info.pointer_id)?;
        Some(self.down.remove(ix).1)
    }
}

/// Map a `ui_events` pointer type onto a [`PointerKind`]. Unknown devices count
/// as touch.
#[must_use]
pub fn pointer_kind(pointer_type: PointerType) -> PointerKind {
    match pointer_type {
        PointerType::Mouse => PointerKind::Mouse,
        PointerType::Pen => PointerKind::Pen,
        _ => PointerKind::Touch,
    }
}

/// Nanoseconds to whole milliseconds.
#[must_use]
pub const fn nanos_to_millis(nanos: u64) -> u64 {
    nanos / NANOS_PER_MILLI
}
