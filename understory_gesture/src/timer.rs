// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-driven timers.
//!
//! Nothing here reads a clock. The host asks for [`TimerQueue::next_deadline`]
//! and calls back with the current time; due entries come out in deadline
//! order, ties in scheduling order.

use alloc::vec::Vec;

/// Handle for a scheduled timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct Entry {
    id: TimerId,
    deadline: u64,
    slot: usize,
}

/// Pending timers, each tagged with the recognizer slot that armed it.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    next_id: u64,
    entries: Vec<Entry>,
}

impl TimerQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a timer for `slot` that is due at `deadline` (milliseconds).
    pub fn schedule(&mut self, deadline: u64, slot: usize) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, deadline, slot });
        id
    }

    /// Disarm a timer. Returns `false` if it had already fired or was never
    /// scheduled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Remove and return the earliest timer due at or before `now`.
    pub fn pop_due(&mut self, now: u64) -> Option<(TimerId, usize)> {
        let ix = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= now)
            .min_by_key(|(_, e)| (e.deadline, e.id))
            .map(|(ix, _)| ix)?;
        let e = self.entries.remove(ix);
        Some((e.id, e.slot))
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
