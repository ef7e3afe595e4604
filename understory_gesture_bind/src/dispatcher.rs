// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher helper: walk a bubble path and honor stop/consume outcomes.
//!
//! Gestures are delivered to the dispatch target first and then to each
//! ancestor in turn:
//!
//! - Process entries in order (target → root).
//! - [`Outcome::Stop`] aborts bubbling after the current element.
//! - [`Outcome::StopAndConsume`] aborts bubbling and returns `true`.
//! - Returns `true` if consumed; otherwise `false` (for both `Continue` and `Stop`).
//!
//! ## Minimal example
//!
//! ```
//! use understory_gesture_bind::dispatcher::{self, Outcome};
//!
//! // Bubble path for a target 3 nested in 2 nested in 1.
//! let path = [3_u32, 2, 1];
//!
//! let mut handled = Vec::new();
//! let consumed = dispatcher::run(&path, &mut (), |node, _| {
//!     handled.push(*node);
//!     if *node == 2 { Outcome::Stop } else { Outcome::Continue }
//! });
//!
//! assert!(!consumed);
//! assert_eq!(handled, vec![3, 2]);
//! ```

/// What a handler asks of the dispatcher.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    /// Keep bubbling.
    #[default]
    Continue,
    /// Stop bubbling after this element.
    Stop,
    /// Stop bubbling and report the gesture as consumed.
    StopAndConsume,
}

/// Run a handler over a bubble path and honor stop/consume outcomes.
///
/// - Inputs:
///   - `path`: the dispatch target followed by its ancestors, as produced by
///     [`bubble_path`](crate::tree::bubble_path).
///   - `event`: a mutable payload carried across handler calls.
///   - `handler`: per-element callback; return an [`Outcome`] to control bubbling.
/// - Return: `true` if consumed (via `StopAndConsume`), otherwise `false`.
///
/// Multiple listeners on one element are proxied inside `handler`; they all
/// run before the outcome is applied.
pub fn run<K, E>(
    path: &[K],
    event: &mut E,
    mut handler: impl FnMut(&K, &mut E) -> Outcome,
) -> bool {
    for node in path {
        match handler(node, event) {
            Outcome::Continue => {}
            Outcome::Stop => return false,
            Outcome::StopAndConsume => return true,
        }
    }
    false
}
