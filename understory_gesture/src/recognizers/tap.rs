// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::contact::Phase;
use crate::event::{GestureEvent, names};
use crate::kinematics::distance;
use crate::recognizer::{Context, Flow, Recognizer, priority};

/// Tap and double tap, judged on release.
///
/// A release is a tap when it came within
/// [`max_touch_time`](crate::options::TapOptions::max_touch_time) of the press
/// and within [`max_distance`](crate::options::TapOptions::max_distance) of
/// where it started. It is also a double tap when the previous session ended in
/// a tap less than [`double_tap_interval`](crate::options::TapOptions::double_tap_interval)
/// ago and less than [`double_tap_distance`](crate::options::TapOptions::double_tap_distance)
/// away.
#[derive(Copy, Clone, Debug, Default)]
pub struct Tap;

impl<K> Recognizer<K> for Tap {
    fn name(&self) -> &'static str {
        names::TAP
    }

    fn priority(&self) -> i32 {
        priority::TAP
    }

    fn handle(&mut self, ev: &mut GestureEvent<K>, ctx: &mut Context<'_, K>) -> Flow {
        if ev.phase != Phase::End {
            return Flow::Continue;
        }
        let opts = ctx.options().tap.clone();
        // Written so that NaN distances disqualify.
        let is_tap = ev.delta_time <= opts.max_touch_time && ev.distance <= opts.max_distance;
        if !is_tap {
            return Flow::Continue;
        }

        let is_double = ctx
            .previous()
            .filter(|prev| prev.is_claimed_by(names::TAP))
            .and_then(|prev| prev.last())
            .is_some_and(|last| {
                ev.timestamp.saturating_sub(last.timestamp) < opts.double_tap_interval
                    && distance(last.center, ev.center) < opts.double_tap_distance
            });
        if is_double {
            ctx.trigger(names::DOUBLE_TAP, ev);
        }
        if !is_double || opts.always {
            ctx.claim(names::TAP);
            ctx.trigger(names::TAP, ev);
        }
        Flow::Continue
    }
}
