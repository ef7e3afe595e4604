// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::contact::Phase;
use crate::event::{GestureEvent, names};
use crate::recognizer::{Context, Flow, Recognizer, priority};
use crate::timer::TimerId;

/// Press and hold.
///
/// Claims the session on the first frame and arms a timer. Moving further than
/// [`threshold`](crate::options::LongTapOptions::threshold) or lifting before
/// [`timeout`](crate::options::LongTapOptions::timeout) disarms it. When it
/// fires, `lontap` is emitted only if no other recognizer has claimed the
/// session since.
#[derive(Clone, Debug, Default)]
pub struct LongTap {
    timer: Option<TimerId>,
}

impl LongTap {
    fn disarm<K>(&mut self, ctx: &mut Context<'_, K>) {
        if let Some(timer) = self.timer.take() {
            ctx.clear_timer(timer);
        }
    }
}

impl<K: Clone> Recognizer<K> for LongTap {
    fn name(&self) -> &'static str {
        names::LONG_TAP
    }

    fn priority(&self) -> i32 {
        priority::LONG_TAP
    }

    fn handle(&mut self, ev: &mut GestureEvent<K>, ctx: &mut Context<'_, K>) -> Flow {
        match ev.phase {
            Phase::Start => {
                self.disarm(ctx);
                ctx.claim(names::LONG_TAP);
                let timeout = ctx.options().long_tap.timeout;
                self.timer = Some(ctx.set_timer(timeout));
            }
            Phase::Move => {
                let threshold = ctx.options().long_tap.threshold;
                if ev.distance.is_nan() || ev.distance > threshold {
                    self.disarm(ctx);
                }
            }
            Phase::End => self.disarm(ctx),
        }
        Flow::Continue
    }

    fn on_timer(&mut self, timer: TimerId, ctx: &mut Context<'_, K>) {
        if self.timer != Some(timer) {
            return;
        }
        self.timer = None;
        if !ctx.is_claimed_by(names::LONG_TAP) {
            log::debug!("long tap timer fired after the session was claimed elsewhere");
            return;
        }
        let start = ctx.session().start();
        let mut ev = GestureEvent::from_frame(start, start);
        ctx.trigger(names::LONG_TAP, &mut ev);
    }
}
