// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::contact::Phase;
use crate::event::{GestureEvent, names};
use crate::recognizer::{Context, Flow, Recognizer, priority};

/// Fast flick, judged on release.
///
/// Gated on velocity only, so it may fire after a drag.
#[derive(Copy, Clone, Debug, Default)]
pub struct Swipe;

impl<K> Recognizer<K> for Swipe {
    fn name(&self) -> &'static str {
        names::SWIPE
    }

    fn priority(&self) -> i32 {
        priority::SWIPE
    }

    fn handle(&mut self, ev: &mut GestureEvent<K>, ctx: &mut Context<'_, K>) -> Flow {
        if ev.phase != Phase::End {
            return Flow::Continue;
        }
        let opts = &ctx.options().swipe;
        if opts.max_touches > 0 && ev.contacts.len() > opts.max_touches {
            return Flow::Continue;
        }
        if ev.velocity.x > opts.velocity || ev.velocity.y > opts.velocity {
            let directional = names::swipe(ev.direction);
            ctx.trigger(names::SWIPE, ev);
            ctx.trigger(directional, ev);
        }
        Flow::Continue
    }
}
