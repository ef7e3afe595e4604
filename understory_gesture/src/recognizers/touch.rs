// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::contact::{Phase, PointerKind};
use crate::event::{GestureEvent, names};
use crate::recognizer::{Context, Flow, Recognizer, priority};

/// First-contact sentinel. Runs before everything else.
///
/// With [`TouchOptions::prevent_mouse`](crate::options::TouchOptions::prevent_mouse)
/// it ends mouse sessions on their first frame, and with
/// [`TouchOptions::prevent_default`](crate::options::TouchOptions::prevent_default)
/// it marks every frame as default-prevented.
#[derive(Copy, Clone, Debug, Default)]
pub struct Touch;

impl<K> Recognizer<K> for Touch {
    fn name(&self) -> &'static str {
        names::TOUCH
    }

    fn priority(&self) -> i32 {
        priority::TOUCH
    }

    fn handle(&mut self, ev: &mut GestureEvent<K>, ctx: &mut Context<'_, K>) -> Flow {
        let opts = &ctx.options().touch;
        if opts.prevent_mouse && ev.pointer_kind == PointerKind::Mouse {
            log::debug!("mouse session stopped");
            ev.stop_detect();
            return Flow::Stop;
        }
        if opts.prevent_default {
            ev.prevent_default();
        }
        if ev.phase == Phase::Start {
            ctx.trigger(names::TOUCH, ev);
        }
        Flow::Continue
    }
}
