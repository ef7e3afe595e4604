// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::contact::Phase;
use crate::event::{GestureEvent, names};
use crate::kinematics::Direction;
use crate::recognizer::{Context, Flow, Recognizer, priority};

/// Continuous single-contact movement.
///
/// Claims the session once the center has moved
/// [`min_distance`](crate::options::DragOptions::min_distance), then emits
/// `drag` and a directional variant on every move. With
/// [`lock_to_axis`](crate::options::DragOptions::lock_to_axis) the reported
/// direction sticks to the initial axis once the drag is long enough.
///
/// If another recognizer claims the session mid-drag, `dragend` is emitted on
/// the next frame and the drag is over.
#[derive(Clone, Debug, Default)]
pub struct Drag {
    triggered: bool,
}

impl<K> Recognizer<K> for Drag {
    fn name(&self) -> &'static str {
        names::DRAG
    }

    fn priority(&self) -> i32 {
        priority::DRAG
    }

    fn handle(&mut self, ev: &mut GestureEvent<K>, ctx: &mut Context<'_, K>) -> Flow {
        if self.triggered && !ctx.is_claimed_by(names::DRAG) {
            ctx.trigger(names::DRAG_END, ev);
            self.triggered = false;
            return Flow::Continue;
        }

        // Ends are handled before the contact gate: the last frame of a
        // two-finger lift still carries both contacts.
        if ev.phase == Phase::End {
            if self.triggered {
                ctx.trigger(names::DRAG_END, ev);
            }
            self.triggered = false;
            return Flow::Continue;
        }

        let opts = ctx.options().drag.clone();
        if opts.max_touches > 0 && ev.contacts.len() > opts.max_touches {
            return Flow::Continue;
        }
        if ev.phase == Phase::Start {
            self.triggered = false;
            return Flow::Continue;
        }

        // Written so that NaN distances never start a drag.
        let far_enough = ev.distance >= opts.min_distance;
        if !far_enough && !ctx.is_claimed_by(names::DRAG) {
            return Flow::Continue;
        }
        ctx.claim(names::DRAG);

        if ctx.session().last_locked()
            || (opts.lock_to_axis && opts.lock_min_distance <= ev.distance)
        {
            ev.locked_to_axis = true;
        }
        if ev.locked_to_axis
            && let Some(last) = ctx.session().last_direction()
            && last != ev.direction
        {
            let vertical = last.is_vertical();
            let along = if vertical { ev.delta.y } else { ev.delta.x };
            ev.direction = Direction::along(vertical, along);
        }

        if !self.triggered {
            ctx.trigger(names::DRAG_START, ev);
            self.triggered = true;
        }
        let directional = names::drag(ev.direction);
        ctx.trigger(names::DRAG, ev);
        ctx.trigger(directional, ev);

        let vertical = ev.direction.is_vertical();
        if (opts.block_vertical && vertical) || (opts.block_horizontal && !vertical) {
            ev.prevent_default();
        }
        Flow::Continue
    }
}
