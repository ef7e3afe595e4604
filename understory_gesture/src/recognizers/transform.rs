// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::contact::Phase;
use crate::event::{GestureEvent, names};
use crate::recognizer::{Context, Flow, Recognizer, priority};

/// Two-finger pinch and rotate.
///
/// Needs at least two contacts. Claims the session once either the spread
/// changes by [`min_scale`](crate::options::TransformOptions::min_scale) or the
/// fingers turn by [`min_rotation`](crate::options::TransformOptions::min_rotation)
/// degrees. `transformend` follows on release, or on the next frame after
/// another recognizer claims the session.
#[derive(Clone, Debug, Default)]
pub struct Transform {
    triggered: bool,
}

impl<K> Recognizer<K> for Transform {
    fn name(&self) -> &'static str {
        names::TRANSFORM
    }

    fn priority(&self) -> i32 {
        priority::TRANSFORM
    }

    fn handle(&mut self, ev: &mut GestureEvent<K>, ctx: &mut Context<'_, K>) -> Flow {
        if self.triggered && !ctx.is_claimed_by(names::TRANSFORM) {
            ctx.trigger(names::TRANSFORM_END, ev);
            self.triggered = false;
            return Flow::Continue;
        }

        // The last finger usually lifts alone, so the end frame may carry a
        // single contact.
        if ev.phase == Phase::End {
            if self.triggered {
                ctx.trigger(names::TRANSFORM_END, ev);
            }
            self.triggered = false;
            return Flow::Continue;
        }

        if ev.contacts.len() < 2 {
            return Flow::Continue;
        }
        let opts = ctx.options().transform.clone();
        if opts.always_block {
            ev.prevent_default();
        }

        match ev.phase {
            Phase::Start => self.triggered = false,
            Phase::Move => {
                let scale_change = (1.0 - ev.scale).abs();
                let rotation_change = ev.rotation.abs();
                // Written so that NaN changes never qualify.
                let scaled = scale_change >= opts.min_scale;
                let rotated = rotation_change >= opts.min_rotation;
                if !scaled && !rotated {
                    return Flow::Continue;
                }
                ctx.claim(names::TRANSFORM);

                if !self.triggered {
                    ctx.trigger(names::TRANSFORM_START, ev);
                    self.triggered = true;
                }
                ctx.trigger(names::TRANSFORM, ev);
                if rotated {
                    ctx.trigger(names::ROTATE, ev);
                }
                if scaled {
                    let pinch = if ev.scale < 1.0 {
                        names::PINCH_IN
                    } else {
                        names::PINCH_OUT
                    };
                    ctx.trigger(names::PINCH, ev);
                    ctx.trigger(pinch, ev);
                }
            }
            Phase::End => {}
        }
        Flow::Continue
    }
}
