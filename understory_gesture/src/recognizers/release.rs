// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::contact::Phase;
use crate::event::{GestureEvent, names};
use crate::recognizer::{Context, Flow, Recognizer, priority};

/// Last-lift sentinel. Runs after everything else.
#[derive(Copy, Clone, Debug, Default)]
pub struct Release;

impl<K> Recognizer<K> for Release {
    fn name(&self) -> &'static str {
        names::RELEASE
    }

    fn priority(&self) -> i32 {
        priority::RELEASE
    }

    fn handle(&mut self, ev: &mut GestureEvent<K>, ctx: &mut Context<'_, K>) -> Flow {
        if ev.phase == Phase::End {
            ctx.trigger(names::RELEASE, ev);
        }
        Flow::Continue
    }
}
