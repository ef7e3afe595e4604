// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered recognizer list.
//!
//! ```
//! use understory_gesture::Registry;
//!
//! let registry = Registry::<u32>::with_default_recognizers();
//! assert_eq!(
//!     registry.names().collect::<Vec<_>>(),
//!     ["touch", "lontap", "swipe", "transform", "drag", "tap", "release"],
//! );
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::options::GestureOptions;
use crate::recognizer::Recognizer;
use crate::recognizers::{Drag, LongTap, Release, Swipe, Tap, Touch, Transform};

/// Recognizers sorted by ascending priority.
///
/// Equal priorities keep registration order.
#[derive(Debug)]
pub struct Registry<K> {
    recognizers: Vec<Box<dyn Recognizer<K>>>,
}

impl<K> Default for Registry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Registry<K> {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            recognizers: Vec::new(),
        }
    }

    /// Add a recognizer and keep the list sorted.
    pub fn register(&mut self, recognizer: Box<dyn Recognizer<K>>) {
        log::debug!(
            "registering `{}` at priority {}",
            recognizer.name(),
            recognizer.priority()
        );
        self.recognizers.push(recognizer);
        // `sort_by_key` is stable.
        self.recognizers.sort_by_key(|r| r.priority());
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, recognizer: Box<dyn Recognizer<K>>) -> Self {
        self.register(recognizer);
        self
    }

    /// Recognizer names in execution order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.recognizers.iter().map(|r| r.name())
    }

    /// Number of registered recognizers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recognizers.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recognizers.is_empty()
    }

    /// Options with every recognizer's defaults merged under `options`.
    ///
    /// Values already present in `options` win.
    #[must_use]
    pub fn defaults(&self, mut options: GestureOptions) -> GestureOptions {
        for r in &self.recognizers {
            r.defaults(&mut options);
        }
        options
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Box<dyn Recognizer<K>>] {
        &mut self.recognizers
    }

    pub(crate) fn slot_mut(&mut self, slot: usize) -> Option<&mut Box<dyn Recognizer<K>>> {
        self.recognizers.get_mut(slot)
    }
}

impl<K: Clone> Registry<K> {
    /// Touch, long tap, swipe, transform, drag, tap, and release.
    #[must_use]
    pub fn with_default_recognizers() -> Self {
        Self::new()
            .with(Box::new(Touch))
            .with(Box::new(LongTap::default()))
            .with(Box::new(Swipe))
            .with(Box::new(Transform::default()))
            .with(Box::new(Drag::default()))
            .with(Box::new(Tap))
            .with(Box::new(Release))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::GestureEvent;
    use crate::recognizer::{Context, Flow};
    use alloc::vec;

    #[derive(Debug)]
    struct Named(&'static str, i32);

    impl Recognizer<()> for Named {
        fn name(&self) -> &'static str {
            self.0
        }
        fn priority(&self) -> i32 {
            self.1
        }
        fn handle(&mut self, _: &mut GestureEvent<()>, _: &mut Context<'_, ()>) -> Flow {
            Flow::Continue
        }
    }

    #[test]
    fn sorted_by_priority_ties_in_registration_order() {
        let r = Registry::new()
            .with(Box::new(Named("c", 5)))
            .with(Box::new(Named("a", 1)))
            .with(Box::new(Named("d", 5)))
            .with(Box::new(Named("b", 1)))
            .with(Box::new(Named("e", 5)));
        assert_eq!(r.names().collect::<Vec<_>>(), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn custom_recognizer_slots_between_builtins() {
        let mut r = Registry::<()>::with_default_recognizers();
        r.register(Box::new(Named("flick", 42)));
        let names: Vec<_> = r.names().collect();
        assert_eq!(
            names,
            vec!["touch", "lontap", "swipe", "flick", "transform", "drag", "tap", "release"]
        );
        assert_eq!(r.len(), 8);
    }

    #[test]
    fn sentinels_stay_at_the_ends() {
        let mut r = Registry::<()>::with_default_recognizers();
        r.register(Box::new(Named("early", i32::MIN + 1)));
        r.register(Box::new(Named("late", i32::MAX - 1)));
        let names: Vec<_> = r.names().collect();
        assert_eq!(names.first(), Some(&"touch"));
        assert_eq!(names.last(), Some(&"release"));
    }
}
