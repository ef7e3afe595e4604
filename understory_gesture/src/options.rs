// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recognizer configuration.
//!
//! [`GestureOptions`] groups one typed sub-struct per built-in recognizer, a
//! per-recognizer enable switch, and an open map of [`OptionValue`]s for
//! recognizers registered by applications.
//!
//! ```
//! use understory_gesture::options::{GestureOptions, OptionValue};
//! use understory_gesture::event::names;
//!
//! let mut options = GestureOptions::default()
//!     .with_drag(|d| d.lock_to_axis(true).min_distance(4.0))
//!     .with_tap(|t| t.always(false));
//! options.set_recognizer_enabled("swipe", false);
//!
//! assert!(options.drag.lock_to_axis);
//! assert!(!options.is_recognizer_enabled("swipe"));
//! assert!(options.is_recognizer_enabled(names::TAP));
//!
//! // Custom recognizers seed their defaults without clobbering caller values.
//! options.set("flick_velocity", OptionValue::Number(2.0));
//! options.set_default("flick_velocity", OptionValue::Number(1.0));
//! assert_eq!(options.number("flick_velocity"), Some(2.0));
//! ```

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// A loosely typed option value for application-defined recognizers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum OptionValue {
    /// A switch.
    Bool(bool),
    /// A threshold, duration, or count.
    Number(f64),
}

/// Tap and double tap.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TapOptions {
    /// Longest press, in milliseconds, that still counts as a tap.
    pub max_touch_time: u64,
    /// Furthest movement, in pixels, that still counts as a tap.
    pub max_distance: f64,
    /// Emit `tap` even when the same release formed a `doubletap`.
    pub always: bool,
    /// Furthest distance between two taps of a double tap.
    pub double_tap_distance: f64,
    /// Longest gap, in milliseconds, between two taps of a double tap.
    pub double_tap_interval: u64,
}

impl Default for TapOptions {
    fn default() -> Self {
        Self {
            max_touch_time: 250,
            max_distance: 10.0,
            always: true,
            double_tap_distance: 20.0,
            double_tap_interval: 300,
        }
    }
}

impl TapOptions {
    /// Set [`max_touch_time`](Self::max_touch_time).
    #[must_use]
    pub fn max_touch_time(mut self, ms: u64) -> Self {
        self.max_touch_time = ms;
        self
    }

    /// Set [`max_distance`](Self::max_distance).
    #[must_use]
    pub fn max_distance(mut self, px: f64) -> Self {
        self.max_distance = px;
        self
    }

    /// Set [`always`](Self::always).
    #[must_use]
    pub fn always(mut self, always: bool) -> Self {
        self.always = always;
        self
    }

    /// Set [`double_tap_distance`](Self::double_tap_distance).
    #[must_use]
    pub fn double_tap_distance(mut self, px: f64) -> Self {
        self.double_tap_distance = px;
        self
    }

    /// Set [`double_tap_interval`](Self::double_tap_interval).
    #[must_use]
    pub fn double_tap_interval(mut self, ms: u64) -> Self {
        self.double_tap_interval = ms;
        self
    }
}

/// Long tap (press and hold).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LongTapOptions {
    /// Hold time in milliseconds before `lontap` fires.
    pub timeout: u64,
    /// Movement in pixels that cancels the hold.
    pub threshold: f64,
}

impl Default for LongTapOptions {
    fn default() -> Self {
        Self {
            timeout: 500,
            threshold: 1.0,
        }
    }
}

impl LongTapOptions {
    /// Set [`timeout`](Self::timeout).
    #[must_use]
    pub fn timeout(mut self, ms: u64) -> Self {
        self.timeout = ms;
        self
    }

    /// Set [`threshold`](Self::threshold).
    #[must_use]
    pub fn threshold(mut self, px: f64) -> Self {
        self.threshold = px;
        self
    }
}

/// Swipe.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwipeOptions {
    /// Most contacts allowed; `0` means any number.
    pub max_touches: usize,
    /// Speed in pixels per millisecond that either axis must exceed.
    pub velocity: f64,
}

impl Default for SwipeOptions {
    fn default() -> Self {
        Self {
            max_touches: 1,
            velocity: 0.7,
        }
    }
}

impl SwipeOptions {
    /// Set [`max_touches`](Self::max_touches).
    #[must_use]
    pub fn max_touches(mut self, n: usize) -> Self {
        self.max_touches = n;
        self
    }

    /// Set [`velocity`](Self::velocity).
    #[must_use]
    pub fn velocity(mut self, px_per_ms: f64) -> Self {
        self.velocity = px_per_ms;
        self
    }
}

/// Drag.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DragOptions {
    /// Distance in pixels before a drag starts.
    pub min_distance: f64,
    /// Most contacts allowed; `0` means any number.
    pub max_touches: usize,
    /// Mark horizontal drag frames as default-prevented.
    pub block_horizontal: bool,
    /// Mark vertical drag frames as default-prevented.
    pub block_vertical: bool,
    /// Keep reporting the initiating axis once locked.
    pub lock_to_axis: bool,
    /// Distance in pixels before the axis lock engages.
    pub lock_min_distance: f64,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            min_distance: 10.0,
            max_touches: 1,
            block_horizontal: false,
            block_vertical: false,
            lock_to_axis: false,
            lock_min_distance: 25.0,
        }
    }
}

impl DragOptions {
    /// Set [`min_distance`](Self::min_distance).
    #[must_use]
    pub fn min_distance(mut self, px: f64) -> Self {
        self.min_distance = px;
        self
    }

    /// Set [`max_touches`](Self::max_touches).
    #[must_use]
    pub fn max_touches(mut self, n: usize) -> Self {
        self.max_touches = n;
        self
    }

    /// Set [`block_horizontal`](Self::block_horizontal).
    #[must_use]
    pub fn block_horizontal(mut self, block: bool) -> Self {
        self.block_horizontal = block;
        self
    }

    /// Set [`block_vertical`](Self::block_vertical).
    #[must_use]
    pub fn block_vertical(mut self, block: bool) -> Self {
        self.block_vertical = block;
        self
    }

    /// Set [`lock_to_axis`](Self::lock_to_axis).
    #[must_use]
    pub fn lock_to_axis(mut self, lock: bool) -> Self {
        self.lock_to_axis = lock;
        self
    }

    /// Set [`lock_min_distance`](Self::lock_min_distance).
    #[must_use]
    pub fn lock_min_distance(mut self, px: f64) -> Self {
        self.lock_min_distance = px;
        self
    }
}

/// Pinch and rotate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransformOptions {
    /// Scale change (`|1 - scale|`) before a transform starts.
    pub min_scale: f64,
    /// Rotation in degrees before a transform starts.
    pub min_rotation: f64,
    /// Mark every multi-contact frame as default-prevented.
    pub always_block: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            min_scale: 0.01,
            min_rotation: 1.0,
            always_block: false,
        }
    }
}

impl TransformOptions {
    /// Set [`min_scale`](Self::min_scale).
    #[must_use]
    pub fn min_scale(mut self, delta: f64) -> Self {
        self.min_scale = delta;
        self
    }

    /// Set [`min_rotation`](Self::min_rotation).
    #[must_use]
    pub fn min_rotation(mut self, degrees: f64) -> Self {
        self.min_rotation = degrees;
        self
    }

    /// Set [`always_block`](Self::always_block).
    #[must_use]
    pub fn always_block(mut self, block: bool) -> Self {
        self.always_block = block;
        self
    }
}

/// The `touch` sentinel.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TouchOptions {
    /// Mark every frame as default-prevented.
    pub prevent_default: bool,
    /// Stop detection outright for mouse sessions.
    pub prevent_mouse: bool,
}

impl TouchOptions {
    /// Set [`prevent_default`](Self::prevent_default).
    #[must_use]
    pub fn prevent_default(mut self, prevent: bool) -> Self {
        self.prevent_default = prevent;
        self
    }

    /// Set [`prevent_mouse`](Self::prevent_mouse).
    #[must_use]
    pub fn prevent_mouse(mut self, prevent: bool) -> Self {
        self.prevent_mouse = prevent;
        self
    }
}

/// Options for one bound element.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureOptions {
    /// Tap and double tap.
    pub tap: TapOptions,
    /// Long tap.
    pub long_tap: LongTapOptions,
    /// Swipe.
    pub swipe: SwipeOptions,
    /// Drag.
    pub drag: DragOptions,
    /// Pinch and rotate.
    pub transform: TransformOptions,
    /// The `touch` sentinel.
    pub touch: TouchOptions,
    recognizers: BTreeMap<String, bool>,
    extra: BTreeMap<String, OptionValue>,
}

impl GestureOptions {
    /// Adjust the tap options in place.
    #[must_use]
    pub fn with_tap(mut self, f: impl FnOnce(TapOptions) -> TapOptions) -> Self {
        self.tap = f(self.tap);
        self
    }

    /// Adjust the long tap options in place.
    #[must_use]
    pub fn with_long_tap(mut self, f: impl FnOnce(LongTapOptions) -> LongTapOptions) -> Self {
        self.long_tap = f(self.long_tap);
        self
    }

    /// Adjust the swipe options in place.
    #[must_use]
    pub fn with_swipe(mut self, f: impl FnOnce(SwipeOptions) -> SwipeOptions) -> Self {
        self.swipe = f(self.swipe);
        self
    }

    /// Adjust the drag options in place.
    #[must_use]
    pub fn with_drag(mut self, f: impl FnOnce(DragOptions) -> DragOptions) -> Self {
        self.drag = f(self.drag);
        self
    }

    /// Adjust the transform options in place.
    #[must_use]
    pub fn with_transform(
        mut self,
        f: impl FnOnce(TransformOptions) -> TransformOptions,
    ) -> Self {
        self.transform = f(self.transform);
        self
    }

    /// Adjust the touch options in place.
    #[must_use]
    pub fn with_touch(mut self, f: impl FnOnce(TouchOptions) -> TouchOptions) -> Self {
        self.touch = f(self.touch);
        self
    }

    /// Switch the recognizer called `name` on or off for this element.
    pub fn set_recognizer_enabled(&mut self, name: &str, enabled: bool) {
        self.recognizers.insert(name.to_string(), enabled);
    }

    /// Whether the recognizer called `name` runs. Recognizers are on unless
    /// switched off.
    #[must_use]
    pub fn is_recognizer_enabled(&self, name: &str) -> bool {
        self.recognizers.get(name).copied().unwrap_or(true)
    }

    /// Set an application-defined option, replacing any previous value.
    pub fn set(&mut self, key: &str, value: OptionValue) {
        self.extra.insert(key.to_string(), value);
    }

    /// Set an application-defined option only if it has no value yet.
    pub fn set_default(&mut self, key: &str, value: OptionValue) {
        self.extra.entry(key.to_string()).or_insert(value);
    }

    /// Look up an application-defined option.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.extra.get(key)
    }

    /// Look up a numeric application-defined option.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.extra.get(key)? {
            OptionValue::Number(n) => Some(*n),
            OptionValue::Bool(_) => None,
        }
    }

    /// Look up a boolean application-defined option.
    #[must_use]
    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.extra.get(key)? {
            OptionValue::Bool(b) => Some(*b),
            OptionValue::Number(_) => None,
        }
    }

    /// Fill in everything `defaults` has that `self` lacks.
    ///
    /// Only the open parts merge (recognizer switches and application-defined
    /// values); the typed sub-options are always fully populated.
    pub fn merge_defaults(&mut self, defaults: &Self) {
        for (name, enabled) in &defaults.recognizers {
            self.recognizers.entry(name.clone()).or_insert(*enabled);
        }
        for (key, value) in &defaults.extra {
            self.extra.entry(key.clone()).or_insert_with(|| value.clone());
        }
    }
}
