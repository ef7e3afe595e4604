// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Gesture: touch, pointer, and mouse gesture recognition.
//!
//! This crate turns a raw stream of touch, pointer, or mouse events into named
//! gestures: `tap`, `doubletap`, `lontap`, `swipe`, `drag`, `transform`,
//! `pinch`, `rotate`, and their start/end/directional variants.
//!
//! The pipeline has four stages:
//!
//! - [`input`]: the [`Normalizer`] folds native events into [`Snapshot`]s with
//!   synthesized start/move/end phases.
//! - [`detector`]: the [`Detector`] owns one [`Session`] at a time and derives
//!   [`kinematics`] for every frame against the session's start frame.
//! - [`recognizers`]: small state machines run in priority order over each
//!   frame and emit gestures through an [`EventSink`].
//! - [`options`]: per-element thresholds and switches.
//!
//! Element binding, listener registration, and event bubbling live in
//! `understory_gesture_bind`.
//!
//! ## Usage
//!
//! ```rust
//! use std::rc::Rc;
//! use understory_gesture::contact::{Contact, Phase};
//! use understory_gesture::input::{InputEvent, Normalizer};
//! use understory_gesture::options::GestureOptions;
//! use understory_gesture::sink::Recorder;
//! use understory_gesture::{Detector, Registry};
//!
//! let mut input = Normalizer::new();
//! let mut detector = Detector::new(Registry::with_default_recognizers());
//! let options = Rc::new(GestureOptions::default());
//! let mut sink = Recorder::default();
//!
//! // Element 1 receives a quick horizontal flick.
//! let frames = [
//!     InputEvent::touch(Phase::Start, &[Contact::new(1, 0.0, 0.0)], 0, 1_u32),
//!     InputEvent::touch(Phase::Move, &[Contact::new(1, 50.0, 0.0)], 50, 1),
//!     InputEvent::touch(Phase::End, &[], 60, 1),
//! ];
//! for event in frames {
//!     let Some(snapshot) = input.handle(event) else { continue };
//!     if snapshot.phase == Phase::Start {
//!         detector.start_detect(1, options.clone(), snapshot, &mut sink);
//!     } else {
//!         detector.detect(snapshot, &mut sink);
//!     }
//! }
//!
//! assert_eq!(
//!     sink.names(),
//!     ["touch", "dragstart", "drag", "dragright", "swipe", "swiperight", "dragend", "release"],
//! );
//! ```
//!
//! Long taps need a clock: call [`Detector::advance`] once
//! [`Detector::next_deadline`] has passed.
//!
//! ## Custom recognizers
//!
//! Implement [`Recognizer`] and [`Registry::register`] it. Recognizers see the
//! shared [`GestureEvent`] of the frame and talk to the session through a
//! [`recognizer::Context`]: claim the session, emit gestures, and arm timers.
//!
//! ## Features
//!
//! - `std` (default): build Kurbo with `std`.
//! - `libm`: use `libm` for float math in `no_std` builds.
//! - `serde`: `Serialize`/`Deserialize` for [`GestureOptions`].
//! - `ui_events_adapter`: [`pointer_adapter::PointerAdapter`] converts
//!   `ui_events` pointer events into normalizer input.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod contact;
pub mod detector;
pub mod event;
pub mod input;
pub mod kinematics;
pub mod options;
pub mod recognizer;
pub mod recognizers;
pub mod registry;
pub mod session;
pub mod sink;
pub mod timer;
#[cfg(feature = "ui_events_adapter")]
pub mod pointer_adapter;

pub use contact::{Contact, Phase, PointerKind, Snapshot};
pub use detector::{Detector, FrameOutcome};
pub use event::GestureEvent;
pub use input::{InputEvent, Normalizer};
pub use options::GestureOptions;
pub use recognizer::{Flow, Recognizer};
pub use registry::Registry;
pub use session::Session;
pub use sink::EventSink;
