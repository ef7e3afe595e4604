// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Gesture Bind: attach gesture recognition to elements of a UI tree.
//!
//! ## Overview
//!
//! [`understory_gesture`] turns input frames into named gestures for one
//! element at a time. This crate decides which element that is and who hears
//! about it:
//!
//! - [`Gestures::bind`] marks an element as a gesture root with its own
//!   [`GestureOptions`](understory_gesture::GestureOptions).
//! - [`Gestures::handle_input`] normalizes native input. A first contact opens
//!   a session on the nearest enabled bound element at or above its target.
//! - [`Gestures::on`] registers listeners. Gestures are delivered to the
//!   contact's target when it lies within the bound element and bubble to the
//!   root; a listener returning [`Outcome::Stop`] ends bubbling.
//!
//! The crate does not own the UI tree. Implement [`ElementTree`] for your tree,
//! or use [`ParentMap`].
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use understory_gesture::contact::{Contact, Phase};
//! use understory_gesture::{GestureOptions, InputEvent};
//! use understory_gesture_bind::{Gestures, Outcome, ParentMap};
//!
//! let mut tree = ParentMap::new();
//! tree.insert_root(1_u32);
//! tree.insert(2, 1);
//!
//! let mut gestures = Gestures::with_default_recognizers(tree);
//! gestures.bind(1, GestureOptions::default()).unwrap();
//!
//! let taps = Rc::new(RefCell::new(Vec::new()));
//! let log = taps.clone();
//! gestures.on(1, "tap doubletap", move |node, ev| {
//!     log.borrow_mut().push((*node, ev.target));
//!     Outcome::Continue
//! });
//!
//! // A quick touch on element 2 taps; element 1 hears it by bubbling.
//! let finger = [Contact::new(1, 10.0, 10.0)];
//! gestures.handle_input(InputEvent::touch(Phase::Start, &finger, 0, 2));
//! gestures.handle_input(InputEvent::touch(Phase::End, &[], 90, 2));
//!
//! assert_eq!(*taps.borrow(), vec![(1, 2)]);
//! assert!(!gestures.is_detecting());
//! ```
//!
//! ## Timers
//!
//! Long taps fire from a timer. Call [`Gestures::advance`] from your event loop
//! once [`Gestures::next_deadline`] has passed.
//!
//! ## Dispatcher
//!
//! [`dispatcher::run`] walks a bubble path and honors [`Outcome`]s. The hub
//! uses it for every delivery; it is public for hosts that bubble their own
//! payloads.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dispatcher;
pub mod error;
pub mod gestures;
pub mod listeners;
pub mod tree;

pub use dispatcher::Outcome;
pub use error::BindError;
pub use gestures::Gestures;
pub use listeners::ListenerId;
pub use tree::{ElementTree, ParentMap};
