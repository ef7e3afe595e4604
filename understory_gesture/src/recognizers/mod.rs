// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in recognizers.
//!
//! | Recognizer    | Priority   | Emits                                                  |
//! |---------------|------------|--------------------------------------------------------|
//! | [`Touch`]     | `i32::MIN` | `touch`                                                |
//! | [`LongTap`]   | 10         | `lontap`                                               |
//! | [`Swipe`]     | 40         | `swipe`, `swipe{dir}`                                  |
//! | [`Transform`] | 45         | `transformstart`, `transform`, `rotate`, `pinch{,in,out}`, `transformend` |
//! | [`Drag`]      | 50         | `dragstart`, `drag`, `drag{dir}`, `dragend`            |
//! | [`Tap`]       | 100        | `doubletap`, `tap`                                     |
//! | [`Release`]   | `i32::MAX` | `release`                                              |

mod drag;
mod long_tap;
mod release;
mod swipe;
mod tap;
mod touch;
mod transform;

pub use drag::Drag;
pub use long_tap::LongTap;
pub use release::Release;
pub use swipe::Swipe;
pub use tap::Tap;
pub use touch::Touch;
pub use transform::Transform;
