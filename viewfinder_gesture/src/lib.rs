// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewfinder Gesture: input normalization and gesture state for canvas navigation.
//!
//! Hosts deliver very different event shapes (pointer vs touch vs mouse,
//! pixel vs line wheel deltas, platform key codes). This crate defines one
//! canonical form for each and the small state machines that interpret them:
//!
//! - [`event`]: [`PointerSample`], [`WheelSample`], [`KeyPress`], [`Modifiers`].
//! - [`drag`]: [`DragSession`], the per‑drag capture with a smoothed velocity
//!   estimate for momentum hand‑off.
//! - [`pinch`]: [`PinchGesture`], turning two contacts into zoom factors
//!   anchored at their midpoint.
//! - [`wheel`]: [`WheelConfig`], turning wheel deltas into zoom or pan actions.
//! - [`keys`]: [`command_for`], mapping key presses onto [`KeyCommand`]s.
//!
//! None of these touch a camera store. They compute what the input asks for,
//! and the navigator decides whether and how to apply it.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use viewfinder_gesture::{WheelAction, WheelConfig, WheelSample};
//!
//! let cfg = WheelConfig::default();
//! let sample = WheelSample::pixels(Vec2::new(0.0, -100.0), Point::new(400.0, 300.0));
//! let Some(WheelAction::Zoom { anchor, factor }) = cfg.interpret(&sample, Size::new(800.0, 600.0))
//! else {
//!     unreachable!()
//! };
//! assert_eq!(anchor, Point::new(400.0, 300.0));
//! assert!(factor > 1.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod event;
pub mod keys;
pub mod pinch;
pub mod wheel;

pub use drag::DragSession;
pub use event::{
    DeltaMode, Key, KeyPress, Modifiers, PointerId, PointerKind, PointerSample, WheelSample,
};
pub use keys::{KeyCommand, PanDirection, command_for};
pub use pinch::{PinchGesture, PinchStep};
pub use wheel::{WheelAction, WheelConfig, WheelPolicy};
