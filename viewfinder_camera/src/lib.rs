// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewfinder Camera: pan/zoom state and geometry for a 2D canvas.
//!
//! This crate is the leaf of the Viewfinder workspace. It provides:
//! - [`CameraState`]: the `{x, y, scale}` transform applied to a canvas
//!   content layer.
//! - Coordinate conversion between screen space and canvas space.
//! - [`ClampPolicy`]: scale limits plus a pan clamp that keeps the content
//!   from drifting out of view.
//!
//! It does **not** own any animation, input, or rendering state. Higher
//! layers (`viewfinder_navigator`) decide when to write a camera; they pass
//! every candidate through a single [`ClampPolicy`] so that all writers agree.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use viewfinder_camera::{CameraState, ClampPolicy, screen_to_canvas};
//!
//! let mut policy = ClampPolicy::new(Size::new(800.0, 600.0));
//! policy.set_content_bounds(Some(Rect::new(0.0, 0.0, 1800.0, 600.0)));
//!
//! // Zoom in 2x about the cursor; the canvas point under it stays put.
//! let cursor = Point::new(200.0, 150.0);
//! let before = screen_to_canvas(cursor, &CameraState::IDENTITY);
//! let cam = policy.zoom_about(CameraState::IDENTITY, cursor, 2.0);
//! let after = screen_to_canvas(cursor, &cam);
//! assert!((before - after).hypot() < 1e-9);
//!
//! // Requests outside the limits are clamped, never rejected.
//! let cam = policy.clamp(CameraState::new(1e6, 0.0, 99.0));
//! assert_eq!(cam.scale, 3.0);
//! ```
//!
//! ## Conventions
//!
//! - A canvas point `p` is drawn at `p * scale + (x, y)`.
//! - Non‑finite coordinates are coerced to `0.0`; a non‑finite scale is
//!   clamped (`NaN` maps to the lower limit).
//!
//! This crate is `no_std`.

#![no_std]

mod camera;
mod clamp;

pub use camera::{
    CameraState, canvas_rect_to_screen, canvas_to_screen, screen_to_canvas, visible_canvas_rect,
};
pub use clamp::{
    ClampMode, ClampPolicy, DEFAULT_OVERSCROLL, MAX_SCALE, MIN_SCALE, MIN_SCALE_FLOOR, ScaleLimits,
    clamp_pan, clamp_scale, pan_range, sanitize,
};
