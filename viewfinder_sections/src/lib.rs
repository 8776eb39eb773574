// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewfinder Sections: named canvas panels, camera targets, and the minimap.
//!
//! - [`SectionRegistry`]: the static, ordered set of [`SectionDescriptor`]s
//!   placed on the canvas, with id lookup and point queries.
//! - Camera‑target fitting: [`SectionRegistry::compute_target_for_section`]
//!   and friends compute the [`CameraState`] that fits and centres a section,
//!   an arbitrary rectangle, or a point.
//! - [`MinimapLayout`]: maps the whole canvas onto a small overview and back,
//!   so a click on the minimap can be turned into a camera target.
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use viewfinder_sections::{FitOptions, SectionDescriptor, SectionRegistry};
//!
//! let registry = SectionRegistry::new([
//!     SectionDescriptor::new("capture", "Capture", Rect::new(0.0, 0.0, 800.0, 600.0)),
//!     SectionDescriptor::new("focus", "Focus", Rect::new(1000.0, 0.0, 1800.0, 600.0)),
//! ])
//! .unwrap();
//!
//! let target = registry
//!     .compute_target_for_section("focus", Size::new(800.0, 600.0), &FitOptions::default())
//!     .unwrap();
//! assert!((target.scale - 0.9).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! [`CameraState`]: viewfinder_camera::CameraState

#![no_std]

extern crate alloc;

pub mod minimap;
mod registry;
mod target;

pub use minimap::{MinimapFrame, MinimapHit, MinimapItem, MinimapLayout};
pub use registry::{RegistryError, SectionDescriptor, SectionRegistry};
pub use target::{
    FitMode, FitOptions, TargetError, compute_target_for_point, compute_target_for_rect,
};
