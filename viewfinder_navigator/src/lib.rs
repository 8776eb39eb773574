// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewfinder Navigator: pan/zoom navigation over a canvas of named sections.
//!
//! [`CanvasNavigator`] ties the lower crates together:
//! - a [`CameraStore`] that owns the camera, clamps every write, and runs at
//!   most one motion (eased transition or momentum) at a time;
//! - pointer, wheel, pinch and keyboard routing built on `viewfinder_gesture`;
//! - section jumps and the overview from `viewfinder_sections`;
//! - a minimap indicator that follows the camera through a store subscription.
//!
//! The navigator never reads a clock and never schedules work. The host
//! passes timestamps with every event and calls [`CanvasNavigator::tick`] on
//! each animation frame while it returns `true`.
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use viewfinder_navigator::{CanvasNavigator, NavigatorConfig};
//! use viewfinder_sections::{SectionDescriptor, SectionRegistry};
//!
//! let registry = SectionRegistry::new([
//!     SectionDescriptor::new("a", "A", Rect::new(0.0, 0.0, 800.0, 600.0)),
//!     SectionDescriptor::new("b", "B", Rect::new(1000.0, 0.0, 1800.0, 600.0)),
//! ])
//! .unwrap();
//! let mut nav = CanvasNavigator::new(registry, NavigatorConfig::default());
//! nav.set_viewport_size(Size::new(800.0, 600.0));
//!
//! nav.navigate_to_section("b", 0.0);
//! let mut now = 0.0;
//! while nav.tick(now) {
//!     now += 16.0;
//! }
//! let cam = nav.camera();
//! assert!((cam.x + 860.0).abs() < 1e-9);
//! assert_eq!(nav.active_section().map(|s| s.id.as_str()), Some("b"));
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through [`tracing`]: `warn` for rejected navigation
//! (unknown section, empty viewport), `debug` for gesture and transition
//! lifecycle, `trace` for per‑frame motion. Install a subscriber in the host
//! to see them.

mod config;
mod error;
mod minimap;
mod navigator;
mod prefs;
mod store;

pub use config::NavigatorConfig;
pub use error::NavError;
pub use minimap::MinimapSync;
pub use navigator::{CanvasNavigator, DebugInfo, GesturePhase, SectionControl};
pub use prefs::ViewPreferences;
pub use store::{
    Activity, CameraStore, CameraUpdate, CompletionCallback, SubscriptionId, TransitionToken,
};
