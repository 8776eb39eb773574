// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewfinder Motion: frame‑stepped camera motion.
//!
//! Two kinds of multi‑frame camera movement live here:
//! - [`TransitionState`]: an eased move from one [`CameraState`] to another
//!   over a fixed duration, used for discrete jumps (section navigation, zoom
//!   buttons, minimap clicks, reset).
//! - [`Momentum`]: residual velocity after a drag, decayed exponentially per
//!   frame until it falls below a stop threshold.
//!
//! Neither type schedules anything. The host calls them with a timestamp
//! from its own clock (an animation‑frame callback, or a manually stepped
//! clock in tests), which keeps every property checkable without waiting on
//! wall time.
//!
//! ```rust
//! use viewfinder_camera::CameraState;
//! use viewfinder_motion::TransitionState;
//!
//! let t = TransitionState::new(
//!     CameraState::IDENTITY,
//!     CameraState::new(-400.0, 0.0, 2.0),
//!     0.0,
//!     600.0,
//! );
//! assert_eq!(t.sample(0.0), CameraState::IDENTITY);
//! assert_eq!(t.sample(600.0), CameraState::new(-400.0, 0.0, 2.0));
//! ```
//!
//! [`CameraState`]: viewfinder_camera::CameraState

pub mod easing;
mod momentum;
mod transition;

pub use easing::Easing;
pub use momentum::{Momentum, MomentumConfig};
pub use transition::TransitionState;
