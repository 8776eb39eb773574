// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for camera transitions.
//!
//! Every curve maps `[0, 1]` onto `[0, 1]`, is non‑decreasing, and returns
//! exactly `0.0` and `1.0` at the endpoints.

/// Ease‑out cubic: fast start, gentle landing.
#[inline]
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let u = 1.0 - t;
    1.0 - u * u * u
}

/// Ease‑in‑out cubic.
#[inline]
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Linear interpolation (no easing).
#[inline]
#[must_use]
pub fn linear(t: f64) -> f64 {
    t
}

/// Selectable easing curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// See [`linear`].
    Linear,
    /// See [`ease_out_cubic`].
    #[default]
    EaseOutCubic,
    /// See [`ease_in_out_cubic`].
    EaseInOutCubic,
}

impl Easing {
    /// Applies the curve to `t`, clamping `t` into `[0, 1]` first.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => linear(t),
            Self::EaseOutCubic => ease_out_cubic(t),
            Self::EaseInOutCubic => ease_in_out_cubic(t),
        }
    }
}
