// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eased camera transitions.

use viewfinder_camera::CameraState;

use crate::easing::Easing;

/// An in‑flight animated camera move from `from` to `to`.
///
/// A transition is a pure function of time: hosts sample it with the frame
/// timestamp. It holds no scheduling state of its own, so the owner decides
/// when it is superseded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionState {
    /// Camera at the start of the move.
    pub from: CameraState,
    /// Camera at the end of the move.
    pub to: CameraState,
    /// Start timestamp in milliseconds.
    pub start_ms: f64,
    /// Duration in milliseconds. Non‑positive durations complete immediately.
    pub duration_ms: f64,
    /// Curve applied to the raw progress.
    pub easing: Easing,
}

impl TransitionState {
    /// Creates a transition with the default easing.
    #[must_use]
    pub fn new(from: CameraState, to: CameraState, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing: Easing::default(),
        }
    }

    /// Returns a copy with a different easing curve.
    #[must_use]
    pub fn with_easing(self, easing: Easing) -> Self {
        Self { easing, ..self }
    }

    /// Raw (un‑eased) progress in `[0, 1]`.
    ///
    /// Non‑decreasing in `now_ms`, and exactly `1.0` once `duration_ms` has
    /// elapsed. A zero, negative or non‑finite duration yields `1.0` without
    /// dividing by zero.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if !(self.duration_ms > 0.0 && self.duration_ms.is_finite()) {
            return 1.0;
        }
        let t = (now_ms - self.start_ms) / self.duration_ms;
        if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
    }

    /// Returns `true` once progress has reached `1.0`.
    #[must_use]
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Interpolated camera at `now_ms`.
    ///
    /// Returns `to` exactly once the transition is complete.
    #[must_use]
    pub fn sample(&self, now_ms: f64) -> CameraState {
        let p = self.progress(now_ms);
        if p >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, self.easing.apply(p))
    }

    /// Milliseconds left until completion.
    #[must_use]
    pub fn remaining_ms(&self, now_ms: f64) -> f64 {
        (1.0 - self.progress(now_ms)) * self.duration_ms.max(0.0)
    }
}
