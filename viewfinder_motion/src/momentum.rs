// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Post‑drag momentum with exponential decay.
//!
//! ## Usage
//!
//! 1) On release, build a [`Momentum`] from the drag velocity with
//!    [`Momentum::launch`]. Velocities below the fling threshold produce `None`.
//! 2) Each frame, call [`Momentum::step`] and apply the returned displacement.
//! 3) If the clamp stopped an axis, call [`Momentum::halt_axes`]; there is no bounce.
//! 4) Stop driving it once [`Momentum::is_finished`] returns `true`.

use kurbo::Vec2;

/// Tuning for [`Momentum`]. Velocities are in screen pixels per millisecond.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MomentumConfig {
    /// Velocity multiplier applied once per reference frame.
    pub friction: f64,
    /// Reference frame length in milliseconds (60 Hz by default).
    pub frame_ms: f64,
    /// Minimum release speed that starts momentum.
    pub min_fling_velocity: f64,
    /// Speed below which momentum stops.
    pub stop_velocity: f64,
    /// Release speeds are capped to this value.
    pub max_velocity: f64,
    /// Hard limit on how long momentum may run.
    pub max_duration_ms: f64,
    /// Longest frame gap integrated in a single step.
    pub max_step_ms: f64,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            friction: 0.95,
            frame_ms: 1000.0 / 60.0,
            min_fling_velocity: 0.1,
            stop_velocity: 0.01,
            max_velocity: 3.0,
            max_duration_ms: 2_000.0,
            max_step_ms: 64.0,
        }
    }
}

/// Residual pan velocity after a drag ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Momentum {
    velocity: Vec2,
    last_ms: f64,
    elapsed_ms: f64,
    config: MomentumConfig,
}

impl Momentum {
    /// Starts momentum from a release velocity, or returns `None` if the
    /// velocity is too slow (or not finite) to fling.
    #[must_use]
    pub fn launch(velocity: Vec2, now_ms: f64, config: MomentumConfig) -> Option<Self> {
        if !velocity.is_finite() {
            return None;
        }
        let speed = velocity.hypot();
        if speed < config.min_fling_velocity {
            return None;
        }
        let velocity = if speed > config.max_velocity {
            velocity * (config.max_velocity / speed)
        } else {
            velocity
        };
        Some(Self {
            velocity,
            last_ms: now_ms,
            elapsed_ms: 0.0,
            config,
        })
    }

    /// Current velocity in pixels per millisecond.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Time spent coasting so far.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Returns `true` once the velocity has decayed to zero.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.velocity == Vec2::ZERO
    }

    /// Advances to `now_ms` and returns the displacement to apply.
    pub fn step(&mut self, now_ms: f64) -> Vec2 {
        if self.is_finished() {
            return Vec2::ZERO;
        }
        let dt = now_ms - self.last_ms;
        self.last_ms = now_ms;
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.config.max_step_ms)
        } else {
            0.0
        };
        let displacement = self.velocity * dt;
        let frames = dt / self.config.frame_ms.max(f64::MIN_POSITIVE);
        self.velocity *= self.config.friction.clamp(0.0, 1.0).powf(frames);
        self.elapsed_ms += dt;
        if self.velocity.hypot() < self.config.stop_velocity
            || self.elapsed_ms >= self.config.max_duration_ms
        {
            self.velocity = Vec2::ZERO;
        }
        displacement
    }

    /// Zeroes the velocity on the given axes, for example when the pan clamp
    /// stopped the camera at an edge.
    pub fn halt_axes(&mut self, x: bool, y: bool) {
        if x {
            self.velocity.x = 0.0;
        }
        if y {
            self.velocity.y = 0.0;
        }
    }

    /// Stops immediately.
    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::*;

    const FRAME: f64 = 1000.0 / 60.0;

    #[test]
    fn slow_release_does_not_fling() {
        assert!(Momentum::launch(Vec2::new(0.05, 0.0), 0.0, MomentumConfig::default()).is_none());
        assert!(
            Momentum::launch(Vec2::new(f64::NAN, 1.0), 0.0, MomentumConfig::default()).is_none()
        );
    }

    #[test]
    fn release_velocity_is_capped() {
        let m = Momentum::launch(Vec2::new(30.0, 40.0), 0.0, MomentumConfig::default()).unwrap();
        assert!((m.velocity().hypot() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn decays_by_friction_per_frame() {
        let mut m = Momentum::launch(Vec2::new(1.0, 0.0), 0.0, MomentumConfig::default()).unwrap();
        let d = m.step(FRAME);
        assert!((d.x - FRAME).abs() < 1e-9);
        assert!((m.velocity().x - 0.95).abs() < 1e-9);
    }

    #[test]
    fn fastest_fling_stops_within_120_frames() {
        let mut m =
            Momentum::launch(Vec2::new(1e6, -1e6), 0.0, MomentumConfig::default()).unwrap();
        let mut frames = 0;
        while !m.is_finished() {
            frames += 1;
            m.step(f64::from(frames) * FRAME);
            assert!(frames <= 120, "momentum still running after {frames} frames");
        }
    }

    #[test]
    fn stalled_clock_cannot_run_forever() {
        // Timestamps that never advance integrate nothing; the duration cap
        // still needs real time, so the caller's frames must advance.
        let mut m = Momentum::launch(Vec2::new(2.0, 0.0), 0.0, MomentumConfig::default()).unwrap();
        assert_eq!(m.step(0.0), Vec2::ZERO);
        assert!(!m.is_finished());
        // A huge gap is integrated as at most `max_step_ms`.
        let d = m.step(1e9);
        assert!(d.x <= 2.0 * 64.0 + 1e-9);
    }

    #[test]
    fn halted_axes_stay_halted() {
        let mut m = Momentum::launch(Vec2::new(1.0, 1.0), 0.0, MomentumConfig::default()).unwrap();
        m.halt_axes(true, false);
        let d = m.step(FRAME);
        assert_eq!(d.x, 0.0);
        assert!(d.y > 0.0);
        m.halt_axes(false, true);
        assert!(m.is_finished());
    }
}
