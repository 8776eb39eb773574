// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the clamp helpers in `viewfinder_camera`.
//!
//! These cover idempotence of the scale clamp, anchor preservation for
//! zooming, and the bounded‑pan policy under long sequences of pan requests.

use kurbo::{Point, Rect, Size, Vec2};
use viewfinder_camera::{
    CameraState, ClampPolicy, MAX_SCALE, MIN_SCALE, canvas_rect_to_screen, clamp_scale,
    screen_to_canvas,
};

/// Small deterministic generator so the sweeps are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

fn policy() -> ClampPolicy {
    let mut policy = ClampPolicy::new(Size::new(800.0, 600.0));
    policy.set_content_bounds(Some(Rect::new(0.0, 0.0, 1800.0, 600.0)));
    policy
}

#[test]
fn clamp_scale_is_idempotent() {
    let mut rng = Lcg(7);
    let mut samples = vec![
        0.0,
        -1.0,
        MIN_SCALE,
        MAX_SCALE,
        f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::MIN_POSITIVE,
    ];
    samples.extend((0..500).map(|_| rng.range(-10.0, 10.0)));
    for s in samples {
        let once = clamp_scale(s, MIN_SCALE, MAX_SCALE);
        let twice = clamp_scale(once, MIN_SCALE, MAX_SCALE);
        assert_eq!(once, twice, "clamp_scale not idempotent for {s}");
        assert!((MIN_SCALE..=MAX_SCALE).contains(&once));
    }
}

#[test]
fn policy_clamp_is_idempotent() {
    let policy = policy();
    let mut rng = Lcg(11);
    for _ in 0..500 {
        let cam = CameraState::new(
            rng.range(-1e4, 1e4),
            rng.range(-1e4, 1e4),
            rng.range(-1.0, 6.0),
        );
        let once = policy.clamp(cam);
        assert_eq!(policy.clamp(once), once);
    }
}

#[test]
fn anchor_preserving_zoom_without_pan_clamp() {
    // No content bounds: only the scale is limited, so the anchor must hold exactly.
    let policy = ClampPolicy::new(Size::new(800.0, 600.0));
    let mut rng = Lcg(3);
    for _ in 0..200 {
        let cam = CameraState::new(rng.range(-500.0, 500.0), rng.range(-500.0, 500.0), 1.0);
        let anchor = Point::new(rng.range(0.0, 800.0), rng.range(0.0, 600.0));
        let factor = rng.range(0.5, 2.0);
        let before = screen_to_canvas(anchor, &cam);
        let zoomed = policy.zoom_about(cam, anchor, factor);
        let after = screen_to_canvas(anchor, &zoomed);
        assert!(
            (before - after).hypot() < 1e-6,
            "anchor drifted: {before:?} vs {after:?}"
        );
    }
}

#[test]
fn bounded_pan_holds_for_any_drag_sequence() {
    let policy = policy();
    let bounds = policy.content_bounds().unwrap();
    let viewport = policy.viewport();
    let mut rng = Lcg(42);
    let mut cam = policy.clamp(CameraState::IDENTITY);
    for step in 0..2_000 {
        let delta = Vec2::new(rng.range(-900.0, 900.0), rng.range(-900.0, 900.0));
        cam = policy.clamp(cam.with_offset(cam.offset() + delta));
        if step % 97 == 0 {
            cam = policy.clamp(CameraState { scale: rng.range(0.1, 4.0), ..cam });
        }
        let screen = canvas_rect_to_screen(bounds, &cam);
        let margin = Vec2::new(viewport.width * 0.5, viewport.height * 0.5);
        assert!(screen.x0 <= margin.x + 1e-9, "{screen:?}");
        assert!(screen.y0 <= margin.y + 1e-9, "{screen:?}");
        assert!(screen.x1 >= viewport.width - margin.x - 1e-9, "{screen:?}");
        assert!(screen.y1 >= viewport.height - margin.y - 1e-9, "{screen:?}");
    }
}

#[cfg(feature = "serde")]
#[test]
fn camera_state_serde_roundtrip() {
    let cam = CameraState::new(-12.5, 40.0, 1.25);
    let json = serde_json::to_string(&cam).unwrap();
    let back: CameraState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cam);
}

#[cfg(feature = "serde")]
#[test]
fn deserialized_scale_limits_are_normalized() {
    use viewfinder_camera::{MIN_SCALE_FLOOR, ScaleLimits};

    let limits: ScaleLimits = serde_json::from_str(r#"{"min":-1.0,"max":3.0}"#).unwrap();
    assert_eq!(limits, ScaleLimits::new(MIN_SCALE_FLOOR, 3.0));
    let limits: ScaleLimits = serde_json::from_str(r#"{"min":4.0,"max":0.5}"#).unwrap();
    assert_eq!((limits.min(), limits.max()), (0.5, 4.0));
    let json = serde_json::to_string(&limits).unwrap();
    assert_eq!(serde_json::from_str::<ScaleLimits>(&json).unwrap(), limits);
}
