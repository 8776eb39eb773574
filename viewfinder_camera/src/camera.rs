// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::clamp::sanitize;

/// Pan + zoom transform applied to the canvas content layer.
///
/// A canvas‑space point `p` is drawn at `p * scale + (x, y)` in screen space,
/// so `x`/`y` are screen‑pixel offsets and `scale` is a unitless zoom factor.
/// Values produced by a [`crate::ClampPolicy`] always respect its scale
/// limits and pan policy.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraState {
    /// Horizontal translation in screen pixels.
    pub x: f64,
    /// Vertical translation in screen pixels.
    pub y: f64,
    /// Uniform zoom factor.
    pub scale: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl CameraState {
    /// Unscaled camera with the canvas origin at the screen origin.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Creates a camera from an offset and a scale.
    #[must_use]
    pub const fn new(x: f64, y: f64, scale: f64) -> Self {
        Self { x, y, scale }
    }

    /// Returns the translation as a vector.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Returns a copy with the translation replaced.
    #[must_use]
    pub fn with_offset(self, offset: Vec2) -> Self {
        Self {
            x: offset.x,
            y: offset.y,
            ..self
        }
    }

    /// Returns the canvas → screen affine transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.offset()) * Affine::scale(self.scale)
    }

    /// Returns `true` if every component is finite and the scale is positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.scale.is_finite() && self.scale > 0.0
    }

    /// Component‑wise linear interpolation between `self` and `other`.
    ///
    /// `t = 0` yields `self`, `t = 1` yields `other` exactly.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        if t >= 1.0 {
            return other;
        }
        if t <= 0.0 {
            return self;
        }
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }

    /// Returns the camera that draws `canvas_pt` at `screen_pt` with `scale`.
    #[must_use]
    pub fn centered_on(canvas_pt: Point, screen_pt: Point, scale: f64) -> Self {
        Self {
            x: screen_pt.x - canvas_pt.x * scale,
            y: screen_pt.y - canvas_pt.y * scale,
            scale,
        }
    }

    /// Re‑scales about `anchor` (screen space) so the canvas point under it
    /// stays under it.
    ///
    /// `new_offset = anchor - (anchor - old_offset) * (new_scale / old_scale)`.
    /// No limits are applied; see [`crate::ClampPolicy::zoom_about`].
    #[must_use]
    pub fn zoomed_about(self, anchor: Point, new_scale: f64) -> Self {
        if self.scale <= 0.0 {
            return Self {
                scale: new_scale,
                ..self
            };
        }
        let ratio = new_scale / self.scale;
        let anchor = anchor.to_vec2();
        let offset = anchor - (anchor - self.offset()) * ratio;
        Self {
            x: offset.x,
            y: offset.y,
            scale: new_scale,
        }
    }
}

/// Converts a screen‑space point into canvas space.
///
/// `canvas = (screen - camera.xy) / camera.scale`. Non‑finite coordinates are
/// coerced to `0.0` before the transform.
#[must_use]
pub fn screen_to_canvas(screen_pt: Point, camera: &CameraState) -> Point {
    let p = Point::new(sanitize(screen_pt.x), sanitize(screen_pt.y));
    if camera.scale <= 0.0 {
        return p;
    }
    ((p.to_vec2() - camera.offset()) / camera.scale).to_point()
}

/// Converts a canvas‑space point into screen space.
///
/// `screen = canvas * camera.scale + camera.xy`. Non‑finite coordinates are
/// coerced to `0.0` before the transform.
#[must_use]
pub fn canvas_to_screen(canvas_pt: Point, camera: &CameraState) -> Point {
    let p = Point::new(sanitize(canvas_pt.x), sanitize(canvas_pt.y));
    (p.to_vec2() * camera.scale + camera.offset()).to_point()
}

/// Returns the canvas‑space rectangle visible through a viewport of `viewport` size.
#[must_use]
pub fn visible_canvas_rect(camera: &CameraState, viewport: Size) -> Rect {
    let p0 = screen_to_canvas(Point::ORIGIN, camera);
    let p1 = screen_to_canvas(Point::new(viewport.width, viewport.height), camera);
    Rect::from_points(p0, p1)
}

/// Converts a canvas‑space rectangle into screen space.
#[must_use]
pub fn canvas_rect_to_screen(rect: Rect, camera: &CameraState) -> Rect {
    // Uniform zoom keeps the rectangle axis-aligned; two corners suffice.
    let p0 = canvas_to_screen(rect.origin(), camera);
    let p1 = canvas_to_screen(Point::new(rect.x1, rect.y1), camera);
    Rect::from_points(p0, p1)
}
