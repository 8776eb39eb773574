// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::camera::CameraState;

/// Default lower zoom bound.
pub const MIN_SCALE: f64 = 0.2;
/// Default upper zoom bound.
pub const MAX_SCALE: f64 = 3.0;
/// Default overscroll fraction; see [`clamp_pan`].
pub const DEFAULT_OVERSCROLL: f64 = 0.5;
/// Smallest lower zoom bound a [`ScaleLimits`] accepts.
pub const MIN_SCALE_FLOOR: f64 = 1e-6;

/// Coerces non‑finite coordinates to `0.0`.
#[inline]
#[must_use]
pub fn sanitize(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Clamps `scale` into `[min, max]`.
///
/// The range is normalized so that a reversed pair still works. Non‑finite
/// input never escapes: `NaN` and `-inf` map to `min`, `+inf` maps to `max`.
/// The function is idempotent.
#[must_use]
pub fn clamp_scale(scale: f64, min: f64, max: f64) -> f64 {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    if scale.is_nan() {
        return min;
    }
    clamp_to(scale, min, max)
}

/// Like `f64::clamp`, but never panics on a bad range.
#[inline]
fn clamp_to(v: f64, lo: f64, hi: f64) -> f64 {
    v.max(lo).min(hi)
}

/// Clamps a pan offset so the content stays reachable.
///
/// With `m = viewport * overscroll`, the screen‑space content rectangle
/// `content_bounds * scale + offset` must keep its left/top edge at or before
/// `m` and its right/bottom edge at or after `viewport - m`. With the default
/// overscroll of `0.5` the content always covers the viewport centre lines.
/// If content is too small to satisfy both edges on an axis, that axis is
/// centred instead.
///
/// Degenerate inputs (empty content, zero viewport, non‑positive scale) leave
/// the offset unchanged apart from coercing non‑finite components to `0.0`.
#[must_use]
pub fn clamp_pan(
    offset: Vec2,
    content_bounds: Rect,
    viewport: Size,
    scale: f64,
    overscroll: f64,
) -> Vec2 {
    let offset = Vec2::new(sanitize(offset.x), sanitize(offset.y));
    let Some(range) = pan_range(content_bounds, viewport, scale, overscroll) else {
        return offset;
    };
    Vec2::new(
        clamp_to(offset.x, range.x0, range.x1),
        clamp_to(offset.y, range.y0, range.y1),
    )
}

/// Returns the allowed offset range as a rectangle in offset space.
///
/// `x0..x1` bounds `offset.x`, `y0..y1` bounds `offset.y`. A collapsed axis
/// (`x0 == x1`) means the content is centred on that axis.
#[must_use]
pub fn pan_range(
    content_bounds: Rect,
    viewport: Size,
    scale: f64,
    overscroll: f64,
) -> Option<Rect> {
    let degenerate = !content_bounds.is_finite()
        || !(content_bounds.width() > 0.0 && content_bounds.height() > 0.0)
        || !(viewport.width > 0.0 && viewport.height > 0.0)
        || !(scale > 0.0 && scale.is_finite());
    if degenerate {
        return None;
    }
    let overscroll = if overscroll.is_finite() {
        overscroll.clamp(0.0, 1.0)
    } else {
        DEFAULT_OVERSCROLL
    };
    let axis = |lo_edge: f64, hi_edge: f64, extent: f64| {
        let margin = extent * overscroll;
        let lo = extent - margin - hi_edge * scale;
        let hi = margin - lo_edge * scale;
        if lo > hi {
            let mid = 0.5 * (lo + hi);
            (mid, mid)
        } else {
            (lo, hi)
        }
    };
    let (x0, x1) = axis(content_bounds.x0, content_bounds.x1, viewport.width);
    let (y0, y1) = axis(content_bounds.y0, content_bounds.y1, viewport.height);
    Some(Rect::new(x0, y0, x1, y1))
}

/// Inclusive zoom range.
///
/// Both bounds are finite and positive, so a clamped scale is always a
/// usable zoom factor. Deserialized values are normalized like [`Self::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawScaleLimits")
)]
pub struct ScaleLimits {
    min: f64,
    max: f64,
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self {
            min: MIN_SCALE,
            max: MAX_SCALE,
        }
    }
}

impl ScaleLimits {
    /// Creates a range, swapping the bounds if they are reversed.
    ///
    /// Non‑finite bounds fall back to [`MIN_SCALE`] and [`MAX_SCALE`], and the
    /// lower bound is floored at [`MIN_SCALE_FLOOR`].
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let min = if min.is_finite() { min } else { MIN_SCALE };
        let max = if max.is_finite() { max } else { MAX_SCALE };
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let min = min.max(MIN_SCALE_FLOOR);
        Self {
            min,
            max: max.max(min),
        }
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `scale` into this range; see [`clamp_scale`].
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        clamp_scale(scale, self.min, self.max)
    }

    /// Returns `true` if `scale` lies inside the range.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.min && scale <= self.max
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawScaleLimits {
    min: f64,
    max: f64,
}

#[cfg(feature = "serde")]
impl From<RawScaleLimits> for ScaleLimits {
    fn from(raw: RawScaleLimits) -> Self {
        Self::new(raw.min, raw.max)
    }
}

/// Whether panning is constrained relative to the content bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClampMode {
    /// Do not constrain the pan offset; only the scale is clamped.
    None,
    /// Constrain the offset with [`clamp_pan`] and the policy's overscroll.
    #[default]
    Overscroll,
}

/// Everything needed to turn an arbitrary camera request into a valid camera.
///
/// The same policy is used by every writer (drag, wheel, momentum, keyboard,
/// transitions), so all paths agree on the limits.
#[derive(Clone, Debug, PartialEq)]
pub struct ClampPolicy {
    limits: ScaleLimits,
    mode: ClampMode,
    overscroll: f64,
    content_bounds: Option<Rect>,
    viewport: Size,
}

impl Default for ClampPolicy {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl ClampPolicy {
    /// Creates a policy for a viewport of the given size with default limits
    /// and no content bounds.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            limits: ScaleLimits::default(),
            mode: ClampMode::default(),
            overscroll: DEFAULT_OVERSCROLL,
            content_bounds: None,
            viewport,
        }
    }

    /// Returns the zoom range.
    #[must_use]
    pub fn limits(&self) -> ScaleLimits {
        self.limits
    }

    /// Sets the zoom range.
    pub fn set_limits(&mut self, limits: ScaleLimits) {
        self.limits = limits;
    }

    /// Returns the clamp mode.
    #[must_use]
    pub fn mode(&self) -> ClampMode {
        self.mode
    }

    /// Sets the clamp mode.
    pub fn set_mode(&mut self, mode: ClampMode) {
        self.mode = mode;
    }

    /// Returns the overscroll fraction.
    #[must_use]
    pub fn overscroll(&self) -> f64 {
        self.overscroll
    }

    /// Sets the overscroll fraction, clamped to `[0, 1]`.
    pub fn set_overscroll(&mut self, overscroll: f64) {
        self.overscroll = if overscroll.is_finite() {
            overscroll.clamp(0.0, 1.0)
        } else {
            DEFAULT_OVERSCROLL
        };
    }

    /// Returns the content bounds in canvas space, if any.
    #[must_use]
    pub fn content_bounds(&self) -> Option<Rect> {
        self.content_bounds
    }

    /// Sets the content bounds used for pan clamping.
    pub fn set_content_bounds(&mut self, bounds: Option<Rect>) {
        self.content_bounds = bounds;
    }

    /// Returns the viewport size in screen pixels.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Sets the viewport size in screen pixels.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Returns `true` if the viewport has zero (or invalid) area.
    #[must_use]
    pub fn is_viewport_degenerate(&self) -> bool {
        !(self.viewport.width > 0.0 && self.viewport.height > 0.0)
    }

    /// Returns the viewport centre in screen space.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        Point::new(self.viewport.width * 0.5, self.viewport.height * 0.5)
    }

    /// Allowed offset range at `scale`, or `None` when pan is unconstrained.
    #[must_use]
    pub fn pan_range(&self, scale: f64) -> Option<Rect> {
        if self.mode == ClampMode::None {
            return None;
        }
        pan_range(self.content_bounds?, self.viewport, scale, self.overscroll)
    }

    /// Clamps scale first, then the offset at the clamped scale.
    #[must_use]
    pub fn clamp(&self, camera: CameraState) -> CameraState {
        let scale = self.limits.clamp(camera.scale);
        let offset = Vec2::new(sanitize(camera.x), sanitize(camera.y));
        let offset = match self.pan_range(scale) {
            Some(range) => Vec2::new(
                clamp_to(offset.x, range.x0, range.x1),
                clamp_to(offset.y, range.y0, range.y1),
            ),
            None => offset,
        };
        CameraState::new(offset.x, offset.y, scale)
    }

    /// Returns `true` if `camera` is already a fixed point of [`Self::clamp`].
    #[must_use]
    pub fn admits(&self, camera: &CameraState) -> bool {
        self.clamp(*camera) == *camera
    }

    /// Multiplies the scale by `factor` about a screen‑space `anchor`.
    ///
    /// The canvas point under `anchor` stays under it unless the pan clamp
    /// has to pull the result back. A non‑positive or non‑finite factor
    /// leaves the camera as is.
    #[must_use]
    pub fn zoom_about(&self, camera: CameraState, anchor: Point, factor: f64) -> CameraState {
        if !(factor > 0.0 && factor.is_finite()) {
            return self.clamp(camera);
        }
        self.zoom_to(camera, anchor, camera.scale * factor)
    }

    /// Sets the scale to `scale` (clamped) about a screen‑space `anchor`.
    #[must_use]
    pub fn zoom_to(&self, camera: CameraState, anchor: Point, scale: f64) -> CameraState {
        let new_scale = self.limits.clamp(scale);
        self.clamp(camera.zoomed_about(anchor, new_scale))
    }
}
