// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel interpretation: zoom or pan.

use kurbo::{Point, Size, Vec2};

use crate::event::{DeltaMode, Modifiers, WheelSample};

/// Which wheel events zoom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WheelPolicy {
    /// Every vertical wheel delta zooms, with or without modifiers.
    ///
    /// Suits a canvas that has nothing else to scroll.
    #[default]
    ZoomAlways,
    /// Plain wheel pans; Control/Meta + wheel zooms.
    ///
    /// Browsers report trackpad pinches as Control + wheel, so pinch‑to‑zoom
    /// keeps working under this policy.
    PanUnlessModified,
}

/// What a wheel event asks the camera to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelAction {
    /// Multiply the scale by `factor` about `anchor` (screen space).
    Zoom {
        /// Cursor position.
        anchor: Point,
        /// Scale multiplier.
        factor: f64,
    },
    /// Shift the camera offset by this many screen pixels.
    Pan(Vec2),
}

/// Tuning for wheel interpretation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelConfig {
    /// Zoom vs pan policy.
    pub policy: WheelPolicy,
    /// Scale change per pixel of vertical delta.
    pub sensitivity: f64,
    /// Pixels per line for [`DeltaMode::Line`] deltas.
    pub line_height: f64,
    /// Lower bound on a single event's zoom factor.
    pub min_factor: f64,
    /// Upper bound on a single event's zoom factor.
    pub max_factor: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            policy: WheelPolicy::default(),
            sensitivity: 0.0015,
            line_height: 16.0,
            min_factor: 0.5,
            max_factor: 2.0,
        }
    }
}

impl WheelConfig {
    /// Converts the sample's delta into pixels. `page` is the viewport size
    /// used for [`DeltaMode::Page`].
    #[must_use]
    pub fn delta_pixels(&self, sample: &WheelSample, page: Size) -> Vec2 {
        let d = sample.delta;
        match sample.mode {
            DeltaMode::Pixel => d,
            DeltaMode::Line => d * self.line_height,
            DeltaMode::Page => Vec2::new(d.x * page.width, d.y * page.height),
        }
    }

    /// Zoom factor for a vertical pixel delta: `1 - dy * sensitivity`,
    /// bounded to `[min_factor, max_factor]`. Scrolling down zooms out.
    #[must_use]
    pub fn zoom_factor(&self, dy: f64) -> f64 {
        (1.0 - dy * self.sensitivity).clamp(self.min_factor, self.max_factor)
    }

    /// Interprets a wheel sample, or returns `None` if it asks for nothing.
    #[must_use]
    pub fn interpret(&self, sample: &WheelSample, page: Size) -> Option<WheelAction> {
        if !sample.delta.is_finite() || !sample.position.is_finite() {
            return None;
        }
        let delta = self.delta_pixels(sample, page);
        let zoom = match self.policy {
            WheelPolicy::ZoomAlways => true,
            WheelPolicy::PanUnlessModified => sample.modifiers.has_command(),
        };
        if zoom {
            if delta.y == 0.0 {
                return None;
            }
            return Some(WheelAction::Zoom {
                anchor: sample.position,
                factor: self.zoom_factor(delta.y),
            });
        }
        // Shift turns a vertical wheel into horizontal panning.
        let delta = if sample.modifiers.contains(Modifiers::SHIFT) && delta.x == 0.0 {
            Vec2::new(delta.y, 0.0)
        } else {
            delta
        };
        if delta == Vec2::ZERO {
            return None;
        }
        Some(WheelAction::Pan(-delta))
    }
}
