// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use viewfinder_camera::{CameraState, ClampMode, DEFAULT_OVERSCROLL, ScaleLimits};
use viewfinder_gesture::WheelConfig;
use viewfinder_motion::{Easing, MomentumConfig};
use viewfinder_sections::{FitMode, FitOptions};

/// Tuning for a [`CanvasNavigator`](crate::CanvasNavigator).
///
/// The defaults describe a typical portfolio canvas: 20%–300% zoom, half a
/// viewport of overscroll, sections filling 90% of the view, 600 ms section
/// jumps and 300 ms zoom steps.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigatorConfig {
    /// Allowed zoom range.
    pub limits: ScaleLimits,
    /// Whether pan is clamped to the content.
    pub clamp_mode: ClampMode,
    /// How far past the content the view may pan, as a fraction of the viewport.
    pub overscroll: f64,
    /// How sections are fitted into the viewport.
    pub fit_mode: FitMode,
    /// Share of the viewport a fitted section occupies.
    pub fill: f64,
    /// Duration of section jumps, overview and reset.
    pub transition_ms: f64,
    /// Duration of zoom button and zoom key steps.
    pub zoom_transition_ms: f64,
    /// Easing for every transition.
    pub easing: Easing,
    /// Scale multiplier per zoom step.
    pub zoom_step: f64,
    /// Arrow key pan distance in screen pixels.
    pub pan_step: f64,
    /// Multiplier applied to [`Self::pan_step`] with Shift held.
    pub coarse_pan_multiplier: f64,
    /// Wheel interpretation.
    pub wheel: WheelConfig,
    /// Post‑drag momentum.
    pub momentum: MomentumConfig,
    /// A drag whose pointer rested longer than this before release does not fling.
    pub release_idle_ms: f64,
    /// Minimap size in pixels.
    pub minimap_size: Size,
    /// Minimap inner padding in pixels.
    pub minimap_padding: f64,
    /// Camera that [`reset_view`](crate::CanvasNavigator::reset_view) returns to.
    pub home: CameraState,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            limits: ScaleLimits::default(),
            clamp_mode: ClampMode::default(),
            overscroll: DEFAULT_OVERSCROLL,
            fit_mode: FitMode::default(),
            fill: 0.9,
            transition_ms: 600.0,
            zoom_transition_ms: 300.0,
            easing: Easing::default(),
            zoom_step: 1.25,
            pan_step: 80.0,
            coarse_pan_multiplier: 4.0,
            wheel: WheelConfig::default(),
            momentum: MomentumConfig::default(),
            release_idle_ms: 80.0,
            minimap_size: Size::new(240.0, 160.0),
            minimap_padding: 8.0,
            home: CameraState::IDENTITY,
        }
    }
}

impl NavigatorConfig {
    /// Fit options for section targets, derived from this config.
    #[must_use]
    pub fn fit_options(&self) -> FitOptions {
        FitOptions {
            mode: self.fit_mode,
            fill: self.fill,
            limits: self.limits,
        }
    }
}
