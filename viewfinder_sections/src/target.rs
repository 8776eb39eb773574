// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use kurbo::{Point, Rect, Size};
use viewfinder_camera::{CameraState, ScaleLimits};

use crate::registry::SectionRegistry;

/// How a section is fitted into the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Scale so the whole section is visible (the smaller axis ratio).
    #[default]
    Contain,
    /// Scale so the section covers the viewport (the larger axis ratio),
    /// cropping the overflowing axis.
    Fill,
}

/// Parameters for camera‑target fitting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitOptions {
    /// Contain or fill.
    pub mode: FitMode,
    /// Fraction of the viewport the fitted section may occupy.
    pub fill: f64,
    /// Zoom range the result is clamped into.
    pub limits: ScaleLimits,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            mode: FitMode::default(),
            fill: 0.9,
            limits: ScaleLimits::default(),
        }
    }
}

/// Error returned by camera‑target fitting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetError {
    /// No section has this id.
    UnknownSection(String),
    /// The viewport has zero area, typically before the first layout.
    DegenerateViewport,
    /// The rectangle to fit has zero area or is not finite.
    DegenerateBounds,
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSection(id) => write!(f, "no section with id {id:?}"),
            Self::DegenerateViewport => f.write_str("viewport has zero area"),
            Self::DegenerateBounds => f.write_str("target bounds have zero area"),
        }
    }
}

impl core::error::Error for TargetError {}

fn check_viewport(viewport: Size) -> Result<(), TargetError> {
    if viewport.width > 0.0 && viewport.height > 0.0 && viewport.is_finite() {
        Ok(())
    } else {
        Err(TargetError::DegenerateViewport)
    }
}

/// Camera that fits `rect` into `viewport` and centres it.
///
/// The scale is `fill * viewport / rect` on the limiting axis (the smaller
/// ratio for [`FitMode::Contain`], the larger for [`FitMode::Fill`]), clamped
/// into `options.limits`.
pub fn compute_target_for_rect(
    rect: Rect,
    viewport: Size,
    options: &FitOptions,
) -> Result<CameraState, TargetError> {
    check_viewport(viewport)?;
    if !rect.is_finite() || !(rect.width() > 0.0 && rect.height() > 0.0) {
        return Err(TargetError::DegenerateBounds);
    }
    let fill = if options.fill > 0.0 && options.fill.is_finite() {
        options.fill
    } else {
        1.0
    };
    let sx = viewport.width * fill / rect.width();
    let sy = viewport.height * fill / rect.height();
    let scale = match options.mode {
        FitMode::Contain => sx.min(sy),
        FitMode::Fill => sx.max(sy),
    };
    let scale = options.limits.clamp(scale);
    let screen_center = Point::new(viewport.width * 0.5, viewport.height * 0.5);
    Ok(CameraState::centered_on(rect.center(), screen_center, scale))
}

/// Camera that centres the canvas point `pt` at `scale` (clamped).
pub fn compute_target_for_point(
    pt: Point,
    viewport: Size,
    scale: f64,
    limits: ScaleLimits,
) -> Result<CameraState, TargetError> {
    check_viewport(viewport)?;
    let screen_center = Point::new(viewport.width * 0.5, viewport.height * 0.5);
    Ok(CameraState::centered_on(pt, screen_center, limits.clamp(scale)))
}

impl SectionRegistry {
    /// Camera that fits and centres the section `id`.
    pub fn compute_target_for_section(
        &self,
        id: &str,
        viewport: Size,
        options: &FitOptions,
    ) -> Result<CameraState, TargetError> {
        let section = self
            .get(id)
            .ok_or_else(|| TargetError::UnknownSection(id.into()))?;
        compute_target_for_rect(section.bounds, viewport, options)
    }

    /// Camera that fits every section at once.
    pub fn compute_overview_target(
        &self,
        viewport: Size,
        options: &FitOptions,
    ) -> Result<CameraState, TargetError> {
        let bounds = self.content_bounds().ok_or(TargetError::DegenerateBounds)?;
        compute_target_for_rect(bounds, viewport, options)
    }
}
