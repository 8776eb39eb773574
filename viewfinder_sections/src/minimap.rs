// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimap geometry: a scaled‑down overview of every section plus the
//! current viewport, and the inverse mapping for clicks.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};
use viewfinder_camera::{CameraState, visible_canvas_rect};

use crate::registry::{SectionDescriptor, SectionRegistry};

/// Mapping between canvas space and a fixed‑size minimap.
///
/// The content bounds are fitted (uniform scale, centred) into the minimap
/// rectangle minus `padding` on each side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinimapLayout {
    content: Rect,
    size: Size,
    scale: f64,
    offset: Vec2,
}

impl MinimapLayout {
    /// Lays out `content` (canvas space) in a minimap of `size`.
    ///
    /// Returns `None` if either the content or the usable minimap area is empty.
    #[must_use]
    pub fn new(content: Rect, size: Size, padding: f64) -> Option<Self> {
        let padding = if padding.is_finite() { padding.max(0.0) } else { 0.0 };
        let inner = Size::new(size.width - 2.0 * padding, size.height - 2.0 * padding);
        let usable = inner.width > 0.0 && inner.height > 0.0;
        let has_content = content.is_finite() && content.width() > 0.0 && content.height() > 0.0;
        if !usable || !has_content {
            return None;
        }
        let scale = (inner.width / content.width()).min(inner.height / content.height());
        let fitted = Size::new(content.width() * scale, content.height() * scale);
        let origin = Vec2::new(
            padding + 0.5 * (inner.width - fitted.width),
            padding + 0.5 * (inner.height - fitted.height),
        );
        let offset = origin - content.origin().to_vec2() * scale;
        Some(Self {
            content,
            size,
            scale,
            offset,
        })
    }

    /// Canvas units to minimap pixels.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Minimap size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Content bounds this layout was built for.
    #[must_use]
    pub fn content(&self) -> Rect {
        self.content
    }

    /// Canvas point to minimap point.
    #[must_use]
    pub fn to_minimap_point(&self, pt: Point) -> Point {
        (pt.to_vec2() * self.scale + self.offset).to_point()
    }

    /// Minimap point to canvas point.
    #[must_use]
    pub fn to_canvas_point(&self, pt: Point) -> Point {
        ((pt.to_vec2() - self.offset) / self.scale).to_point()
    }

    /// Canvas rectangle to minimap rectangle.
    #[must_use]
    pub fn to_minimap_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.to_minimap_point(rect.origin()),
            self.to_minimap_point(Point::new(rect.x1, rect.y1)),
        )
    }

    /// The visible part of the canvas, in minimap space.
    #[must_use]
    pub fn viewport_rect(&self, camera: &CameraState, viewport: Size) -> Rect {
        self.to_minimap_rect(visible_canvas_rect(camera, viewport))
    }

    /// Resolves a click in minimap space.
    #[must_use]
    pub fn hit_test<'a>(&self, pt: Point, registry: &'a SectionRegistry) -> MinimapHit<'a> {
        let canvas = self.to_canvas_point(pt);
        match registry.section_at(canvas) {
            Some(section) => MinimapHit::Section(section),
            None => MinimapHit::Canvas(canvas),
        }
    }

    /// Builds everything a renderer needs for one minimap frame.
    #[must_use]
    pub fn frame(
        &self,
        registry: &SectionRegistry,
        camera: &CameraState,
        viewport: Size,
        active: Option<&str>,
    ) -> MinimapFrame {
        let sections = registry
            .iter()
            .map(|s| MinimapItem {
                id: s.id.clone(),
                label: s.label.clone(),
                rect: self.to_minimap_rect(s.bounds),
                active: active == Some(s.id.as_str()),
            })
            .collect();
        MinimapFrame {
            size: self.size,
            sections,
            viewport: self.viewport_rect(camera, viewport),
        }
    }
}

/// Result of [`MinimapLayout::hit_test`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MinimapHit<'a> {
    /// The click landed inside this section.
    Section(&'a SectionDescriptor),
    /// The click landed on empty canvas at this canvas point.
    Canvas(Point),
}

/// One section as drawn on the minimap.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimapItem {
    /// Section id.
    pub id: String,
    /// Section label.
    pub label: String,
    /// Rectangle in minimap space.
    pub rect: Rect,
    /// Whether this is the active section.
    pub active: bool,
}

/// Render snapshot of a minimap.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimapFrame {
    /// Minimap size in pixels.
    pub size: Size,
    /// Sections in registration order.
    pub sections: Vec<MinimapItem>,
    /// Current viewport in minimap space.
    pub viewport: Rect,
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::{Point, Rect, Size};
    use viewfinder_camera::CameraState;

    use super::*;
    use crate::registry::{SectionDescriptor, SectionRegistry};

    fn registry() -> SectionRegistry {
        SectionRegistry::new(vec![
            SectionDescriptor::new("a", "A", Rect::new(0.0, 0.0, 800.0, 600.0)),
            SectionDescriptor::new("b", "B", Rect::new(1000.0, 0.0, 1800.0, 600.0)),
        ])
        .unwrap()
    }

    fn layout(reg: &SectionRegistry) -> MinimapLayout {
        MinimapLayout::new(reg.content_bounds().unwrap(), Size::new(200.0, 100.0), 10.0).unwrap()
    }

    #[test]
    fn content_is_fitted_and_centred() {
        let reg = registry();
        let l = layout(&reg);
        // Inner area is 180x80; 1800x600 content is width-limited.
        assert!((l.scale() - 0.1).abs() < 1e-12);
        let r = l.to_minimap_rect(reg.content_bounds().unwrap());
        assert!((r.x0 - 10.0).abs() < 1e-9 && (r.x1 - 190.0).abs() < 1e-9);
        assert!((r.y0 - 20.0).abs() < 1e-9 && (r.y1 - 80.0).abs() < 1e-9);
    }

    #[test]
    fn point_mapping_roundtrips() {
        let l = layout(&registry());
        let p = Point::new(1234.5, 321.0);
        let back = l.to_canvas_point(l.to_minimap_point(p));
        assert!((back - p).hypot() < 1e-9);
    }

    #[test]
    fn hit_test_distinguishes_sections_and_gaps() {
        let reg = registry();
        let l = layout(&reg);
        let in_b = l.to_minimap_point(Point::new(1400.0, 300.0));
        assert!(matches!(l.hit_test(in_b, &reg), MinimapHit::Section(s) if s.id == "b"));
        let gap = l.to_minimap_point(Point::new(900.0, 300.0));
        match l.hit_test(gap, &reg) {
            MinimapHit::Canvas(p) => assert!((p.x - 900.0).abs() < 1e-9),
            MinimapHit::Section(s) => panic!("unexpected section {}", s.id),
        }
    }

    #[test]
    fn viewport_rect_tracks_camera() {
        let reg = registry();
        let l = layout(&reg);
        let view = Size::new(800.0, 600.0);
        let at_a = l.viewport_rect(&CameraState::IDENTITY, view);
        let at_b = l.viewport_rect(&CameraState::new(-1000.0, 0.0, 1.0), view);
        assert!((at_b.x0 - at_a.x0 - 100.0).abs() < 1e-9);
        assert!((at_a.width() - at_b.width()).abs() < 1e-9);
        let zoomed = l.viewport_rect(&CameraState::new(0.0, 0.0, 2.0), view);
        assert!((zoomed.width() * 2.0 - at_a.width()).abs() < 1e-9);
    }

    #[test]
    fn frame_marks_active_section() {
        let reg = registry();
        let l = layout(&reg);
        let f = l.frame(&reg, &CameraState::IDENTITY, Size::new(800.0, 600.0), Some("b"));
        assert_eq!(f.sections.len(), 2);
        assert!(!f.sections[0].active);
        assert!(f.sections[1].active);
        assert_eq!(f.sections[1].label, "B");
    }

    #[test]
    fn empty_layout_is_rejected() {
        assert!(MinimapLayout::new(Rect::ZERO, Size::new(100.0, 100.0), 0.0).is_none());
        let tiny = Size::new(10.0, 10.0);
        assert!(MinimapLayout::new(Rect::new(0.0, 0.0, 1.0, 1.0), tiny, 5.0).is_none());
    }
}
