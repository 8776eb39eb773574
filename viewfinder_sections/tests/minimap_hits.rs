// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for minimap hit testing against a full six‑panel layout.

use kurbo::{Point, Rect, Size};
use viewfinder_sections::{
    FitOptions, MinimapHit, MinimapLayout, SectionDescriptor, SectionRegistry,
};

fn portfolio() -> SectionRegistry {
    let names = ["Capture", "Focus", "Frame", "Exposure", "Develop", "Portfolio"];
    SectionRegistry::new(names.iter().enumerate().map(|(i, name)| {
        let col = (i % 3) as f64;
        let row = (i / 3) as f64;
        SectionDescriptor::new(
            name.to_lowercase(),
            *name,
            Rect::from_origin_size((col * 1100.0, row * 800.0), (1000.0, 700.0)),
        )
    }))
    .unwrap()
}

#[test]
fn every_interior_minimap_point_hits_its_section() {
    let reg = portfolio();
    let layout = MinimapLayout::new(reg.content_bounds().unwrap(), Size::new(240.0, 160.0), 8.0)
        .unwrap();
    for section in reg.iter() {
        let r = layout.to_minimap_rect(section.bounds).inset(-0.5);
        for i in 0..=10 {
            for j in 0..=10 {
                let p = Point::new(
                    r.x0 + r.width() * f64::from(i) / 10.0,
                    r.y0 + r.height() * f64::from(j) / 10.0,
                );
                match layout.hit_test(p, &reg) {
                    MinimapHit::Section(hit) => assert_eq!(hit.id, section.id),
                    MinimapHit::Canvas(c) => panic!("{p:?} -> {c:?} missed {}", section.id),
                }
            }
        }
    }
}

#[test]
fn section_targets_are_distinct_and_centred() {
    let reg = portfolio();
    let view = Size::new(1280.0, 720.0);
    let opts = FitOptions::default();
    for section in reg.iter() {
        let cam = reg.compute_target_for_section(&section.id, view, &opts).unwrap();
        let c = section.bounds.center();
        assert!((c.x * cam.scale + cam.x - 640.0).abs() < 1e-9);
        assert!((c.y * cam.scale + cam.y - 360.0).abs() < 1e-9);
    }
    let overview = reg.compute_overview_target(view, &opts).unwrap();
    assert!(overview.scale < 1.0);
}
