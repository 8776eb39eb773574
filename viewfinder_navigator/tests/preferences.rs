// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for remembering and restoring a view.

#![cfg(feature = "serde")]

use kurbo::{Rect, Size};
use viewfinder_camera::CameraState;
use viewfinder_navigator::{CanvasNavigator, NavigatorConfig, ViewPreferences};
use viewfinder_sections::{SectionDescriptor, SectionRegistry};

fn navigator() -> CanvasNavigator {
    let registry = SectionRegistry::new([
        SectionDescriptor::new("a", "A", Rect::new(0.0, 0.0, 800.0, 600.0)),
        SectionDescriptor::new("b", "B", Rect::new(1000.0, 0.0, 1800.0, 600.0)),
    ])
    .unwrap();
    let mut nav = CanvasNavigator::new(registry, NavigatorConfig::default());
    nav.set_viewport_size(Size::new(800.0, 600.0));
    nav
}

fn close(a: CameraState, b: CameraState) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9 && (a.scale - b.scale).abs() < 1e-12
}

#[test]
fn preferences_survive_json() {
    let mut nav = navigator();
    nav.navigate_to_section("b", 0.0);
    nav.tick(600.0);
    let prefs = nav.view_preferences();
    assert_eq!(prefs.section.as_deref(), Some("b"));

    let json = serde_json::to_string(&prefs).unwrap();
    let restored: ViewPreferences = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.section, prefs.section);
    assert!(close(restored.camera, prefs.camera));

    let mut fresh = navigator();
    assert!(fresh.restore_view(&restored));
    assert!(close(fresh.camera(), nav.camera()));
    assert_eq!(fresh.active_section().map(|s| s.id.as_str()), Some("b"));
}
