// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for section jumps, zoom steps and transition hand‑over.

use kurbo::{Rect, Size};
use viewfinder_camera::CameraState;
use viewfinder_gesture::{Key, KeyPress};
use viewfinder_navigator::{Activity, CanvasNavigator, NavError, NavigatorConfig};
use viewfinder_sections::{SectionDescriptor, SectionRegistry, TargetError};

const FRAME: f64 = 1000.0 / 60.0;

fn two_sections() -> CanvasNavigator {
    let registry = SectionRegistry::new([
        SectionDescriptor::new("a", "A", Rect::new(0.0, 0.0, 800.0, 600.0)),
        SectionDescriptor::new("b", "B", Rect::new(1000.0, 0.0, 1800.0, 600.0)),
    ])
    .unwrap();
    let mut nav = CanvasNavigator::new(registry, NavigatorConfig::default());
    nav.set_viewport_size(Size::new(800.0, 600.0));
    nav
}

fn run(nav: &mut CanvasNavigator, from: f64) -> f64 {
    let mut now = from;
    while nav.tick(now) {
        now += FRAME;
        assert!(now - from < 10_000.0, "motion never settled");
    }
    now
}

#[test]
fn jump_to_second_section_lands_on_its_target() {
    let mut nav = two_sections();
    let expected = nav
        .registry()
        .compute_target_for_section("b", nav.viewport(), &nav.config().fit_options())
        .unwrap();
    assert!((expected.x + 860.0).abs() < 1e-9);
    assert!((expected.y - 30.0).abs() < 1e-9);
    assert!((expected.scale - 0.9).abs() < 1e-12);

    assert!(nav.navigate_to_section("b", 0.0).is_some());
    assert!(nav.is_animating());
    nav.tick(600.0);
    assert_eq!(nav.camera(), expected);
    assert!(!nav.is_animating());
    assert_eq!(nav.active_section().map(|s| s.id.as_str()), Some("b"));
}

#[test]
fn transition_moves_monotonically() {
    let mut nav = two_sections();
    nav.navigate_to_section("b", 0.0);
    let mut prev = nav.camera();
    let mut now = 0.0;
    while nav.tick(now) {
        let cam = nav.camera();
        assert!(cam.x <= prev.x, "x went back at {now}");
        assert!(cam.y >= prev.y, "y went back at {now}");
        assert!(cam.scale <= prev.scale, "scale went back at {now}");
        prev = cam;
        now += 7.0;
    }
}

#[test]
fn unknown_section_leaves_camera_alone() {
    let mut nav = two_sections();
    let before = nav.camera();
    assert!(nav.navigate_to_section("missing", 0.0).is_none());
    assert_eq!(
        nav.try_navigate_to_section("missing", 0.0),
        Err(NavError::Target(TargetError::UnknownSection("missing".into())))
    );
    assert_eq!(nav.store().activity(), Activity::Idle);
    assert_eq!(nav.camera(), before);
}

#[test]
fn zero_viewport_refuses_navigation() {
    let mut nav = two_sections();
    nav.set_viewport_size(Size::ZERO);
    assert_eq!(
        nav.try_navigate_to_section("b", 0.0),
        Err(NavError::Target(TargetError::DegenerateViewport))
    );
    assert!(nav.overview(0.0).is_none());
}

#[test]
fn new_jump_continues_from_the_current_frame() {
    let mut nav = two_sections();
    nav.navigate_to_section("b", 0.0);
    nav.tick(FRAME * 10.0);
    let mid = nav.camera();
    nav.navigate_to_section("a", FRAME * 10.0);
    // Starting the second transition does not move the camera.
    assert_eq!(nav.camera(), mid);
    let from = nav.store().transition().map(|t| t.from);
    assert_eq!(from, Some(mid));
    nav.tick(FRAME * 11.0);
    // Heading back towards A: x increases from the interrupted position.
    assert!(nav.camera().x > mid.x);
}

#[test]
fn repeated_zoom_in_stays_within_limits() {
    let mut nav = two_sections();
    let mut now = 0.0;
    for _ in 0..20 {
        nav.zoom_in(now);
        now += FRAME;
        nav.tick(now);
        assert!(nav.camera().scale <= 3.0);
        assert!(nav.store().target().scale <= 3.0);
    }
    run(&mut nav, now);
    assert_eq!(nav.camera().scale, 3.0);
    assert_eq!(nav.zoom_percent(), 300);
    // Already at the limit: nothing to animate.
    assert!(nav.zoom_in(now).is_none());
}

#[test]
fn zoom_steps_compound_on_the_target() {
    let mut nav = two_sections();
    nav.zoom_in(0.0);
    nav.zoom_in(0.0);
    let target = nav.store().target();
    assert!((target.scale - 1.5625).abs() < 1e-12);
    // Zooming about the viewport centre keeps the centre fixed.
    let centre_before = (400.0 - 0.0) / 1.0;
    let centre_after = (400.0 - target.x) / target.scale;
    assert!((centre_before - centre_after).abs() < 1e-9);
}

#[test]
fn zoom_out_stops_at_the_lower_limit() {
    let mut nav = two_sections();
    let mut now = 0.0;
    for _ in 0..20 {
        nav.zoom_out(now);
        now = run(&mut nav, now);
    }
    assert_eq!(nav.camera().scale, 0.2);
}

#[test]
fn next_and_previous_wrap_around() {
    let mut nav = two_sections();
    nav.next_section(0.0);
    let now = run(&mut nav, 0.0);
    assert_eq!(nav.active_section().map(|s| s.id.as_str()), Some("b"));
    nav.next_section(now);
    let now = run(&mut nav, now);
    assert_eq!(nav.active_section().map(|s| s.id.as_str()), Some("a"));
    nav.previous_section(now);
    run(&mut nav, now);
    assert_eq!(nav.active_section().map(|s| s.id.as_str()), Some("b"));
}

#[test]
fn next_section_follows_the_in_flight_target() {
    let mut nav = two_sections();
    nav.navigate_to_section("b", 0.0);
    // Still over A; the next section after the one being approached wraps to A.
    nav.next_section(0.0);
    let target = nav.store().target();
    let a = nav
        .registry()
        .compute_target_for_section("a", nav.viewport(), &nav.config().fit_options())
        .unwrap();
    assert_eq!(target, a);
}

#[test]
fn overview_fits_everything() {
    let mut nav = two_sections();
    nav.overview(0.0);
    run(&mut nav, 0.0);
    let cam = nav.camera();
    // 1800 wide content in 800 px at 90%.
    assert!((cam.scale - 0.4).abs() < 1e-9);
    let visible = viewfinder_camera::visible_canvas_rect(&cam, nav.viewport());
    assert!(visible.contains(kurbo::Point::new(0.0, 0.0)));
    assert!(visible.contains(kurbo::Point::new(1800.0, 600.0)));
}

#[test]
fn reset_returns_home() {
    let mut nav = two_sections();
    nav.navigate_to_section("b", 0.0);
    let now = run(&mut nav, 0.0);
    nav.reset_view(now);
    run(&mut nav, now);
    assert_eq!(nav.camera(), CameraState::IDENTITY);
}

#[test]
fn number_keys_jump_and_escape_stops() {
    let mut nav = two_sections();
    assert!(nav.on_key(&KeyPress::plain(Key::Character('2')), 0.0));
    assert!(nav.is_animating());
    nav.tick(100.0);
    assert!(nav.on_key(&KeyPress::plain(Key::Escape), 100.0));
    assert!(!nav.is_animating());
    let stopped = nav.camera();
    nav.tick(200.0);
    assert_eq!(nav.camera(), stopped);
    // No ninth section.
    assert!(nav.on_key(&KeyPress::plain(Key::Character('9')), 200.0));
    assert!(!nav.is_animating());
}

#[test]
fn arrow_keys_pan_immediately() {
    let mut nav = two_sections();
    nav.navigate_to_section("b", 0.0);
    assert!(nav.on_key(&KeyPress::plain(Key::ArrowRight), 0.0));
    // The arrow cancels the jump and pans right away.
    assert!(!nav.is_animating());
    assert_eq!(nav.camera().x, -80.0);
    nav.on_key(
        &KeyPress::with(Key::ArrowRight, viewfinder_gesture::Modifiers::SHIFT),
        0.0,
    );
    assert_eq!(nav.camera().x, -400.0);
}
