// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section tour.
//!
//! Drive a navigator through section jumps, keyboard shortcuts, zoom steps,
//! and a minimap click on a simulated 60 Hz clock.
//!
//! Run:
//! - `cargo run -p viewfinder_demos --example section_tour`
//! - `RUST_LOG=viewfinder_navigator=trace cargo run -p viewfinder_demos --example section_tour`

use kurbo::Size;
use viewfinder_demos::{ManualClock, describe, init_logging, portfolio};
use viewfinder_gesture::{Key, KeyPress};
use viewfinder_navigator::{CanvasNavigator, NavigatorConfig};

fn main() {
    init_logging();

    let mut nav = CanvasNavigator::new(portfolio(), NavigatorConfig::default());
    nav.set_viewport_size(Size::new(1280.0, 720.0));
    let mut clock = ManualClock::default();
    println!("start      {}", describe(&nav));

    for control in nav.section_controls() {
        let marker = if control.current { '*' } else { ' ' };
        println!("  [{marker}] {}", control.accessible_name);
    }

    for id in ["focus", "develop", "missing"] {
        nav.navigate_to_section(id, clock.now());
        let frames = clock.settle(&mut nav);
        println!("{id:<10} {}  ({frames} frames)", describe(&nav));
    }

    for key in [
        Key::Character('f'),
        Key::Character('+'),
        Key::Character('+'),
        Key::PageDown,
        Key::Character('1'),
        Key::ArrowRight,
        Key::Home,
    ] {
        nav.on_key(&KeyPress::plain(key), clock.now());
        clock.settle(&mut nav);
        println!("{:<10} {}", format!("{key:?}"), describe(&nav));
    }

    if let Some(frame) = nav.minimap_frame() {
        let target = &frame.sections[5];
        nav.on_minimap_click(target.rect.center(), clock.now());
        clock.settle(&mut nav);
        println!("minimap    {}", describe(&nav));
        println!("indicator  {:?}", nav.minimap().viewport_rect());
    }

    println!("{:#?}", nav.debug_info());
}
