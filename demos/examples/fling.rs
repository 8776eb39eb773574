// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag, fling, and pinch.
//!
//! Feed synthetic pointer samples into a navigator and watch momentum decay
//! until it settles against the pan limits.
//!
//! Run:
//! - `cargo run -p viewfinder_demos --example fling`

use kurbo::{Point, Size, Vec2};
use viewfinder_demos::{FRAME_MS, ManualClock, describe, init_logging, portfolio};
use viewfinder_gesture::{PointerSample, WheelSample};
use viewfinder_navigator::{Activity, CanvasNavigator, NavigatorConfig};

fn main() {
    init_logging();

    let mut nav = CanvasNavigator::new(portfolio(), NavigatorConfig::default());
    nav.set_viewport_size(Size::new(1280.0, 720.0));
    let mut clock = ManualClock::default();

    // A quick swipe to the left.
    let mut p = Point::new(1000.0, 360.0);
    nav.on_pointer_down(&PointerSample::mouse(p, clock.now()));
    for _ in 0..6 {
        p.x -= 45.0;
        nav.on_pointer_move(&PointerSample::mouse(p, clock.advance(FRAME_MS)));
    }
    nav.on_pointer_up(&PointerSample::mouse(p, clock.now()));
    println!("released   {}", describe(&nav));

    let mut frame = 0;
    while nav.store().activity() == Activity::Coasting {
        nav.tick(clock.advance(FRAME_MS));
        frame += 1;
        if frame % 10 == 0 {
            println!("frame {frame:>3}  {}", describe(&nav));
        }
    }
    println!("settled    {}  after {frame} frames", describe(&nav));

    // Two fingers spreading apart around the viewport centre.
    let t = clock.advance(FRAME_MS);
    nav.on_pointer_down(&PointerSample::touch(10, Point::new(540.0, 360.0), t));
    nav.on_pointer_down(&PointerSample::touch(11, Point::new(740.0, 360.0), t));
    for step in 1..=5 {
        let spread = 20.0 * f64::from(step);
        let t = clock.advance(FRAME_MS);
        nav.on_pointer_move(&PointerSample::touch(10, Point::new(540.0 - spread, 360.0), t));
        nav.on_pointer_move(&PointerSample::touch(11, Point::new(740.0 + spread, 360.0), t));
    }
    let t = clock.advance(FRAME_MS);
    nav.on_pointer_up(&PointerSample::touch(11, Point::new(840.0, 360.0), t));
    nav.on_pointer_up(&PointerSample::touch(10, Point::new(440.0, 360.0), t));
    println!("pinched    {}", describe(&nav));

    // Scroll down under the cursor to zoom back out.
    nav.on_wheel(&WheelSample::pixels(Vec2::new(0.0, 240.0), Point::new(640.0, 360.0)));
    println!("wheel      {}", describe(&nav));
}
