// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Viewfinder demos.

use kurbo::Rect;
use viewfinder_navigator::CanvasNavigator;
use viewfinder_sections::{SectionDescriptor, SectionRegistry};

/// Frame length of the simulated 60 Hz display.
pub const FRAME_MS: f64 = 1000.0 / 60.0;

/// Installs a `fmt` subscriber; `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,viewfinder_navigator=debug".into()),
        )
        .init();
}

/// Six panels in a 3x2 grid, like a photography portfolio.
pub fn portfolio() -> SectionRegistry {
    let names = ["Capture", "Focus", "Frame", "Exposure", "Develop", "Portfolio"];
    let sections = names.iter().enumerate().map(|(i, name)| {
        let col = (i % 3) as f64;
        let row = (i / 3) as f64;
        SectionDescriptor::new(
            name.to_lowercase(),
            *name,
            Rect::from_origin_size((col * 1100.0, row * 800.0), (1000.0, 700.0)),
        )
    });
    match SectionRegistry::new(sections) {
        Ok(registry) => registry,
        Err(err) => panic!("demo layout is invalid: {err}"),
    }
}

/// A manually stepped clock standing in for animation frames.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualClock {
    now_ms: f64,
}

impl ManualClock {
    /// Current time.
    pub fn now(&self) -> f64 {
        self.now_ms
    }

    /// Moves time forward.
    pub fn advance(&mut self, ms: f64) -> f64 {
        self.now_ms += ms;
        self.now_ms
    }

    /// Ticks `nav` frame by frame until it stops moving. Returns the number
    /// of frames rendered.
    pub fn settle(&mut self, nav: &mut CanvasNavigator) -> u32 {
        let mut frames = 0;
        while nav.tick(self.now_ms) {
            self.advance(FRAME_MS);
            frames += 1;
        }
        frames
    }
}

/// One line describing the camera and the active section.
pub fn describe(nav: &CanvasNavigator) -> String {
    let cam = nav.camera();
    let active = nav.active_section().map_or("-", |s| s.label.as_str());
    format!(
        "x={:>9.2} y={:>9.2} zoom={:>3}%  active={active}",
        cam.x,
        cam.y,
        nav.zoom_percent()
    )
}
