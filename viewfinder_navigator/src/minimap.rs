// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};
use viewfinder_camera::CameraState;
use viewfinder_sections::MinimapLayout;

/// Minimap viewport indicator, kept current by a camera subscription.
///
/// Every camera write (drag, wheel, momentum, transition frames) moves the
/// indicator, so a host can redraw just the indicator when
/// [`Self::revision`] changes.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimapSync {
    layout: Option<MinimapLayout>,
    viewport: Size,
    viewport_rect: Rect,
    revision: u64,
}

impl MinimapSync {
    pub(crate) fn new(layout: Option<MinimapLayout>) -> Self {
        Self {
            layout,
            viewport: Size::ZERO,
            viewport_rect: Rect::ZERO,
            revision: 0,
        }
    }

    /// The layout, or `None` when there is no content to show.
    #[must_use]
    pub fn layout(&self) -> Option<&MinimapLayout> {
        self.layout.as_ref()
    }

    /// The visible canvas region in minimap space.
    #[must_use]
    pub fn viewport_rect(&self) -> Rect {
        self.viewport_rect
    }

    /// Incremented on every indicator update.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn set_viewport(&mut self, viewport: Size, camera: &CameraState) {
        self.viewport = viewport;
        self.follow(camera);
    }

    pub(crate) fn follow(&mut self, camera: &CameraState) {
        if let Some(layout) = &self.layout {
            self.viewport_rect = layout.viewport_rect(camera, self.viewport);
            self.revision += 1;
        }
    }
}
