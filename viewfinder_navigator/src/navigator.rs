// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigator façade: one object the host feeds input and frames into.

mod commands;
mod input;

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use kurbo::Size;
use tracing::debug;
use viewfinder_camera::{CameraState, ClampPolicy, screen_to_canvas};
use viewfinder_gesture::{DragSession, PinchGesture};
use viewfinder_sections::{MinimapFrame, MinimapLayout, SectionDescriptor, SectionRegistry};

use crate::config::NavigatorConfig;
use crate::minimap::MinimapSync;
use crate::prefs::ViewPreferences;
use crate::store::{Activity, CameraStore, CameraUpdate, SubscriptionId};

#[derive(Clone, Debug)]
enum Gesture {
    Idle,
    Dragging(DragSession),
    Pinching(PinchGesture),
}

/// Which pointer gesture currently owns the camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// No pointer is down.
    Idle,
    /// A single pointer is dragging.
    Dragging,
    /// Two touch contacts are pinching.
    Pinching,
}

/// One entry of the section navigation controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionControl {
    /// Section id.
    pub id: String,
    /// Visible label.
    pub label: String,
    /// Accessible name, e.g. `"Navigate to About section"`.
    pub accessible_name: String,
    /// Whether this is the active section.
    pub current: bool,
}

/// Snapshot for a debug overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct DebugInfo {
    /// Current camera.
    pub camera: CameraState,
    /// Target of the running transition, or the current camera.
    pub target: CameraState,
    /// What is moving the camera.
    pub activity: Activity,
    /// Which gesture owns the camera.
    pub gesture: GesturePhase,
    /// Id of the active section.
    pub active_section: Option<String>,
    /// Viewport size.
    pub viewport: Size,
    /// Zoom as a rounded percentage.
    pub zoom_percent: u32,
}

/// Pan/zoom navigation over a canvas of named sections.
///
/// The host forwards normalized input (`on_pointer_*`, [`Self::on_wheel`],
/// [`Self::on_key`], [`Self::on_minimap_click`]), calls [`Self::tick`] once per
/// animation frame while it returns `true`, and renders from
/// [`Self::camera`]. All timestamps come from the host clock.
#[derive(Debug)]
pub struct CanvasNavigator {
    store: CameraStore,
    registry: SectionRegistry,
    config: NavigatorConfig,
    gesture: Gesture,
    minimap: Rc<RefCell<MinimapSync>>,
}

impl CanvasNavigator {
    /// Creates a navigator at `config.home`.
    ///
    /// The viewport starts empty; call [`Self::set_viewport_size`] once the
    /// host knows its size.
    #[must_use]
    pub fn new(registry: SectionRegistry, config: NavigatorConfig) -> Self {
        let bounds = registry.content_bounds();
        let mut policy = ClampPolicy::new(Size::ZERO);
        policy.set_limits(config.limits);
        policy.set_mode(config.clamp_mode);
        policy.set_overscroll(config.overscroll);
        policy.set_content_bounds(bounds);

        let mut store = CameraStore::new(policy);
        store.set_easing(config.easing);
        store.set_momentum_config(config.momentum);

        let layout = bounds
            .and_then(|b| MinimapLayout::new(b, config.minimap_size, config.minimap_padding));
        let minimap = Rc::new(RefCell::new(MinimapSync::new(layout)));
        let sink = Rc::clone(&minimap);
        store.subscribe(move |camera| sink.borrow_mut().follow(camera));
        store.set_immediate(CameraUpdate::from(config.home));

        debug!(sections = registry.len(), "navigator created");
        Self {
            store,
            registry,
            config,
            gesture: Gesture::Idle,
            minimap,
        }
    }

    /// Tells the navigator the viewport size in screen pixels.
    ///
    /// Until the size is non‑zero, section navigation is refused.
    pub fn set_viewport_size(&mut self, size: Size) {
        if !(size.width > 0.0 && size.height > 0.0 && size.is_finite()) {
            debug!(width = size.width, height = size.height, "degenerate viewport");
        }
        self.store.set_viewport(size);
        let camera = self.store.state();
        self.minimap.borrow_mut().set_viewport(size, &camera);
    }

    /// Advances transitions and momentum. Returns `true` while the camera is
    /// still moving and another frame should be requested.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.store.tick(now_ms)
    }

    /// The current camera.
    #[must_use]
    pub fn camera(&self) -> CameraState {
        self.store.state()
    }

    /// The camera store.
    #[must_use]
    pub fn store(&self) -> &CameraStore {
        &self.store
    }

    /// The section registry.
    #[must_use]
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// The configuration this navigator was built with.
    #[must_use]
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// The viewport size last given to [`Self::set_viewport_size`].
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.store.policy().viewport()
    }

    /// Section under the viewport centre, or the one whose centre is nearest.
    ///
    /// `None` before the viewport has a size or when there are no sections.
    #[must_use]
    pub fn active_section(&self) -> Option<&SectionDescriptor> {
        self.section_for(&self.store.state())
    }

    /// Navigation controls in registration order.
    #[must_use]
    pub fn section_controls(&self) -> Vec<SectionControl> {
        let active = self.active_section().map(|s| s.id.as_str());
        self.registry
            .iter()
            .map(|s| SectionControl {
                id: s.id.clone(),
                label: s.label.clone(),
                accessible_name: format!("Navigate to {} section", s.label),
                current: active == Some(s.id.as_str()),
            })
            .collect()
    }

    /// The minimap indicator state.
    #[must_use]
    pub fn minimap(&self) -> Ref<'_, MinimapSync> {
        self.minimap.borrow()
    }

    /// Everything needed to draw the minimap, or `None` without content.
    #[must_use]
    pub fn minimap_frame(&self) -> Option<MinimapFrame> {
        let sync = self.minimap.borrow();
        let layout = sync.layout()?;
        let active = self.active_section().map(|s| s.id.as_str());
        Some(layout.frame(&self.registry, &self.store.state(), self.viewport(), active))
    }

    /// Current zoom as a rounded percentage.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "scale is at most a few hundred percent")]
    pub fn zoom_percent(&self) -> u32 {
        (self.store.state().scale * 100.0).round() as u32
    }

    /// Which gesture owns the camera.
    #[must_use]
    pub fn gesture_phase(&self) -> GesturePhase {
        match self.gesture {
            Gesture::Idle => GesturePhase::Idle,
            Gesture::Dragging(_) => GesturePhase::Dragging,
            Gesture::Pinching(_) => GesturePhase::Pinching,
        }
    }

    /// Returns `true` while a single‑pointer drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging(_))
    }

    /// Returns `true` while an eased transition is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.store.activity() == Activity::Animating
    }

    /// Snapshot for a debug overlay.
    #[must_use]
    pub fn debug_info(&self) -> DebugInfo {
        DebugInfo {
            camera: self.store.state(),
            target: self.store.target(),
            activity: self.store.activity(),
            gesture: self.gesture_phase(),
            active_section: self.active_section().map(|s| s.id.clone()),
            viewport: self.viewport(),
            zoom_percent: self.zoom_percent(),
        }
    }

    /// Registers a camera observer. See [`CameraStore::subscribe`].
    pub fn subscribe(&mut self, callback: impl FnMut(&CameraState) + 'static) -> SubscriptionId {
        self.store.subscribe(callback)
    }

    /// Removes a camera observer.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// The current view, for the host to remember.
    #[must_use]
    pub fn view_preferences(&self) -> ViewPreferences {
        ViewPreferences {
            camera: self.store.state(),
            section: self.active_section().map(|s| s.id.clone()),
        }
    }

    /// Restores a remembered view immediately (clamped).
    ///
    /// Ignored while a gesture is active. Returns `true` if the camera moved.
    pub fn restore_view(&mut self, prefs: &ViewPreferences) -> bool {
        if self.gesture_active() {
            return false;
        }
        self.store.set_immediate(CameraUpdate::from(prefs.camera))
    }

    fn gesture_active(&self) -> bool {
        !matches!(self.gesture, Gesture::Idle)
    }

    fn section_for(&self, camera: &CameraState) -> Option<&SectionDescriptor> {
        let policy = self.store.policy();
        if policy.is_viewport_degenerate() {
            return None;
        }
        self.registry
            .nearest_section(screen_to_canvas(policy.viewport_center(), camera))
    }
}
