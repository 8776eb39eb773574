// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host input routing.
//!
//! Handlers return `true` when they consumed the event, so the host can
//! suppress the platform default (page scroll, text selection). They never
//! return errors; bad input is logged and dropped.

use kurbo::{Point, Vec2};
use tracing::{debug, warn};
use viewfinder_gesture::{
    DragSession, KeyCommand, KeyPress, PinchGesture, PointerKind, PointerSample, WheelAction,
    WheelSample, command_for,
};
use viewfinder_sections::{MinimapHit, compute_target_for_point};

use super::{CanvasNavigator, Gesture};
use crate::store::{CameraUpdate, TransitionToken};

impl CanvasNavigator {
    /// Pointer pressed.
    ///
    /// Any running transition or momentum stops before the drag captures
    /// its start camera. A second touch contact turns the drag into a pinch.
    pub fn on_pointer_down(&mut self, sample: &PointerSample) -> bool {
        if !sample.is_finite() {
            debug!("ignoring non-finite pointer down");
            return false;
        }
        match &self.gesture {
            Gesture::Idle => {
                self.store.cancel_motion();
                self.gesture = Gesture::Dragging(DragSession::begin(sample, self.store.state()));
                debug!(pointer = sample.pointer_id.0, "drag started");
                true
            }
            Gesture::Dragging(drag)
                if sample.kind != PointerKind::Mouse && drag.pointer_id() != sample.pointer_id =>
            {
                let first = (drag.pointer_id(), drag.last_pointer());
                match PinchGesture::begin(first, (sample.pointer_id, sample.position)) {
                    Some(pinch) => {
                        self.gesture = Gesture::Pinching(pinch);
                        debug!("drag became pinch");
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }

    /// Pointer moved.
    pub fn on_pointer_move(&mut self, sample: &PointerSample) -> bool {
        match &mut self.gesture {
            Gesture::Dragging(drag) => {
                if drag.update(sample).is_none() {
                    return false;
                }
                let requested = drag.camera();
                self.store.set_immediate(CameraUpdate::from(requested));
                let actual = self.store.state();
                if actual != requested {
                    // Pinned by the clamp; pulling back should respond at once.
                    drag.rebase(actual);
                }
                true
            }
            Gesture::Pinching(pinch) => {
                let Some(step) = pinch.update(sample) else {
                    return false;
                };
                let camera = self.store.state();
                let panned = camera.with_offset(camera.offset() + step.pan);
                let zoomed = self
                    .store
                    .policy()
                    .zoom_about(panned, step.anchor, step.factor);
                self.store.set_immediate(CameraUpdate::from(zoomed));
                true
            }
            Gesture::Idle => false,
        }
    }

    /// Pointer released. A fast enough drag hands off to momentum; lifting
    /// one pinch contact continues as a drag with the other.
    pub fn on_pointer_up(&mut self, sample: &PointerSample) -> bool {
        match core::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Dragging(mut drag) if drag.pointer_id() == sample.pointer_id => {
                // Measured before the final sample, so a pointer that rested
                // before lifting does not fling.
                let velocity = if sample.is_finite() {
                    drag.release_velocity(sample.time_ms, self.config.release_idle_ms)
                } else {
                    Vec2::ZERO
                };
                if sample.position != drag.last_pointer() && drag.update(sample).is_some() {
                    self.store.set_immediate(CameraUpdate::from(drag.camera()));
                }
                let coasting = self.store.begin_momentum(velocity, sample.time_ms);
                debug!(coasting, "drag ended");
                true
            }
            Gesture::Pinching(pinch) if pinch.contains(sample.pointer_id) => {
                if let Some((pointer_id, position)) = pinch.release(sample.pointer_id) {
                    let rest = PointerSample {
                        pointer_id,
                        position,
                        time_ms: sample.time_ms,
                        kind: sample.kind,
                    };
                    self.gesture = Gesture::Dragging(DragSession::begin(&rest, self.store.state()));
                }
                debug!("pinch ended");
                true
            }
            other => {
                self.gesture = other;
                false
            }
        }
    }

    /// Pointer cancelled by the platform; handled exactly like a release.
    pub fn on_pointer_cancel(&mut self, sample: &PointerSample) -> bool {
        self.on_pointer_up(sample)
    }

    /// Wheel or trackpad scroll: zoom about the cursor or pan, depending on
    /// [`WheelConfig::policy`](viewfinder_gesture::WheelConfig::policy).
    pub fn on_wheel(&mut self, sample: &WheelSample) -> bool {
        if self.gesture_active() {
            return false;
        }
        let Some(action) = self.config.wheel.interpret(sample, self.viewport()) else {
            return false;
        };
        let camera = self.store.state();
        let next = match action {
            WheelAction::Zoom { anchor, factor } => {
                self.store.policy().zoom_about(camera, anchor, factor)
            }
            WheelAction::Pan(delta) => camera.with_offset(camera.offset() + delta),
        };
        self.store.set_immediate(CameraUpdate::from(next));
        true
    }

    /// Keyboard shortcut. Ignored while a pointer gesture is active.
    pub fn on_key(&mut self, press: &KeyPress, now_ms: f64) -> bool {
        if self.gesture_active() {
            return false;
        }
        let Some(command) = command_for(press) else {
            return false;
        };
        match command {
            KeyCommand::Pan { direction, coarse } => {
                let step = if coarse {
                    self.config.pan_step * self.config.coarse_pan_multiplier
                } else {
                    self.config.pan_step
                };
                self.pan_by(direction.offset_delta(step));
            }
            KeyCommand::ZoomIn => {
                self.zoom_in(now_ms);
            }
            KeyCommand::ZoomOut => {
                self.zoom_out(now_ms);
            }
            KeyCommand::Reset => {
                self.reset_view(now_ms);
            }
            KeyCommand::Overview => {
                self.overview(now_ms);
            }
            KeyCommand::JumpTo(index) => {
                self.jump_to_index(index, now_ms);
            }
            KeyCommand::NextSection => {
                self.next_section(now_ms);
            }
            KeyCommand::PreviousSection => {
                self.previous_section(now_ms);
            }
            KeyCommand::Stop => {
                self.stop();
            }
        }
        true
    }

    /// Click at `point` in minimap space.
    ///
    /// A click on a section navigates to it; a click on empty canvas centres
    /// that point at the current scale.
    pub fn on_minimap_click(&mut self, point: Point, now_ms: f64) -> Option<TransitionToken> {
        if self.gesture_active() || !point.is_finite() {
            return None;
        }
        let layout = *self.minimap.borrow().layout()?;
        let canvas = match layout.hit_test(point, &self.registry) {
            MinimapHit::Section(section) => {
                let id = section.id.clone();
                return self.navigate_to_section(&id, now_ms);
            }
            MinimapHit::Canvas(canvas) => canvas,
        };
        let scale = self.store.state().scale;
        match compute_target_for_point(canvas, self.viewport(), scale, self.config.limits) {
            Ok(target) => Some(
                self.store
                    .animate_to(target, self.config.transition_ms, now_ms),
            ),
            Err(err) => {
                warn!(%err, "minimap click ignored");
                None
            }
        }
    }
}
