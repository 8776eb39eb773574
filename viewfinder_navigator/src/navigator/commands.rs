// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete navigation: section jumps, zoom steps, reset and overview.
//!
//! Every command here animates through [`CameraStore::animate_to`], and
//! every command is refused while a pointer gesture owns the camera.
//!
//! [`CameraStore::animate_to`]: crate::CameraStore::animate_to

use kurbo::Vec2;
use tracing::{debug, warn};

use super::CanvasNavigator;
use crate::error::NavError;
use crate::store::{CameraUpdate, TransitionToken};

impl CanvasNavigator {
    /// Animates to fit and centre the section `id`.
    pub fn try_navigate_to_section(
        &mut self,
        id: &str,
        now_ms: f64,
    ) -> Result<TransitionToken, NavError> {
        self.ensure_idle()?;
        let target = self.registry.compute_target_for_section(
            id,
            self.viewport(),
            &self.config.fit_options(),
        )?;
        debug!(section = id, "navigating to section");
        Ok(self
            .store
            .animate_to(target, self.config.transition_ms, now_ms))
    }

    /// Like [`Self::try_navigate_to_section`], logging failures instead of
    /// returning them. Unknown ids leave the camera untouched.
    pub fn navigate_to_section(&mut self, id: &str, now_ms: f64) -> Option<TransitionToken> {
        let result = self.try_navigate_to_section(id, now_ms);
        report("navigate to section", result)
    }

    /// Navigates to the section at `index` in registration order.
    pub fn jump_to_index(&mut self, index: usize, now_ms: f64) -> Option<TransitionToken> {
        let Some(section) = self.registry.by_index(index) else {
            debug!(index, "no section at index");
            return None;
        };
        let id = section.id.clone();
        self.navigate_to_section(&id, now_ms)
    }

    /// Navigates to the section after the one being viewed (or headed to),
    /// wrapping at the end.
    pub fn next_section(&mut self, now_ms: f64) -> Option<TransitionToken> {
        self.step_section(true, now_ms)
    }

    /// Navigates to the section before the one being viewed (or headed to),
    /// wrapping at the start.
    pub fn previous_section(&mut self, now_ms: f64) -> Option<TransitionToken> {
        self.step_section(false, now_ms)
    }

    /// Animates to fit every section into view.
    pub fn overview(&mut self, now_ms: f64) -> Option<TransitionToken> {
        let result = self.try_overview(now_ms);
        report("overview", result)
    }

    /// Fallible form of [`Self::overview`].
    pub fn try_overview(&mut self, now_ms: f64) -> Result<TransitionToken, NavError> {
        self.ensure_idle()?;
        if self.registry.is_empty() {
            return Err(NavError::NoSections);
        }
        let target = self
            .registry
            .compute_overview_target(self.viewport(), &self.config.fit_options())?;
        Ok(self
            .store
            .animate_to(target, self.config.transition_ms, now_ms))
    }

    /// Animates back to the configured home camera.
    pub fn reset_view(&mut self, now_ms: f64) -> Option<TransitionToken> {
        if self.gesture_active() {
            return None;
        }
        Some(
            self.store
                .animate_to(self.config.home, self.config.transition_ms, now_ms),
        )
    }

    /// Zooms in one step about the viewport centre.
    pub fn zoom_in(&mut self, now_ms: f64) -> Option<TransitionToken> {
        self.zoom_by(self.config.zoom_step, now_ms)
    }

    /// Zooms out one step about the viewport centre.
    pub fn zoom_out(&mut self, now_ms: f64) -> Option<TransitionToken> {
        self.zoom_by(self.config.zoom_step.recip(), now_ms)
    }

    /// Animates the scale by `factor` about the viewport centre.
    ///
    /// Steps compound on the in‑flight target rather than the current frame,
    /// so rapid presses accumulate. Returns `None` when already at the limit.
    pub fn zoom_by(&mut self, factor: f64, now_ms: f64) -> Option<TransitionToken> {
        if self.gesture_active() {
            return None;
        }
        let base = self.store.target();
        let policy = self.store.policy();
        let target = policy.zoom_about(base, policy.viewport_center(), factor);
        if target.scale == base.scale {
            return None;
        }
        Some(
            self.store
                .animate_to(target, self.config.zoom_transition_ms, now_ms),
        )
    }

    /// Pans immediately by `delta` screen pixels (clamped).
    ///
    /// Returns `true` if the camera moved.
    pub fn pan_by(&mut self, delta: Vec2) -> bool {
        if self.gesture_active() {
            return false;
        }
        let camera = self.store.state();
        self.store
            .set_immediate(CameraUpdate::offset(camera.offset() + delta))
    }

    /// Stops any transition or momentum where it is.
    pub fn stop(&mut self) -> bool {
        self.store.cancel_motion()
    }

    fn step_section(&mut self, forward: bool, now_ms: f64) -> Option<TransitionToken> {
        let len = self.registry.len();
        if len == 0 {
            warn!("no sections to step through");
            return None;
        }
        let heading = self.store.target();
        let next = match self
            .section_for(&heading)
            .and_then(|s| self.registry.index_of(&s.id))
        {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.jump_to_index(next, now_ms)
    }

    fn ensure_idle(&self) -> Result<(), NavError> {
        if self.gesture_active() {
            Err(NavError::GestureActive)
        } else {
            Ok(())
        }
    }
}

fn report(command: &str, result: Result<TransitionToken, NavError>) -> Option<TransitionToken> {
    match result {
        Ok(token) => Some(token),
        Err(NavError::GestureActive) => {
            debug!(command, "ignored during a gesture");
            None
        }
        Err(err) => {
            warn!(command, %err, "navigation failed");
            None
        }
    }
}
