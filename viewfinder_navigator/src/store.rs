// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The camera store: the single owner of the live [`CameraState`].
//!
//! Every writer goes through the store. Immediate writes (drag, wheel, pinch,
//! arrow keys) call [`CameraStore::set_immediate`]; multi‑frame motion
//! (eased transitions, post‑drag momentum) lives in one motion slot that
//! [`CameraStore::tick`] advances once per frame. There is exactly one slot,
//! so two motions can never write in the same frame, and an immediate write
//! empties it first.
//!
//! ## State machine
//!
//! ```text
//!            animate_to                 tick (complete)
//!   Idle ───────────────▶ Animating ───────────────────▶ Idle
//!    ▲  ▲                  │    ▲ animate_to (supersede)
//!    │  │ cancel /          └────┘
//!    │  │ set_immediate
//!    │  └───────────────── Coasting ◀── begin_momentum
//!    └──── tick (settled) ───┘
//! ```

use std::fmt;

use kurbo::{Rect, Size, Vec2};
use tracing::{debug, trace};
use viewfinder_camera::{CameraState, ClampMode, ClampPolicy, ScaleLimits};
use viewfinder_motion::{Easing, Momentum, MomentumConfig, TransitionState};

/// Partial camera write for [`CameraStore::set_immediate`].
///
/// Components left as `None` keep their current value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraUpdate {
    /// New horizontal offset.
    pub x: Option<f64>,
    /// New vertical offset.
    pub y: Option<f64>,
    /// New scale.
    pub scale: Option<f64>,
}

impl CameraUpdate {
    /// Updates only the offset.
    #[must_use]
    pub fn offset(offset: Vec2) -> Self {
        Self {
            x: Some(offset.x),
            y: Some(offset.y),
            scale: None,
        }
    }

    /// Updates only the scale.
    #[must_use]
    pub fn scale(scale: f64) -> Self {
        Self {
            scale: Some(scale),
            ..Self::default()
        }
    }

    /// Returns `true` if every present component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.x, self.y, self.scale]
            .into_iter()
            .flatten()
            .all(f64::is_finite)
    }

    fn apply_to(self, camera: CameraState) -> CameraState {
        CameraState::new(
            self.x.unwrap_or(camera.x),
            self.y.unwrap_or(camera.y),
            self.scale.unwrap_or(camera.scale),
        )
    }
}

impl From<CameraState> for CameraUpdate {
    fn from(camera: CameraState) -> Self {
        Self {
            x: Some(camera.x),
            y: Some(camera.y),
            scale: Some(camera.scale),
        }
    }
}

/// Identifies one transition started by [`CameraStore::animate_to`].
///
/// Tokens are never reused. Once the transition completes, is superseded, or
/// is cancelled, its token is stale and [`CameraStore::cancel`] ignores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransitionToken(u64);

/// Handle returned by [`CameraStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// What, if anything, is moving the camera between frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activity {
    /// Nothing; the camera only changes on input.
    Idle,
    /// An eased transition is running.
    Animating,
    /// Post‑drag momentum is running.
    Coasting,
}

/// Callback run after a transition lands on its target.
pub type CompletionCallback = Box<dyn FnOnce(&mut CameraStore)>;

type Subscriber = Box<dyn FnMut(&CameraState)>;

struct ActiveTransition {
    state: TransitionState,
    token: TransitionToken,
    on_complete: Option<CompletionCallback>,
}

enum Motion {
    Idle,
    Animating(ActiveTransition),
    Coasting(Momentum),
}

/// Owns the camera, its clamp policy, and whatever motion is driving it.
pub struct CameraStore {
    current: CameraState,
    policy: ClampPolicy,
    easing: Easing,
    momentum_config: MomentumConfig,
    motion: Motion,
    generation: u64,
    next_subscription: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl fmt::Debug for CameraStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraStore")
            .field("current", &self.current)
            .field("policy", &self.policy)
            .field("activity", &self.activity())
            .field("transition", &self.transition())
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl Default for CameraStore {
    fn default() -> Self {
        Self::new(ClampPolicy::default())
    }
}

impl CameraStore {
    /// Creates a store at the identity camera (clamped by `policy`).
    #[must_use]
    pub fn new(policy: ClampPolicy) -> Self {
        Self {
            current: policy.clamp(CameraState::IDENTITY),
            policy,
            easing: Easing::default(),
            momentum_config: MomentumConfig::default(),
            motion: Motion::Idle,
            generation: 0,
            next_subscription: 0,
            subscribers: Vec::new(),
        }
    }

    /// The current camera.
    #[must_use]
    pub fn state(&self) -> CameraState {
        self.current
    }

    /// Where the camera is headed: the in‑flight transition's target, or the
    /// current camera when nothing is animating.
    #[must_use]
    pub fn target(&self) -> CameraState {
        match &self.motion {
            Motion::Animating(active) => active.state.to,
            _ => self.current,
        }
    }

    /// The clamp policy every write goes through.
    #[must_use]
    pub fn policy(&self) -> &ClampPolicy {
        &self.policy
    }

    /// Easing used for new transitions.
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Sets the easing used for new transitions.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Momentum tuning used by [`Self::begin_momentum`].
    #[must_use]
    pub fn momentum_config(&self) -> MomentumConfig {
        self.momentum_config
    }

    /// Sets the momentum tuning used by later flings.
    pub fn set_momentum_config(&mut self, config: MomentumConfig) {
        self.momentum_config = config;
    }

    /// What is currently moving the camera.
    #[must_use]
    pub fn activity(&self) -> Activity {
        match self.motion {
            Motion::Idle => Activity::Idle,
            Motion::Animating(_) => Activity::Animating,
            Motion::Coasting(_) => Activity::Coasting,
        }
    }

    /// The in‑flight transition, if any.
    #[must_use]
    pub fn transition(&self) -> Option<&TransitionState> {
        match &self.motion {
            Motion::Animating(active) => Some(&active.state),
            _ => None,
        }
    }

    /// Applies `update` right away, clamped.
    ///
    /// Any running transition or momentum is cancelled first. Updates with a
    /// non‑finite component are ignored. Returns `true` if the camera changed.
    pub fn set_immediate(&mut self, update: CameraUpdate) -> bool {
        if !update.is_finite() {
            debug!(?update, "ignoring non-finite camera update");
            return false;
        }
        self.cancel_motion();
        let next = self.policy.clamp(update.apply_to(self.current));
        self.write(next)
    }

    /// Starts an eased transition to `target` (clamped).
    ///
    /// If a transition is already running, it is sampled at `now_ms` and the
    /// new one starts from that sample, so the camera never snaps. Momentum
    /// is stopped. The new transition is first advanced by the next
    /// [`Self::tick`].
    pub fn animate_to(
        &mut self,
        target: CameraState,
        duration_ms: f64,
        now_ms: f64,
    ) -> TransitionToken {
        self.start_transition(target, duration_ms, now_ms, None)
    }

    /// Like [`Self::animate_to`], running `on_complete` once the camera has
    /// landed on the target.
    ///
    /// The callback does not run if the transition is cancelled or superseded.
    pub fn animate_to_then(
        &mut self,
        target: CameraState,
        duration_ms: f64,
        now_ms: f64,
        on_complete: impl FnOnce(&mut Self) + 'static,
    ) -> TransitionToken {
        self.start_transition(target, duration_ms, now_ms, Some(Box::new(on_complete)))
    }

    /// Cancels the transition identified by `token`, leaving the camera where
    /// it is. Stale tokens are ignored. Returns `true` if something stopped.
    pub fn cancel(&mut self, token: TransitionToken) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.motion = Motion::Idle;
        debug!(token = token.0, "transition cancelled");
        true
    }

    /// Stops any transition or momentum. Returns `true` if something stopped.
    pub fn cancel_motion(&mut self) -> bool {
        match core::mem::replace(&mut self.motion, Motion::Idle) {
            Motion::Idle => false,
            Motion::Animating(active) => {
                debug!(token = active.token.0, "transition interrupted");
                true
            }
            Motion::Coasting(_) => {
                debug!("momentum interrupted");
                true
            }
        }
    }

    /// Returns `true` if `token` names the running transition.
    #[must_use]
    pub fn is_current(&self, token: TransitionToken) -> bool {
        matches!(&self.motion, Motion::Animating(active) if active.token == token)
    }

    /// Hands a release velocity (screen px/ms) to momentum.
    ///
    /// Returns `false` if the velocity was too slow to fling; the camera is
    /// then idle.
    pub fn begin_momentum(&mut self, velocity: Vec2, now_ms: f64) -> bool {
        self.cancel_motion();
        match Momentum::launch(velocity, now_ms, self.momentum_config) {
            Some(momentum) => {
                debug!(vx = momentum.velocity().x, vy = momentum.velocity().y, "fling");
                self.motion = Motion::Coasting(momentum);
                true
            }
            None => false,
        }
    }

    /// Advances the running motion to `now_ms`.
    ///
    /// Returns `true` while something is still moving, i.e. the host should
    /// request another frame. A non‑finite `now_ms` advances nothing.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if !now_ms.is_finite() {
            debug!(now_ms, "ignoring non-finite frame time");
            return !matches!(self.motion, Motion::Idle);
        }
        match core::mem::replace(&mut self.motion, Motion::Idle) {
            Motion::Idle => false,
            Motion::Animating(mut active) => {
                if active.state.is_complete(now_ms) {
                    self.write(active.state.to);
                    debug!(token = active.token.0, "transition complete");
                    if let Some(on_complete) = active.on_complete.take() {
                        on_complete(self);
                    }
                    // Anything the callback started waits for the next tick.
                    !matches!(self.motion, Motion::Idle)
                } else {
                    let sample = self.policy.clamp(active.state.sample(now_ms));
                    trace!(x = sample.x, y = sample.y, scale = sample.scale, "transition frame");
                    self.write(sample);
                    self.motion = Motion::Animating(active);
                    true
                }
            }
            Motion::Coasting(mut momentum) => {
                let displacement = momentum.step(now_ms);
                let requested = self.current.with_offset(self.current.offset() + displacement);
                let clamped = self.policy.clamp(requested);
                momentum.halt_axes(clamped.x != requested.x, clamped.y != requested.y);
                trace!(dx = displacement.x, dy = displacement.y, "momentum frame");
                self.write(clamped);
                if momentum.is_finished() {
                    debug!(elapsed_ms = momentum.elapsed_ms(), "momentum settled");
                    false
                } else {
                    self.motion = Motion::Coasting(momentum);
                    true
                }
            }
        }
    }

    /// Registers `callback`, called with the new camera after every change.
    pub fn subscribe(&mut self, callback: impl FnMut(&CameraState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Resizes the viewport and re‑clamps.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.policy.set_viewport(viewport);
        self.reclamp();
    }

    /// Replaces the content bounds and re‑clamps.
    pub fn set_content_bounds(&mut self, bounds: Option<Rect>) {
        self.policy.set_content_bounds(bounds);
        self.reclamp();
    }

    /// Replaces the scale limits and re‑clamps.
    pub fn set_scale_limits(&mut self, limits: ScaleLimits) {
        self.policy.set_limits(limits);
        self.reclamp();
    }

    /// Sets the overscroll fraction and re‑clamps.
    pub fn set_overscroll(&mut self, overscroll: f64) {
        self.policy.set_overscroll(overscroll);
        self.reclamp();
    }

    /// Switches pan clamping on or off and re‑clamps.
    pub fn set_clamp_mode(&mut self, mode: ClampMode) {
        self.policy.set_mode(mode);
        self.reclamp();
    }

    fn start_transition(
        &mut self,
        target: CameraState,
        duration_ms: f64,
        now_ms: f64,
        on_complete: Option<CompletionCallback>,
    ) -> TransitionToken {
        match core::mem::replace(&mut self.motion, Motion::Idle) {
            Motion::Animating(previous) => {
                // Without a usable time the previous frame's camera is the sample.
                if now_ms.is_finite() {
                    let sample = self.policy.clamp(previous.state.sample(now_ms));
                    self.write(sample);
                }
                debug!(token = previous.token.0, "transition superseded");
            }
            Motion::Coasting(_) => debug!("momentum interrupted by transition"),
            Motion::Idle => {}
        }
        self.generation += 1;
        let token = TransitionToken(self.generation);
        let to = self.policy.clamp(target);
        let (now_ms, duration_ms) = if now_ms.is_finite() {
            (now_ms, duration_ms)
        } else {
            debug!(now_ms, "non-finite start time, landing on the next tick");
            (0.0, 0.0)
        };
        let state =
            TransitionState::new(self.current, to, now_ms, duration_ms).with_easing(self.easing);
        debug!(
            token = token.0,
            x = to.x,
            y = to.y,
            scale = to.scale,
            duration_ms,
            "transition started"
        );
        self.motion = Motion::Animating(ActiveTransition {
            state,
            token,
            on_complete,
        });
        token
    }

    fn reclamp(&mut self) {
        if let Motion::Animating(active) = &mut self.motion {
            active.state.to = self.policy.clamp(active.state.to);
        }
        let clamped = self.policy.clamp(self.current);
        self.write(clamped);
    }

    fn write(&mut self, next: CameraState) -> bool {
        if next == self.current {
            return false;
        }
        self.current = next;
        let current = self.current;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&current);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use kurbo::{Rect, Size, Vec2};
    use viewfinder_camera::{CameraState, ClampPolicy};

    use super::*;

    const FRAME: f64 = 1000.0 / 60.0;

    fn store() -> CameraStore {
        let mut policy = ClampPolicy::new(Size::new(800.0, 600.0));
        policy.set_content_bounds(Some(Rect::new(0.0, 0.0, 1800.0, 600.0)));
        CameraStore::new(policy)
    }

    fn approx(a: CameraState, b: CameraState) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9 && (a.scale - b.scale).abs() < 1e-12
    }

    #[test]
    fn set_immediate_notifies_only_on_change() {
        let mut s = store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        s.subscribe(move |cam| sink.borrow_mut().push(*cam));
        assert!(s.set_immediate(CameraUpdate::offset(Vec2::new(-100.0, 0.0))));
        assert!(!s.set_immediate(CameraUpdate::offset(Vec2::new(-100.0, 0.0))));
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0].x, -100.0);
    }

    #[test]
    fn non_finite_updates_are_ignored() {
        let mut s = store();
        let before = s.state();
        assert!(!s.set_immediate(CameraUpdate {
            x: Some(f64::NAN),
            y: Some(10.0),
            scale: None,
        }));
        assert!(!s.set_immediate(CameraUpdate::scale(f64::INFINITY)));
        assert_eq!(s.state(), before);
    }

    #[test]
    fn set_immediate_clamps_scale() {
        let mut s = store();
        s.set_immediate(CameraUpdate::scale(10.0));
        assert_eq!(s.state().scale, 3.0);
        s.set_immediate(CameraUpdate::scale(0.01));
        assert_eq!(s.state().scale, 0.2);
    }

    #[test]
    fn transition_lands_exactly_and_goes_idle() {
        let mut s = store();
        let target = CameraState::new(-860.0, 30.0, 0.9);
        s.animate_to(target, 600.0, 0.0);
        assert_eq!(s.activity(), Activity::Animating);
        let mut t = 0.0;
        while s.tick(t) {
            t += FRAME;
            assert!(t < 2000.0);
        }
        assert_eq!(s.state(), target);
        assert_eq!(s.activity(), Activity::Idle);
    }

    #[test]
    fn superseding_continues_from_the_current_sample() {
        let mut s = store();
        s.animate_to(CameraState::new(-800.0, 0.0, 1.0), 600.0, 0.0);
        s.tick(200.0);
        let mid = s.state();
        let expected = s.transition().map(|t| t.sample(300.0));
        s.animate_to(CameraState::new(0.0, 0.0, 1.5), 600.0, 300.0);
        // No snap: the camera is where the old transition had it at 300 ms.
        assert_eq!(Some(s.state()), expected);
        assert!(s.state().x < mid.x);
        assert_eq!(s.transition().map(|t| t.from), Some(s.state()));
    }

    #[test]
    fn stale_tokens_are_inert() {
        let mut s = store();
        let first = s.animate_to(CameraState::new(-100.0, 0.0, 1.0), 600.0, 0.0);
        let second = s.animate_to(CameraState::new(-200.0, 0.0, 1.0), 600.0, 0.0);
        assert!(!s.cancel(first));
        assert!(s.is_current(second));
        assert!(s.cancel(second));
        assert!(!s.cancel(second));
        assert_eq!(s.activity(), Activity::Idle);
    }

    #[test]
    fn zero_duration_resolves_in_one_tick() {
        let mut s = store();
        let target = CameraState::new(-50.0, -20.0, 1.2);
        s.animate_to(target, 0.0, 0.0);
        assert!(!s.tick(0.0));
        assert_eq!(s.state(), target);
        assert!(s.state().is_valid());
    }

    #[test]
    fn non_finite_frame_time_leaves_the_transition_in_place() {
        let mut s = store();
        s.animate_to(CameraState::new(-800.0, 0.0, 1.0), 600.0, 0.0);
        s.tick(300.0);
        let mid = s.state();
        assert!(mid.x < 0.0);
        assert!(s.tick(f64::NAN));
        assert!(s.tick(f64::INFINITY));
        assert_eq!(s.state(), mid);
        assert_eq!(s.activity(), Activity::Animating);
        s.tick(600.0);
        assert_eq!(s.state(), CameraState::new(-800.0, 0.0, 1.0));
    }

    #[test]
    fn non_finite_start_time_lands_on_the_next_tick() {
        let mut s = store();
        let target = CameraState::new(-200.0, 10.0, 1.5);
        s.animate_to(target, 600.0, f64::NAN);
        assert!(!s.tick(16.0));
        assert_eq!(s.state(), target);
        assert_eq!(s.activity(), Activity::Idle);
    }

    #[test]
    fn non_finite_supersede_time_does_not_snap_back() {
        let mut s = store();
        s.animate_to(CameraState::new(-800.0, 0.0, 1.0), 600.0, 0.0);
        s.tick(300.0);
        let mid = s.state();
        s.animate_to(CameraState::new(0.0, 0.0, 1.0), 600.0, f64::NAN);
        assert_eq!(s.state(), mid);
        assert_eq!(s.transition().map(|t| t.from), Some(mid));
    }

    #[test]
    fn callback_transition_waits_for_next_tick() {
        let mut s = store();
        let first = CameraState::new(-100.0, 0.0, 1.0);
        let second = CameraState::new(-400.0, 0.0, 1.0);
        s.animate_to_then(first, 100.0, 0.0, move |store| {
            store.animate_to(second, 100.0, 100.0);
        });
        assert!(s.tick(100.0));
        // The follow‑up exists but has not moved the camera in this frame.
        assert_eq!(s.state(), first);
        assert_eq!(s.target(), second);
        s.tick(150.0);
        assert!(s.state().x < first.x);
        s.tick(200.0);
        assert_eq!(s.state(), second);
    }

    #[test]
    fn cancelled_transition_skips_its_callback() {
        let mut s = store();
        let fired = Rc::new(RefCell::new(false));
        let flag = fired.clone();
        let token = s.animate_to_then(CameraState::new(-100.0, 0.0, 1.0), 100.0, 0.0, move |_| {
            *flag.borrow_mut() = true;
        });
        s.tick(50.0);
        s.cancel(token);
        s.tick(200.0);
        assert!(!*fired.borrow());
    }

    #[test]
    fn set_immediate_interrupts_motion() {
        let mut s = store();
        s.animate_to(CameraState::new(-500.0, 0.0, 1.0), 600.0, 0.0);
        s.tick(100.0);
        s.set_immediate(CameraUpdate::offset(Vec2::new(-10.0, 0.0)));
        assert_eq!(s.activity(), Activity::Idle);
        assert!(!s.tick(200.0));
        assert_eq!(s.state().x, -10.0);
    }

    #[test]
    fn momentum_halts_at_the_pan_limit() {
        let mut s = store();
        // Flinging right pushes the offset towards its upper limit of 400.
        assert!(s.begin_momentum(Vec2::new(3.0, 0.0), 0.0));
        let mut t = 0.0;
        let mut frames = 0;
        while s.tick(t + FRAME) {
            t += FRAME;
            frames += 1;
            assert!(frames <= 120);
        }
        assert!(s.state().x <= 400.0);
        assert!(approx(s.policy().clamp(s.state()), s.state()));
    }

    #[test]
    fn slow_release_does_not_coast() {
        let mut s = store();
        assert!(!s.begin_momentum(Vec2::new(0.01, 0.0), 0.0));
        assert_eq!(s.activity(), Activity::Idle);
    }

    #[test]
    fn viewport_change_reclamps_state_and_target() {
        let mut s = store();
        s.set_immediate(CameraUpdate::offset(Vec2::new(400.0, 0.0)));
        s.animate_to(CameraState::new(400.0, 0.0, 1.0), 600.0, 0.0);
        s.set_viewport(Size::new(200.0, 600.0));
        // Margin is now 100 px.
        assert_eq!(s.state().x, 100.0);
        assert_eq!(s.target().x, 100.0);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut s = store();
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        let id = s.subscribe(move |_| *c.borrow_mut() += 1);
        s.set_immediate(CameraUpdate::offset(Vec2::new(-1.0, 0.0)));
        assert!(s.unsubscribe(id));
        assert!(!s.unsubscribe(id));
        s.set_immediate(CameraUpdate::offset(Vec2::new(-2.0, 0.0)));
        assert_eq!(*count.borrow(), 1);
    }
}
