// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: pan offsets and release velocity from pointer samples.
//!
//! ## Usage
//!
//! 1) On pointer‑down, start a session with [`DragSession::begin`], passing the
//!    camera as it was when the drag started.
//! 2) On each move, call [`DragSession::update`]; it returns the delta since
//!    the previous sample and refreshes the velocity estimate.
//! 3) Use [`DragSession::camera`] for the camera the drag asks for.
//! 4) On pointer‑up or pointer‑cancel, read [`DragSession::release_velocity`]
//!    and drop the session.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use viewfinder_camera::CameraState;
//! use viewfinder_gesture::{DragSession, PointerSample};
//!
//! let down = PointerSample::mouse(Point::new(10.0, 20.0), 0.0);
//! let mut drag = DragSession::begin(&down, CameraState::IDENTITY);
//!
//! let delta = drag.update(&PointerSample::mouse(Point::new(15.0, 25.0), 16.0)).unwrap();
//! assert_eq!(delta.x, 5.0);
//! assert_eq!(drag.camera().x, 5.0);
//! assert_eq!(drag.total_offset().y, 5.0);
//! ```

use kurbo::{Point, Vec2};
use smallvec::SmallVec;
use viewfinder_camera::CameraState;

use crate::event::{PointerId, PointerSample};

/// Number of recent samples kept for velocity estimation.
pub const VELOCITY_WINDOW: usize = 5;

/// Weight of the newest sample in the velocity moving average.
const VELOCITY_SMOOTHING: f64 = 0.6;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    position: Point,
    time_ms: f64,
}

/// State captured between pointer‑down and pointer‑up for one drag.
#[derive(Clone, Debug)]
pub struct DragSession {
    pointer_id: PointerId,
    start_pointer: Point,
    start_camera: CameraState,
    last_pointer: Point,
    last_ms: f64,
    velocity: Vec2,
    samples: SmallVec<[Sample; VELOCITY_WINDOW]>,
}

impl DragSession {
    /// Starts tracking a drag from `sample` with the camera at `start_camera`.
    #[must_use]
    pub fn begin(sample: &PointerSample, start_camera: CameraState) -> Self {
        let mut samples = SmallVec::new();
        samples.push(Sample {
            position: sample.position,
            time_ms: sample.time_ms,
        });
        Self {
            pointer_id: sample.pointer_id,
            start_pointer: sample.position,
            start_camera,
            last_pointer: sample.position,
            last_ms: sample.time_ms,
            velocity: Vec2::ZERO,
            samples,
        }
    }

    /// Pointer that owns this drag.
    #[must_use]
    pub fn pointer_id(&self) -> PointerId {
        self.pointer_id
    }

    /// Screen position where the drag started.
    #[must_use]
    pub fn start_pointer(&self) -> Point {
        self.start_pointer
    }

    /// Camera at the start of the drag.
    #[must_use]
    pub fn start_camera(&self) -> CameraState {
        self.start_camera
    }

    /// Most recent pointer position.
    #[must_use]
    pub fn last_pointer(&self) -> Point {
        self.last_pointer
    }

    /// Timestamp of the most recent sample.
    #[must_use]
    pub fn last_ms(&self) -> f64 {
        self.last_ms
    }

    /// Feeds a move sample and returns the delta since the previous one.
    ///
    /// Samples for other pointers, or with non‑finite coordinates, are ignored
    /// and return `None`.
    pub fn update(&mut self, sample: &PointerSample) -> Option<Vec2> {
        if sample.pointer_id != self.pointer_id || !sample.is_finite() {
            return None;
        }
        let delta = sample.position - self.last_pointer;
        self.last_pointer = sample.position;
        self.last_ms = self.last_ms.max(sample.time_ms);
        self.push_sample(Sample {
            position: sample.position,
            time_ms: sample.time_ms,
        });
        Some(delta)
    }

    /// Offset from the drag start to the latest sample, in screen pixels.
    #[must_use]
    pub fn total_offset(&self) -> Vec2 {
        self.last_pointer - self.start_pointer
    }

    /// [`Self::total_offset`] expressed in canvas units at the start scale.
    #[must_use]
    pub fn canvas_delta(&self) -> Vec2 {
        let scale = self.start_camera.scale;
        if scale > 0.0 {
            self.total_offset() / scale
        } else {
            Vec2::ZERO
        }
    }

    /// Camera requested by the drag: the start camera shifted by the total
    /// pointer offset. The caller clamps it.
    #[must_use]
    pub fn camera(&self) -> CameraState {
        let offset = self.start_camera.offset() + self.total_offset();
        self.start_camera.with_offset(offset)
    }

    /// Re‑bases the drag on a new camera and the latest pointer, for example
    /// after a clamp pinned the camera at an edge.
    pub fn rebase(&mut self, camera: CameraState) {
        self.start_camera = camera;
        self.start_pointer = self.last_pointer;
    }

    /// Smoothed velocity in pixels per millisecond.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Velocity to hand to momentum on release.
    ///
    /// Returns zero if the pointer rested for longer than `idle_ms` before
    /// `now_ms`, so a drag that stopped before release does not fling.
    #[must_use]
    pub fn release_velocity(&self, now_ms: f64, idle_ms: f64) -> Vec2 {
        if now_ms - self.last_ms > idle_ms {
            Vec2::ZERO
        } else {
            self.velocity
        }
    }

    fn push_sample(&mut self, sample: Sample) {
        if self.samples.len() == VELOCITY_WINDOW {
            self.samples.remove(0);
        }
        self.samples.push(sample);
        self.velocity = estimate_velocity(&self.samples);
    }
}

/// Exponential moving average of the per‑pair velocities in `samples`.
fn estimate_velocity(samples: &[Sample]) -> Vec2 {
    let mut velocity: Option<Vec2> = None;
    for pair in samples.windows(2) {
        let dt = pair[1].time_ms - pair[0].time_ms;
        if dt <= 0.0 {
            // Coalesced events share a timestamp; they carry no timing info.
            continue;
        }
        let inst = (pair[1].position - pair[0].position) / dt;
        velocity = Some(match velocity {
            None => inst,
            Some(v) => v * (1.0 - VELOCITY_SMOOTHING) + inst * VELOCITY_SMOOTHING,
        });
    }
    velocity.unwrap_or(Vec2::ZERO)
}
