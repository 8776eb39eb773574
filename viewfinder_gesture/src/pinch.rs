// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two‑contact pinch tracking.

use kurbo::{Point, Vec2};

use crate::event::{PointerId, PointerSample};

/// Contacts closer than this are treated as coincident; no zoom is derived.
const MIN_PINCH_DISTANCE: f64 = 1.0;

/// Camera change requested by one pinch update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchStep {
    /// Screen‑space anchor for the zoom (the current midpoint).
    pub anchor: Point,
    /// Scale multiplier: current distance over previous distance.
    pub factor: f64,
    /// Movement of the midpoint since the previous update.
    pub pan: Vec2,
}

/// Tracks a pinch between exactly two pointers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchGesture {
    contacts: [(PointerId, Point); 2],
}

impl PinchGesture {
    /// Starts a pinch from two contacts.
    ///
    /// Returns `None` if both samples belong to the same pointer.
    #[must_use]
    pub fn begin(a: (PointerId, Point), b: (PointerId, Point)) -> Option<Self> {
        if a.0 == b.0 {
            return None;
        }
        Some(Self { contacts: [a, b] })
    }

    /// Returns `true` if `id` is one of the two contacts.
    #[must_use]
    pub fn contains(&self, id: PointerId) -> bool {
        self.contacts.iter().any(|(c, _)| *c == id)
    }

    /// Midpoint between the two contacts.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.contacts[0].1.midpoint(self.contacts[1].1)
    }

    /// Distance between the two contacts.
    #[must_use]
    pub fn distance(&self) -> f64 {
        (self.contacts[1].1 - self.contacts[0].1).hypot()
    }

    /// Feeds a move for one of the contacts.
    ///
    /// Returns `None` for unrelated pointers or non‑finite samples.
    pub fn update(&mut self, sample: &PointerSample) -> Option<PinchStep> {
        if !sample.is_finite() {
            return None;
        }
        let slot = self
            .contacts
            .iter()
            .position(|(id, _)| *id == sample.pointer_id)?;
        let prev_mid = self.midpoint();
        let prev_dist = self.distance();
        self.contacts[slot].1 = sample.position;
        let mid = self.midpoint();
        let dist = self.distance();
        let factor = if prev_dist < MIN_PINCH_DISTANCE || dist < MIN_PINCH_DISTANCE {
            1.0
        } else {
            dist / prev_dist
        };
        Some(PinchStep {
            anchor: mid,
            factor,
            pan: mid - prev_mid,
        })
    }

    /// Ends the pinch because `id` lifted; returns the remaining contact.
    #[must_use]
    pub fn release(self, id: PointerId) -> Option<(PointerId, Point)> {
        match self.contacts {
            [(a, _), other] if a == id => Some(other),
            [other, (b, _)] if b == id => Some(other),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::*;
    use crate::event::{PointerId, PointerSample};

    fn pinch() -> PinchGesture {
        PinchGesture::begin(
            (PointerId(1), Point::new(100.0, 100.0)),
            (PointerId(2), Point::new(200.0, 100.0)),
        )
        .unwrap()
    }

    #[test]
    fn same_pointer_cannot_pinch() {
        let p = Point::new(1.0, 1.0);
        assert!(PinchGesture::begin((PointerId(1), p), (PointerId(1), p)).is_none());
    }

    #[test]
    fn spreading_fingers_zooms_in_about_midpoint() {
        let mut g = pinch();
        // Move both contacts outwards symmetrically, one at a time.
        let s1 = g.update(&PointerSample::touch(1, Point::new(50.0, 100.0), 16.0)).unwrap();
        assert!((s1.factor - 1.5).abs() < 1e-12);
        assert_eq!(s1.anchor, Point::new(125.0, 100.0));
        assert_eq!(s1.pan, Vec2::new(-25.0, 0.0));
        let s2 = g.update(&PointerSample::touch(2, Point::new(250.0, 100.0), 16.0)).unwrap();
        assert!((s2.factor - 200.0 / 150.0).abs() < 1e-12);
        assert_eq!(g.midpoint(), Point::new(150.0, 100.0));
    }

    #[test]
    fn coincident_contacts_do_not_zoom() {
        let mut g = PinchGesture::begin(
            (PointerId(1), Point::new(10.0, 10.0)),
            (PointerId(2), Point::new(10.0, 10.0)),
        )
        .unwrap();
        let step = g.update(&PointerSample::touch(2, Point::new(60.0, 10.0), 1.0)).unwrap();
        assert_eq!(step.factor, 1.0);
    }

    #[test]
    fn unrelated_pointer_is_ignored() {
        let mut g = pinch();
        assert!(g.update(&PointerSample::touch(7, Point::ORIGIN, 0.0)).is_none());
    }

    #[test]
    fn release_returns_remaining_contact() {
        let g = pinch();
        assert_eq!(g.release(PointerId(1)), Some((PointerId(2), Point::new(200.0, 100.0))));
        assert_eq!(g.release(PointerId(2)), Some((PointerId(1), Point::new(100.0, 100.0))));
        assert_eq!(g.release(PointerId(3)), None);
    }
}
