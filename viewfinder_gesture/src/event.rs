// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical input samples.
//!
//! Hosts translate their native pointer, touch, mouse, wheel and keyboard
//! events into these types at the boundary, so nothing downstream has to care
//! which device produced them.

use kurbo::{Point, Vec2};

/// Identifies one pointer (a mouse, a pen, or a single touch contact).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

impl PointerId {
    /// Conventional id for the primary mouse pointer.
    pub const MOUSE: Self = Self(1);
}

/// Device that produced a pointer sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerKind {
    /// Mouse or trackpad cursor.
    #[default]
    Mouse,
    /// A touch contact.
    Touch,
    /// Stylus.
    Pen,
}

/// One pointer position in screen space, with its timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Which pointer moved.
    pub pointer_id: PointerId,
    /// Position in screen pixels, relative to the viewport origin.
    pub position: Point,
    /// Timestamp in milliseconds on the host clock.
    pub time_ms: f64,
    /// Device kind.
    pub kind: PointerKind,
}

impl PointerSample {
    /// Sample for the primary mouse pointer.
    #[must_use]
    pub fn mouse(position: Point, time_ms: f64) -> Self {
        Self {
            pointer_id: PointerId::MOUSE,
            position,
            time_ms,
            kind: PointerKind::Mouse,
        }
    }

    /// Sample for a touch contact.
    #[must_use]
    pub fn touch(id: u64, position: Point, time_ms: f64) -> Self {
        Self {
            pointer_id: PointerId(id),
            position,
            time_ms,
            kind: PointerKind::Touch,
        }
    }

    /// Returns `true` if position and timestamp are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.time_ms.is_finite()
    }
}

bitflags::bitflags! {
    /// Keyboard modifiers held during an event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT   = 0b0000_0001;
        /// Control key.
        const CONTROL = 0b0000_0010;
        /// Alt / Option key.
        const ALT     = 0b0000_0100;
        /// Meta / Command / Windows key.
        const META    = 0b0000_1000;
    }
}

impl Modifiers {
    /// Returns `true` if Control or Meta is held (the "command" chord).
    #[must_use]
    pub fn has_command(self) -> bool {
        self.intersects(Self::CONTROL | Self::META)
    }
}

/// Unit of a wheel delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeltaMode {
    /// Delta is in pixels.
    #[default]
    Pixel,
    /// Delta is in lines.
    Line,
    /// Delta is in pages.
    Page,
}

/// One wheel event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelSample {
    /// Scroll delta; positive `y` scrolls down.
    pub delta: Vec2,
    /// Unit of `delta`.
    pub mode: DeltaMode,
    /// Cursor position in screen pixels.
    pub position: Point,
    /// Modifiers held.
    pub modifiers: Modifiers,
}

impl WheelSample {
    /// Pixel‑mode wheel sample without modifiers.
    #[must_use]
    pub fn pixels(delta: Vec2, position: Point) -> Self {
        Self {
            delta,
            mode: DeltaMode::Pixel,
            position,
            modifiers: Modifiers::empty(),
        }
    }

    /// Returns a copy with the given modifiers.
    #[must_use]
    pub fn with_modifiers(self, modifiers: Modifiers) -> Self {
        Self { modifiers, ..self }
    }
}

/// Logical key, already resolved from the host's key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Escape.
    Escape,
    /// A printable character.
    Character(char),
}

/// One key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// Logical key.
    pub key: Key,
    /// Modifiers held.
    pub modifiers: Modifiers,
}

impl KeyPress {
    /// Key press without modifiers.
    #[must_use]
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// Key press with modifiers.
    #[must_use]
    pub fn with(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}
