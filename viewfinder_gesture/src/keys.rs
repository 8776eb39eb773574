// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard bindings for canvas navigation.
//!
//! | Key | Command |
//! |---|---|
//! | Arrows (Shift for a larger step) | [`KeyCommand::Pan`] |
//! | `+` / `=` | [`KeyCommand::ZoomIn`] |
//! | `-` / `_` | [`KeyCommand::ZoomOut`] |
//! | `0` / Home | [`KeyCommand::Reset`] |
//! | `f` / End | [`KeyCommand::Overview`] |
//! | `1`–`9` | [`KeyCommand::JumpTo`] |
//! | PageDown / `]` | [`KeyCommand::NextSection`] |
//! | PageUp / `[` | [`KeyCommand::PreviousSection`] |
//! | Escape | [`KeyCommand::Stop`] |
//!
//! Chords with Control, Alt or Meta are left to the host (browser zoom,
//! shortcuts) and map to nothing.

use kurbo::Vec2;

use crate::event::{Key, KeyPress, Modifiers};

/// Direction the camera travels over the canvas.
///
/// Travelling right moves the content left on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanDirection {
    /// Towards negative canvas x.
    Left,
    /// Towards positive canvas x.
    Right,
    /// Towards negative canvas y.
    Up,
    /// Towards positive canvas y.
    Down,
}

impl PanDirection {
    /// Change of camera offset for one step of `step` screen pixels.
    #[must_use]
    pub fn offset_delta(self, step: f64) -> Vec2 {
        match self {
            Self::Left => Vec2::new(step, 0.0),
            Self::Right => Vec2::new(-step, 0.0),
            Self::Up => Vec2::new(0.0, step),
            Self::Down => Vec2::new(0.0, -step),
        }
    }
}

/// Navigation command produced by a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    /// Pan by one step; `coarse` asks for the larger step.
    Pan {
        /// Direction of travel.
        direction: PanDirection,
        /// Shift was held.
        coarse: bool,
    },
    /// Zoom in about the viewport centre.
    ZoomIn,
    /// Zoom out about the viewport centre.
    ZoomOut,
    /// Return to the default view.
    Reset,
    /// Fit every section into view.
    Overview,
    /// Jump to the section at this zero‑based index.
    JumpTo(usize),
    /// Jump to the section after the active one.
    NextSection,
    /// Jump to the section before the active one.
    PreviousSection,
    /// Stop any camera motion in progress.
    Stop,
}

/// Maps a key press onto a navigation command.
#[must_use]
pub fn command_for(press: &KeyPress) -> Option<KeyCommand> {
    if press
        .modifiers
        .intersects(Modifiers::CONTROL | Modifiers::ALT | Modifiers::META)
    {
        return None;
    }
    let coarse = press.modifiers.contains(Modifiers::SHIFT);
    let pan = |direction| Some(KeyCommand::Pan { direction, coarse });
    match press.key {
        Key::ArrowLeft => pan(PanDirection::Left),
        Key::ArrowRight => pan(PanDirection::Right),
        Key::ArrowUp => pan(PanDirection::Up),
        Key::ArrowDown => pan(PanDirection::Down),
        Key::Home => Some(KeyCommand::Reset),
        Key::End => Some(KeyCommand::Overview),
        Key::PageDown => Some(KeyCommand::NextSection),
        Key::PageUp => Some(KeyCommand::PreviousSection),
        Key::Escape => Some(KeyCommand::Stop),
        Key::Character(c) => match c {
            '+' | '=' => Some(KeyCommand::ZoomIn),
            '-' | '_' => Some(KeyCommand::ZoomOut),
            '0' => Some(KeyCommand::Reset),
            'f' | 'F' => Some(KeyCommand::Overview),
            ']' => Some(KeyCommand::NextSection),
            '[' => Some(KeyCommand::PreviousSection),
            '1'..='9' => c.to_digit(10).map(|d| KeyCommand::JumpTo(d as usize - 1)),
            _ => None,
        },
    }
}
