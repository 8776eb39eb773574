// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use viewfinder_sections::TargetError;

/// Error returned by the fallible navigator commands.
///
/// Input handlers never surface these; they log and leave the camera alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavError {
    /// Computing the camera target failed.
    Target(TargetError),
    /// A drag or pinch owns the camera; discrete commands wait until it ends.
    GestureActive,
    /// The registry has no sections to navigate between.
    NoSections,
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Target(err) => write!(f, "cannot compute camera target: {err}"),
            Self::GestureActive => f.write_str("a pointer gesture is in progress"),
            Self::NoSections => f.write_str("no sections are registered"),
        }
    }
}

impl core::error::Error for NavError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Target(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TargetError> for NavError {
    fn from(err: TargetError) -> Self {
        Self::Target(err)
    }
}
