// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::{Point, Rect};

/// A named content panel placed on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionDescriptor {
    /// Stable identifier used for navigation.
    pub id: String,
    /// Human‑readable name, used for accessible labels.
    pub label: String,
    /// Position and size in canvas space.
    pub bounds: Rect,
}

impl SectionDescriptor {
    /// Creates a descriptor.
    pub fn new(id: impl Into<String>, label: impl Into<String>, bounds: Rect) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            bounds,
        }
    }
}

/// Error returned when building a [`SectionRegistry`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// Two descriptors share this id.
    DuplicateId(String),
    /// This section's bounds are empty, inverted, or not finite.
    InvalidBounds(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "section id {id:?} is registered twice"),
            Self::InvalidBounds(id) => write!(f, "section {id:?} has empty or non-finite bounds"),
        }
    }
}

impl core::error::Error for RegistryError {}

/// Read‑only, ordered set of sections.
///
/// Built once from configuration. Order is preserved; it drives numbered
/// shortcuts and next/previous navigation, and later sections win hit tests.
#[derive(Clone, Debug, Default)]
pub struct SectionRegistry {
    sections: Vec<SectionDescriptor>,
    index: HashMap<String, usize>,
    content_bounds: Option<Rect>,
}

impl SectionRegistry {
    /// Builds a registry, rejecting duplicate ids and degenerate bounds.
    pub fn new(
        descriptors: impl IntoIterator<Item = SectionDescriptor>,
    ) -> Result<Self, RegistryError> {
        let mut sections = Vec::new();
        let mut index = HashMap::new();
        let mut content_bounds: Option<Rect> = None;
        for section in descriptors {
            let b = section.bounds;
            if !b.is_finite() || !(b.width() > 0.0 && b.height() > 0.0) {
                return Err(RegistryError::InvalidBounds(section.id));
            }
            if index.contains_key(&section.id) {
                return Err(RegistryError::DuplicateId(section.id));
            }
            index.insert(section.id.clone(), sections.len());
            content_bounds = Some(match content_bounds {
                Some(acc) => acc.union(b),
                None => b,
            });
            sections.push(section);
        }
        Ok(Self {
            sections,
            index,
            content_bounds,
        })
    }

    /// Looks up a section by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SectionDescriptor> {
        self.index.get(id).map(|&i| &self.sections[i])
    }

    /// Registration index of a section.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Section at a registration index.
    #[must_use]
    pub fn by_index(&self, index: usize) -> Option<&SectionDescriptor> {
        self.sections.get(index)
    }

    /// Sections in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SectionDescriptor> + '_ {
        self.sections.iter()
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if there are no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Union of all section bounds.
    #[must_use]
    pub fn content_bounds(&self) -> Option<Rect> {
        self.content_bounds
    }

    /// Topmost (last registered) section containing `pt`.
    #[must_use]
    pub fn section_at(&self, pt: Point) -> Option<&SectionDescriptor> {
        self.sections.iter().rev().find(|s| s.bounds.contains(pt))
    }

    /// Section containing `pt`, or else the one whose centre is closest.
    #[must_use]
    pub fn nearest_section(&self, pt: Point) -> Option<&SectionDescriptor> {
        if let Some(hit) = self.section_at(pt) {
            return Some(hit);
        }
        let mut best: Option<(&SectionDescriptor, f64)> = None;
        for s in &self.sections {
            let d = (s.bounds.center() - pt).hypot2();
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((s, d));
            }
        }
        best.map(|(s, _)| s)
    }
}
