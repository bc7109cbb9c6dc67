// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for sections: nav items, document bounds, and bounds samples.

use alloc::string::String;
use kurbo::Rect;

/// A navigation entry bound to one section of the page.
///
/// Items are declared once and never mutated. Their declaration order is both
/// the display order of the navigation bar and the scan order used when
/// resolving the active section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem<K> {
    /// Section identifier. Must be unique within a [`SectionRegistry`](crate::SectionRegistry).
    pub key: K,
    /// Human readable label shown in the navigation bar.
    pub label: String,
}

impl<K> NavItem<K> {
    /// Create a nav item.
    pub fn new(key: K, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
        }
    }
}

/// Vertical extent of a section in document coordinates.
///
/// Always derived on demand from live layout; never cached, because the
/// document may reflow between events.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SectionBounds {
    /// Distance from the top of the document to the top edge of the section.
    pub top: f64,
    /// Height of the section.
    pub height: f64,
}

impl SectionBounds {
    /// Create bounds from a top edge and a height.
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Convert a viewport-space rectangle into document-space bounds.
    ///
    /// `scroll_offset` is the document scroll offset at the time `rect` was measured.
    pub fn from_rect(rect: Rect, scroll_offset: f64) -> Self {
        Self {
            top: rect.y0 + scroll_offset,
            height: rect.height(),
        }
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether `y` falls within `[top, top + height)`.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }

    /// Length of the overlap between these bounds and `[start, end)`.
    pub fn overlap(&self, start: f64, end: f64) -> f64 {
        let lo = self.top.max(start);
        let hi = self.bottom().min(end);
        (hi - lo).max(0.0)
    }
}

/// One row of a bounds table: a declared key and its live bounds.
///
/// `bounds` is `None` when the section has no element in the document; such
/// sections do not participate in resolution.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SectionSample<K> {
    /// Declared section key.
    pub key: K,
    /// Live bounds, if the section is present.
    pub bounds: Option<SectionBounds>,
}

impl<K> SectionSample<K> {
    /// A sample for a section that is present at `bounds`.
    pub const fn located(key: K, bounds: SectionBounds) -> Self {
        Self {
            key,
            bounds: Some(bounds),
        }
    }

    /// A sample for a section with no element.
    pub const fn missing(key: K) -> Self {
        Self { key, bounds: None }
    }
}

/// How a programmatic scroll should be animated by the host.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollBehavior {
    /// Animate towards the target offset.
    #[default]
    Smooth,
    /// Jump straight to the target offset.
    Instant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_half_open() {
        let b = SectionBounds::new(800.0, 800.0);
        assert!(!b.contains(799.9));
        assert!(b.contains(800.0));
        assert!(b.contains(1599.9));
        assert!(!b.contains(1600.0));
    }

    #[test]
    fn from_rect_adds_scroll_offset() {
        // Measured while scrolled down by 300: the rect sits 500 below the viewport top.
        let b = SectionBounds::from_rect(Rect::new(0.0, 500.0, 1280.0, 900.0), 300.0);
        assert_eq!(b, SectionBounds::new(800.0, 400.0));
    }

    #[test]
    fn overlap_clamps_to_zero() {
        let b = SectionBounds::new(100.0, 100.0);
        assert_eq!(b.overlap(0.0, 150.0), 50.0);
        assert_eq!(b.overlap(120.0, 180.0), 60.0);
        assert_eq!(b.overlap(300.0, 400.0), 0.0);
    }
}
