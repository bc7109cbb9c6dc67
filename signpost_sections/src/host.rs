// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host integration traits: viewport geometry and section content lookup.
//!
//! ## Overview
//!
//! The crates in this workspace never touch a real document. A host (a browser
//! binding, a native toolkit, or [`HeadlessPage`](crate::headless::HeadlessPage)
//! in tests) implements these traits and hands itself to the registry, the
//! indicator tracker, and the navigation bar.

use kurbo::{Rect, Size};

use crate::types::ScrollBehavior;

/// Geometry provider for a scrollable document.
///
/// All rectangles are reported in one consistent coordinate space, the
/// viewport, the way a browser reports client rectangles.
pub trait Viewport {
    /// Opaque handle to a rendered element.
    type Element: Copy;

    /// Bounding rectangle of `element` in viewport coordinates.
    ///
    /// Returns `None` when the element is not currently mounted.
    fn element_rect(&self, element: Self::Element) -> Option<Rect>;

    /// Current vertical scroll offset of the document.
    fn scroll_offset(&self) -> f64;

    /// Size of the visible viewport.
    fn viewport_size(&self) -> Size;

    /// Request a programmatic scroll to an absolute document offset.
    ///
    /// Fire-and-forget: callers never wait for the animation to finish and
    /// learn about the resting position through subsequent scroll events.
    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior);
}

/// Map section keys to the elements that render them.
///
/// Each key resolves to at most one element. Returning `None` marks the section
/// as absent, which callers treat as non-participating rather than as an error.
pub trait SectionLookup<K, E> {
    /// Returns the element rendering the section `key`, if any.
    fn section_element(&self, key: &K) -> Option<E>;
}
