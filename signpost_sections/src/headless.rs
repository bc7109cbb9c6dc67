// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory page implementing the host traits.
//!
//! ## Overview
//!
//! [`HeadlessPage`] models just enough of a scrolling document to drive the
//! navigation crates without a browser: elements with rectangles, a viewport,
//! a scroll offset, and a log of programmatic scroll requests.
//!
//! - Document elements scroll with the page; fixed elements (a navigation bar)
//!   keep their viewport position.
//! - Elements can be unmounted and remounted to simulate responsive layout swaps.
//! - Programmatic scrolls land immediately, clamped to the scrollable range.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Size;
//! use signpost_sections::headless::HeadlessPage;
//! use signpost_sections::{ScrollBehavior, Viewport};
//!
//! let mut page: HeadlessPage<&str> = HeadlessPage::new(Size::new(1280.0, 700.0));
//! page.add_section("home", 0.0, 800.0);
//! page.add_section("services", 800.0, 800.0);
//!
//! page.scroll_to(5000.0, ScrollBehavior::Smooth);
//! assert_eq!(page.scroll_offset(), 900.0);
//! ```

use alloc::vec::Vec;
use kurbo::{Rect, Size, Vec2};

use crate::host::{SectionLookup, Viewport};
use crate::types::ScrollBehavior;

/// Handle of an element in a [`HeadlessPage`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(u32);

impl ElementId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Anchor {
    Document,
    Fixed,
}

#[derive(Clone, Debug)]
struct Element {
    // Document coordinates for `Anchor::Document`, viewport coordinates for `Anchor::Fixed`.
    rect: Rect,
    anchor: Anchor,
    mounted: bool,
}

/// A headless scrolling document.
#[derive(Clone, Debug)]
pub struct HeadlessPage<K> {
    elements: Vec<Element>,
    sections: Vec<(K, ElementId)>,
    viewport: Size,
    scroll: f64,
    scroll_requests: Vec<(f64, ScrollBehavior)>,
}

impl<K: Copy + Eq> HeadlessPage<K> {
    /// Create an empty page with the given viewport size, scrolled to the top.
    pub fn new(viewport: Size) -> Self {
        Self {
            elements: Vec::new(),
            sections: Vec::new(),
            viewport,
            scroll: 0.0,
            scroll_requests: Vec::new(),
        }
    }

    fn push(&mut self, rect: Rect, anchor: Anchor) -> ElementId {
        let id = ElementId(self.elements.len() as u32);
        self.elements.push(Element {
            rect,
            anchor,
            mounted: true,
        });
        id
    }

    /// Add a full-width section element bound to `key`.
    ///
    /// Rebinding a key replaces its previous element binding.
    pub fn add_section(&mut self, key: K, top: f64, height: f64) -> ElementId {
        let id = self.push(
            Rect::new(0.0, top, self.viewport.width, top + height),
            Anchor::Document,
        );
        self.sections.retain(|(k, _)| *k != key);
        self.sections.push((key, id));
        id
    }

    /// Add an element that scrolls with the document.
    pub fn add_element(&mut self, rect: Rect) -> ElementId {
        self.push(rect, Anchor::Document)
    }

    /// Add an element pinned to the viewport, such as an item of a fixed navigation bar.
    pub fn add_fixed(&mut self, rect: Rect) -> ElementId {
        self.push(rect, Anchor::Fixed)
    }

    /// Move or resize an element. Coordinates follow the element's anchor.
    pub fn set_rect(&mut self, id: ElementId, rect: Rect) {
        if let Some(el) = self.elements.get_mut(id.idx()) {
            el.rect = rect;
        }
    }

    /// Detach an element; geometry queries for it return `None` until remounted.
    pub fn unmount(&mut self, id: ElementId) {
        if let Some(el) = self.elements.get_mut(id.idx()) {
            el.mounted = false;
        }
    }

    /// Reattach a previously unmounted element.
    pub fn mount(&mut self, id: ElementId) {
        if let Some(el) = self.elements.get_mut(id.idx()) {
            el.mounted = true;
        }
    }

    /// Drop the binding between `key` and its element.
    pub fn remove_section(&mut self, key: K) {
        self.sections.retain(|(k, _)| *k != key);
    }

    /// Resize the viewport. The scroll offset is re-clamped to the new range.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport = size;
        self.scroll = self.clamp_scroll(self.scroll);
    }

    /// Bottom edge of the lowest mounted document element.
    pub fn document_height(&self) -> f64 {
        self.elements
            .iter()
            .filter(|e| e.mounted && e.anchor == Anchor::Document)
            .map(|e| e.rect.y1)
            .fold(0.0, f64::max)
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport.height).max(0.0)
    }

    fn clamp_scroll(&self, offset: f64) -> f64 {
        offset.min(self.max_scroll()).max(0.0)
    }

    /// Simulate the user scrolling to `offset` (clamped). Not recorded as a request.
    pub fn set_scroll(&mut self, offset: f64) {
        self.scroll = self.clamp_scroll(offset);
    }

    /// Programmatic scroll requests received through [`Viewport::scroll_to`], oldest first.
    ///
    /// Offsets are recorded as requested, before clamping.
    pub fn scroll_requests(&self) -> &[(f64, ScrollBehavior)] {
        &self.scroll_requests
    }
}

impl<K: Copy + Eq> Viewport for HeadlessPage<K> {
    type Element = ElementId;

    fn element_rect(&self, element: ElementId) -> Option<Rect> {
        let el = self.elements.get(element.idx()).filter(|e| e.mounted)?;
        Some(match el.anchor {
            Anchor::Document => el.rect - Vec2::new(0.0, self.scroll),
            Anchor::Fixed => el.rect,
        })
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        self.scroll_requests.push((offset, behavior));
        self.scroll = self.clamp_scroll(offset);
    }
}

impl<K: Copy + Eq> SectionLookup<K, ElementId> for HeadlessPage<K> {
    fn section_element(&self, key: &K) -> Option<ElementId> {
        self.sections
            .iter()
            .find(|(k, _)| k == key)
            .map(|&(_, id)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_elements_move_with_scroll() {
        let mut page: HeadlessPage<u8> = HeadlessPage::new(Size::new(1000.0, 500.0));
        let section = page.add_section(1, 600.0, 900.0);
        let pinned = page.add_fixed(Rect::new(10.0, 10.0, 90.0, 30.0));
        page.set_scroll(200.0);

        assert_eq!(
            page.element_rect(section),
            Some(Rect::new(0.0, 400.0, 1000.0, 1300.0))
        );
        assert_eq!(page.element_rect(pinned), Some(Rect::new(10.0, 10.0, 90.0, 30.0)));
    }

    #[test]
    fn scroll_is_clamped() {
        let mut page: HeadlessPage<u8> = HeadlessPage::new(Size::new(1000.0, 500.0));
        page.add_section(1, 0.0, 1200.0);
        page.scroll_to(-40.0, ScrollBehavior::Smooth);
        assert_eq!(page.scroll_offset(), 0.0);
        page.scroll_to(9000.0, ScrollBehavior::Instant);
        assert_eq!(page.scroll_offset(), 700.0);
        assert_eq!(
            page.scroll_requests(),
            &[(-40.0, ScrollBehavior::Smooth), (9000.0, ScrollBehavior::Instant)]
        );
    }

    #[test]
    fn unmounted_elements_have_no_geometry() {
        let mut page: HeadlessPage<u8> = HeadlessPage::new(Size::new(1000.0, 500.0));
        let id = page.add_section(3, 0.0, 100.0);
        page.unmount(id);
        assert_eq!(page.element_rect(id), None);
        assert_eq!(page.section_element(&3), Some(id));
        page.mount(id);
        assert!(page.element_rect(id).is_some());
        page.remove_section(3);
        assert_eq!(page.section_element(&3), None);
    }
}
