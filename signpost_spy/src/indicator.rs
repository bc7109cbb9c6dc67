// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry of the sliding indicator under the active nav item.
//!
//! ## Usage
//!
//! 1) Register the container and item elements with [`IndicatorTracker::set_elements`]
//!    whenever the rendered items change.
//! 2) Call [`IndicatorTracker::recompute`] when the active section changes
//!    (before the next paint) and on viewport resize (with the unchanged active section).
//! 3) Bind [`IndicatorTracker::geometry`] to the indicator's position and width.

use alloc::vec::Vec;
use core::fmt::Debug;

use signpost_sections::Viewport;

/// Position and width of the indicator, relative to the item container.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct IndicatorGeometry {
    /// Horizontal offset from the container's left edge.
    pub left: f64,
    /// Width of the active item.
    pub width: f64,
}

/// Tracks indicator geometry for the active nav item.
///
/// Holds a read-only lookup table from section key to the element rendering
/// its nav item. The elements are only measured, never owned.
#[derive(Clone, Debug)]
pub struct IndicatorTracker<K, E> {
    container: Option<E>,
    items: Vec<(K, E)>,
    geometry: IndicatorGeometry,
}

impl<K, E> Default for IndicatorTracker<K, E> {
    fn default() -> Self {
        Self {
            container: None,
            items: Vec::new(),
            geometry: IndicatorGeometry::default(),
        }
    }
}

impl<K: Copy + Eq + Debug, E: Copy> IndicatorTracker<K, E> {
    /// Create a tracker with no elements and zero geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the element table.
    ///
    /// Does not measure; call [`recompute`](Self::recompute) afterwards.
    pub fn set_elements(&mut self, container: Option<E>, items: impl IntoIterator<Item = (K, E)>) {
        self.container = container;
        self.items.clear();
        self.items.extend(items);
    }

    /// Element rendering the nav item for `key`.
    pub fn item_element(&self, key: &K) -> Option<E> {
        self.items
            .iter()
            .find(|(k, _)| k == key)
            .map(|&(_, e)| e)
    }

    /// Last computed geometry.
    pub fn geometry(&self) -> IndicatorGeometry {
        self.geometry
    }

    /// Measure the geometry for `active` without storing it.
    ///
    /// Returns `None` if the container or the item is absent or unmounted.
    pub fn measure<V>(&self, active: &K, viewport: &V) -> Option<IndicatorGeometry>
    where
        V: Viewport<Element = E>,
    {
        let container = viewport.element_rect(self.container?)?;
        let item = viewport.element_rect(self.item_element(active)?)?;
        Some(IndicatorGeometry {
            left: item.x0 - container.x0,
            width: item.width(),
        })
    }

    /// Re-measure for `active` and store the result.
    ///
    /// Returns `true` if the stored geometry changed. When an element is
    /// missing the stored geometry is left untouched.
    pub fn recompute<V>(&mut self, active: &K, viewport: &V) -> bool
    where
        V: Viewport<Element = E>,
    {
        let Some(next) = self.measure(active, viewport) else {
            tracing::trace!(?active, "indicator target unavailable; keeping geometry");
            return false;
        };
        if next == self.geometry {
            return false;
        }
        self.geometry = next;
        true
    }
}
