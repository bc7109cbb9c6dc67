// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered registry of navigable sections.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::host::{SectionLookup, Viewport};
use crate::types::{NavItem, SectionBounds, SectionSample};

/// Errors reported while building a [`SectionRegistry`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No nav items were declared.
    #[error("a section registry needs at least one nav item")]
    Empty,
    /// Two nav items share a key.
    #[error("nav items {first} and {second} share the same section key")]
    DuplicateKey {
        /// Index of the first item with the key.
        first: usize,
        /// Index of the later item repeating it.
        second: usize,
    },
}

/// Ordered, immutable list of navigable sections.
///
/// The registry owns the declared [`NavItem`]s and resolves each key to its
/// live [`SectionBounds`] through a host. Nothing about layout is cached.
///
/// ## Semantics
///
/// - Declaration order is scan order and display order.
/// - Keys are unique; the registry is never empty.
/// - A key whose element is absent is skipped silently by [`locate`](Self::locate)
///   and reported as [`SectionSample::missing`] by [`sample`](Self::sample).
#[derive(Clone, Debug)]
pub struct SectionRegistry<K> {
    items: Vec<NavItem<K>>,
}

impl<K: Copy + Eq + Debug> SectionRegistry<K> {
    /// Build a registry from declared items, in order.
    pub fn new(items: impl IntoIterator<Item = NavItem<K>>) -> Result<Self, RegistryError> {
        let items: Vec<_> = items.into_iter().collect();
        if items.is_empty() {
            return Err(RegistryError::Empty);
        }
        for (second, item) in items.iter().enumerate() {
            if let Some(first) = items[..second].iter().position(|i| i.key == item.key) {
                return Err(RegistryError::DuplicateKey { first, second });
            }
        }
        Ok(Self { items })
    }

    /// Declared items in order.
    pub fn items(&self) -> &[NavItem<K>] {
        &self.items
    }

    /// Declared keys in order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.items.iter().map(|i| i.key)
    }

    /// Number of declared sections.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; registries reject empty item lists.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Key of the first declared item. This is the initial active section.
    pub fn first_key(&self) -> K {
        self.items[0].key
    }

    /// Position of `key` in declaration order.
    pub fn position(&self, key: &K) -> Option<usize> {
        self.items.iter().position(|i| i.key == *key)
    }

    /// Whether `key` is declared.
    pub fn contains(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Label of the item declared for `key`.
    pub fn label(&self, key: &K) -> Option<&str> {
        self.items
            .iter()
            .find(|i| i.key == *key)
            .map(|i| i.label.as_str())
    }

    /// Resolve the live document bounds of `key`.
    ///
    /// Returns `None` when `key` is not declared or its element is absent or
    /// unmounted. Callers treat that as "not participating".
    pub fn locate<H>(&self, key: &K, host: &H) -> Option<SectionBounds>
    where
        H: Viewport + SectionLookup<K, H::Element>,
    {
        if !self.contains(key) {
            tracing::trace!(?key, "undeclared section key");
            return None;
        }
        let Some(element) = host.section_element(key) else {
            tracing::trace!(?key, "section has no element; skipping");
            return None;
        };
        let Some(rect) = host.element_rect(element) else {
            tracing::trace!(?key, "section element is unmounted; skipping");
            return None;
        };
        Some(SectionBounds::from_rect(rect, host.scroll_offset()))
    }

    /// Sample the bounds of every declared section, in declaration order.
    pub fn sample<H>(&self, host: &H) -> Vec<SectionSample<K>>
    where
        H: Viewport + SectionLookup<K, H::Element>,
    {
        self.items
            .iter()
            .map(|item| SectionSample {
                key: item.key,
                bounds: self.locate(&item.key, host),
            })
            .collect()
    }
}
