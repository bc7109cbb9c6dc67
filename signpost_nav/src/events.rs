// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event listener registration.

use alloc::vec::Vec;

/// Browser-style notifications the navigation bar listens to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Document scroll.
    Scroll,
    /// Viewport resize.
    Resize,
    /// Pointer entered the menu trigger region.
    PointerEnter,
    /// Pointer left the menu trigger region.
    PointerLeave,
}

impl EventKind {
    /// Every kind, in registration order.
    pub const ALL: [Self; 4] = [
        Self::Scroll,
        Self::Resize,
        Self::PointerEnter,
        Self::PointerLeave,
    ];
}

/// Handle of a registered listener.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Wrap a host listener handle.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The host listener handle.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A host that delivers events to registered listeners.
pub trait EventSource {
    /// Start delivering `kind` events. Returns a handle for [`unlisten`](Self::unlisten).
    fn listen(&mut self, kind: EventKind) -> ListenerId;

    /// Stop delivering events to `id`.
    fn unlisten(&mut self, id: ListenerId);
}

/// In-memory listener registry, for tests and demos.
#[derive(Clone, Debug, Default)]
pub struct ListenerSet {
    next_id: u64,
    active: Vec<(ListenerId, EventKind)>,
}

impl ListenerSet {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything listens to `kind`.
    pub fn is_listening(&self, kind: EventKind) -> bool {
        self.active.iter().any(|&(_, k)| k == kind)
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl EventSource for ListenerSet {
    fn listen(&mut self, kind: EventKind) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.active.push((id, kind));
        id
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.active.retain(|&(i, _)| i != id);
    }
}
