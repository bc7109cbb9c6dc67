// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-to-scroll navigation.
//!
//! ## Overview
//!
//! [`NavigationCommander::navigate_to`] scrolls so the target section's top
//! lands just below the fixed header, and closes the menu. It never writes the
//! active section: the scroll spy picks that up from the scroll events the
//! host emits while (and after) the page moves.
//!
//! ## Transitions
//!
//! - [`Transition::Immediate`]: the smooth scroll is requested right away.
//! - [`Transition::Fade`]: an overlay appears, the scroll is requested after
//!   `lead`, and the overlay clears `hold` after that. A new navigation while
//!   a fade is pending restarts the sequence; the overlay always clears, even
//!   when the target disappeared before the scroll stage.

use core::fmt::Debug;
use core::time::Duration;

use signpost_sections::{ScrollBehavior, SectionBounds, SectionLookup, SectionRegistry, Viewport};

use crate::changes::NavChanges;
use crate::menu::HoverMenu;
use crate::timer::{TimerId, Timers};

/// How a navigation request reaches the scroll.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    /// Scroll right away.
    #[default]
    Immediate,
    /// Cover the page with an overlay around the scroll.
    Fade {
        /// Delay between showing the overlay and scrolling.
        lead: Duration,
        /// Delay between scrolling and clearing the overlay.
        hold: Duration,
    },
}

impl Transition {
    /// The stock fade: 80 ms lead, 250 ms hold.
    pub const FADE: Self = Self::Fade {
        lead: Duration::from_millis(80),
        hold: Duration::from_millis(250),
    };
}

#[derive(Copy, Clone, Debug)]
enum Stage<K> {
    Scroll {
        timer: TimerId,
        target: K,
        hold: Duration,
    },
    Clear {
        timer: TimerId,
    },
}

impl<K> Stage<K> {
    fn timer(&self) -> TimerId {
        match self {
            Self::Scroll { timer, .. } | Self::Clear { timer } => *timer,
        }
    }
}

/// Executes offset-corrected scrolls to sections.
#[derive(Clone, Debug)]
pub struct NavigationCommander<K> {
    header_offset: f64,
    transition: Transition,
    stage: Option<Stage<K>>,
    overlay: bool,
}

impl<K: Copy + Eq + Debug> NavigationCommander<K> {
    /// Create a commander for a fixed header of `header_offset` pixels.
    pub fn new(header_offset: f64, transition: Transition) -> Self {
        Self {
            header_offset,
            transition,
            stage: None,
            overlay: false,
        }
    }

    /// Height subtracted from section tops when scrolling.
    pub fn header_offset(&self) -> f64 {
        self.header_offset
    }

    /// The configured transition.
    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Whether the transition overlay is showing.
    pub fn overlay_visible(&self) -> bool {
        self.overlay
    }

    /// Scroll offset that puts `bounds` just below the header.
    pub fn target_offset(&self, bounds: SectionBounds) -> f64 {
        (bounds.top - self.header_offset).max(0.0)
    }

    fn scroll<H>(&self, key: &K, registry: &SectionRegistry<K>, host: &mut H) -> bool
    where
        H: Viewport + SectionLookup<K, H::Element>,
    {
        let Some(bounds) = registry.locate(key, host) else {
            return false;
        };
        let offset = self.target_offset(bounds);
        tracing::debug!(?key, offset, "scrolling to section");
        host.scroll_to(offset, ScrollBehavior::Smooth);
        true
    }

    fn cancel_stage(&mut self, timers: &mut impl Timers) {
        if let Some(stage) = self.stage.take() {
            timers.cancel(stage.timer());
        }
    }

    /// Navigate to the section `key` and close `menu`.
    ///
    /// The menu is closed unconditionally, even when `key` has no section.
    /// A missing section makes the scroll itself a no-op.
    pub fn navigate_to<H>(
        &mut self,
        key: K,
        registry: &SectionRegistry<K>,
        host: &mut H,
        timers: &mut impl Timers,
        menu: &mut HoverMenu,
    ) -> NavChanges
    where
        H: Viewport + SectionLookup<K, H::Element>,
    {
        let mut changes = NavChanges::empty();
        if menu.force_close(timers) {
            changes |= NavChanges::MENU;
        }
        match self.transition {
            Transition::Immediate => {
                self.scroll(&key, registry, host);
            }
            Transition::Fade { lead, hold } => {
                if registry.locate(&key, host).is_none() {
                    return changes;
                }
                self.cancel_stage(timers);
                let timer = timers.schedule(lead);
                self.stage = Some(Stage::Scroll {
                    timer,
                    target: key,
                    hold,
                });
                if !self.overlay {
                    self.overlay = true;
                    changes |= NavChanges::OVERLAY;
                }
            }
        }
        changes
    }

    /// Whether `id` belongs to a pending transition stage.
    pub fn owns_timer(&self, id: TimerId) -> bool {
        self.stage.is_some_and(|s| s.timer() == id)
    }

    /// A timer fired. Advances the fade transition if `id` is its pending stage.
    pub fn on_timer<H>(
        &mut self,
        id: TimerId,
        registry: &SectionRegistry<K>,
        host: &mut H,
        timers: &mut impl Timers,
    ) -> NavChanges
    where
        H: Viewport + SectionLookup<K, H::Element>,
    {
        if !self.owns_timer(id) {
            return NavChanges::empty();
        }
        match self.stage.take() {
            Some(Stage::Scroll { target, hold, .. }) => {
                if !self.scroll(&target, registry, host) {
                    tracing::trace!(?target, "fade target vanished; clearing overlay only");
                }
                self.stage = Some(Stage::Clear {
                    timer: timers.schedule(hold),
                });
                NavChanges::empty()
            }
            Some(Stage::Clear { .. }) => {
                self.overlay = false;
                NavChanges::OVERLAY
            }
            None => NavChanges::empty(),
        }
    }

    /// Cancel any pending stage and clear the overlay.
    pub fn teardown(&mut self, timers: &mut impl Timers) -> NavChanges {
        self.cancel_stage(timers);
        if core::mem::take(&mut self.overlay) {
            NavChanges::OVERLAY
        } else {
            NavChanges::empty()
        }
    }
}
