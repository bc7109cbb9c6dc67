// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover-triggered menu with an immediate open and a delayed close.
//!
//! ## Transitions
//!
//! - Pointer enters the trigger: cancel any pending close, open now.
//! - Pointer leaves the trigger: schedule a close after `close_delay`.
//! - Click on the trigger: toggle now and cancel any pending close.
//! - Navigation: close now and cancel any pending close.
//!
//! The delay lets the pointer travel from the trigger to the panel below it
//! without the menu flickering closed.
//!
//! At most one close timer is pending at a time. Every mutation first cancels
//! the pending timer, if any, then schedules a fresh one when needed.
//!
//! ```
//! use core::time::Duration;
//! use signpost_nav::{HoverMenu, MenuState, VirtualTimers};
//!
//! let mut timers = VirtualTimers::new();
//! let mut menu = HoverMenu::new(Duration::from_millis(150));
//!
//! menu.pointer_enter(&mut timers);
//! menu.pointer_leave(&mut timers);
//! for id in timers.advance(Duration::from_millis(150)) {
//!     menu.on_timer(id);
//! }
//! assert_eq!(menu.state(), MenuState::Closed);
//! ```

use core::time::Duration;

use crate::timer::{TimerId, Timers};

/// Open/closed state of a collapsible menu panel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    /// Panel hidden.
    #[default]
    Closed,
    /// Panel shown.
    Open,
}

/// Menu state machine owning at most one pending close timer.
#[derive(Clone, Debug)]
pub struct HoverMenu {
    state: MenuState,
    pending_close: Option<TimerId>,
    close_delay: Duration,
}

impl HoverMenu {
    /// Create a closed menu that closes `close_delay` after the pointer leaves.
    pub fn new(close_delay: Duration) -> Self {
        Self {
            state: MenuState::Closed,
            pending_close: None,
            close_delay,
        }
    }

    /// Current state.
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Whether the panel is open.
    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// The pending close timer, if any.
    pub fn pending_close(&self) -> Option<TimerId> {
        self.pending_close
    }

    /// Delay between pointer leave and close.
    pub fn close_delay(&self) -> Duration {
        self.close_delay
    }

    fn cancel_pending(&mut self, timers: &mut impl Timers) {
        if let Some(id) = self.pending_close.take() {
            timers.cancel(id);
        }
    }

    fn set(&mut self, state: MenuState) -> bool {
        if self.state == state {
            return false;
        }
        tracing::debug!(from = ?self.state, to = ?state, "menu state changed");
        self.state = state;
        true
    }

    /// Pointer entered the trigger region. Returns `true` if the state changed.
    pub fn pointer_enter(&mut self, timers: &mut impl Timers) -> bool {
        self.cancel_pending(timers);
        self.set(MenuState::Open)
    }

    /// Pointer left the trigger region; the menu closes after the delay unless re-entered.
    pub fn pointer_leave(&mut self, timers: &mut impl Timers) {
        self.cancel_pending(timers);
        self.pending_close = Some(timers.schedule(self.close_delay));
    }

    /// Click on the trigger. Always changes the state.
    pub fn toggle(&mut self, timers: &mut impl Timers) -> bool {
        self.cancel_pending(timers);
        let next = match self.state {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        };
        self.set(next)
    }

    /// Close immediately regardless of hover state or pending timers.
    pub fn force_close(&mut self, timers: &mut impl Timers) -> bool {
        self.cancel_pending(timers);
        self.set(MenuState::Closed)
    }

    /// Whether `id` is this menu's pending close timer.
    pub fn owns_timer(&self, id: TimerId) -> bool {
        self.pending_close == Some(id)
    }

    /// A timer fired. Closes the menu if `id` is the pending close timer.
    ///
    /// Stale ids (cancelled or foreign) are ignored. Returns `true` if the state changed.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if !self.owns_timer(id) {
            return false;
        }
        self.pending_close = None;
        self.set(MenuState::Closed)
    }

    /// Cancel the pending close timer. The current state is kept.
    pub fn teardown(&mut self, timers: &mut impl Timers) {
        self.cancel_pending(timers);
    }
}
