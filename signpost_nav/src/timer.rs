// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot timers supplied by the host.
//!
//! ## Overview
//!
//! Components that need a delay (the hover menu's close delay, the fade
//! transition) schedule it through [`Timers`] and keep the returned
//! [`TimerId`]. When the timer fires, the host hands the id back to the
//! navigation bar, which routes it to its owner. Ids that no component owns
//! any more are ignored.
//!
//! [`VirtualTimers`] is a deterministic implementation driven by explicit
//! time advances, for tests, demos, and hosts that poll.

use alloc::vec::Vec;
use core::time::Duration;

/// Handle of a scheduled one-shot timer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Wrap a host timer handle (for example the value returned by `setTimeout`).
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The host timer handle.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A host able to run one-shot timers on the UI thread.
pub trait Timers {
    /// Schedule a timer firing once after `delay`.
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancel a pending timer. Cancelling an unknown or fired timer is a no-op.
    fn cancel(&mut self, id: TimerId);
}

#[derive(Copy, Clone, Debug)]
struct Pending {
    id: TimerId,
    deadline: Duration,
}

/// Deterministic timers on a virtual clock.
///
/// Time starts at zero and only moves through [`advance`](Self::advance) or
/// [`next_due`](Self::next_due). Timers with equal deadlines fire in
/// scheduling order.
///
/// ```
/// use core::time::Duration;
/// use signpost_nav::{Timers, VirtualTimers};
///
/// let mut timers = VirtualTimers::new();
/// let a = timers.schedule(Duration::from_millis(150));
/// let b = timers.schedule(Duration::from_millis(80));
/// assert_eq!(timers.advance(Duration::from_millis(100)), vec![b]);
/// assert_eq!(timers.advance(Duration::from_millis(100)), vec![a]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct VirtualTimers {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending>,
}

impl VirtualTimers {
    /// Create a clock at time zero with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of pending timers.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Whether `id` is still pending.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    /// Deadline of the earliest pending timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.deadline).min()
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to its deadline.
    ///
    /// When nothing is due the clock moves to `until` (never backwards) and
    /// `None` is returned. Use this to fire timers one at a time when handlers
    /// schedule follow-up timers inside the same window.
    pub fn next_due(&mut self, until: Duration) -> Option<TimerId> {
        // Ids grow monotonically, so (deadline, id) is the firing order.
        let pos = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.deadline <= until)
            .min_by_key(|(_, p)| (p.deadline, p.id.0))
            .map(|(i, _)| i);
        match pos {
            Some(i) => {
                let fired = self.pending.remove(i);
                self.now = self.now.max(fired.deadline);
                Some(fired.id)
            }
            None => {
                self.now = self.now.max(until);
                None
            }
        }
    }

    /// Move the clock forward by `by` and return every timer that fell due, in firing order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        let until = self.now + by;
        let mut fired = Vec::new();
        while let Some(id) = self.next_due(until) {
            fired.push(id);
        }
        fired
    }
}

impl Timers for VirtualTimers {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.push(Pending {
            id,
            deadline: self.now + delay,
        });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|p| p.id != id);
    }
}
