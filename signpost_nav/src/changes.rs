// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

bitflags::bitflags! {
    /// Observable values changed by a navigation bar handler.
    ///
    /// Presentation code re-reads the matching getters on
    /// [`NavBar`](crate::NavBar) for every set bit.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NavChanges: u8 {
        /// The active section changed.
        const ACTIVE    = 0b0000_0001;
        /// The indicator geometry changed.
        const INDICATOR = 0b0000_0010;
        /// The menu opened or closed.
        const MENU      = 0b0000_0100;
        /// The transition overlay appeared or cleared.
        const OVERLAY   = 0b0000_1000;
        /// The page crossed the scrolled threshold in either direction.
        const SCROLLED  = 0b0001_0000;
    }
}
