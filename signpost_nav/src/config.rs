// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation bar configuration.

use core::time::Duration;

use crate::commander::Transition;
use crate::error::NavError;

/// Tunables of a [`NavBar`](crate::NavBar).
///
/// With the `serde` feature, missing fields deserialize to their defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Height of the fixed header, in pixels.
    pub header_offset: f64,
    /// Tolerance added below the header when probing for the active section.
    pub probe_epsilon: f64,
    /// Delay between the pointer leaving the menu trigger and the menu closing.
    pub close_delay: Duration,
    /// Scroll offset above which the bar counts as scrolled.
    pub scrolled_threshold: f64,
    /// How click-to-scroll is presented.
    pub transition: Transition,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            header_offset: 96.0,
            probe_epsilon: 10.0,
            close_delay: Duration::from_millis(150),
            scrolled_threshold: 10.0,
            transition: Transition::Immediate,
        }
    }
}

impl NavConfig {
    /// Check that every numeric field is finite and non-negative.
    pub fn validate(&self) -> Result<(), NavError> {
        for (field, value) in [
            ("header_offset", self.header_offset),
            ("probe_epsilon", self.probe_epsilon),
            ("scrolled_threshold", self.scrolled_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(NavError::InvalidConfig { field, value });
            }
        }
        Ok(())
    }
}
