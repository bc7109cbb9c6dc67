// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Signpost Spy: which section is in view, and where the indicator goes.
//!
//! ## Overview
//!
//! This crate turns a scroll position into an active section and the active
//! section into indicator geometry. It does not listen to events or own any
//! state beyond the last indicator geometry; the navigation bar in
//! `signpost_nav` drives it.
//!
//! - [`ActiveResolver`]: the single resolution contract. [`ContainmentScan`] is
//!   the canonical, deterministic strategy; [`VisibilityRatio`] is the
//!   alternative for pages where the scan is ambiguous. [`SpyStrategy`] picks
//!   one at runtime.
//! - [`IndicatorTracker`]: measures the active nav item against its container
//!   and stores `{ left, width }`.
//!
//! ## Workflow
//!
//! 1) Sample section bounds with [`SectionRegistry::sample`](signpost_sections::SectionRegistry::sample).
//! 2) Resolve with any [`ActiveResolver`]; `None` means "keep the current section".
//! 3) If the active section changed, [`IndicatorTracker::recompute`] before painting.
//!
//! ## Example
//!
//! ```
//! use signpost_sections::{SectionBounds, SectionSample};
//! use signpost_spy::{ActiveResolver, ContainmentScan, ScrollFrame};
//!
//! let table = [
//!     SectionSample::located("home", SectionBounds::new(0.0, 800.0)),
//!     SectionSample::located("services", SectionBounds::new(800.0, 800.0)),
//! ];
//! let scan = ContainmentScan::new(96.0, 10.0);
//!
//! // probe = 750 + 96 + 10 = 856, inside services.
//! assert_eq!(scan.resolve(ScrollFrame::new(750.0, 720.0), &table), Some("services"));
//! // probe = 106, inside home.
//! assert_eq!(scan.resolve(ScrollFrame::new(0.0, 720.0), &table), Some("home"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod indicator;
mod resolver;

pub use indicator::{IndicatorGeometry, IndicatorTracker};
pub use resolver::{
    ActiveResolver, ContainmentScan, ScrollFrame, SpyStrategy, VisibilityRatio,
};
