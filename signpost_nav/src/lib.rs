// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Signpost Nav: a navigation bar that follows the page.
//!
//! ## Overview
//!
//! [`NavBar`] keeps three observable values consistent with the page:
//!
//! - the active section, derived from the scroll position by an
//!   [`ActiveResolver`](signpost_spy::ActiveResolver);
//! - the indicator geometry under the active nav item;
//! - the menu state of a hover-triggered panel with a delayed close.
//!
//! Selecting an item scrolls the page so the section lands just below the fixed
//! header and closes the menu. The active section then follows from the scroll
//! events, never from the click.
//!
//! Every handler returns [`NavChanges`] so presentation code only re-reads what moved.
//!
//! ## Host
//!
//! The host supplies:
//!
//! - [`Viewport`](signpost_sections::Viewport) + [`SectionLookup`](signpost_sections::SectionLookup) for geometry and scrolling;
//! - [`Timers`] for one-shot delays, handing fired ids back to [`NavBar::on_timer`];
//! - [`EventSource`] for listener registration.
//!
//! [`HeadlessPage`](signpost_sections::headless::HeadlessPage), [`VirtualTimers`],
//! and [`ListenerSet`] implement all three in memory.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Rect, Size};
//! use signpost_nav::{ListenerSet, NavBar, NavChanges, NavConfig, VirtualTimers};
//! use signpost_sections::NavItem;
//! use signpost_sections::headless::HeadlessPage;
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq)]
//! enum Section { Home, Services }
//!
//! let mut page = HeadlessPage::new(Size::new(1280.0, 720.0));
//! page.add_section(Section::Home, 0.0, 800.0);
//! page.add_section(Section::Services, 800.0, 800.0);
//! let container = page.add_fixed(Rect::new(600.0, 20.0, 900.0, 44.0));
//! let home = page.add_fixed(Rect::new(600.0, 20.0, 660.0, 44.0));
//! let services = page.add_fixed(Rect::new(700.0, 20.0, 830.0, 44.0));
//!
//! let mut timers = VirtualTimers::new();
//! let mut events = ListenerSet::new();
//! let mut bar = NavBar::new(
//!     [NavItem::new(Section::Home, "HOME"), NavItem::new(Section::Services, "OUR SERVICES")],
//!     &NavConfig::default(),
//! )
//! .unwrap();
//! bar.set_indicator_elements(
//!     Some(container),
//!     [(Section::Home, home), (Section::Services, services)],
//!     &page,
//! );
//! bar.activate(&page, &mut events);
//! assert_eq!(bar.active(), Section::Home);
//!
//! // Clicking scrolls to 800 - 96; the scroll event then moves the indicator.
//! bar.navigate_to(Section::Services, &mut page, &mut timers);
//! let changes = bar.on_scroll(&page);
//! assert!(changes.contains(NavChanges::ACTIVE | NavChanges::INDICATOR));
//! assert_eq!(bar.active(), Section::Services);
//! assert_eq!(bar.indicator().left, 100.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod changes;
mod commander;
mod config;
mod error;
mod events;
mod menu;
mod navbar;
mod timer;

pub use changes::NavChanges;
pub use commander::{NavigationCommander, Transition};
pub use config::NavConfig;
pub use error::NavError;
pub use events::{EventKind, EventSource, ListenerId, ListenerSet};
pub use menu::{HoverMenu, MenuState};
pub use navbar::NavBar;
pub use timer::{TimerId, Timers, VirtualTimers};
