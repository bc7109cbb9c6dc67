// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Signpost Sections: the ordered set of navigable sections of a page.
//!
//! Signpost Sections is the leaf of the Signpost navigation stack.
//!
//! - Declares the navigable sections as ordered [`NavItem`]s with unique keys.
//! - Resolves each key to its live [`SectionBounds`] in document coordinates through a host.
//! - Treats absent sections as non-participating instead of failing.
//!
//! ## Host model
//!
//! The crate does not render or lay out anything. A host implements
//! [`Viewport`] (element rectangles, scroll offset, programmatic scrolling) and
//! [`SectionLookup`] (section key → element). [`headless::HeadlessPage`] is a
//! complete in-memory host for tests and demos.
//!
//! Layout is never cached: every call to [`SectionRegistry::locate`] or
//! [`SectionRegistry::sample`] measures the document again.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::Size;
//! use signpost_sections::headless::HeadlessPage;
//! use signpost_sections::{NavItem, SectionBounds, SectionRegistry};
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq)]
//! enum Section { Home, Services, Contact }
//!
//! let registry = SectionRegistry::new([
//!     NavItem::new(Section::Home, "HOME"),
//!     NavItem::new(Section::Services, "OUR SERVICES"),
//!     NavItem::new(Section::Contact, "CONTACT US"),
//! ])
//! .unwrap();
//!
//! let mut page = HeadlessPage::new(Size::new(1280.0, 720.0));
//! page.add_section(Section::Home, 0.0, 800.0);
//! page.add_section(Section::Services, 800.0, 800.0);
//! page.set_scroll(300.0);
//!
//! assert_eq!(registry.locate(&Section::Services, &page), Some(SectionBounds::new(800.0, 800.0)));
//! // The contact section is not on this page; it is skipped, not an error.
//! assert_eq!(registry.locate(&Section::Contact, &page), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod headless;
mod host;
mod registry;
mod types;

pub use host::{SectionLookup, Viewport};
pub use registry::{RegistryError, SectionRegistry};
pub use types::{NavItem, ScrollBehavior, SectionBounds, SectionSample};
