// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Containment scan vs. visibility ratio on the same page.
//!
//! The strategy is loaded from a JSON config, then both strategies are
//! compared at a range of scroll offsets.
//!
//! Run:
//! - `cargo run -p signpost_demos --example spy_strategies`

use kurbo::Size;
use signpost_nav::NavConfig;
use signpost_sections::headless::HeadlessPage;
use signpost_sections::{NavItem, SectionRegistry, Viewport};
use signpost_spy::{ActiveResolver, ContainmentScan, ScrollFrame, SpyStrategy, VisibilityRatio};

fn main() {
    let config: NavConfig =
        serde_json::from_str(r#"{ "header_offset": 72.0, "probe_epsilon": 8.0 }"#)
            .expect("valid config json");
    config.validate().expect("valid navigation config");

    let registry = SectionRegistry::new([
        NavItem::new("hero", "HOME"),
        NavItem::new("services", "OUR SERVICES"),
        NavItem::new("faq", "FAQ"),
        NavItem::new("contact", "CONTACT US"),
    ])
    .expect("unique section keys");

    // A tall hero, two equal sections, and a short footer-like contact block.
    let mut page = HeadlessPage::new(Size::new(1280.0, 720.0));
    page.add_section("hero", 0.0, 1400.0);
    page.add_section("services", 1400.0, 700.0);
    page.add_section("faq", 2100.0, 700.0);
    page.add_section("contact", 2800.0, 400.0);

    let strategies = [
        SpyStrategy::Containment(ContainmentScan::new(
            config.header_offset,
            config.probe_epsilon,
        )),
        SpyStrategy::Visibility(VisibilityRatio::default()),
    ];

    println!("{:>8}  {:<12} {:<12}", "offset", "containment", "visibility");
    for offset in (0..=2600).step_by(200) {
        page.set_scroll(offset as f64);
        let frame = ScrollFrame::new(page.scroll_offset(), page.viewport_size().height);
        let table = registry.sample(&page);
        let [containment, visibility] =
            strategies.map(|s| s.resolve(frame, &table).unwrap_or("(keep)"));
        println!("{:>8}  {:<12} {:<12}", frame.offset, containment, visibility);
    }
}
