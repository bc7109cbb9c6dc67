// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full navigation bar session on a headless page.
//!
//! Scrolls through the page, resizes the viewport, and clicks nav items with
//! the fade transition, printing the observable state after every event.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p signpost_demos --example navbar_session`

use std::time::Duration;

use kurbo::{Rect, Size};
use signpost_nav::{ListenerSet, NavBar, NavChanges, NavConfig, Transition, VirtualTimers};
use signpost_sections::NavItem;
use signpost_sections::headless::{ElementId, HeadlessPage};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Section {
    Home,
    Services,
    Resources,
    About,
    Faq,
    Contact,
}

const SECTIONS: [(Section, &str, f64); 6] = [
    (Section::Home, "HOME", 900.0),
    (Section::Services, "OUR SERVICES", 1100.0),
    (Section::Resources, "RESOURCES", 700.0),
    (Section::About, "ABOUT US", 800.0),
    (Section::Faq, "FAQ", 1000.0),
    (Section::Contact, "CONTACT US", 1200.0),
];

fn report(event: &str, changes: NavChanges, bar: &NavBar<Section, ElementId>) {
    println!(
        "{event:<28} changes={changes:?}\n    active={:?} indicator={:?} menu={:?} overlay={} scrolled={}",
        bar.active(),
        bar.indicator(),
        bar.menu_state(),
        bar.overlay_visible(),
        bar.is_scrolled(),
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut page = HeadlessPage::new(Size::new(1280.0, 720.0));
    let mut top = 0.0;
    for (key, _, height) in SECTIONS {
        page.add_section(key, top, height);
        top += height;
    }

    // Fixed bar: container plus one item per section, widths follow label length.
    let container = page.add_fixed(Rect::new(420.0, 24.0, 1240.0, 48.0));
    let mut x = 420.0;
    let mut items = Vec::new();
    for (key, label, _) in SECTIONS {
        let width = label.len() as f64 * 9.0;
        items.push((key, page.add_fixed(Rect::new(x, 24.0, x + width, 48.0))));
        x += width + 40.0;
    }

    let config = NavConfig {
        transition: Transition::FADE,
        ..Default::default()
    };
    let nav_items = SECTIONS
        .iter()
        .map(|&(key, label, _)| NavItem::new(key, label));
    let mut bar = NavBar::new(nav_items, &config).expect("valid navigation config");
    let mut timers = VirtualTimers::new();
    let mut events = ListenerSet::new();

    bar.set_indicator_elements(Some(container), items.iter().copied(), &page);
    let changes = bar.activate(&page, &mut events);
    report("activate", changes, &bar);

    for offset in [400.0, 820.0, 1900.0, 2700.0, 4400.0, 9000.0] {
        page.set_scroll(offset);
        let changes = bar.on_scroll(&page);
        report(&format!("scroll to {offset}"), changes, &bar);
    }

    page.set_viewport_size(Size::new(1024.0, 720.0));
    page.set_rect(container, Rect::new(200.0, 24.0, 1000.0, 48.0));
    for (i, (_, id)) in items.iter().enumerate() {
        let x = 200.0 + i as f64 * 130.0;
        page.set_rect(*id, Rect::new(x, 24.0, x + 110.0, 48.0));
    }
    let changes = bar.on_resize(&page);
    report("resize to 1024", changes, &bar);

    for target in [Section::Services, Section::Faq, Section::Home] {
        let changes = bar.navigate_to(target, &mut page, &mut timers);
        report(&format!("click {target:?}"), changes, &bar);
        // Let the fade run, delivering a scroll event after each timer.
        let until = timers.now() + Duration::from_millis(400);
        while let Some(id) = timers.next_due(until) {
            let mut changes = bar.on_timer(id, &mut page, &mut timers);
            changes |= bar.on_scroll(&page);
            report(&format!("  timer @{:?}", timers.now()), changes, &bar);
        }
        assert_eq!(bar.active(), target);
    }

    let changes = bar.teardown(&mut timers, &mut events);
    report("teardown", changes, &bar);
    assert!(events.is_empty());
    assert_eq!(timers.pending(), 0);
}
