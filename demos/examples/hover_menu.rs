// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover menu timing.
//!
//! Moves the pointer from the trigger to the panel (a short leave/enter gap),
//! then away for good, and finally picks an item from the open menu.
//!
//! Run:
//! - `cargo run -p signpost_demos --example hover_menu`

use std::time::Duration;

use kurbo::Size;
use signpost_nav::{ListenerSet, MenuState, NavBar, NavConfig, VirtualTimers};
use signpost_sections::NavItem;
use signpost_sections::headless::{ElementId, HeadlessPage};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Section {
    Home,
    Contact,
}

fn settle(
    bar: &mut NavBar<Section, ElementId>,
    page: &mut HeadlessPage<Section>,
    timers: &mut VirtualTimers,
    ms: u64,
) {
    let until = timers.now() + Duration::from_millis(ms);
    while let Some(id) = timers.next_due(until) {
        bar.on_timer(id, page, timers);
    }
    println!("  t={:?}: menu={:?}", timers.now(), bar.menu_state());
}

fn main() {
    let mut page = HeadlessPage::new(Size::new(390.0, 844.0));
    page.add_section(Section::Home, 0.0, 900.0);
    page.add_section(Section::Contact, 900.0, 1400.0);

    let mut bar = NavBar::new(
        [
            NavItem::new(Section::Home, "HOME"),
            NavItem::new(Section::Contact, "CONTACT US"),
        ],
        &NavConfig::default(),
    )
    .expect("valid navigation config");
    let mut timers = VirtualTimers::new();
    let mut events = ListenerSet::new();
    bar.activate(&page, &mut events);

    println!("== Trigger to panel ==");
    bar.on_pointer_enter(&mut timers);
    bar.on_pointer_leave(&mut timers);
    settle(&mut bar, &mut page, &mut timers, 60);
    bar.on_pointer_enter(&mut timers);
    settle(&mut bar, &mut page, &mut timers, 500);
    assert_eq!(bar.menu_state(), MenuState::Open);

    println!("== Pointer leaves ==");
    bar.on_pointer_leave(&mut timers);
    settle(&mut bar, &mut page, &mut timers, 149);
    settle(&mut bar, &mut page, &mut timers, 1);
    assert_eq!(bar.menu_state(), MenuState::Closed);

    println!("== Click open, pick an item ==");
    bar.on_menu_click(&mut timers);
    bar.on_pointer_leave(&mut timers);
    bar.navigate_to(Section::Contact, &mut page, &mut timers);
    settle(&mut bar, &mut page, &mut timers, 500);
    assert_eq!(bar.menu_state(), MenuState::Closed);
    assert_eq!(timers.pending(), 0);
}
