// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigation bar: wires events to the spy, the indicator, the menu, and the commander.
//!
//! ## Event flow
//!
//! - Scroll: resolve the active section; if it changed, re-measure the indicator
//!   in the same handler so the indicator never paints at a stale position.
//! - Resize: re-measure the indicator for the current active section. The active
//!   section itself is left alone.
//! - Pointer enter/leave and trigger clicks: drive the [`HoverMenu`].
//! - Item click: [`NavigationCommander::navigate_to`]. The resulting scroll
//!   events converge the active section; the click never sets it directly.
//! - Timers: routed to the menu or the commander by id.
//!
//! ## Ownership
//!
//! The active section has one writer (the scroll handler). The indicator
//! geometry has one writer (the tracker). Both are read through getters.

use alloc::vec::Vec;
use core::fmt::Debug;

use signpost_sections::{NavItem, SectionLookup, SectionRegistry, Viewport};
use signpost_spy::{ActiveResolver, ContainmentScan, IndicatorGeometry, IndicatorTracker, ScrollFrame};

use crate::changes::NavChanges;
use crate::commander::NavigationCommander;
use crate::config::NavConfig;
use crate::error::NavError;
use crate::events::{EventKind, EventSource, ListenerId};
use crate::menu::{HoverMenu, MenuState};
use crate::timer::{TimerId, Timers};

/// Scroll-synchronized navigation bar state.
///
/// `K` is the section key, `E` the host's element handle, and `R` the
/// active-section strategy.
///
/// ## Lifecycle
///
/// - [`activate`](Self::activate) registers listeners once and establishes the
///   initial state.
/// - [`teardown`](Self::teardown) unregisters them and cancels every pending timer.
/// - While inactive, every handler is a no-op returning no changes.
pub struct NavBar<K, E, R = ContainmentScan> {
    registry: SectionRegistry<K>,
    resolver: R,
    indicator: IndicatorTracker<K, E>,
    menu: HoverMenu,
    commander: NavigationCommander<K>,
    active: K,
    scrolled: bool,
    scrolled_threshold: f64,
    listeners: Vec<ListenerId>,
    attached: bool,
}

impl<K: Debug, E, R> Debug for NavBar<K, E, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NavBar")
            .field("active", &self.active)
            .field("menu", &self.menu.state())
            .field("scrolled", &self.scrolled)
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq + Debug, E: Copy> NavBar<K, E> {
    /// Create a navigation bar using the containment scan configured by `config`.
    pub fn new(
        items: impl IntoIterator<Item = NavItem<K>>,
        config: &NavConfig,
    ) -> Result<Self, NavError> {
        let resolver = ContainmentScan::new(config.header_offset, config.probe_epsilon);
        Self::with_resolver(items, config, resolver)
    }
}

impl<K: Copy + Eq + Debug, E: Copy, R: ActiveResolver<K>> NavBar<K, E, R> {
    /// Create a navigation bar with a custom active-section strategy.
    pub fn with_resolver(
        items: impl IntoIterator<Item = NavItem<K>>,
        config: &NavConfig,
        resolver: R,
    ) -> Result<Self, NavError> {
        config.validate()?;
        let registry = SectionRegistry::new(items)?;
        let active = registry.first_key();
        Ok(Self {
            registry,
            resolver,
            indicator: IndicatorTracker::new(),
            menu: HoverMenu::new(config.close_delay),
            commander: NavigationCommander::new(config.header_offset, config.transition),
            active,
            scrolled: false,
            scrolled_threshold: config.scrolled_threshold,
            listeners: Vec::new(),
            attached: false,
        })
    }

    /// Declared sections.
    pub fn registry(&self) -> &SectionRegistry<K> {
        &self.registry
    }

    /// The active-section strategy.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// The section currently in view.
    pub fn active(&self) -> K {
        self.active
    }

    /// Indicator position and width relative to the item container.
    pub fn indicator(&self) -> IndicatorGeometry {
        self.indicator.geometry()
    }

    /// Menu state.
    pub fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    /// Whether the menu panel is open.
    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Whether the transition overlay is showing.
    pub fn overlay_visible(&self) -> bool {
        self.commander.overlay_visible()
    }

    /// Whether the page is scrolled past the threshold.
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Whether listeners are registered.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Register listeners and compute the initial state.
    ///
    /// Calling this on an attached bar does nothing.
    pub fn activate<H, S>(&mut self, host: &H, events: &mut S) -> NavChanges
    where
        H: Viewport<Element = E> + SectionLookup<K, E>,
        S: EventSource,
    {
        if self.attached {
            return NavChanges::empty();
        }
        self.listeners
            .extend(EventKind::ALL.iter().map(|&kind| events.listen(kind)));
        self.attached = true;
        tracing::debug!(listeners = self.listeners.len(), "navigation bar attached");

        let mut changes = self.on_scroll(host);
        if self.indicator.recompute(&self.active, host) {
            changes |= NavChanges::INDICATOR;
        }
        changes
    }

    /// Unregister listeners and cancel pending timers.
    pub fn teardown<T, S>(&mut self, timers: &mut T, events: &mut S) -> NavChanges
    where
        T: Timers,
        S: EventSource,
    {
        if !self.attached {
            return NavChanges::empty();
        }
        for id in self.listeners.drain(..) {
            events.unlisten(id);
        }
        self.menu.teardown(timers);
        let changes = self.commander.teardown(timers);
        self.attached = false;
        tracing::debug!("navigation bar detached");
        changes
    }

    /// Replace the item elements measured by the indicator and re-measure.
    ///
    /// Call whenever the set of rendered nav items changes. Works while
    /// inactive too, so hosts can register elements before activation.
    pub fn set_indicator_elements<H>(
        &mut self,
        container: Option<E>,
        items: impl IntoIterator<Item = (K, E)>,
        host: &H,
    ) -> NavChanges
    where
        H: Viewport<Element = E>,
    {
        self.indicator.set_elements(container, items);
        if self.indicator.recompute(&self.active, host) {
            NavChanges::INDICATOR
        } else {
            NavChanges::empty()
        }
    }

    /// Document scrolled.
    pub fn on_scroll<H>(&mut self, host: &H) -> NavChanges
    where
        H: Viewport<Element = E> + SectionLookup<K, E>,
    {
        if !self.attached {
            return NavChanges::empty();
        }
        let mut changes = NavChanges::empty();
        let offset = host.scroll_offset();

        let scrolled = offset > self.scrolled_threshold;
        if scrolled != self.scrolled {
            self.scrolled = scrolled;
            changes |= NavChanges::SCROLLED;
        }

        let frame = ScrollFrame::new(offset, host.viewport_size().height);
        let table = self.registry.sample(host);
        let Some(next) = self.resolver.resolve(frame, &table) else {
            return changes;
        };
        if next != self.active {
            tracing::debug!(from = ?self.active, to = ?next, offset, "active section changed");
            self.active = next;
            changes |= NavChanges::ACTIVE;
            if self.indicator.recompute(&self.active, host) {
                changes |= NavChanges::INDICATOR;
            }
        }
        changes
    }

    /// Viewport resized.
    pub fn on_resize<H>(&mut self, host: &H) -> NavChanges
    where
        H: Viewport<Element = E>,
    {
        if self.attached && self.indicator.recompute(&self.active, host) {
            NavChanges::INDICATOR
        } else {
            NavChanges::empty()
        }
    }

    /// Pointer entered the menu trigger.
    pub fn on_pointer_enter<T: Timers>(&mut self, timers: &mut T) -> NavChanges {
        if self.attached && self.menu.pointer_enter(timers) {
            NavChanges::MENU
        } else {
            NavChanges::empty()
        }
    }

    /// Pointer left the menu trigger.
    pub fn on_pointer_leave<T: Timers>(&mut self, timers: &mut T) -> NavChanges {
        if self.attached {
            self.menu.pointer_leave(timers);
        }
        NavChanges::empty()
    }

    /// Menu trigger clicked.
    pub fn on_menu_click<T: Timers>(&mut self, timers: &mut T) -> NavChanges {
        if self.attached && self.menu.toggle(timers) {
            NavChanges::MENU
        } else {
            NavChanges::empty()
        }
    }

    /// A nav item (or the logo) was selected.
    pub fn navigate_to<H, T>(&mut self, key: K, host: &mut H, timers: &mut T) -> NavChanges
    where
        H: Viewport<Element = E> + SectionLookup<K, E>,
        T: Timers,
    {
        if !self.attached {
            return NavChanges::empty();
        }
        tracing::debug!(?key, "navigation requested");
        self.commander
            .navigate_to(key, &self.registry, host, timers, &mut self.menu)
    }

    /// A timer scheduled through `timers` fired.
    pub fn on_timer<H, T>(&mut self, id: TimerId, host: &mut H, timers: &mut T) -> NavChanges
    where
        H: Viewport<Element = E> + SectionLookup<K, E>,
        T: Timers,
    {
        if !self.attached {
            return NavChanges::empty();
        }
        if self.menu.owns_timer(id) {
            if self.menu.on_timer(id) {
                return NavChanges::MENU;
            }
            return NavChanges::empty();
        }
        if self.commander.owns_timer(id) {
            return self.commander.on_timer(id, &self.registry, host, timers);
        }
        tracing::trace!(timer = id.raw(), "stale timer ignored");
        NavChanges::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commander::Transition;
    use crate::events::ListenerSet;
    use crate::timer::VirtualTimers;
    use alloc::vec;
    use core::time::Duration;
    use kurbo::{Rect, Size};
    use signpost_sections::headless::{ElementId, HeadlessPage};
    use signpost_sections::{RegistryError, ScrollBehavior};
    use signpost_spy::VisibilityRatio;

    const MS: Duration = Duration::from_millis(1);

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    enum S {
        Home,
        Services,
        Resources,
        About,
        Faq,
        Contact,
    }

    const ALL: [S; 6] = [S::Home, S::Services, S::Resources, S::About, S::Faq, S::Contact];

    fn items() -> Vec<NavItem<S>> {
        vec![
            NavItem::new(S::Home, "HOME"),
            NavItem::new(S::Services, "OUR SERVICES"),
            NavItem::new(S::Resources, "RESOURCES"),
            NavItem::new(S::About, "ABOUT US"),
            NavItem::new(S::Faq, "FAQ"),
            NavItem::new(S::Contact, "CONTACT US"),
        ]
    }

    struct Site {
        page: HeadlessPage<S>,
        timers: VirtualTimers,
        events: ListenerSet,
        container: ElementId,
        nav_items: Vec<ElementId>,
    }

    impl Site {
        // Six 800px sections and a fixed bar whose items are 100px wide with 20px gaps.
        fn new() -> Self {
            let mut page = HeadlessPage::new(Size::new(1280.0, 700.0));
            for (i, key) in ALL.iter().enumerate() {
                page.add_section(*key, i as f64 * 800.0, 800.0);
            }
            let container = page.add_fixed(Rect::new(500.0, 20.0, 1220.0, 44.0));
            let nav_items = (0..ALL.len())
                .map(|i| {
                    let x = 500.0 + i as f64 * 120.0;
                    page.add_fixed(Rect::new(x, 20.0, x + 100.0, 44.0))
                })
                .collect();
            Self {
                page,
                timers: VirtualTimers::new(),
                events: ListenerSet::new(),
                container,
                nav_items,
            }
        }

        fn bar_with(&mut self, config: &NavConfig) -> NavBar<S, ElementId> {
            let mut bar = NavBar::new(items(), config).unwrap();
            let pairs: Vec<_> = ALL.iter().copied().zip(self.nav_items.iter().copied()).collect();
            bar.set_indicator_elements(Some(self.container), pairs, &self.page);
            bar.activate(&self.page, &mut self.events);
            bar
        }

        fn bar(&mut self) -> NavBar<S, ElementId> {
            self.bar_with(&NavConfig::default())
        }

        fn scroll<R: ActiveResolver<S>>(
            &mut self,
            bar: &mut NavBar<S, ElementId, R>,
            offset: f64,
        ) -> NavChanges {
            self.page.set_scroll(offset);
            bar.on_scroll(&self.page)
        }

        // Fire timers one by one up to `until`, emitting a scroll event after each,
        // the way a browser reports the programmatic scroll.
        fn run_until<R: ActiveResolver<S>>(
            &mut self,
            bar: &mut NavBar<S, ElementId, R>,
            until: Duration,
        ) -> NavChanges {
            let mut changes = NavChanges::empty();
            while let Some(id) = self.timers.next_due(until) {
                changes |= bar.on_timer(id, &mut self.page, &mut self.timers);
                changes |= bar.on_scroll(&self.page);
            }
            changes
        }
    }

    fn underline(index: usize) -> IndicatorGeometry {
        IndicatorGeometry {
            left: index as f64 * 120.0,
            width: 100.0,
        }
    }

    #[test]
    fn activation_establishes_initial_state() {
        let mut site = Site::new();
        let bar = site.bar();
        assert!(bar.is_attached());
        assert_eq!(bar.active(), S::Home);
        assert_eq!(bar.indicator(), underline(0));
        assert!(!bar.is_scrolled());
        for kind in EventKind::ALL {
            assert!(site.events.is_listening(kind));
        }
        assert_eq!(site.events.len(), 4);
    }

    #[test]
    fn activation_mid_page_resolves_eagerly() {
        let mut site = Site::new();
        site.page.set_scroll(2500.0);
        let bar = site.bar();
        assert_eq!(bar.active(), S::About);
        assert_eq!(bar.indicator(), underline(3));
        assert!(bar.is_scrolled());
    }

    #[test]
    fn activate_twice_registers_once() {
        let mut site = Site::new();
        let mut bar = site.bar();
        assert!(bar.activate(&site.page, &mut site.events).is_empty());
        assert_eq!(site.events.len(), 4);
    }

    #[test]
    fn scroll_updates_active_and_indicator_together() {
        let mut site = Site::new();
        let mut bar = site.bar();
        let changes = site.scroll(&mut bar, 750.0);
        assert_eq!(
            changes,
            NavChanges::ACTIVE | NavChanges::INDICATOR | NavChanges::SCROLLED
        );
        assert_eq!(bar.active(), S::Services);
        assert_eq!(bar.indicator(), underline(1));

        assert_eq!(site.scroll(&mut bar, 760.0), NavChanges::empty());
        assert_eq!(
            site.scroll(&mut bar, 0.0),
            NavChanges::ACTIVE | NavChanges::INDICATOR | NavChanges::SCROLLED
        );
        assert_eq!(bar.active(), S::Home);
    }

    #[test]
    fn scrolled_flag_has_a_threshold() {
        let mut site = Site::new();
        let mut bar = site.bar();
        assert!(site.scroll(&mut bar, 10.0).is_empty());
        assert!(!bar.is_scrolled());
        assert_eq!(site.scroll(&mut bar, 11.0), NavChanges::SCROLLED);
        assert!(bar.is_scrolled());
    }

    #[test]
    fn resize_remeasures_without_changing_active() {
        let mut site = Site::new();
        let mut bar = site.bar();
        site.scroll(&mut bar, 1700.0);
        assert_eq!(bar.active(), S::Resources);

        // Narrower viewport: the bar re-flows, the page does not scroll.
        site.page.set_viewport_size(Size::new(900.0, 700.0));
        site.page.set_rect(site.container, Rect::new(300.0, 20.0, 880.0, 44.0));
        site.page.set_rect(site.nav_items[2], Rect::new(480.0, 20.0, 560.0, 44.0));
        assert_eq!(bar.on_resize(&site.page), NavChanges::INDICATOR);
        assert_eq!(bar.active(), S::Resources);
        assert_eq!(
            bar.indicator(),
            IndicatorGeometry {
                left: 180.0,
                width: 80.0
            }
        );
        assert!(bar.on_resize(&site.page).is_empty());
    }

    #[test]
    fn indicator_waits_for_unmounted_item() {
        let mut site = Site::new();
        let mut bar = site.bar();
        site.page.unmount(site.nav_items[1]);
        assert_eq!(site.scroll(&mut bar, 900.0), NavChanges::ACTIVE | NavChanges::SCROLLED);
        assert_eq!(bar.indicator(), underline(0));

        site.page.mount(site.nav_items[1]);
        assert_eq!(bar.on_resize(&site.page), NavChanges::INDICATOR);
        assert_eq!(bar.indicator(), underline(1));
    }

    #[test]
    fn navigate_then_scroll_round_trips() {
        let mut site = Site::new();
        let mut bar = site.bar();
        for key in ALL.iter().rev().chain(ALL.iter()) {
            bar.navigate_to(*key, &mut site.page, &mut site.timers);
            // The commander never writes the active section itself.
            bar.on_scroll(&site.page);
            assert_eq!(bar.active(), *key);
            assert_eq!(bar.indicator(), underline(bar.registry().position(key).unwrap()));
        }
        assert!(
            site.page
                .scroll_requests()
                .iter()
                .all(|&(_, b)| b == ScrollBehavior::Smooth)
        );
    }

    #[test]
    fn navigate_does_not_set_active_before_scroll_event() {
        let mut site = Site::new();
        let mut bar = site.bar();
        let changes = bar.navigate_to(S::Faq, &mut site.page, &mut site.timers);
        assert!(!changes.contains(NavChanges::ACTIVE));
        assert_eq!(bar.active(), S::Home);
        assert_eq!(site.page.scroll_offset(), 3104.0);
    }

    #[test]
    fn navigate_closes_open_menu_despite_timers() {
        let mut site = Site::new();
        let mut bar = site.bar();
        assert_eq!(bar.on_pointer_enter(&mut site.timers), NavChanges::MENU);
        bar.on_pointer_leave(&mut site.timers);
        assert_eq!(site.timers.pending(), 1);

        let changes = bar.navigate_to(S::Contact, &mut site.page, &mut site.timers);
        assert!(changes.contains(NavChanges::MENU));
        assert!(!bar.is_menu_open());
        assert_eq!(site.timers.pending(), 0);

        // Missing sections still close the menu.
        site.page.remove_section(S::About);
        bar.on_menu_click(&mut site.timers);
        assert!(bar.is_menu_open());
        let before = site.page.scroll_offset();
        assert_eq!(
            bar.navigate_to(S::About, &mut site.page, &mut site.timers),
            NavChanges::MENU
        );
        assert!(!bar.is_menu_open());
        assert_eq!(site.page.scroll_offset(), before);
    }

    #[test]
    fn hover_close_delay_routes_through_timers() {
        let mut site = Site::new();
        let mut bar = site.bar();
        bar.on_pointer_enter(&mut site.timers);
        bar.on_pointer_leave(&mut site.timers);
        assert!(site.run_until(&mut bar, 100 * MS).is_empty());
        bar.on_pointer_enter(&mut site.timers);
        bar.on_pointer_leave(&mut site.timers);
        assert!(site.run_until(&mut bar, 249 * MS).is_empty());
        assert_eq!(bar.menu_state(), MenuState::Open);
        assert_eq!(site.run_until(&mut bar, 250 * MS), NavChanges::MENU);
        assert_eq!(bar.menu_state(), MenuState::Closed);
    }

    #[test]
    fn fade_transition_converges() {
        let mut site = Site::new();
        let config = NavConfig {
            transition: Transition::FADE,
            ..Default::default()
        };
        let mut bar = site.bar_with(&config);
        assert_eq!(
            bar.navigate_to(S::About, &mut site.page, &mut site.timers),
            NavChanges::OVERLAY
        );
        assert!(bar.overlay_visible());
        assert_eq!(bar.active(), S::Home);

        let changes = site.run_until(&mut bar, 80 * MS);
        assert!(changes.contains(NavChanges::ACTIVE));
        assert_eq!(bar.active(), S::About);
        assert!(bar.overlay_visible());

        assert_eq!(site.run_until(&mut bar, 330 * MS), NavChanges::OVERLAY);
        assert!(!bar.overlay_visible());
    }

    #[test]
    fn teardown_unregisters_and_cancels() {
        let mut site = Site::new();
        let config = NavConfig {
            transition: Transition::FADE,
            ..Default::default()
        };
        let mut bar = site.bar_with(&config);
        bar.on_pointer_enter(&mut site.timers);
        bar.on_pointer_leave(&mut site.timers);
        bar.navigate_to(S::Faq, &mut site.page, &mut site.timers);
        assert_eq!(site.timers.pending(), 1);

        assert_eq!(
            bar.teardown(&mut site.timers, &mut site.events),
            NavChanges::OVERLAY
        );
        assert!(site.events.is_empty());
        assert_eq!(site.timers.pending(), 0);
        assert!(!bar.is_attached());

        // Handlers against a torn-down bar do nothing.
        assert!(site.scroll(&mut bar, 3000.0).is_empty());
        assert_eq!(bar.active(), S::Home);
        assert!(bar.on_pointer_enter(&mut site.timers).is_empty());
        assert!(bar.navigate_to(S::Home, &mut site.page, &mut site.timers).is_empty());
        assert!(bar.teardown(&mut site.timers, &mut site.events).is_empty());
    }

    #[test]
    fn visibility_strategy_keeps_current_without_opinion() {
        let mut site = Site::new();
        let config = NavConfig::default();
        let mut bar: NavBar<S, ElementId, VisibilityRatio> =
            NavBar::with_resolver(items(), &config, VisibilityRatio::new(0.9)).unwrap();
        bar.activate(&site.page, &mut site.events);
        assert_eq!(bar.active(), S::Home);

        // [800, 1500): 700/800 of services, below 0.9.
        assert_eq!(site.scroll(&mut bar, 800.0), NavChanges::SCROLLED);
        assert_eq!(bar.active(), S::Home);
        // [1650, 2350): 700/800 of resources, still nothing qualifies.
        assert!(site.scroll(&mut bar, 1650.0).is_empty());
        assert_eq!(bar.active(), S::Home);
        assert_eq!(bar.resolver().min_ratio, 0.9);
    }

    #[test]
    fn missing_sections_do_not_break_scanning() {
        let mut site = Site::new();
        site.page.remove_section(S::Resources);
        let mut bar = site.bar();
        site.scroll(&mut bar, 1700.0);
        // Falls back to the last section above the probe.
        assert_eq!(bar.active(), S::Services);
        site.scroll(&mut bar, 2500.0);
        assert_eq!(bar.active(), S::About);
    }

    #[test]
    fn construction_errors() {
        let bad = NavConfig {
            scrolled_threshold: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            NavBar::<S, ElementId>::new(items(), &bad),
            Err(NavError::InvalidConfig {
                field: "scrolled_threshold",
                ..
            })
        ));
        let dup = vec![NavItem::new(S::Faq, "FAQ"), NavItem::new(S::Faq, "FAQ")];
        assert!(matches!(
            NavBar::<S, ElementId>::new(dup, &NavConfig::default()),
            Err(NavError::Registry(RegistryError::DuplicateKey { first: 0, second: 1 }))
        ));
    }
}
