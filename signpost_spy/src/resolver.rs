// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-section resolution.
//!
//! ## Overview
//!
//! A resolver maps a scroll snapshot and a bounds table to the section that is
//! "currently viewed". Every strategy implements [`ActiveResolver`], so callers
//! can swap strategies without touching anything that consumes the result.
//!
//! ## Strategies
//!
//! - [`ContainmentScan`] (canonical): probe a point just below the fixed
//!   header; the first section containing it wins, otherwise the last section
//!   whose top is above it, otherwise the first declared section.
//! - [`VisibilityRatio`]: the section with the greatest visible fraction of its
//!   height wins among those above a minimum ratio.
//! - [`SpyStrategy`]: either of the above, chosen at runtime.
//!
//! Rows whose bounds are `None` are skipped by every strategy.

use signpost_sections::SectionSample;

/// Scroll snapshot fed to a resolver.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollFrame {
    /// Vertical document scroll offset.
    pub offset: f64,
    /// Height of the visible viewport.
    pub viewport_height: f64,
}

impl ScrollFrame {
    /// Create a scroll snapshot.
    pub const fn new(offset: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            viewport_height,
        }
    }
}

/// Resolution contract shared by all scroll-spy strategies.
pub trait ActiveResolver<K: Copy> {
    /// Pick the active section for `frame`.
    ///
    /// `sections` is the bounds table in declaration order. Returns `None` when
    /// the strategy has no opinion (empty table, or nothing qualifies); callers
    /// then keep their current active section.
    fn resolve(&self, frame: ScrollFrame, sections: &[SectionSample<K>]) -> Option<K>;
}

impl<K: Copy, R: ActiveResolver<K> + ?Sized> ActiveResolver<K> for &R {
    fn resolve(&self, frame: ScrollFrame, sections: &[SectionSample<K>]) -> Option<K> {
        (**self).resolve(frame, sections)
    }
}

/// Containment scan with a last-seen-admissible fallback.
///
/// ## Semantics
///
/// 1. `probe = offset + header_offset + epsilon`.
/// 2. Scan rows in order; the first row whose `[top, top + height)` contains
///    `probe` is selected immediately.
/// 3. Otherwise the last scanned row with `top <= probe` is selected. This
///    covers gaps between sections and overscroll past the last one.
/// 4. Otherwise (probe above every section) the first declared row is selected.
///
/// For a non-empty table this always returns `Some`. For sections laid out
/// top to bottom in declaration order without overlap, the result never moves
/// backwards as `offset` grows.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContainmentScan {
    /// Height of the fixed header covering the top of the viewport.
    pub header_offset: f64,
    /// Extra tolerance so the probe lands just past the header edge.
    pub epsilon: f64,
}

impl Default for ContainmentScan {
    fn default() -> Self {
        Self {
            header_offset: 96.0,
            epsilon: 10.0,
        }
    }
}

impl ContainmentScan {
    /// Create a scan for a header of `header_offset` pixels and the given tolerance.
    pub const fn new(header_offset: f64, epsilon: f64) -> Self {
        Self {
            header_offset,
            epsilon,
        }
    }

    /// Document coordinate tested for containment at scroll `offset`.
    pub fn probe(&self, offset: f64) -> f64 {
        offset + self.header_offset + self.epsilon
    }
}

impl<K: Copy> ActiveResolver<K> for ContainmentScan {
    fn resolve(&self, frame: ScrollFrame, sections: &[SectionSample<K>]) -> Option<K> {
        let first = sections.first()?.key;
        let probe = self.probe(frame.offset);
        let mut admissible = None;
        for sample in sections {
            let Some(bounds) = sample.bounds else {
                continue;
            };
            if bounds.contains(probe) {
                return Some(sample.key);
            }
            if bounds.top <= probe {
                admissible = Some(sample.key);
            }
        }
        Some(admissible.unwrap_or(first))
    }
}

/// Greatest visible fraction wins.
///
/// For each present section, `ratio = visible_height / height` against the
/// viewport `[offset, offset + viewport_height)`. Sections that do not
/// intersect the viewport, or whose ratio is below `min_ratio`, are ignored.
/// Ties keep the earlier declared section.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VisibilityRatio {
    /// Minimum visible fraction for a section to be considered.
    pub min_ratio: f64,
}

impl Default for VisibilityRatio {
    fn default() -> Self {
        Self { min_ratio: 0.2 }
    }
}

impl VisibilityRatio {
    /// Create a strategy with the given minimum visible fraction.
    pub const fn new(min_ratio: f64) -> Self {
        Self { min_ratio }
    }
}

impl<K: Copy> ActiveResolver<K> for VisibilityRatio {
    fn resolve(&self, frame: ScrollFrame, sections: &[SectionSample<K>]) -> Option<K> {
        let start = frame.offset;
        let end = frame.offset + frame.viewport_height;
        let mut best: Option<(K, f64)> = None;
        for sample in sections {
            let Some(bounds) = sample.bounds else {
                continue;
            };
            if bounds.height <= 0.0 {
                continue;
            }
            let visible = bounds.overlap(start, end);
            if visible <= 0.0 {
                continue;
            }
            let ratio = visible / bounds.height;
            if ratio < self.min_ratio {
                continue;
            }
            if best.is_none_or(|(_, r)| ratio > r) {
                best = Some((sample.key, ratio));
            }
        }
        best.map(|(key, _)| key)
    }
}

/// A resolver strategy chosen at runtime.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SpyStrategy {
    /// See [`ContainmentScan`].
    Containment(ContainmentScan),
    /// See [`VisibilityRatio`].
    Visibility(VisibilityRatio),
}

impl Default for SpyStrategy {
    fn default() -> Self {
        Self::Containment(ContainmentScan::default())
    }
}

impl<K: Copy> ActiveResolver<K> for SpyStrategy {
    fn resolve(&self, frame: ScrollFrame, sections: &[SectionSample<K>]) -> Option<K> {
        match self {
            Self::Containment(s) => s.resolve(frame, sections),
            Self::Visibility(s) => s.resolve(frame, sections),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use signpost_sections::SectionBounds;

    fn stacked(heights: &[f64]) -> Vec<SectionSample<usize>> {
        let mut top = 0.0;
        heights
            .iter()
            .enumerate()
            .map(|(i, &h)| {
                let s = SectionSample::located(i, SectionBounds::new(top, h));
                top += h;
                s
            })
            .collect()
    }

    fn at(offset: f64) -> ScrollFrame {
        ScrollFrame::new(offset, 700.0)
    }

    #[test]
    fn containment_worked_example() {
        // home [0, 800), services [800, 1600), header 96, epsilon 10.
        let table = stacked(&[800.0, 800.0]);
        let scan = ContainmentScan::new(96.0, 10.0);
        assert_eq!(scan.probe(750.0), 856.0);
        assert_eq!(scan.resolve(at(750.0), &table), Some(1));
        assert_eq!(scan.probe(0.0), 106.0);
        assert_eq!(scan.resolve(at(0.0), &table), Some(0));
    }

    #[test]
    fn containment_boundary_is_half_open() {
        let table = stacked(&[800.0, 800.0]);
        let scan = ContainmentScan::new(96.0, 10.0);
        // probe == 800 exactly belongs to the second section.
        assert_eq!(scan.resolve(at(694.0), &table), Some(1));
        assert_eq!(scan.resolve(at(693.0), &table), Some(0));
    }

    #[test]
    fn containment_falls_back_to_last_admissible() {
        // Gap between 500 and 900, then overscroll past the end.
        let table = vec![
            SectionSample::located(0, SectionBounds::new(0.0, 500.0)),
            SectionSample::located(1, SectionBounds::new(900.0, 300.0)),
        ];
        let scan = ContainmentScan::new(0.0, 0.0);
        assert_eq!(scan.resolve(at(600.0), &table), Some(0));
        assert_eq!(scan.resolve(at(5000.0), &table), Some(1));
    }

    #[test]
    fn containment_defaults_to_first_declared() {
        let table = vec![
            SectionSample::missing(0),
            SectionSample::located(1, SectionBounds::new(400.0, 400.0)),
        ];
        let scan = ContainmentScan::new(96.0, 10.0);
        assert_eq!(scan.resolve(at(0.0), &table), Some(0));
        assert_eq!(ActiveResolver::<usize>::resolve(&scan, at(0.0), &[]), None);
    }

    #[test]
    fn containment_skips_missing_sections() {
        let table = vec![
            SectionSample::located(0, SectionBounds::new(0.0, 800.0)),
            SectionSample::missing(1),
            SectionSample::located(2, SectionBounds::new(1600.0, 800.0)),
        ];
        let scan = ContainmentScan::new(96.0, 10.0);
        // Probe in the hole left by the missing section keeps the previous one.
        assert_eq!(scan.resolve(at(1000.0), &table), Some(0));
        assert_eq!(scan.resolve(at(1500.0), &table), Some(2));
    }

    // Every offset resolves to a declared key, and the key never moves backwards.
    #[test]
    fn containment_is_total_and_monotonic() {
        let table = stacked(&[640.0, 1200.0, 300.0, 900.0, 450.0, 800.0]);
        let scan = ContainmentScan::default();
        let mut last = 0;
        for step in 0..5000 {
            let offset = step as f64 * 1.5;
            let key = scan.resolve(at(offset), &table).unwrap();
            assert!(key < table.len());
            assert!(key >= last, "offset {offset} moved back from {last} to {key}");
            last = key;
        }
        assert_eq!(last, table.len() - 1);
    }

    #[test]
    fn visibility_picks_most_visible() {
        let table = stacked(&[800.0, 800.0, 800.0]);
        let ratio = VisibilityRatio::default();
        // Viewport [500, 1200): 300/800 of the first, 400/800 of the second.
        assert_eq!(ratio.resolve(at(500.0), &table), Some(1));
        // Viewport [0, 700): only the first is visible.
        assert_eq!(ratio.resolve(at(0.0), &table), Some(0));
    }

    #[test]
    fn visibility_ties_keep_earlier_section() {
        let table = stacked(&[800.0, 800.0]);
        // Viewport [450, 1150): 350/800 each.
        assert_eq!(VisibilityRatio::default().resolve(at(450.0), &table), Some(0));
    }

    #[test]
    fn visibility_has_no_opinion_below_threshold() {
        // A very tall section never reaches 20% visibility in a 700px viewport.
        let table = stacked(&[5000.0]);
        assert_eq!(VisibilityRatio::default().resolve(at(100.0), &table), None);
        assert_eq!(VisibilityRatio::new(0.1).resolve(at(100.0), &table), Some(0));
    }

    #[test]
    fn strategy_dispatches() {
        let table = stacked(&[800.0, 800.0]);
        let c = SpyStrategy::default();
        let v = SpyStrategy::Visibility(VisibilityRatio::default());
        assert_eq!(c.resolve(at(750.0), &table), Some(1));
        // Viewport [750, 1450): 50/800 vs 650/800.
        assert_eq!(v.resolve(at(750.0), &table), Some(1));
        assert_eq!(v.resolve(at(200.0), &table), Some(0));
    }
}
