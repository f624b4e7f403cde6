//! Property-based tests for scroll routing and notification timing
//!
//! Uses proptest to check the invariants that must hold for any layout.

use std::time::Duration;

use folio_core::{NotificationCenter, ScrollRouter, ScrollSettings, Section, Severity};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Contiguous sections stacked from the top of the document.
fn stacked_sections_strategy() -> impl Strategy<Value = Vec<Section>> {
    prop::collection::vec(1.0f64..2000.0, 1..8).prop_map(|heights| {
        let mut top = 0.0;
        heights
            .into_iter()
            .enumerate()
            .map(|(i, height)| {
                let section = Section::new(format!("s{}", i), top, height);
                top += height;
                section
            })
            .collect()
    })
}

/// Arbitrary, possibly overlapping sections.
fn loose_sections_strategy() -> impl Strategy<Value = Vec<Section>> {
    prop::collection::vec((0.0f64..5000.0, 0.0f64..2000.0), 0..8).prop_map(|boxes| {
        boxes
            .into_iter()
            .enumerate()
            .map(|(i, (top, height))| Section::new(format!("s{}", i), top, height))
            .collect()
    })
}

fn router_for(sections: &[Section]) -> ScrollRouter {
    ScrollRouter::new(
        ScrollSettings::default(),
        sections.iter().map(|s| s.id.clone()).collect(),
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Toggles are strict comparisons against the thresholds
    #[test]
    fn toggles_follow_thresholds(offset in -100.0f64..1000.0) {
        let router = ScrollRouter::new(ScrollSettings::default(), Vec::new());
        let state = router.state_for(offset);
        prop_assert_eq!(state.is_scrolled, offset > 50.0);
        prop_assert_eq!(state.show_scroll_top, offset > 300.0);
    }

    /// Never more than one nav link is active
    #[test]
    fn at_most_one_active_link(sections in loose_sections_strategy(), offset in -200.0f64..8000.0) {
        let mut router = router_for(&sections);
        router.on_scroll(offset, &sections);
        let active = router.nav_links().iter().filter(|l| l.active).count();
        prop_assert!(active <= 1);
    }

    /// The active link is always the last section containing the offset
    #[test]
    fn active_is_last_containing_section(sections in loose_sections_strategy(), offset in -200.0f64..8000.0) {
        let mut router = router_for(&sections);
        let update = router.on_scroll(offset, &sections);
        let expected = sections
            .iter()
            .rev()
            .find(|s| s.contains(offset, 100.0))
            .map(|s| s.id.clone());
        prop_assert_eq!(update.active, expected);
    }

    /// On a page without gaps every offset inside the page has an active link
    #[test]
    fn stacked_page_is_fully_covered(sections in stacked_sections_strategy(), fraction in 0.0f64..1.0) {
        let last = sections.last().unwrap();
        let page_end = last.top + last.height - 100.0;
        let offset = -99.0 + fraction * (page_end + 99.0);
        let mut router = router_for(&sections);
        prop_assert!(router.on_scroll(offset, &sections).active.is_some());
    }

    /// Whatever the sequence of notify calls, only the last one survives and
    /// it is gone exactly 5300 ms after it was shown
    #[test]
    fn last_notification_wins(gaps in prop::collection::vec(0u64..6000, 1..10)) {
        let mut center = NotificationCenter::default();
        let mut now = 0;
        let mut last = None;
        for (i, gap) in gaps.iter().enumerate() {
            now += gap;
            center.tick(Duration::from_millis(now));
            let (id, _) = center.notify(format!("m{}", i), Severity::Info, Duration::from_millis(now));
            last = Some((id, i, now));
        }
        let (id, index, shown) = last.unwrap();
        let current = center.current().unwrap();
        prop_assert_eq!(current.id, id);
        prop_assert_eq!(current.message.clone(), format!("m{}", index));

        center.tick(Duration::from_millis(shown + 5299));
        prop_assert!(!center.is_idle());
        center.tick(Duration::from_millis(shown + 5300));
        prop_assert!(center.is_idle());
    }
}
