//! Scroll routing.
//!
//! Runs on every scroll event, with no debouncing: derives the navbar and
//! scroll-to-top toggles from the offset and picks the section whose nav
//! link should be highlighted.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{NavLink, Section};

/// Pixel thresholds used by the router.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSettings {
    /// Navbar gets its "scrolled" look strictly above this offset
    pub scrolled_threshold: f64,
    /// Scroll-to-top button shows strictly above this offset
    pub scroll_top_threshold: f64,
    /// How far above its real top a section starts counting as active
    pub section_lead: f64,
    /// Gap left above a section when jumping to it from an anchor
    pub anchor_offset: f64,
    /// Hero particles move at this fraction of the scroll speed
    pub parallax_factor: f64,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            scrolled_threshold: 50.0,
            scroll_top_threshold: 300.0,
            section_lead: 100.0,
            anchor_offset: 80.0,
            parallax_factor: 0.5,
        }
    }
}

/// Presentation toggles derived from a scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub offset: f64,
    pub is_scrolled: bool,
    pub show_scroll_top: bool,
}

/// Result of one scroll tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollUpdate {
    pub state: ScrollState,
    pub active: Option<String>,
    /// The highlighted link differs from the previous tick
    pub active_changed: bool,
}

/// Tracks the nav links and which of them is highlighted.
#[derive(Debug, Clone)]
pub struct ScrollRouter {
    settings: ScrollSettings,
    links: Vec<String>,
    active: Option<String>,
    state: ScrollState,
}

impl ScrollRouter {
    /// Create a router for nav links pointing at `links`, in menu order.
    pub fn new(settings: ScrollSettings, links: Vec<String>) -> Self {
        Self {
            settings,
            links,
            active: None,
            state: ScrollState::default(),
        }
    }

    /// Pure function of the offset; the boundaries themselves are not past.
    pub fn state_for(&self, offset: f64) -> ScrollState {
        ScrollState {
            offset,
            is_scrolled: offset > self.settings.scrolled_threshold,
            show_scroll_top: offset > self.settings.scroll_top_threshold,
        }
    }

    /// The section that owns `offset`.
    ///
    /// Sections are scanned in document order and a later match overwrites
    /// an earlier one, so overlapping geometry resolves to the last section.
    pub fn matching_section<'a>(&self, sections: &'a [Section], offset: f64) -> Option<&'a Section> {
        sections
            .iter()
            .filter(|section| section.contains(offset, self.settings.section_lead))
            .last()
    }

    /// Recompute toggles and the active link for a new scroll position.
    pub fn on_scroll(&mut self, offset: f64, sections: &[Section]) -> ScrollUpdate {
        self.state = self.state_for(offset);

        let active = self
            .matching_section(sections, offset)
            .map(|section| section.id.clone());
        let active_changed = active != self.active;
        if active_changed {
            debug!(offset, from = ?self.active, to = ?active, "active section changed");
        }
        self.active = active.clone();

        ScrollUpdate {
            state: self.state,
            active,
            active_changed,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Nav links in menu order with their derived active flags.
    pub fn nav_links(&self) -> Vec<NavLink> {
        self.links
            .iter()
            .map(|id| NavLink {
                id: id.clone(),
                active: self.is_active(id),
            })
            .collect()
    }

    /// Position of the active link in menu order.
    pub fn active_index(&self) -> Option<usize> {
        let active = self.active.as_deref()?;
        self.links.iter().position(|id| id == active)
    }

    /// Scroll position to jump to for an in-page anchor, if the target exists.
    pub fn anchor_target(&self, target: &str, sections: &[Section]) -> Option<f64> {
        let id = target.strip_prefix('#').unwrap_or(target);
        sections
            .iter()
            .find(|section| section.id == id)
            .map(|section| (section.top - self.settings.anchor_offset).max(0.0))
    }

    /// Vertical translation of the hero particle layer.
    pub fn parallax(&self) -> f64 {
        self.state.offset * self.settings.parallax_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> ScrollRouter {
        ScrollRouter::new(
            ScrollSettings::default(),
            vec!["home".into(), "about".into(), "contact".into()],
        )
    }

    fn page() -> Vec<Section> {
        vec![
            Section::new("home", 0.0, 800.0),
            Section::new("about", 800.0, 600.0),
            Section::new("contact", 1400.0, 700.0),
        ]
    }

    #[test]
    fn thresholds_are_strict() {
        let router = router();
        assert!(!router.state_for(50.0).is_scrolled);
        assert!(router.state_for(50.5).is_scrolled);
        assert!(!router.state_for(300.0).show_scroll_top);
        assert!(router.state_for(301.0).show_scroll_top);
    }

    #[test]
    fn top_of_page_activates_first_section() {
        let mut router = router();
        let update = router.on_scroll(0.0, &page());
        assert_eq!(update.active.as_deref(), Some("home"));
        assert!(update.active_changed);
        assert!(!update.state.is_scrolled);
    }

    #[test]
    fn only_the_matching_link_is_active() {
        let mut router = router();
        router.on_scroll(900.0, &page());
        let links = router.nav_links();
        let active: Vec<_> = links.iter().filter(|l| l.active).map(|l| l.id.as_str()).collect();
        assert_eq!(active, vec!["about"]);
    }

    #[test]
    fn section_activates_one_lead_early() {
        let mut router = router();
        // about starts at 800, counted from 700
        assert_eq!(router.on_scroll(700.0, &page()).active.as_deref(), Some("home"));
        assert_eq!(router.on_scroll(701.0, &page()).active.as_deref(), Some("about"));
    }

    #[test]
    fn overlapping_sections_resolve_to_the_last() {
        let mut router = router();
        let sections = vec![
            Section::new("home", 0.0, 2000.0),
            Section::new("about", 800.0, 600.0),
        ];
        assert_eq!(router.on_scroll(900.0, &sections).active.as_deref(), Some("about"));
    }

    #[test]
    fn no_match_clears_highlight() {
        let mut router = router();
        router.on_scroll(900.0, &page());
        let update = router.on_scroll(5000.0, &page());
        assert_eq!(update.active, None);
        assert!(update.active_changed);
        assert!(router.nav_links().iter().all(|l| !l.active));
    }

    #[test]
    fn empty_page_is_a_no_op() {
        let mut router = router();
        let update = router.on_scroll(400.0, &[]);
        assert_eq!(update.active, None);
        assert!(!update.active_changed);
    }

    #[test]
    fn repeated_offset_reports_no_change() {
        let mut router = router();
        router.on_scroll(900.0, &page());
        assert!(!router.on_scroll(950.0, &page()).active_changed);
    }

    #[test]
    fn anchor_target_leaves_room_for_navbar() {
        let router = router();
        assert_eq!(router.anchor_target("#about", &page()), Some(720.0));
        assert_eq!(router.anchor_target("home", &page()), Some(0.0));
        assert_eq!(router.anchor_target("#missing", &page()), None);
    }

    #[test]
    fn parallax_follows_half_speed() {
        let mut router = router();
        router.on_scroll(240.0, &page());
        assert_eq!(router.parallax(), 120.0);
    }

    #[test]
    fn active_index_follows_menu_order() {
        let mut router = router();
        assert_eq!(router.active_index(), None);
        router.on_scroll(1500.0, &page());
        assert_eq!(router.active_index(), Some(2));
    }
}
