//! Mobile navigation menu and its keyboard handling.

use tracing::debug;

/// Keys the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Escape,
    ArrowDown,
    ArrowUp,
    Other,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` name.
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" => NavKey::Escape,
            "ArrowDown" => NavKey::ArrowDown,
            "ArrowUp" => NavKey::ArrowUp,
            _ => NavKey::Other,
        }
    }
}

/// What a key press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Closed,
    /// Focus moved to the nav link at this index; the key's default action
    /// should be suppressed
    Focus(usize),
}

/// Open/closed state of the hamburger menu.
#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    open: bool,
    link_count: usize,
}

impl NavMenu {
    pub fn new(link_count: usize) -> Self {
        Self {
            open: false,
            link_count,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger click.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        debug!(open = self.open, "menu toggled");
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Handle a key press anywhere on the page.
    ///
    /// Arrow keys only navigate while the menu is open and move relative to
    /// `active` (the highlighted section link), or the first link if none is
    /// highlighted. Movement stops at both ends.
    pub fn on_key(&mut self, key: NavKey, active: Option<usize>) -> KeyOutcome {
        if key == NavKey::Escape && self.open {
            self.open = false;
            return KeyOutcome::Closed;
        }
        if !self.open || self.link_count == 0 {
            return KeyOutcome::Ignored;
        }

        let current = active.unwrap_or(0);
        match key {
            NavKey::ArrowDown if current + 1 < self.link_count => KeyOutcome::Focus(current + 1),
            NavKey::ArrowUp if current > 0 => KeyOutcome::Focus(current - 1),
            _ => KeyOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names() {
        assert_eq!(NavKey::from_key_name("Escape"), NavKey::Escape);
        assert_eq!(NavKey::from_key_name("ArrowUp"), NavKey::ArrowUp);
        assert_eq!(NavKey::from_key_name("a"), NavKey::Other);
    }

    #[test]
    fn toggle_and_close() {
        let mut menu = NavMenu::new(3);
        assert!(menu.toggle());
        assert!(!menu.toggle());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn escape_closes_only_when_open() {
        let mut menu = NavMenu::new(3);
        assert_eq!(menu.on_key(NavKey::Escape, None), KeyOutcome::Ignored);
        menu.toggle();
        assert_eq!(menu.on_key(NavKey::Escape, None), KeyOutcome::Closed);
        assert!(!menu.is_open());
    }

    #[test]
    fn arrows_ignored_while_closed() {
        let mut menu = NavMenu::new(3);
        assert_eq!(menu.on_key(NavKey::ArrowDown, Some(0)), KeyOutcome::Ignored);
    }

    #[test]
    fn arrows_move_from_active_link() {
        let mut menu = NavMenu::new(3);
        menu.toggle();
        assert_eq!(menu.on_key(NavKey::ArrowDown, None), KeyOutcome::Focus(1));
        assert_eq!(menu.on_key(NavKey::ArrowDown, Some(1)), KeyOutcome::Focus(2));
        assert_eq!(menu.on_key(NavKey::ArrowUp, Some(1)), KeyOutcome::Focus(0));
    }

    #[test]
    fn arrows_stop_at_the_ends() {
        let mut menu = NavMenu::new(3);
        menu.toggle();
        assert_eq!(menu.on_key(NavKey::ArrowDown, Some(2)), KeyOutcome::Ignored);
        assert_eq!(menu.on_key(NavKey::ArrowUp, None), KeyOutcome::Ignored);
    }
}
