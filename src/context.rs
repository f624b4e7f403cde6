//! Page context provider for Folio.
//!
//! Provides the [`PageController`] and the page clock to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let page = use_page();
//! let menu_open = page.state().read().menu_open();
//! page.dispatch(UiEvent::HamburgerClick);
//! ```

use std::time::Duration;

#[cfg(feature = "desktop")]
use std::time::Instant;

use dioxus::prelude::*;
use folio_core::{PageController, UiEvent};

use crate::bridge;

#[cfg(not(feature = "desktop"))]
use web_time::Instant;

/// Monotonic time since the page was mounted.
///
/// `performance.now()` backs it in the browser.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to the page state shared through context.
#[derive(Clone, Copy)]
pub struct PageHandle {
    page: Signal<PageController>,
    clock: Clock,
}

impl PageHandle {
    pub fn new(page: Signal<PageController>, clock: Clock) -> Self {
        Self { page, clock }
    }

    /// Reactive access; components reading it re-render on change.
    pub fn state(&self) -> Signal<PageController> {
        self.page
    }

    /// Forward an event and apply whatever it asks the page to do.
    pub fn dispatch(self, event: UiEvent) {
        let mut page = self.page;
        let effects = page.write().dispatch(event, self.clock.now());
        for effect in effects {
            bridge::apply(&effect);
        }
    }

    /// Start page-load animations.
    pub fn start(self) {
        let mut page = self.page;
        page.write().start(self.clock.now());
    }

    /// Time left until the controller next has timer work.
    pub fn until_next_deadline(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.page
            .peek()
            .next_deadline()
            .map(|at| at.saturating_sub(now))
    }

    /// Run due timers. Only touches the signal when something is due.
    pub fn tick(self) {
        let mut page = self.page;
        let now = self.clock.now();
        let due = page.peek().next_deadline().is_some_and(|at| at <= now);
        if due {
            page.write().tick(now);
        }
    }
}

/// Hook to access the page from context.
pub fn use_page() -> PageHandle {
    use_context::<PageHandle>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_never_runs_backwards() {
        let clock = Clock::new();
        let mut last = clock.now();
        for _ in 0..1000 {
            let now = clock.now();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn clock_tracks_elapsed_time() {
        let clock = Clock::new();
        std::thread::sleep(Duration::from_millis(20));
        assert!(clock.now() >= Duration::from_millis(20));
    }
}
