use std::time::Duration;

use dioxus::prelude::*;
use folio_core::PageController;

use crate::bridge;
use crate::content;
use crate::context::{Clock, PageHandle};
use crate::pages::Home;
use crate::storage::preference_store;
use crate::theme::GLOBAL_STYLES;
use crate::timer;

/// Longest the timer loop sleeps before re-checking for new deadlines.
const TIMER_POLL: Duration = Duration::from_millis(50);

fn build_page() -> PageController {
    let mut page = PageController::new(
        crate::get_site_config(),
        preference_store(),
        content::nav_ids(),
    );
    for id in content::reveal_ids() {
        page.watch_reveal(id);
    }
    for (id, src) in content::deferred_images() {
        page.defer_image(id, src);
    }
    page
}

/// Root application component.
///
/// Provides global styles and the page context, and runs the three
/// background loops: timers, layout reports and key presses.
#[component]
pub fn App() -> Element {
    let clock = use_hook(Clock::new);
    let page = use_signal(build_page);
    let handle = use_context_provider(|| PageHandle::new(page, clock));

    // Timers: notification phases, typewriter, form reset, fade-in
    use_future(move || async move {
        handle.start();
        tracing::info!("Portfolio website loaded successfully!");
        loop {
            let wait = handle
                .until_next_deadline()
                .map_or(TIMER_POLL, |wait| wait.min(TIMER_POLL));
            timer::sleep(wait).await;
            handle.tick();
        }
    });

    use_future(move || bridge::run_layout_listener(handle));
    use_future(move || bridge::run_key_listener(handle));

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
