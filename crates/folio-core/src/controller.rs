//! Page controller.
//!
//! Owns all page state and is the single entry point for the UI layer:
//!
//! - [`PageController::dispatch`] for user and layout events
//! - [`PageController::tick`] whenever [`PageController::next_deadline`] passes
//!
//! Time is passed in explicitly as a monotonic offset from page load, which
//! keeps every timer deterministic under test.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::SiteConfig;
use crate::contact::{ContactForm, FormField};
use crate::menu::{KeyOutcome, NavKey, NavMenu};
use crate::notify::{NotificationCenter, Severity};
use crate::reveal::{LazyImages, RevealTracker};
use crate::scroll::ScrollRouter;
use crate::theme::{PreferenceStore, Theme, ThemeSwitch};
use crate::typewriter::Typewriter;
use crate::types::{LayoutSnapshot, Section};

/// Delay before the page body starts fading in.
const FADE_IN_DELAY: Duration = Duration::from_millis(100);

/// Something the page did or reported.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Scroll position and layout sampled after a scroll event
    Scroll(LayoutSnapshot),
    /// Click on an in-page `#fragment` link outside the nav menu
    AnchorClick(String),
    /// Click on a nav menu link
    NavLinkClick(String),
    HamburgerClick,
    ThemeToggle,
    ScrollTopClick,
    Key(NavKey),
    FormInput(FormField, String),
    Submit,
}

/// Side effect the UI layer has to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Smooth-scroll the window to this offset
    ScrollTo { top: f64 },
    /// Navigate the window to this URI
    Navigate(String),
    /// Focus the nav link at this index and suppress the key's default action
    FocusNavLink(usize),
}

/// All behavior of the page behind one owner.
#[derive(Debug)]
pub struct PageController {
    config: SiteConfig,
    router: ScrollRouter,
    notifications: NotificationCenter,
    theme: ThemeSwitch,
    menu: NavMenu,
    typewriter: Typewriter,
    reveal: RevealTracker,
    images: LazyImages,
    form: ContactForm,
    form_reset_at: Option<Duration>,
    sections: Vec<Section>,
    fade_in_at: Option<Duration>,
    body_visible: bool,
}

impl PageController {
    /// Create a controller for a page whose nav menu links to `links`.
    pub fn new(config: SiteConfig, store: Box<dyn PreferenceStore>, links: Vec<String>) -> Self {
        let menu = NavMenu::new(links.len());
        Self {
            router: ScrollRouter::new(config.scroll, links),
            notifications: NotificationCenter::new(config.notifications),
            theme: ThemeSwitch::load(store),
            menu,
            typewriter: Typewriter::new(&config.owner_name, config.typing_interval()),
            reveal: RevealTracker::default(),
            images: LazyImages::default(),
            form: ContactForm::default(),
            form_reset_at: None,
            sections: Vec::new(),
            fade_in_at: None,
            body_visible: false,
            config,
        }
    }

    /// Page mounted: start the hero animation and the body fade-in.
    pub fn start(&mut self, now: Duration) {
        debug!(theme = %self.theme.current(), "page started");
        self.typewriter.start(now);
        self.typewriter.tick(now);
        self.fade_in_at = Some(now + FADE_IN_DELAY);
    }

    pub fn watch_reveal(&mut self, id: impl Into<String>) {
        self.reveal.watch(id);
    }

    pub fn defer_image(&mut self, id: impl Into<String>, src: impl Into<String>) {
        self.images.register(id, src);
    }

    /// Handle one event and return the effects to apply, in order.
    pub fn dispatch(&mut self, event: UiEvent, now: Duration) -> Vec<Effect> {
        match event {
            UiEvent::Scroll(snapshot) => {
                self.on_layout(snapshot);
                Vec::new()
            }
            UiEvent::AnchorClick(target) => self.scroll_to_anchor(&target),
            UiEvent::NavLinkClick(target) => {
                self.menu.close();
                self.scroll_to_anchor(&target)
            }
            UiEvent::HamburgerClick => {
                self.menu.toggle();
                Vec::new()
            }
            UiEvent::ThemeToggle => {
                self.theme.toggle();
                Vec::new()
            }
            UiEvent::ScrollTopClick => vec![Effect::ScrollTo { top: 0.0 }],
            UiEvent::Key(key) => match self.menu.on_key(key, self.router.active_index()) {
                KeyOutcome::Focus(index) => vec![Effect::FocusNavLink(index)],
                KeyOutcome::Closed | KeyOutcome::Ignored => Vec::new(),
            },
            UiEvent::FormInput(field, value) => {
                self.form.set(field, value);
                Vec::new()
            }
            UiEvent::Submit => self.submit(now),
        }
    }

    /// Show a notification, replacing any current one.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity, now: Duration) {
        self.notifications.notify(message, severity, now);
    }

    /// Run every timer due at `now`. Returns whether any state changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let mut changed = !self.notifications.tick(now).is_empty();
        changed |= self.typewriter.tick(now);

        if self.form_reset_at.is_some_and(|at| at <= now) {
            self.form_reset_at = None;
            self.form.clear();
            debug!("contact form cleared");
            changed = true;
        }

        if self.fade_in_at.is_some_and(|at| at <= now) {
            self.fade_in_at = None;
            self.body_visible = true;
            changed = true;
        }

        changed
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Duration> {
        [
            self.notifications.next_deadline().map(|(_, at)| at),
            self.typewriter.next_deadline(),
            self.form_reset_at,
            self.fade_in_at,
        ]
        .into_iter()
        .flatten()
        .min()
    }

    fn on_layout(&mut self, snapshot: LayoutSnapshot) {
        self.router.on_scroll(snapshot.offset, &snapshot.sections);
        self.reveal.observe(&snapshot.watched, snapshot.viewport_height);
        self.images.observe(&snapshot.watched, snapshot.viewport_height);
        self.sections = snapshot.sections;
    }

    fn scroll_to_anchor(&self, target: &str) -> Vec<Effect> {
        match self.router.anchor_target(target, &self.sections) {
            Some(top) => vec![Effect::ScrollTo { top }],
            None => {
                debug!(%target, "anchor target not on page");
                Vec::new()
            }
        }
    }

    fn submit(&mut self, now: Duration) -> Vec<Effect> {
        match self.form.submit(&self.config.contact_email) {
            Ok(uri) => {
                info!(name = %self.form.name, subject = %self.form.subject, "contact form submitted");
                self.notify("Opening your email client...", Severity::Success, now);
                self.form_reset_at = Some(now + self.config.form_reset_delay());
                vec![Effect::Navigate(uri)]
            }
            Err(e) => {
                debug!(?e, "contact form rejected");
                self.notify(e.to_string(), Severity::Error, now);
                Vec::new()
            }
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn router(&self) -> &ScrollRouter {
        &self.router
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn typed_name(&self) -> String {
        self.typewriter.visible()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.reveal.is_revealed(id)
    }

    pub fn images(&self) -> &LazyImages {
        &self.images
    }

    pub fn body_visible(&self) -> bool {
        self.body_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Phase;
    use crate::theme::MemoryStore;
    use crate::types::ElementBox;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn page() -> PageController {
        PageController::new(
            SiteConfig::default(),
            Box::new(MemoryStore::default()),
            vec!["home".into(), "about".into(), "contact".into()],
        )
    }

    fn layout(offset: f64) -> LayoutSnapshot {
        LayoutSnapshot {
            offset,
            viewport_height: 800.0,
            sections: vec![
                Section::new("home", 0.0, 800.0),
                Section::new("about", 800.0, 600.0),
                Section::new("contact", 1400.0, 700.0),
            ],
            watched: Vec::new(),
        }
    }

    fn fill(page: &mut PageController, name: &str, email: &str, message: &str) {
        page.dispatch(UiEvent::FormInput(FormField::Name, name.into()), ms(0));
        page.dispatch(UiEvent::FormInput(FormField::Email, email.into()), ms(0));
        page.dispatch(UiEvent::FormInput(FormField::Message, message.into()), ms(0));
    }

    #[test]
    fn scroll_updates_router() {
        let mut page = page();
        page.dispatch(UiEvent::Scroll(layout(900.0)), ms(0));
        assert_eq!(page.router().active(), Some("about"));
        assert!(page.router().state().show_scroll_top);
    }

    #[test]
    fn nav_click_closes_menu_and_scrolls() {
        let mut page = page();
        page.dispatch(UiEvent::Scroll(layout(0.0)), ms(0));
        page.dispatch(UiEvent::HamburgerClick, ms(0));
        assert!(page.menu_open());

        let effects = page.dispatch(UiEvent::NavLinkClick("#contact".into()), ms(0));
        assert_eq!(effects, vec![Effect::ScrollTo { top: 1320.0 }]);
        assert!(!page.menu_open());
    }

    #[test]
    fn unknown_anchor_does_nothing() {
        let mut page = page();
        page.dispatch(UiEvent::Scroll(layout(0.0)), ms(0));
        assert!(page.dispatch(UiEvent::AnchorClick("#nope".into()), ms(0)).is_empty());
    }

    #[test]
    fn scroll_top_button() {
        let mut page = page();
        assert_eq!(
            page.dispatch(UiEvent::ScrollTopClick, ms(0)),
            vec![Effect::ScrollTo { top: 0.0 }]
        );
    }

    #[test]
    fn arrow_keys_focus_relative_to_active_section() {
        let mut page = page();
        page.dispatch(UiEvent::Scroll(layout(900.0)), ms(0));
        assert!(page.dispatch(UiEvent::Key(NavKey::ArrowDown), ms(0)).is_empty());

        page.dispatch(UiEvent::HamburgerClick, ms(0));
        assert_eq!(
            page.dispatch(UiEvent::Key(NavKey::ArrowDown), ms(0)),
            vec![Effect::FocusNavLink(2)]
        );
        page.dispatch(UiEvent::Key(NavKey::Escape), ms(0));
        assert!(!page.menu_open());
    }

    #[test]
    fn theme_toggle_round_trip() {
        let mut page = page();
        assert_eq!(page.theme(), Theme::Dark);
        page.dispatch(UiEvent::ThemeToggle, ms(0));
        assert_eq!(page.theme(), Theme::Light);
    }

    #[test]
    fn submit_without_name_shows_error_and_stays() {
        let mut page = page();
        fill(&mut page, "", "a@b.com", "hi");
        assert!(page.dispatch(UiEvent::Submit, ms(10)).is_empty());

        let current = page.notifications().current().unwrap();
        assert_eq!(current.severity, Severity::Error);
        assert_eq!(current.message, "Please fill in all required fields.");
        assert_eq!(page.form().email, "a@b.com");
    }

    #[test]
    fn submit_with_bad_email() {
        let mut page = page();
        fill(&mut page, "A", "bad-email", "hi");
        assert!(page.dispatch(UiEvent::Submit, ms(10)).is_empty());
        assert_eq!(
            page.notifications().current().unwrap().message,
            "Please enter a valid email address."
        );
    }

    #[test]
    fn valid_submit_navigates_then_clears_form() {
        let mut page = page();
        fill(&mut page, "Ada", "ada@example.com", "hi there");
        let effects = page.dispatch(UiEvent::Submit, ms(100));

        match effects.as_slice() {
            [Effect::Navigate(uri)] => {
                assert!(uri.starts_with("mailto:sonuyadav97297@gmail.com?subject="));
                assert!(uri.contains("Name%3A%20Ada"));
                assert!(uri.contains("hi%20there"));
            }
            other => panic!("unexpected effects: {:?}", other),
        }
        let current = page.notifications().current().unwrap();
        assert_eq!(current.severity, Severity::Success);
        assert_eq!(current.message, "Opening your email client...");

        assert_eq!(page.next_deadline(), Some(ms(1100)));
        page.tick(ms(1099));
        assert_eq!(page.form().name, "Ada");
        assert!(page.tick(ms(1100)));
        assert!(page.form().is_empty());
    }

    #[test]
    fn error_then_success_leaves_success() {
        let mut page = page();
        page.notify("x", Severity::Error, ms(0));
        page.notify("y", Severity::Success, ms(0));
        page.tick(ms(5000));
        let current = page.notifications().current().unwrap();
        assert_eq!(current.message, "y");
        assert_eq!(page.notifications().phase(), Some(Phase::FadingOut));
        page.tick(ms(5300));
        assert!(page.notifications().is_idle());
    }

    #[test]
    fn start_types_name_and_fades_in() {
        let mut page = page();
        page.start(ms(0));
        assert_eq!(page.typed_name(), "S");
        assert!(!page.body_visible());
        assert_eq!(page.next_deadline(), Some(ms(100)));

        page.tick(ms(100));
        assert!(page.body_visible());
        page.tick(ms(150));
        assert_eq!(page.typed_name(), "So");

        page.tick(ms(10_000));
        assert_eq!(page.typed_name(), "Sonu Yadav");
        assert_eq!(page.next_deadline(), None);
    }

    #[test]
    fn layout_reveals_and_loads_images() {
        let mut page = page();
        page.watch_reveal("about-content");
        page.defer_image("avatar", "/img/me.jpg");

        let mut snapshot = layout(0.0);
        snapshot.watched = vec![
            ElementBox::new("about-content", 100.0, 300.0),
            ElementBox::new("avatar", 2000.0, 200.0),
        ];
        page.dispatch(UiEvent::Scroll(snapshot), ms(0));

        assert!(page.is_revealed("about-content"));
        assert_eq!(page.images().src("avatar"), None);
    }
}
