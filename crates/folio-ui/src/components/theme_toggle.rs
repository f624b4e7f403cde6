//! Theme toggle button

use dioxus::prelude::*;
use folio_core::Theme;

use super::IconButton;

/// Sun/moon button switching between dark and light.
#[component]
pub fn ThemeToggle(theme: Theme, on_toggle: EventHandler<()>) -> Element {
    let label = match theme {
        Theme::Dark => "Switch to light theme",
        Theme::Light => "Switch to dark theme",
    };

    rsx! {
        IconButton {
            id: "theme-toggle".to_string(),
            icon: theme.icon_class().to_string(),
            aria_label: label.to_string(),
            class: "theme-toggle".to_string(),
            onclick: move |_| on_toggle.call(()),
        }
    }
}
