//! Scroll-to-top button, visible once the page is scrolled past the
//! threshold.

use dioxus::prelude::*;
use folio_core::UiEvent;
use folio_ui::IconButton;

use crate::components::toggle_class;
use crate::context::use_page;

#[component]
pub fn ScrollTopButton() -> Element {
    let page = use_page();
    let visible = page.state().read().router().state().show_scroll_top;

    rsx! {
        IconButton {
            id: "scroll-top".to_string(),
            icon: "fas fa-arrow-up".to_string(),
            aria_label: "Scroll to top".to_string(),
            class: toggle_class("scroll-top", "visible", visible),
            onclick: move |_| page.dispatch(UiEvent::ScrollTopClick),
        }
    }
}
