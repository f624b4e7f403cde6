//! The portfolio page: every section on one scrolling document.
//!
//! The theme is applied as a `data-theme` attribute on the outermost element
//! and the body fades in shortly after mount.

use dioxus::prelude::*;

use crate::components::{
    About, ContactSection, Education, Experience, Footer, Hero, Navbar, NotificationHost,
    Projects, ScrollTopButton, Skills,
};
use crate::context::use_page;

#[component]
pub fn Home() -> Element {
    let page = use_page();
    let state = page.state();
    let state = state.read();

    let theme = state.theme();
    let opacity = if state.body_visible() { 1 } else { 0 };

    rsx! {
        div {
            class: "page",
            "data-theme": theme.as_str(),
            style: "opacity: {opacity}; transition: opacity 0.5s ease-in;",
            Navbar {}
            main {
                Hero {}
                About {}
                Skills {}
                Experience {}
                Projects {}
                Education {}
                ContactSection {}
            }
            Footer {}
            ScrollTopButton {}
            NotificationHost {}
        }
    }
}
