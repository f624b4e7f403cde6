//! Navigation bar
//!
//! Fixed header with the section links, the theme toggle and the hamburger
//! used on narrow screens. The highlighted link and the "scrolled" look both
//! come from the scroll router.

use dioxus::prelude::*;
use folio_core::UiEvent;
use folio_ui::ThemeToggle;

use crate::components::toggle_class;
use crate::content::NAV;
use crate::context::use_page;

#[component]
pub fn Navbar() -> Element {
    let page = use_page();
    let state = page.state();
    let state = state.read();

    let scrolled = state.router().state().is_scrolled;
    let menu_open = state.menu_open();
    let theme = state.theme();
    let links = state.router().nav_links();
    let owner = state.config().owner_name.clone();

    rsx! {
        nav { id: "navbar", class: toggle_class("navbar", "scrolled", scrolled),
            div { class: "nav-container",
                a {
                    class: "nav-logo",
                    href: "#home",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        page.dispatch(UiEvent::AnchorClick("#home".to_string()));
                    },
                    "{owner}"
                }

                ul { id: "nav-menu", class: toggle_class("nav-menu", "active", menu_open),
                    for (link, (_, label)) in links.into_iter().zip(NAV.iter()) {
                        li { key: "{link.id}",
                            a {
                                class: toggle_class("nav-link", "active", link.active),
                                href: link.href(),
                                onclick: {
                                    let target = link.href();
                                    move |evt: MouseEvent| {
                                        evt.prevent_default();
                                        page.dispatch(UiEvent::NavLinkClick(target.clone()));
                                    }
                                },
                                "{label}"
                            }
                        }
                    }
                }

                div { class: "nav-actions",
                    ThemeToggle {
                        theme,
                        on_toggle: move |_| page.dispatch(UiEvent::ThemeToggle),
                    }
                    button {
                        id: "hamburger",
                        class: toggle_class("hamburger", "active", menu_open),
                        r#type: "button",
                        "aria-label": "Toggle navigation",
                        "aria-expanded": "{menu_open}",
                        onclick: move |_| page.dispatch(UiEvent::HamburgerClick),
                        span { class: "bar" }
                        span { class: "bar" }
                        span { class: "bar" }
                    }
                }
            }
        }
    }
}
