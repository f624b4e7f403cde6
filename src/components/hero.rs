//! Hero section with the typed-out name.

use dioxus::prelude::*;
use folio_core::UiEvent;
use folio_ui::{Button, ButtonVariant};

use crate::content::ROLE;
use crate::context::use_page;

#[component]
pub fn Hero() -> Element {
    let page = use_page();
    let state = page.state();
    let state = state.read();

    let typed = state.typed_name();
    let parallax = state.router().parallax();
    let github = state.config().github_url.clone();

    rsx! {
        section { id: "home", class: "hero",
            div {
                class: "particles",
                style: "transform: translateY({parallax}px);",
            }
            div { class: "hero-content",
                p { class: "hero-greeting", "Hi, I'm" }
                h1 { class: "hero-name",
                    span { id: "typed-name", "{typed}" }
                    span { class: "cursor", "|" }
                }
                p { class: "hero-role", "{ROLE}" }
                div { class: "hero-actions",
                    Button {
                        onclick: move |_| page.dispatch(UiEvent::AnchorClick("#contact".to_string())),
                        "Get in Touch"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| page.dispatch(UiEvent::AnchorClick("#projects".to_string())),
                        "View Work"
                    }
                }
                div { class: "hero-social",
                    a { href: "{github}", target: "_blank", rel: "noopener noreferrer", "aria-label": "GitHub",
                        i { class: "fab fa-github" }
                    }
                }
            }
        }
    }
}
