//! Page footer.

use chrono::Datelike;
use dioxus::prelude::*;

use crate::context::use_page;

#[component]
pub fn Footer() -> Element {
    let page = use_page();
    let owner = page.state().read().config().owner_name.clone();
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "footer",
            p { "© {year} {owner}. Built with Rust and Dioxus." }
        }
    }
}
