//! Image whose real source is held back until it scrolls into view.

use dioxus::prelude::*;

use crate::context::use_page;

/// Transparent 1x1 GIF shown until the real image loads.
const PLACEHOLDER: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

#[component]
pub fn LazyImage(id: String, alt: String) -> Element {
    let page = use_page();
    let state = page.state();
    let state = state.read();
    let images = state.images();

    match images.src(&id) {
        Some(src) => rsx! {
            img { id: "{id}", src: "{src}", alt: "{alt}", loading: "lazy" }
        },
        None => rsx! {
            img {
                id: "{id}",
                src: PLACEHOLDER,
                alt: "{alt}",
                "data-src": images.deferred_src(&id).unwrap_or_default().to_string(),
                "data-watch": "true",
            }
        },
    }
}
