//! Renders the controller's current notification, if any.

use dioxus::prelude::*;
use folio_ui::NotificationToast;

use crate::context::use_page;

#[component]
pub fn NotificationHost() -> Element {
    let page = use_page();
    let state = page.state();
    let state = state.read();
    let center = state.notifications();

    match (center.current(), center.phase()) {
        (Some(notification), Some(phase)) => rsx! {
            NotificationToast {
                key: "{notification.id}",
                message: notification.message.clone(),
                severity: notification.severity,
                phase,
            }
        },
        _ => rsx! {},
    }
}
