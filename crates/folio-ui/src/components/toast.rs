//! Notification toast
//!
//! Renders the single notification owned by the page controller. The
//! enter/exit keyframes (`slideIn`/`slideOut`) are part of the global
//! stylesheet.

use dioxus::prelude::*;
use folio_core::{Phase, Severity};

/// Inline style for a toast of the given severity.
pub fn toast_style(severity: Severity) -> String {
    format!(
        "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
         padding: 1rem 1.5rem; border-radius: 8px; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2); \
         z-index: 10000; max-width: 400px;",
        severity.color()
    )
}

/// Full class list for a toast.
pub fn toast_class(severity: Severity, phase: Phase) -> String {
    format!(
        "notification {} {}",
        severity.class(),
        phase.animation_class()
    )
}

#[derive(Props, Clone, PartialEq)]
pub struct NotificationToastProps {
    pub message: String,
    pub severity: Severity,
    pub phase: Phase,
}

/// One on-screen notification
#[component]
pub fn NotificationToast(props: NotificationToastProps) -> Element {
    let class = toast_class(props.severity, props.phase);
    let style = toast_style(props.severity);

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            role: "status",
            "aria-live": "polite",
            "{props.message}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_follows_severity() {
        assert!(toast_style(Severity::Error).contains("background: #EF4444;"));
        assert!(toast_style(Severity::Success).contains("background: #10B981;"));
        assert!(toast_style(Severity::Info).contains("background: #6366F1;"));
    }

    #[test]
    fn class_carries_phase() {
        assert_eq!(
            toast_class(Severity::Error, Phase::FadingOut),
            "notification notification-error notification-exit"
        );
        assert_eq!(
            toast_class(Severity::Info, Phase::Showing),
            "notification notification-info notification-enter"
        );
    }
}
