//! Page components for Folio.

mod contact_form;
mod footer;
mod hero;
mod lazy_image;
mod navbar;
mod notification_host;
mod scroll_top;
mod sections;

pub use contact_form::ContactSection;
pub use footer::Footer;
pub use hero::Hero;
pub use lazy_image::LazyImage;
pub use navbar::Navbar;
pub use notification_host::NotificationHost;
pub use scroll_top::ScrollTopButton;
pub use sections::{About, Education, Experience, Projects, Skills};

/// Class list of a block that fades in on first view.
pub fn reveal_class(base: &str, revealed: bool) -> String {
    if revealed {
        format!("{} fade-in-up", base)
    } else {
        base.to_string()
    }
}

/// Adds `extra` to `base` while `on` holds.
pub fn toggle_class(base: &str, extra: &str, on: bool) -> String {
    if on {
        format!("{} {}", base, extra)
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_adds_animation_class() {
        assert_eq!(reveal_class("project-card", false), "project-card");
        assert_eq!(reveal_class("project-card", true), "project-card fade-in-up");
    }

    #[test]
    fn toggle_class_follows_flag() {
        assert_eq!(toggle_class("navbar", "scrolled", true), "navbar scrolled");
        assert_eq!(toggle_class("navbar", "scrolled", false), "navbar");
    }
}
