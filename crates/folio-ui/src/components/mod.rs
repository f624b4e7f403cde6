//! Reusable UI components

mod button;
mod theme_toggle;
mod toast;

pub use button::*;
pub use theme_toggle::*;
pub use toast::*;
