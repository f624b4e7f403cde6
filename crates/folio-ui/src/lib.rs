//! Folio UI Components
//!
//! Dioxus components shared by the portfolio page. Styling lives in the
//! page's global stylesheet; components only pick classes and the few inline
//! values that depend on state (toast color).

pub mod components;

pub use components::*;
