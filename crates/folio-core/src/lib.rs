//! Folio Core Library
//!
//! Platform-free behavior for a single-page portfolio site.
//!
//! ## Overview
//!
//! The UI layer (Dioxus, see the `folio` binary) owns no logic of its own.
//! It samples layout, forwards user input as [`UiEvent`]s into a
//! [`PageController`] together with a monotonic timestamp, and applies the
//! [`Effect`]s it gets back. Everything time-based (notification lifetime,
//! the hero typewriter, the delayed form reset) is an explicit deadline that
//! the UI wakes up for and hands back to [`PageController::tick`].
//!
//! ## Core Pieces
//!
//! - **Scroll router**: active section + navbar/scroll-top toggles
//! - **Notification center**: one transient toast, `Showing → FadingOut → Idle`
//! - **Theme**: dark/light preference behind a [`PreferenceStore`]
//! - **Contact form**: validation and `mailto:` construction
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::time::Duration;
//! use folio_core::{MemoryStore, PageController, SiteConfig, UiEvent};
//!
//! let mut page = PageController::new(
//!     SiteConfig::default(),
//!     Box::new(MemoryStore::default()),
//!     vec!["home".into(), "about".into(), "contact".into()],
//! );
//! page.start(Duration::ZERO);
//! let effects = page.dispatch(UiEvent::Submit, Duration::ZERO);
//! assert!(effects.is_empty()); // empty form: error toast, no navigation
//! ```

pub mod config;
pub mod contact;
pub mod controller;
pub mod error;
pub mod logging;
pub mod menu;
pub mod notify;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod typewriter;
pub mod types;

// Re-exports
pub use config::SiteConfig;
pub use contact::{ContactError, ContactForm, FormField};
pub use controller::{Effect, PageController, UiEvent};
pub use error::{FolioError, FolioResult};
pub use menu::{KeyOutcome, NavKey, NavMenu};
pub use notify::{
    Notification, NotificationCenter, NotificationEvent, NotificationId, NotificationTimings,
    Phase, Severity,
};
pub use reveal::{LazyImages, RevealTracker, VisibilityWatch};
pub use scroll::{ScrollRouter, ScrollSettings, ScrollState, ScrollUpdate};
pub use theme::{FileStore, MemoryStore, PreferenceStore, Theme, ThemeSwitch, THEME_KEY};
pub use typewriter::Typewriter;
pub use types::*;
