//! Core types for Folio

use serde::{Deserialize, Serialize};

/// A labeled, vertically positioned region of the page.
///
/// Sections are snapshots of live layout: the page reports fresh values on
/// every scroll tick and nothing here is cached across layout changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Element id, also the fragment its nav link points at
    pub id: String,
    /// Pixels from the top of the document
    pub top: f64,
    /// Rendered height in pixels
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Whether `offset` falls inside this section once its start is pulled
    /// up by `lead` pixels.
    ///
    /// The range is open at the start and closed at the end:
    /// `top - lead < offset <= top - lead + height`.
    pub fn contains(&self, offset: f64, lead: f64) -> bool {
        let start = self.top - lead;
        offset > start && offset <= start + self.height
    }
}

/// A navigation entry bound to a section id.
///
/// `active` is derived on every scroll tick, never stored on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub id: String,
    pub active: bool,
}

impl NavLink {
    /// The in-page fragment this link points at (`#about`).
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Viewport-relative box of an element that is watched for visibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementBox {
    pub id: String,
    /// Distance from the top of the viewport (negative once scrolled past)
    pub top: f64,
    pub height: f64,
}

impl ElementBox {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Everything the page reports about its layout on one scroll tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    /// Current vertical scroll offset
    pub offset: f64,
    /// Height of the visible viewport
    #[serde(default)]
    pub viewport_height: f64,
    /// `section[id]` elements in document order
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Elements waiting to be revealed or lazily loaded
    #[serde(default)]
    pub watched: Vec<ElementBox>,
}

impl LayoutSnapshot {
    /// Decode a snapshot sent by the page's layout bridge.
    pub fn from_json(value: serde_json::Value) -> crate::FolioResult<Self> {
        serde_json::from_value(value).map_err(|e| crate::FolioError::Bridge(e.to_string()))
    }
}
