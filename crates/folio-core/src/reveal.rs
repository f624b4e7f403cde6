//! Visibility tracking for fade-in blocks and lazily loaded images.
//!
//! Works on the viewport-relative boxes the page reports with each scroll
//! tick. Only the vertical axis is considered; every watched element spans
//! the content column.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::types::ElementBox;

/// Fraction of `element` inside the viewport.
///
/// The viewport bottom is pulled up by `bottom_margin` pixels. Zero-height
/// elements count as fully visible when they sit inside the viewport.
pub fn intersection_ratio(element: &ElementBox, viewport_height: f64, bottom_margin: f64) -> f64 {
    let root_bottom = viewport_height - bottom_margin;
    let bottom = element.top + element.height;
    if element.height <= 0.0 {
        return if element.top >= 0.0 && element.top <= root_bottom {
            1.0
        } else {
            0.0
        };
    }
    let visible = bottom.min(root_bottom) - element.top.max(0.0);
    (visible / element.height).clamp(0.0, 1.0)
}

/// One-shot visibility watch over a set of element ids.
///
/// An element triggers once its intersection ratio reaches `threshold`
/// (or is merely non-zero for a threshold of 0) and is then dropped from the
/// watch list.
#[derive(Debug, Clone)]
pub struct VisibilityWatch {
    threshold: f64,
    bottom_margin: f64,
    watched: BTreeSet<String>,
}

impl VisibilityWatch {
    pub fn new(threshold: f64, bottom_margin: f64) -> Self {
        Self {
            threshold,
            bottom_margin,
            watched: BTreeSet::new(),
        }
    }

    pub fn watch(&mut self, id: impl Into<String>) {
        self.watched.insert(id.into());
    }

    /// Ids that became visible, in the order the boxes were reported.
    pub fn observe(&mut self, boxes: &[ElementBox], viewport_height: f64) -> Vec<String> {
        let mut hits = Vec::new();
        for element in boxes {
            if !self.watched.contains(&element.id) {
                continue;
            }
            let ratio = intersection_ratio(element, viewport_height, self.bottom_margin);
            let visible = if self.threshold > 0.0 {
                ratio >= self.threshold
            } else {
                ratio > 0.0
            };
            if visible {
                self.watched.remove(&element.id);
                hits.push(element.id.clone());
            }
        }
        hits
    }
}

/// Blocks that fade in the first time they scroll into view.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    watch: VisibilityWatch,
    revealed: BTreeSet<String>,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self {
            watch: VisibilityWatch::new(0.1, 50.0),
            revealed: BTreeSet::new(),
        }
    }
}

impl RevealTracker {
    pub fn watch(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.revealed.contains(&id) {
            self.watch.watch(id);
        }
    }

    pub fn observe(&mut self, boxes: &[ElementBox], viewport_height: f64) -> Vec<String> {
        let hits = self.watch.observe(boxes, viewport_height);
        if !hits.is_empty() {
            debug!(?hits, "revealed");
        }
        self.revealed.extend(hits.iter().cloned());
        hits
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}

/// Images whose real source is only set once they come into view.
#[derive(Debug, Clone)]
pub struct LazyImages {
    watch: VisibilityWatch,
    deferred: BTreeMap<String, String>,
    loaded: BTreeMap<String, String>,
}

impl Default for LazyImages {
    fn default() -> Self {
        Self {
            watch: VisibilityWatch::new(0.0, 0.0),
            deferred: BTreeMap::new(),
            loaded: BTreeMap::new(),
        }
    }
}

impl LazyImages {
    /// Hold back `src` for the image with element id `id`.
    pub fn register(&mut self, id: impl Into<String>, src: impl Into<String>) {
        let id = id.into();
        if self.loaded.contains_key(&id) {
            return;
        }
        self.watch.watch(id.clone());
        self.deferred.insert(id, src.into());
    }

    /// Swap in the real source for every image that came into view.
    pub fn observe(&mut self, boxes: &[ElementBox], viewport_height: f64) -> Vec<String> {
        let hits = self.watch.observe(boxes, viewport_height);
        for id in &hits {
            if let Some(src) = self.deferred.remove(id) {
                debug!(%id, %src, "loading image");
                self.loaded.insert(id.clone(), src);
            }
        }
        hits
    }

    /// Source to render: `None` while deferred.
    pub fn src(&self, id: &str) -> Option<&str> {
        self.loaded.get(id).map(String::as_str)
    }

    /// The held-back source, present until the image loads.
    pub fn deferred_src(&self, id: &str) -> Option<&str> {
        self.deferred.get(id).map(String::as_str)
    }
}
