//! The document boundary.
//!
//! Everything the grid needs from the host document goes through [`Page`]: structural queries
//! by selector, geometry, computed transform strings, class toggles and intersection
//! observation. [`MemoryPage`] is an arena-backed implementation for tests and headless runs.

pub(crate) mod fixture;
pub(crate) mod memory;

pub use fixture::{NodeFixture, PageFixture, demo_fixture};
pub use memory::MemoryPage;

use crate::foundation::core::{ElementId, Rect, Size};

/// One intersection-observer report for an observed element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IntersectionEntry {
    /// Observed element.
    pub target: ElementId,
    /// Visible fraction of the element's area, in `[0, 1]`.
    pub ratio: f64,
}

/// Host document contract.
///
/// Selectors are simple compounds: an optional tag name followed by any number of `.class`
/// parts (`figure.column__item`, `.content__nav-item`, `figcaption`). Queries return matches in
/// document order and never include the scope element itself.
pub trait Page {
    /// The `<body>` element.
    fn body(&self) -> ElementId;

    /// All descendants of `scope` (or of the document) matching `selector`.
    fn query_all(&self, scope: Option<ElementId>, selector: &str) -> Vec<ElementId>;

    /// First descendant of `scope` (or of the document) matching `selector`.
    fn query(&self, scope: Option<ElementId>, selector: &str) -> Option<ElementId> {
        self.query_all(scope, selector).into_iter().next()
    }

    /// Parent element, `None` for the document root.
    fn parent(&self, el: ElementId) -> Option<ElementId>;

    /// `data-<key>` attribute value.
    fn data(&self, el: ElementId, key: &str) -> Option<String>;

    /// Live bounding rect in viewport coordinates, transforms applied.
    fn bounding_rect(&self, el: ElementId) -> Rect;

    /// Untransformed layout size (offset width/height).
    fn layout_size(&self, el: ElementId) -> Size;

    /// Computed `transform` value, `None` when the element has no transform.
    fn computed_transform(&self, el: ElementId) -> Option<String>;

    /// Computed `transform-origin` value.
    fn transform_origin(&self, el: ElementId) -> Option<String>;

    /// Current window inner size.
    fn viewport(&self) -> Size;

    /// Whether `el` carries `class`.
    fn has_class(&self, el: ElementId, class: &str) -> bool;

    /// Add `class` to `el`; no-op when already present.
    fn add_class(&mut self, el: ElementId, class: &str);

    /// Remove `class` from `el`; no-op when absent.
    fn remove_class(&mut self, el: ElementId, class: &str);

    /// Set an inline style property.
    fn set_style(&mut self, el: ElementId, property: &str, value: String);

    /// Start observing `targets` against the viewport. Reports arrive later as
    /// [`GridEvent::Intersection`](crate::GridEvent::Intersection).
    fn observe_intersections(&mut self, targets: &[ElementId]);
}
