pub use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Opaque handle to one element of the host document.
///
/// Handles are assigned by the [`Page`](crate::Page) implementation and stay stable for the
/// lifetime of the page.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ElementId(pub u32);

impl ElementId {
    /// Index form of the handle, for arena-backed pages.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier returned by a [`Tweener`](crate::Tweener) for a played timeline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct TimelineId(pub u64);

/// Collect the present handles out of a list of optional ones.
pub(crate) fn present(ids: impl IntoIterator<Item = Option<ElementId>>) -> Vec<ElementId> {
    ids.into_iter().flatten().collect()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
