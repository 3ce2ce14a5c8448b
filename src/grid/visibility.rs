use std::collections::BTreeSet;

use crate::foundation::core::ElementId;
use crate::page::IntersectionEntry;

/// Set of tiles whose latest intersection report had a positive ratio.
#[derive(Clone, Debug, Default)]
pub struct VisibilityTracker {
    visible: BTreeSet<ElementId>,
}

impl VisibilityTracker {
    /// Empty tracker; nothing is visible until reported.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a batch of reports and return each target with its new visibility.
    pub fn apply(&mut self, entries: &[IntersectionEntry]) -> Vec<(ElementId, bool)> {
        entries
            .iter()
            .map(|entry| {
                let visible = entry.ratio > 0.0;
                if visible {
                    self.visible.insert(entry.target);
                } else {
                    self.visible.remove(&entry.target);
                }
                (entry.target, visible)
            })
            .collect()
    }

    /// Whether `el` is currently visible.
    pub fn is_visible(&self, el: ElementId) -> bool {
        self.visible.contains(&el)
    }

    /// Number of visible tiles.
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// `true` when no tile is visible.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/visibility.rs"]
mod tests;
