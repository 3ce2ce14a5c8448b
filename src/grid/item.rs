use crate::config::Selectors;
use crate::foundation::core::ElementId;
use crate::foundation::error::{GridError, GridResult};
use crate::page::Page;

/// One tile of the grid and the layers the choreography animates.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GridItem {
    /// The tile element.
    pub element: ElementId,
    /// The tile's grandparent, raised above its siblings together with the tile while open.
    pub column: Option<ElementId>,
    /// Image wrapper: the clickable, scaled and translated layer.
    pub image_outer: Option<ElementId>,
    /// Image inside the wrapper, scaled on hover.
    pub image_inner: Option<ElementId>,
    /// Caption.
    pub caption: Option<ElementId>,
    /// 0-based index of the paired content panel, from the 1-based position attribute.
    pub position: Option<usize>,
    /// Paired content panel, an index into the grid's content items.
    pub content: Option<usize>,
}

impl GridItem {
    /// Bind the parts of `element`. Missing parts stay `None` until first use.
    pub fn locate<P: Page + ?Sized>(page: &P, element: ElementId, selectors: &Selectors) -> Self {
        let image_outer = page.query(Some(element), &selectors.image_outer);
        let position = image_outer
            .and_then(|outer| page.data(outer, &selectors.position_attr))
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .and_then(|pos| pos.checked_sub(1));
        Self {
            element,
            column: page.parent(element).and_then(|p| page.parent(p)),
            image_outer,
            image_inner: page.query(Some(element), &selectors.image_inner),
            caption: page.query(Some(element), &selectors.caption),
            position,
            content: None,
        }
    }

    /// The image wrapper, or a markup error naming the tile.
    pub fn outer(&self) -> GridResult<ElementId> {
        self.image_outer.ok_or_else(|| {
            GridError::markup(format!("grid item {} has no image wrapper", self.element))
        })
    }

    /// Outer and inner image layers that exist.
    pub fn layers(&self) -> Vec<ElementId> {
        crate::foundation::core::present([self.image_outer, self.image_inner])
    }

    /// The tile and its grandparent.
    pub fn raised(&self) -> Vec<ElementId> {
        crate::foundation::core::present([Some(self.element), self.column])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/item.rs"]
mod tests;
