use crate::config::Selectors;
use crate::foundation::core::ElementId;
use crate::page::Page;

/// A full-screen content panel paired with a tile.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ContentItem {
    /// The panel element.
    pub element: ElementId,
    /// Panel title.
    pub title: Option<ElementId>,
    /// Panel body text.
    pub text: Option<ElementId>,
}

impl ContentItem {
    /// Bind the title and text of `element`.
    pub fn locate<P: Page + ?Sized>(page: &P, element: ElementId, selectors: &Selectors) -> Self {
        Self {
            element,
            title: page.query(Some(element), &selectors.content_title),
            text: page.query(Some(element), &selectors.content_text),
        }
    }
}
