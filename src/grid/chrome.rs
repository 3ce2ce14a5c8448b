use crate::config::Selectors;
use crate::foundation::core::ElementId;
use crate::page::Page;

/// Page-level elements outside the grid that take part in the transitions.
#[derive(Clone, Debug)]
pub(crate) struct Chrome {
    pub(crate) body: ElementId,
    pub(crate) heading_top: Option<ElementId>,
    pub(crate) heading_bottom: Option<ElementId>,
    pub(crate) back: Option<ElementId>,
    pub(crate) nav: Option<ElementId>,
    pub(crate) nav_items: Vec<ElementId>,
}

impl Chrome {
    pub(crate) fn locate<P: Page + ?Sized>(page: &P, selectors: &Selectors) -> Self {
        Self {
            body: page.body(),
            heading_top: page.query(None, &selectors.heading_top),
            heading_bottom: page.query(None, &selectors.heading_bottom),
            back: page.query(None, &selectors.back),
            nav: page.query(None, &selectors.nav),
            nav_items: page.query_all(None, &selectors.nav_item),
        }
    }
}
