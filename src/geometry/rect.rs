use crate::foundation::core::{ElementId, Point, Rect, Size};
use crate::foundation::error::GridResult;
use crate::geometry::matrix::{CssTransform, ScaleTranslate, TransformOrigin};
use crate::page::Page;

/// Current viewport dimensions reported by the page.
pub fn viewport_size<P: Page + ?Sized>(page: &P) -> Size {
    page.viewport()
}

/// Undo a scale/translate transform on a live bounding rect.
///
/// `origin` is the transform origin in px relative to the untransformed box, and `layout` is the
/// element's untransformed layout size, used when a scale factor is zero and the live size
/// carries no information. Without a decomposition the live rect is returned unchanged.
pub fn effective_rect(
    live: Rect,
    transform: Option<ScaleTranslate>,
    origin: Point,
    layout: Size,
) -> Rect {
    let Some(t) = transform else {
        return live;
    };

    let x = live.x0 - t.dx - (1.0 - t.sx) * origin.x;
    let y = live.y0 - t.dy - (1.0 - t.sy) * origin.y;
    let w = if t.sx != 0.0 {
        live.width() / t.sx
    } else {
        layout.width
    };
    let h = if t.sy != 0.0 {
        live.height() / t.sy
    } else {
        layout.height
    };
    Rect::from_origin_size(Point::new(x, y), Size::new(w, h))
}

/// [`effective_rect`] for an element of `page`, reading its computed transform and origin.
///
/// A missing origin falls back to the CSS initial value, the center of the layout box.
pub fn effective_rect_of<P: Page + ?Sized>(page: &P, el: ElementId) -> GridResult<Rect> {
    let live = page.bounding_rect(el);
    let transform = match page.computed_transform(el) {
        Some(raw) => CssTransform::parse(&raw)?,
        None => CssTransform::None,
    };
    let Some(decomposed) = transform.scale_translate() else {
        return Ok(live);
    };

    let layout = page.layout_size(el);
    let origin = match page.transform_origin(el) {
        Some(raw) => TransformOrigin::parse(&raw)?.0,
        None => Point::new(layout.width * 0.5, layout.height * 0.5),
    };
    Ok(effective_rect(live, Some(decomposed), origin, layout))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/rect.rs"]
mod tests;
