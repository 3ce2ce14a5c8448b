use crate::foundation::core::{Rect, Size};

/// Uniform scale plus translation applied to an image layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageTransform {
    /// Uniform scale factor.
    pub scale: f64,
    /// Horizontal translation in px.
    pub x: f64,
    /// Vertical translation in px.
    pub y: f64,
}

impl ImageTransform {
    /// Scale 1 at the layer's layout position.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        x: 0.0,
        y: 0.0,
    };

    /// Scale and translate `image` so it is centered in the viewport and spans `fraction` of
    /// the viewport height.
    pub fn center_zoom(viewport: Size, image: Rect, fraction: f64) -> Self {
        let center = image.center();
        Self {
            scale: viewport.height * fraction / image.height(),
            x: viewport.width * 0.5 - center.x,
            y: viewport.height * 0.5 - center.y,
        }
    }

    /// Scale and translate `image` onto a thumbnail-nav slot.
    ///
    /// `slot_height` is the shared slot height; slots are laid out with equal heights.
    pub fn dock(slot: Rect, slot_height: f64, image: Rect) -> Self {
        let to = slot.center();
        let from = image.center();
        Self {
            scale: slot_height / image.height(),
            x: to.x - from.x,
            y: to.y - from.y,
        }
    }

    /// `true` when every component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.scale.is_finite() && self.x.is_finite() && self.y.is_finite()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/fit.rs"]
mod tests;
