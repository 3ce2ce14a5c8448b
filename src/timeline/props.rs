use crate::geometry::fit::ImageTransform;

/// A translation length: absolute px or percent of the element's own size.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    /// Pixels.
    Px(f64),
    /// Percent of the element's own width (x) or height (y).
    Percent(f64),
}

/// Animatable properties. `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Props {
    /// Horizontal translation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Length>,
    /// Vertical translation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Length>,
    /// Horizontal scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f64>,
    /// Vertical scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f64>,
    /// Opacity in `[0, 1]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Stacking order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    /// `will-change` hint; an empty string clears it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_change: Option<String>,
}

impl Props {
    /// No properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uniform scale plus px translation of an image layer.
    pub fn image(t: ImageTransform) -> Self {
        Self::new().scale(t.scale).x_px(t.x).y_px(t.y)
    }

    /// Horizontal translation in px.
    pub fn x_px(mut self, v: f64) -> Self {
        self.x = Some(Length::Px(v));
        self
    }

    /// Vertical translation in px.
    pub fn y_px(mut self, v: f64) -> Self {
        self.y = Some(Length::Px(v));
        self
    }

    /// Vertical translation in percent of the element's height.
    pub fn y_percent(mut self, v: f64) -> Self {
        self.y = Some(Length::Percent(v));
        self
    }

    /// Uniform scale on both axes.
    pub fn scale(mut self, v: f64) -> Self {
        self.scale_x = Some(v);
        self.scale_y = Some(v);
        self
    }

    /// Horizontal scale.
    pub fn scale_x(mut self, v: f64) -> Self {
        self.scale_x = Some(v);
        self
    }

    /// Vertical scale.
    pub fn scale_y(mut self, v: f64) -> Self {
        self.scale_y = Some(v);
        self
    }

    /// Opacity.
    pub fn opacity(mut self, v: f64) -> Self {
        self.opacity = Some(v);
        self
    }

    /// Stacking order.
    pub fn z_index(mut self, v: i32) -> Self {
        self.z_index = Some(v);
        self
    }

    /// `will-change` hint.
    pub fn will_change(mut self, v: &str) -> Self {
        self.will_change = Some(v.to_owned());
        self
    }

    /// Overlay every field set in `other`.
    pub fn merge(&mut self, other: &Props) {
        if other.x.is_some() {
            self.x = other.x;
        }
        if other.y.is_some() {
            self.y = other.y;
        }
        if other.scale_x.is_some() {
            self.scale_x = other.scale_x;
        }
        if other.scale_y.is_some() {
            self.scale_y = other.scale_y;
        }
        if other.opacity.is_some() {
            self.opacity = other.opacity;
        }
        if other.z_index.is_some() {
            self.z_index = other.z_index;
        }
        if other.will_change.is_some() {
            self.will_change.clone_from(&other.will_change);
        }
    }

    /// `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/props.rs"]
mod tests;
