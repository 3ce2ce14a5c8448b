//! Tunables for the grid, loadable from JSON.
//!
//! Every section falls back to the reference values when omitted, so `{}` is a complete
//! configuration.

use crate::engine::ScrollOptions;
use crate::foundation::error::{GridError, GridResult};
use crate::timeline::Ease;

/// Open and close choreography.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Default step duration in seconds.
    pub duration: f64,
    /// Default step ease.
    pub ease: Ease,
    /// Fraction of the viewport height the opened image spans.
    pub zoom_fraction: f64,
    /// Per-item delay for docked images and nav slots, in seconds.
    pub stagger: f64,
    /// Delay of the bottom heading relative to the top one, in seconds.
    pub heading_lag: f64,
    /// Offset of the `showContent`/`showGrid` label from `start`, in seconds.
    pub content_delay: f64,
    /// Lower bound of the random nav-slot offset, in percent of the slot height.
    pub nav_offset_min: f64,
    /// Upper bound of the random nav-slot offset, in percent of the slot height.
    pub nav_offset_max: f64,
    /// Nav slots skipped after the docked ones before revealing the rest.
    pub nav_reserved_slots: usize,
    /// Ease of caption fades when opening.
    pub caption_ease: Ease,
    /// Ease of caption fades when closing.
    pub caption_return_ease: Ease,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration: 1.4,
            ease: Ease::ExpoInOut,
            zoom_fraction: 0.7,
            stagger: 0.03,
            heading_lag: 0.05,
            content_delay: 0.2,
            nav_offset_min: 100.0,
            nav_offset_max: 300.0,
            nav_reserved_slots: 1,
            caption_ease: Ease::Expo,
            caption_return_ease: Ease::Power4In,
        }
    }
}

/// Pointer-hover scaling of a tile.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    /// Step duration in seconds.
    pub duration: f64,
    /// Ease of the outer layer.
    pub ease: Ease,
    /// Ease of the inner layer while entering.
    pub inner_ease: Ease,
    /// Outer layer `(scale_x, scale_y)` while hovered.
    pub outer_scale: (f64, f64),
    /// Inner layer `(scale_x, scale_y)` while hovered.
    pub inner_scale: (f64, f64),
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            duration: 1.4,
            ease: Ease::Expo,
            inner_ease: Ease::Power4,
            outer_scale: (0.88, 0.95),
            inner_scale: (1.7, 1.2),
        }
    }
}

/// Selectors used to find the grid's parts in the page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Grid root.
    pub root: String,
    /// Columns inside the root.
    pub column: String,
    /// Tiles inside the root.
    pub item: String,
    /// Tile image wrapper (the clickable outer layer).
    pub image_outer: String,
    /// Tile image (the inner layer).
    pub image_inner: String,
    /// Tile caption.
    pub caption: String,
    /// Data attribute on the outer layer holding the 1-based content position.
    pub position_attr: String,
    /// Content panels.
    pub content_item: String,
    /// Content panel title.
    pub content_title: String,
    /// Content panel text.
    pub content_text: String,
    /// Top heading.
    pub heading_top: String,
    /// Bottom heading.
    pub heading_bottom: String,
    /// Back control.
    pub back: String,
    /// Thumbnail nav strip.
    pub nav: String,
    /// Thumbnail nav slots.
    pub nav_item: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            root: ".columns".to_owned(),
            column: ".column".to_owned(),
            item: ".column__item".to_owned(),
            image_outer: ".column__item-imgwrap".to_owned(),
            image_inner: ".column__item-img".to_owned(),
            caption: "figcaption".to_owned(),
            position_attr: "pos".to_owned(),
            content_item: ".content__item".to_owned(),
            content_title: ".content__item-title".to_owned(),
            content_text: ".content__item-text".to_owned(),
            heading_top: ".heading--up".to_owned(),
            heading_bottom: ".heading--down".to_owned(),
            back: ".button-back".to_owned(),
            nav: ".content__nav".to_owned(),
            nav_item: ".content__nav-item".to_owned(),
        }
    }
}

/// Class names toggled on the page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Classes {
    /// On tiles currently intersecting the viewport.
    pub in_view: String,
    /// On the content panel being shown.
    pub current_content: String,
    /// On the body while the content view is shown.
    pub viewing: String,
    /// On the body while a transition to content runs or content is shown.
    pub overflow_hidden: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            in_view: "in-view".to_owned(),
            current_content: "content__item--current".to_owned(),
            viewing: "view-content".to_owned(),
            overflow_hidden: "oh".to_owned(),
        }
    }
}

/// Complete grid configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Options passed to the scroll engine on every (re)initialization.
    pub scroll: ScrollOptions,
    /// Open/close choreography.
    pub transition: TransitionConfig,
    /// Hover choreography.
    pub hover: HoverConfig,
    /// Markup selectors.
    pub selectors: Selectors,
    /// Toggled class names.
    pub classes: Classes,
}

impl GridConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(s: &str) -> GridResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> GridResult<()> {
        self.scroll.validate()?;

        let t = &self.transition;
        positive("transition.duration", t.duration)?;
        positive("transition.zoom_fraction", t.zoom_fraction)?;
        non_negative("transition.stagger", t.stagger)?;
        non_negative("transition.heading_lag", t.heading_lag)?;
        non_negative("transition.content_delay", t.content_delay)?;
        if !(t.nav_offset_min.is_finite()
            && t.nav_offset_max.is_finite()
            && t.nav_offset_min <= t.nav_offset_max)
        {
            return Err(GridError::validation(
                "transition.nav_offset_min must not exceed transition.nav_offset_max",
            ));
        }

        positive("hover.duration", self.hover.duration)?;
        for (name, (sx, sy)) in [
            ("hover.outer_scale", self.hover.outer_scale),
            ("hover.inner_scale", self.hover.inner_scale),
        ] {
            positive(name, sx)?;
            positive(name, sy)?;
        }

        let s = &self.selectors;
        for (name, value) in [
            ("selectors.root", &s.root),
            ("selectors.item", &s.item),
            ("selectors.image_outer", &s.image_outer),
            ("selectors.content_item", &s.content_item),
            ("selectors.nav_item", &s.nav_item),
            ("selectors.position_attr", &s.position_attr),
        ] {
            if value.trim().is_empty() {
                return Err(GridError::validation(format!("{name} must be non-empty")));
            }
        }
        Ok(())
    }
}

fn positive(name: &str, v: f64) -> GridResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(GridError::validation(format!("{name} must be > 0, got {v}")))
    }
}

fn non_negative(name: &str, v: f64) -> GridResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(GridError::validation(format!("{name} must be >= 0, got {v}")))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
