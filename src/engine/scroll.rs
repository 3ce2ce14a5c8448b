use crate::foundation::error::{GridError, GridResult};

/// Per-device-class scroll settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DeviceScroll {
    /// Whether smooth scrolling is enabled on this device class.
    pub smooth: bool,
}

impl Default for DeviceScroll {
    fn default() -> Self {
        Self { smooth: true }
    }
}

/// Options passed to [`ScrollEngine::init`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScrollOptions {
    /// Smooth scrolling on desktop.
    pub smooth: bool,
    /// Linear interpolation factor per frame, in `(0, 1]`.
    pub lerp: f64,
    /// Phone breakpoint.
    pub smartphone: DeviceScroll,
    /// Tablet breakpoint.
    pub tablet: DeviceScroll,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            smooth: true,
            lerp: 0.13,
            smartphone: DeviceScroll::default(),
            tablet: DeviceScroll::default(),
        }
    }
}

impl ScrollOptions {
    /// Check the interpolation factor.
    pub fn validate(&self) -> GridResult<()> {
        if !(self.lerp > 0.0 && self.lerp <= 1.0) {
            return Err(GridError::validation("scroll.lerp must be in (0, 1]"));
        }
        Ok(())
    }
}

/// Options for [`ScrollEngine::scroll_to`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollTo {
    /// Animation length in seconds; 0 jumps.
    pub duration: f64,
    /// Skip interpolation entirely.
    pub disable_lerp: bool,
}

impl ScrollTo {
    /// Jump without easing.
    pub const INSTANT: Self = Self {
        duration: 0.0,
        disable_lerp: true,
    };
}

/// Scroll position reported by the engine on every scroll tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollEvent {
    /// Horizontal scroll in px.
    pub x: f64,
    /// Vertical scroll in px.
    pub y: f64,
}

/// Smooth-scroll engine contract.
///
/// The grid destroys the engine while the content view is shown and re-creates it on the way
/// back. Scroll ticks reach the grid as [`GridEvent::Scroll`](crate::GridEvent::Scroll).
pub trait ScrollEngine {
    /// Create the engine (or re-create it after [`ScrollEngine::destroy`]).
    fn init(&mut self, options: &ScrollOptions);
    /// Stop scrolling and release layout-affecting transforms.
    fn destroy(&mut self);
    /// Move to `offset` px.
    fn scroll_to(&mut self, offset: f64, opts: ScrollTo);
    /// `true` while the engine is in a scroll gesture. Clicks on tiles are ignored meanwhile.
    fn is_scrolling(&self) -> bool;
    /// `true` between `init` and `destroy`.
    fn is_active(&self) -> bool;
}

/// One recorded call on a [`HeadlessScroll`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum ScrollCall {
    /// `init`.
    Init {
        /// Options given.
        options: ScrollOptions,
    },
    /// `destroy`.
    Destroy,
    /// `scroll_to`.
    ScrollTo {
        /// Target offset.
        offset: f64,
        /// Options given.
        opts: ScrollTo,
    },
}

/// Scroll engine without a viewport: tracks position and records every call.
#[derive(Clone, Debug, Default)]
pub struct HeadlessScroll {
    active: bool,
    scrolling: bool,
    position: f64,
    calls: Vec<ScrollCall>,
}

impl HeadlessScroll {
    /// Inactive engine at offset 0. The grid initializes it on mount.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current vertical offset.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Every call received, in order.
    pub fn calls(&self) -> &[ScrollCall] {
        &self.calls
    }

    /// Force the "in a scroll gesture" flag.
    pub fn set_scrolling(&mut self, scrolling: bool) {
        self.scrolling = scrolling;
    }

    /// Scroll by `delta` px, returning the tick event while the engine is active.
    pub fn scroll_by(&mut self, delta: f64) -> Option<ScrollEvent> {
        if !self.active {
            return None;
        }
        self.position = (self.position + delta).max(0.0);
        Some(ScrollEvent {
            x: 0.0,
            y: self.position,
        })
    }
}

impl ScrollEngine for HeadlessScroll {
    fn init(&mut self, options: &ScrollOptions) {
        self.active = true;
        self.calls.push(ScrollCall::Init { options: *options });
    }

    fn destroy(&mut self) {
        self.active = false;
        self.scrolling = false;
        self.calls.push(ScrollCall::Destroy);
    }

    fn scroll_to(&mut self, offset: f64, opts: ScrollTo) {
        self.position = offset;
        self.calls.push(ScrollCall::ScrollTo { offset, opts });
    }

    fn is_scrolling(&self) -> bool {
        self.active && self.scrolling
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/scroll.rs"]
mod tests;
