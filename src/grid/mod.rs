//! The grid: tiles, content panels, visibility tracking, choreography and the controller.

pub(crate) mod chrome;
pub(crate) mod content;
pub(crate) mod controller;
pub(crate) mod item;
pub(crate) mod transitions;
pub(crate) mod visibility;

pub use content::ContentItem;
pub use controller::{Grid, GridEvent, Outcome, View, find_root};
pub use item::GridItem;
pub use visibility::VisibilityTracker;
