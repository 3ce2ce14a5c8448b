//! gridreveal drives an interactive image grid that opens a tile into a full-screen content
//! view.
//!
//! The crate owns the view-state machine, the transform geometry and the transition
//! choreography. Tweening, smooth scrolling and the document itself stay with the host and are
//! reached through three traits:
//!
//! - [`Page`] for element queries, geometry and class toggles
//! - [`ScrollEngine`] for the smooth-scrolling viewport
//! - [`Tweener`] for playing declarative [`Timeline`]s
//!
//! A [`Grid`] owns one of each and consumes every input as a [`GridEvent`]. [`HeadlessSession`]
//! wires it to in-memory stand-ins for tests and the `gridreveal` CLI.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

pub(crate) mod engine;
pub(crate) mod geometry;
pub(crate) mod grid;
pub(crate) mod page;
pub(crate) mod timeline;

/// Grid configuration.
pub mod config;
/// Headless sessions and scripts.
pub mod session;

pub use crate::foundation::core::{Affine, ElementId, Point, Rect, Size, TimelineId, Vec2};
pub use crate::foundation::error::{GridError, GridResult};

pub use crate::config::{Classes, GridConfig, HoverConfig, Selectors, TransitionConfig};
pub use crate::engine::{
    DeviceScroll, HeadlessScroll, HeadlessTweener, ScrollCall, ScrollEngine, ScrollEvent,
    ScrollOptions, ScrollTo, TweenSignal, Tweener,
};
pub use crate::geometry::fit::ImageTransform;
pub use crate::geometry::matrix::{CssTransform, ScaleTranslate, TransformOrigin};
pub use crate::geometry::rect::{effective_rect, effective_rect_of, viewport_size};
pub use crate::grid::{
    ContentItem, Grid, GridEvent, GridItem, Outcome, View, VisibilityTracker, find_root,
};
pub use crate::page::{IntersectionEntry, MemoryPage, NodeFixture, Page, PageFixture, demo_fixture};
pub use crate::session::{HeadlessSession, Script, ScriptStep, StateRecord};
pub use crate::timeline::{
    Action, Delay, Ease, Label, Length, Position, Props, Schedule, ScheduledAction,
    ScheduledTween, Step, StepKind, Timeline, TimelineDefaults, TimelineKind,
};
