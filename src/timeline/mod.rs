//! Declarative animation timelines.
//!
//! A [`Timeline`] is plain data: labelled positions, a list of [`Step`]s and start/complete
//! hooks. The grid builds timelines and hands them to a [`Tweener`](crate::Tweener); the
//! choreography can be asserted on directly without running any tween engine.

pub(crate) mod props;
pub(crate) mod schedule;
pub(crate) mod step;

pub use props::{Length, Props};
pub use schedule::{Schedule, ScheduledAction, ScheduledTween};
pub use step::{
    Action, Delay, Ease, Label, Position, Step, StepKind, Timeline, TimelineDefaults,
    TimelineKind,
};
