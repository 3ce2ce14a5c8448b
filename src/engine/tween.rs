use crate::foundation::core::{ElementId, TimelineId};
use crate::foundation::error::GridResult;
use crate::timeline::{Action, Props, Timeline};

/// Lifecycle report from the tween engine, fed back through
/// [`GridEvent::Tween`](crate::GridEvent::Tween).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum TweenSignal {
    /// The timeline rendered its first frame.
    Started {
        /// Timeline handle.
        timeline: TimelineId,
    },
    /// A timed action is due.
    Action {
        /// Timeline handle.
        timeline: TimelineId,
        /// The action to apply.
        action: Action,
    },
    /// The timeline reached its end.
    Completed {
        /// Timeline handle.
        timeline: TimelineId,
    },
}

impl TweenSignal {
    /// The timeline this signal belongs to.
    pub fn timeline(&self) -> TimelineId {
        match self {
            Self::Started { timeline }
            | Self::Action { timeline, .. }
            | Self::Completed { timeline } => *timeline,
        }
    }
}

/// Tween engine contract.
///
/// The engine owns property interpolation. Class toggles and other side effects stay with the
/// grid: the engine reports them back as [`TweenSignal::Action`] at the scheduled time.
pub trait Tweener {
    /// Start a timeline and return its handle.
    fn play(&mut self, timeline: &Timeline) -> GridResult<TimelineId>;

    /// Write `props` to `targets` immediately.
    fn set(&mut self, targets: &[ElementId], props: &Props);

    /// Stop every pending tween on `targets`, leaving their current values in place.
    fn kill_tweens_of(&mut self, targets: &[ElementId]);

    /// Uniform random value in `[min, max)`.
    fn random(&mut self, min: f64, max: f64) -> f64;
}
