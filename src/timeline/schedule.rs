use crate::foundation::core::ElementId;
use crate::foundation::error::{GridError, GridResult};
use crate::timeline::props::Props;
use crate::timeline::step::{Action, Ease, StepKind, Timeline};

/// One target of one step, placed on absolute time.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScheduledTween {
    /// Index of the originating step in [`Timeline::steps`].
    pub step: usize,
    /// Animated element.
    pub target: ElementId,
    /// Start time in seconds, clamped to the timeline start.
    ///
    /// A tween whose delay lands before the timeline start begins part-way through and keeps
    /// its own `end`.
    pub start: f64,
    /// End time in seconds; equals `start` for instant sets.
    pub end: f64,
    /// Values written at `start`, for from-to steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Props>,
    /// Values reached at `end`.
    pub props: Props,
    /// Effective ease.
    pub ease: Ease,
}

/// An action placed on absolute time.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScheduledAction {
    /// Fire time in seconds.
    pub at: f64,
    /// The action.
    pub action: Action,
}

/// A timeline flattened to absolute times, both lists sorted by time with declaration order
/// kept for ties.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Schedule {
    /// Per-target tweens.
    pub tweens: Vec<ScheduledTween>,
    /// Timed actions, including step completion actions. Timeline hooks are not included.
    pub actions: Vec<ScheduledAction>,
    /// Time at which the last tween or action finishes.
    pub duration: f64,
}

impl Schedule {
    /// Tweens animating `el`, in start order.
    pub fn tweens_for(&self, el: ElementId) -> impl Iterator<Item = &ScheduledTween> + '_ {
        self.tweens.iter().filter(move |t| t.target == el)
    }
}

impl Timeline {
    /// Resolve labels, delays and durations into absolute times.
    ///
    /// Negative start times (from negative delays) are clamped to 0 while end times keep the
    /// delay, so a negative stagger finishes later targets earlier.
    pub fn schedule(&self) -> GridResult<Schedule> {
        let mut tweens = Vec::new();
        let mut actions = Vec::new();
        let mut duration = 0.0f64;

        for (idx, step) in self.steps.iter().enumerate() {
            let base = self.resolve(&step.at)?;
            let len = match step.kind {
                StepKind::Set | StepKind::Call { .. } => 0.0,
                StepKind::To | StepKind::FromTo { .. } => {
                    step.duration.unwrap_or(self.defaults.duration)
                }
            };
            if !len.is_finite() || len < 0.0 {
                return Err(GridError::validation(format!(
                    "step {idx} has invalid duration {len}"
                )));
            }

            let mut step_end = base.max(0.0);
            if let StepKind::Call { action } = &step.kind {
                let at = (base + step.delay.for_index(0)).max(0.0);
                actions.push(ScheduledAction {
                    at,
                    action: action.clone(),
                });
                step_end = at;
            }

            let from = match &step.kind {
                StepKind::FromTo { from } => Some(from.clone()),
                _ => None,
            };
            for (i, &target) in step.targets.iter().enumerate() {
                let offset = base + step.delay.for_index(i);
                let start = offset.max(0.0);
                let end = (offset + len).max(start);
                step_end = step_end.max(end);
                tweens.push(ScheduledTween {
                    step: idx,
                    target,
                    start,
                    end,
                    from: from.clone(),
                    props: step.props.clone(),
                    ease: step.ease.unwrap_or(self.defaults.ease),
                });
            }

            for action in &step.on_complete {
                actions.push(ScheduledAction {
                    at: step_end,
                    action: action.clone(),
                });
            }
            duration = duration.max(step_end);
        }

        tweens.sort_by(|a, b| a.start.total_cmp(&b.start));
        actions.sort_by(|a, b| a.at.total_cmp(&b.at));
        Ok(Schedule {
            tweens,
            actions,
            duration,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/schedule.rs"]
mod tests;
