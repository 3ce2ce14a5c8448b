use std::collections::BTreeMap;

use crate::engine::tween::{TweenSignal, Tweener};
use crate::foundation::core::{ElementId, TimelineId};
use crate::foundation::error::GridResult;
use crate::foundation::math::Rng64;
use crate::timeline::{Props, Schedule, Timeline};

/// Clock tolerance in seconds.
const EPS: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Pending,
    Running,
    Done,
}

#[derive(Debug)]
struct Running {
    id: TimelineId,
    schedule: Schedule,
    elapsed: f64,
    started: bool,
    phases: Vec<Phase>,
    next_action: usize,
}

impl Running {
    fn is_finished(&self) -> bool {
        self.started
            && self.elapsed + EPS >= self.schedule.duration
            && self.next_action >= self.schedule.actions.len()
            && self.phases.iter().all(|p| *p == Phase::Done)
    }
}

/// Tween engine on a virtual clock.
///
/// Time only moves through [`HeadlessTweener::advance`]. Properties jump to their end values
/// when a tween finishes; `from` values of from-to steps are written when the step starts.
/// Every played timeline is kept for inspection.
#[derive(Debug)]
pub struct HeadlessTweener {
    next_id: u64,
    rng: Rng64,
    running: Vec<Running>,
    values: BTreeMap<ElementId, Props>,
    played: Vec<(TimelineId, Timeline)>,
    killed: Vec<ElementId>,
}

impl HeadlessTweener {
    /// Engine whose [`Tweener::random`] draws from a generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            next_id: 1,
            rng: Rng64::new(seed),
            running: Vec::new(),
            values: BTreeMap::new(),
            played: Vec::new(),
            killed: Vec::new(),
        }
    }

    /// Move the clock forward by `dt` seconds and collect the signals due, timelines in play
    /// order.
    pub fn advance(&mut self, dt: f64) -> Vec<TweenSignal> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut out = Vec::new();

        for run in &mut self.running {
            let now = run.elapsed + dt;
            if !run.started {
                run.started = true;
                out.push(TweenSignal::Started { timeline: run.id });
            }

            for (tween, phase) in run.schedule.tweens.iter().zip(run.phases.iter_mut()) {
                if *phase == Phase::Done || tween.start > now + EPS {
                    continue;
                }
                let entry = self.values.entry(tween.target).or_default();
                if *phase == Phase::Pending {
                    if let Some(from) = &tween.from {
                        entry.merge(from);
                    }
                    *phase = Phase::Running;
                }
                if tween.end <= now + EPS {
                    entry.merge(&tween.props);
                    *phase = Phase::Done;
                }
            }

            while let Some(scheduled) = run.schedule.actions.get(run.next_action) {
                if scheduled.at > now + EPS {
                    break;
                }
                out.push(TweenSignal::Action {
                    timeline: run.id,
                    action: scheduled.action.clone(),
                });
                run.next_action += 1;
            }

            run.elapsed = now;
            if run.is_finished() {
                out.push(TweenSignal::Completed { timeline: run.id });
            }
        }

        self.running.retain(|r| !r.is_finished());
        out
    }

    /// Advance just far enough for every running timeline to complete.
    pub fn finish_all(&mut self) -> Vec<TweenSignal> {
        let remaining = self
            .running
            .iter()
            .map(|r| (r.schedule.duration - r.elapsed).max(0.0))
            .fold(0.0f64, f64::max);
        self.advance(remaining)
    }

    /// `true` when nothing is running.
    pub fn is_idle(&self) -> bool {
        self.running.is_empty()
    }

    /// Handles of running timelines, in play order.
    pub fn running(&self) -> Vec<TimelineId> {
        self.running.iter().map(|r| r.id).collect()
    }

    /// Last written values of `el`.
    pub fn values(&self, el: ElementId) -> Option<&Props> {
        self.values.get(&el)
    }

    /// Every timeline played so far, with its handle.
    pub fn played(&self) -> &[(TimelineId, Timeline)] {
        &self.played
    }

    /// Most recently played timeline.
    pub fn last_played(&self) -> Option<&Timeline> {
        self.played.last().map(|(_, tl)| tl)
    }

    /// Elements passed to [`Tweener::kill_tweens_of`], in call order.
    pub fn killed(&self) -> &[ElementId] {
        &self.killed
    }
}

impl Default for HeadlessTweener {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Tweener for HeadlessTweener {
    #[tracing::instrument(level = "trace", skip(self, timeline), fields(kind = ?timeline.kind))]
    fn play(&mut self, timeline: &Timeline) -> GridResult<TimelineId> {
        let schedule = timeline.schedule()?;
        let id = TimelineId(self.next_id);
        self.next_id += 1;
        tracing::trace!(
            timeline = id.0,
            duration = schedule.duration,
            tweens = schedule.tweens.len(),
            "timeline scheduled"
        );
        self.running.push(Running {
            id,
            phases: vec![Phase::Pending; schedule.tweens.len()],
            schedule,
            elapsed: 0.0,
            started: false,
            next_action: 0,
        });
        self.played.push((id, timeline.clone()));
        Ok(id)
    }

    fn set(&mut self, targets: &[ElementId], props: &Props) {
        for &el in targets {
            self.values.entry(el).or_default().merge(props);
        }
    }

    fn kill_tweens_of(&mut self, targets: &[ElementId]) {
        for run in &mut self.running {
            for (tween, phase) in run.schedule.tweens.iter().zip(run.phases.iter_mut()) {
                if targets.contains(&tween.target) {
                    *phase = Phase::Done;
                }
            }
        }
        self.killed.extend_from_slice(targets);
    }

    fn random(&mut self, min: f64, max: f64) -> f64 {
        self.rng.range(min, max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/headless.rs"]
mod tests;
