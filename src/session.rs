//! Headless runs: a grid over a [`MemoryPage`] driven by a JSON script.

use crate::config::GridConfig;
use crate::engine::{HeadlessScroll, HeadlessTweener, ScrollEngine};
use crate::foundation::core::{Size, Vec2};
use crate::foundation::error::{GridError, GridResult};
use crate::grid::{Grid, GridEvent, Outcome, View, find_root};
use crate::page::{MemoryPage, Page};

/// Upper bound on signal rounds in [`HeadlessSession::settle`].
const MAX_SETTLE_ROUNDS: usize = 64;

/// One scripted user or host action.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Click tile `item`.
    Click {
        /// Tile index.
        item: usize,
    },
    /// Click the back control.
    Back,
    /// Pointer enters tile `item`.
    HoverEnter {
        /// Tile index.
        item: usize,
    },
    /// Pointer leaves tile `item`.
    HoverLeave {
        /// Tile index.
        item: usize,
    },
    /// Resize the window.
    Resize {
        /// New inner width.
        width: f64,
        /// New inner height.
        height: f64,
    },
    /// Scroll by `delta` px; the page content moves and intersections are re-reported.
    Scroll {
        /// Signed distance in px.
        delta: f64,
    },
    /// Re-report intersections of every observed tile.
    Refresh,
    /// Advance the tween clock.
    Advance {
        /// Seconds.
        secs: f64,
    },
    /// Run every timeline to completion.
    Settle,
    /// Force the scroll engine's "in a gesture" flag.
    SetScrolling {
        /// Flag value.
        scrolling: bool,
    },
}

/// A replayable sequence of steps.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Script {
    /// Seed for the tween engine's random offsets.
    #[serde(default)]
    pub seed: u64,
    /// Steps in order.
    pub steps: Vec<ScriptStep>,
}

impl Script {
    /// Parse a script from JSON.
    pub fn from_json_str(s: &str) -> GridResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Grid state observed after one step.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StateRecord {
    /// The step just run.
    pub step: ScriptStep,
    /// Outcome for event steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    /// Current view.
    pub view: View,
    /// Whether a transition is in flight.
    pub animating: bool,
    /// Whether the scroll engine is active.
    pub scroll_active: bool,
    /// Cached scroll offset.
    pub last_scroll_offset: f64,
    /// Visible tiles.
    pub visible: Vec<usize>,
    /// Classes on the body.
    pub body_classes: Vec<String>,
}

/// A mounted grid over in-memory collaborators.
#[derive(Debug)]
pub struct HeadlessSession {
    grid: Grid<MemoryPage, HeadlessScroll, HeadlessTweener>,
}

impl HeadlessSession {
    /// Mount a grid on `page` and report the initial intersections.
    pub fn new(page: MemoryPage, config: GridConfig, seed: u64) -> GridResult<Self> {
        let root = find_root(&page, &config.selectors)?;
        let grid = Grid::mount(
            page,
            HeadlessScroll::new(),
            HeadlessTweener::new(seed),
            root,
            config,
        )?;
        let mut session = Self { grid };
        session.refresh()?;
        Ok(session)
    }

    /// The grid.
    pub fn grid(&self) -> &Grid<MemoryPage, HeadlessScroll, HeadlessTweener> {
        &self.grid
    }

    /// The grid, mutably.
    pub fn grid_mut(&mut self) -> &mut Grid<MemoryPage, HeadlessScroll, HeadlessTweener> {
        &mut self.grid
    }

    /// Forward one event to the grid.
    pub fn dispatch(&mut self, event: GridEvent) -> GridResult<Outcome> {
        self.grid.handle(event)
    }

    /// Re-report intersections of every observed tile.
    pub fn refresh(&mut self) -> GridResult<Outcome> {
        let entries = self.grid.page().intersections();
        self.grid.handle(GridEvent::Intersection(entries))
    }

    /// Advance the tween clock and feed the resulting signals to the grid.
    pub fn advance(&mut self, secs: f64) -> GridResult<()> {
        let signals = self.grid.tweener_mut().advance(secs);
        for signal in signals {
            self.grid.handle(GridEvent::Tween(signal))?;
        }
        Ok(())
    }

    /// Run every timeline, including ones started by signal handling, to completion.
    pub fn settle(&mut self) -> GridResult<()> {
        for _ in 0..MAX_SETTLE_ROUNDS {
            let signals = self.grid.tweener_mut().finish_all();
            if signals.is_empty() && self.grid.tweener().is_idle() {
                return Ok(());
            }
            for signal in signals {
                self.grid.handle(GridEvent::Tween(signal))?;
            }
        }
        Err(GridError::validation(format!(
            "timelines did not settle within {MAX_SETTLE_ROUNDS} rounds"
        )))
    }

    /// Scroll the page by `delta` px.
    ///
    /// Does nothing while the scroll engine is destroyed.
    pub fn scroll_by(&mut self, delta: f64) -> GridResult<Outcome> {
        let before = self.grid.scroll().position();
        let Some(ev) = self.grid.scroll_mut().scroll_by(delta) else {
            return Ok(Outcome::Ignored);
        };
        let moved = ev.y - before;
        let root = self.grid.root();
        self.grid
            .page_mut()
            .translate_subtree(root, Vec2::new(0.0, -moved));
        let outcome = self.grid.handle(GridEvent::Scroll(ev))?;
        self.refresh()?;
        Ok(outcome)
    }

    /// Resize the window.
    pub fn resize(&mut self, size: Size) -> GridResult<Outcome> {
        self.grid.page_mut().set_viewport(size);
        self.grid.handle(GridEvent::Resize(size))
    }

    /// Run one step.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn step(&mut self, step: &ScriptStep) -> GridResult<Option<Outcome>> {
        let outcome = match *step {
            ScriptStep::Click { item } => Some(self.dispatch(GridEvent::ItemClick(item))?),
            ScriptStep::Back => Some(self.dispatch(GridEvent::BackClick)?),
            ScriptStep::HoverEnter { item } => {
                Some(self.dispatch(GridEvent::PointerEnter(item))?)
            }
            ScriptStep::HoverLeave { item } => {
                Some(self.dispatch(GridEvent::PointerLeave(item))?)
            }
            ScriptStep::Resize { width, height } => {
                if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
                    return Err(GridError::validation(format!(
                        "resize to {width}x{height} is not a valid viewport"
                    )));
                }
                Some(self.resize(Size::new(width, height))?)
            }
            ScriptStep::Scroll { delta } => Some(self.scroll_by(delta)?),
            ScriptStep::Refresh => Some(self.refresh()?),
            ScriptStep::Advance { secs } => {
                self.advance(secs)?;
                None
            }
            ScriptStep::Settle => {
                self.settle()?;
                None
            }
            ScriptStep::SetScrolling { scrolling } => {
                self.grid.scroll_mut().set_scrolling(scrolling);
                None
            }
        };
        Ok(outcome)
    }

    /// Run every step of `script` and record the state after each.
    pub fn run(&mut self, script: &Script) -> GridResult<Vec<StateRecord>> {
        let mut records = Vec::with_capacity(script.steps.len());
        for step in &script.steps {
            let outcome = self.step(step)?;
            records.push(self.record(step.clone(), outcome));
        }
        Ok(records)
    }

    /// Snapshot of the current state.
    pub fn record(&self, step: ScriptStep, outcome: Option<Outcome>) -> StateRecord {
        let page = self.grid.page();
        StateRecord {
            step,
            outcome,
            view: self.grid.view(),
            animating: self.grid.is_animating(),
            scroll_active: self.grid.scroll().is_active(),
            last_scroll_offset: self.grid.last_scroll_offset(),
            visible: self.grid.visible_items(),
            body_classes: page.classes(page.body()).to_vec(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
