//! Open, close and hover choreography as pure timeline builders.
//!
//! Builders never read the page or touch engines: everything they need is resolved beforehand
//! into a [`TransitionPlan`], so the same plan drives the open timeline and, later, the close
//! timeline that reverses it.

use crate::config::{Classes, HoverConfig, TransitionConfig};
use crate::foundation::core::{ElementId, present};
use crate::geometry::fit::ImageTransform;
use crate::timeline::{
    Action, Delay, Position, Props, Step, Timeline, TimelineDefaults, TimelineKind,
};

const START: &str = "start";
const SHOW_CONTENT: &str = "showContent";
const SHOW_GRID: &str = "showGrid";

const RAISED_Z: i32 = 100;
const RESTING_Z: i32 = 1;

/// A visible tile that moves onto a nav slot while the content view is open.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Docked {
    pub(crate) item: usize,
    pub(crate) outer: ElementId,
    pub(crate) caption: Option<ElementId>,
    pub(crate) transform: ImageTransform,
}

/// Everything an open/close pair animates, resolved at the moment the open begins.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TransitionPlan {
    pub(crate) item: usize,
    pub(crate) raised: Vec<ElementId>,
    pub(crate) outer: ElementId,
    pub(crate) inner: Option<ElementId>,
    pub(crate) caption: Option<ElementId>,
    pub(crate) zoom: ImageTransform,
    pub(crate) docked: Vec<Docked>,
    pub(crate) remaining: Vec<(usize, ElementId)>,
    pub(crate) nav_items: Vec<ElementId>,
    /// Percent offset nav slots are pushed down by while hidden.
    pub(crate) nav_offset: f64,
    pub(crate) heading_top: Option<ElementId>,
    pub(crate) heading_bottom: Option<ElementId>,
    pub(crate) body: ElementId,
    pub(crate) back: Option<ElementId>,
    pub(crate) nav: Option<ElementId>,
    pub(crate) panel: ElementId,
    pub(crate) title: Option<ElementId>,
    pub(crate) text: Option<ElementId>,
}

impl TransitionPlan {
    /// Nav slots not covered by a docked image nor reserved.
    pub(crate) fn unused_nav(&self, reserved: usize) -> &[ElementId] {
        let from = (self.docked.len() + reserved).min(self.nav_items.len());
        &self.nav_items[from..]
    }

    pub(crate) fn docked_outers(&self) -> Vec<ElementId> {
        self.docked.iter().map(|d| d.outer).collect()
    }

    fn remaining_tiles(&self) -> Vec<ElementId> {
        self.remaining.iter().map(|(_, el)| *el).collect()
    }

    fn captions(&self) -> Vec<ElementId> {
        present(
            self.docked
                .iter()
                .map(|d| d.caption)
                .chain(std::iter::once(self.caption)),
        )
    }
}

fn clear_will_change(targets: Vec<ElementId>) -> Action {
    Action::set(targets, Props::new().will_change(""))
}

/// Grid to content.
pub(crate) fn open_timeline(
    plan: &TransitionPlan,
    cfg: &TransitionConfig,
    classes: &Classes,
) -> Timeline {
    let mut tl = Timeline::new(
        TimelineKind::Open,
        TimelineDefaults {
            duration: cfg.duration,
            ease: cfg.ease,
        },
    );
    tl.label(START, Position::at(0.0))
        .label(SHOW_CONTENT, Position::label_offset(START, cfg.content_delay))
        .on_start(Action::add_class(plan.body, &classes.overflow_hidden));

    let mut layers = present([Some(plan.outer), plan.inner]);
    layers.extend(plan.docked_outers());
    tl.step(Step::set(
        plan.raised.clone(),
        Props::new().z_index(RAISED_Z),
        Position::label(START),
    ))
    .step(Step::set(
        layers,
        Props::new().will_change("transform, opacity"),
        Position::label(START),
    ));

    if let Some(top) = plan.heading_top {
        tl.step(Step::to(
            vec![top],
            Props::new().y_percent(-200.0).scale_y(4.0),
            Position::label(START),
        ));
    }
    if let Some(bottom) = plan.heading_bottom {
        tl.step(Step::to(
            vec![bottom],
            Props::new().y_percent(200.0).scale_y(4.0),
            Position::label_offset(START, cfg.heading_lag),
        ));
    }

    tl.step(
        Step::to(
            vec![plan.outer],
            Props::image(plan.zoom),
            Position::label(START),
        )
        .then(clear_will_change(vec![plan.outer])),
    );
    if let Some(inner) = plan.inner {
        tl.step(
            Step::to(vec![inner], Props::new().scale(1.0), Position::label(START))
                .then(clear_will_change(vec![inner])),
        );
    }

    if !plan.nav_items.is_empty() {
        tl.step(Step::call(
            Action::set(
                plan.nav_items.clone(),
                Props::new().y_percent(plan.nav_offset).opacity(0.0),
            ),
            Position::label(START),
        ));
    }

    if let Some(caption) = plan.caption {
        tl.step(
            Step::to(vec![caption], Props::new().opacity(0.0), Position::label(START))
                .ease(cfg.caption_ease),
        );
    }
    for (i, docked) in plan.docked.iter().enumerate() {
        let delay = Delay::Fixed(cfg.stagger * i as f64);
        if let Some(caption) = docked.caption {
            tl.step(
                Step::to(vec![caption], Props::new().opacity(0.0), Position::label(START))
                    .ease(cfg.caption_ease)
                    .delay(delay),
            );
        }
        tl.step(
            Step::to(
                vec![docked.outer],
                Props::image(docked.transform),
                Position::label(START),
            )
            .delay(delay)
            .then(clear_will_change(vec![docked.outer])),
        );
    }

    let unused = plan.unused_nav(cfg.nav_reserved_slots);
    if !unused.is_empty() {
        tl.step(
            Step::to(
                unused.to_vec(),
                Props::new().y_percent(0.0).opacity(1.0),
                Position::label(SHOW_CONTENT),
            )
            .delay(Delay::PerTarget(cfg.stagger)),
        );
    }
    tl.step(Step::call(
        Action::add_class(plan.panel, &classes.current_content),
        Position::label(SHOW_CONTENT),
    ))
    .step(Step::call(
        Action::add_class(plan.body, &classes.viewing),
        Position::label(SHOW_CONTENT),
    ));

    let revealed = present([plan.back, plan.nav, plan.text]);
    if !revealed.is_empty() {
        tl.step(Step::to(
            revealed,
            Props::new().opacity(1.0),
            Position::label(SHOW_CONTENT),
        ));
    }
    if let Some(title) = plan.title {
        tl.step(Step::from_to(
            vec![title],
            Props::new().y_percent(-100.0).scale_y(3.0),
            Props::new().y_percent(0.0).scale_y(1.0).opacity(1.0),
            Position::label(SHOW_CONTENT),
        ));
    }

    let remaining = plan.remaining_tiles();
    if !remaining.is_empty() {
        tl.on_complete(Action::set(remaining, Props::new().opacity(0.0)));
    }
    tl
}

/// Content back to grid, reversing `plan`.
pub(crate) fn close_timeline(
    plan: &TransitionPlan,
    cfg: &TransitionConfig,
    classes: &Classes,
) -> Timeline {
    let mut tl = Timeline::new(
        TimelineKind::Close,
        TimelineDefaults {
            duration: cfg.duration,
            ease: cfg.ease,
        },
    );
    tl.label(START, Position::at(0.0))
        .label(SHOW_GRID, Position::label_offset(START, cfg.content_delay));

    let remaining = plan.remaining_tiles();
    if !remaining.is_empty() {
        tl.on_start(Action::set(remaining, Props::new().opacity(1.0)));
    }
    tl.on_start(Action::remove_class(plan.body, &classes.overflow_hidden));

    let hidden = present([plan.back, plan.nav, plan.text]);
    if !hidden.is_empty() {
        tl.step(Step::to(
            hidden,
            Props::new().opacity(0.0),
            Position::label(START),
        ));
    }
    if let Some(title) = plan.title {
        tl.step(Step::to(
            vec![title],
            Props::new().opacity(0.0).y_percent(-100.0).scale_y(3.0),
            Position::label(START),
        ));
    }

    let leave_content = [
        Action::remove_class(plan.body, &classes.viewing),
        Action::remove_class(plan.panel, &classes.current_content),
    ];
    let unused = plan.unused_nav(cfg.nav_reserved_slots);
    if unused.is_empty() {
        for action in leave_content {
            tl.step(Step::call(
                action,
                Position::label_offset(START, cfg.duration),
            ));
        }
    } else {
        let mut step = Step::to(
            unused.to_vec(),
            Props::new().y_percent(plan.nav_offset).opacity(0.0),
            Position::label(START),
        )
        .delay(Delay::PerTarget(-cfg.stagger));
        for action in leave_content {
            step = step.then(action);
        }
        tl.step(step);
    }

    let docked = plan.docked_outers();
    let mut layers = vec![plan.outer];
    layers.extend(docked.iter().copied());
    tl.step(Step::set(
        layers,
        Props::new().will_change("transform, opacity"),
        Position::label(START),
    ));
    tl.step(
        Step::to(
            vec![plan.outer],
            Props::image(ImageTransform::IDENTITY),
            Position::label(START),
        )
        .then(clear_will_change(vec![plan.outer]))
        .then(Action::set(
            plan.raised.clone(),
            Props::new().z_index(RESTING_Z),
        )),
    );
    if !docked.is_empty() {
        tl.step(
            Step::to(
                docked.clone(),
                Props::image(ImageTransform::IDENTITY),
                Position::label(START),
            )
            .delay(Delay::PerTarget(-cfg.stagger))
            .then(clear_will_change(docked)),
        );
    }

    let headings = present([plan.heading_top, plan.heading_bottom]);
    if !headings.is_empty() {
        tl.step(Step::to(
            headings,
            Props::new().y_percent(0.0).scale_y(1.0),
            Position::label(SHOW_GRID),
        ));
    }
    let captions = plan.captions();
    if !captions.is_empty() {
        tl.step(
            Step::to(captions, Props::new().opacity(1.0), Position::label(SHOW_GRID))
                .ease(cfg.caption_return_ease),
        );
    }
    tl
}

fn hover_timeline(kind: TimelineKind, layers: &[ElementId], cfg: &HoverConfig) -> Timeline {
    let mut tl = Timeline::new(
        kind,
        TimelineDefaults {
            duration: cfg.duration,
            ease: cfg.ease,
        },
    );
    tl.label(START, Position::at(0.0))
        .step(Step::set(
            layers.to_vec(),
            Props::new().will_change("transform"),
            Position::label(START),
        ))
        .on_complete(clear_will_change(layers.to_vec()));
    tl
}

/// Pointer entered a tile: squeeze the wrapper and zoom the image inside it.
pub(crate) fn hover_in(outer: ElementId, inner: Option<ElementId>, cfg: &HoverConfig) -> Timeline {
    let layers = present([Some(outer), inner]);
    let mut tl = hover_timeline(TimelineKind::HoverIn, &layers, cfg);
    let (ox, oy) = cfg.outer_scale;
    tl.step(Step::to(
        vec![outer],
        Props::new().scale_x(ox).scale_y(oy),
        Position::label(START),
    ));
    if let Some(inner) = inner {
        let (ix, iy) = cfg.inner_scale;
        tl.step(
            Step::to(
                vec![inner],
                Props::new().scale_x(ix).scale_y(iy),
                Position::label(START),
            )
            .ease(cfg.inner_ease),
        );
    }
    tl
}

/// Pointer left a tile: both layers back to scale 1.
pub(crate) fn hover_out(
    outer: ElementId,
    inner: Option<ElementId>,
    cfg: &HoverConfig,
) -> Timeline {
    let layers = present([Some(outer), inner]);
    let mut tl = hover_timeline(TimelineKind::HoverOut, &layers, cfg);
    tl.step(Step::to(layers, Props::new().scale(1.0), Position::at(0.0)));
    tl
}

#[cfg(test)]
#[path = "../../tests/unit/grid/transitions.rs"]
mod tests;
