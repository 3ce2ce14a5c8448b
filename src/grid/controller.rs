use std::collections::HashMap;

use crate::config::{GridConfig, Selectors};
use crate::engine::{ScrollEngine, ScrollEvent, ScrollTo, TweenSignal, Tweener};
use crate::foundation::core::{ElementId, Size, TimelineId, present};
use crate::foundation::error::{GridError, GridResult};
use crate::geometry::fit::ImageTransform;
use crate::geometry::rect::{effective_rect_of, viewport_size};
use crate::grid::chrome::Chrome;
use crate::grid::content::ContentItem;
use crate::grid::item::GridItem;
use crate::grid::transitions::{
    Docked, TransitionPlan, close_timeline, hover_in, hover_out, open_timeline,
};
use crate::grid::visibility::VisibilityTracker;
use crate::page::{IntersectionEntry, Page};
use crate::timeline::{Action, Props, Timeline, TimelineKind};

/// Which view the grid is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    /// The scrolling tile grid.
    Grid,
    /// The content panel of tile `item`.
    Content {
        /// Index into [`Grid::items`].
        item: usize,
    },
}

/// Input to [`Grid::handle`].
#[derive(Clone, Debug, PartialEq)]
pub enum GridEvent {
    /// Click on the image of tile `i`.
    ItemClick(usize),
    /// Click on the back control.
    BackClick,
    /// Pointer entered the image of tile `i`.
    PointerEnter(usize),
    /// Pointer left the image of tile `i`.
    PointerLeave(usize),
    /// The window was resized.
    Resize(Size),
    /// The scroll engine moved.
    Scroll(ScrollEvent),
    /// Intersection observer reports for tiles.
    Intersection(Vec<IntersectionEntry>),
    /// Lifecycle report from the tween engine.
    Tween(TweenSignal),
}

/// Whether an event changed anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The event was acted upon.
    Applied,
    /// The event does not apply to the current state (wrong view, or a transition is running).
    Ignored,
}

#[derive(Clone, Copy, Debug)]
struct InFlight {
    id: TimelineId,
    kind: TimelineKind,
}

#[derive(Clone, Debug, Default)]
struct Hooks {
    on_start: Vec<Action>,
    on_complete: Vec<Action>,
}

/// Find the grid root element with the configured selector.
pub fn find_root<P: Page + ?Sized>(page: &P, selectors: &Selectors) -> GridResult<ElementId> {
    page.query(None, &selectors.root)
        .ok_or_else(|| GridError::markup(format!("no element matches '{}'", selectors.root)))
}

/// The grid controller.
///
/// Owns the page and both engines. The host forwards every input, including the tween
/// engine's lifecycle reports, through [`Grid::handle`]; each call runs to completion.
#[derive(Debug)]
pub struct Grid<P: Page, S: ScrollEngine, T: Tweener> {
    page: P,
    scroll: S,
    tweener: T,
    config: GridConfig,
    root: ElementId,
    counter_scrolled: Vec<ElementId>,
    items: Vec<GridItem>,
    contents: Vec<ContentItem>,
    chrome: Chrome,
    view: View,
    in_flight: Option<InFlight>,
    hooks: HashMap<TimelineId, Hooks>,
    plan: Option<TransitionPlan>,
    visibility: VisibilityTracker,
    last_scroll_offset: f64,
    viewport: Size,
}

impl<P: Page, S: ScrollEngine, T: Tweener> Grid<P, S, T> {
    /// Bind the grid under `root`, start the scroll engine and observe every tile.
    ///
    /// Tiles are paired with content panels by their position attribute; a tile whose
    /// position has no panel stays unpaired and fails when opened.
    #[tracing::instrument(skip(page, scroll, tweener, config))]
    pub fn mount(
        mut page: P,
        mut scroll: S,
        tweener: T,
        root: ElementId,
        config: GridConfig,
    ) -> GridResult<Self> {
        config.validate()?;
        let selectors = &config.selectors;

        let counter_scrolled = page
            .query_all(Some(root), &selectors.column)
            .into_iter()
            .enumerate()
            .filter(|(i, _)| *i != 1)
            .map(|(_, el)| el)
            .collect();

        let contents: Vec<ContentItem> = page
            .query_all(None, &selectors.content_item)
            .into_iter()
            .map(|el| ContentItem::locate(&page, el, selectors))
            .collect();
        let items: Vec<GridItem> = page
            .query_all(Some(root), &selectors.item)
            .into_iter()
            .map(|el| {
                let mut item = GridItem::locate(&page, el, selectors);
                item.content = item.position.filter(|p| *p < contents.len());
                item
            })
            .collect();

        let chrome = Chrome::locate(&page, selectors);
        let viewport = viewport_size(&page);

        scroll.init(&config.scroll);
        let tiles: Vec<ElementId> = items.iter().map(|i| i.element).collect();
        page.observe_intersections(&tiles);

        tracing::debug!(
            items = items.len(),
            contents = contents.len(),
            nav_slots = chrome.nav_items.len(),
            "grid mounted"
        );

        Ok(Self {
            page,
            scroll,
            tweener,
            config,
            root,
            counter_scrolled,
            items,
            contents,
            chrome,
            view: View::Grid,
            in_flight: None,
            hooks: HashMap::new(),
            plan: None,
            visibility: VisibilityTracker::new(),
            last_scroll_offset: 0.0,
            viewport,
        })
    }

    /// Process one input.
    pub fn handle(&mut self, event: GridEvent) -> GridResult<Outcome> {
        match event {
            GridEvent::ItemClick(i) => self.open(i),
            GridEvent::BackClick => self.close(),
            GridEvent::PointerEnter(i) => self.hover(i, true),
            GridEvent::PointerLeave(i) => self.hover(i, false),
            GridEvent::Resize(size) => self.resize(size),
            GridEvent::Scroll(ev) => Ok(self.scrolled(ev)),
            GridEvent::Intersection(entries) => Ok(self.intersected(&entries)),
            GridEvent::Tween(signal) => Ok(self.tween_signal(signal)),
        }
    }

    fn ignored(&self, trigger: &str) -> GridResult<Outcome> {
        tracing::debug!(
            trigger,
            view = ?self.view,
            animating = self.is_animating(),
            "trigger ignored"
        );
        Ok(Outcome::Ignored)
    }

    #[tracing::instrument(skip(self))]
    fn open(&mut self, index: usize) -> GridResult<Outcome> {
        if !self.is_grid_view() || self.is_animating() {
            return self.ignored("item_click");
        }
        if self.scroll.is_scrolling() {
            return self.ignored("item_click while scrolling");
        }
        let plan = self.plan_open(index)?;
        let timeline = open_timeline(&plan, &self.config.transition, &self.config.classes);
        timeline.schedule()?;

        self.tweener
            .kill_tweens_of(&present([Some(plan.outer), plan.inner]));
        // The view only changes once the engine has accepted the timeline.
        self.start_transition(&timeline)?;
        self.view = View::Content { item: index };
        self.scroll.destroy();
        tracing::debug!(
            item = index,
            docked = plan.docked.len(),
            remaining = plan.remaining.len(),
            "opening content"
        );
        self.plan = Some(plan);
        Ok(Outcome::Applied)
    }

    #[tracing::instrument(skip(self))]
    fn close(&mut self) -> GridResult<Outcome> {
        if self.is_grid_view() || self.is_animating() {
            return self.ignored("back_click");
        }
        let Some(mut plan) = self.plan.clone() else {
            return Err(GridError::validation(
                "content view is shown without an open snapshot",
            ));
        };
        let cfg = &self.config.transition;
        plan.nav_offset = self.tweener.random(cfg.nav_offset_min, cfg.nav_offset_max);
        let timeline = close_timeline(&plan, cfg, &self.config.classes);
        timeline.schedule()?;

        self.start_transition(&timeline)?;
        self.view = View::Grid;
        self.scroll.init(&self.config.scroll);
        self.scroll.scroll_to(self.last_scroll_offset, ScrollTo::INSTANT);
        tracing::debug!(item = plan.item, offset = self.last_scroll_offset, "closing content");
        self.plan = Some(plan);
        Ok(Outcome::Applied)
    }

    fn hover(&mut self, index: usize, entering: bool) -> GridResult<Outcome> {
        let trigger = if entering {
            "pointer_enter"
        } else {
            "pointer_leave"
        };
        if !self.is_grid_view() || self.is_animating() {
            return self.ignored(trigger);
        }
        let item = self.item(index)?;
        let outer = item.outer()?;
        let inner = item.image_inner;
        let layers = item.layers();

        let timeline = if entering {
            hover_in(outer, inner, &self.config.hover)
        } else {
            hover_out(outer, inner, &self.config.hover)
        };
        self.tweener.kill_tweens_of(&layers);
        self.play(&timeline)?;
        Ok(Outcome::Applied)
    }

    fn resize(&mut self, size: Size) -> GridResult<Outcome> {
        self.viewport = size;
        let View::Content { .. } = self.view else {
            return Ok(Outcome::Applied);
        };
        let Some(plan) = self.plan.as_mut() else {
            return Ok(Outcome::Applied);
        };

        let image = effective_rect_of(&self.page, plan.outer)?;
        let zoom = finite(
            ImageTransform::center_zoom(size, image, self.config.transition.zoom_fraction),
            plan.outer,
        )?;
        let mut docked = Vec::with_capacity(plan.docked.len());
        for (slot, d) in plan.docked.iter().enumerate() {
            docked.push(dock_transform(
                &self.page,
                &self.chrome.nav_items,
                slot,
                d.outer,
            )?);
        }

        plan.zoom = zoom;
        self.tweener.set(&[plan.outer], &Props::image(zoom));
        for (d, transform) in plan.docked.iter_mut().zip(docked) {
            d.transform = transform;
            self.tweener.set(&[d.outer], &Props::image(transform));
        }
        tracing::debug!(width = size.width, height = size.height, "content transforms refreshed");
        Ok(Outcome::Applied)
    }

    fn scrolled(&mut self, ev: ScrollEvent) -> Outcome {
        self.last_scroll_offset = ev.y;
        let value = format!("translateY({}px)", ev.y);
        for &column in &self.counter_scrolled {
            self.page.set_style(column, "transform", value.clone());
        }
        tracing::trace!(y = ev.y, "scroll");
        Outcome::Applied
    }

    fn intersected(&mut self, entries: &[IntersectionEntry]) -> Outcome {
        let class = &self.config.classes.in_view;
        for (el, visible) in self.visibility.apply(entries) {
            if visible {
                self.page.add_class(el, class);
            } else {
                self.page.remove_class(el, class);
            }
        }
        tracing::trace!(
            reports = entries.len(),
            visible = self.visibility.len(),
            "intersections"
        );
        Outcome::Applied
    }

    fn tween_signal(&mut self, signal: TweenSignal) -> Outcome {
        match signal {
            TweenSignal::Started { timeline } => {
                let actions = self
                    .hooks
                    .get_mut(&timeline)
                    .map(|h| std::mem::take(&mut h.on_start));
                match actions {
                    Some(actions) => actions.into_iter().for_each(|a| self.apply(a)),
                    None => tracing::debug!(timeline = timeline.0, "start of unknown timeline"),
                }
            }
            TweenSignal::Action { action, .. } => self.apply(action),
            TweenSignal::Completed { timeline } => {
                match self.hooks.remove(&timeline) {
                    Some(hooks) => hooks.on_complete.into_iter().for_each(|a| self.apply(a)),
                    None => {
                        tracing::debug!(timeline = timeline.0, "completion of unknown timeline")
                    }
                }
                if let Some(flight) = self.in_flight.filter(|f| f.id == timeline) {
                    self.in_flight = None;
                    if flight.kind == TimelineKind::Close {
                        self.plan = None;
                    }
                    tracing::debug!(kind = ?flight.kind, "transition finished");
                }
            }
        }
        Outcome::Applied
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::AddClass { target, class } => self.page.add_class(target, &class),
            Action::RemoveClass { target, class } => self.page.remove_class(target, &class),
            Action::Set { targets, props } => self.tweener.set(&targets, &props),
        }
    }

    fn play(&mut self, timeline: &Timeline) -> GridResult<TimelineId> {
        let id = self.tweener.play(timeline)?;
        self.hooks.insert(
            id,
            Hooks {
                on_start: timeline.on_start.clone(),
                on_complete: timeline.on_complete.clone(),
            },
        );
        Ok(id)
    }

    fn start_transition(&mut self, timeline: &Timeline) -> GridResult<()> {
        let id = self.play(timeline)?;
        self.in_flight = Some(InFlight {
            id,
            kind: timeline.kind,
        });
        Ok(())
    }

    fn item(&self, index: usize) -> GridResult<&GridItem> {
        self.items.get(index).ok_or_else(|| {
            GridError::validation(format!(
                "no grid item at index {index} (grid has {})",
                self.items.len()
            ))
        })
    }

    fn plan_open(&mut self, index: usize) -> GridResult<TransitionPlan> {
        let item = self.item(index)?.clone();
        let outer = item.outer()?;
        let content_index = item.content.ok_or_else(|| {
            GridError::markup(format!(
                "grid item {index} has no content panel (position {:?}, {} panels)",
                item.position,
                self.contents.len()
            ))
        })?;
        let content = self.contents[content_index].clone();

        let image = effective_rect_of(&self.page, outer)?;
        let zoom = finite(
            ImageTransform::center_zoom(self.viewport, image, self.config.transition.zoom_fraction),
            outer,
        )?;

        let slots = self.chrome.nav_items.len();
        let mut docked = Vec::new();
        let mut remaining = Vec::new();
        for (i, other) in self.items.iter().enumerate() {
            if i == index {
                continue;
            }
            if docked.len() < slots && self.visibility.is_visible(other.element) {
                let outer = other.outer()?;
                docked.push(Docked {
                    item: i,
                    outer,
                    caption: other.caption,
                    transform: dock_transform(
                        &self.page,
                        &self.chrome.nav_items,
                        docked.len(),
                        outer,
                    )?,
                });
            } else {
                remaining.push((i, other.element));
            }
        }

        let cfg = &self.config.transition;
        let nav_offset = self.tweener.random(cfg.nav_offset_min, cfg.nav_offset_max);
        Ok(TransitionPlan {
            item: index,
            raised: item.raised(),
            outer,
            inner: item.image_inner,
            caption: item.caption,
            zoom,
            docked,
            remaining,
            nav_items: self.chrome.nav_items.clone(),
            nav_offset,
            heading_top: self.chrome.heading_top,
            heading_bottom: self.chrome.heading_bottom,
            body: self.chrome.body,
            back: self.chrome.back,
            nav: self.chrome.nav,
            panel: content.element,
            title: content.title,
            text: content.text,
        })
    }

    /// `true` while the grid view is shown.
    pub fn is_grid_view(&self) -> bool {
        self.view == View::Grid
    }

    /// Index of the open tile while the content view is shown.
    pub fn current_item_index(&self) -> Option<usize> {
        match self.view {
            View::Grid => None,
            View::Content { item } => Some(item),
        }
    }

    /// Current view.
    pub fn view(&self) -> View {
        self.view
    }

    /// `true` while an open or close transition is running.
    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Vertical offset of the most recent scroll event.
    pub fn last_scroll_offset(&self) -> f64 {
        self.last_scroll_offset
    }

    /// Cached viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Grid root element.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Tiles in document order.
    pub fn items(&self) -> &[GridItem] {
        &self.items
    }

    /// Content panels in document order.
    pub fn contents(&self) -> &[ContentItem] {
        &self.contents
    }

    /// Indices of tiles currently reported visible.
    pub fn visible_items(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.visibility.is_visible(item.element))
            .map(|(i, _)| i)
            .collect()
    }

    /// Tiles docked onto the nav strip by the current open/close pair, in slot order.
    pub fn docked_items(&self) -> Vec<usize> {
        self.plan
            .as_ref()
            .map(|p| p.docked.iter().map(|d| d.item).collect())
            .unwrap_or_default()
    }

    /// Tiles hidden by the current open/close pair.
    pub fn remaining_items(&self) -> Vec<usize> {
        self.plan
            .as_ref()
            .map(|p| p.remaining.iter().map(|(i, _)| *i).collect())
            .unwrap_or_default()
    }

    /// Active configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The page.
    pub fn page(&self) -> &P {
        &self.page
    }

    /// The page, mutably. Geometry changes are picked up on the next event that reads them.
    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    /// The scroll engine.
    pub fn scroll(&self) -> &S {
        &self.scroll
    }

    /// The scroll engine, mutably.
    pub fn scroll_mut(&mut self) -> &mut S {
        &mut self.scroll
    }

    /// The tween engine.
    pub fn tweener(&self) -> &T {
        &self.tweener
    }

    /// The tween engine, mutably.
    pub fn tweener_mut(&mut self) -> &mut T {
        &mut self.tweener
    }

    /// Give back the page and both engines.
    pub fn into_parts(self) -> (P, S, T) {
        (self.page, self.scroll, self.tweener)
    }
}

fn finite(t: ImageTransform, el: ElementId) -> GridResult<ImageTransform> {
    if t.is_finite() {
        Ok(t)
    } else {
        Err(GridError::markup(format!(
            "element {el} has a degenerate size; cannot fit its image"
        )))
    }
}

fn dock_transform<P: Page + ?Sized>(
    page: &P,
    nav_items: &[ElementId],
    slot: usize,
    outer: ElementId,
) -> GridResult<ImageTransform> {
    let (Some(first), Some(target)) = (nav_items.first(), nav_items.get(slot)) else {
        return Err(GridError::markup(format!("no nav slot {slot} to dock onto")));
    };
    let slot_height = page.layout_size(*first).height;
    let slot_rect = effective_rect_of(page, *target)?;
    let image = effective_rect_of(page, outer)?;
    finite(ImageTransform::dock(slot_rect, slot_height, image), outer)
}

#[cfg(test)]
#[path = "../../tests/unit/grid/controller.rs"]
mod tests;
