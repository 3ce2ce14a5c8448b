use std::collections::BTreeMap;

use crate::foundation::core::{ElementId, Rect, Size, Vec2};
use crate::page::{IntersectionEntry, Page};

#[derive(Clone, Debug, Default)]
struct Node {
    tag: String,
    classes: Vec<String>,
    data: BTreeMap<String, String>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    rect: Rect,
    layout: Option<Size>,
    transform: Option<String>,
    origin: Option<String>,
    styles: BTreeMap<String, String>,
}

/// Arena-backed [`Page`] for tests and headless sessions.
///
/// Geometry is static: rects only change through the setters or [`MemoryPage::translate_subtree`].
/// Node 0 is the `<html>` root and node 1 is `<body>`.
#[derive(Clone, Debug)]
pub struct MemoryPage {
    nodes: Vec<Node>,
    viewport: Size,
    observed: Vec<ElementId>,
}

const ROOT: ElementId = ElementId(0);
const BODY: ElementId = ElementId(1);

impl MemoryPage {
    /// Empty document with a `<body>` and the given viewport.
    pub fn new(viewport: Size) -> Self {
        let mut page = Self {
            nodes: vec![Node {
                tag: "html".to_owned(),
                rect: Rect::from_origin_size((0.0, 0.0), viewport),
                ..Node::default()
            }],
            viewport,
            observed: Vec::new(),
        };
        page.append(ROOT, "body", &[]);
        page.nodes[BODY.index()].rect = Rect::from_origin_size((0.0, 0.0), viewport);
        page
    }

    /// Handle of `<body>`.
    pub fn body_id(&self) -> ElementId {
        BODY
    }

    /// Append a new element under `parent` and return its handle.
    pub fn append(&mut self, parent: ElementId, tag: &str, classes: &[&str]) -> ElementId {
        let id = ElementId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(Node {
            tag: tag.to_ascii_lowercase(),
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
            parent: Some(parent),
            ..Node::default()
        });
        if let Some(p) = self.nodes.get_mut(parent.index()) {
            p.children.push(id);
        }
        id
    }

    /// Number of elements, including the root and body.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` when the document holds only the root and body.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 2
    }

    /// Set the live bounding rect.
    pub fn set_rect(&mut self, el: ElementId, rect: Rect) {
        if let Some(n) = self.nodes.get_mut(el.index()) {
            n.rect = rect;
        }
    }

    /// Set the untransformed layout size; defaults to the rect size.
    pub fn set_layout_size(&mut self, el: ElementId, size: Size) {
        if let Some(n) = self.nodes.get_mut(el.index()) {
            n.layout = Some(size);
        }
    }

    /// Set the computed `transform` string.
    pub fn set_computed_transform(&mut self, el: ElementId, value: impl Into<String>) {
        if let Some(n) = self.nodes.get_mut(el.index()) {
            n.transform = Some(value.into());
        }
    }

    /// Set the computed `transform-origin` string.
    pub fn set_transform_origin(&mut self, el: ElementId, value: impl Into<String>) {
        if let Some(n) = self.nodes.get_mut(el.index()) {
            n.origin = Some(value.into());
        }
    }

    /// Set a `data-<key>` attribute.
    pub fn set_data(&mut self, el: ElementId, key: &str, value: impl Into<String>) {
        if let Some(n) = self.nodes.get_mut(el.index()) {
            n.data.insert(key.to_owned(), value.into());
        }
    }

    /// Resize the window. Root and body follow the viewport.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        for id in [ROOT, BODY] {
            self.nodes[id.index()].rect = Rect::from_origin_size((0.0, 0.0), viewport);
        }
    }

    /// Move `el` and all of its descendants by `delta`, e.g. to emulate scrolling.
    pub fn translate_subtree(&mut self, el: ElementId, delta: Vec2) {
        let mut stack = vec![el];
        while let Some(id) = stack.pop() {
            let Some(n) = self.nodes.get_mut(id.index()) else {
                continue;
            };
            n.rect = n.rect + delta;
            stack.extend(n.children.iter().copied());
        }
    }

    /// Inline style value previously set through [`Page::set_style`].
    pub fn style(&self, el: ElementId, property: &str) -> Option<&str> {
        self.nodes
            .get(el.index())
            .and_then(|n| n.styles.get(property))
            .map(String::as_str)
    }

    /// Classes of `el` in insertion order.
    pub fn classes(&self, el: ElementId) -> &[String] {
        self.nodes
            .get(el.index())
            .map(|n| n.classes.as_slice())
            .unwrap_or(&[])
    }

    /// Elements registered through [`Page::observe_intersections`].
    pub fn observed(&self) -> &[ElementId] {
        &self.observed
    }

    /// Current intersection ratios of all observed elements against the viewport.
    pub fn intersections(&self) -> Vec<IntersectionEntry> {
        let view = Rect::from_origin_size((0.0, 0.0), self.viewport);
        self.observed
            .iter()
            .map(|&target| {
                let rect = self.bounding_rect(target);
                let area = rect.area();
                let ratio = if area > 0.0 {
                    (rect.intersect(view).area() / area).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                IntersectionEntry { target, ratio }
            })
            .collect()
    }

    fn matches(&self, el: ElementId, selector: &Selector<'_>) -> bool {
        let Some(n) = self.nodes.get(el.index()) else {
            return false;
        };
        if let Some(tag) = selector.tag {
            if !n.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        selector
            .classes
            .iter()
            .all(|c| n.classes.iter().any(|have| have == c))
    }
}

struct Selector<'a> {
    tag: Option<&'a str>,
    classes: Vec<&'a str>,
}

impl<'a> Selector<'a> {
    fn parse(raw: &'a str) -> Self {
        let mut parts = raw.trim().split('.');
        let tag = parts.next().filter(|t| !t.is_empty());
        Self {
            tag,
            classes: parts.filter(|c| !c.is_empty()).collect(),
        }
    }
}

impl Page for MemoryPage {
    fn body(&self) -> ElementId {
        BODY
    }

    fn query_all(&self, scope: Option<ElementId>, selector: &str) -> Vec<ElementId> {
        let selector = Selector::parse(selector);
        let start = scope.unwrap_or(ROOT);
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = match self.nodes.get(start.index()) {
            Some(n) => n.children.iter().rev().copied().collect(),
            None => return out,
        };
        if scope.is_none() && self.matches(ROOT, &selector) {
            out.push(ROOT);
        }
        while let Some(id) = stack.pop() {
            if self.matches(id, &selector) {
                out.push(id);
            }
            if let Some(n) = self.nodes.get(id.index()) {
                stack.extend(n.children.iter().rev().copied());
            }
        }
        out
    }

    fn parent(&self, el: ElementId) -> Option<ElementId> {
        self.nodes.get(el.index()).and_then(|n| n.parent)
    }

    fn data(&self, el: ElementId, key: &str) -> Option<String> {
        self.nodes
            .get(el.index())
            .and_then(|n| n.data.get(key))
            .cloned()
    }

    fn bounding_rect(&self, el: ElementId) -> Rect {
        self.nodes
            .get(el.index())
            .map(|n| n.rect)
            .unwrap_or(Rect::ZERO)
    }

    fn layout_size(&self, el: ElementId) -> Size {
        self.nodes
            .get(el.index())
            .map(|n| n.layout.unwrap_or_else(|| n.rect.size()))
            .unwrap_or(Size::ZERO)
    }

    fn computed_transform(&self, el: ElementId) -> Option<String> {
        self.nodes.get(el.index()).and_then(|n| n.transform.clone())
    }

    fn transform_origin(&self, el: ElementId) -> Option<String> {
        self.nodes.get(el.index()).and_then(|n| n.origin.clone())
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.classes(el).iter().any(|c| c == class)
    }

    fn add_class(&mut self, el: ElementId, class: &str) {
        if let Some(n) = self.nodes.get_mut(el.index()) {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_owned());
            }
        }
    }

    fn remove_class(&mut self, el: ElementId, class: &str) {
        if let Some(n) = self.nodes.get_mut(el.index()) {
            n.classes.retain(|c| c != class);
        }
    }

    fn set_style(&mut self, el: ElementId, property: &str, value: String) {
        if let Some(n) = self.nodes.get_mut(el.index()) {
            n.styles.insert(property.to_owned(), value);
        }
    }

    fn observe_intersections(&mut self, targets: &[ElementId]) {
        for &t in targets {
            if !self.observed.contains(&t) {
                self.observed.push(t);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/memory.rs"]
mod tests;
