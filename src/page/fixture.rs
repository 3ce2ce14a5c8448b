use std::collections::BTreeMap;

use crate::foundation::core::{ElementId, Rect, Size};
use crate::foundation::error::{GridError, GridResult};
use crate::page::memory::MemoryPage;

/// Serializable description of a document, loaded into a [`MemoryPage`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PageFixture {
    /// Window inner size.
    pub viewport: Size,
    /// Children of `<body>` in document order.
    #[serde(default)]
    pub body: Vec<NodeFixture>,
}

/// One element of a [`PageFixture`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct NodeFixture {
    /// Tag name.
    #[serde(default = "default_tag")]
    pub tag: String,
    /// Class list.
    #[serde(default)]
    pub classes: Vec<String>,
    /// `data-*` attributes without the prefix.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, String>,
    /// Live bounding rect in viewport coordinates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rect: Option<Rect>,
    /// Untransformed layout size, when it differs from the rect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_size: Option<Size>,
    /// Computed `transform` string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
    /// Computed `transform-origin` string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform_origin: Option<String>,
    /// Child elements in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeFixture>,
}

fn default_tag() -> String {
    "div".to_owned()
}

impl NodeFixture {
    /// Element with a tag and class list and no geometry.
    pub fn new(tag: &str, classes: &[&str]) -> Self {
        Self {
            tag: tag.to_owned(),
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
            data: BTreeMap::new(),
            rect: None,
            layout_size: None,
            transform: None,
            transform_origin: None,
            children: Vec::new(),
        }
    }

    /// Set the live rect.
    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = Some(rect);
        self
    }

    /// Add a `data-*` attribute.
    pub fn data(mut self, key: &str, value: impl Into<String>) -> Self {
        self.data.insert(key.to_owned(), value.into());
        self
    }

    /// Append a child.
    pub fn child(mut self, child: NodeFixture) -> Self {
        self.children.push(child);
        self
    }
}

impl PageFixture {
    /// Parse a fixture from JSON and validate it.
    pub fn from_json_str(s: &str) -> GridResult<Self> {
        let fixture: Self = serde_json::from_str(s)?;
        fixture.validate()?;
        Ok(fixture)
    }

    /// Check the viewport and tag names.
    pub fn validate(&self) -> GridResult<()> {
        if !(self.viewport.width > 0.0 && self.viewport.height > 0.0) {
            return Err(GridError::validation("viewport width/height must be > 0"));
        }
        let mut stack: Vec<&NodeFixture> = self.body.iter().collect();
        while let Some(node) = stack.pop() {
            if node.tag.trim().is_empty() {
                return Err(GridError::validation("fixture tag must be non-empty"));
            }
            stack.extend(node.children.iter());
        }
        Ok(())
    }

    /// Materialize the fixture as a [`MemoryPage`].
    pub fn build(&self) -> MemoryPage {
        let mut page = MemoryPage::new(self.viewport);
        let body = page.body_id();
        for node in &self.body {
            append_node(&mut page, body, node);
        }
        page
    }
}

fn append_node(page: &mut MemoryPage, parent: ElementId, node: &NodeFixture) {
    let classes: Vec<&str> = node.classes.iter().map(String::as_str).collect();
    let id = page.append(parent, &node.tag, &classes);
    if let Some(rect) = node.rect {
        page.set_rect(id, rect);
    }
    if let Some(size) = node.layout_size {
        page.set_layout_size(id, size);
    }
    if let Some(t) = &node.transform {
        page.set_computed_transform(id, t.clone());
    }
    if let Some(o) = &node.transform_origin {
        page.set_transform_origin(id, o.clone());
    }
    for (k, v) in &node.data {
        page.set_data(id, k, v.clone());
    }
    for child in &node.children {
        append_node(page, id, child);
    }
}

const GAP: f64 = 20.0;
const GRID_TOP: f64 = 160.0;
const CAPTION_H: f64 = 24.0;
const SLOT_W: f64 = 50.0;
const SLOT_H: f64 = 65.0;

/// The reference gallery markup: three columns of `items` tiles, one content panel per tile,
/// heading bands, a back button and a nav strip with `nav_slots` slots.
///
/// Tiles are dealt round-robin across columns and numbered (`data-pos`, 1-based) in document
/// order, so tile `k` pairs with content panel `k`.
pub fn demo_fixture(items: usize, nav_slots: usize, viewport: Size) -> PageFixture {
    let w = viewport.width;
    let h = viewport.height;
    let col_w = ((w - 4.0 * GAP) / 3.0).max(1.0);
    let tile_h = col_w * 1.25;
    let row_h = tile_h + CAPTION_H + GAP;
    let rows = items.div_ceil(3);

    let mut columns = NodeFixture::new("div", &["columns"]).rect(Rect::new(
        0.0,
        0.0,
        w,
        GRID_TOP + rows as f64 * row_h,
    ));
    let mut pos = 0usize;
    for c in 0..3usize {
        let x = GAP + c as f64 * (col_w + GAP);
        let mut column = NodeFixture::new("div", &["column"]).rect(Rect::new(
            x,
            0.0,
            x + col_w,
            GRID_TOP + rows as f64 * row_h,
        ));
        for k in (c..items).step_by(3) {
            pos += 1;
            let y = GRID_TOP + (k / 3) as f64 * row_h;
            let image = Rect::from_origin_size((x, y), (col_w, tile_h));
            let caption = Rect::from_origin_size((x, y + tile_h), (col_w, CAPTION_H));
            let tile = NodeFixture::new("figure", &["column__item"])
                .rect(image.union(caption))
                .child(
                    NodeFixture::new("div", &["column__item-imgwrap"])
                        .rect(image)
                        .data("pos", pos.to_string())
                        .child(NodeFixture::new("div", &["column__item-img"]).rect(image)),
                )
                .child(NodeFixture::new("figcaption", &["column__item-caption"]).rect(caption));
            column = column.child(tile);
        }
        columns = columns.child(column);
    }

    let mut content = NodeFixture::new("section", &["content"]).rect(Rect::new(0.0, 0.0, w, h));
    for _ in 0..items {
        content = content.child(
            NodeFixture::new("div", &["content__item"])
                .rect(Rect::new(0.0, 0.0, w, h))
                .child(
                    NodeFixture::new("h2", &["content__item-title"])
                        .rect(Rect::from_origin_size((w * 0.55, h * 0.2), (w * 0.4, 80.0))),
                )
                .child(
                    NodeFixture::new("p", &["content__item-text"])
                        .rect(Rect::from_origin_size((w * 0.55, h * 0.35), (w * 0.4, 200.0))),
                ),
        );
    }
    let mut nav = NodeFixture::new("nav", &["content__nav"]).rect(Rect::new(
        GAP,
        h - 100.0,
        w - GAP,
        h - 20.0,
    ));
    for i in 0..nav_slots {
        let x = GAP + i as f64 * (SLOT_W + 10.0);
        nav = nav.child(
            NodeFixture::new("div", &["content__nav-item"])
                .rect(Rect::from_origin_size((x, h - 90.0), (SLOT_W, SLOT_H))),
        );
    }
    content = content.child(nav);

    PageFixture {
        viewport,
        body: vec![
            NodeFixture::new("h2", &["heading", "heading--up"])
                .rect(Rect::new(w * 0.1, 40.0, w * 0.9, 120.0)),
            columns,
            content,
            NodeFixture::new("h2", &["heading", "heading--down"])
                .rect(Rect::new(w * 0.1, h - 120.0, w * 0.9, h - 40.0)),
            NodeFixture::new("button", &["button-back"])
                .rect(Rect::from_origin_size((GAP, GAP), (80.0, 40.0))),
        ],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/fixture.rs"]
mod tests;
