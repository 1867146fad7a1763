//! In-memory document model the features read from.
//!
//! The page is an arena of [`Element`]s addressed by [`NodeId`]. Nodes are never
//! freed: replacing or removing content marks the old subtree as detached so stale
//! ids stay safe to hold (they just stop matching queries).

use fxhash::FxHashMap;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

/// Stable handle to an element in a [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Element geometry in document coordinates (logical pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self { top, left, width, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlapping region, if the rectangles touch at all.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let top = self.top.max(other.top);
        let left = self.left.max(other.left);
        let bottom = self.bottom().min(other.bottom());
        let right = self.right().min(other.right());
        (bottom >= top && right >= left).then(|| Self::new(top, left, right - left, bottom - top))
    }
}

/// The visible window onto the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1280.0, height: 800.0, scroll_y: 0.0 }
    }
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height, scroll_y: 0.0 }
    }

    /// Visible region, with `bottom_margin` (fraction of height) cut off the bottom.
    #[must_use]
    pub fn region(&self, bottom_margin: f64) -> Rect {
        let height = self.height * (1.0 - bottom_margin).max(0.0);
        Rect::new(self.scroll_y, 0.0, self.width, height)
    }
}

/// Host runtime capabilities the features may degrade on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub intersection_observer: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self { intersection_observer: true }
    }
}

/// A single element. Built with the chained setters, queried with the getters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    tag: Cow<'static, str>,
    id: Option<String>,
    parent: Option<NodeId>,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    markup: Option<String>,
    disabled: bool,
    name: Option<String>,
    value: String,
    rect: Rect,
    detached: bool,
}

impl Element {
    #[must_use]
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self { tag: tag.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_markup(mut self, markup: impl Into<String>) -> Self {
        self.markup = Some(markup.into());
        self
    }

    /// Marks the element as a named form field.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    #[must_use]
    pub const fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn markup(&self) -> Option<&str> {
        self.markup.as_deref()
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub const fn is_detached(&self) -> bool {
        self.detached
    }
}

// Mutators stay crate-private: outside the kernel, pages change only through effects.
impl Element {
    pub(crate) fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_owned());
    }

    pub(crate) fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub(crate) fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_owned(), value.to_owned());
    }

    pub(crate) fn set_style(&mut self, property: &str, value: Option<&str>) {
        match value {
            Some(value) => self.styles.insert(property.to_owned(), value.to_owned()),
            None => self.styles.remove(property),
        };
    }

    pub(crate) fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    pub(crate) fn set_markup(&mut self, markup: &str) {
        self.markup = Some(markup.to_owned());
    }

    pub(crate) const fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub(crate) fn set_value(&mut self, value: &str) {
        value.clone_into(&mut self.value);
    }
}

/// The document snapshot.
#[derive(Debug, Clone)]
pub struct Page {
    nodes: Vec<Element>,
    ids: FxHashMap<String, NodeId>,
    root: NodeId,
    body: NodeId,
    viewport: Viewport,
    capabilities: Capabilities,
}

impl Default for Page {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl Page {
    /// Creates an empty document (`html` > `body`).
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let mut page = Self {
            nodes: Vec::new(),
            ids: FxHashMap::default(),
            root: NodeId(0),
            body: NodeId(0),
            viewport,
            capabilities: Capabilities::default(),
        };
        page.root = page.insert(None, Element::new("html"));
        page.body = page.insert(Some(page.root), Element::new("body"));
        page
    }

    #[must_use]
    pub const fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub const fn body(&self) -> NodeId {
        self.body
    }

    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub const fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Appends `element` under `parent` and returns its handle.
    ///
    /// A duplicate id shadows the previous holder, like `getElementById` returning the newest match.
    pub fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        self.insert(Some(parent), element)
    }

    fn insert(&mut self, parent: Option<NodeId>, mut element: Element) -> NodeId {
        let node = NodeId(self.nodes.len());
        element.parent = parent;
        element.detached = parent.is_some_and(|p| !self.is_attached(p));
        if let Some(id) = element.id.clone().filter(|_| !element.detached) {
            self.ids.insert(id, node);
        }
        self.nodes.push(element);
        node
    }

    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0)
    }

    pub(crate) fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.0)
    }

    #[must_use]
    pub fn is_attached(&self, node: NodeId) -> bool {
        self.element(node).is_some_and(|el| !el.detached)
    }

    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied().filter(|&node| self.is_attached(node))
    }

    /// Attached elements carrying `class`, in document insertion order.
    #[must_use]
    pub fn by_class(&self, class: &str) -> Vec<NodeId> {
        self.attached().filter(|(_, el)| el.has_class(class)).map(|(node, _)| node).collect()
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.attached().filter(|(_, el)| el.parent == Some(node)).map(|(child, _)| child).collect()
    }

    /// Attached descendants of `node` (excluding itself) matching `predicate`.
    pub fn descendants<'a>(
        &'a self,
        node: NodeId,
        predicate: impl Fn(&Element) -> bool + 'a,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.attached()
            .filter(move |&(child, el)| child != node && self.contains(node, child) && predicate(el))
            .map(|(child, _)| child)
    }

    /// Walks from `node` up through its ancestors, returning the first match.
    #[must_use]
    pub fn closest(&self, node: NodeId, predicate: impl Fn(&Element) -> bool) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(candidate) = current {
            let el = self.element(candidate)?;
            if predicate(el) {
                return Some(candidate);
            }
            current = el.parent;
        }
        None
    }

    /// Whether `node` is `ancestor` itself or lies beneath it.
    #[must_use]
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        std::iter::successors(Some(node), |&n| self.element(n).and_then(Element::parent))
            .any(|n| n == ancestor)
    }

    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|el| el.has_class(class))
    }

    #[must_use]
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).and_then(|el| el.attribute(name))
    }

    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node).and_then(|el| el.style(property))
    }

    #[must_use]
    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(Element::text)
    }

    /// Value of the form field named `field` inside `form`, like `FormData.get`.
    #[must_use]
    pub fn form_value(&self, form: NodeId, field: &str) -> Option<&str> {
        self.descendants(form, |el| el.name() == Some(field))
            .next()
            .and_then(|node| self.element(node))
            .map(Element::value)
    }

    /// Fraction of the element's area inside the viewport region.
    ///
    /// Zero-area elements count as fully visible when their origin lies inside the region.
    #[must_use]
    pub fn visible_ratio(&self, node: NodeId, bottom_margin: f64) -> f64 {
        let Some(el) = self.element(node).filter(|el| !el.detached) else {
            return 0.0;
        };
        let region = self.viewport.region(bottom_margin);
        let rect = el.rect;
        let Some(overlap) = rect.intersection(&region) else {
            return 0.0;
        };
        let area = rect.area();
        if area <= 0.0 { 1.0 } else { overlap.area() / area }
    }

    /// Records the host's layout for an element.
    pub fn set_rect(&mut self, node: NodeId, rect: Rect) {
        if let Some(el) = self.element_mut(node) {
            el.rect = rect;
        }
    }

    pub(crate) fn detach(&mut self, node: NodeId) {
        let doomed: Vec<NodeId> =
            self.attached().filter(|&(n, _)| self.contains(node, n)).map(|(n, _)| n).collect();
        for n in doomed {
            if let Some(el) = self.nodes.get_mut(n.0) {
                el.detached = true;
                if let Some(id) = &el.id
                    && self.ids.get(id) == Some(&n)
                {
                    self.ids.remove(id);
                }
            }
        }
    }

    fn attached(&self) -> impl Iterator<Item = (NodeId, &Element)> {
        self.nodes.iter().enumerate().filter(|(_, el)| !el.detached).map(|(i, el)| (NodeId(i), el))
    }
}
