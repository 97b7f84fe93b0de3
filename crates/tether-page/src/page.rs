//! The headless page.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tether_css::{ComputedStyle, DomRect, Rect};
use tether_dom::{DomTree, ElementData, NodeId, NodeType, StyleDeclarations};
use tether_menu::{ElementHost, RefName, ViewportQuery};

/// Window size and scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Window {
    /// `window.innerWidth`
    pub width: f64,
    /// `window.innerHeight`
    pub height: f64,
    /// Horizontal scroll offset.
    pub scroll_x: f64,
    /// Vertical scroll offset.
    pub scroll_y: f64,
    /// Width taken by a vertical scrollbar, excluded from `clientWidth`.
    pub scrollbar_width: f64,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            scroll_x: 0.0,
            scroll_y: 0.0,
            scrollbar_width: 0.0,
        }
    }
}

/// One write to an element's inline style, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleMutation {
    /// Element written to.
    pub node: NodeId,
    /// Property name.
    pub property: String,
    /// Value before the write.
    pub old: Option<String>,
    /// Value after the write.
    pub new: Option<String>,
}

/// A DOM tree with precomputed layout, acting as the engine's host.
///
/// Layout boxes are border boxes in document coordinates. An element whose
/// used display (or an ancestor's) is `none` generates no box and reports
/// empty geometry, whatever box it was given.
#[derive(Debug, Clone, Default)]
pub struct Page {
    dom: DomTree,
    window: Window,
    layout: HashMap<NodeId, Rect>,
    refs: HashMap<RefName, NodeId>,
    style_log: Vec<StyleMutation>,
}

impl Page {
    /// An empty document in the given window.
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    /// The document tree.
    #[must_use]
    pub const fn dom(&self) -> &DomTree {
        &self.dom
    }

    /// Window size and scroll state.
    #[must_use]
    pub const fn window(&self) -> &Window {
        &self.window
    }

    /// Scroll the document vertically.
    pub const fn scroll_to(&mut self, scroll_y: f64) {
        self.window.scroll_y = scroll_y;
    }

    /// Resize the window.
    pub const fn resize(&mut self, width: f64, height: f64) {
        self.window.width = width;
        self.window.height = height;
    }

    /// Create an element and append it to `parent` (the document if `None`).
    pub fn create_element(&mut self, tag: &str, parent: Option<NodeId>) -> NodeId {
        let node = self.dom.alloc(NodeType::Element(ElementData::new(tag)));
        self.dom.append_child(parent.unwrap_or(NodeId::ROOT), node);
        node
    }

    /// Set an attribute. The `style` attribute replaces the inline declarations.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let Some(element) = self.dom.as_element_mut(node) else {
            return;
        };
        if name.eq_ignore_ascii_case("style") {
            element.style = StyleDeclarations::parse(value);
        }
        let _ = element
            .attrs
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    /// Move an element (and its subtree) under `parent`.
    pub fn append_child(&mut self, parent: NodeId, node: NodeId) {
        self.dom.append_child(parent, node);
    }

    /// Detach an element (and its subtree) from the document.
    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.dom.parent(node) {
            self.dom.remove_child(parent, node);
        }
    }

    /// Give an element its border box in document coordinates.
    pub fn set_layout_box(&mut self, node: NodeId, rect: Rect) {
        let _ = self.layout.insert(node, rect);
    }

    /// The border box assigned to an element.
    #[must_use]
    pub fn layout_box(&self, node: NodeId) -> Option<Rect> {
        self.layout.get(&node).copied()
    }

    /// Read an inline style property.
    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.dom
            .as_element(node)
            .and_then(|e| e.style.get_property(property))
            .map(str::to_string)
    }

    /// Write an inline style property; `None` removes it. Every write is logged.
    pub fn set_style(&mut self, node: NodeId, property: &str, value: Option<&str>) {
        let old = self.style(node, property);
        let Some(element) = self.dom.as_element_mut(node) else {
            return;
        };
        match value {
            Some(value) => element.style.set_property(property, value),
            None => element.style.remove_property(property),
        }
        let new = element.style.get_property(property).map(str::to_string);
        log::trace!("{node:?}.style.{property}: {old:?} -> {new:?}");
        self.style_log.push(StyleMutation {
            node,
            property: property.to_ascii_lowercase(),
            old,
            new,
        });
    }

    /// Every inline style write so far.
    #[must_use]
    pub fn style_mutations(&self) -> &[StyleMutation] {
        &self.style_log
    }

    /// Bind a ref name to an element.
    pub fn register_ref(&mut self, name: RefName, node: NodeId) {
        let _ = self.refs.insert(name, node);
    }

    /// Drop a ref binding.
    pub fn unregister_ref(&mut self, name: RefName) {
        let _ = self.refs.remove(&name);
    }

    /// Whether an element generates a box: it and every ancestor element
    /// have a used display other than `none`, and it is in the document.
    #[must_use]
    pub fn is_rendered(&self, node: NodeId) -> bool {
        if !self.dom.is_connected(node) {
            return false;
        }
        std::iter::once(node)
            .chain(self.dom.ancestors(node))
            .filter_map(|id| self.dom.as_element(id))
            .all(|element| !ComputedStyle::compute(element).display.is_none())
    }

    /// The elements that would be painted right now, in tree order.
    #[must_use]
    pub fn paint(&self) -> Vec<NodeId> {
        let mut painted = Vec::new();
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            if id != NodeId::ROOT {
                if !self.is_rendered(id) {
                    continue;
                }
                if self.layout.contains_key(&id) {
                    painted.push(id);
                }
            }
            stack.extend(self.dom.children(id).iter().rev());
        }
        painted
    }

    /// The nearest ancestor element with a box, and its box.
    fn offset_parent_box(&self, node: NodeId) -> Option<Rect> {
        self.dom
            .ancestors(node)
            .filter(|&id| self.dom.as_element(id).is_some())
            .find_map(|id| self.layout_box(id))
    }

    fn rendered_box(&self, node: NodeId) -> Option<Rect> {
        self.layout_box(node).filter(|_| self.is_rendered(node))
    }
}

impl ViewportQuery for Page {
    fn inner_width(&self) -> f64 {
        self.window.width
    }

    fn inner_height(&self) -> f64 {
        self.window.height
    }

    fn client_width(&self) -> f64 {
        (self.window.width - self.window.scrollbar_width).max(0.0)
    }

    fn client_height(&self) -> f64 {
        self.window.height
    }

    fn page_y_offset(&self) -> f64 {
        self.window.scroll_y
    }

    fn scroll_top(&self) -> f64 {
        self.window.scroll_y
    }
}

impl ElementHost for Page {
    type Element = NodeId;

    fn element_ref(&self, name: RefName) -> Option<NodeId> {
        self.refs
            .get(&name)
            .copied()
            .filter(|&node| self.dom.is_connected(node))
    }

    fn bounding_client_rect(&self, element: NodeId) -> DomRect {
        self.rendered_box(element).map_or_else(DomRect::default, |rect| {
            DomRect::from_rect(rect.translate(-self.window.scroll_x, -self.window.scroll_y))
        })
    }

    fn offset_left(&self, element: NodeId) -> f64 {
        self.rendered_box(element).map_or(0.0, |rect| {
            rect.x - self.offset_parent_box(element).map_or(0.0, |parent| parent.x)
        })
    }

    fn offset_top(&self, element: NodeId) -> f64 {
        self.rendered_box(element).map_or(0.0, |rect| {
            rect.y - self.offset_parent_box(element).map_or(0.0, |parent| parent.y)
        })
    }

    fn computed_style(&self, element: NodeId) -> ComputedStyle {
        self.dom.as_element(element).map_or_else(
            || ComputedStyle::compute(&ElementData::default()),
            ComputedStyle::compute,
        )
    }

    fn inline_display(&self, element: NodeId) -> Option<String> {
        self.style(element, "display")
    }

    fn set_inline_display(&mut self, element: NodeId, value: Option<&str>) {
        self.set_style(element, "display", value);
    }
}
