// crates/ayayron-types/src/view.rs
// View description tree produced by component render functions

use std::fmt;

/// A description of UI to render.
///
/// Components never touch the DOM directly: they return a `ViewNode` and the
/// host (Leptos in the browser, plain assertions in tests) decides what to do
/// with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    /// Renders nothing
    Empty,
    Text(String),
    Element(Element),
    /// A named component boundary wrapping the component's rendered output
    Component {
        name: &'static str,
        child: Box<ViewNode>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<ViewNode>,
}

// ============================================================================
// Construction
// ============================================================================

impl ViewNode {
    pub fn text(text: impl Into<String>) -> Self {
        ViewNode::Text(text.into())
    }

    pub fn component(name: &'static str, child: impl Into<ViewNode>) -> Self {
        ViewNode::Component {
            name,
            child: Box::new(child.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ViewNode::Empty => true,
            ViewNode::Component { child, .. } => child.is_empty(),
            _ => false,
        }
    }
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((key, value.into()));
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, child: impl Into<ViewNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(ViewNode::Text(text.into()))
    }

    /// Value of the first attribute named `key`
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Concatenated text of the element's children
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.children.iter().for_each(|c| c.collect_text(&mut out));
        out
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }
}

impl From<Element> for ViewNode {
    fn from(element: Element) -> Self {
        ViewNode::Element(element)
    }
}

// ============================================================================
// Queries
// ============================================================================

impl ViewNode {
    /// Number of component boundaries named `name` anywhere in the tree
    pub fn count_components(&self, name: &str) -> usize {
        match self {
            ViewNode::Component { name: n, child } => {
                usize::from(*n == name) + child.count_components(name)
            }
            ViewNode::Element(el) => el.children.iter().map(|c| c.count_components(name)).sum(),
            ViewNode::Empty | ViewNode::Text(_) => 0,
        }
    }

    /// Rendered output of the first component named `name` (depth-first)
    pub fn find_component(&self, name: &str) -> Option<&ViewNode> {
        match self {
            ViewNode::Component { name: n, child } if *n == name => Some(child.as_ref()),
            ViewNode::Component { child, .. } => child.find_component(name),
            ViewNode::Element(el) => el.children.iter().find_map(|c| c.find_component(name)),
            ViewNode::Empty | ViewNode::Text(_) => None,
        }
    }

    /// First element (depth-first) satisfying `pred`
    pub fn find_element(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        match self {
            ViewNode::Element(el) if pred(el) => Some(el),
            ViewNode::Element(el) => el.children.iter().find_map(|c| c.find_element(pred)),
            ViewNode::Component { child, .. } => child.find_element(pred),
            ViewNode::Empty | ViewNode::Text(_) => None,
        }
    }

    pub fn find_element_with_attr(&self, key: &str, value: &str) -> Option<&Element> {
        self.find_element(&|el: &Element| el.get_attr(key) == Some(value))
    }

    /// Concatenated text of the whole subtree
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            ViewNode::Text(t) => out.push_str(t),
            ViewNode::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
            ViewNode::Component { child, .. } => child.collect_text(out),
            ViewNode::Empty => {}
        }
    }
}

// ============================================================================
// HTML Rendering
// ============================================================================

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl fmt::Display for ViewNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewNode::Empty => Ok(()),
            ViewNode::Text(t) => f.write_str(&html_escape(t)),
            ViewNode::Element(el) => el.fmt(f),
            // Component boundaries leave no trace in the markup
            ViewNode::Component { child, .. } => child.fmt(f),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (key, value) in &self.attrs {
            write!(f, " {}=\"{}\"", key, html_escape(value))?;
        }
        f.write_str(">")?;
        for child in &self.children {
            child.fmt(f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}
