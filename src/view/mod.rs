//! Structured UI descriptions
//!
//! Renderers build a [`Node`] tree; only the `wasm` front end (and the
//! in-memory document used by tests and the CLI) turns it into something
//! visible.

pub mod panel;
pub mod popup;

use crate::models::Language;
use crate::utils::escape_html;

/// A user interaction a rendered element can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    OpenPanel,
    ClosePanel,
    CopyPrompt,
    DownloadInputImage,
    SelectLanguage(Language),
    SaveSettings,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub id: Option<&'static str>,
    pub classes: Vec<&'static str>,
    pub attributes: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
    pub on_click: Option<Action>,
}

/// Elements rendered without a closing tag.
const VOID_TAGS: &[&str] = &["img", "br", "hr", "input"];

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
            on_click: None,
        }
    }

    pub fn id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn on_click(mut self, action: Action) -> Self {
        self.on_click = Some(action);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(&|e: &Element| e.id == Some(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        match self {
            Node::Text(_) => None,
            Node::Element(element) => {
                if element.id == Some(id) {
                    return Some(element);
                }
                element
                    .children
                    .iter_mut()
                    .find_map(|child| child.find_by_id_mut(id))
            }
        }
    }

    /// Depth-first search for the first element matching `predicate`.
    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        let element = self.as_element()?;
        if predicate(element) {
            return Some(element);
        }
        element.children.iter().find_map(|child| child.find(predicate))
    }

    /// Every element with `class`, in document order.
    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if let Node::Element(element) = self {
            if element.has_class(class) {
                found.push(element);
            }
            for child in &element.children {
                child.collect_by_class(class, found);
            }
        }
    }

    /// Serialize to HTML with text and attribute values escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                if let Some(id) = element.id {
                    out.push_str(&format!(" id=\"{}\"", escape_html(id)));
                }
                if !element.classes.is_empty() {
                    out.push_str(&format!(" class=\"{}\"", escape_html(&element.classes.join(" "))));
                }
                for (name, value) in &element.attributes {
                    out.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
                }
                out.push('>');

                if VOID_TAGS.contains(&element.tag) {
                    return;
                }

                for child in &element.children {
                    child.write_html(out);
                }
                out.push_str(&format!("</{}>", element.tag));
            }
        }
    }
}
