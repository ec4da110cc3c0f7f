//! In-memory panel host
//!
//! Mirrors what the content script does to the real page closely enough for
//! tests and the CLI preview: nodes are keyed by their ids and every mount or
//! removal is counted.

use super::{ContextHandle, HostingContext, PanelHost};
use crate::view::panel::{BUTTON_ID, CONTENT_ID, SIDEBAR_ID};
use crate::view::Node;

#[derive(Debug, Default)]
pub struct VirtualDocument {
    body: Vec<Node>,
    context: ContextHandle,
    mutations: usize,
}

impl VirtualDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share an existing invalidation flag.
    pub fn with_context(context: ContextHandle) -> Self {
        Self { context, ..Self::default() }
    }

    pub fn context(&self) -> &ContextHandle {
        &self.context
    }

    pub fn invalidate(&self) {
        self.context.invalidate();
    }

    /// Number of DOM mutations performed so far.
    pub fn mutation_count(&self) -> usize {
        self.mutations
    }

    pub fn button_count(&self) -> usize {
        self.count(BUTTON_ID)
    }

    pub fn sidebar_count(&self) -> usize {
        self.count(SIDEBAR_ID)
    }

    pub fn button(&self) -> Option<&Node> {
        self.top_level(BUTTON_ID)
    }

    pub fn sidebar(&self) -> Option<&Node> {
        self.top_level(SIDEBAR_ID)
    }

    /// Content region of the open sidebar.
    pub fn sidebar_content(&self) -> Option<&Node> {
        let content = self.sidebar()?.find_by_id(CONTENT_ID)?;
        content.children.first()
    }

    pub fn sidebar_text(&self) -> String {
        self.sidebar().map(Node::text_content).unwrap_or_default()
    }

    /// Serialized body, in mount order.
    pub fn to_html(&self) -> String {
        self.body.iter().map(Node::to_html).collect()
    }

    fn count(&self, id: &str) -> usize {
        self.body.iter().filter(|node| is_id(node, id)).count()
    }

    fn top_level(&self, id: &str) -> Option<&Node> {
        self.body.iter().find(|node| is_id(node, id))
    }

    fn remove(&mut self, id: &str) -> bool {
        let before = self.body.len();
        self.body.retain(|node| !is_id(node, id));
        let removed = self.body.len() != before;
        if removed {
            self.mutations += 1;
        }
        removed
    }

    fn append(&mut self, node: Node) {
        self.body.push(node);
        self.mutations += 1;
    }
}

fn is_id(node: &Node, id: &str) -> bool {
    node.as_element().map_or(false, |e| e.id == Some(id))
}

impl HostingContext for VirtualDocument {
    fn is_invalid(&self) -> bool {
        self.context.is_invalid()
    }
}

impl PanelHost for VirtualDocument {
    fn has_button(&self) -> bool {
        self.top_level(BUTTON_ID).is_some()
    }

    fn mount_button(&mut self, button: Node) {
        self.append(button);
    }

    fn remove_button(&mut self) -> bool {
        self.remove(BUTTON_ID)
    }

    fn has_sidebar(&self) -> bool {
        self.top_level(SIDEBAR_ID).is_some()
    }

    fn mount_sidebar(&mut self, sidebar: Node) {
        self.append(sidebar);
    }

    fn remove_sidebar(&mut self) -> bool {
        self.remove(SIDEBAR_ID)
    }

    fn replace_content(&mut self, content: Node) -> bool {
        let slot = self
            .body
            .iter_mut()
            .filter(|node| is_id(node, SIDEBAR_ID))
            .find_map(|node| node.find_by_id_mut(CONTENT_ID));

        match slot {
            Some(slot) => {
                slot.children = vec![content];
                self.mutations += 1;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Translator;
    use crate::view::panel::{render_button, render_error, render_sidebar, PanelContent};

    #[test]
    fn test_mount_and_remove_count_mutations() {
        let t = Translator::default();
        let mut doc = VirtualDocument::new();
        doc.mount_button(render_button(&t));
        assert!(doc.has_button());
        assert!(doc.remove_button());
        assert!(!doc.remove_button());
        assert_eq!(doc.mutation_count(), 2);
    }

    #[test]
    fn test_replace_content_needs_sidebar() {
        let t = Translator::default();
        let mut doc = VirtualDocument::new();
        assert!(!doc.replace_content(render_error(&t)));

        doc.mount_sidebar(render_sidebar(&PanelContent::Loading, &t));
        assert!(doc.replace_content(render_error(&t)));
        assert_eq!(doc.sidebar_content(), Some(&render_error(&t)));
    }

    #[test]
    fn test_invalidate_through_shared_handle() {
        let handle = ContextHandle::new();
        let doc = VirtualDocument::with_context(handle.clone());
        handle.invalidate();
        assert!(doc.is_invalid());
    }
}
