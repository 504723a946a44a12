//! In-memory page used by the CLI and by tests.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Appending an
//! [`Element`] copies its subtree into the arena, so the caller's value is
//! consumed exactly like a DOM `appendChild`.

use crate::dom::Element;

use super::{PageError, PageHost};

/// Handle to a node of a [`MemoryPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<NodeId>,
}

/// A minimal HTML document: `<html>` with `<head><title>` and `<body>`.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    nodes: Vec<Node>,
    root: NodeId,
    body: NodeId,
}

impl MemoryPage {
    /// An empty document with the given title and nothing in `<body>`.
    #[must_use]
    pub fn new(title: &str) -> Self {
        let mut page = Self { nodes: Vec::new(), root: NodeId(0), body: NodeId(0) };

        let mut head = Element::new("head");
        head.append_child(Element::new("meta").with_attribute("charset", "utf-8"));
        head.append_child(Element::new("title").with_text(title));

        let root = page.insert(Element::new("html"));
        let head = page.insert(head);
        let body = page.insert(Element::new("body"));
        page.nodes[root.0].children.extend([head, body]);

        page.root = root;
        page.body = body;
        page
    }

    /// A document whose `<body>` holds an empty `<div id="{container_id}">`.
    #[must_use]
    pub fn with_container(title: &str, container_id: &str) -> Self {
        let mut page = Self::new(title);
        let div = page.insert(Element::new("div").with_attribute("id", container_id));
        page.nodes[page.body.0].children.push(div);
        page
    }

    /// Owned snapshot of the subtree rooted at `id`.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<Element> {
        let node = self.nodes.get(id.0)?;
        let mut el = Element::new(node.tag.clone());
        el.attributes.clone_from(&node.attributes);
        el.text.clone_from(&node.text);
        for child in &node.children {
            el.append_child(self.element(*child)?);
        }
        Some(el)
    }

    /// Serialize the whole document, doctype included.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n");
        if let Some(root) = self.element(self.root) {
            out.push_str(&root.to_html());
        }
        out.push('\n');
        out
    }

    fn insert(&mut self, el: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { tag: el.tag, attributes: el.attributes, text: el.text, children: Vec::new() });
        let children: Vec<NodeId> = el.children.into_iter().map(|c| self.insert(c)).collect();
        self.nodes[id.0].children = children;
        id
    }
}

impl PageHost for MemoryPage {
    type Handle = NodeId;

    fn find_element(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.attributes.iter().any(|(k, v)| k == "id" && v == id))
            .map(NodeId)
    }

    fn append_child(&mut self, parent: &NodeId, child: Element) -> Result<(), PageError> {
        if parent.0 >= self.nodes.len() {
            return Err(PageError::UnknownNode(parent.0));
        }
        let child = self.insert(child);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
