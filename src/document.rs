// Arena representation of a parsed HTML tree.

use std::collections::HashMap;

/// Index of a node inside its [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena. Side tables are keyed by this.
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a [`DocumentNode`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    Comment,
}

/// One element, text run or comment of the parsed tree.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct DocumentNode {
    pub kind: NodeKind,
    /// Lower-case tag name; empty for text and comment nodes.
    pub tag: String,
    pub attributes: HashMap<String, String>,
    /// Children in document order.
    pub children: Vec<NodeId>,
    /// Own direct text. For elements it precedes the children's text.
    pub text: String,
}

impl DocumentNode {
    fn new(kind: NodeKind, tag: &str, text: &str) -> Self {
        Self {
            kind,
            tag: tag.to_ascii_lowercase(),
            attributes: HashMap::new(),
            children: Vec::new(),
            text: text.to_string(),
        }
    }

    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    /// Attribute value by (lower-case) name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// A rooted tree of [`DocumentNode`]s stored in a flat arena.
///
/// Nodes can only be appended under an existing parent, so the tree never
/// contains shared children or cycles. The tree is read-only to the
/// extraction pipeline: every stage keeps its results in side tables indexed
/// by [`NodeId::index`].
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<DocumentNode>,
    root: Option<NodeId>,
}

impl Document {
    /// An empty document with no root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new root element. Any previous root becomes unreachable.
    pub fn set_root(&mut self, tag: &str) -> NodeId {
        let id = self.push(DocumentNode::new(NodeKind::Element, tag, ""));
        self.root = Some(id);
        id
    }

    /// Append an element as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this document.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        self.append(parent, DocumentNode::new(NodeKind::Element, tag, ""))
    }

    /// Append a text run as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this document.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.append(parent, DocumentNode::new(NodeKind::Text, "", text))
    }

    /// Append a comment as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this document.
    pub fn append_comment(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.append(parent, DocumentNode::new(NodeKind::Comment, "", text))
    }

    /// Set an attribute on `node`. Names are stored lower-case.
    ///
    /// # Panics
    ///
    /// Panics if `node` does not belong to this document.
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        self.nodes[node.0]
            .attributes
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    /// Replace the own direct text of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` does not belong to this document.
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        self.nodes[node.0].text = text.to_string();
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this document.
    pub fn node(&self, id: NodeId) -> &DocumentNode {
        &self.nodes[id.0]
    }

    /// Size of the arena, including nodes no longer reachable from the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order (document order) walk of the subtree rooted at `id`.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            doc: self,
            stack: vec![id],
        }
    }

    /// Every node reachable from the root, in document order.
    pub fn preorder(&self) -> Vec<NodeId> {
        match self.root {
            Some(root) => self.descendants(root).collect(),
            None => Vec::new(),
        }
    }

    fn push(&mut self, node: DocumentNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn append(&mut self, parent: NodeId, node: DocumentNode) -> NodeId {
        let id = self.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }
}

/// Explicit-stack pre-order iterator; deep trees cannot overflow the call stack.
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.doc.node(id).children.iter().rev().copied());
        Some(id)
    }
}
