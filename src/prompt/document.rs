//! Labelled tree the review prompt is built as before serialisation.

/// Payload of a node: either text or nested nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeContent {
    /// Leaf text.
    Text(String),
    /// Ordered child nodes.
    Children(Vec<Node>),
}

/// A labelled node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    label: &'static str,
    content: NodeContent,
}

impl Node {
    /// Leaf node holding `text`.
    #[must_use]
    pub fn text(label: &'static str, text: impl Into<String>) -> Self {
        Self {
            label,
            content: NodeContent::Text(text.into()),
        }
    }

    /// Node holding `children` in order.
    #[must_use]
    pub const fn element(label: &'static str, children: Vec<Self>) -> Self {
        Self {
            label,
            content: NodeContent::Children(children),
        }
    }

    /// Node label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Node payload.
    #[must_use]
    pub const fn content(&self) -> &NodeContent {
        &self.content
    }

    /// Child nodes; empty for text nodes.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match &self.content {
            NodeContent::Children(children) => children,
            NodeContent::Text(_) => &[],
        }
    }

    /// Text payload, if this is a leaf.
    #[must_use]
    pub fn text_value(&self) -> Option<&str> {
        match &self.content {
            NodeContent::Text(text) => Some(text),
            NodeContent::Children(_) => None,
        }
    }

    /// First direct child labelled `label`.
    #[must_use]
    pub fn child(&self, label: &str) -> Option<&Self> {
        self.children().iter().find(|child| child.label == label)
    }
}

/// A complete prompt document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Node,
}

impl Document {
    /// Wraps `root` as a document.
    #[must_use]
    pub const fn new(root: Node) -> Self {
        Self { root }
    }

    /// Root node.
    #[must_use]
    pub const fn root(&self) -> &Node {
        &self.root
    }
}
