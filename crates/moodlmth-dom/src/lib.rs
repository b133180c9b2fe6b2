//! Node tree for the moodlmth converter.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships.
//! Ownership flows strictly from the arena vector; a node's `parent` is a plain
//! index back into it, never an owning reference.

/// Ordered attribute list of an element: `(name, value)`, `None` for a
/// valueless (boolean) attribute. Names are unique within one element.
pub type AttributeList = Vec<(String, Option<String>)>;

/// A type-safe index into the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The synthetic root node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// A node in the arena.
///
/// `parent` is set once when the node is attached and never changes;
/// `children` only ever grows, in document order.
#[derive(Debug, Clone)]
pub struct Node {
    /// What this node is.
    pub node_type: NodeType,

    /// The element this node was appended to. `None` for the root and for
    /// allocated-but-unattached nodes.
    pub parent: Option<NodeId>,

    /// Child nodes in document order.
    pub children: Vec<NodeId>,
}

/// The closed set of node kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// The synthetic document-fragment root the cursor starts at.
    Document,
    /// An element with a resolved builder identifier.
    Element(ElementData),
    /// Ordinary character data.
    Text(String),
    /// Character data inside `script`, `style` or `textarea`; rendered
    /// without any escaping of its content.
    RawText(String),
    /// A comment.
    Comment(String),
}

/// Element-specific data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// Lowercase tag name as it appeared in the source.
    pub tag_name: String,
    /// Code expression naming the element builder, e.g. `e.div`, or a
    /// generic constructor such as `b.composite_tag` for unknown tags.
    pub identifier: String,
    /// Quoted argument the generic constructor is called with, e.g.
    /// `"clipboard-copy"`. `None` for known elements.
    pub identifier_argument: Option<String>,
    /// Attributes in source order.
    pub attrs: AttributeList,
}

/// Arena-based tree with O(1) node access and traversal.
///
/// This structure stores all nodes in a contiguous vector, using indices
/// for all relationships. The root is always at [`NodeId::ROOT`].
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree with just the root node.
    #[must_use]
    pub fn new() -> Self {
        let root = Node {
            node_type: NodeType::Document,
            parent: None,
            children: Vec::new(),
        };
        Self { nodes: vec![root] }
    }

    /// Get the root node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get the number of nodes in the tree, root included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (should always have at least the root).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Appends `child` as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if either ID is out of range, or if `child` already has a
    /// parent, since a node is attached exactly once.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        assert!(
            self.nodes[child.0].parent.is_none(),
            "node {child:?} is already attached"
        );
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Allocate `node_type` and append it under `parent` in one step.
    pub fn append(&mut self, parent: NodeId, node_type: NodeType) -> NodeId {
        let id = self.alloc(node_type);
        self.append_child(parent, id);
        id
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get the source tag name of an element node.
    #[must_use]
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.as_element(id).map(|e| e.tag_name.as_str())
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}
