//! Code renderer: a subtree to a nested htmldoom call expression.

use moodlmth_dom::{DomTree, ElementData, NodeId, NodeType};

use crate::attributes::{AttributeStyle, format_attributes};
use crate::fragment::{Fragment, Slot};
use crate::python::{py_bytes, py_string};

/// Renders nodes of a finished (or partially built) tree.
///
/// Rendering is a pure function of the subtree: the same node always gives
/// the same fragment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    attribute_style: AttributeStyle,
}

impl Renderer {
    /// A renderer formatting attributes with `attribute_style`.
    #[must_use]
    pub const fn new(attribute_style: AttributeStyle) -> Self {
        Self { attribute_style }
    }

    /// The attribute style in use.
    #[must_use]
    pub const fn attribute_style(&self) -> AttributeStyle {
        self.attribute_style
    }

    /// Render `id` as the top of a fragment.
    ///
    /// The node itself is always written out in full, even when it is a
    /// title, head, body or html element; such elements further down become
    /// slot references.
    #[must_use]
    pub fn render(&self, tree: &DomTree, id: NodeId) -> Fragment {
        let Some(node) = tree.get(id) else {
            return Fragment::new();
        };
        match &node.node_type {
            NodeType::Document => self.render_children(tree, id),
            NodeType::Element(data) => self.render_element(tree, id, data),
            NodeType::Text(text) => {
                let mut out = Fragment::new();
                out.push_literal(py_string(text));
                out
            }
            NodeType::RawText(text) => {
                let mut out = Fragment::new();
                out.push_literal(py_bytes(text));
                out
            }
            NodeType::Comment(text) => {
                let mut out = Fragment::code("b.comment(");
                out.push_literal(py_string(text));
                out.push_code(")");
                out
            }
        }
    }

    /// Render the children of `id` joined by `, `.
    #[must_use]
    pub fn render_children(&self, tree: &DomTree, id: NodeId) -> Fragment {
        let mut out = Fragment::new();
        out.append_joined(
            tree.children(id)
                .iter()
                .map(|&child| self.render_nested(tree, child)),
        );
        out
    }

    fn render_nested(&self, tree: &DomTree, id: NodeId) -> Fragment {
        if let Some(slot) = tree.tag_name(id).and_then(Slot::from_tag) {
            let mut out = Fragment::new();
            out.push_slot(slot);
            return out;
        }
        self.render(tree, id)
    }

    fn render_element(&self, tree: &DomTree, id: NodeId, data: &ElementData) -> Fragment {
        let mut out = Fragment::code(&data.identifier);
        if let Some(argument) = &data.identifier_argument {
            out.push_code("(");
            out.push_literal(argument.clone());
            out.push_code(")");
        }
        out.append(format_attributes(&data.attrs, self.attribute_style));
        if !tree.children(id).is_empty() {
            out.push_code("(");
            out.append(self.render_children(tree, id));
            out.push_code(")");
        }
        out
    }
}
