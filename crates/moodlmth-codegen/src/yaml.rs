//! The YAML output family.
//!
//! Instead of nested call expressions the page becomes a component tree for
//! `htmldoom.yaml_loader`, plus a short Python module that loads it:
//!
//! - an element with attributes is `{tag: [attrs, [children]]}`, without
//!   them `{tag: [[children]]}`; a leaf is always `{tag: [attrs]}`
//! - a valueless attribute is `true`
//! - raw text (script, style, textarea) moves to a `rawN.txt` asset and is
//!   replaced by a `{rawN}` placeholder
//! - comments are dropped
//!
//! The loaded tree is formatted with `str.format`, so braces in page text
//! are doubled everywhere except in the placeholders.

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use moodlmth_dom::{DomTree, ElementData, NodeId, NodeType};

use crate::builder::BuiltDocument;
use crate::diagnostic::Diagnostic;
use crate::python::py_string;
use crate::registry::{TagForm, TagKind, TagRegistry};
use crate::template::substitute;

/// Directory the generated module loads its assets from.
pub const ASSETS_DIR: &str = "assets";

/// File name of the component tree inside [`ASSETS_DIR`].
pub const COMPONENTS_FILE: &str = "components.yml";

const MODULE_TEMPLATE: &str = r#"from htmldoom import doctype, render, renders, loadraw as lr
from htmldoom.yaml_loader import loadyaml as ly

ASSETS = "{assets}"
COMPONENTS = f"{{ASSETS}}/{components}"

{raw_renderers}
@renders(doctype({doctype}), ly(COMPONENTS))
def document():
    return {raw_elements}


if __name__ == "__main__":
    print(render(document()))
"#;

const RAW_RENDERER_TEMPLATE: &str = r#"
@renders(lr(f"{{ASSETS}}/{name}.txt", static=True))
def {name}():
    return {{}}
"#;

/// Raw text moved out of the component tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawAsset {
    /// Placeholder name, `raw0`, `raw1`, ... in document order.
    pub name: String,
    /// The text, unmodified.
    pub content: String,
}

impl RawAsset {
    /// File name inside [`ASSETS_DIR`].
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.name)
    }
}

/// The result of a successful YAML conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YamlConversion {
    /// The Python module that loads the assets.
    pub module: String,
    /// Contents of [`COMPONENTS_FILE`].
    pub components: String,
    /// One text asset per raw text node.
    pub raw_assets: Vec<RawAsset>,
    /// Recoverable problems found in the input.
    pub diagnostics: Vec<Diagnostic>,
}

/// Walks a built tree into a component tree, collecting raw assets.
pub struct ComponentWriter<'r> {
    registry: &'r TagRegistry,
    raw_assets: Vec<RawAsset>,
}

impl<'r> ComponentWriter<'r> {
    /// A writer with no assets yet.
    #[must_use]
    pub const fn new(registry: &'r TagRegistry) -> Self {
        Self {
            registry,
            raw_assets: Vec::new(),
        }
    }

    /// The component list for the children of `id`.
    pub fn children(&mut self, tree: &DomTree, id: NodeId) -> Value {
        let items = tree
            .children(id)
            .iter()
            .filter_map(|&child| self.node(tree, child))
            .collect();
        Value::Sequence(items)
    }

    /// The raw assets collected so far.
    #[must_use]
    pub fn into_raw_assets(self) -> Vec<RawAsset> {
        self.raw_assets
    }

    fn node(&mut self, tree: &DomTree, id: NodeId) -> Option<Value> {
        match &tree.get(id)?.node_type {
            NodeType::Document | NodeType::Comment(_) => None,
            NodeType::Text(text) => Some(Value::String(escape_braces(text))),
            NodeType::RawText(text) => {
                let name = format!("raw{}", self.raw_assets.len());
                let placeholder = format!("{{{name}}}");
                self.raw_assets.push(RawAsset {
                    name,
                    content: text.clone(),
                });
                Some(Value::String(placeholder))
            }
            NodeType::Element(data) => Some(self.element(tree, id, data)),
        }
    }

    fn element(&mut self, tree: &DomTree, id: NodeId, data: &ElementData) -> Value {
        let attrs = attributes(data);
        let body = if self.is_leaf(data) {
            vec![attrs]
        } else {
            let children = self.children(tree, id);
            if data.attrs.is_empty() {
                vec![children]
            } else {
                vec![attrs, children]
            }
        };

        let mut component = Mapping::new();
        let _ = component.insert(
            Value::String(escape_braces(&data.tag_name)),
            Value::Sequence(body),
        );
        Value::Mapping(component)
    }

    /// Known tags have a fixed kind; an unknown tag is a leaf only when it
    /// was written self-closing.
    fn is_leaf(&self, data: &ElementData) -> bool {
        if data.identifier_argument.is_some() {
            return data.identifier == "b.leaf_tag";
        }
        self.registry.resolve(&data.tag_name, TagForm::Open).kind == TagKind::Leaf
    }
}

fn attributes(data: &ElementData) -> Value {
    let mapping = data
        .attrs
        .iter()
        .map(|(name, value)| {
            let value = value
                .as_deref()
                .map_or(Value::Bool(true), |v| Value::String(escape_braces(v)));
            (Value::String(escape_braces(name)), value)
        })
        .collect();
    Value::Mapping(mapping)
}

fn escape_braces(text: &str) -> String {
    text.replace('{', "{{").replace('}', "}}")
}

/// The component tree of a built document, serialized, and its raw assets.
///
/// # Errors
///
/// Returns the serializer's error if the tree cannot be written as YAML.
pub fn write_components(
    registry: &TagRegistry,
    built: &BuiltDocument,
) -> Result<(String, Vec<RawAsset>), serde_yaml::Error> {
    let mut writer = ComponentWriter::new(registry);
    let components = writer.children(&built.tree, NodeId::ROOT);
    Ok((serde_yaml::to_string(&components)?, writer.into_raw_assets()))
}

/// The loader module for a document with `doctype` and `raw_assets`.
///
/// A page without a doctype gets `html`.
#[must_use]
pub fn loader_module(doctype: Option<&str>, raw_assets: &[RawAsset]) -> String {
    let raw_renderers: Vec<String> = raw_assets
        .iter()
        .map(|asset| substitute(RAW_RENDERER_TEMPLATE, &[("name", asset.name.clone())]))
        .collect();
    let raw_elements: Vec<String> = raw_assets
        .iter()
        .map(|asset| format!("{}: {}()", py_string(&asset.name), asset.name))
        .collect();

    substitute(
        MODULE_TEMPLATE,
        &[
            ("assets", ASSETS_DIR.to_string()),
            ("components", COMPONENTS_FILE.to_string()),
            ("raw_renderers", raw_renderers.join("\n")),
            ("doctype", py_string(doctype.unwrap_or("html"))),
            ("raw_elements", format!("{{{}}}", raw_elements.join(", "))),
        ],
    )
}
