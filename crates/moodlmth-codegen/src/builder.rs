//! Tree construction.
//!
//! The builder consumes tokens in document order and keeps a single cursor:
//! the innermost element whose close tag has not arrived yet. There is no
//! insertion-mode state machine; where the cursor points is the state.
//!
//! Title, head, body and html are rendered the moment they close and kept
//! as [`Captures`], which is what the templates are filled from.

use std::collections::HashSet;
use std::iter;

use moodlmth_dom::{AttributeList, DomTree, ElementData, NodeId, NodeType};
use moodlmth_html::{Attribute, Token};

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::error::ConvertError;
use crate::fragment::{Fragment, Slot};
use crate::python::py_string;
use crate::registry::{TagForm, TagKind, TagRegistry};
use crate::render::Renderer;

/// Elements whose text children are raw text.
pub const RAW_TEXT_PARENTS: &[&str] = &["script", "style", "textarea"];

const DOCTYPE_PREFIX: &str = "doctype ";

/// The sections captured while building.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures {
    /// `b.doctype(...)` for the first doctype seen.
    pub doctype: Option<Fragment>,
    /// The text after `DOCTYPE ` of that doctype, e.g. `html`.
    pub doctype_text: Option<String>,
    /// The title element.
    pub title: Option<Fragment>,
    /// The head element.
    pub head: Option<Fragment>,
    /// The body element.
    pub body: Option<Fragment>,
    /// The children of the body element, without the body call around them.
    pub body_contents: Option<Fragment>,
    /// The html element.
    pub html: Option<Fragment>,
}

impl Captures {
    /// The capture for `slot`, if that section closed.
    #[must_use]
    pub const fn get(&self, slot: Slot) -> Option<&Fragment> {
        match slot {
            Slot::Title => self.title.as_ref(),
            Slot::Head => self.head.as_ref(),
            Slot::Body => self.body.as_ref(),
            Slot::Html => self.html.as_ref(),
        }
    }

    fn set(&mut self, slot: Slot, fragment: Fragment) {
        let target = match slot {
            Slot::Title => &mut self.title,
            Slot::Head => &mut self.head,
            Slot::Body => &mut self.body,
            Slot::Html => &mut self.html,
        };
        *target = Some(fragment);
    }
}

/// Everything tree construction produced.
#[derive(Debug, Clone)]
pub struct BuiltDocument {
    /// The tree.
    pub tree: DomTree,
    /// Where the cursor ended; [`NodeId::ROOT`] for balanced input.
    pub cursor: NodeId,
    /// Sections rendered at their close tags.
    pub captures: Captures,
    /// Recoverable problems, in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
}

/// Builds one document. Create a fresh builder per conversion.
pub struct TreeBuilder<'r> {
    registry: &'r TagRegistry,
    renderer: Renderer,
    tree: DomTree,
    cursor: NodeId,
    captures: Captures,
    diagnostics: Vec<Diagnostic>,
    unknown_tags: HashSet<String>,
    token_index: usize,
}

impl<'r> TreeBuilder<'r> {
    /// Create a builder resolving tags through `registry`.
    #[must_use]
    pub fn new(registry: &'r TagRegistry, renderer: Renderer) -> Self {
        Self {
            registry,
            renderer,
            tree: DomTree::new(),
            cursor: NodeId::ROOT,
            captures: Captures::default(),
            diagnostics: Vec::new(),
            unknown_tags: HashSet::new(),
            token_index: 0,
        }
    }

    /// Feed every token and finish.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnknownDeclaration`] for `<!DOCTYPE>` without
    /// a name and [`ConvertError::TagClosedBeforeStarting`] for a close tag
    /// with no open element.
    pub fn build(
        mut self,
        tokens: impl IntoIterator<Item = Token>,
    ) -> Result<BuiltDocument, ConvertError> {
        for token in tokens {
            self.process_token(token)?;
        }
        Ok(self.finish())
    }

    /// The current insertion point.
    #[must_use]
    pub const fn cursor(&self) -> NodeId {
        self.cursor
    }

    /// The tree so far.
    #[must_use]
    pub const fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Diagnostics recorded so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Process one token.
    ///
    /// # Errors
    ///
    /// See [`TreeBuilder::build`].
    pub fn process_token(&mut self, token: Token) -> Result<(), ConvertError> {
        match token {
            Token::Declaration { data } => self.handle_declaration(data)?,
            Token::StartTag {
                name,
                self_closing,
                attributes,
            } => {
                let form = if self_closing {
                    TagForm::SelfClosing
                } else {
                    TagForm::Open
                };
                self.handle_start_tag(name, form, attributes);
            }
            Token::EndTag { name, .. } => self.handle_end_tag(&name)?,
            Token::Comment { data } => {
                let _ = self.tree.append(self.cursor, NodeType::Comment(data));
            }
            Token::Text { data } => self.handle_text(data),
            Token::ProcessingInstruction { data } => {
                log::debug!("Ignoring processing instruction: {data}");
            }
            Token::MarkedSection { data } => {
                log::debug!("Ignoring marked section: {data}");
            }
            Token::EndOfFile => {}
        }
        self.token_index += 1;
        Ok(())
    }

    /// Stop building. Elements still open are reported innermost first.
    #[must_use]
    pub fn finish(mut self) -> BuiltDocument {
        let unclosed: Vec<String> = iter::once(self.cursor)
            .chain(self.tree.ancestors(self.cursor))
            .filter_map(|id| self.tree.tag_name(id).map(str::to_string))
            .collect();
        for tag in unclosed {
            let message = format!("Tag was never closed: {tag}");
            self.record(DiagnosticKind::UnclosedTag, tag, message);
        }

        BuiltDocument {
            tree: self.tree,
            cursor: self.cursor,
            captures: self.captures,
            diagnostics: self.diagnostics,
        }
    }

    fn record(&mut self, kind: DiagnosticKind, subject: String, message: String) {
        log::debug!("{kind}: {message}");
        self.diagnostics
            .push(Diagnostic::new(kind, subject, message, self.token_index));
    }

    fn handle_declaration(&mut self, data: String) -> Result<(), ConvertError> {
        let is_doctype = data
            .get(..DOCTYPE_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(DOCTYPE_PREFIX));
        if !is_doctype {
            return Err(ConvertError::UnknownDeclaration(data));
        }

        if self.captures.doctype.is_some() {
            let message = format!("Duplicate doctype ignored: {data}");
            self.record(DiagnosticKind::DuplicateDoctype, data, message);
            return Ok(());
        }

        let text = &data[DOCTYPE_PREFIX.len()..];
        let mut fragment = Fragment::code("b.doctype(");
        fragment.push_literal(py_string(text));
        fragment.push_code(")");
        self.captures.doctype = Some(fragment);
        self.captures.doctype_text = Some(text.to_string());
        Ok(())
    }

    fn handle_text(&mut self, data: String) {
        if data.is_empty() {
            return;
        }
        let raw = self
            .tree
            .tag_name(self.cursor)
            .is_some_and(|tag| RAW_TEXT_PARENTS.contains(&tag));
        let node = if raw {
            NodeType::RawText(data)
        } else {
            NodeType::Text(data)
        };
        let _ = self.tree.append(self.cursor, node);
    }

    fn handle_start_tag(&mut self, name: String, form: TagForm, attributes: Vec<Attribute>) {
        let resolved = self.registry.resolve(&name, form);
        if resolved.unknown && self.unknown_tags.insert(name.clone()) {
            let message = format!("Tag not found in htmldoom: {name}");
            self.record(DiagnosticKind::UnknownTag, name.clone(), message);
        }

        let opens = form == TagForm::Open && resolved.kind == TagKind::Composite;
        if opens {
            log::debug!("Starting composite tag: {name}");
        } else {
            log::debug!("Handling leaf tag: {name}");
        }

        let attrs: AttributeList = attributes
            .into_iter()
            .map(|attr| (attr.name, attr.value))
            .collect();
        let element = NodeType::Element(ElementData {
            tag_name: name,
            identifier: resolved.identifier,
            identifier_argument: resolved.argument,
            attrs,
        });
        let id = self.tree.append(self.cursor, element);
        if opens {
            self.cursor = id;
        }
    }

    fn handle_end_tag(&mut self, name: &str) -> Result<(), ConvertError> {
        let Some(parent) = self.tree.parent(self.cursor) else {
            return Err(ConvertError::TagClosedBeforeStarting(name.to_string()));
        };

        log::debug!("Closing composite tag: {name}");
        let open = self.tree.tag_name(self.cursor).unwrap_or_default();
        if open != name {
            let open = open.to_string();
            let message = format!("Tag was never closed: {open} (closed by </{name}>)");
            self.record(DiagnosticKind::MismatchedClose, open, message);
        }

        if let Some(slot) = Slot::from_tag(name) {
            let fragment = self.renderer.render(&self.tree, self.cursor);
            if slot == Slot::Body {
                self.captures.body_contents =
                    Some(self.renderer.render_children(&self.tree, self.cursor));
            }
            self.captures.set(slot, fragment);
        }

        self.cursor = parent;
        Ok(())
    }
}
