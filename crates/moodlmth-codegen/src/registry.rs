//! Tag registry: lowercase tag name to htmldoom identifier and kind.

use std::collections::HashMap;

use strum_macros::Display;

use crate::python::py_string;

/// Whether an element can hold children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TagKind {
    /// Never has children; rendered without a children call.
    Leaf,
    /// May have children; rendered as a nested call.
    Composite,
}

/// How a tag was written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagForm {
    /// `<name ...>`
    Open,
    /// `<name ... />`
    SelfClosing,
}

/// One row of the element table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagDef {
    /// Lowercase HTML tag name.
    pub name: &'static str,
    /// Python expression naming the htmldoom element.
    pub identifier: &'static str,
    /// Declared kind.
    pub kind: TagKind,
}

const fn leaf(name: &'static str, identifier: &'static str) -> TagDef {
    TagDef {
        name,
        identifier,
        kind: TagKind::Leaf,
    }
}

const fn composite(name: &'static str, identifier: &'static str) -> TagDef {
    TagDef {
        name,
        identifier,
        kind: TagKind::Composite,
    }
}

/// Tag names treated as leaf whatever the table says, because a tokenizer
/// cannot tell that `<br>` will never be closed.
pub const VOID_TAGS: &[&str] = &[
    "area",
    "base",
    "br",
    "col",
    "embed",
    "foreignobject",
    "hr",
    "img",
    "input",
    "keygen",
    "link",
    "meta",
    "meter",
    "param",
    "source",
    "track",
    "wbr",
];

/// The htmldoom `elements` module. Names that collide with a Python keyword
/// or builtin carry a trailing underscore.
pub const ELEMENTS: &[TagDef] = &[
    composite("a", "e.a"),
    composite("abbr", "e.abbr"),
    composite("address", "e.address"),
    leaf("area", "e.area"),
    composite("article", "e.article"),
    composite("aside", "e.aside"),
    composite("audio", "e.audio"),
    composite("b", "e.b"),
    leaf("base", "e.base"),
    composite("bdi", "e.bdi"),
    composite("bdo", "e.bdo"),
    composite("blockquote", "e.blockquote"),
    composite("body", "e.body"),
    leaf("br", "e.br"),
    composite("button", "e.button"),
    composite("canvas", "e.canvas"),
    composite("caption", "e.caption"),
    composite("cite", "e.cite"),
    composite("code", "e.code"),
    leaf("col", "e.col"),
    composite("colgroup", "e.colgroup"),
    composite("data", "e.data"),
    composite("datalist", "e.datalist"),
    composite("dd", "e.dd"),
    composite("del", "e.del_"),
    composite("details", "e.details"),
    composite("dfn", "e.dfn"),
    composite("dialog", "e.dialog"),
    composite("div", "e.div"),
    composite("dl", "e.dl"),
    composite("dt", "e.dt"),
    composite("em", "e.em"),
    leaf("embed", "e.embed"),
    composite("fieldset", "e.fieldset"),
    composite("figcaption", "e.figcaption"),
    composite("figure", "e.figure"),
    composite("footer", "e.footer"),
    composite("form", "e.form"),
    composite("h1", "e.h1"),
    composite("h2", "e.h2"),
    composite("h3", "e.h3"),
    composite("h4", "e.h4"),
    composite("h5", "e.h5"),
    composite("h6", "e.h6"),
    composite("head", "e.head"),
    composite("header", "e.header"),
    composite("hgroup", "e.hgroup"),
    leaf("hr", "e.hr"),
    composite("html", "e.html"),
    composite("i", "e.i"),
    composite("iframe", "e.iframe"),
    leaf("img", "e.img"),
    leaf("input", "e.input_"),
    composite("ins", "e.ins"),
    composite("kbd", "e.kbd"),
    leaf("keygen", "e.keygen"),
    composite("label", "e.label"),
    composite("legend", "e.legend"),
    composite("li", "e.li"),
    leaf("link", "e.link"),
    composite("main", "e.main"),
    composite("map", "e.map_"),
    composite("mark", "e.mark"),
    composite("menu", "e.menu"),
    leaf("meta", "e.meta"),
    composite("meter", "e.meter"),
    composite("nav", "e.nav"),
    composite("noscript", "e.noscript"),
    composite("object", "e.object_"),
    composite("ol", "e.ol"),
    composite("optgroup", "e.optgroup"),
    composite("option", "e.option"),
    composite("output", "e.output"),
    composite("p", "e.p"),
    leaf("param", "e.param"),
    composite("picture", "e.picture"),
    composite("pre", "e.pre"),
    composite("progress", "e.progress"),
    composite("q", "e.q"),
    composite("rp", "e.rp"),
    composite("rt", "e.rt"),
    composite("ruby", "e.ruby"),
    composite("s", "e.s"),
    composite("samp", "e.samp"),
    composite("script", "e.script"),
    composite("section", "e.section"),
    composite("select", "e.select"),
    composite("slot", "e.slot"),
    composite("small", "e.small"),
    leaf("source", "e.source"),
    composite("span", "e.span"),
    composite("strong", "e.strong"),
    composite("style", "e.style"),
    composite("sub", "e.sub"),
    composite("summary", "e.summary"),
    composite("sup", "e.sup"),
    composite("svg", "e.svg"),
    composite("table", "e.table"),
    composite("tbody", "e.tbody"),
    composite("td", "e.td"),
    composite("template", "e.template"),
    composite("textarea", "e.textarea"),
    composite("tfoot", "e.tfoot"),
    composite("th", "e.th"),
    composite("thead", "e.thead"),
    composite("time", "e.time"),
    composite("title", "e.title"),
    composite("tr", "e.tr"),
    leaf("track", "e.track"),
    composite("u", "e.u"),
    composite("ul", "e.ul"),
    composite("var", "e.var"),
    composite("video", "e.video"),
    leaf("wbr", "e.wbr"),
];

/// Result of [`TagRegistry::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTag {
    /// Python expression for the element builder, or the generic
    /// constructor for an unknown tag.
    pub identifier: String,
    /// Quoted tag name passed to the generic constructor. Kept apart from
    /// `identifier` because it is page content.
    pub argument: Option<String>,
    /// Effective kind, after the void-tag override.
    pub kind: TagKind,
    /// True when the identifier was synthesized for an unknown tag.
    pub unknown: bool,
}

/// Read-only lookup over [`ELEMENTS`], built once per converter.
#[derive(Debug, Clone)]
pub struct TagRegistry {
    by_name: HashMap<&'static str, &'static TagDef>,
}

impl TagRegistry {
    /// Index the element table.
    #[must_use]
    pub fn new() -> Self {
        let by_name = ELEMENTS.iter().map(|def| (def.name, def)).collect();
        Self { by_name }
    }

    /// Look up a table row.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static TagDef> {
        self.by_name.get(name).copied()
    }

    /// Number of known elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Resolve a lowercase tag name written in `form`.
    ///
    /// Unknown names get `b.leaf_tag("name")` when self-closing or void and
    /// `b.composite_tag("name")` otherwise, with `unknown` set.
    #[must_use]
    pub fn resolve(&self, name: &str, form: TagForm) -> ResolvedTag {
        let void = VOID_TAGS.contains(&name);
        if let Some(def) = self.get(name) {
            return ResolvedTag {
                identifier: def.identifier.to_string(),
                argument: None,
                kind: if void { TagKind::Leaf } else { def.kind },
                unknown: false,
            };
        }

        let kind = if void || form == TagForm::SelfClosing {
            TagKind::Leaf
        } else {
            TagKind::Composite
        };
        let constructor = match kind {
            TagKind::Leaf => "b.leaf_tag",
            TagKind::Composite => "b.composite_tag",
        };
        ResolvedTag {
            identifier: constructor.to_string(),
            argument: Some(py_string(name)),
            kind,
            unknown: true,
        }
    }
}

impl ResolvedTag {
    /// The full builder expression, e.g. `b.leaf_tag("countdown")`.
    #[must_use]
    pub fn expression(&self) -> String {
        match &self.argument {
            Some(argument) => format!("{}({argument})", self.identifier),
            None => self.identifier.clone(),
        }
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::new()
    }
}
