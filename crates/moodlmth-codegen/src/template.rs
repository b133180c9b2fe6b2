//! Template assembly: captured sections into a Python module.
//!
//! Template texts use `{name}` placeholders and `{{`/`}}` for braces that
//! belong to the generated code. Substitution happens once, here.

use strum_macros::{Display, EnumString};

use crate::builder::Captures;
use crate::fragment::{Fragment, Slot, SlotStyle};

/// The shape of the generated module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TemplateKind {
    /// Module-level `doctype`/`contents` values and `render_*` functions.
    #[default]
    Flat,
    /// A `Layout(BaseLayout)` class with one property per section.
    Layout,
    /// One `@renders` function per section, chained into `render`.
    Pipeline,
}

impl TemplateKind {
    /// How slot references are written for this family.
    #[must_use]
    pub const fn slot_style(self) -> SlotStyle {
        match self {
            Self::Flat | Self::Pipeline => SlotStyle::Placeholder,
            Self::Layout => SlotStyle::Property,
        }
    }

    /// The template text.
    #[must_use]
    pub const fn source(self) -> &'static str {
        match self {
            Self::Flat => FLAT_TEMPLATE,
            Self::Layout => LAYOUT_TEMPLATE,
            Self::Pipeline => PIPELINE_TEMPLATE,
        }
    }
}

const FLAT_TEMPLATE: &str = r#"from htmldoom import base as b
from htmldoom import elements as e
from htmldoom import render as _render
from htmldoom import renders

doctype = _render({doctype})

contents = _render({contents})


@renders({title})
def render_title(data):
    return {{}}


@renders({head})
def render_head(data, title_renderer=render_title):
    return {{"title": title_renderer(data=data)}}


@renders(e.body()("{{contents}}"))
def render_body(data) -> None:
    return {{"contents": contents}}


@renders({html})
def render_html(
    data,
    title_renderer=render_title,
    head_renderer=render_head,
    body_renderer=render_body,
):
    return {{
        "head": head_renderer(data=data, title_renderer=render_title),
        "body": body_renderer(data=data),
    }}


@renders("{{doctype}}{{html}}")
def render_document(
    data,
    title_renderer=render_title,
    head_renderer=render_head,
    body_renderer=render_body,
    html_renderer=render_html,
):
    return {{
        "doctype": doctype,
        "html": html_renderer(
            data=data,
            title_renderer=title_renderer,
            head_renderer=head_renderer,
            body_renderer=body_renderer,
        ),
    }}


def render(data):
    return render_document(data=data)


if __name__ == "__main__":
    print(render({{}}))
"#;

const LAYOUT_TEMPLATE: &str = r#"from htmldoom import base as b
from htmldoom import elements as e
from htmldoom.layouts import BaseLayout


class Layout(BaseLayout):
    """Layout class."""

    @property
    def doctype(self):
        """Document type."""
        return {doctype}

    @property
    def title(self):
        """Document title."""
        return {title}

    @property
    def html(self):
        """Document HTML."""
        return {html}

    @property
    def head(self):
        """Document head."""
        return {head}

    @property
    def body(self):
        """Document body."""
        return {body}


if __name__ == "__main__":
    print(Layout())
"#;

const PIPELINE_TEMPLATE: &str = r#"from htmldoom import base as b
from htmldoom import elements as e
from htmldoom import render as _render
from htmldoom import renders

doctype = {doctype}


@renders({title})
def title(data):
    return {{}}


@renders({head})
def head(data):
    return {{"title": title(data)}}


@renders({body})
def body(data):
    return {{}}


@renders({html})
def html(data):
    return {{"head": head(data=data), "body": body(data=data)}}


@renders("{{doctype}}{{html}}")
def document(data):
    return {{"doctype": doctype, "html": html(data=data)}}


def render(data):
    return _render(document(data=data))


if __name__ == "__main__":
    print(render({{}}))
"#;

/// Fill `template`'s `{name}` placeholders from `values`.
///
/// `{{` and `}}` produce single braces. A placeholder with no value, or a
/// lone brace, is copied through unchanged.
#[must_use]
pub fn substitute(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }

        if let Some((value, consumed)) = placeholder(tail, values) {
            out.push_str(value);
            rest = &tail[consumed..];
            continue;
        }

        out.push_str(&tail[..1]);
        rest = &tail[1..];
    }
    out.push_str(rest);
    out
}

/// The value for a `{name}` at the start of `text` and its length.
fn placeholder<'v>(text: &str, values: &'v [(&str, String)]) -> Option<(&'v str, usize)> {
    let inner = text.strip_prefix('{')?;
    let end = inner.find('}')?;
    let name = &inner[..end];
    values
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| (value.as_str(), end + 2))
}

/// A section's capture, or the empty element when it never closed.
fn section(captures: &Captures, slot: Slot) -> Fragment {
    if let Some(fragment) = captures.get(slot) {
        return fragment.clone();
    }
    match slot {
        Slot::Title => Fragment::code("e.title()"),
        Slot::Head => Fragment::code("e.head()"),
        Slot::Body => Fragment::code("e.body()"),
        Slot::Html => {
            let mut html = Fragment::code("e.html()(");
            html.push_slot(Slot::Head);
            html.push_code(", ");
            html.push_slot(Slot::Body);
            html.push_code(")");
            html
        }
    }
}

fn doctype(captures: &Captures) -> Fragment {
    captures.doctype.clone().unwrap_or_else(|| {
        let mut fragment = Fragment::code("b.doctype(");
        fragment.push_literal("\"html\"".to_string());
        fragment.push_code(")");
        fragment
    })
}

/// Assemble the generated module for `kind` from `captures`.
///
/// Sections that end up inside `@renders(...)` have the braces in their
/// literals doubled; everything else is written as rendered.
#[must_use]
pub fn assemble(kind: TemplateKind, captures: &Captures) -> String {
    let style = kind.slot_style();
    let renders_arg = |slot| section(captures, slot).to_code(true, style);
    let plain = |slot| section(captures, slot).to_code(false, style);
    let doctype = doctype(captures).to_code(false, style);

    let values: Vec<(&str, String)> = match kind {
        TemplateKind::Flat => {
            let contents = captures
                .body_contents
                .as_ref()
                .map(|fragment| fragment.to_code(false, style))
                .unwrap_or_default();
            vec![
                ("doctype", doctype),
                ("contents", contents),
                ("title", renders_arg(Slot::Title)),
                ("head", renders_arg(Slot::Head)),
                ("html", renders_arg(Slot::Html)),
            ]
        }
        TemplateKind::Pipeline => vec![
            ("doctype", doctype),
            ("title", renders_arg(Slot::Title)),
            ("head", renders_arg(Slot::Head)),
            ("body", renders_arg(Slot::Body)),
            ("html", renders_arg(Slot::Html)),
        ],
        TemplateKind::Layout => vec![
            ("doctype", doctype),
            ("title", plain(Slot::Title)),
            ("head", plain(Slot::Head)),
            ("body", plain(Slot::Body)),
            ("html", plain(Slot::Html)),
        ],
    };

    substitute(kind.source(), &values)
}
