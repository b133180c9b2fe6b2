//! Attribute formatting: the argument list of an element call.
//!
//! `<input required name="q" type="text">` becomes either
//! `("required", **{"name": "q", "type": "text"})` or, with
//! [`AttributeStyle::Rename`], `("required", name="q", type_="text")`.

use strum_macros::{Display, EnumString};

use crate::fragment::Fragment;
use crate::python::{is_identifier, is_reserved, is_safe_keyword, py_string};

/// How property names that are not usable keyword arguments are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AttributeStyle {
    /// Keep names as written; if any name is unsafe, pass the whole
    /// property set as a `**{...}` mapping.
    #[default]
    Expand,
    /// Turn `-` into `_` and suffix reserved names with `_`; fall back to
    /// expansion when a name is still unusable.
    Rename,
}

/// Format `attrs` as the argument list of an element call.
///
/// Valueless attributes are flags and come first as bare strings, in source
/// order. The rest are properties, also in source order.
#[must_use]
pub fn format_attributes(attrs: &[(String, Option<String>)], style: AttributeStyle) -> Fragment {
    let flags: Vec<&str> = attrs
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name.as_str())
        .collect();
    let props: Vec<(&str, &str)> = attrs
        .iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name.as_str(), v)))
        .collect();

    let mut out = Fragment::code("(");
    for (i, flag) in flags.iter().enumerate() {
        if i > 0 {
            out.push_code(", ");
        }
        out.push_literal(py_string(flag));
    }
    if !flags.is_empty() && !props.is_empty() {
        out.push_code(", ");
    }

    if !props.is_empty() {
        let keywords = match style {
            AttributeStyle::Expand => keyword_names(&props),
            AttributeStyle::Rename => renamed_keyword_names(&props),
        };
        match keywords {
            Some(names) => push_keywords(&mut out, &names, &props),
            None => push_expansion(&mut out, &props),
        }
    }
    out.push_code(")");
    out
}

/// The property names as keyword arguments, if all are safe as written.
fn keyword_names(props: &[(&str, &str)]) -> Option<Vec<String>> {
    props
        .iter()
        .map(|(name, _)| is_safe_keyword(name).then(|| (*name).to_string()))
        .collect()
}

/// The property names after renaming, if all end up as distinct identifiers.
fn renamed_keyword_names(props: &[(&str, &str)]) -> Option<Vec<String>> {
    let mut names: Vec<String> = Vec::with_capacity(props.len());
    for (name, _) in props {
        let mut renamed = name.replace('-', "_");
        if is_reserved(&renamed) {
            renamed.push('_');
        }
        if !is_identifier(&renamed) || names.contains(&renamed) {
            return None;
        }
        names.push(renamed);
    }
    Some(names)
}

fn push_keywords(out: &mut Fragment, names: &[String], props: &[(&str, &str)]) {
    for (i, (name, (_, value))) in names.iter().zip(props).enumerate() {
        if i > 0 {
            out.push_code(", ");
        }
        out.push_code(name);
        out.push_code("=");
        out.push_literal(py_string(value));
    }
}

fn push_expansion(out: &mut Fragment, props: &[(&str, &str)]) {
    out.push_code("**{");
    for (i, (name, value)) in props.iter().enumerate() {
        if i > 0 {
            out.push_code(", ");
        }
        out.push_literal(py_string(name));
        out.push_code(": ");
        out.push_literal(py_string(value));
    }
    out.push_code("}");
}
