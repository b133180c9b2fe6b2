//! Attribute formatter tests.

use moodlmth_codegen::{AttributeStyle, format_attributes};

fn attrs(pairs: &[(&str, Option<&str>)]) -> Vec<(String, Option<String>)> {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_string(), value.map(str::to_string)))
        .collect()
}

fn expand(pairs: &[(&str, Option<&str>)]) -> String {
    format_attributes(&attrs(pairs), AttributeStyle::Expand).to_string()
}

fn rename(pairs: &[(&str, Option<&str>)]) -> String {
    format_attributes(&attrs(pairs), AttributeStyle::Rename).to_string()
}

#[test]
fn test_no_attributes() {
    assert_eq!(expand(&[]), "()");
}

#[test]
fn test_safe_names_are_keywords_in_source_order() {
    assert_eq!(
        expand(&[("name", Some("q")), ("method", Some("POST")), ("action", Some("/"))]),
        r#"(name="q", method="POST", action="/")"#
    );
}

#[test]
fn test_flags_come_first() {
    assert_eq!(
        expand(&[("name", Some("test")), ("required", None), ("value", Some("x"))]),
        r#"("required", name="test", value="x")"#
    );
}

#[test]
fn test_flags_only() {
    assert_eq!(
        expand(&[("required", None), ("disabled", None)]),
        r#"("required", "disabled")"#
    );
}

#[test]
fn test_builtin_name_forces_expansion() {
    assert_eq!(
        expand(&[("required", None), ("type", Some("text"))]),
        r#"("required", **{"type": "text"})"#
    );
}

#[test]
fn test_hyphenated_name_forces_expansion() {
    assert_eq!(expand(&[("data-x", Some("1"))]), r#"(**{"data-x": "1"})"#);
}

#[test]
fn test_expansion_covers_every_property() {
    assert_eq!(
        expand(&[("class", Some("a")), ("title", Some("b"))]),
        r#"(**{"class": "a", "title": "b"})"#
    );
}

#[test]
fn test_rename_suffixes_reserved_names() {
    assert_eq!(
        rename(&[("required", None), ("type", Some("text"))]),
        r#"("required", type_="text")"#
    );
    assert_eq!(rename(&[("class", Some("nav"))]), r#"(class_="nav")"#);
    assert_eq!(rename(&[("id", Some("main"))]), r#"(id_="main")"#);
}

#[test]
fn test_rename_replaces_hyphens() {
    assert_eq!(
        rename(&[("data-x", Some("1")), ("aria-label", Some("Close"))]),
        r#"(data_x="1", aria_label="Close")"#
    );
}

#[test]
fn test_rename_collision_falls_back_to_expansion() {
    assert_eq!(
        rename(&[("data-x", Some("1")), ("data_x", Some("2"))]),
        r#"(**{"data-x": "1", "data_x": "2"})"#
    );
}

#[test]
fn test_rename_unusable_name_falls_back_to_expansion() {
    assert_eq!(
        rename(&[("@click", Some("go()"))]),
        r#"(**{"@click": "go()"})"#
    );
}

#[test]
fn test_values_are_quoted_literals() {
    assert_eq!(
        expand(&[("alt", Some("say \"hi\""))]),
        r#"(alt='say "hi"')"#
    );
    assert_eq!(expand(&[("alt", Some(""))]), r#"(alt="")"#);
}

#[test]
fn test_braces_in_values_escape_only_when_asked() {
    let fragment = format_attributes(&attrs(&[("alt", Some("{x}"))]), AttributeStyle::Expand);
    assert_eq!(fragment.to_string(), r#"(alt="{x}")"#);
    assert_eq!(
        fragment.to_code(true, moodlmth_codegen::SlotStyle::Placeholder),
        r#"(alt="{{x}}")"#
    );
}

#[test]
fn test_style_parses_from_lowercase() {
    assert_eq!("rename".parse::<AttributeStyle>().unwrap(), AttributeStyle::Rename);
    assert_eq!(AttributeStyle::default(), AttributeStyle::Expand);
    assert_eq!(AttributeStyle::Expand.to_string(), "expand");
}
