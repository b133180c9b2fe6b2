//! Template assembly tests.

use moodlmth_codegen::{Captures, Converter, TemplateKind, assemble, substitute};

fn captures(html: &str) -> Captures {
    Converter::new().build(html).unwrap().captures
}

#[test]
fn test_substitute_placeholders_and_braces() {
    let values = [("x", "1".to_string())];
    assert_eq!(substitute("a {x} {{y}} }}", &values), "a 1 {y} }");
}

#[test]
fn test_substitute_leaves_unknown_placeholders() {
    let values = [("x", "1".to_string())];
    assert_eq!(substitute("{x}{z}", &values), "1{z}");
    assert_eq!(substitute("{ lone", &values), "{ lone");
}

#[test]
fn test_substituted_values_are_not_rescanned() {
    let values = [("x", "{x}".to_string())];
    assert_eq!(substitute("{x}", &values), "{x}");
}

#[test]
fn test_template_kind_names() {
    assert_eq!(TemplateKind::default(), TemplateKind::Flat);
    assert_eq!("layout".parse::<TemplateKind>().unwrap(), TemplateKind::Layout);
    assert_eq!(TemplateKind::Pipeline.to_string(), "pipeline");
    assert!("yaml".parse::<TemplateKind>().is_err());
}

#[test]
fn test_flat_with_nothing_captured() {
    let code = assemble(TemplateKind::Flat, &Captures::default());
    assert!(code.contains("doctype = _render(b.doctype(\"html\"))"));
    assert!(code.contains("contents = _render()"));
    assert!(code.contains("@renders(e.title())"));
    assert!(code.contains("@renders(e.head())"));
    assert!(code.contains(r#"@renders(e.html()("{head}", "{body}"))"#));
    assert!(code.contains(r#"@renders(e.body()("{contents}"))"#));
    assert!(code.contains(r#"return {"contents": contents}"#));
    assert!(code.contains("print(render({}))"));
}

#[test]
fn test_flat_contents_keep_braces() {
    let code = assemble(
        TemplateKind::Flat,
        &captures("<html><body><script>var x = {a: 1};</script></body></html>"),
    );
    assert!(code.contains(r#"contents = _render(e.script()(b"var x = {a: 1};"))"#));
}

#[test]
fn test_head_braces_escaped_exactly_once() {
    let captured = captures("<html><head><script>{}</script></head></html>");
    let first = assemble(TemplateKind::Flat, &captured);
    let second = assemble(TemplateKind::Flat, &captured);
    assert_eq!(first, second);
    assert!(first.contains(r#"@renders(e.head()(e.script()(b"{{}}")))"#));
    assert!(!first.contains("{{{{"));
}

#[test]
fn test_slot_placeholders_are_not_escaped() {
    let code = assemble(
        TemplateKind::Pipeline,
        &captures("<html><head><title>{t}</title></head><body></body></html>"),
    );
    assert!(code.contains(r#"@renders(e.title()("{{t}}"))"#));
    assert!(code.contains(r#"@renders(e.head()("{title}"))"#));
    assert!(code.contains(r#"@renders(e.html()("{head}", "{body}"))"#));
}

#[test]
fn test_pipeline_layout() {
    let code = assemble(
        TemplateKind::Pipeline,
        &captures("<!DOCTYPE html><html><body><p>x</p></body></html>"),
    );
    assert!(code.contains("doctype = b.doctype(\"html\")\n"));
    assert!(code.contains(r#"@renders(e.body()(e.p()("x")))"#));
    assert!(code.contains("def body(data):"));
    assert!(code.contains(r#"@renders("{doctype}{html}")"#));
    assert!(code.contains("return _render(document(data=data))"));
}

#[test]
fn test_layout_uses_properties() {
    let code = assemble(
        TemplateKind::Layout,
        &captures("<html><head><title>{t}</title></head><body>x</body></html>"),
    );
    assert!(code.contains("from htmldoom.layouts import BaseLayout"));
    assert!(code.contains("class Layout(BaseLayout):"));
    assert!(code.contains("return b.doctype(\"html\")"));
    assert!(code.contains(r#"return e.title()("{t}")"#));
    assert!(code.contains("return e.head()(self.title)"));
    assert!(code.contains(r#"return e.body()("x")"#));
    assert!(code.contains("return e.html()(self.head, self.body)"));
    assert!(code.contains("print(Layout())"));
}
