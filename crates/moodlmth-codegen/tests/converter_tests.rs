//! End-to-end conversion tests.

use moodlmth_codegen::{
    AttributeStyle, ConvertError, Converter, ConverterOptions, DiagnosticKind, NormalizeError,
    NormalizeMode, StyleNormalizer, TemplateKind,
};

const RAW_HTML: &str = r#"
<!DOCTYPE html>
<html>
    <head>
        <meta charset="utf-8" />
        <title>test</title>
        <script>{}</script>
    </head>
    <body>
        <!-- A comment -->
        <div id="main">
            <form action="/" method="POST">
                <textarea required></textarea>
                <input name="test" required type="text" />
                <button type="submit">submit</button>
            </form>
        </div>
        <clipboard-copy value="x">Copy Me</clipboard-copy>
        <countdown value="10" />
        <footer> space test </footer>
        <script>var x = {a: 1};</script>
    </body>
    <script>{}</script>
</html>
"#;

const BODY_CONTENTS: &str = concat!(
    r#"b.comment(" A comment "), "#,
    r#"e.div(id_="main")(e.form(action="/", method="POST")("#,
    r#"e.textarea("required"), "#,
    r#"e.input_("required", name="test", type_="text"), "#,
    r#"e.button(type_="submit")("submit"))), "#,
    r#"b.composite_tag("clipboard-copy")(value="x")("Copy Me"), "#,
    r#"b.leaf_tag("countdown")(value="10"), "#,
    r#"e.footer()(" space test "), "#,
    r#"e.script()(b"var x = {a: 1};")"#,
);

fn converter(template: TemplateKind) -> Converter {
    Converter::new().with_options(ConverterOptions {
        template,
        attribute_style: AttributeStyle::Rename,
        ..ConverterOptions::default()
    })
}

#[test]
fn test_default_options() {
    let options = ConverterOptions::default();
    assert_eq!(options.template, TemplateKind::Flat);
    assert_eq!(options.attribute_style, AttributeStyle::Expand);
    assert_eq!(options.mode, NormalizeMode::Strict);
    assert!(options.minify);
}

#[test]
fn test_full_page_flat() {
    let conversion = converter(TemplateKind::Flat).convert(RAW_HTML).unwrap();
    let code = &conversion.code;

    assert!(code.starts_with("from htmldoom import base as b\n"));
    assert!(code.ends_with("    print(render({}))\n"));
    assert!(code.contains("doctype = _render(b.doctype(\"html\"))"));
    assert!(code.contains(&format!("contents = _render({BODY_CONTENTS})")));
    assert!(code.contains(r#"@renders(e.title()("test"))"#));
    assert!(code.contains(
        r#"@renders(e.head()(e.meta(charset="utf-8"), "{title}", e.script()(b"{{}}")))"#
    ));
    assert!(code.contains(r#"@renders(e.html()("{head}", "{body}", e.script()(b"{{}}")))"#));

    let unknown: Vec<&str> = conversion
        .diagnostics
        .iter()
        .filter(|d| d.kind == DiagnosticKind::UnknownTag)
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(unknown.len(), 2);
    assert!(unknown[0].contains("clipboard-copy"));
    assert!(unknown[1].contains("countdown"));
    assert_eq!(conversion.diagnostics.len(), 2);
}

#[test]
fn test_full_page_pipeline() {
    let code = converter(TemplateKind::Pipeline)
        .convert(RAW_HTML)
        .unwrap()
        .code;
    let escaped_body = BODY_CONTENTS.replace("{a: 1}", "{{a: 1}}");
    assert!(code.contains("doctype = b.doctype(\"html\")"));
    assert!(code.contains(&format!("@renders(e.body()({escaped_body}))")));
    assert!(code.contains(r#"return {"title": title(data)}"#));
}

#[test]
fn test_full_page_layout() {
    let code = converter(TemplateKind::Layout).convert(RAW_HTML).unwrap().code;
    assert!(code.contains(&format!("return e.body()({BODY_CONTENTS})")));
    assert!(code.contains(
        r#"return e.head()(e.meta(charset="utf-8"), self.title, e.script()(b"{}"))"#
    ));
    assert!(code.contains(r#"return e.html()(self.head, self.body, e.script()(b"{}"))"#));
}

#[test]
fn test_converter_is_reusable() {
    let converter = Converter::new();
    let first = converter.convert("<p>one</p><x-a></x-a>").unwrap();
    let second = converter.convert("<p>one</p><x-a></x-a>").unwrap();
    assert_eq!(first, second);
    assert_eq!(second.diagnostics.len(), 1);
}

#[test]
fn test_without_minify_whitespace_text_is_kept() {
    let converter = Converter::new().with_options(ConverterOptions {
        minify: false,
        ..ConverterOptions::default()
    });
    let conversion = converter.convert("<body>\n  <p>x</p>\n</body>").unwrap();
    assert!(conversion
        .code
        .contains(r#"contents = _render("\n  ", e.p()("x"), "\n")"#));
}

#[test]
fn test_fatal_errors_propagate() {
    let converter = Converter::new();
    assert!(matches!(
        converter.convert("</div>"),
        Err(ConvertError::TagClosedBeforeStarting(_))
    ));
    assert!(matches!(
        converter.convert("<!DOCTYPE>"),
        Err(ConvertError::UnknownDeclaration(_))
    ));
}

#[test]
fn test_unknown_tag_name_braces_are_escaped() {
    let code = Converter::new()
        .convert("<html><head><x{y></x{y></head><body></body></html>")
        .unwrap()
        .code;
    assert!(code.contains(r#"@renders(e.head()(b.composite_tag("x{{y")()))"#));
}

#[test]
fn test_mismatched_close_converts() {
    let conversion = Converter::new().convert("<html><p></html>").unwrap();
    assert!(conversion
        .diagnostics
        .iter()
        .any(|d| d.kind == DiagnosticKind::MismatchedClose));
    assert!(conversion.code.contains("@renders(e.p())"));
}

struct Rejecting;

impl StyleNormalizer for Rejecting {
    fn normalize(&self, _text: &str, _mode: NormalizeMode) -> Result<String, NormalizeError> {
        Err(NormalizeError::Syntax {
            line: Some(3),
            message: "rejected".to_string(),
        })
    }
}

#[test]
fn test_normalizer_errors_pass_through() {
    let err = Converter::new()
        .with_normalizer(Rejecting)
        .convert("<p>x</p>")
        .unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Normalize(NormalizeError::Syntax { line: Some(3), .. })
    ));
    assert_eq!(err.to_string(), "rejected");
}

#[test]
fn test_diagnostics_serialize_to_json() {
    let conversion = Converter::new()
        .convert("<body><div>a</br>b</body>")
        .unwrap();
    let json = serde_json::to_value(&conversion.diagnostics).unwrap();
    assert_eq!(json[0]["kind"], "mismatched_close");
    assert_eq!(json[0]["subject"], "div");
    assert_eq!(json[0]["token_index"], 3);
    assert!(json[0]["message"].as_str().unwrap().contains("</br>"));
    assert!(conversion
        .code
        .contains(r#"contents = _render(e.div()("a"), "b")"#));
}
