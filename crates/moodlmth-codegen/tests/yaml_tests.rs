//! YAML component tree and loader module tests.

use moodlmth_codegen::{
    ConvertError, Converter, DiagnosticKind, RawAsset, YamlConversion, loader_module,
};
use serde_yaml::Value;

fn convert(html: &str) -> YamlConversion {
    Converter::new().convert_yaml(html).unwrap()
}

fn components(conversion: &YamlConversion) -> Value {
    serde_yaml::from_str(&conversion.components).unwrap()
}

fn yaml(text: &str) -> Value {
    serde_yaml::from_str(text).unwrap()
}

#[test]
fn test_full_page_components() {
    let conversion = convert(concat!(
        "<!DOCTYPE html><html><head><title>t</title>",
        "<script>var a = {};</script></head>",
        "<body><p class=\"x\" hidden>Hi {name}</p><br><!-- c --><x-card/></body></html>",
    ));

    let expected = yaml(concat!(
        "- html: [[",
        "{head: [[{title: [[t]]}, {script: [['{raw0}']]}]]}, ",
        "{body: [[",
        "{p: [{class: x, hidden: true}, ['Hi {{name}}']]}, ",
        "{br: [{}]}, ",
        "{x-card: [{}]}",
        "]]}",
        "]]",
    ));
    assert_eq!(components(&conversion), expected);

    assert_eq!(conversion.raw_assets, vec![RawAsset {
        name: "raw0".to_string(),
        content: "var a = {};".to_string(),
    }]);
    assert_eq!(conversion.diagnostics.len(), 1);
    assert_eq!(conversion.diagnostics[0].kind, DiagnosticKind::UnknownTag);
}

#[test]
fn test_full_page_module() {
    let conversion = convert("<!DOCTYPE html><html><head><style>a {}</style></head></html>");
    let module = &conversion.module;
    assert!(module.starts_with("from htmldoom import doctype, render, renders, loadraw as lr\n"));
    assert!(module.contains("COMPONENTS = f\"{ASSETS}/components.yml\""));
    assert!(module.contains("@renders(lr(f\"{ASSETS}/raw0.txt\", static=True))\ndef raw0():\n    return {}\n"));
    assert!(module.contains("@renders(doctype(\"html\"), ly(COMPONENTS))"));
    assert!(module.contains("    return {\"raw0\": raw0()}\n"));
    assert!(module.ends_with("    print(render(document()))\n"));
}

#[test]
fn test_raw_assets_are_numbered_in_document_order() {
    let conversion = convert(concat!(
        "<style>p {}</style>",
        "<form><textarea>{x}</textarea></form>",
        "<script>go()</script>",
    ));
    let names: Vec<&str> = conversion
        .raw_assets
        .iter()
        .map(|asset| asset.name.as_str())
        .collect();
    assert_eq!(names, vec!["raw0", "raw1", "raw2"]);
    assert_eq!(conversion.raw_assets[1].content, "{x}");
    assert_eq!(conversion.raw_assets[2].file_name(), "raw2.txt");

    assert_eq!(
        components(&conversion),
        yaml(concat!(
            "[{style: [['{raw0}']]}, ",
            "{form: [[{textarea: [['{raw1}']]}]]}, ",
            "{script: [['{raw2}']]}]",
        ))
    );
    assert!(conversion
        .module
        .contains(r#"return {"raw0": raw0(), "raw1": raw1(), "raw2": raw2()}"#));
}

#[test]
fn test_comments_are_dropped() {
    let conversion = convert("<div><!-- gone --><p>kept</p></div>");
    assert_eq!(
        components(&conversion),
        yaml("[{div: [[{p: [[kept]]}]]}]")
    );
}

#[test]
fn test_empty_composite_keeps_its_child_list() {
    let conversion = convert("<div></div><div id=\"a\"></div><img src=\"i.png\">");
    assert_eq!(
        components(&conversion),
        yaml("[{div: [[]]}, {div: [{id: a}, []]}, {img: [{src: i.png}]}]")
    );
}

#[test]
fn test_attribute_values_escape_braces() {
    let conversion = convert("<a href=\"/{id}\">x</a>");
    assert_eq!(
        components(&conversion),
        yaml("[{a: [{href: '/{{id}}'}, [x]]}]")
    );
}

#[test]
fn test_missing_doctype_defaults_to_html() {
    let conversion = convert("<p>plain</p>");
    assert!(conversion.raw_assets.is_empty());
    assert!(conversion.module.contains("@renders(doctype(\"html\"), ly(COMPONENTS))"));
    assert!(conversion.module.contains("def document():\n    return {}\n"));
    assert!(!conversion.module.contains("lr(f"));
}

#[test]
fn test_declared_doctype_is_used() {
    let conversion = convert("<!doctype HTML PUBLIC \"x\"><p>a</p>");
    assert!(conversion.module.contains(r#"doctype('HTML PUBLIC "x"')"#));
}

#[test]
fn test_loader_module_without_assets() {
    let module = loader_module(None, &[]);
    assert!(module.contains("ASSETS = \"assets\""));
    assert!(module.contains("return {}"));
}

#[test]
fn test_fatal_errors_propagate() {
    assert!(matches!(
        Converter::new().convert_yaml("<p></p></p>"),
        Err(ConvertError::TagClosedBeforeStarting(_))
    ));
}

#[test]
fn test_yaml_conversion_serializes_to_json() {
    let conversion = convert("<script>x</script>");
    let json = serde_json::to_value(&conversion).unwrap();
    assert_eq!(json["raw_assets"][0]["name"], "raw0");
    assert_eq!(json["raw_assets"][0]["content"], "x");
    assert!(json["components"].as_str().unwrap().contains("{raw0}"));
}
