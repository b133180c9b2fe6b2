//! Integration tests for the HTML tokenizer.

use moodlmth_html::{Attribute, HTMLTokenizer, Token, tokenize};

/// Helper to pull the text of every Text token, in order
fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens
        .iter()
        .filter_map(|t| match t {
            Token::Text { data } => Some(data.as_str()),
            _ => None,
        })
        .collect()
}

fn attr(name: &str, value: Option<&str>) -> Attribute {
    Attribute::new(name.to_string(), value.map(str::to_string))
}

#[test]
fn test_plain_text_is_one_token() {
    let tokens = tokenize("Hello");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0], Token::Text {
        data: "Hello".to_string()
    });
    assert!(tokens[1].is_eof());
}

#[test]
fn test_empty_input() {
    let tokens = tokenize("");
    assert_eq!(tokens, vec![Token::EndOfFile]);
}

#[test]
fn test_doctype_is_a_declaration() {
    let tokens = tokenize("<!DOCTYPE html>");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::Declaration { data } => assert_eq!(data, "DOCTYPE html"),
        other => panic!("Expected Declaration token, got {other}"),
    }
}

#[test]
fn test_lowercase_doctype_is_a_declaration() {
    let tokens = tokenize("<!doctype html>");
    assert_eq!(tokens[0], Token::Declaration {
        data: "doctype html".to_string()
    });
}

#[test]
fn test_cdata_is_a_marked_section() {
    let tokens = tokenize("<![CDATA[a > b]]><p>");
    assert_eq!(tokens[0], Token::MarkedSection {
        data: "CDATA[a > b".to_string()
    });
    assert!(matches!(&tokens[1], Token::StartTag { name, .. } if name == "p"));
}

#[test]
fn test_unterminated_marked_section_is_emitted() {
    let tokens = tokenize("<![CDATA[open");
    assert_eq!(tokens, vec![
        Token::MarkedSection {
            data: "CDATA[open".to_string()
        },
        Token::EndOfFile,
    ]);
}

#[test]
fn test_other_declarations_are_bogus_comments() {
    let tokens = tokenize("<!ELEMENT root ANY>");
    assert_eq!(tokens[0], Token::Comment {
        data: "ELEMENT root ANY".to_string()
    });
}

#[test]
fn test_start_tag_attributes() {
    let tokens = tokenize(r#"<input type="text" required value=''>"#);
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::StartTag {
            name,
            self_closing,
            attributes,
        } => {
            assert_eq!(name, "input");
            assert!(!self_closing);
            assert_eq!(attributes, &vec![
                attr("type", Some("text")),
                attr("required", None),
                attr("value", Some("")),
            ]);
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_unquoted_attribute_value() {
    let tokens = tokenize("<countdown value=10>");
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes, &vec![attr("value", Some("10"))]);
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_names_are_lowercased() {
    let tokens = tokenize(r#"<DIV CLASS="A"></Div>"#);
    match &tokens[0] {
        Token::StartTag {
            name, attributes, ..
        } => {
            assert_eq!(name, "div");
            assert_eq!(attributes, &vec![attr("class", Some("A"))]);
        }
        _ => panic!("Expected StartTag token"),
    }
    match &tokens[1] {
        Token::EndTag { name, .. } => assert_eq!(name, "div"),
        _ => panic!("Expected EndTag token"),
    }
}

#[test]
fn test_self_closing_tag() {
    let tokens = tokenize("<br/>");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::StartTag {
            name, self_closing, ..
        } => {
            assert_eq!(name, "br");
            assert!(self_closing);
        }
        _ => panic!("Expected self-closing StartTag token"),
    }
}

#[test]
fn test_duplicate_attribute_keeps_first() {
    let mut tokenizer = HTMLTokenizer::new(r#"<p id="a" id="b">"#.to_string());
    tokenizer.run();
    assert!(tokenizer.parse_error_count() > 0);
    let tokens = tokenizer.into_tokens();
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes, &vec![attr("id", Some("a"))]);
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_comment() {
    let tokens = tokenize("<!-- A comment -->");
    assert_eq!(tokens[0], Token::Comment {
        data: " A comment ".to_string()
    });
}

#[test]
fn test_comment_with_inner_dashes() {
    let tokens = tokenize("<!--a-b--c-->");
    assert_eq!(tokens[0], Token::Comment {
        data: "a-b--c".to_string()
    });
}

#[test]
fn test_unterminated_comment_is_emitted() {
    let tokens = tokenize("<!-- open");
    assert_eq!(tokens, vec![
        Token::Comment {
            data: " open".to_string()
        },
        Token::EndOfFile,
    ]);
}

#[test]
fn test_processing_instruction() {
    let tokens = tokenize(r#"<?xml version="1.0"?>"#);
    assert_eq!(tokens[0], Token::ProcessingInstruction {
        data: r#"xml version="1.0"?"#.to_string()
    });
}

#[test]
fn test_text_between_tags_is_merged() {
    let tokens = tokenize("<p>a &amp; b</p>");
    assert_eq!(texts(&tokens), vec!["a & b"]);
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_numeric_character_references() {
    let tokens = tokenize("&#65;&#x42;&#X43");
    assert_eq!(texts(&tokens), vec!["ABC"]);
}

#[test]
fn test_null_numeric_reference_is_replaced() {
    let tokens = tokenize("&#0;");
    assert_eq!(texts(&tokens), vec!["\u{FFFD}"]);
}

#[test]
fn test_unknown_named_reference_is_kept() {
    let tokens = tokenize("&bogus; x");
    assert_eq!(texts(&tokens), vec!["&bogus; x"]);
}

#[test]
fn test_bare_ampersand_is_kept() {
    let tokens = tokenize("fish & chips");
    assert_eq!(texts(&tokens), vec!["fish & chips"]);
}

#[test]
fn test_reference_in_attribute_value() {
    let tokens = tokenize(r#"<a title="&lt;b&gt;">"#);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes, &vec![attr("title", Some("<b>"))]);
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_legacy_reference_in_attribute_before_equals() {
    let tokens = tokenize(r#"<a href="?a=1&copy=2">"#);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes, &vec![attr("href", Some("?a=1&copy=2"))]);
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_lone_less_than_is_text() {
    let tokens = tokenize("a < b");
    assert_eq!(texts(&tokens), vec!["a < b"]);
}

#[test]
fn test_title_is_rcdata() {
    let tokens = tokenize("<title>a <b> &amp;</title>");
    assert_eq!(tokens.len(), 4);
    assert_eq!(texts(&tokens), vec!["a <b> &"]);
    match &tokens[2] {
        Token::EndTag { name, .. } => assert_eq!(name, "title"),
        _ => panic!("Expected EndTag token"),
    }
}

#[test]
fn test_script_is_rawtext() {
    let tokens = tokenize("<script>if (a < b && c) {}</script>");
    assert_eq!(texts(&tokens), vec!["if (a < b && c) {}"]);
}

#[test]
fn test_rawtext_ignores_other_end_tags() {
    let tokens = tokenize("<style></div>&amp;</style><p>");
    assert_eq!(texts(&tokens), vec!["</div>&amp;"]);
    match &tokens[3] {
        Token::StartTag { name, .. } => assert_eq!(name, "p"),
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_self_closing_title_is_not_rcdata() {
    let tokens = tokenize("<title/><b>");
    match &tokens[1] {
        Token::StartTag { name, .. } => assert_eq!(name, "b"),
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_newlines_are_normalized() {
    let tokens = tokenize("a\r\nb\rc");
    assert_eq!(texts(&tokens), vec!["a\nb\nc"]);
}

#[test]
fn test_unfinished_tag_is_dropped() {
    let tokens = tokenize("text<div class=");
    assert_eq!(tokens, vec![
        Token::Text {
            data: "text".to_string()
        },
        Token::EndOfFile,
    ]);
}

#[test]
fn test_display() {
    let tokens = tokenize(r#"<input value="x" required/>"#);
    assert_eq!(tokens[0].to_string(), r#"<input value="x" required />"#);
}
