//! Integration tests for whitespace minification.

use moodlmth_html::minify::collapse_whitespace;
use moodlmth_html::{Token, minify, tokenize};

/// Helper to tokenize, minify, and collect the surviving text
fn minified_texts(input: &str) -> Vec<String> {
    minify(tokenize(input))
        .into_iter()
        .filter_map(|t| match t {
            Token::Text { data } => Some(data),
            _ => None,
        })
        .collect()
}

#[test]
fn test_indentation_is_removed() {
    let texts = minified_texts("<div>\n  <p>x</p>\n</div>\n");
    assert_eq!(texts, vec!["x"]);
}

#[test]
fn test_runs_collapse_to_one_space() {
    let texts = minified_texts("<p>a  \n\t b</p>");
    assert_eq!(texts, vec!["a b"]);
}

#[test]
fn test_single_line_space_survives() {
    let texts = minified_texts("<b>x</b> <i>y</i>");
    assert_eq!(texts, vec!["x", " ", "y"]);
}

#[test]
fn test_leading_and_trailing_spaces_collapse() {
    let texts = minified_texts("<footer>  space test  </footer>");
    assert_eq!(texts, vec![" space test "]);
}

#[test]
fn test_pre_is_preserved() {
    let texts = minified_texts("<pre>  a\n   b</pre>\n<p> c </p>");
    assert_eq!(texts, vec!["  a\n   b", " c "]);
}

#[test]
fn test_script_and_textarea_are_preserved() {
    let texts = minified_texts("<script>\n  go();\n</script><textarea>\n\n</textarea>");
    assert_eq!(texts, vec!["\n  go();\n", "\n\n"]);
}

#[test]
fn test_comments_are_kept() {
    let tokens = minify(tokenize("<!-- keep -->\n<p></p>"));
    assert_eq!(tokens[0], Token::Comment {
        data: " keep ".to_string()
    });
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_collapse_whitespace() {
    assert_eq!(collapse_whitespace("\n\t"), None);
    assert_eq!(collapse_whitespace("   ").as_deref(), Some(" "));
    assert_eq!(collapse_whitespace("a\n\nb").as_deref(), Some("a b"));
    assert_eq!(collapse_whitespace("").as_deref(), Some(""));
}
