//! Whitespace minification over the token stream.
//!
//! Runs between tokenization and tree construction. The rules:
//!
//! - Text made only of whitespace that contains a line break is removed;
//!   it is indentation between tags, not content.
//! - Every other run of whitespace collapses to a single space.
//! - Inside `pre`, `textarea`, `script` and `style` text is left untouched.
//!
//! Comments are kept.

use crate::tokenizer::Token;

/// Elements whose character data is whitespace-significant.
pub const PRESERVE_WHITESPACE: &[&str] = &["pre", "textarea", "script", "style"];

const fn is_html_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

/// Minify the whitespace of a token stream.
#[must_use]
pub fn minify(tokens: Vec<Token>) -> Vec<Token> {
    let mut preserve_depth = 0usize;
    let mut out = Vec::with_capacity(tokens.len());

    for token in tokens {
        match &token {
            Token::StartTag {
                name,
                self_closing: false,
                ..
            } if PRESERVE_WHITESPACE.contains(&name.as_str()) => {
                preserve_depth += 1;
            }
            Token::EndTag { name, .. } if PRESERVE_WHITESPACE.contains(&name.as_str()) => {
                preserve_depth = preserve_depth.saturating_sub(1);
            }
            Token::Text { data } if preserve_depth == 0 => {
                if let Some(collapsed) = collapse_whitespace(data) {
                    out.push(Token::new_text(collapsed));
                }
                continue;
            }
            _ => {}
        }
        out.push(token);
    }
    out
}

/// Collapse whitespace runs of `data` to single spaces. Returns `None` when
/// the text is blank and spans a line break.
#[must_use]
pub fn collapse_whitespace(data: &str) -> Option<String> {
    if data.chars().all(is_html_whitespace) && data.contains(['\n', '\r']) {
        return None;
    }
    let mut out = String::with_capacity(data.len());
    let mut in_run = false;
    for c in data.chars() {
        if is_html_whitespace(c) {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    Some(out)
}
