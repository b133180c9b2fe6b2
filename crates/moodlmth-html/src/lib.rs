//! HTML tokenization for moodlmth.
//!
//! The tokenizer turns markup into a flat [`Token`] stream; [`minify`]
//! optionally strips insignificant whitespace from it before tree
//! construction.

/// Whitespace minification over tokens.
pub mod minify;
/// HTML tokenizer.
pub mod tokenizer;

pub use minify::minify;
pub use tokenizer::{Attribute, HTMLTokenizer, Token, TokenizerState};

/// Tokenize `input` in one call.
///
/// The returned stream always ends with [`Token::EndOfFile`].
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokenizer = HTMLTokenizer::new(input.to_string());
    tokenizer.run();
    tokenizer.into_tokens()
}
