//! HTML tokenizer module.
//!
//! Follows [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! of the WHATWG HTML Living Standard, reduced to the constructs a
//! source-to-source conversion needs.

/// Character reference decoding per § 13.2.5.72.
pub mod character_reference;
/// HTML tokenizer state machine implementation.
pub mod core;
/// Helper methods for tokenizer state transitions.
pub mod helpers;
/// Named character reference lookup table per § 13.5.
pub mod named_character_references;
/// Token types produced by the tokenizer.
pub mod token;

pub use self::core::{HTMLTokenizer, TokenizerState};
pub use token::{Attribute, Token};
