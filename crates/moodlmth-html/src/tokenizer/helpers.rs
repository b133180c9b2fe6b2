//! Helper functions for the HTML tokenizer.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! This module contains utility functions used throughout the tokenizer:
//! state transitions, input lookahead, token emission, and the end-of-file
//! recovery shared by the tag and comment states.

use super::core::{HTMLTokenizer, TokenizerState};
use super::token::Token;

/// Elements whose content is tokenized in the RCDATA state.
const RCDATA_ELEMENTS: &[&str] = &["title", "textarea"];

/// Elements whose content is tokenized in the RAWTEXT state.
const RAWTEXT_ELEMENTS: &[&str] = &["script", "style"];

// =============================================================================
// State Transition Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Switch to the X state"
    ///
    /// The next character will be consumed on the next iteration of the main loop.
    pub(super) const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// "Reconsume in the X state"
    ///
    /// The same character will be processed again in the new state.
    pub(super) const fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.reconsume = true;
        self.state = new_state;
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Consume the next input character"
    ///
    /// Returns None if we've reached the end of input.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input[self.current_pos..].chars().next()?;
        self.current_pos += c.len_utf8();
        Some(c)
    }

    /// Peek at a codepoint at the given offset from the current position without
    /// consuming it.
    #[must_use]
    pub fn peek_codepoint(&self, offset: usize) -> Option<char> {
        self.input[self.current_pos..].chars().nth(offset)
    }

    /// "If the next few characters are..."
    #[must_use]
    pub fn next_few_characters_are(&self, target: &str) -> bool {
        self.input[self.current_pos..].starts_with(target)
    }

    /// "If the next few characters are an ASCII case-insensitive match for..."
    #[must_use]
    pub fn next_few_characters_are_ignoring_case(&self, target: &str) -> bool {
        self.input[self.current_pos..]
            .get(..target.len())
            .is_some_and(|next| next.eq_ignore_ascii_case(target))
    }

    /// Consume the given string from the input.
    /// Caller must have already verified the characters are present.
    pub const fn consume_string(&mut self, target: &str) {
        self.current_pos += target.len();
    }

    /// Advance past a character obtained from [`Self::peek_codepoint`].
    pub(super) const fn skip(&mut self, c: char) {
        self.current_pos += c.len_utf8();
    }

    /// [ASCII whitespace](https://infra.spec.whatwg.org/#ascii-whitespace)
    /// minus CR, which never survives newline normalization.
    pub(super) const fn is_whitespace_char(input_char: char) -> bool {
        matches!(input_char, ' ' | '\t' | '\n' | '\x0C')
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Emit the current token"
    ///
    /// Pending character data is flushed first so document order holds. A
    /// start tag for a raw text element switches the tokenizer into RCDATA or
    /// RAWTEXT, since tree construction runs after tokenization here.
    pub fn emit_token(&mut self) {
        let Some(mut token) = self.current_token.take() else {
            return;
        };
        self.flush_text();

        if token.remove_duplicate_attributes() > 0 {
            // duplicate-attribute: the first occurrence wins
            self.log_parse_error();
        }

        if let Token::StartTag {
            ref name,
            self_closing,
            ..
        } = token
        {
            self.last_start_tag_name = Some(name.clone());
            if !self_closing {
                if RCDATA_ELEMENTS.contains(&name.as_str()) {
                    self.switch_to(TokenizerState::RCDATA);
                    self.text_state = TokenizerState::RCDATA;
                } else if RAWTEXT_ELEMENTS.contains(&name.as_str()) {
                    self.switch_to(TokenizerState::RAWTEXT);
                    self.text_state = TokenizerState::RAWTEXT;
                }
            }
        }
        self.token_stream.push(token);
    }

    /// "Emit the current input character as a character token."
    ///
    /// Characters are buffered and emitted as one [`Token::Text`] when the
    /// next non-text token arrives.
    pub fn emit_character_token(&mut self, c: char) {
        self.text_buffer.push(c);
    }

    /// Emit buffered character data, if any.
    pub(super) fn flush_text(&mut self) {
        if !self.text_buffer.is_empty() {
            let data = std::mem::take(&mut self.text_buffer);
            self.token_stream.push(Token::new_text(data));
        }
    }

    /// "Emit an end-of-file token."
    pub fn emit_eof_token(&mut self) {
        self.flush_text();
        self.token_stream.push(Token::EndOfFile);
    }

    /// Append to the data of the current comment, declaration, marked section
    /// or processing instruction.
    pub(super) fn append_to_data(&mut self, c: char) {
        if let Some(ref mut token) = self.current_token {
            token.append_to_data(c);
        }
    }

    /// Append to the value of the current attribute.
    pub(super) fn append_to_attribute_value(&mut self, c: char) {
        if let Some(ref mut token) = self.current_token {
            token.append_to_current_attribute_value(c);
        }
    }

    /// The current attribute saw `=`; its value is now empty rather than absent.
    pub(super) fn begin_attribute_value(&mut self) {
        if let Some(ref mut token) = self.current_token {
            token.begin_current_attribute_value();
        }
    }
}

// =============================================================================
// End Of File Recovery
// =============================================================================

impl HTMLTokenizer {
    /// "eof-in-tag parse error. Emit an end-of-file token."
    ///
    /// The unfinished tag is dropped.
    pub(super) fn drop_tag_at_eof(&mut self) {
        self.log_parse_error();
        self.current_token = None;
        self.reconsume_in(TokenizerState::Data);
    }

    /// "eof-in-comment parse error. Emit the comment. Emit an end-of-file token."
    ///
    /// Also used for unterminated declarations, marked sections and
    /// processing instructions.
    pub(super) fn emit_data_token_at_eof(&mut self) {
        self.log_parse_error();
        self.emit_token();
        self.reconsume_in(TokenizerState::Data);
    }
}

// =============================================================================
// RCDATA/RAWTEXT Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "An appropriate end tag token is an end tag token whose tag name matches
    /// the tag name of the last start tag to have been emitted from this
    /// tokenizer, if any."
    pub(super) fn is_appropriate_end_tag_token(&self) -> bool {
        if let (Some(last_start_tag), Some(Token::EndTag { name, .. })) =
            (&self.last_start_tag_name, &self.current_token)
        {
            return name == last_start_tag;
        }
        false
    }

    /// "Emit a U+003C LESS-THAN SIGN character token, a U+002F SOLIDUS character
    /// token, and a character token for each of the characters in the temporary
    /// buffer"; the end tag token is discarded.
    pub(super) fn emit_text_end_tag_name_anything_else(&mut self) {
        self.emit_character_token('<');
        self.emit_character_token('/');
        let buffer = std::mem::take(&mut self.temporary_buffer);
        for c in buffer.chars() {
            self.emit_character_token(c);
        }
        self.current_token = None;
        self.reconsume_in(self.text_state);
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
    ///
    /// Parse errors are never fatal; they are counted and logged at debug level.
    pub(super) fn log_parse_error(&mut self) {
        self.parse_errors += 1;
        log::debug!(
            "HTML parse error in {} state at byte {}",
            self.state,
            self.current_pos
        );
    }
}
