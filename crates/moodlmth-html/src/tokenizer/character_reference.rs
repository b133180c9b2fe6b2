//! Character reference helpers for the HTML tokenizer.
//!
//! [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)

use super::core::{HTMLTokenizer, TokenizerState};
use super::named_character_references::{any_entity_has_prefix, lookup_entity};

impl HTMLTokenizer {
    /// Returns true if the return state is an attribute value state.
    pub(super) const fn is_consumed_as_part_of_attribute(&self) -> bool {
        matches!(
            self.return_state,
            Some(
                TokenizerState::AttributeValueDoubleQuoted
                    | TokenizerState::AttributeValueSingleQuoted
                    | TokenizerState::AttributeValueUnquoted
            )
        )
    }

    /// "Flush code points consumed as a character reference"
    ///
    /// Appends the temporary buffer to the current attribute's value, or emits
    /// it as character data.
    pub(super) fn flush_code_points_consumed_as_character_reference(&mut self) {
        let buffer = std::mem::take(&mut self.temporary_buffer);
        if self.is_consumed_as_part_of_attribute() {
            for c in buffer.chars() {
                self.append_to_attribute_value(c);
            }
        } else {
            for c in buffer.chars() {
                self.emit_character_token(c);
            }
        }
    }

    fn return_state_or_data(&mut self) -> TokenizerState {
        self.return_state.take().unwrap_or(TokenizerState::Data)
    }

    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    pub(super) fn handle_character_reference_state(&mut self) {
        self.temporary_buffer.clear();
        self.temporary_buffer.push('&');
        match self.current_input_character {
            Some(c) if c.is_ascii_alphanumeric() => {
                self.reconsume_in(TokenizerState::NamedCharacterReference);
            }
            Some('#') => {
                self.temporary_buffer.push('#');
                self.switch_to(TokenizerState::NumericCharacterReference);
            }
            _ => {
                self.flush_code_points_consumed_as_character_reference();
                let state = self.return_state_or_data();
                self.reconsume_in(state);
            }
        }
    }

    /// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
    ///
    /// "Consume the maximum number of characters possible, where the consumed
    /// characters are one of the identifiers in the named character references
    /// table." Characters read past the longest match are kept as text.
    pub(super) fn handle_named_character_reference_state(&mut self) {
        let mut name = String::new();
        if let Some(c) = self.current_input_character {
            name.push(c);
        }
        let mut longest = lookup_entity(&name).map(|r| (name.len(), r));

        while !name.ends_with(';') && any_entity_has_prefix(&name) {
            match self.peek_codepoint(0) {
                Some(c) if c.is_ascii_alphanumeric() || c == ';' => {
                    self.skip(c);
                    name.push(c);
                    if let Some(replacement) = lookup_entity(&name) {
                        longest = Some((name.len(), replacement));
                    }
                }
                _ => break,
            }
        }

        match longest {
            Some((matched_len, replacement)) => {
                let matched = &name[..matched_len];
                let rest = &name[matched_len..];
                // "If the character reference was consumed as part of an
                // attribute, and the last character matched is not a semicolon,
                // and the next input character is either = or an ASCII
                // alphanumeric, then, for historical reasons, flush code points
                // consumed as a character reference"
                let next = rest.chars().next().or_else(|| self.peek_codepoint(0));
                let historical = self.is_consumed_as_part_of_attribute()
                    && !matched.ends_with(';')
                    && next.is_some_and(|c| c == '=' || c.is_ascii_alphanumeric());

                if historical {
                    self.temporary_buffer.push_str(&name);
                } else {
                    if !matched.ends_with(';') {
                        // missing-semicolon-after-character-reference
                        self.log_parse_error();
                    }
                    self.temporary_buffer.clear();
                    self.temporary_buffer.push_str(replacement);
                    self.temporary_buffer.push_str(rest);
                }
            }
            None => {
                self.temporary_buffer.push_str(&name);
            }
        }
        self.flush_code_points_consumed_as_character_reference();
        let state = self.return_state_or_data();
        self.switch_to(state);
    }

    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    /// through [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
    ///
    /// Decimal and hexadecimal references are read in one pass.
    pub(super) fn handle_numeric_character_reference_state(&mut self) {
        let mut digits = String::new();
        let hex = match self.current_input_character {
            Some(c @ ('x' | 'X')) => {
                self.temporary_buffer.push(c);
                true
            }
            Some(c) if c.is_ascii_digit() => {
                digits.push(c);
                false
            }
            _ => {
                // absence-of-digits-in-numeric-character-reference
                self.log_parse_error();
                self.flush_code_points_consumed_as_character_reference();
                let state = self.return_state_or_data();
                self.reconsume_in(state);
                return;
            }
        };

        while let Some(c) = self.peek_codepoint(0) {
            let is_digit = if hex {
                c.is_ascii_hexdigit()
            } else {
                c.is_ascii_digit()
            };
            if !is_digit {
                break;
            }
            self.skip(c);
            digits.push(c);
        }

        if digits.is_empty() {
            self.log_parse_error();
            self.flush_code_points_consumed_as_character_reference();
            let state = self.return_state_or_data();
            self.switch_to(state);
            return;
        }

        if self.peek_codepoint(0) == Some(';') {
            self.skip(';');
        } else {
            self.log_parse_error();
        }

        let radix = if hex { 16 } else { 10 };
        let replacement = u32::from_str_radix(&digits, radix)
            .ok()
            .filter(|&code| code != 0)
            .and_then(char::from_u32)
            .unwrap_or('\u{FFFD}');

        self.temporary_buffer.clear();
        self.temporary_buffer.push(replacement);
        self.flush_code_points_consumed_as_character_reference();
        let state = self.return_state_or_data();
        self.switch_to(state);
    }
}
