use strum_macros::Display;

use super::token::Token;

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// The tokenizer state machine. DOCTYPE sub-states are folded into
/// [`TokenizerState::Declaration`], CDATA into
/// [`TokenizerState::MarkedSection`] and script data into the raw text
/// states, since conversion reproduces markup rather than building a
/// browsing DOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenizerState {
    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    Data,
    /// [§ 13.2.5.2 RCDATA state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state)
    /// Used for `title` and `textarea`.
    RCDATA,
    /// [§ 13.2.5.3 RAWTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state)
    /// Used for `script` and `style`.
    RAWTEXT,
    /// RCDATA or RAWTEXT less-than sign state.
    TextLessThanSign,
    /// RCDATA or RAWTEXT end tag open state.
    TextEndTagOpen,
    /// RCDATA or RAWTEXT end tag name state.
    TextEndTagName,
    /// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
    TagOpen,
    /// [§ 13.2.5.7 End tag open state](https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state)
    EndTagOpen,
    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    TagName,
    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    BeforeAttributeName,
    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    AttributeName,
    /// [§ 13.2.5.34 After attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-name-state)
    AfterAttributeName,
    /// [§ 13.2.5.35 Before attribute value state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state)
    BeforeAttributeValue,
    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    AttributeValueDoubleQuoted,
    /// [§ 13.2.5.37 Attribute value (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(single-quoted)-state)
    AttributeValueSingleQuoted,
    /// [§ 13.2.5.38 Attribute value (unquoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state)
    AttributeValueUnquoted,
    /// [§ 13.2.5.39 After attribute value (quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-value-(quoted)-state)
    AfterAttributeValueQuoted,
    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    SelfClosingStartTag,
    /// [§ 13.2.5.41 Bogus comment state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state)
    BogusComment,
    /// [§ 13.2.5.43 Comment start state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-state)
    CommentStart,
    /// [§ 13.2.5.44 Comment start dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-dash-state)
    CommentStartDash,
    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    Comment,
    /// [§ 13.2.5.50 Comment end dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-dash-state)
    CommentEndDash,
    /// [§ 13.2.5.51 Comment end state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-state)
    CommentEnd,
    /// `<!DOCTYPE`, matched case-insensitively: everything up to `>` is kept
    /// verbatim.
    Declaration,
    /// [§ 13.2.5.69 CDATA section state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-state)
    /// `<![` up to the next `]]>`.
    MarkedSection,
    /// `<?` up to the next `>`.
    ProcessingInstruction,
    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    CharacterReference,
    /// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
    NamedCharacterReference,
    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    NumericCharacterReference,
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// This struct maintains the state machine for tokenizing HTML input into tokens.
pub struct HTMLTokenizer {
    pub(super) state: TokenizerState,
    pub(super) return_state: Option<TokenizerState>,
    pub(super) input: String,
    pub(super) current_pos: usize,
    pub(super) current_input_character: Option<char>,
    pub(super) current_token: Option<Token>,
    pub(super) at_eof: bool,
    pub(super) token_stream: Vec<Token>,
    // When true, the next iteration of the main loop will not consume a new character.
    pub(super) reconsume: bool,

    /// Name of the last start tag emitted; an end tag only leaves RCDATA or
    /// RAWTEXT when it matches.
    pub(super) last_start_tag_name: Option<String>,

    /// Characters held back while deciding whether `</name` ends a raw text
    /// element, or the replacement of a character reference.
    pub(super) temporary_buffer: String,

    /// Which of RCDATA or RAWTEXT the shared end tag states return to.
    pub(super) text_state: TokenizerState,

    /// Character data not yet emitted as a [`Token::Text`].
    pub(super) text_buffer: String,

    pub(super) parse_errors: usize,
}

impl HTMLTokenizer {
    /// Create a new tokenizer for the given input.
    ///
    /// Newlines are normalized first: CRLF and lone CR both become LF.
    #[must_use]
    pub fn new(input: String) -> Self {
        let input = if input.contains('\r') {
            input.replace("\r\n", "\n").replace('\r', "\n")
        } else {
            input
        };
        Self {
            state: TokenizerState::Data,
            return_state: None,
            input,
            current_pos: 0,
            current_input_character: None,
            current_token: None,
            at_eof: false,
            token_stream: Vec::new(),
            reconsume: false,
            last_start_tag_name: None,
            temporary_buffer: String::new(),
            text_state: TokenizerState::RCDATA,
            text_buffer: String::new(),
            parse_errors: 0,
        }
    }

    /// Consume the tokenizer and return the token stream.
    /// Call this after run() to get the tokens for tree construction.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.token_stream
    }

    /// Number of recoverable parse errors seen so far.
    #[must_use]
    pub const fn parse_error_count(&self) -> usize {
        self.parse_errors
    }

    /// Tokenize the whole input. The stream always ends with
    /// [`Token::EndOfFile`].
    pub fn run(&mut self) {
        loop {
            if self.reconsume {
                self.reconsume = false;
            } else {
                self.current_input_character = self.consume();
            }

            if self.current_input_character.is_none() && self.at_eof {
                break;
            }

            match self.state {
                TokenizerState::Data => self.handle_data_state(),
                TokenizerState::RCDATA | TokenizerState::RAWTEXT => self.handle_text_state(),
                TokenizerState::TextLessThanSign => self.handle_text_less_than_sign_state(),
                TokenizerState::TextEndTagOpen => self.handle_text_end_tag_open_state(),
                TokenizerState::TextEndTagName => self.handle_text_end_tag_name_state(),
                TokenizerState::TagOpen => self.handle_tag_open_state(),
                TokenizerState::EndTagOpen => self.handle_end_tag_open_state(),
                TokenizerState::TagName => self.handle_tag_name_state(),
                TokenizerState::BeforeAttributeName => self.handle_before_attribute_name_state(),
                TokenizerState::AttributeName => self.handle_attribute_name_state(),
                TokenizerState::AfterAttributeName => self.handle_after_attribute_name_state(),
                TokenizerState::BeforeAttributeValue => self.handle_before_attribute_value_state(),
                TokenizerState::AttributeValueDoubleQuoted => {
                    self.handle_attribute_value_quoted_state('"');
                }
                TokenizerState::AttributeValueSingleQuoted => {
                    self.handle_attribute_value_quoted_state('\'');
                }
                TokenizerState::AttributeValueUnquoted => {
                    self.handle_attribute_value_unquoted_state();
                }
                TokenizerState::AfterAttributeValueQuoted => {
                    self.handle_after_attribute_value_quoted_state();
                }
                TokenizerState::SelfClosingStartTag => self.handle_self_closing_start_tag_state(),
                TokenizerState::CommentStart => self.handle_comment_start_state(),
                TokenizerState::CommentStartDash => self.handle_comment_start_dash_state(),
                TokenizerState::Comment => self.handle_comment_state(),
                TokenizerState::CommentEndDash => self.handle_comment_end_dash_state(),
                TokenizerState::CommentEnd => self.handle_comment_end_state(),
                TokenizerState::BogusComment
                | TokenizerState::Declaration
                | TokenizerState::ProcessingInstruction => self.handle_until_greater_than_state(),
                TokenizerState::MarkedSection => self.handle_marked_section_state(),
                TokenizerState::CharacterReference => self.handle_character_reference_state(),
                TokenizerState::NamedCharacterReference => {
                    self.handle_named_character_reference_state();
                }
                TokenizerState::NumericCharacterReference => {
                    self.handle_numeric_character_reference_state();
                }
            }
        }
    }

    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    fn handle_data_state(&mut self) {
        match self.current_input_character {
            Some('&') => {
                self.return_state = Some(TokenizerState::Data);
                self.switch_to(TokenizerState::CharacterReference);
            }
            Some('<') => {
                self.switch_to(TokenizerState::TagOpen);
            }
            None => {
                self.emit_eof_token();
                self.at_eof = true;
            }
            Some(c) => {
                self.emit_character_token(c);
            }
        }
    }

    /// [§ 13.2.5.2 RCDATA state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state)
    /// and [§ 13.2.5.3 RAWTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state)
    ///
    /// Only RCDATA decodes character references.
    fn handle_text_state(&mut self) {
        match self.current_input_character {
            Some('&') if self.state == TokenizerState::RCDATA => {
                self.return_state = Some(TokenizerState::RCDATA);
                self.switch_to(TokenizerState::CharacterReference);
            }
            Some('<') => {
                self.text_state = self.state;
                self.switch_to(TokenizerState::TextLessThanSign);
            }
            Some('\0') => {
                self.log_parse_error();
                self.emit_character_token('\u{FFFD}');
            }
            None => {
                self.emit_eof_token();
                self.at_eof = true;
            }
            Some(c) => {
                self.emit_character_token(c);
            }
        }
    }

    /// [§ 13.2.5.9 RCDATA less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-less-than-sign-state)
    fn handle_text_less_than_sign_state(&mut self) {
        if self.current_input_character == Some('/') {
            self.temporary_buffer.clear();
            self.switch_to(TokenizerState::TextEndTagOpen);
        } else {
            self.emit_character_token('<');
            self.reconsume_in(self.text_state);
        }
    }

    /// [§ 13.2.5.10 RCDATA end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-open-state)
    fn handle_text_end_tag_open_state(&mut self) {
        match self.current_input_character {
            Some(c) if c.is_ascii_alphabetic() => {
                self.current_token = Some(Token::new_end_tag());
                self.reconsume_in(TokenizerState::TextEndTagName);
            }
            _ => {
                self.emit_character_token('<');
                self.emit_character_token('/');
                self.reconsume_in(self.text_state);
            }
        }
    }

    /// [§ 13.2.5.11 RCDATA end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-name-state)
    fn handle_text_end_tag_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) && self.is_appropriate_end_tag_token() => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('/') if self.is_appropriate_end_tag_token() => {
                self.switch_to(TokenizerState::SelfClosingStartTag);
            }
            Some('>') if self.is_appropriate_end_tag_token() => {
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            Some(c) if c.is_ascii_alphabetic() => {
                if let Some(ref mut token) = self.current_token {
                    token.append_to_tag_name(c.to_ascii_lowercase());
                }
                self.temporary_buffer.push(c);
            }
            _ => self.emit_text_end_tag_name_anything_else(),
        }
    }

    /// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
    ///
    /// `<!` is resolved here with lookahead: `<!--` opens a comment,
    /// `<!DOCTYPE` a declaration and `<![` a marked section. Anything else,
    /// such as `<!ELEMENT ...>`, is a bogus comment.
    fn handle_tag_open_state(&mut self) {
        match self.current_input_character {
            Some('!') => {
                if self.next_few_characters_are("--") {
                    self.consume_string("--");
                    self.current_token = Some(Token::new_comment());
                    self.switch_to(TokenizerState::CommentStart);
                } else if self.next_few_characters_are_ignoring_case("doctype") {
                    self.current_token = Some(Token::new_declaration());
                    self.switch_to(TokenizerState::Declaration);
                } else if self.next_few_characters_are("[") {
                    self.consume_string("[");
                    self.current_token = Some(Token::new_marked_section());
                    self.switch_to(TokenizerState::MarkedSection);
                } else {
                    self.log_parse_error();
                    self.current_token = Some(Token::new_comment());
                    self.switch_to(TokenizerState::BogusComment);
                }
            }
            Some('/') => {
                self.switch_to(TokenizerState::EndTagOpen);
            }
            Some(c) if c.is_ascii_alphabetic() => {
                self.current_token = Some(Token::new_start_tag());
                self.reconsume_in(TokenizerState::TagName);
            }
            Some('?') => {
                self.current_token = Some(Token::new_processing_instruction());
                self.switch_to(TokenizerState::ProcessingInstruction);
            }
            _ => {
                self.log_parse_error();
                self.emit_character_token('<');
                self.reconsume_in(TokenizerState::Data);
            }
        }
    }

    /// [§ 13.2.5.7 End tag open state](https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state)
    fn handle_end_tag_open_state(&mut self) {
        match self.current_input_character {
            Some(c) if c.is_ascii_alphabetic() => {
                self.current_token = Some(Token::new_end_tag());
                self.reconsume_in(TokenizerState::TagName);
            }
            Some('>') => {
                self.log_parse_error();
                self.switch_to(TokenizerState::Data);
            }
            None => {
                self.log_parse_error();
                self.emit_character_token('<');
                self.emit_character_token('/');
                self.reconsume_in(TokenizerState::Data);
            }
            Some(_) => {
                self.log_parse_error();
                self.current_token = Some(Token::new_comment());
                self.reconsume_in(TokenizerState::BogusComment);
            }
        }
    }

    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    fn handle_tag_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('/') => {
                self.switch_to(TokenizerState::SelfClosingStartTag);
            }
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            Some('\0') => {
                self.log_parse_error();
                if let Some(ref mut token) = self.current_token {
                    token.append_to_tag_name('\u{FFFD}');
                }
            }
            None => self.drop_tag_at_eof(),
            Some(c) => {
                if let Some(ref mut token) = self.current_token {
                    token.append_to_tag_name(c.to_ascii_lowercase());
                }
            }
        }
    }

    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    fn handle_before_attribute_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('/' | '>') | None => {
                self.reconsume_in(TokenizerState::AfterAttributeName);
            }
            Some('=') => {
                self.log_parse_error();
                if let Some(ref mut token) = self.current_token {
                    token.start_new_attribute();
                    token.append_to_current_attribute_name('=');
                }
                self.switch_to(TokenizerState::AttributeName);
            }
            Some(_) => {
                if let Some(ref mut token) = self.current_token {
                    token.start_new_attribute();
                }
                self.reconsume_in(TokenizerState::AttributeName);
            }
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    fn handle_attribute_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.reconsume_in(TokenizerState::AfterAttributeName);
            }
            Some('/' | '>') | None => {
                self.reconsume_in(TokenizerState::AfterAttributeName);
            }
            Some('=') => {
                self.begin_attribute_value();
                self.switch_to(TokenizerState::BeforeAttributeValue);
            }
            Some('\0') => {
                self.log_parse_error();
                if let Some(ref mut token) = self.current_token {
                    token.append_to_current_attribute_name('\u{FFFD}');
                }
            }
            Some(c) => {
                if matches!(c, '"' | '\'' | '<') {
                    self.log_parse_error();
                }
                if let Some(ref mut token) = self.current_token {
                    token.append_to_current_attribute_name(c.to_ascii_lowercase());
                }
            }
        }
    }

    /// [§ 13.2.5.34 After attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-name-state)
    fn handle_after_attribute_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('/') => {
                self.switch_to(TokenizerState::SelfClosingStartTag);
            }
            Some('=') => {
                self.begin_attribute_value();
                self.switch_to(TokenizerState::BeforeAttributeValue);
            }
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            None => self.drop_tag_at_eof(),
            Some(_) => {
                if let Some(ref mut token) = self.current_token {
                    token.start_new_attribute();
                }
                self.reconsume_in(TokenizerState::AttributeName);
            }
        }
    }

    /// [§ 13.2.5.35 Before attribute value state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state)
    fn handle_before_attribute_value_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('"') => {
                self.switch_to(TokenizerState::AttributeValueDoubleQuoted);
            }
            Some('\'') => {
                self.switch_to(TokenizerState::AttributeValueSingleQuoted);
            }
            Some('>') => {
                // missing-attribute-value: the attribute keeps its empty value
                self.log_parse_error();
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            _ => {
                self.reconsume_in(TokenizerState::AttributeValueUnquoted);
            }
        }
    }

    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    /// and [§ 13.2.5.37 Attribute value (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(single-quoted)-state)
    fn handle_attribute_value_quoted_state(&mut self, quote: char) {
        match self.current_input_character {
            Some(c) if c == quote => {
                self.switch_to(TokenizerState::AfterAttributeValueQuoted);
            }
            Some('&') => {
                self.return_state = Some(self.state);
                self.switch_to(TokenizerState::CharacterReference);
            }
            Some('\0') => {
                self.log_parse_error();
                self.append_to_attribute_value('\u{FFFD}');
            }
            None => self.drop_tag_at_eof(),
            Some(c) => self.append_to_attribute_value(c),
        }
    }

    /// [§ 13.2.5.38 Attribute value (unquoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state)
    fn handle_attribute_value_unquoted_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('&') => {
                self.return_state = Some(TokenizerState::AttributeValueUnquoted);
                self.switch_to(TokenizerState::CharacterReference);
            }
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            Some('\0') => {
                self.log_parse_error();
                self.append_to_attribute_value('\u{FFFD}');
            }
            None => self.drop_tag_at_eof(),
            Some(c) => {
                if matches!(c, '"' | '\'' | '<' | '=' | '`') {
                    self.log_parse_error();
                }
                self.append_to_attribute_value(c);
            }
        }
    }

    /// [§ 13.2.5.39 After attribute value (quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-value-(quoted)-state)
    fn handle_after_attribute_value_quoted_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('/') => {
                self.switch_to(TokenizerState::SelfClosingStartTag);
            }
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            None => self.drop_tag_at_eof(),
            Some(_) => {
                self.log_parse_error();
                self.reconsume_in(TokenizerState::BeforeAttributeName);
            }
        }
    }

    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    fn handle_self_closing_start_tag_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                if let Some(ref mut token) = self.current_token {
                    token.set_self_closing();
                }
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            None => self.drop_tag_at_eof(),
            Some(_) => {
                self.log_parse_error();
                self.reconsume_in(TokenizerState::BeforeAttributeName);
            }
        }
    }

    /// [§ 13.2.5.43 Comment start state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-state)
    fn handle_comment_start_state(&mut self) {
        match self.current_input_character {
            Some('-') => {
                self.switch_to(TokenizerState::CommentStartDash);
            }
            Some('>') => {
                // abrupt-closing-of-empty-comment
                self.log_parse_error();
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            _ => {
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.44 Comment start dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-dash-state)
    fn handle_comment_start_dash_state(&mut self) {
        match self.current_input_character {
            Some('-') => {
                self.switch_to(TokenizerState::CommentEnd);
            }
            Some('>') => {
                self.log_parse_error();
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            None => self.emit_data_token_at_eof(),
            Some(_) => {
                self.append_to_data('-');
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    fn handle_comment_state(&mut self) {
        match self.current_input_character {
            Some('-') => {
                self.switch_to(TokenizerState::CommentEndDash);
            }
            None => self.emit_data_token_at_eof(),
            Some(c) => self.append_to_data(c),
        }
    }

    /// [§ 13.2.5.50 Comment end dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-dash-state)
    fn handle_comment_end_dash_state(&mut self) {
        match self.current_input_character {
            Some('-') => {
                self.switch_to(TokenizerState::CommentEnd);
            }
            None => self.emit_data_token_at_eof(),
            Some(_) => {
                self.append_to_data('-');
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.51 Comment end state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-state)
    fn handle_comment_end_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            Some('-') => self.append_to_data('-'),
            None => self.emit_data_token_at_eof(),
            Some(_) => {
                self.append_to_data('-');
                self.append_to_data('-');
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// Bogus comments, declarations and processing instructions all run to
    /// the next `>` and keep what they saw verbatim.
    fn handle_until_greater_than_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            None => self.emit_data_token_at_eof(),
            Some(c) => self.append_to_data(c),
        }
    }

    /// [§ 13.2.5.69 CDATA section state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-state)
    fn handle_marked_section_state(&mut self) {
        match self.current_input_character {
            Some(']') if self.next_few_characters_are("]>") => {
                self.consume_string("]>");
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            None => self.emit_data_token_at_eof(),
            Some(c) => self.append_to_data(c),
        }
    }
}
