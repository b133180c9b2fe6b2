use std::fmt;

/// An attribute on a start or end tag token.
///
/// `value` is `None` when the attribute was written without `=`
/// (`<input required>`), which is distinct from an empty value
/// (`<input value="">`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Lowercase attribute name.
    pub name: String,
    /// Decoded value, or `None` for a valueless attribute.
    pub value: Option<String>,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: Option<String>) -> Self {
        Self { name, value }
    }
}

/// The tokens the tokenizer hands to tree construction.
///
/// Character data is coalesced: consecutive characters between two markup
/// constructs arrive as one [`Token::Text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A `<!DOCTYPE ...>` declaration, e.g. the `DOCTYPE html` of
    /// `<!DOCTYPE html>`. The data is kept verbatim.
    Declaration {
        /// Everything between `<!` and `>`.
        data: String,
    },

    /// Start tag with a lowercase name, a self-closing flag
    /// (`<br/>`), and its attributes in source order.
    StartTag {
        /// Lowercase tag name.
        name: String,
        /// Whether the tag ended with `/>`.
        self_closing: bool,
        /// Attributes in source order, duplicates removed.
        attributes: Vec<Attribute>,
    },

    /// End tag token. Attributes are parsed but carry no meaning.
    EndTag {
        /// Lowercase tag name.
        name: String,
        /// Attributes written on the end tag.
        attributes: Vec<Attribute>,
    },

    /// `<!-- ... -->`, or a bogus comment.
    Comment {
        /// Comment text without the delimiters.
        data: String,
    },

    /// A run of character data with character references decoded
    /// (except in raw text elements).
    Text {
        /// The characters.
        data: String,
    },

    /// `<?...>`, e.g. an XML prolog.
    ProcessingInstruction {
        /// Everything between `<?` and `>`.
        data: String,
    },

    /// `<![...]]>`, e.g. a CDATA section inside inline SVG.
    MarkedSection {
        /// Everything between `<![` and `]]>`.
        data: String,
    },

    /// End-of-file token signals the end of input.
    EndOfFile,
}

impl Token {
    /// Create a new declaration token with empty data.
    #[must_use]
    pub const fn new_declaration() -> Self {
        Self::Declaration {
            data: String::new(),
        }
    }

    /// Create a new start tag token with no name and no attributes.
    #[must_use]
    pub const fn new_start_tag() -> Self {
        Self::StartTag {
            name: String::new(),
            self_closing: false,
            attributes: Vec::new(),
        }
    }

    /// Create a new end tag token.
    #[must_use]
    pub const fn new_end_tag() -> Self {
        Self::EndTag {
            name: String::new(),
            attributes: Vec::new(),
        }
    }

    /// Create a new comment token with empty data.
    #[must_use]
    pub const fn new_comment() -> Self {
        Self::Comment {
            data: String::new(),
        }
    }

    /// Create a new processing instruction token with empty data.
    #[must_use]
    pub const fn new_processing_instruction() -> Self {
        Self::ProcessingInstruction {
            data: String::new(),
        }
    }

    /// Create a new marked section token with empty data.
    #[must_use]
    pub const fn new_marked_section() -> Self {
        Self::MarkedSection {
            data: String::new(),
        }
    }

    /// Create a text token.
    #[must_use]
    pub const fn new_text(data: String) -> Self {
        Self::Text { data }
    }

    /// Returns true if this is an end-of-file token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfFile)
    }

    /// Mutation helpers for use during tokenization.
    /// These panic if called on the wrong token variant, which indicates a bug
    /// in the tokenizer state machine.
    ///
    /// Append a character to the current tag token's name.
    ///
    /// # Panics
    ///
    /// Panics if called on a non-tag token, indicating a tokenizer bug.
    pub fn append_to_tag_name(&mut self, c: char) {
        match self {
            Self::StartTag { name, .. } | Self::EndTag { name, .. } => {
                name.push(c);
            }
            _ => panic!("append_to_tag_name called on non-tag token"),
        }
    }

    /// Set the self-closing flag. End tags ignore it.
    ///
    /// # Panics
    ///
    /// Panics if called on a non-tag token, indicating a tokenizer bug.
    pub fn set_self_closing(&mut self) {
        match self {
            Self::StartTag { self_closing, .. } => {
                *self_closing = true;
            }
            Self::EndTag { .. } => {}
            _ => panic!("set_self_closing called on non-tag token"),
        }
    }

    /// Append a character to the data of a comment, declaration, marked
    /// section or processing instruction.
    ///
    /// # Panics
    ///
    /// Panics if called on a token without data, indicating a tokenizer bug.
    pub fn append_to_data(&mut self, c: char) {
        match self {
            Self::Comment { data }
            | Self::Declaration { data }
            | Self::ProcessingInstruction { data }
            | Self::MarkedSection { data } => {
                data.push(c);
            }
            _ => panic!("append_to_data called on a token without data"),
        }
    }

    /// Start a new valueless attribute in the current tag token.
    ///
    /// # Panics
    ///
    /// Panics if called on a non-tag token, indicating a tokenizer bug.
    pub fn start_new_attribute(&mut self) {
        match self {
            Self::StartTag { attributes, .. } | Self::EndTag { attributes, .. } => {
                attributes.push(Attribute::new(String::new(), None));
            }
            _ => panic!("start_new_attribute called on non-tag token"),
        }
    }

    /// Append a character to the current attribute's name.
    ///
    /// # Panics
    ///
    /// Panics if called on a non-tag token, indicating a tokenizer bug.
    pub fn append_to_current_attribute_name(&mut self, c: char) {
        match self {
            Self::StartTag { attributes, .. } | Self::EndTag { attributes, .. } => {
                if let Some(attr) = attributes.last_mut() {
                    attr.name.push(c);
                }
            }
            _ => panic!("append_to_current_attribute_name called on non-tag token"),
        }
    }

    /// Mark the current attribute as having a value (it saw `=`), so that an
    /// attribute written `name=""` is not mistaken for a flag.
    ///
    /// # Panics
    ///
    /// Panics if called on a non-tag token, indicating a tokenizer bug.
    pub fn begin_current_attribute_value(&mut self) {
        match self {
            Self::StartTag { attributes, .. } | Self::EndTag { attributes, .. } => {
                if let Some(attr) = attributes.last_mut() {
                    let _ = attr.value.get_or_insert_with(String::new);
                }
            }
            _ => panic!("begin_current_attribute_value called on non-tag token"),
        }
    }

    /// Append a character to the current attribute's value.
    ///
    /// # Panics
    ///
    /// Panics if called on a non-tag token, indicating a tokenizer bug.
    pub fn append_to_current_attribute_value(&mut self, c: char) {
        match self {
            Self::StartTag { attributes, .. } | Self::EndTag { attributes, .. } => {
                if let Some(attr) = attributes.last_mut() {
                    attr.value.get_or_insert_with(String::new).push(c);
                }
            }
            _ => panic!("append_to_current_attribute_value called on non-tag token"),
        }
    }

    /// Remove every attribute whose name already appeared earlier on the
    /// same tag; the first occurrence wins. Returns how many were removed.
    pub fn remove_duplicate_attributes(&mut self) -> usize {
        match self {
            Self::StartTag { attributes, .. } | Self::EndTag { attributes, .. } => {
                let before = attributes.len();
                let mut seen: Vec<String> = Vec::with_capacity(before);
                attributes.retain(|attr| {
                    if seen.contains(&attr.name) {
                        false
                    } else {
                        seen.push(attr.name.clone());
                        true
                    }
                });
                before - attributes.len()
            }
            _ => 0,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declaration { data } => write!(f, "<!{data}>"),
            Self::StartTag {
                name,
                self_closing,
                attributes,
            } => {
                write!(f, "<{name}")?;
                for attr in attributes {
                    match &attr.value {
                        Some(value) => write!(f, " {}=\"{value}\"", attr.name)?,
                        None => write!(f, " {}", attr.name)?,
                    }
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag { name, .. } => {
                write!(f, "</{name}>")
            }
            Self::Comment { data } => {
                write!(f, "<!--{data}-->")
            }
            Self::Text { data } => write!(f, "Text({data:?})"),
            Self::ProcessingInstruction { data } => write!(f, "<?{data}>"),
            Self::MarkedSection { data } => write!(f, "<![{data}]]>"),
            Self::EndOfFile => write!(f, "EOF"),
        }
    }
}
