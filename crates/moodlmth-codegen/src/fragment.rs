//! Rendered code kept in segments until assembly.
//!
//! A rendered element mixes three things: Python syntax, quoted literals whose
//! content came from the page, and back-references to captured sections.
//! Only the literals can carry `{`/`}` that a format template would
//! misread, so they stay separate until [`Fragment::to_code`] decides how to
//! write them.

use std::fmt;

use strum_macros::Display;

/// A distinguished section a template refers to by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Slot {
    /// `<title>`
    Title,
    /// `<head>`
    Head,
    /// `<body>`
    Body,
    /// `<html>`
    Html,
}

impl Slot {
    /// The slot captured when `tag_name` closes, if any.
    #[must_use]
    pub fn from_tag(tag_name: &str) -> Option<Self> {
        match tag_name {
            "title" => Some(Self::Title),
            "head" => Some(Self::Head),
            "body" => Some(Self::Body),
            "html" => Some(Self::Html),
            _ => None,
        }
    }
}

/// How a [`Piece::Slot`] is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStyle {
    /// A format placeholder string, `"{title}"`.
    Placeholder,
    /// A property of the enclosing layout, `self.title`.
    Property,
}

impl SlotStyle {
    /// Write the reference to `slot`.
    #[must_use]
    pub fn reference(self, slot: Slot) -> String {
        match self {
            Self::Placeholder => format!("\"{{{slot}}}\""),
            Self::Property => format!("self.{slot}"),
        }
    }
}

/// One segment of a [`Fragment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// Python syntax written by the renderer.
    Code(String),
    /// A complete quoted `str` or `bytes` literal holding page content.
    Literal(String),
    /// A back-reference to a captured section.
    Slot(Slot),
}

/// A rendered piece of code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pieces: Vec<Piece>,
}

impl Fragment {
    /// An empty fragment.
    #[must_use]
    pub const fn new() -> Self {
        Self { pieces: Vec::new() }
    }

    /// A fragment holding only code.
    #[must_use]
    pub fn code(code: &str) -> Self {
        let mut fragment = Self::new();
        fragment.push_code(code);
        fragment
    }

    /// The segments, in order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Returns true if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Append syntax, merging with a preceding code segment.
    pub fn push_code(&mut self, code: &str) {
        if code.is_empty() {
            return;
        }
        if let Some(Piece::Code(last)) = self.pieces.last_mut() {
            last.push_str(code);
        } else {
            self.pieces.push(Piece::Code(code.to_string()));
        }
    }

    /// Append a complete quoted literal.
    pub fn push_literal(&mut self, literal: String) {
        self.pieces.push(Piece::Literal(literal));
    }

    /// Append a back-reference.
    pub fn push_slot(&mut self, slot: Slot) {
        self.pieces.push(Piece::Slot(slot));
    }

    /// Append every segment of `other`.
    pub fn append(&mut self, other: Self) {
        for piece in other.pieces {
            match piece {
                Piece::Code(code) => self.push_code(&code),
                piece => self.pieces.push(piece),
            }
        }
    }

    /// Append `items` separated by `, `.
    pub fn append_joined(&mut self, items: impl IntoIterator<Item = Self>) {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.push_code(", ");
            }
            self.append(item);
        }
    }

    /// Returns true if any segment refers to `slot`.
    #[must_use]
    pub fn references(&self, slot: Slot) -> bool {
        self.pieces.contains(&Piece::Slot(slot))
    }

    /// Write the fragment as code.
    ///
    /// With `escape_braces`, `{` and `}` inside literals are doubled so a
    /// format template reproduces them; code and slot references are never
    /// touched. The fragment itself is not modified, so writing it twice
    /// gives the same text.
    #[must_use]
    pub fn to_code(&self, escape_braces: bool, slots: SlotStyle) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Code(code) => out.push_str(code),
                Piece::Literal(literal) if escape_braces => {
                    out.push_str(&literal.replace('{', "{{").replace('}', "}}"));
                }
                Piece::Literal(literal) => out.push_str(literal),
                Piece::Slot(slot) => out.push_str(&slots.reference(*slot)),
            }
        }
        out
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code(false, SlotStyle::Placeholder))
    }
}
