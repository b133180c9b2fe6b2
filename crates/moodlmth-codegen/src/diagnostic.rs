//! Recoverable conversion diagnostics.

use serde::Serialize;
use strum_macros::Display;

/// The kinds of malformed input the tree builder recovers from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DiagnosticKind {
    /// A tag name with no htmldoom element; a generic tag was synthesized.
    UnknownTag,
    /// A close tag that does not match the innermost open element.
    MismatchedClose,
    /// An element still open at end of input.
    UnclosedTag,
    /// A doctype after the first one.
    DuplicateDoctype,
}

/// One recoverable problem found while building the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// The tag name involved, or the doctype text for a duplicate doctype.
    pub subject: String,
    /// Human-readable description naming the offending tag.
    pub message: String,
    /// Index of the token that triggered it.
    pub token_index: usize,
}

impl Diagnostic {
    /// Create a diagnostic.
    #[must_use]
    pub const fn new(
        kind: DiagnosticKind,
        subject: String,
        message: String,
        token_index: usize,
    ) -> Self {
        Self {
            kind,
            subject,
            message,
            token_index,
        }
    }

    /// Identity of the problem regardless of where it occurred, such as
    /// `unclosed_tag:p`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}:{}", self.kind, self.subject)
    }
}
