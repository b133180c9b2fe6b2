//! Fatal conversion errors.

use thiserror::Error;

use crate::normalize::NormalizeError;

/// A problem that aborts the whole conversion.
///
/// Recoverable problems are reported as [`crate::Diagnostic`]s instead.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A `<!DOCTYPE>` declaration without a document type name.
    #[error("Unknown declaration: {0}")]
    UnknownDeclaration(String),

    /// A close tag arrived while no element was open.
    #[error("Tag closed before starting: {0}")]
    TagClosedBeforeStarting(String),

    /// The component tree could not be serialized.
    #[error("Failed to write the component tree: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The style normalizer rejected the generated code.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}
