//! htmldoom code generation for moodlmth.
//!
//! # Scope
//!
//! - **Tag registry**: tag name to htmldoom identifier and leaf/composite kind
//! - **Attribute formatter**: flags first, then keyword properties
//! - **Tree builder**: single-cursor construction with section captures
//! - **Code renderer**: subtree to nested call expression
//! - **Template assembler**: the flat, layout and pipeline module shapes
//! - **Style normalizer**: in-process tidy-up or the `black` formatter
//! - **YAML output**: a component tree for `htmldoom.yaml_loader`
//!
//! [`Converter`] ties them together.

/// Attribute argument lists.
pub mod attributes;
/// Tree construction from tokens.
pub mod builder;
/// The conversion pipeline.
pub mod converter;
/// Recoverable diagnostics.
pub mod diagnostic;
/// Fatal errors.
pub mod error;
/// Segmented rendered code.
pub mod fragment;
/// Normalization of the generated module.
pub mod normalize;
/// Python literal and identifier helpers.
pub mod python;
/// The htmldoom element table.
pub mod registry;
/// Subtree rendering.
pub mod render;
/// Module templates.
pub mod template;
/// The YAML component tree and its loader module.
pub mod yaml;

pub use attributes::{AttributeStyle, format_attributes};
pub use builder::{BuiltDocument, Captures, TreeBuilder};
pub use converter::{Conversion, Converter, ConverterOptions};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use error::ConvertError;
pub use fragment::{Fragment, Piece, Slot, SlotStyle};
pub use normalize::{BasicNormalizer, BlackNormalizer, NormalizeError, NormalizeMode, StyleNormalizer};
pub use registry::{ResolvedTag, TagDef, TagForm, TagKind, TagRegistry};
pub use render::Renderer;
pub use template::{TemplateKind, assemble, substitute};
pub use yaml::{
    ASSETS_DIR, COMPONENTS_FILE, ComponentWriter, RawAsset, YamlConversion, loader_module,
    write_components,
};
