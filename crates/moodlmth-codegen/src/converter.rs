//! The conversion pipeline: tokenize, minify, build, assemble, normalize.
//!
//! [`Converter::convert`] produces a self-contained module;
//! [`Converter::convert_yaml`] produces a YAML component tree and a loader.

use serde::Serialize;

use moodlmth_html::{HTMLTokenizer, minify};

use crate::attributes::AttributeStyle;
use crate::builder::{BuiltDocument, TreeBuilder};
use crate::diagnostic::Diagnostic;
use crate::error::ConvertError;
use crate::normalize::{BasicNormalizer, NormalizeMode, StyleNormalizer};
use crate::registry::TagRegistry;
use crate::render::Renderer;
use crate::template::{TemplateKind, assemble};
use crate::yaml::{YamlConversion, loader_module, write_components};

/// Knobs for one [`Converter`]. `template` has no effect on
/// [`Converter::convert_yaml`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConverterOptions {
    /// Which module shape to generate.
    pub template: TemplateKind,
    /// How unusable attribute names are handled.
    pub attribute_style: AttributeStyle,
    /// Passed to the style normalizer.
    pub mode: NormalizeMode,
    /// Strip insignificant whitespace before building.
    pub minify: bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            template: TemplateKind::default(),
            attribute_style: AttributeStyle::default(),
            mode: NormalizeMode::default(),
            minify: true,
        }
    }
}

/// The result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// The generated Python module.
    pub code: String,
    /// Recoverable problems found in the input.
    pub diagnostics: Vec<Diagnostic>,
}

/// Converts HTML documents into htmldoom Python modules.
///
/// ```
/// use moodlmth_codegen::Converter;
///
/// let conversion = Converter::new()
///     .convert("<html><body>Hello</body></html>")
///     .unwrap();
/// assert!(conversion.code.contains("e.body()(\"Hello\")"));
/// assert!(conversion.diagnostics.is_empty());
/// ```
pub struct Converter {
    registry: TagRegistry,
    options: ConverterOptions,
    normalizer: Box<dyn StyleNormalizer>,
}

impl Converter {
    /// A converter with default options and the [`BasicNormalizer`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: TagRegistry::new(),
            options: ConverterOptions::default(),
            normalizer: Box::new(BasicNormalizer),
        }
    }

    /// Replace the options.
    #[must_use]
    pub const fn with_options(mut self, options: ConverterOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the style normalizer.
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: impl StyleNormalizer + 'static) -> Self {
        self.normalizer = Box::new(normalizer);
        self
    }

    /// The options in use.
    #[must_use]
    pub const fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// Tokenize and build the tree for `html` without assembling.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnknownDeclaration`] or
    /// [`ConvertError::TagClosedBeforeStarting`] for input the tree builder
    /// cannot recover from.
    pub fn build(&self, html: &str) -> Result<BuiltDocument, ConvertError> {
        let mut tokenizer = HTMLTokenizer::new(html.to_string());
        tokenizer.run();
        let parse_errors = tokenizer.parse_error_count();
        if parse_errors > 0 {
            log::debug!("Tokenizer recovered from {parse_errors} parse errors");
        }

        let mut tokens = tokenizer.into_tokens();
        if self.options.minify {
            tokens = minify(tokens);
        }

        let renderer = Renderer::new(self.options.attribute_style);
        TreeBuilder::new(&self.registry, renderer).build(tokens)
    }

    /// Convert `html` into a Python module.
    ///
    /// # Errors
    ///
    /// Returns the fatal errors of [`Converter::build`], and
    /// [`ConvertError::Normalize`] when the style normalizer fails.
    pub fn convert(&self, html: &str) -> Result<Conversion, ConvertError> {
        let built = self.build(html)?;
        let assembled = assemble(self.options.template, &built.captures);
        let code = self.normalizer.normalize(&assembled, self.options.mode)?;
        Ok(Conversion {
            code,
            diagnostics: built.diagnostics,
        })
    }

    /// Convert `html` into a YAML component tree, its raw text assets and
    /// the Python module that loads them.
    ///
    /// # Errors
    ///
    /// Returns the fatal errors of [`Converter::build`],
    /// [`ConvertError::Yaml`] when the tree cannot be serialized and
    /// [`ConvertError::Normalize`] when the style normalizer fails.
    pub fn convert_yaml(&self, html: &str) -> Result<YamlConversion, ConvertError> {
        let built = self.build(html)?;
        let (components, raw_assets) = write_components(&self.registry, &built)?;
        let module = loader_module(built.captures.doctype_text.as_deref(), &raw_assets);
        let module = self.normalizer.normalize(&module, self.options.mode)?;
        log::debug!(
            "Wrote {} raw asset(s) for the component tree",
            raw_assets.len()
        );
        Ok(YamlConversion {
            module,
            components,
            raw_assets,
            diagnostics: built.diagnostics,
        })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
