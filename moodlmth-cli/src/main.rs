//! moodlmth CLI: convert an HTML page into htmldoom Python source.
//!
//! Run with: cargo run --bin moodlmth -- page.html

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use moodlmth_codegen::{
    ASSETS_DIR, AttributeStyle, BasicNormalizer, BlackNormalizer, COMPONENTS_FILE, Converter,
    ConverterOptions, Diagnostic, NormalizeMode, TemplateKind, YamlConversion,
};
use moodlmth_common::source::load_target;
use moodlmth_common::warning::WarningLog;
use serde::Serialize;

/// Which style normalizer formats the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Formatter {
    /// Built-in whitespace tidy-up.
    Basic,
    /// The external `black` formatter.
    Black,
}

/// What the page is converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Syntax {
    /// One Python module of nested element calls.
    Python,
    /// A YAML component tree and raw text files under `assets/`, plus a
    /// Python module that loads them.
    Yaml,
}

/// moodlmth: raw HTML to htmldoom Python code
#[derive(Parser, Debug)]
#[command(name = "moodlmth")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Convert a local page to stdout
    moodlmth index.html

    # Fetch a page and write a layout class
    moodlmth -t layout -o layout.py https://example.com

    # Format with black and check the result
    moodlmth --formatter black index.html

    # Write app.py plus assets/components.yml next to it
    moodlmth -s yaml -o app.py index.html
"#)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Path to an HTML file, or an http(s) URL
    #[arg(value_name = "FILE|URL")]
    target: String,

    /// Output syntax
    #[arg(short, long, value_enum, default_value_t = Syntax::Python)]
    syntax: Syntax,

    /// Shape of the generated module: flat, layout or pipeline
    /// (python syntax only)
    #[arg(short, long, default_value_t = TemplateKind::Flat)]
    template: TemplateKind,

    /// Write the result to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    outfile: Option<PathBuf>,

    /// Skip validation of the generated code
    #[arg(short, long)]
    fast: bool,

    /// Style normalizer to run on the generated code
    #[arg(long, value_enum, default_value_t = Formatter::Basic)]
    formatter: Formatter,

    /// Executable to run for --formatter black
    #[arg(long, value_name = "PROGRAM", default_value = "black")]
    black_path: String,

    /// Rename unusable attribute names (data-x to data_x, type to type_)
    /// instead of passing them as a **{...} mapping
    #[arg(long)]
    rename_attributes: bool,

    /// Keep whitespace-only text between tags
    #[arg(long)]
    no_minify: bool,

    /// Fail if the input needed any recovery
    #[arg(long)]
    strict: bool,

    /// Print the whole conversion as JSON instead of writing code
    #[arg(long)]
    json: bool,

    /// Print debug messages
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn options(&self) -> ConverterOptions {
        ConverterOptions {
            template: self.template,
            attribute_style: if self.rename_attributes {
                AttributeStyle::Rename
            } else {
                AttributeStyle::Expand
            },
            mode: if self.fast {
                NormalizeMode::Fast
            } else {
                NormalizeMode::Strict
            },
            minify: !self.no_minify,
        }
    }

    fn converter(&self) -> Converter {
        let converter = Converter::new().with_options(self.options());
        match self.formatter {
            Formatter::Basic => converter.with_normalizer(BasicNormalizer),
            Formatter::Black => converter.with_normalizer(BlackNormalizer::new(&self.black_path)),
        }
    }
}

fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn report(diagnostics: &[Diagnostic]) {
    let mut warnings = WarningLog::new();
    for diagnostic in diagnostics {
        let _ = warnings.warn("Tree Builder", &diagnostic.key(), &diagnostic.message);
    }
}

fn check_strict(cli: &Cli, diagnostics: &[Diagnostic]) -> Result<()> {
    if !cli.json {
        report(diagnostics);
    }
    if cli.strict && !diagnostics.is_empty() {
        bail!(
            "{} problem(s) found in {} (--strict)",
            diagnostics.len(),
            cli.target
        );
    }
    Ok(())
}

fn to_json(value: &impl Serialize) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(value).context("Failed to serialize the conversion")?;
    json.push('\n');
    Ok(json)
}

/// `assets/` beside the output file, or in the working directory.
fn assets_dir(outfile: Option<&Path>) -> PathBuf {
    outfile
        .and_then(Path::parent)
        .map_or_else(|| PathBuf::from(ASSETS_DIR), |parent| parent.join(ASSETS_DIR))
}

fn write_assets(dir: &Path, conversion: &YamlConversion) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let components = dir.join(COMPONENTS_FILE);
    fs::write(&components, &conversion.components)
        .with_context(|| format!("Failed to write {}", components.display()))?;
    for asset in &conversion.raw_assets {
        let path = dir.join(asset.file_name());
        fs::write(&path, &asset.content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    log::debug!(
        "Wrote {} and {} raw asset(s) to {}",
        COMPONENTS_FILE,
        conversion.raw_assets.len(),
        dir.display()
    );
    Ok(())
}

fn run(cli: &Cli, html: &str) -> Result<String> {
    let converter = cli.converter();
    match cli.syntax {
        Syntax::Python => {
            let conversion = converter
                .convert(html)
                .with_context(|| format!("Failed to convert {}", cli.target))?;
            check_strict(cli, &conversion.diagnostics)?;
            if cli.json {
                to_json(&conversion)
            } else {
                Ok(conversion.code)
            }
        }
        Syntax::Yaml => {
            let conversion = converter
                .convert_yaml(html)
                .with_context(|| format!("Failed to convert {}", cli.target))?;
            check_strict(cli, &conversion.diagnostics)?;
            if cli.json {
                return to_json(&conversion);
            }
            write_assets(&assets_dir(cli.outfile.as_deref()), &conversion)?;
            Ok(conversion.module)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let html = load_target(&cli.target).with_context(|| format!("Failed to load {}", cli.target))?;
    log::debug!("Loaded {} bytes from {}", html.len(), cli.target);

    let output = run(&cli, &html)?;
    match &cli.outfile {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{output}"),
    }
    Ok(())
}
