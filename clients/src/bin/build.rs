//! `pot-build`: Resolves a taxonomy and writes its published document tree.
//!
//! **Outputs** (below `--out`):
//! - `Vocabulary/<lineage>.jsonld` and `Vocabulary/.../index.jsonld`
//! - `Context/<lineage>.jsonld`
//! - `ClassDefinitions/<lineage>.jsonld`
//! - `Ontology/<lineage>.jsonld`
//! - with `--redirects`, a Jekyll `.md` redirect stub beside each document
//!
//! **Usage:**
//! ```text
//! pot-build <INPUT> [--format turtle|ntriples|jsonld] [--out <dir>] [--config <file>] [--redirects]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pot_codegen::redirect::write_redirects;
use pot_ontology::parser::{self, Format};
use pot_ontology::{Settings, Taxonomy};

/// Input serialization.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputFormat {
    /// Turtle.
    Turtle,
    /// N-Triples.
    Ntriples,
    /// JSON-LD with an inline context.
    Jsonld,
}

impl From<InputFormat> for Format {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Turtle => Format::Turtle,
            InputFormat::Ntriples => Format::NTriples,
            InputFormat::Jsonld => Format::JsonLd,
        }
    }
}

/// Build the published documents of a taxonomy.
#[derive(Parser)]
#[command(name = "pot-build", about = "Build taxonomy vocabulary, context and class definition documents")]
struct Args {
    /// Taxonomy source file (`.ttl`, `.nt` or `.jsonld`).
    input: PathBuf,

    /// Input format. Guessed from the file extension when omitted.
    #[arg(long, value_enum)]
    format: Option<InputFormat>,

    /// Output directory for generated documents.
    #[arg(long, default_value = "public")]
    out: PathBuf,

    /// Settings file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write Jekyll redirect stubs.
    #[arg(long)]
    redirects: bool,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("pot_build=info".parse()?)
                .add_directive("pot_codegen=info".parse()?)
                .add_directive("pot_ontology=warn".parse()?),
        )
        .init();
    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings: {}", path.display()))?;
    Settings::from_toml_str(&source)
        .with_context(|| format!("Invalid settings: {}", path.display()))
}

fn main() -> Result<()> {
    init_tracing()?;
    let args = Args::parse();

    let format = match args.format {
        Some(format) => Format::from(format),
        None => Format::from_path(&args.input).with_context(|| {
            format!(
                "Cannot guess the format of {}; pass --format",
                args.input.display()
            )
        })?,
    };
    let settings = load_settings(args.config.as_deref())?;

    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let store = parser::load_str(&source, format)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;
    info!(triples = store.len(), format = format.name(), "taxonomy loaded");

    let taxonomy = Taxonomy::new(&store, settings.namespace_table());
    let report = pot_codegen::generate(&taxonomy, &settings, &args.out)?;

    println!(
        "Taxonomy {}: {} classes, {} properties",
        args.input.display(),
        report.class_count,
        report.property_count
    );
    println!(
        "  Written: {} documents to {} ({} vocabularies, {} contexts, {} class definitions, {} ontology fragments, {} indexes)",
        report.documents_written,
        args.out.display(),
        report.vocabulary_count,
        report.identity_count,
        report.definition_count,
        report.ontology_count,
        report.index_count
    );

    if args.redirects {
        let stubs = write_redirects(&args.out)?;
        println!("  Written: {stubs} redirect stubs");
    }

    for failure in &report.failures {
        println!("  Failed: {}: {}", failure.iri, failure.error);
    }
    if report.class_count > 0 && report.failures.len() == report.class_count {
        bail!("No class could be resolved");
    }
    Ok(())
}
