//! Document builders for a resolved taxonomy.
//!
//! Reads classes and properties through `pot_ontology` and assembles the
//! published document tree: per-class vocabularies, identity contexts,
//! class definitions and ontology fragments, plus the directory indexes that
//! group classes by lineage. [`build`] is pure; [`generate`] builds and writes to disk.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod context;
pub mod definition;
pub mod directory;
pub mod emit;
pub mod identity;
pub mod layout;
pub mod ontology;
pub mod redirect;
pub mod vocabulary;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::Value;
use tracing::{debug, info};

use pot_ontology::{ClassFailure, ClassNode, Node, Settings, Taxonomy};

use layout::Section;

/// What a generated document describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// `Vocabulary/<lineage>.jsonld`.
    Vocabulary,
    /// `Context/<lineage>.jsonld`.
    Identity,
    /// `ClassDefinitions/<lineage>.jsonld`.
    Definition,
    /// `Vocabulary/<lineage>/index.jsonld` and the root index.
    Index,
    /// `Ontology/<canonical lineage>.jsonld`.
    Ontology,
}

/// One document and its path relative to the output directory.
#[derive(Debug, Clone)]
pub struct Document {
    /// Document kind.
    pub kind: DocumentKind,
    /// Path relative to the output directory.
    pub path: PathBuf,
    /// JSON-LD body.
    pub body: Value,
}

/// Every document built for a taxonomy, plus the classes that failed.
#[derive(Debug, Default)]
pub struct DocumentSet {
    /// Built documents, in class order.
    pub documents: Vec<Document>,
    /// Classes for which no documents were built.
    pub failures: Vec<ClassFailure>,
}

impl DocumentSet {
    /// Number of documents of `kind`.
    #[must_use]
    pub fn count(&self, kind: DocumentKind) -> usize {
        self.documents.iter().filter(|d| d.kind == kind).count()
    }

    fn push(&mut self, kind: DocumentKind, path: PathBuf, body: Value) {
        self.documents.push(Document { kind, path, body });
    }
}

/// Report of what was generated.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Number of classes in the taxonomy.
    pub class_count: usize,
    /// Number of properties in the taxonomy.
    pub property_count: usize,
    /// Vocabulary documents written.
    pub vocabulary_count: usize,
    /// Identity documents written.
    pub identity_count: usize,
    /// Class definition documents written.
    pub definition_count: usize,
    /// Index documents written.
    pub index_count: usize,
    /// Ontology fragments written.
    pub ontology_count: usize,
    /// Total documents written.
    pub documents_written: usize,
    /// Classes that could not be resolved.
    pub failures: Vec<ClassFailure>,
}

/// Builds every document for `taxonomy` without touching the file system.
///
/// Classes are built independently: a class with a malformed identifier is
/// recorded in [`DocumentSet::failures`] and contributes no documents.
#[must_use]
pub fn build(taxonomy: &Taxonomy<'_>, settings: &Settings) -> DocumentSet {
    let mut set = DocumentSet::default();
    let mut roots = BTreeSet::new();

    for class in taxonomy.classes() {
        let mut documents = DocumentSet::default();
        match build_class(&class, settings, &mut documents) {
            Ok(()) => {
                if class.real_parents().is_empty() {
                    if let Ok(title) = class.title() {
                        roots.insert((class.compact_id(), title));
                    }
                }
                set.documents.append(&mut documents.documents);
            }
            Err(error) => set.failures.push(ClassFailure {
                iri: class.iri(),
                error,
            }),
        }
    }

    let roots: Vec<(String, String)> = roots.into_iter().collect();
    set.push(
        DocumentKind::Index,
        layout::root_index_path(),
        directory::root_index(&roots, settings, taxonomy.namespaces()),
    );
    set
}

fn build_class(
    class: &ClassNode<'_>,
    settings: &Settings,
    set: &mut DocumentSet,
) -> pot_ontology::Result<()> {
    let lineages = class.lineages()?;
    let excluded = settings.is_excluded(class);

    let vocabulary = vocabulary::build(class, settings)?;
    let identity = (!excluded)
        .then(|| identity::build(class, settings))
        .transpose()?;
    let definition = (!excluded)
        .then(|| definition::build(class, settings))
        .transpose()?;

    for lineage in &lineages {
        let lineage = lineage.as_slice();
        set.push(
            DocumentKind::Vocabulary,
            layout::document_path(Section::Vocabulary, lineage),
            vocabulary.clone(),
        );
        if let Some(identity) = &identity {
            set.push(
                DocumentKind::Identity,
                layout::document_path(Section::Context, lineage),
                identity.clone(),
            );
        }
        if let Some(definition) = &definition {
            set.push(
                DocumentKind::Definition,
                layout::document_path(Section::ClassDefinitions, lineage),
                definition.clone(),
            );
        }
        if class.has_children() {
            set.push(
                DocumentKind::Index,
                layout::index_path(lineage),
                directory::class_index(class, lineage, settings),
            );
        }
    }
    set.push(
        DocumentKind::Ontology,
        layout::document_path(
            Section::Ontology,
            &layout::canonical_lineage(&class.canonical_id()?),
        ),
        ontology::build(class, settings),
    );
    debug!(class = %class.compact_id(), lineages = lineages.len(), excluded, "class built");
    Ok(())
}

/// Builds every document for `taxonomy` and writes them below `out_dir`.
///
/// # Errors
///
/// Returns an error if a document cannot be written. Class-level resolution
/// failures are reported in [`GenerationReport::failures`] instead.
pub fn generate(taxonomy: &Taxonomy<'_>, settings: &Settings, out_dir: &Path) -> Result<GenerationReport> {
    let set = build(taxonomy, settings);
    let documents_written = emit::write_all(out_dir, &set)?;

    let report = GenerationReport {
        class_count: taxonomy.classes().len(),
        property_count: taxonomy.properties().len(),
        vocabulary_count: set.count(DocumentKind::Vocabulary),
        identity_count: set.count(DocumentKind::Identity),
        definition_count: set.count(DocumentKind::Definition),
        index_count: set.count(DocumentKind::Index),
        ontology_count: set.count(DocumentKind::Ontology),
        documents_written,
        failures: set.failures,
    };
    info!(
        documents = report.documents_written,
        failures = report.failures.len(),
        out = %out_dir.display(),
        "generation finished"
    );
    Ok(report)
}
