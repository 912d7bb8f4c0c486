//! Output tree layout.
//!
//! ```text
//! Vocabulary/index.jsonld
//! Vocabulary/Building.jsonld
//! Vocabulary/Building/index.jsonld
//! Vocabulary/Building/House.jsonld
//! Context/Building/House.jsonld
//! ClassDefinitions/Building/House.jsonld
//! Ontology/Building/House.jsonld
//! ```
//!
//! A lineage is a root-to-class list of titles. Every lineage of a class gets
//! its own copy of each document.

use std::path::PathBuf;

/// Top-level output directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Vocabulary documents and directory indexes.
    Vocabulary,
    /// Identity (JSON-LD context) documents.
    Context,
    /// Class definition documents.
    ClassDefinitions,
    /// Per-class ontology fragments.
    Ontology,
}

impl Section {
    /// Directory name of the section.
    #[must_use]
    pub fn dir(self) -> &'static str {
        match self {
            Section::Vocabulary => "Vocabulary",
            Section::Context => "Context",
            Section::ClassDefinitions => "ClassDefinitions",
            Section::Ontology => "Ontology",
        }
    }
}

/// Relative path of a class document such as `Vocabulary/Building/House.jsonld`.
#[must_use]
pub fn document_path(section: Section, lineage: &[String]) -> PathBuf {
    let mut path = PathBuf::from(section.dir());
    if let Some((title, ancestors)) = lineage.split_last() {
        path.extend(ancestors);
        path.push(format!("{title}.jsonld"));
    }
    path
}

/// Relative path of the index listing the children of `lineage`.
#[must_use]
pub fn index_path(lineage: &[String]) -> PathBuf {
    let mut path = PathBuf::from(Section::Vocabulary.dir());
    path.extend(lineage);
    path.push("index.jsonld");
    path
}

/// Relative path of the root index.
#[must_use]
pub fn root_index_path() -> PathBuf {
    index_path(&[])
}

/// Public URL of a class document, without the `.jsonld` extension.
#[must_use]
pub fn url(base_url: &str, section: Section, lineage: &[String]) -> String {
    let base = base_url.trim_end_matches('/');
    if lineage.is_empty() {
        format!("{base}/{}/", section.dir())
    } else {
        format!("{base}/{}/{}", section.dir(), lineage.join("/"))
    }
}

/// The lineage encoded in a canonical id (`pot:Building/House`).
#[must_use]
pub fn canonical_lineage(canonical_id: &str) -> Vec<String> {
    let path = canonical_id
        .split_once(':')
        .map_or(canonical_id, |(_, path)| path);
    path.split('/').map(str::to_owned).collect()
}
