//! Taxonomy resolution over an RDF-style triple store.
//!
//! The `pot-ontology` crate reads a class/property taxonomy from a queryable
//! [`Graph`] and resolves, for every class, its real parents, its
//! transitively inherited properties, its descendants, its canonical
//! hierarchical identifier and the labels and comments that apply to each of
//! its properties in that class's context.
//!
//! # Entry Point
//!
//! ```
//! use pot_ontology::{iris, MemoryStore, NamespaceTable, Node, Taxonomy, Term, Triple};
//!
//! let class = |local: &str| Term::iri(format!("{}{local}", iris::POT));
//! let mut store = MemoryStore::new();
//! store.insert(Triple::new(class("Building"), iris::RDF_TYPE, Term::iri(iris::POT_CLASS)));
//! store.insert(Triple::new(class("House"), iris::RDF_TYPE, Term::iri(iris::POT_CLASS)));
//! store.insert(Triple::new(class("House"), iris::RDFS_SUBCLASS_OF, class("Building")));
//!
//! let taxonomy = Taxonomy::new(&store, NamespaceTable::default());
//! let house = taxonomy.class(&format!("{}House", iris::POT));
//! assert_eq!(house.canonical_id().ok().as_deref(), Some("pot:Building/House"));
//! ```
//!
//! # Batch resolution
//!
//! [`resolve_all`] resolves every class independently and reports failures
//! per class, so one malformed identifier does not abort the run.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod model;
pub mod namespaces;
pub mod node;
#[cfg(feature = "parsers")]
pub mod parser;
pub mod record;
pub mod resolve;
pub mod settings;
pub mod store;
pub mod taxonomy;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use model::{iris, Literal, NodeKey, NodeKind, Term, Triple};
pub use namespaces::NamespaceTable;
pub use node::{ClassNode, Node, PropertyNode};
pub use record::{
    class_record, property_record, resolve_all, ClassFailure, ClassRecord, PropertyRecord,
    Resolution,
};
pub use settings::Settings;
pub use store::{Graph, MemoryStore};
pub use taxonomy::Taxonomy;
