//! The resolution context: a graph plus the namespace table used to read it.

use std::collections::HashSet;

use crate::model::{iris, Term};
use crate::namespaces::NamespaceTable;
use crate::node::{ClassNode, PropertyNode};
use crate::store::Graph;

/// Read-only view over a loaded graph.
///
/// Every node borrows the taxonomy it was created from; nodes are cheap
/// value-like wrappers and may be created freely during resolution.
pub struct Taxonomy<'g> {
    graph: &'g dyn Graph,
    namespaces: NamespaceTable,
}

impl<'g> Taxonomy<'g> {
    /// Creates a taxonomy over `graph` using `namespaces` for compaction.
    pub fn new(graph: &'g dyn Graph, namespaces: NamespaceTable) -> Self {
        Self { graph, namespaces }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &'g dyn Graph {
        self.graph
    }

    /// The namespace table.
    pub fn namespaces(&self) -> &NamespaceTable {
        &self.namespaces
    }

    /// Returns every subject typed as a class, deduplicated, in graph order.
    pub fn classes(&self) -> Vec<ClassNode<'_>> {
        let mut seen = HashSet::new();
        self.graph
            .triples_matching(None, Some(iris::RDF_TYPE), None)
            .into_iter()
            .filter(|t| matches!(&t.object, Term::Iri(iri) if iris::CLASS_TYPES.contains(&iri.as_str())))
            .filter(|t| seen.insert(&t.subject))
            .map(|t| ClassNode::new(self, t.subject.clone()))
            .collect()
    }

    /// Returns every subject that declares a domain, deduplicated, in graph order.
    pub fn properties(&self) -> Vec<PropertyNode<'_>> {
        let mut seen = HashSet::new();
        self.graph
            .triples_matching(None, Some(iris::RDFS_DOMAIN), None)
            .into_iter()
            .filter(|t| seen.insert(&t.subject))
            .map(|t| PropertyNode::new(self, t.subject.clone()))
            .collect()
    }

    /// Wraps the subject `iri` as a class node.
    pub fn class(&self, iri: &str) -> ClassNode<'_> {
        ClassNode::new(self, Term::iri(iri))
    }

    /// Wraps the subject `iri` as a property node.
    pub fn property(&self, iri: &str) -> PropertyNode<'_> {
        PropertyNode::new(self, Term::iri(iri))
    }
}
