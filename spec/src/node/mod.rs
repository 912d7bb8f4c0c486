//! Class and property nodes.
//!
//! A node is a thin wrapper around a subject term and the [`Taxonomy`] it was
//! read from. All derived attributes are computed on demand by querying the
//! graph; nothing is cached and nothing is mutated.
//!
//! Equality and hashing use the node's [`NodeKey`], so sets of nodes reached
//! through different traversal paths deduplicate correctly.

mod class;
mod property;

use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::warn;

pub use class::ClassNode;
pub use property::PropertyNode;

use crate::error::{Error, Result};
use crate::model::{iris, NodeKey, Term};
use crate::resolve::identifier;
use crate::taxonomy::Taxonomy;

/// Behavior shared by class and property nodes.
pub trait Node<'t>: Sized {
    /// The taxonomy this node reads from.
    fn taxonomy(&self) -> &'t Taxonomy<'t>;

    /// The wrapped subject term.
    fn term(&self) -> &Term;

    /// Value identity of this node.
    fn key(&self) -> &NodeKey;

    /// Declared parents that exist as subjects in the graph, excluding self.
    ///
    /// Order follows the graph; index 0 is the canonical parent.
    fn real_parents(&self) -> Vec<Self>;

    /// The full identifier (IRI, or `_:label` for blank nodes).
    fn iri(&self) -> String {
        self.term().identifier()
    }

    /// Splits the identifier into `(prefix, local name)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedIdentifier`] if the identifier has no
    /// namespace separator.
    fn split_identifier(&self) -> Result<(String, String)> {
        match self.term() {
            Term::Iri(iri) => self.taxonomy().namespaces().split(iri),
            other => Err(Error::malformed(other.identifier())),
        }
    }

    /// Local name of the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedIdentifier`] if the identifier has no
    /// namespace separator.
    fn title(&self) -> Result<String> {
        self.split_identifier().map(|(_, local)| local)
    }

    /// Prefixed form of the identifier (e.g. `pot:House`).
    ///
    /// Falls back to the full identifier when it cannot be split. This is
    /// the string representation used for deterministic ordering.
    fn compact_id(&self) -> String {
        match self.split_identifier() {
            Ok((prefix, local)) => format!("{prefix}:{local}"),
            Err(_) => self.iri(),
        }
    }

    /// Hierarchy-encoding identifier built from the first-parent chain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedIdentifier`] if this node or any node on
    /// its first-parent chain has a malformed identifier.
    fn canonical_id(&self) -> Result<String> {
        identifier::canonical_id(self)
    }

    /// All root-to-self title paths, following every real parent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedIdentifier`] if any node on a path has a
    /// malformed identifier.
    fn lineages(&self) -> Result<BTreeSet<Vec<String>>> {
        identifier::lineages(self)
    }

    /// Compact ids of the subject's `rdf:type` objects, in graph order.
    fn type_ids(&self) -> Vec<String> {
        let taxonomy = self.taxonomy();
        taxonomy
            .graph()
            .objects(self.term(), iris::RDF_TYPE)
            .into_iter()
            .filter_map(Term::as_iri)
            .map(|iri| taxonomy.namespaces().compact(iri).unwrap_or_else(|| iri.to_owned()))
            .collect()
    }

    /// First `owl:versionInfo` literal, if any.
    fn version_info(&self) -> Option<String> {
        first_literal(self.taxonomy(), self.term(), iris::OWL_VERSION_INFO)
    }

    /// First `vs:term_status` literal, if any.
    fn term_status(&self) -> Option<String> {
        first_literal(self.taxonomy(), self.term(), iris::VS_TERM_STATUS)
    }
}

/// Resolves `(term, predicate, ?)` targets the way real parents are resolved.
///
/// Targets must be resources with at least one fact of their own and must
/// differ from `term`. Dangling targets are logged and dropped.
pub(crate) fn real_targets(taxonomy: &Taxonomy<'_>, term: &Term, predicate: &str) -> Vec<Term> {
    let graph = taxonomy.graph();
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for target in graph.objects(term, predicate) {
        if target == term || !seen.insert(target) {
            continue;
        }
        if !target.is_resource() || !graph.has_subject(target) {
            warn!(
                subject = %term,
                predicate,
                target = %target,
                "dangling reference treated as absent"
            );
            continue;
        }
        out.push(target.clone());
    }
    out
}

/// Collects the literal objects of `(term, predicate, ?)` keyed by language.
///
/// Later literals overwrite earlier ones with the same language tag; untagged
/// literals use the empty tag.
pub(crate) fn literals_by_language(
    taxonomy: &Taxonomy<'_>,
    term: &Term,
    predicate: &str,
) -> BTreeMap<String, String> {
    taxonomy
        .graph()
        .objects(term, predicate)
        .into_iter()
        .filter_map(Term::as_literal)
        .map(|lit| (lit.language.clone().unwrap_or_default(), lit.value.clone()))
        .collect()
}

fn first_literal(taxonomy: &Taxonomy<'_>, term: &Term, predicate: &str) -> Option<String> {
    taxonomy
        .graph()
        .objects(term, predicate)
        .into_iter()
        .find_map(Term::as_literal)
        .map(|lit| lit.value.clone())
}

pub(crate) fn sort_and_dedup<'t, N: Node<'t>>(mut nodes: Vec<N>) -> Vec<N> {
    let mut seen = HashSet::new();
    nodes.retain(|n| seen.insert(n.key().clone()));
    nodes.sort_by_cached_key(|n| (n.compact_id(), n.iri()));
    nodes
}
