use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::Result;
use crate::model::{iris, NodeKey, NodeKind, Term};
use crate::node::{real_targets, ClassNode, Node};
use crate::resolve::annotation;
use crate::taxonomy::Taxonomy;

/// A subject known to be a property.
#[derive(Clone)]
pub struct PropertyNode<'t> {
    taxonomy: &'t Taxonomy<'t>,
    term: Term,
    key: NodeKey,
}

impl<'t> PropertyNode<'t> {
    pub(crate) fn new(taxonomy: &'t Taxonomy<'t>, term: Term) -> Self {
        let key = NodeKey::new(&term, NodeKind::Property);
        Self {
            taxonomy,
            term,
            key,
        }
    }

    /// Classes this property declares as its domain.
    ///
    /// Dangling domain targets are dropped.
    pub fn domains(&self) -> Vec<ClassNode<'t>> {
        real_targets(self.taxonomy, &self.term, iris::RDFS_DOMAIN)
            .into_iter()
            .map(|t| ClassNode::new(self.taxonomy, t))
            .collect()
    }

    /// Value types declared with `rdfs:range`, in graph order.
    ///
    /// Datatype ranges such as `xsd:string` are kept even though they carry
    /// no facts of their own.
    pub fn supported_ranges(&self) -> Vec<ClassNode<'t>> {
        self.taxonomy
            .graph()
            .objects(&self.term, iris::RDFS_RANGE)
            .into_iter()
            .filter(|t| t.is_resource())
            .map(|t| ClassNode::new(self.taxonomy, t.clone()))
            .collect()
    }

    /// Returns true if any range is a resource described in the graph.
    pub fn has_object_range(&self) -> bool {
        let graph = self.taxonomy.graph();
        self.supported_ranges()
            .iter()
            .any(|range| graph.has_subject(range.term()))
    }

    /// Value restrictions keyed by restriction kind (e.g. `maxLength`).
    ///
    /// Read from the property itself and from any `pot:restriction` node it
    /// links to; later values overwrite earlier ones of the same kind.
    pub fn restrictions(&self) -> BTreeMap<String, String> {
        let graph = self.taxonomy.graph();
        let mut sources = vec![&self.term];
        sources.extend(
            graph
                .objects(&self.term, iris::POT_RESTRICTION)
                .into_iter()
                .filter(|t| t.is_resource()),
        );

        let mut out = BTreeMap::new();
        for source in sources {
            for triple in graph.triples_matching(Some(source), None, None) {
                if !iris::RESTRICTION_PREDICATES.contains(&triple.predicate.as_str()) {
                    continue;
                }
                if let (Some(lit), Some((_, kind))) = (
                    triple.object.as_literal(),
                    crate::model::split_at_separator(&triple.predicate),
                ) {
                    out.insert(kind.to_owned(), lit.value.clone());
                }
            }
        }
        out
    }

    /// Labels that apply when the property is viewed from `selected`.
    pub fn labels(&self, selected: Option<&ClassNode<'t>>) -> BTreeMap<String, String> {
        annotation::resolve(self, iris::RDFS_LABEL, selected)
    }

    /// Comments that apply when the property is viewed from `selected`.
    pub fn comments(&self, selected: Option<&ClassNode<'t>>) -> BTreeMap<String, String> {
        annotation::resolve(self, iris::RDFS_COMMENT, selected)
    }

    /// Attribute key used for this property in the context of `selected`.
    ///
    /// Defaults to the property title when no `pot:contextName` applies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedIdentifier`](crate::Error::MalformedIdentifier)
    /// if no context name applies and the identifier has no local name.
    pub fn context_name(&self, selected: Option<&ClassNode<'t>>) -> Result<String> {
        match annotation::resolve_value(self, iris::POT_CONTEXT_NAME, selected) {
            Some(name) => Ok(name),
            None => self.title(),
        }
    }
}

impl<'t> Node<'t> for PropertyNode<'t> {
    fn taxonomy(&self) -> &'t Taxonomy<'t> {
        self.taxonomy
    }

    fn term(&self) -> &Term {
        &self.term
    }

    fn key(&self) -> &NodeKey {
        &self.key
    }

    fn real_parents(&self) -> Vec<Self> {
        real_targets(self.taxonomy, &self.term, iris::RDFS_SUBPROPERTY_OF)
            .into_iter()
            .map(|t| PropertyNode::new(self.taxonomy, t))
            .collect()
    }
}

impl PartialEq for PropertyNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for PropertyNode<'_> {}

impl Hash for PropertyNode<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Debug for PropertyNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PropertyNode")
            .field(&self.term.identifier())
            .finish()
    }
}
