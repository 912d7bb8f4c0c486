use std::collections::{BTreeMap, HashSet, VecDeque};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::model::{iris, NodeKey, NodeKind, Term};
use crate::node::{literals_by_language, real_targets, sort_and_dedup, Node, PropertyNode};
use crate::resolve::inheritance;
use crate::taxonomy::Taxonomy;

/// A subject known to be a class.
#[derive(Clone)]
pub struct ClassNode<'t> {
    taxonomy: &'t Taxonomy<'t>,
    term: Term,
    key: NodeKey,
}

impl<'t> ClassNode<'t> {
    pub(crate) fn new(taxonomy: &'t Taxonomy<'t>, term: Term) -> Self {
        let key = NodeKey::new(&term, NodeKind::Class);
        Self {
            taxonomy,
            term,
            key,
        }
    }

    /// Direct subclasses: subjects declaring this class as a parent.
    pub fn children(&self) -> Vec<ClassNode<'t>> {
        let mut seen = HashSet::new();
        self.taxonomy
            .graph()
            .subjects(iris::RDFS_SUBCLASS_OF, &self.term)
            .into_iter()
            .filter(|s| **s != self.term && seen.insert(*s))
            .map(|s| ClassNode::new(self.taxonomy, s.clone()))
            .collect()
    }

    /// Transitive closure over incoming `rdfs:subClassOf` and `rdf:type` edges.
    ///
    /// Returned in breadth-first discovery order. Never contains `self`, and
    /// terminates on cyclic graphs.
    pub fn descendants(&self) -> Vec<ClassNode<'t>> {
        let graph = self.taxonomy.graph();
        let mut visited: HashSet<NodeKey> = HashSet::from([self.key.clone()]);
        let mut queue: VecDeque<Term> = VecDeque::from([self.term.clone()]);
        let mut out = Vec::new();

        while let Some(current) = queue.pop_front() {
            let incoming = graph
                .subjects(iris::RDFS_SUBCLASS_OF, &current)
                .into_iter()
                .chain(graph.subjects(iris::RDF_TYPE, &current));
            for subject in incoming {
                let node = ClassNode::new(self.taxonomy, subject.clone());
                if visited.insert(node.key.clone()) {
                    queue.push_back(subject.clone());
                    out.push(node);
                }
            }
        }
        out
    }

    /// Every ancestor reachable through real parents, breadth-first.
    ///
    /// Each level is fully expanded before the next, across all real parents.
    pub fn ancestors(&self) -> Vec<ClassNode<'t>> {
        let mut visited: HashSet<NodeKey> = HashSet::from([self.key.clone()]);
        let mut frontier = self.real_parents();
        let mut out = Vec::new();
        while !frontier.is_empty() {
            let mut next = Vec::new();
            for parent in frontier {
                if visited.insert(parent.key.clone()) {
                    next.extend(parent.real_parents());
                    out.push(parent);
                }
            }
            frontier = next;
        }
        out
    }

    /// Properties whose domain is this class, sorted by compact id.
    pub fn declared_properties(&self) -> Vec<PropertyNode<'t>> {
        let props = self
            .taxonomy
            .graph()
            .subjects(iris::RDFS_DOMAIN, &self.term)
            .into_iter()
            .map(|s| PropertyNode::new(self.taxonomy, s.clone()))
            .collect();
        sort_and_dedup(props)
    }

    /// Every property usable on instances of this class, own and inherited.
    pub fn properties(&self) -> Vec<PropertyNode<'t>> {
        inheritance::properties(self)
    }

    /// Literal `rdfs:label`s of the class, keyed by language.
    pub fn labels(&self) -> BTreeMap<String, String> {
        literals_by_language(self.taxonomy, &self.term, iris::RDFS_LABEL)
    }

    /// Literal `rdfs:comment`s of the class, keyed by language.
    pub fn comments(&self) -> BTreeMap<String, String> {
        literals_by_language(self.taxonomy, &self.term, iris::RDFS_COMMENT)
    }

    /// Returns true if the class has at least one direct subclass.
    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }
}

impl<'t> Node<'t> for ClassNode<'t> {
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
        real_targets(self.taxonomy, &self.term, iris::RDFS_SUBCLASS_OF)
            .into_iter()
            .map(|t| ClassNode::new(self.taxonomy, t))
            .collect()
    }
}

impl PartialEq for ClassNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ClassNode<'_> {}

impl Hash for ClassNode<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Debug for ClassNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClassNode").field(&self.term.identifier()).finish()
    }
}
