//! Triple store abstraction and the in-memory store.
//!
//! The resolvers only ever read the graph through [`Graph::triples_matching`],
//! a single wildcard pattern query. [`MemoryStore`] is the bundled backend:
//! triples keep their insertion order, so "graph iteration order" is
//! deterministic for a given input document.

use std::collections::{HashMap, HashSet};

use crate::model::{Term, Triple};

/// A read-only, queryable set of triples.
pub trait Graph {
    /// Returns every triple matching the pattern, in graph order.
    ///
    /// `None` in any position is a wildcard.
    fn triples_matching(
        &self,
        subject: Option<&Term>,
        predicate: Option<&str>,
        object: Option<&Term>,
    ) -> Vec<&Triple>;

    /// Returns true if the term is the subject of at least one triple.
    fn has_subject(&self, subject: &Term) -> bool {
        !self.triples_matching(Some(subject), None, None).is_empty()
    }

    /// Returns the objects of all `(subject, predicate, ?)` triples.
    fn objects(&self, subject: &Term, predicate: &str) -> Vec<&Term> {
        self.triples_matching(Some(subject), Some(predicate), None)
            .into_iter()
            .map(|t| &t.object)
            .collect()
    }

    /// Returns the subjects of all `(?, predicate, object)` triples.
    fn subjects(&self, predicate: &str, object: &Term) -> Vec<&Term> {
        self.triples_matching(None, Some(predicate), Some(object))
            .into_iter()
            .map(|t| &t.subject)
            .collect()
    }
}

/// Insertion-ordered in-memory triple store with per-position indexes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
    by_subject: HashMap<Term, Vec<usize>>,
    by_predicate: HashMap<String, Vec<usize>>,
    by_object: HashMap<Term, Vec<usize>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple. Returns false if the store already held it.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.seen.contains(&triple) {
            return false;
        }
        let idx = self.triples.len();
        self.by_subject
            .entry(triple.subject.clone())
            .or_default()
            .push(idx);
        self.by_predicate
            .entry(triple.predicate.clone())
            .or_default()
            .push(idx);
        self.by_object
            .entry(triple.object.clone())
            .or_default()
            .push(idx);
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// Number of distinct triples held.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the store holds no triples.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    fn candidates(
        &self,
        subject: Option<&Term>,
        predicate: Option<&str>,
        object: Option<&Term>,
    ) -> Option<&[usize]> {
        static EMPTY: &[usize] = &[];
        let lists = [
            subject.map(|s| self.by_subject.get(s).map_or(EMPTY, Vec::as_slice)),
            predicate.map(|p| self.by_predicate.get(p).map_or(EMPTY, Vec::as_slice)),
            object.map(|o| self.by_object.get(o).map_or(EMPTY, Vec::as_slice)),
        ];
        lists.into_iter().flatten().min_by_key(|list| list.len())
    }
}

impl Extend<Triple> for MemoryStore {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            self.insert(triple);
        }
    }
}

impl FromIterator<Triple> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut store = MemoryStore::new();
        store.extend(iter);
        store
    }
}

impl Graph for MemoryStore {
    fn triples_matching(
        &self,
        subject: Option<&Term>,
        predicate: Option<&str>,
        object: Option<&Term>,
    ) -> Vec<&Triple> {
        let matches = |t: &Triple| {
            subject.map_or(true, |s| &t.subject == s)
                && predicate.map_or(true, |p| t.predicate == p)
                && object.map_or(true, |o| &t.object == o)
        };
        match self.candidates(subject, predicate, object) {
            // Index lists are built in insertion order, so graph order holds.
            Some(indexes) => indexes
                .iter()
                .map(|&i| &self.triples[i])
                .filter(|t| matches(t))
                .collect(),
            None => self.triples.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::iris;

    fn sample() -> MemoryStore {
        [
            Triple::new(Term::iri("urn:a"), iris::RDFS_SUBCLASS_OF, Term::iri("urn:b")),
            Triple::new(Term::iri("urn:c"), iris::RDFS_SUBCLASS_OF, Term::iri("urn:b")),
            Triple::new(Term::iri("urn:b"), iris::RDFS_LABEL, Term::literal("B")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn duplicate_triples_are_ignored() {
        let mut store = sample();
        let dup = Triple::new(Term::iri("urn:a"), iris::RDFS_SUBCLASS_OF, Term::iri("urn:b"));
        assert!(!store.insert(dup));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn wildcard_matches_everything_in_order() {
        let store = sample();
        let all = store.triples_matching(None, None, None);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].subject, Term::iri("urn:a"));
        assert_eq!(all[2].subject, Term::iri("urn:b"));
    }

    #[test]
    fn object_pattern_preserves_graph_order() {
        let store = sample();
        let subjects = store.subjects(iris::RDFS_SUBCLASS_OF, &Term::iri("urn:b"));
        assert_eq!(subjects, vec![&Term::iri("urn:a"), &Term::iri("urn:c")]);
    }

    #[test]
    fn combined_pattern_filters_all_positions() {
        let store = sample();
        let hits = store.triples_matching(
            Some(&Term::iri("urn:c")),
            Some(iris::RDFS_SUBCLASS_OF),
            Some(&Term::iri("urn:b")),
        );
        assert_eq!(hits.len(), 1);
        assert!(store
            .triples_matching(Some(&Term::iri("urn:c")), Some(iris::RDFS_LABEL), None)
            .is_empty());
    }

    #[test]
    fn has_subject_ignores_object_only_terms() {
        let store = sample();
        assert!(store.has_subject(&Term::iri("urn:b")));
        assert!(!store.has_subject(&Term::iri("urn:missing")));
    }
}
