//! Small graph builders shared by the unit tests.

use crate::model::{iris, Literal, Term, Triple};
use crate::namespaces::NamespaceTable;
use crate::store::MemoryStore;
use crate::taxonomy::Taxonomy;

/// Full `pot:` IRI for `local`.
pub fn pot(local: &str) -> String {
    format!("{}{local}", iris::POT)
}

/// A store under construction.
#[derive(Default)]
pub struct Fixture {
    pub store: MemoryStore,
    blanks: usize,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Building`, `House subClassOf Building`, `floorCount` on `Building`.
    pub fn buildings() -> Self {
        let mut fx = Self::new();
        fx.class("Building");
        fx.class("House");
        fx.subclass("House", "Building");
        fx.property("floorCount", "Building");
        fx
    }

    pub fn triple(&mut self, subject: Term, predicate: &str, object: Term) {
        self.store.insert(Triple::new(subject, predicate, object));
    }

    pub fn link(&mut self, subject: &str, predicate: &str, object: Term) {
        self.triple(Term::iri(subject), predicate, object);
    }

    pub fn literal(&mut self, subject: &str, predicate: &str, literal: Literal) {
        self.link(subject, predicate, Term::Literal(literal));
    }

    pub fn type_term(&mut self, term: Term) {
        self.triple(term, iris::RDF_TYPE, Term::iri(iris::POT_CLASS));
    }

    pub fn class(&mut self, local: &str) {
        self.type_term(Term::iri(pot(local)));
    }

    pub fn subclass(&mut self, child: &str, parent: &str) {
        self.subclass_iri(child, &pot(parent));
    }

    pub fn subclass_iri(&mut self, child: &str, parent: &str) {
        self.link(&pot(child), iris::RDFS_SUBCLASS_OF, Term::iri(parent));
    }

    pub fn instance(&mut self, local: &str, class: &str) {
        self.link(&pot(local), iris::RDF_TYPE, Term::iri(pot(class)));
    }

    pub fn property(&mut self, local: &str, domain: &str) {
        self.link(&pot(local), iris::RDFS_DOMAIN, Term::iri(pot(domain)));
    }

    pub fn range(&mut self, property: &str, range: &str) {
        self.link(&pot(property), iris::RDFS_RANGE, Term::iri(range));
    }

    /// Attaches a structured `predicate` annotation with `scope` and `text`.
    pub fn scoped(&mut self, property: &str, predicate: &str, scope: Term, text: Term) {
        self.blanks += 1;
        let node = Term::blank(format!("a{}", self.blanks));
        self.link(&pot(property), predicate, node.clone());
        self.triple(node.clone(), iris::POT_SCOPE, scope);
        self.triple(node, iris::RDF_VALUE, text);
    }

    pub fn taxonomy(&self) -> Taxonomy<'_> {
        Taxonomy::new(&self.store, NamespaceTable::default())
    }
}
