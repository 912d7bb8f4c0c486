//! Core graph model types.
//!
//! These types represent the facts of an RDF-style graph as owned Rust data.
//! A [`Triple`] is an immutable `(subject, predicate, object)` fact; subjects
//! and objects are [`Term`]s, predicates are always full IRIs.

use std::fmt;

/// A literal value with an optional language tag and datatype IRI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    /// Lexical form of the literal.
    pub value: String,
    /// BCP 47 language tag (e.g. `"en"`), if the literal is language-tagged.
    pub language: Option<String>,
    /// Full IRI of the datatype, if the literal is typed.
    pub datatype: Option<String>,
}

impl Literal {
    /// Creates a plain literal without language or datatype.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: None,
        }
    }

    /// Creates a language-tagged literal.
    pub fn lang(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: Some(language.into()),
            datatype: None,
        }
    }

    /// Creates a typed literal.
    pub fn typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: Some(datatype.into()),
        }
    }
}

/// A node or value in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// An absolute IRI.
    Iri(String),
    /// A blank node, identified by its label within the loaded document.
    Blank(String),
    /// A literal value.
    Literal(Literal),
}

impl Term {
    /// Creates an IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// Creates a blank node term.
    pub fn blank(label: impl Into<String>) -> Self {
        Term::Blank(label.into())
    }

    /// Creates a plain literal term.
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal(Literal::plain(value))
    }

    /// Creates a language-tagged literal term.
    pub fn lang_literal(value: impl Into<String>, language: impl Into<String>) -> Self {
        Term::Literal(Literal::lang(value, language))
    }

    /// Returns the IRI if this term is an IRI.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal if this term is a literal.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Returns true for IRIs and blank nodes, the terms that may carry facts.
    #[must_use]
    pub fn is_resource(&self) -> bool {
        !matches!(self, Term::Literal(_))
    }

    /// Returns the identifier string of an IRI or blank node (`_:label`).
    ///
    /// Literals return their lexical form.
    #[must_use]
    pub fn identifier(&self) -> String {
        match self {
            Term::Iri(iri) => iri.clone(),
            Term::Blank(label) => format!("_:{label}"),
            Term::Literal(lit) => lit.value.clone(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::Blank(label) => write!(f, "_:{label}"),
            Term::Literal(lit) => match (&lit.language, &lit.datatype) {
                (Some(lang), _) => write!(f, "\"{}\"@{lang}", lit.value),
                (None, Some(dt)) => write!(f, "\"{}\"^^<{dt}>", lit.value),
                (None, None) => write!(f, "\"{}\"", lit.value),
            },
        }
    }
}

/// A single `(subject, predicate, object)` fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject (an IRI or blank node).
    pub subject: Term,
    /// Full IRI of the predicate.
    pub predicate: String,
    /// Object (any term).
    pub object: Term,
}

impl Triple {
    /// Creates a triple.
    pub fn new(subject: Term, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

/// Whether a node wraps a class or a property subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    /// A type-defining subject.
    Class,
    /// An attribute subject declaring a domain.
    Property,
}

/// Value identity of a class or property node.
///
/// Two nodes reached through different traversal paths compare equal when
/// their namespace, local name and kind agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    /// Namespace part of the identifier, including the trailing `#` or `/`.
    pub namespace: String,
    /// Local name after the namespace.
    pub local_name: String,
    /// Class or property.
    pub kind: NodeKind,
}

impl NodeKey {
    /// Builds a key from a term, splitting IRIs at their last `#` or `/`.
    ///
    /// Blank nodes and identifiers without a separator keep an empty namespace.
    pub fn new(term: &Term, kind: NodeKind) -> Self {
        let id = term.identifier();
        let (namespace, local_name) = match (term, split_at_separator(&id)) {
            (Term::Iri(_), Some((ns, local))) => (ns.to_owned(), local.to_owned()),
            _ => (String::new(), id.clone()),
        };
        Self {
            namespace,
            local_name,
            kind,
        }
    }
}

/// Splits an identifier after its last `#`, or failing that its last `/`.
///
/// Returns `None` if neither separator is present.
pub(crate) fn split_at_separator(id: &str) -> Option<(&str, &str)> {
    id.rfind('#')
        .or_else(|| id.rfind('/'))
        .map(|idx| id.split_at(idx + 1))
}

/// Standard IRI constants used by the resolvers.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// W3C vocabulary status namespace.
    pub const VS: &str = "http://www.w3.org/2003/06/sw-vocab-status/ns#";
    /// Platform of Trust ontology namespace.
    pub const POT: &str = "https://standards.oftrust.net/ontologies/pot.jsonld#";
    /// Digital Living ontology namespace.
    pub const DLI: &str = "https://digitalliving.github.io/standards/ontologies/dli.jsonld#";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:value`.
    pub const RDF_VALUE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#value";
    /// `rdfs:Class`.
    pub const RDFS_CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
    /// `rdfs:subClassOf`.
    pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    /// `rdfs:subPropertyOf`.
    pub const RDFS_SUBPROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";
    /// `rdfs:domain`.
    pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    /// `rdfs:range`.
    pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
    /// `rdfs:label`.
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `rdfs:comment`.
    pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    /// `owl:Class`.
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:versionInfo`.
    pub const OWL_VERSION_INFO: &str = "http://www.w3.org/2002/07/owl#versionInfo";
    /// `vs:term_status`.
    pub const VS_TERM_STATUS: &str = "http://www.w3.org/2003/06/sw-vocab-status/ns#term_status";
    /// `pot:Class`.
    pub const POT_CLASS: &str = "https://standards.oftrust.net/ontologies/pot.jsonld#Class";
    /// `dli:Class`.
    pub const DLI_CLASS: &str = "https://digitalliving.github.io/standards/ontologies/dli.jsonld#Class";
    /// `pot:scope`, the declaring class of a structured annotation.
    pub const POT_SCOPE: &str = "https://standards.oftrust.net/ontologies/pot.jsonld#scope";
    /// `pot:contextName`, the attribute key used in identity documents.
    pub const POT_CONTEXT_NAME: &str =
        "https://standards.oftrust.net/ontologies/pot.jsonld#contextName";
    /// `pot:restriction`, a structured node carrying value restrictions.
    pub const POT_RESTRICTION: &str =
        "https://standards.oftrust.net/ontologies/pot.jsonld#restriction";

    /// Subject types that mark a class.
    pub const CLASS_TYPES: &[&str] = &[POT_CLASS, DLI_CLASS, RDFS_CLASS, OWL_CLASS];

    /// Predicates whose literal objects are value restrictions.
    pub const RESTRICTION_PREDICATES: &[&str] = &[
        "http://www.w3.org/2001/XMLSchema#length",
        "http://www.w3.org/2001/XMLSchema#minLength",
        "http://www.w3.org/2001/XMLSchema#maxLength",
        "http://www.w3.org/2001/XMLSchema#pattern",
        "http://www.w3.org/2001/XMLSchema#minInclusive",
        "http://www.w3.org/2001/XMLSchema#maxInclusive",
        "http://www.w3.org/2001/XMLSchema#minExclusive",
        "http://www.w3.org/2001/XMLSchema#maxExclusive",
        "http://www.w3.org/2001/XMLSchema#totalDigits",
        "http://www.w3.org/2001/XMLSchema#fractionDigits",
        "http://www.w3.org/2002/07/owl#cardinality",
        "http://www.w3.org/2002/07/owl#minCardinality",
        "http://www.w3.org/2002/07/owl#maxCardinality",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_key_splits_at_last_separator() {
        let key = NodeKey::new(&Term::iri(format!("{}House", iris::POT)), NodeKind::Class);
        assert_eq!(key.namespace, iris::POT);
        assert_eq!(key.local_name, "House");
    }

    #[test]
    fn node_key_distinguishes_kind() {
        let term = Term::iri("https://example.org/ns#thing");
        assert_ne!(
            NodeKey::new(&term, NodeKind::Class),
            NodeKey::new(&term, NodeKind::Property)
        );
    }

    #[test]
    fn blank_node_keys_have_no_namespace() {
        let key = NodeKey::new(&Term::blank("b0"), NodeKind::Class);
        assert!(key.namespace.is_empty());
        assert_eq!(key.local_name, "_:b0");
    }

    #[test]
    fn literal_display_includes_language() {
        assert_eq!(Term::lang_literal("roof", "en").to_string(), "\"roof\"@en");
    }
}
