//! Namespace prefix table.
//!
//! Compacts full IRIs into `prefix:local` form and back. The table is owned by
//! the caller and passed through [`Taxonomy`](crate::Taxonomy); there is no
//! process-wide binding state.

use crate::error::{Error, Result};
use crate::model::{iris, split_at_separator};

/// Ordered `(prefix, namespace IRI)` bindings.
#[derive(Debug, Clone)]
pub struct NamespaceTable {
    bindings: Vec<(String, String)>,
}

impl Default for NamespaceTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for (prefix, iri) in [
            ("rdf", iris::RDF),
            ("rdfs", iris::RDFS),
            ("xml", "http://www.w3.org/XML/1998/namespace"),
            ("xsd", iris::XSD),
            ("foaf", "http://xmlns.com/foaf/0.1/"),
            ("skos", "http://www.w3.org/2004/02/skos/core#"),
            ("owl", iris::OWL),
            ("vs", iris::VS),
            ("dli", iris::DLI),
            ("pot", iris::POT),
        ] {
            table.bind(prefix, iri);
        }
        table
    }
}

impl NamespaceTable {
    /// Creates a table with no bindings.
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Binds `prefix` to `iri`, replacing any earlier binding of the prefix.
    pub fn bind(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        let prefix = prefix.into();
        let iri = iri.into();
        match self.bindings.iter_mut().find(|(p, _)| *p == prefix) {
            Some(existing) => existing.1 = iri,
            None => self.bindings.push((prefix, iri)),
        }
    }

    /// Returns the namespace IRI bound to `prefix`.
    #[must_use]
    pub fn iri_for(&self, prefix: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, iri)| iri.as_str())
    }

    /// Iterates over the bindings in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(p, i)| (p.as_str(), i.as_str()))
    }

    /// Compacts `iri` with the longest matching bound namespace.
    ///
    /// Returns `None` if no bound namespace is a prefix of `iri`.
    #[must_use]
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.longest_match(iri)
            .map(|(prefix, ns)| format!("{prefix}:{}", &iri[ns.len()..]))
    }

    /// Expands a `prefix:local` identifier into a full IRI.
    ///
    /// Returns `None` if the prefix is unbound.
    #[must_use]
    pub fn expand(&self, curie: &str) -> Option<String> {
        let (prefix, local) = curie.split_once(':')?;
        self.iri_for(prefix).map(|ns| format!("{ns}{local}"))
    }

    /// Resolves a reference given either as a full IRI or as `prefix:local`.
    #[must_use]
    pub fn resolve_reference(&self, reference: &str) -> String {
        match self.expand(reference) {
            Some(iri) => iri,
            None => reference.to_owned(),
        }
    }

    /// Splits an identifier into `(prefix, local name)`.
    ///
    /// Bound namespaces take precedence; otherwise the namespace ends at the
    /// last `#` or `/` and its prefix is inferred from the final path segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedIdentifier`] if the identifier has no
    /// namespace separator or its local name is empty.
    pub fn split(&self, iri: &str) -> Result<(String, String)> {
        if let Some((prefix, ns)) = self.longest_match(iri) {
            let local = &iri[ns.len()..];
            if local.is_empty() {
                return Err(Error::malformed(iri));
            }
            return Ok((prefix.to_owned(), local.to_owned()));
        }
        match split_at_separator(iri) {
            Some((ns, local)) if !local.is_empty() => Ok((infer_prefix(ns), local.to_owned())),
            _ => Err(Error::malformed(iri)),
        }
    }

    fn longest_match(&self, iri: &str) -> Option<(&str, &str)> {
        self.bindings
            .iter()
            .filter(|(_, ns)| !ns.is_empty() && iri.starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.len())
            .map(|(p, ns)| (p.as_str(), ns.as_str()))
    }
}

/// Simulates a prefix for an unbound namespace from its last path segment.
///
/// `https://example.org/ontologies/pot.jsonld#` becomes `pot`.
fn infer_prefix(namespace: &str) -> String {
    let trimmed = namespace.trim_end_matches(['#', '/']);
    let segment = trimmed.rsplit('/').next().unwrap_or(trimmed);
    segment
        .strip_suffix(".jsonld")
        .unwrap_or(segment)
        .to_owned()
}
