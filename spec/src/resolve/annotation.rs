//! Class-scoped labels, comments and context names.
//!
//! A property annotation is either a plain literal, which applies in every
//! context, or a structured node:
//!
//! ```text
//! pot:roofType rdfs:comment [
//!     pot:scope pot:House ;
//!     rdf:value "shape of roof"@en
//! ] .
//! ```
//!
//! The scope may also be a literal holding a compact or full identifier. A
//! structured annotation applies when its scope is the selected class or one
//! of that class's ancestors. Without a selected class, it applies when its
//! scope is one of the property's declared domains.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::Error;
use crate::model::{iris, Literal, Term};
use crate::node::{ClassNode, Node, PropertyNode};
use crate::taxonomy::Taxonomy;

/// One annotation read from the graph, before scope matching.
#[derive(Debug, Clone)]
struct Annotation {
    scope: Option<String>,
    text: Literal,
}

/// Resolves the annotations of `predicate` on `property`, keyed by language.
///
/// Annotations are applied in graph order, so the last applicable annotation
/// for a given language wins. Untagged text uses the empty language key.
pub fn resolve<'t>(
    property: &PropertyNode<'t>,
    predicate: &str,
    selected: Option<&ClassNode<'t>>,
) -> BTreeMap<String, String> {
    let scopes = Scopes::new(property, selected);
    read(property, predicate)
        .into_iter()
        .filter(|a| scopes.rank(a.scope.as_deref()).is_some())
        .map(|a| (a.text.language.unwrap_or_default(), a.text.value))
        .collect()
}

/// Resolves a single value of `predicate` on `property`.
///
/// The annotation with the closest scope wins: the selected class itself,
/// then its ancestors in breadth-first order, then unscoped literals. Ties go
/// to the annotation read last.
pub fn resolve_value<'t>(
    property: &PropertyNode<'t>,
    predicate: &str,
    selected: Option<&ClassNode<'t>>,
) -> Option<String> {
    let scopes = Scopes::new(property, selected);
    let mut best: Option<(usize, String)> = None;
    for annotation in read(property, predicate) {
        let Some(rank) = scopes.rank(annotation.scope.as_deref()) else {
            continue;
        };
        if best.as_ref().map_or(true, |(r, _)| rank <= *r) {
            best = Some((rank, annotation.text.value));
        }
    }
    best.map(|(_, value)| value)
}

/// Scope identifiers that apply in a given context, closest first.
struct Scopes {
    ordered: Vec<String>,
}

impl Scopes {
    fn new<'t>(property: &PropertyNode<'t>, selected: Option<&ClassNode<'t>>) -> Self {
        let ordered = match selected {
            Some(class) => std::iter::once(class.iri())
                .chain(class.ancestors().iter().map(|a| a.iri()))
                .collect(),
            None => property
                .taxonomy()
                .graph()
                .objects(property.term(), iris::RDFS_DOMAIN)
                .into_iter()
                .map(Term::identifier)
                .collect(),
        };
        Self { ordered }
    }

    /// Closeness of `scope`, or `None` if it does not apply.
    fn rank(&self, scope: Option<&str>) -> Option<usize> {
        match scope {
            None => Some(usize::MAX),
            Some(scope) => self.ordered.iter().position(|s| s == scope),
        }
    }
}

fn read(property: &PropertyNode<'_>, predicate: &str) -> Vec<Annotation> {
    let taxonomy = property.taxonomy();
    let graph = taxonomy.graph();
    let mut out = Vec::new();
    for object in graph.objects(property.term(), predicate) {
        match object {
            Term::Literal(text) => out.push(Annotation {
                scope: None,
                text: text.clone(),
            }),
            node => match structured(taxonomy, property, node) {
                Ok(annotation) => out.push(annotation),
                Err(err) => debug!(error = %err, "annotation dropped"),
            },
        }
    }
    out
}

fn structured(
    taxonomy: &Taxonomy<'_>,
    property: &PropertyNode<'_>,
    node: &Term,
) -> Result<Annotation, Error> {
    let graph = taxonomy.graph();
    let missing = |reason: &'static str| Error::MissingAnnotationData {
        property: property.iri(),
        reason,
    };

    let scope = graph
        .objects(node, iris::POT_SCOPE)
        .into_iter()
        .next()
        .map(|scope| match scope {
            Term::Literal(lit) => taxonomy.namespaces().resolve_reference(&lit.value),
            other => other.identifier(),
        })
        .ok_or_else(|| missing("no scope"))?;
    let text = graph
        .objects(node, iris::RDF_VALUE)
        .into_iter()
        .find_map(Term::as_literal)
        .cloned()
        .ok_or_else(|| missing("no text"))?;

    Ok(Annotation {
        scope: Some(scope),
        text,
    })
}
