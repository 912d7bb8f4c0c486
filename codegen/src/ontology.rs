//! Per-class ontology fragments.
//!
//! A fragment is the subgraph a class owns: every triple about the class,
//! every triple about the properties whose domain is the class, and the
//! triples of the blank nodes those reach. Triples are grouped by subject into
//! a JSON-LD `@graph`.

use std::collections::{HashSet, VecDeque};

use serde_json::{json, Map, Value};

use pot_ontology::{iris, ClassNode, NamespaceTable, Node, Settings, Term, Triple};

use crate::context;

/// Builds the ontology fragment of `class`.
#[must_use]
pub fn build(class: &ClassNode<'_>, settings: &Settings) -> Value {
    let taxonomy = class.taxonomy();
    let graph = taxonomy.graph();
    let namespaces = taxonomy.namespaces();

    let mut queue: VecDeque<Term> = VecDeque::from([class.term().clone()]);
    queue.extend(
        graph
            .subjects(iris::RDFS_DOMAIN, class.term())
            .into_iter()
            .cloned(),
    );

    let mut seen = HashSet::new();
    let mut nodes = Vec::new();
    while let Some(subject) = queue.pop_front() {
        if !seen.insert(subject.clone()) {
            continue;
        }
        let triples = graph.triples_matching(Some(&subject), None, None);
        if triples.is_empty() {
            continue;
        }
        queue.extend(
            triples
                .iter()
                .filter(|t| matches!(t.object, Term::Blank(_)))
                .map(|t| t.object.clone()),
        );
        nodes.push(node_object(namespaces, &subject, &triples));
    }

    json!({
        "@context": context::ontology(settings, namespaces),
        "@graph": nodes
    })
}

/// One subject and all its facts, values grouped per predicate.
fn node_object(namespaces: &NamespaceTable, subject: &Term, triples: &[&Triple]) -> Value {
    let mut node = Map::new();
    node.insert("@id".to_owned(), json!(reference(namespaces, subject)));
    for triple in triples {
        let (key, value) = match (&*triple.predicate, &triple.object) {
            (iris::RDF_TYPE, Term::Iri(_)) => {
                ("@type".to_owned(), json!(reference(namespaces, &triple.object)))
            }
            (predicate, object) => (compact(namespaces, predicate), object_value(namespaces, object)),
        };
        if let Value::Array(values) = node.entry(key).or_insert_with(|| Value::Array(Vec::new())) {
            values.push(value);
        }
    }
    Value::Object(node)
}

fn object_value(namespaces: &NamespaceTable, object: &Term) -> Value {
    match object {
        Term::Literal(lit) => match (&lit.language, &lit.datatype) {
            (Some(language), _) => json!({ "@value": lit.value, "@language": language }),
            (None, Some(datatype)) => {
                json!({ "@value": lit.value, "@type": compact(namespaces, datatype) })
            }
            (None, None) => json!({ "@value": lit.value }),
        },
        resource => json!({ "@id": reference(namespaces, resource) }),
    }
}

fn reference(namespaces: &NamespaceTable, term: &Term) -> String {
    match term {
        Term::Iri(iri) => compact(namespaces, iri),
        other => other.identifier(),
    }
}

fn compact(namespaces: &NamespaceTable, iri: &str) -> String {
    namespaces.compact(iri).unwrap_or_else(|| iri.to_owned())
}
