//! Base JSON-LD contexts shared by the vocabulary and identity documents.

use serde_json::{json, Map, Number, Value};

use pot_ontology::{iris, NamespaceTable, Settings};

/// `@version` value: a number when the configured version is numeric.
#[must_use]
pub fn version(settings: &Settings) -> Value {
    settings
        .version
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map_or_else(|| Value::String(settings.version.clone()), Value::Number)
}

/// Prefix declaration `{"@id": <iri>, "@prefix": true}`.
fn prefix(namespaces: &NamespaceTable, name: &str, fallback: &str) -> Value {
    json!({
        "@id": namespaces.iri_for(name).unwrap_or(fallback),
        "@prefix": true
    })
}

/// Context of a vocabulary document whose terms live under `vocab`.
#[must_use]
pub fn vocabulary(settings: &Settings, namespaces: &NamespaceTable, vocab: &str) -> Value {
    let mut ctx = Map::new();
    ctx.insert("@version".to_owned(), version(settings));
    ctx.insert("rdf".to_owned(), prefix(namespaces, "rdf", iris::RDF));
    ctx.insert("rdfs".to_owned(), prefix(namespaces, "rdfs", iris::RDFS));
    ctx.insert("owl".to_owned(), prefix(namespaces, "owl", iris::OWL));
    ctx.insert("vs".to_owned(), prefix(namespaces, "vs", iris::VS));
    ctx.insert("xsd".to_owned(), prefix(namespaces, "xsd", iris::XSD));
    ctx.insert("dli".to_owned(), prefix(namespaces, "dli", iris::DLI));
    ctx.insert("pot".to_owned(), prefix(namespaces, "pot", iris::POT));
    ctx.insert("vocab".to_owned(), json!(vocab));
    Value::Object(ctx)
}

/// Base of an identity context; attribute entries are added by the caller.
#[must_use]
pub fn identity(settings: &Settings, namespaces: &NamespaceTable, vocab: &str) -> Map<String, Value> {
    let mut ctx = Map::new();
    ctx.insert("@version".to_owned(), version(settings));
    ctx.insert("@vocab".to_owned(), json!(vocab));
    ctx.insert("pot".to_owned(), prefix(namespaces, "pot", iris::POT));
    ctx.insert("dli".to_owned(), prefix(namespaces, "dli", iris::DLI));
    ctx.insert("data".to_owned(), json!("dli:data"));
    ctx
}

/// Context of an ontology fragment: every bound prefix as a plain mapping.
#[must_use]
pub fn ontology(settings: &Settings, namespaces: &NamespaceTable) -> Value {
    let mut ctx = Map::new();
    ctx.insert("@version".to_owned(), version(settings));
    for (prefix, iri) in namespaces.iter() {
        ctx.insert(prefix.to_owned(), json!(iri));
    }
    Value::Object(ctx)
}
