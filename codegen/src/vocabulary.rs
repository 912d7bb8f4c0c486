//! Vocabulary documents.
//!
//! A vocabulary lists the class, every descendant as `pot:supportedClass`
//! and every own and inherited property as `pot:supportedAttribute`, with
//! labels and comments resolved for the class.

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

use pot_ontology::{property_record, ClassNode, Node, PropertyNode, Result, Settings};

use crate::context;
use crate::layout::{self, Section};

/// Builds the vocabulary document of `class`.
///
/// # Errors
///
/// Returns [`pot_ontology::Error::MalformedIdentifier`] if the class or one
/// of its properties has a malformed identifier.
pub fn build(class: &ClassNode<'_>, settings: &Settings) -> Result<Value> {
    let lineage = layout::canonical_lineage(&class.canonical_id()?);
    let id = layout::url(&settings.base_url, Section::Vocabulary, &lineage);
    let namespaces = class.taxonomy().namespaces();

    let mut supported_class = vec![class_entry(class)];
    supported_class.extend(class.descendants().iter().map(class_entry));

    let mut supported_attribute = Vec::new();
    for property in class.properties() {
        supported_attribute.push(attribute_entry(&property, class)?);
    }

    Ok(json!({
        "@context": context::vocabulary(settings, namespaces, &format!("{id}#")),
        "@id": id,
        "@type": "pot:Vocabulary",
        "pot:supportedClass": supported_class,
        "pot:supportedAttribute": supported_attribute
    }))
}

/// Description of one class: type, parents, labels, comments, status.
pub(crate) fn class_entry(class: &ClassNode<'_>) -> Value {
    let mut entry = Map::new();
    entry.insert("@id".to_owned(), json!(class.compact_id()));
    entry.insert(
        "@type".to_owned(),
        json!(class.type_ids().into_iter().next().unwrap_or_else(|| "pot:Class".to_owned())),
    );

    let parents: Vec<String> = class.real_parents().iter().map(|p| p.compact_id()).collect();
    if let Some(parents) = one_or_many(parents) {
        entry.insert("rdfs:subClassOf".to_owned(), parents);
    }
    insert_language_values(&mut entry, "rdfs:label", &class.labels());
    insert_language_values(&mut entry, "rdfs:comment", &class.comments());
    insert_status(&mut entry, class);
    Value::Object(entry)
}

fn attribute_entry(property: &PropertyNode<'_>, class: &ClassNode<'_>) -> Result<Value> {
    let record = property_record(property, Some(class))?;
    let mut entry = Map::new();
    entry.insert("@id".to_owned(), json!(record.compact_id));
    entry.insert(
        "@type".to_owned(),
        json!(property
            .type_ids()
            .into_iter()
            .next()
            .unwrap_or_else(|| "rdf:Property".to_owned())),
    );
    insert_language_values(&mut entry, "rdfs:label", &record.labels);
    insert_language_values(&mut entry, "rdfs:comment", &record.comments);

    let domains: Vec<String> = property.domains().iter().map(|d| d.compact_id()).collect();
    if !domains.is_empty() {
        entry.insert("domain".to_owned(), json!(domains));
    }
    if !record.ranges.is_empty() {
        entry.insert("range".to_owned(), json!(record.ranges));
    }
    if !record.restrictions.is_empty() {
        entry.insert("pot:restriction".to_owned(), json!(record.restrictions));
    }
    insert_status(&mut entry, property);
    Ok(Value::Object(entry))
}

/// A single string for one item, an array for several, nothing for none.
pub(crate) fn one_or_many(mut items: Vec<String>) -> Option<Value> {
    match items.len() {
        0 => None,
        1 => items.pop().map(Value::String),
        _ => Some(json!(items)),
    }
}

/// Inserts `[{"@language": .., "@value": ..}]` under `key` when non-empty.
///
/// Untagged text is written without `@language`.
pub(crate) fn insert_language_values(
    entry: &mut Map<String, Value>,
    key: &str,
    values: &BTreeMap<String, String>,
) {
    if values.is_empty() {
        return;
    }
    let list: Vec<Value> = values
        .iter()
        .map(|(language, value)| {
            if language.is_empty() {
                json!({ "@value": value })
            } else {
                json!({ "@language": language, "@value": value })
            }
        })
        .collect();
    entry.insert(key.to_owned(), Value::Array(list));
}

fn insert_status<'t, N: Node<'t>>(entry: &mut Map<String, Value>, node: &N) {
    if let Some(version) = node.version_info() {
        entry.insert("owl:versionInfo".to_owned(), json!(version));
    }
    if let Some(status) = node.term_status() {
        entry.insert("vs:term_status".to_owned(), json!(status));
    }
}
