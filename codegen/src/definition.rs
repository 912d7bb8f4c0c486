//! Class definition documents.

use serde_json::{json, Map, Value};

use pot_ontology::{class_record, ClassNode, PropertyRecord, Result, Settings};

use crate::layout::{self, Section};
use crate::vocabulary::{class_entry, insert_language_values};

/// Builds the class definition of `class`.
///
/// The document points at the class's identity context, repeats the class's
/// parents and annotations, and lists every attribute with its context name.
///
/// # Errors
///
/// Returns [`pot_ontology::Error::MalformedIdentifier`] if the class or one
/// of its properties has a malformed identifier.
pub fn build(class: &ClassNode<'_>, settings: &Settings) -> Result<Value> {
    let record = class_record(class)?;
    let lineage = layout::canonical_lineage(&record.canonical_id);

    let mut doc = Map::new();
    doc.insert(
        "@context".to_owned(),
        json!(format!(
            "{}.jsonld",
            layout::url(&settings.base_url, Section::Context, &lineage)
        )),
    );
    doc.insert(
        "@id".to_owned(),
        json!(layout::url(&settings.base_url, Section::ClassDefinitions, &lineage)),
    );
    doc.insert("@type".to_owned(), json!("pot:ClassDefinition"));
    if let Value::Object(fields) = class_entry(class) {
        doc.extend(fields.into_iter().filter(|(key, _)| !key.starts_with('@')));
    }

    let attributes: Vec<Value> = record
        .declared_properties
        .iter()
        .chain(&record.inherited_properties)
        .map(attribute)
        .collect();
    doc.insert("pot:supportedAttribute".to_owned(), Value::Array(attributes));
    Ok(Value::Object(doc))
}

fn attribute(property: &PropertyRecord) -> Value {
    let mut entry = Map::new();
    entry.insert("@id".to_owned(), json!(property.canonical_id));
    entry.insert("pot:contextName".to_owned(), json!(property.context_name));
    insert_language_values(&mut entry, "rdfs:label", &property.labels);
    insert_language_values(&mut entry, "rdfs:comment", &property.comments);
    if !property.ranges.is_empty() {
        entry.insert("range".to_owned(), json!(property.ranges));
    }
    if !property.restrictions.is_empty() {
        entry.insert("pot:restriction".to_owned(), json!(property.restrictions));
    }
    Value::Object(entry)
}
