//! Directory index documents.
//!
//! The root index lists the root classes. Each class with children gets one
//! index per lineage, listing its direct children under that lineage.

use serde_json::{json, Value};
use tracing::warn;

use pot_ontology::{ClassNode, NamespaceTable, Node, Settings};

use crate::context;
use crate::layout::{self, Section};

/// Builds the root index from `(compact id, title)` pairs of root classes.
#[must_use]
pub fn root_index(
    roots: &[(String, String)],
    settings: &Settings,
    namespaces: &NamespaceTable,
) -> Value {
    let id = layout::url(&settings.base_url, Section::Vocabulary, &[]);
    let members: Vec<Value> = roots
        .iter()
        .map(|(compact_id, title)| {
            json!({
                "@id": compact_id,
                "url": layout::url(&settings.base_url, Section::Vocabulary, &[title.clone()])
            })
        })
        .collect();
    json!({
        "@context": context::vocabulary(settings, namespaces, &id),
        "@id": id,
        "@type": "pot:Index",
        "pot:member": members
    })
}

/// Builds the index of `class`'s children under `lineage`.
///
/// A child whose identifier cannot be split is left out of the index; it is
/// reported as a failure of its own when the child itself is built.
#[must_use]
pub fn class_index(class: &ClassNode<'_>, lineage: &[String], settings: &Settings) -> Value {
    let id = format!("{}/", layout::url(&settings.base_url, Section::Vocabulary, lineage));
    let mut members = Vec::new();
    for child in class.children() {
        let title = match child.title() {
            Ok(title) => title,
            Err(error) => {
                warn!(class = %class.compact_id(), child = %child.iri(), %error, "child left out of index");
                continue;
            }
        };
        let mut path = lineage.to_vec();
        path.push(title);
        members.push(json!({
            "@id": child.compact_id(),
            "url": layout::url(&settings.base_url, Section::Vocabulary, &path)
        }));
    }
    json!({
        "@context": context::vocabulary(settings, class.taxonomy().namespaces(), &id),
        "@id": id,
        "@type": "pot:Index",
        "pot:class": class.compact_id(),
        "pot:member": members
    })
}
