//! Identity (JSON-LD context) documents.
//!
//! Each attribute key maps to the canonical id of its property. By default
//! the attribute is nested under `data`; flat definition classes map the key
//! straight to the id.

use serde_json::{json, Value};
use tracing::warn;

use pot_ontology::{ClassNode, Node, Result, Settings};

use crate::context;
use crate::layout::{self, Section};

/// Builds the identity context of `class`.
///
/// # Errors
///
/// Returns [`pot_ontology::Error::MalformedIdentifier`] if the class or one
/// of its properties has a malformed identifier.
pub fn build(class: &ClassNode<'_>, settings: &Settings) -> Result<Value> {
    let lineage = layout::canonical_lineage(&class.canonical_id()?);
    let vocab = format!(
        "{}#",
        layout::url(&settings.base_url, Section::Vocabulary, &lineage)
    );
    let flat = settings.is_flat(class);
    let mut ctx = context::identity(settings, class.taxonomy().namespaces(), &vocab);

    for property in class.properties() {
        let key = property.context_name(Some(class))?;
        let id = property.canonical_id()?;
        let entry = if flat {
            json!(id)
        } else if property.has_object_range() {
            json!({ "@id": id, "@nest": "data", "@type": "@id" })
        } else {
            json!({ "@id": id, "@nest": "data" })
        };
        if let Some(previous) = ctx.insert(key.clone(), entry) {
            warn!(
                class = %class.compact_id(),
                key = %key,
                replaced = %previous,
                by = %id,
                "context name used by more than one property"
            );
        }
    }

    Ok(json!({ "@context": ctx }))
}
