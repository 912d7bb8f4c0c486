//! Resolved per-class and per-property records.
//!
//! Records are the hand-off point to the document builders: plain owned data
//! with every graph walk already done.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::node::{ClassNode, Node, PropertyNode};
use crate::taxonomy::Taxonomy;

/// A property as seen from one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    /// Hierarchical id along the first-parent chain.
    pub canonical_id: String,
    /// Prefixed identifier.
    pub compact_id: String,
    /// Local name.
    pub title: String,
    /// Attribute key for the class context.
    pub context_name: String,
    /// Compact ids of the declared ranges.
    pub ranges: Vec<String>,
    /// Value restrictions keyed by kind.
    pub restrictions: BTreeMap<String, String>,
    /// Labels keyed by language.
    pub labels: BTreeMap<String, String>,
    /// Comments keyed by language.
    pub comments: BTreeMap<String, String>,
}

/// A fully resolved class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    /// Hierarchical id along the first-parent chain.
    pub canonical_id: String,
    /// Prefixed identifier.
    pub compact_id: String,
    /// Local name.
    pub title: String,
    /// Compact ids of all real parents, in graph order.
    pub parents: Vec<String>,
    /// Properties whose domain is the class.
    pub declared_properties: Vec<PropertyRecord>,
    /// Properties reached only through ancestors.
    pub inherited_properties: Vec<PropertyRecord>,
    /// Compact ids of all descendants, sorted.
    pub descendant_ids: Vec<String>,
}

/// A class that could not be resolved.
#[derive(Debug)]
pub struct ClassFailure {
    /// Full identifier of the class.
    pub iri: String,
    /// Why resolution failed.
    pub error: Error,
}

/// Outcome of resolving every class in a taxonomy.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Classes resolved successfully, in graph order.
    pub classes: Vec<ClassRecord>,
    /// Classes that failed, in graph order.
    pub failures: Vec<ClassFailure>,
}

/// Builds the record of `property` in the context of `selected`.
///
/// # Errors
///
/// Returns [`Error::MalformedIdentifier`] if the property or its first-parent
/// chain has a malformed identifier.
pub fn property_record<'t>(
    property: &PropertyNode<'t>,
    selected: Option<&ClassNode<'t>>,
) -> Result<PropertyRecord> {
    Ok(PropertyRecord {
        canonical_id: property.canonical_id()?,
        compact_id: property.compact_id(),
        title: property.title()?,
        context_name: property.context_name(selected)?,
        ranges: property
            .supported_ranges()
            .iter()
            .map(|r| r.compact_id())
            .collect(),
        restrictions: property.restrictions(),
        labels: property.labels(selected),
        comments: property.comments(selected),
    })
}

/// Builds the record of `class`.
///
/// # Errors
///
/// Returns [`Error::MalformedIdentifier`] if the class, one of its
/// properties, or a node on either first-parent chain has a malformed
/// identifier.
pub fn class_record(class: &ClassNode<'_>) -> Result<ClassRecord> {
    let declared = class.declared_properties();
    let mut declared_properties = Vec::with_capacity(declared.len());
    let mut inherited_properties = Vec::new();
    for property in class.properties() {
        let record = property_record(&property, Some(class))?;
        if declared.contains(&property) {
            declared_properties.push(record);
        } else {
            inherited_properties.push(record);
        }
    }

    let mut descendant_ids: Vec<String> =
        class.descendants().iter().map(|d| d.compact_id()).collect();
    descendant_ids.sort();

    Ok(ClassRecord {
        canonical_id: class.canonical_id()?,
        compact_id: class.compact_id(),
        title: class.title()?,
        parents: class.real_parents().iter().map(|p| p.compact_id()).collect(),
        declared_properties,
        inherited_properties,
        descendant_ids,
    })
}

/// Resolves every class of `taxonomy` independently.
///
/// A failing class is recorded in [`Resolution::failures`] and does not stop
/// the batch.
pub fn resolve_all(taxonomy: &Taxonomy<'_>) -> Resolution {
    let mut resolution = Resolution::default();
    for class in taxonomy.classes() {
        match class_record(&class) {
            Ok(record) => resolution.classes.push(record),
            Err(error) => resolution.failures.push(ClassFailure {
                iri: class.iri(),
                error,
            }),
        }
    }
    resolution
}
