//! Generation settings.
//!
//! ```toml
//! base_url = "https://standards.oftrust.net/v1/"
//! flat_definition_classes = ["pot:Identity"]
//! excluded_classes = ["pot:Building/House"]
//!
//! [namespaces]
//! ex = "https://example.org/vocab#"
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::error::Result;
use crate::namespaces::NamespaceTable;
use crate::node::{ClassNode, Node};

/// Default root URL of generated documents.
pub const DEFAULT_BASE_URL: &str = "https://standards.oftrust.net/v1/";

/// Options recognised by the resolution engine and the document builders.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Classes whose identity mapping uses direct identifiers.
    pub flat_definition_classes: BTreeSet<String>,
    /// Classes left out of identity and definition generation.
    pub excluded_classes: BTreeSet<String>,
    /// Extra prefix bindings on top of the default namespace table.
    pub namespaces: BTreeMap<String, String>,
    /// Root URL used for document ids and vocabulary links.
    pub base_url: String,
    /// JSON-LD `@version` written into contexts.
    pub version: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            flat_definition_classes: BTreeSet::new(),
            excluded_classes: BTreeSet::new(),
            namespaces: BTreeMap::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            version: "1.1".to_owned(),
        }
    }
}

impl Settings {
    /// Parses settings from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Settings`](crate::Error::Settings) if the document is
    /// not valid TOML or contains unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// The default namespace table extended with the configured bindings.
    #[must_use]
    pub fn namespace_table(&self) -> NamespaceTable {
        let mut table = NamespaceTable::default();
        for (prefix, iri) in &self.namespaces {
            table.bind(prefix.as_str(), iri.as_str());
        }
        table
    }

    /// Returns true if `class` is listed in `excluded_classes`.
    #[must_use]
    pub fn is_excluded(&self, class: &ClassNode<'_>) -> bool {
        matches_any(&self.excluded_classes, class)
    }

    /// Returns true if `class` is listed in `flat_definition_classes`.
    #[must_use]
    pub fn is_flat(&self, class: &ClassNode<'_>) -> bool {
        matches_any(&self.flat_definition_classes, class)
    }
}

fn matches_any(set: &BTreeSet<String>, class: &ClassNode<'_>) -> bool {
    if set.is_empty() {
        return false;
    }
    if set.contains(&class.iri()) || set.contains(&class.compact_id()) {
        return true;
    }
    class.canonical_id().is_ok_and(|id| set.contains(&id))
}
