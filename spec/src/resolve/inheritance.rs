//! Transitive property inheritance.

use std::collections::HashSet;

use crate::model::NodeKey;
use crate::node::{sort_and_dedup, ClassNode, Node, PropertyNode};

/// Returns every property usable on instances of `class`.
///
/// Walks the real parents level by level, collecting the properties declared
/// on each ancestor, then adds the properties declared on `class` itself. The
/// result is deduplicated by key and sorted by compact id, so it does not
/// depend on graph iteration order. Ancestors are visited once, which bounds
/// the walk on cyclic graphs.
pub fn properties<'t>(class: &ClassNode<'t>) -> Vec<PropertyNode<'t>> {
    let mut visited: HashSet<NodeKey> = HashSet::from([class.key().clone()]);
    let mut frontier = class.real_parents();
    let mut collected = Vec::new();

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for parent in frontier {
            if !visited.insert(parent.key().clone()) {
                continue;
            }
            collected.extend(parent.declared_properties());
            next.extend(parent.real_parents());
        }
        frontier = next;
    }

    collected.extend(class.declared_properties());
    sort_and_dedup(collected)
}
