//! Canonical identifiers and lineage paths.
//!
//! The canonical id of a node is `<prefix>:<root>/<...>/<title>`, where the
//! ancestor segments come from repeatedly following the first real parent.
//! Lineages are the all-parents projection of the same relation.

use std::collections::{BTreeSet, HashSet};

use tracing::warn;

use crate::error::Result;
use crate::model::NodeKey;
use crate::node::Node;

/// Computes the canonical hierarchical id of `node`.
///
/// A node without real parents yields `<prefix>:<title>`. If the first-parent
/// chain loops back on itself, the walk stops at the repeated node.
///
/// # Errors
///
/// Returns [`Error::MalformedIdentifier`](crate::Error::MalformedIdentifier)
/// if `node` or any node on its first-parent chain cannot be split.
pub fn canonical_id<'t, N: Node<'t>>(node: &N) -> Result<String> {
    let (prefix, title) = node.split_identifier()?;
    let mut segments = vec![title];
    let mut visited: HashSet<NodeKey> = HashSet::from([node.key().clone()]);

    let mut current = node.real_parents().into_iter().next();
    while let Some(parent) = current {
        if !visited.insert(parent.key().clone()) {
            warn!(
                node = %node.term(),
                repeated = %parent.term(),
                "first-parent chain is cyclic; truncating canonical id"
            );
            break;
        }
        segments.push(parent.title()?);
        current = parent.real_parents().into_iter().next();
    }

    segments.reverse();
    Ok(format!("{prefix}:{}", segments.join("/")))
}

/// Computes every root-to-self title path of `node`.
///
/// Every real parent contributes its own paths. A parent already on the
/// current path is skipped; a node whose parents are all skipped is treated as
/// a root.
///
/// # Errors
///
/// Returns [`Error::MalformedIdentifier`](crate::Error::MalformedIdentifier)
/// if any node reached by the walk cannot be split.
pub fn lineages<'t, N: Node<'t>>(node: &N) -> Result<BTreeSet<Vec<String>>> {
    let mut on_path = Vec::new();
    walk(node, &mut on_path)
}

fn walk<'t, N: Node<'t>>(node: &N, on_path: &mut Vec<NodeKey>) -> Result<BTreeSet<Vec<String>>> {
    let title = node.title()?;
    on_path.push(node.key().clone());

    let mut paths = BTreeSet::new();
    for parent in node.real_parents() {
        if on_path.contains(parent.key()) {
            continue;
        }
        for mut path in walk(&parent, on_path)? {
            path.push(title.clone());
            paths.insert(path);
        }
    }
    on_path.pop();

    if paths.is_empty() {
        paths.insert(vec![title]);
    }
    Ok(paths)
}
