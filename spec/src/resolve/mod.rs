//! Graph-walking resolvers behind the node accessors.
//!
//! - [`identifier`]: canonical hierarchical ids and lineage paths.
//! - [`inheritance`]: transitive property sets.
//! - [`annotation`]: class-scoped labels, comments and context names.
//!
//! Each resolver only reads the graph. Traversals track visited nodes by
//! [`NodeKey`](crate::NodeKey), so cyclic input terminates.

pub mod annotation;
pub mod identifier;
pub mod inheritance;
