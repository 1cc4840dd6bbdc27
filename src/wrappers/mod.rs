//! Graph decorators layered over any [`Graph`](crate::graph::Graph)
//! implementation.

pub mod readonly;

pub use readonly::{ReadOnlyEdge, ReadOnlyEdges, ReadOnlyGraph, ReadOnlyVertex, ReadOnlyVertices};
