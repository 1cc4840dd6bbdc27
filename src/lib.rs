//! Vitrine
//!
//! A property graph abstraction with read-only wrapper views.
//!
//! The crate has two halves:
//!
//! - [`graph`]: the capability traits ([`Graph`], [`Vertex`], [`Edge`]) and
//!   the direct in-memory implementation, [`GraphStore`].
//! - [`wrappers`]: decorators over any conforming implementation. The
//!   [`ReadOnlyGraph`] wrapper delegates every read and rejects every
//!   mutation with [`GraphError::MutationNotAllowed`], and everything it
//!   hands out is itself read-only, transitively.
//!
//! # Example
//!
//! ```
//! use vitrine::{Graph, GraphError, GraphStore, Label, ReadOnlyGraph, VertexId};
//!
//! let store = GraphStore::new();
//! store.add_vertex(Some(VertexId::new("A"))).unwrap();
//! store.add_vertex(Some(VertexId::new("B"))).unwrap();
//! store
//!     .add_edge(None, &VertexId::new("A"), &VertexId::new("B"), Label::new("knows"))
//!     .unwrap();
//!
//! let view = ReadOnlyGraph::new(&store);
//! assert_eq!(view.vertices().count(), 2);
//! assert_eq!(
//!     view.add_vertex(None).unwrap_err(),
//!     GraphError::MutationNotAllowed
//! );
//! ```

pub mod graph;
pub mod wrappers;

pub use graph::{
    Edge, EdgeId, Features, Graph, GraphError, GraphResult, GraphStore, Label, PropertyMap,
    PropertyValue, Vertex, VertexId,
};
pub use wrappers::{ReadOnlyEdge, ReadOnlyEdges, ReadOnlyGraph, ReadOnlyVertex, ReadOnlyVertices};
