//! Graph access traits: the capability interface shared by direct
//! implementations and wrapper graphs.
//!
//! This module defines the `Graph`, `Vertex`, and `Edge` traits which
//! abstract over concrete graph implementations, allowing the same calling
//! code to work against both the in-memory [`GraphStore`](crate::graph::GraphStore)
//! and decorators such as [`ReadOnlyGraph`](crate::wrappers::ReadOnlyGraph).
//!
//! All methods take `&self`: implementations that mutate are expected to
//! synchronize internally, which keeps the traits object-safe and lets
//! wrappers hold a plain shared borrow of whatever they decorate.

use super::features::Features;
use super::property::PropertyValue;
use super::types::{EdgeId, Label, VertexId};
use std::fmt;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    /// The one-and-only rejection signal of read-only wrappers. Raised
    /// before the wrapped graph is consulted, for any argument.
    #[error("mutation of this graph is not allowed")]
    MutationNotAllowed,

    #[error("vertex {0} not found")]
    VertexNotFound(VertexId),

    #[error("edge {0} not found")]
    EdgeNotFound(EdgeId),

    #[error("vertex {0} already exists")]
    VertexAlreadyExists(VertexId),

    #[error("edge {0} already exists")]
    EdgeAlreadyExists(EdgeId),

    #[error("invalid edge: source vertex {0} does not exist")]
    InvalidEdgeSource(VertexId),

    #[error("invalid edge: target vertex {0} does not exist")]
    InvalidEdgeTarget(VertexId),

    #[error("graph has been shut down")]
    Closed,
}

pub type GraphResult<T> = Result<T, GraphError>;

/// A vertex view handed out by a [`Graph`].
///
/// Views are live: property reads consult the owning graph at call time, so
/// a view held across a removal simply reads as empty. Mutation through a
/// view writes through to the owning graph, unless the view came from a
/// read-only wrapper, in which case it fails with
/// [`GraphError::MutationNotAllowed`].
pub trait Vertex: fmt::Debug {
    fn id(&self) -> VertexId;

    /// Current value of a property, or `None` if absent.
    fn property(&self, key: &str) -> Option<PropertyValue>;

    fn property_keys(&self) -> Vec<String>;

    /// Set a property, returning the previous value if any.
    fn set_property(&self, key: &str, value: PropertyValue) -> GraphResult<Option<PropertyValue>>;

    /// Remove a property, returning the removed value if any.
    fn remove_property(&self, key: &str) -> GraphResult<Option<PropertyValue>>;

    /// Creation timestamp in Unix milliseconds; `None` on a stale view.
    fn created_at(&self) -> Option<i64>;

    /// Last-update timestamp in Unix milliseconds; `None` on a stale view.
    fn updated_at(&self) -> Option<i64>;

    /// Edges leaving this vertex, in the owning graph's order.
    fn out_edges<'a>(&'a self) -> Box<dyn Iterator<Item = Box<dyn Edge + 'a>> + 'a>;

    /// Edges arriving at this vertex, in the owning graph's order.
    fn in_edges<'a>(&'a self) -> Box<dyn Iterator<Item = Box<dyn Edge + 'a>> + 'a>;
}

/// An edge view handed out by a [`Graph`].
///
/// Identity, endpoints, and label are fixed at edge creation; property
/// access is live, with the same semantics as [`Vertex`] views.
pub trait Edge: fmt::Debug {
    fn id(&self) -> EdgeId;

    fn label(&self) -> Label;

    /// The vertex this edge leaves from.
    fn source<'a>(&'a self) -> Box<dyn Vertex + 'a>;

    /// The vertex this edge points to.
    fn target<'a>(&'a self) -> Box<dyn Vertex + 'a>;

    fn property(&self, key: &str) -> Option<PropertyValue>;

    fn property_keys(&self) -> Vec<String>;

    fn set_property(&self, key: &str, value: PropertyValue) -> GraphResult<Option<PropertyValue>>;

    fn remove_property(&self, key: &str) -> GraphResult<Option<PropertyValue>>;

    /// Creation timestamp in Unix milliseconds; `None` on a stale view.
    fn created_at(&self) -> Option<i64>;
}

/// A property graph.
///
/// Two conforming variants ship with this crate: the direct in-memory
/// implementation [`GraphStore`](crate::graph::GraphStore), and the
/// [`ReadOnlyGraph`](crate::wrappers::ReadOnlyGraph) decorator, which wraps
/// any conforming implementation and rejects every mutating operation.
///
/// Lookup misses are `None`, never errors. Enumerations yield elements in
/// the implementation's own order, and every call opens an independent
/// cursor.
pub trait Graph: fmt::Display {
    /// Add a vertex. With `None` the implementation assigns an id; a
    /// user-supplied id that already exists fails with
    /// [`GraphError::VertexAlreadyExists`].
    fn add_vertex<'a>(&'a self, id: Option<VertexId>) -> GraphResult<Box<dyn Vertex + 'a>>;

    fn vertex<'a>(&'a self, id: &VertexId) -> Option<Box<dyn Vertex + 'a>>;

    /// Remove a vertex and every edge incident to it.
    fn remove_vertex(&self, id: &VertexId) -> GraphResult<()>;

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item = Box<dyn Vertex + 'a>> + 'a>;

    /// Vertices whose `key` property equals `value`.
    fn vertices_with_property<'a>(
        &'a self,
        key: &str,
        value: &PropertyValue,
    ) -> Box<dyn Iterator<Item = Box<dyn Vertex + 'a>> + 'a>;

    /// Add a directed edge from `source` to `target`. Both endpoints must
    /// already exist.
    fn add_edge<'a>(
        &'a self,
        id: Option<EdgeId>,
        source: &VertexId,
        target: &VertexId,
        label: Label,
    ) -> GraphResult<Box<dyn Edge + 'a>>;

    fn edge<'a>(&'a self, id: &EdgeId) -> Option<Box<dyn Edge + 'a>>;

    fn remove_edge(&self, id: &EdgeId) -> GraphResult<()>;

    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item = Box<dyn Edge + 'a>> + 'a>;

    /// Edges whose `key` property equals `value`.
    fn edges_with_property<'a>(
        &'a self,
        key: &str,
        value: &PropertyValue,
    ) -> Box<dyn Iterator<Item = Box<dyn Edge + 'a>> + 'a>;

    /// A value copy of this graph's capability descriptor.
    fn features(&self) -> Features;

    /// Close the graph for further mutation. Treated as a lifecycle
    /// mutation: read-only wrappers block it, since the wrapper does not
    /// own the graph it decorates.
    fn shutdown(&self) -> GraphResult<()>;
}
