//! Read-only graph decorator
//!
//! `ReadOnlyGraph` wraps any [`Graph`] implementation and rejects its
//! mutating operations, so the wrapped graph can only be read through it.
//! Every entity the wrapper hands out is itself re-wrapped read-only, so
//! the guarantee holds transitively for vertices and edges obtained by
//! lookup, by enumeration, or by walking incidences and endpoints.

mod edge;
mod iter;
mod vertex;

pub use edge::ReadOnlyEdge;
pub use iter::{ReadOnlyEdges, ReadOnlyVertices};
pub use vertex::ReadOnlyVertex;

use crate::graph::{
    Edge, EdgeId, Features, Graph, GraphError, GraphResult, Label, PropertyValue, Vertex, VertexId,
};
use std::fmt;
use tracing::debug;

/// A non-mutating facade over another graph.
///
/// Holds exactly one thing: a shared borrow of the wrapped graph. The
/// borrow makes mutation of the base through the wrapper impossible by
/// construction; on top of that, every mutating trait method rejects with
/// [`GraphError::MutationNotAllowed`] before the base is consulted, so the
/// rejection is unconditional and independent of argument validity.
///
/// Read operations delegate to the base unchanged, re-wrapping returned
/// entities; results are never cached, filtered, or reordered, and errors
/// the base raises during a read pass through untouched.
pub struct ReadOnlyGraph<'g, G: Graph + ?Sized> {
    base: &'g G,
}

impl<'g, G: Graph + ?Sized> ReadOnlyGraph<'g, G> {
    /// Wrap `base` in a read-only facade.
    pub fn new(base: &'g G) -> Self {
        ReadOnlyGraph { base }
    }

    /// The exact wrapped graph reference held since construction.
    pub fn base_graph(&self) -> &'g G {
        self.base
    }
}

impl<G: Graph + ?Sized> fmt::Display for ReadOnlyGraph<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "readonlygraph[{}]", self.base)
    }
}

impl<G: Graph + ?Sized> Graph for ReadOnlyGraph<'_, G> {
    fn add_vertex<'a>(&'a self, _id: Option<VertexId>) -> GraphResult<Box<dyn Vertex + 'a>> {
        debug!("rejected add_vertex on read-only graph");
        Err(GraphError::MutationNotAllowed)
    }

    fn vertex<'a>(&'a self, id: &VertexId) -> Option<Box<dyn Vertex + 'a>> {
        self.base
            .vertex(id)
            .map(|v| Box::new(ReadOnlyVertex::new(v)) as Box<dyn Vertex + 'a>)
    }

    fn remove_vertex(&self, _id: &VertexId) -> GraphResult<()> {
        debug!("rejected remove_vertex on read-only graph");
        Err(GraphError::MutationNotAllowed)
    }

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item = Box<dyn Vertex + 'a>> + 'a> {
        Box::new(ReadOnlyVertices::new(self.base.vertices()))
    }

    fn vertices_with_property<'a>(
        &'a self,
        key: &str,
        value: &PropertyValue,
    ) -> Box<dyn Iterator<Item = Box<dyn Vertex + 'a>> + 'a> {
        Box::new(ReadOnlyVertices::new(
            self.base.vertices_with_property(key, value),
        ))
    }

    fn add_edge<'a>(
        &'a self,
        _id: Option<EdgeId>,
        _source: &VertexId,
        _target: &VertexId,
        _label: Label,
    ) -> GraphResult<Box<dyn Edge + 'a>> {
        debug!("rejected add_edge on read-only graph");
        Err(GraphError::MutationNotAllowed)
    }

    fn edge<'a>(&'a self, id: &EdgeId) -> Option<Box<dyn Edge + 'a>> {
        self.base
            .edge(id)
            .map(|e| Box::new(ReadOnlyEdge::new(e)) as Box<dyn Edge + 'a>)
    }

    fn remove_edge(&self, _id: &EdgeId) -> GraphResult<()> {
        debug!("rejected remove_edge on read-only graph");
        Err(GraphError::MutationNotAllowed)
    }

    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item = Box<dyn Edge + 'a>> + 'a> {
        Box::new(ReadOnlyEdges::new(self.base.edges()))
    }

    fn edges_with_property<'a>(
        &'a self,
        key: &str,
        value: &PropertyValue,
    ) -> Box<dyn Iterator<Item = Box<dyn Edge + 'a>> + 'a> {
        Box::new(ReadOnlyEdges::new(self.base.edges_with_property(key, value)))
    }

    fn features(&self) -> Features {
        let mut features = self.base.features();
        features.is_wrapper = true;
        features
    }

    /// Shutdown is a lifecycle mutation of a graph this wrapper does not
    /// own, so it is blocked like the data mutators.
    fn shutdown(&self) -> GraphResult<()> {
        debug!("rejected shutdown on read-only graph");
        Err(GraphError::MutationNotAllowed)
    }
}
