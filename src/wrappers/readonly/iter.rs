//! Lazy re-wrapping iterators for read-only enumeration
//!
//! These carry the underlying iterator unchanged and wrap each element as
//! it is yielded: order, length, and laziness are exactly the base's.

use super::edge::ReadOnlyEdge;
use super::vertex::ReadOnlyVertex;
use crate::graph::{Edge, Vertex};

/// Wraps a vertex iterator, yielding each vertex as a [`ReadOnlyVertex`].
pub struct ReadOnlyVertices<'g> {
    inner: Box<dyn Iterator<Item = Box<dyn Vertex + 'g>> + 'g>,
}

impl<'g> ReadOnlyVertices<'g> {
    pub fn new(inner: Box<dyn Iterator<Item = Box<dyn Vertex + 'g>> + 'g>) -> Self {
        ReadOnlyVertices { inner }
    }
}

impl<'g> Iterator for ReadOnlyVertices<'g> {
    type Item = Box<dyn Vertex + 'g>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|v| Box::new(ReadOnlyVertex::new(v)) as Box<dyn Vertex + 'g>)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Wraps an edge iterator, yielding each edge as a [`ReadOnlyEdge`].
pub struct ReadOnlyEdges<'g> {
    inner: Box<dyn Iterator<Item = Box<dyn Edge + 'g>> + 'g>,
}

impl<'g> ReadOnlyEdges<'g> {
    pub fn new(inner: Box<dyn Iterator<Item = Box<dyn Edge + 'g>> + 'g>) -> Self {
        ReadOnlyEdges { inner }
    }
}

impl<'g> Iterator for ReadOnlyEdges<'g> {
    type Item = Box<dyn Edge + 'g>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|e| Box::new(ReadOnlyEdge::new(e)) as Box<dyn Edge + 'g>)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
