//! Read-only edge view

use super::vertex::ReadOnlyVertex;
use crate::graph::{Edge, EdgeId, GraphError, GraphResult, Label, PropertyValue, Vertex};

/// Wraps an edge view and refuses its edit operations.
///
/// Endpoint lookups are delegated and re-wrapped, so vertices reached
/// through a read-only edge are read-only as well.
#[derive(Debug)]
pub struct ReadOnlyEdge<'g> {
    inner: Box<dyn Edge + 'g>,
}

impl<'g> ReadOnlyEdge<'g> {
    pub fn new(inner: Box<dyn Edge + 'g>) -> Self {
        ReadOnlyEdge { inner }
    }
}

impl Edge for ReadOnlyEdge<'_> {
    fn id(&self) -> EdgeId {
        self.inner.id()
    }

    fn label(&self) -> Label {
        self.inner.label()
    }

    fn source<'a>(&'a self) -> Box<dyn Vertex + 'a> {
        Box::new(ReadOnlyVertex::new(self.inner.source()))
    }

    fn target<'a>(&'a self) -> Box<dyn Vertex + 'a> {
        Box::new(ReadOnlyVertex::new(self.inner.target()))
    }

    fn property(&self, key: &str) -> Option<PropertyValue> {
        self.inner.property(key)
    }

    fn property_keys(&self) -> Vec<String> {
        self.inner.property_keys()
    }

    fn set_property(&self, _key: &str, _value: PropertyValue) -> GraphResult<Option<PropertyValue>> {
        Err(GraphError::MutationNotAllowed)
    }

    fn remove_property(&self, _key: &str) -> GraphResult<Option<PropertyValue>> {
        Err(GraphError::MutationNotAllowed)
    }

    fn created_at(&self) -> Option<i64> {
        self.inner.created_at()
    }
}
