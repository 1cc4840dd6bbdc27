//! Read-only vertex view

use super::iter::ReadOnlyEdges;
use crate::graph::{Edge, GraphError, GraphResult, PropertyValue, Vertex, VertexId};

/// Wraps a vertex view and refuses its edit operations.
///
/// Incidence iteration is delegated and re-wrapped, so edges reached
/// through a read-only vertex are read-only as well.
#[derive(Debug)]
pub struct ReadOnlyVertex<'g> {
    inner: Box<dyn Vertex + 'g>,
}

impl<'g> ReadOnlyVertex<'g> {
    pub fn new(inner: Box<dyn Vertex + 'g>) -> Self {
        ReadOnlyVertex { inner }
    }
}

impl Vertex for ReadOnlyVertex<'_> {
    fn id(&self) -> VertexId {
        self.inner.id()
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

    fn updated_at(&self) -> Option<i64> {
        self.inner.updated_at()
    }

    fn out_edges<'a>(&'a self) -> Box<dyn Iterator<Item = Box<dyn Edge + 'a>> + 'a> {
        Box::new(ReadOnlyEdges::new(self.inner.out_edges()))
    }

    fn in_edges<'a>(&'a self) -> Box<dyn Iterator<Item = Box<dyn Edge + 'a>> + 'a> {
        Box::new(ReadOnlyEdges::new(self.inner.in_edges()))
    }
}
