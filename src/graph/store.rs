//! In-memory graph storage implementation
//!
//! `GraphStore` is the direct implementation of the [`Graph`] trait: an
//! insertion-ordered property graph held entirely in memory, synchronized
//! internally with a `std::sync::RwLock` so every trait method can take
//! `&self` and handles can write through a shared borrow.
//!
//! Vertex and edge views handed out by the store are live handles: they
//! re-read the store on every access and never hold the lock between calls,
//! so two enumerations obtained separately never share a cursor and a handle
//! held across a removal simply reads as empty.

use super::features::Features;
use super::property::{PropertyMap, PropertyValue};
use super::traits::{Edge, Graph, GraphError, GraphResult, Vertex};
use super::types::{EdgeId, Label, VertexId};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::RwLock;
use tracing::{debug, info};

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[derive(Debug, Clone)]
struct VertexRecord {
    properties: PropertyMap,
    created_at: i64,
    updated_at: i64,
}

#[derive(Debug, Clone)]
struct EdgeRecord {
    source: VertexId,
    target: VertexId,
    label: Label,
    properties: PropertyMap,
    created_at: i64,
}

/// Immutable facts of an edge, captured when a handle is built. Identity,
/// endpoints, and label never change for the lifetime of an edge record.
#[derive(Debug, Clone)]
struct EdgeSeed {
    id: EdgeId,
    source: VertexId,
    target: VertexId,
    label: Label,
}

#[derive(Debug, Default)]
struct StoreInner {
    /// Primary vertex map, insertion-ordered so enumeration is deterministic
    vertices: IndexMap<VertexId, VertexRecord>,

    /// Primary edge map, insertion-ordered
    edges: IndexMap<EdgeId, EdgeRecord>,

    /// Outgoing edges for each vertex (adjacency list)
    outgoing: FxHashMap<VertexId, Vec<EdgeId>>,

    /// Incoming edges for each vertex (adjacency list)
    incoming: FxHashMap<VertexId, Vec<EdgeId>>,

    next_vertex_id: u64,
    next_edge_id: u64,

    /// Set by shutdown; mutations fail with `GraphError::Closed` afterwards
    closed: bool,
}

impl StoreInner {
    fn edge_seed(&self, id: &EdgeId) -> Option<EdgeSeed> {
        self.edges.get(id).map(|record| EdgeSeed {
            id: id.clone(),
            source: record.source.clone(),
            target: record.target.clone(),
            label: record.label.clone(),
        })
    }

    fn edge_seeds(&self, ids: &[EdgeId]) -> Vec<EdgeSeed> {
        ids.iter().filter_map(|id| self.edge_seed(id)).collect()
    }
}

/// In-memory property graph store
pub struct GraphStore {
    inner: RwLock<StoreInner>,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        GraphStore {
            inner: RwLock::new(StoreInner {
                next_vertex_id: 1,
                next_edge_id: 1,
                ..StoreInner::default()
            }),
        }
    }

    /// Number of vertices currently stored
    pub fn vertex_count(&self) -> usize {
        self.inner.read().unwrap().vertices.len()
    }

    /// Number of edges currently stored
    pub fn edge_count(&self) -> usize {
        self.inner.read().unwrap().edges.len()
    }

    /// Whether `shutdown` has been called
    pub fn is_closed(&self) -> bool {
        self.inner.read().unwrap().closed
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GraphStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStore")
            .field("vertices", &self.vertex_count())
            .field("edges", &self.edge_count())
            .finish()
    }
}

impl fmt::Display for GraphStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read().unwrap();
        write!(
            f,
            "graphstore[vertices:{} edges:{}]",
            inner.vertices.len(),
            inner.edges.len()
        )
    }
}

fn boxed_vertex_iter<'a>(
    store: &'a GraphStore,
    ids: Vec<VertexId>,
) -> Box<dyn Iterator<Item = Box<dyn Vertex + 'a>> + 'a> {
    Box::new(
        ids.into_iter()
            .map(move |id| Box::new(VertexHandle { store, id }) as Box<dyn Vertex + 'a>),
    )
}

fn boxed_edge_iter<'a>(
    store: &'a GraphStore,
    seeds: Vec<EdgeSeed>,
) -> Box<dyn Iterator<Item = Box<dyn Edge + 'a>> + 'a> {
    Box::new(
        seeds
            .into_iter()
            .map(move |seed| Box::new(EdgeHandle { store, seed }) as Box<dyn Edge + 'a>),
    )
}

impl Graph for GraphStore {
    fn add_vertex<'a>(&'a self, id: Option<VertexId>) -> GraphResult<Box<dyn Vertex + 'a>> {
        let mut inner = self.inner.write().unwrap();
        if inner.closed {
            return Err(GraphError::Closed);
        }

        let id = match id {
            Some(id) => {
                if inner.vertices.contains_key(&id) {
                    return Err(GraphError::VertexAlreadyExists(id));
                }
                id
            }
            // Generated ids skip anything a caller already claimed.
            None => loop {
                let candidate = VertexId::new(inner.next_vertex_id.to_string());
                inner.next_vertex_id += 1;
                if !inner.vertices.contains_key(&candidate) {
                    break candidate;
                }
            },
        };

        let now = now_millis();
        inner.vertices.insert(
            id.clone(),
            VertexRecord {
                properties: PropertyMap::new(),
                created_at: now,
                updated_at: now,
            },
        );
        inner.outgoing.entry(id.clone()).or_default();
        inner.incoming.entry(id.clone()).or_default();
        debug!("added vertex {}", id);
        drop(inner);

        Ok(Box::new(VertexHandle { store: self, id }))
    }

    fn vertex<'a>(&'a self, id: &VertexId) -> Option<Box<dyn Vertex + 'a>> {
        if !self.inner.read().unwrap().vertices.contains_key(id) {
            return None;
        }
        Some(Box::new(VertexHandle {
            store: self,
            id: id.clone(),
        }))
    }

    fn remove_vertex(&self, id: &VertexId) -> GraphResult<()> {
        let mut inner = self.inner.write().unwrap();
        if inner.closed {
            return Err(GraphError::Closed);
        }
        if inner.vertices.shift_remove(id).is_none() {
            return Err(GraphError::VertexNotFound(id.clone()));
        }

        // Self-loops appear in both adjacency lists; dedup so each incident
        // edge is removed exactly once.
        let mut incident: Vec<EdgeId> = inner.outgoing.remove(id).unwrap_or_default();
        incident.extend(inner.incoming.remove(id).unwrap_or_default());
        incident.sort();
        incident.dedup();

        let removed_edges = incident.len();
        for edge_id in incident {
            if let Some(record) = inner.edges.shift_remove(&edge_id) {
                if let Some(out) = inner.outgoing.get_mut(&record.source) {
                    out.retain(|e| e != &edge_id);
                }
                if let Some(inc) = inner.incoming.get_mut(&record.target) {
                    inc.retain(|e| e != &edge_id);
                }
            }
        }
        debug!("removed vertex {} and {} incident edges", id, removed_edges);
        Ok(())
    }

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item = Box<dyn Vertex + 'a>> + 'a> {
        let ids: Vec<VertexId> = self.inner.read().unwrap().vertices.keys().cloned().collect();
        boxed_vertex_iter(self, ids)
    }

    fn vertices_with_property<'a>(
        &'a self,
        key: &str,
        value: &PropertyValue,
    ) -> Box<dyn Iterator<Item = Box<dyn Vertex + 'a>> + 'a> {
        let ids: Vec<VertexId> = {
            let inner = self.inner.read().unwrap();
            inner
                .vertices
                .iter()
                .filter(|(_, record)| record.properties.get(key) == Some(value))
                .map(|(id, _)| id.clone())
                .collect()
        };
        boxed_vertex_iter(self, ids)
    }

    fn add_edge<'a>(
        &'a self,
        id: Option<EdgeId>,
        source: &VertexId,
        target: &VertexId,
        label: Label,
    ) -> GraphResult<Box<dyn Edge + 'a>> {
        let mut inner = self.inner.write().unwrap();
        if inner.closed {
            return Err(GraphError::Closed);
        }
        if !inner.vertices.contains_key(source) {
            return Err(GraphError::InvalidEdgeSource(source.clone()));
        }
        if !inner.vertices.contains_key(target) {
            return Err(GraphError::InvalidEdgeTarget(target.clone()));
        }

        let id = match id {
            Some(id) => {
                if inner.edges.contains_key(&id) {
                    return Err(GraphError::EdgeAlreadyExists(id));
                }
                id
            }
            None => loop {
                let candidate = EdgeId::new(inner.next_edge_id.to_string());
                inner.next_edge_id += 1;
                if !inner.edges.contains_key(&candidate) {
                    break candidate;
                }
            },
        };

        inner.edges.insert(
            id.clone(),
            EdgeRecord {
                source: source.clone(),
                target: target.clone(),
                label: label.clone(),
                properties: PropertyMap::new(),
                created_at: now_millis(),
            },
        );
        inner.outgoing.entry(source.clone()).or_default().push(id.clone());
        inner.incoming.entry(target.clone()).or_default().push(id.clone());
        debug!("added edge {} ({} -[{}]-> {})", id, source, label, target);
        drop(inner);

        Ok(Box::new(EdgeHandle {
            store: self,
            seed: EdgeSeed {
                id,
                source: source.clone(),
                target: target.clone(),
                label,
            },
        }))
    }

    fn edge<'a>(&'a self, id: &EdgeId) -> Option<Box<dyn Edge + 'a>> {
        let seed = self.inner.read().unwrap().edge_seed(id)?;
        Some(Box::new(EdgeHandle { store: self, seed }))
    }

    fn remove_edge(&self, id: &EdgeId) -> GraphResult<()> {
        let mut inner = self.inner.write().unwrap();
        if inner.closed {
            return Err(GraphError::Closed);
        }
        let record = inner
            .edges
            .shift_remove(id)
            .ok_or_else(|| GraphError::EdgeNotFound(id.clone()))?;
        if let Some(out) = inner.outgoing.get_mut(&record.source) {
            out.retain(|e| e != id);
        }
        if let Some(inc) = inner.incoming.get_mut(&record.target) {
            inc.retain(|e| e != id);
        }
        debug!("removed edge {}", id);
        Ok(())
    }

    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item = Box<dyn Edge + 'a>> + 'a> {
        let seeds: Vec<EdgeSeed> = {
            let inner = self.inner.read().unwrap();
            inner
                .edges
                .iter()
                .map(|(id, record)| EdgeSeed {
                    id: id.clone(),
                    source: record.source.clone(),
                    target: record.target.clone(),
                    label: record.label.clone(),
                })
                .collect()
        };
        boxed_edge_iter(self, seeds)
    }

    fn edges_with_property<'a>(
        &'a self,
        key: &str,
        value: &PropertyValue,
    ) -> Box<dyn Iterator<Item = Box<dyn Edge + 'a>> + 'a> {
        let seeds: Vec<EdgeSeed> = {
            let inner = self.inner.read().unwrap();
            inner
                .edges
                .iter()
                .filter(|(_, record)| record.properties.get(key) == Some(value))
                .map(|(id, record)| EdgeSeed {
                    id: id.clone(),
                    source: record.source.clone(),
                    target: record.target.clone(),
                    label: record.label.clone(),
                })
                .collect()
        };
        boxed_edge_iter(self, seeds)
    }

    fn features(&self) -> Features {
        Features {
            is_wrapper: false,
            is_persistent: false,
            supports_vertex_properties: true,
            supports_edge_properties: true,
            supports_duplicate_edges: true,
            supports_self_loops: true,
            supports_user_supplied_ids: true,
            supports_vertex_iteration: true,
            supports_edge_iteration: true,
            supports_transactions: false,
        }
    }

    fn shutdown(&self) -> GraphResult<()> {
        let mut inner = self.inner.write().unwrap();
        if !inner.closed {
            inner.closed = true;
            info!(
                "graph store shut down ({} vertices, {} edges retained)",
                inner.vertices.len(),
                inner.edges.len()
            );
        }
        Ok(())
    }
}

/// Live vertex view over a `GraphStore`
#[derive(Debug)]
struct VertexHandle<'g> {
    store: &'g GraphStore,
    id: VertexId,
}

impl Vertex for VertexHandle<'_> {
    fn id(&self) -> VertexId {
        self.id.clone()
    }

    fn property(&self, key: &str) -> Option<PropertyValue> {
        let inner = self.store.inner.read().unwrap();
        inner
            .vertices
            .get(&self.id)
            .and_then(|record| record.properties.get(key).cloned())
    }

    fn property_keys(&self) -> Vec<String> {
        let inner = self.store.inner.read().unwrap();
        inner
            .vertices
            .get(&self.id)
            .map(|record| record.properties.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn set_property(&self, key: &str, value: PropertyValue) -> GraphResult<Option<PropertyValue>> {
        let mut inner = self.store.inner.write().unwrap();
        if inner.closed {
            return Err(GraphError::Closed);
        }
        let record = inner
            .vertices
            .get_mut(&self.id)
            .ok_or_else(|| GraphError::VertexNotFound(self.id.clone()))?;
        record.updated_at = now_millis();
        Ok(record.properties.insert(key.to_string(), value))
    }

    fn remove_property(&self, key: &str) -> GraphResult<Option<PropertyValue>> {
        let mut inner = self.store.inner.write().unwrap();
        if inner.closed {
            return Err(GraphError::Closed);
        }
        let record = inner
            .vertices
            .get_mut(&self.id)
            .ok_or_else(|| GraphError::VertexNotFound(self.id.clone()))?;
        let removed = record.properties.remove(key);
        if removed.is_some() {
            record.updated_at = now_millis();
        }
        Ok(removed)
    }

    fn created_at(&self) -> Option<i64> {
        let inner = self.store.inner.read().unwrap();
        inner.vertices.get(&self.id).map(|record| record.created_at)
    }

    fn updated_at(&self) -> Option<i64> {
        let inner = self.store.inner.read().unwrap();
        inner.vertices.get(&self.id).map(|record| record.updated_at)
    }

    fn out_edges<'a>(&'a self) -> Box<dyn Iterator<Item = Box<dyn Edge + 'a>> + 'a> {
        let seeds = {
            let inner = self.store.inner.read().unwrap();
            match inner.outgoing.get(&self.id) {
                Some(ids) => inner.edge_seeds(ids),
                None => Vec::new(),
            }
        };
        boxed_edge_iter(self.store, seeds)
    }

    fn in_edges<'a>(&'a self) -> Box<dyn Iterator<Item = Box<dyn Edge + 'a>> + 'a> {
        let seeds = {
            let inner = self.store.inner.read().unwrap();
            match inner.incoming.get(&self.id) {
                Some(ids) => inner.edge_seeds(ids),
                None => Vec::new(),
            }
        };
        boxed_edge_iter(self.store, seeds)
    }
}

/// Live edge view over a `GraphStore`
#[derive(Debug)]
struct EdgeHandle<'g> {
    store: &'g GraphStore,
    seed: EdgeSeed,
}

impl Edge for EdgeHandle<'_> {
    fn id(&self) -> EdgeId {
        self.seed.id.clone()
    }

    fn label(&self) -> Label {
        self.seed.label.clone()
    }

    fn source<'a>(&'a self) -> Box<dyn Vertex + 'a> {
        Box::new(VertexHandle {
            store: self.store,
            id: self.seed.source.clone(),
        })
    }

    fn target<'a>(&'a self) -> Box<dyn Vertex + 'a> {
        Box::new(VertexHandle {
            store: self.store,
            id: self.seed.target.clone(),
        })
    }

    fn property(&self, key: &str) -> Option<PropertyValue> {
        let inner = self.store.inner.read().unwrap();
        inner
            .edges
            .get(&self.seed.id)
            .and_then(|record| record.properties.get(key).cloned())
    }

    fn property_keys(&self) -> Vec<String> {
        let inner = self.store.inner.read().unwrap();
        inner
            .edges
            .get(&self.seed.id)
            .map(|record| record.properties.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn set_property(&self, key: &str, value: PropertyValue) -> GraphResult<Option<PropertyValue>> {
        let mut inner = self.store.inner.write().unwrap();
        if inner.closed {
            return Err(GraphError::Closed);
        }
        let record = inner
            .edges
            .get_mut(&self.seed.id)
            .ok_or_else(|| GraphError::EdgeNotFound(self.seed.id.clone()))?;
        Ok(record.properties.insert(key.to_string(), value))
    }

    fn remove_property(&self, key: &str) -> GraphResult<Option<PropertyValue>> {
        let mut inner = self.store.inner.write().unwrap();
        if inner.closed {
            return Err(GraphError::Closed);
        }
        let record = inner
            .edges
            .get_mut(&self.seed.id)
            .ok_or_else(|| GraphError::EdgeNotFound(self.seed.id.clone()))?;
        Ok(record.properties.remove(key))
    }

    fn created_at(&self) -> Option<i64> {
        let inner = self.store.inner.read().unwrap();
        inner.edges.get(&self.seed.id).map(|record| record.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get_vertex() {
        let store = GraphStore::new();
        let v = store.add_vertex(Some(VertexId::new("A"))).unwrap();
        assert_eq!(v.id(), VertexId::new("A"));

        let found = store.vertex(&VertexId::new("A")).unwrap();
        assert_eq!(found.id(), VertexId::new("A"));
        assert!(store.vertex(&VertexId::new("missing")).is_none());
    }

    #[test]
    fn test_generated_ids_skip_user_supplied() {
        let store = GraphStore::new();
        store.add_vertex(Some(VertexId::new("1"))).unwrap();
        let generated = store.add_vertex(None).unwrap();
        assert_eq!(generated.id(), VertexId::new("2"));
    }

    #[test]
    fn test_duplicate_vertex_id_rejected() {
        let store = GraphStore::new();
        store.add_vertex(Some(VertexId::new("A"))).unwrap();
        let err = store.add_vertex(Some(VertexId::new("A"))).unwrap_err();
        assert_eq!(err, GraphError::VertexAlreadyExists(VertexId::new("A")));
        assert_eq!(store.vertex_count(), 1);
    }

    #[test]
    fn test_vertex_properties_write_through() {
        let store = GraphStore::new();
        let v = store.add_vertex(Some(VertexId::new("A"))).unwrap();
        assert_eq!(v.set_property("name", "Alice".into()).unwrap(), None);

        // A second handle to the same vertex sees the write.
        let again = store.vertex(&VertexId::new("A")).unwrap();
        assert_eq!(again.property("name").unwrap().as_string(), Some("Alice"));

        let old = again.set_property("name", "Alicia".into()).unwrap();
        assert_eq!(old.unwrap().as_string(), Some("Alice"));

        let removed = again.remove_property("name").unwrap();
        assert_eq!(removed.unwrap().as_string(), Some("Alicia"));
        assert!(again.property("name").is_none());
    }

    #[test]
    fn test_edge_endpoint_validation() {
        let store = GraphStore::new();
        store.add_vertex(Some(VertexId::new("A"))).unwrap();

        let err = store
            .add_edge(None, &VertexId::new("ghost"), &VertexId::new("A"), Label::new("x"))
            .unwrap_err();
        assert_eq!(err, GraphError::InvalidEdgeSource(VertexId::new("ghost")));

        let err = store
            .add_edge(None, &VertexId::new("A"), &VertexId::new("ghost"), Label::new("x"))
            .unwrap_err();
        assert_eq!(err, GraphError::InvalidEdgeTarget(VertexId::new("ghost")));
        assert_eq!(store.edge_count(), 0);
    }

    #[test]
    fn test_edge_endpoints_and_label() {
        let store = GraphStore::new();
        store.add_vertex(Some(VertexId::new("A"))).unwrap();
        store.add_vertex(Some(VertexId::new("B"))).unwrap();
        let e = store
            .add_edge(
                Some(EdgeId::new("e1")),
                &VertexId::new("A"),
                &VertexId::new("B"),
                Label::new("knows"),
            )
            .unwrap();

        assert_eq!(e.id(), EdgeId::new("e1"));
        assert_eq!(e.label(), Label::new("knows"));
        assert_eq!(e.source().id(), VertexId::new("A"));
        assert_eq!(e.target().id(), VertexId::new("B"));
    }

    #[test]
    fn test_incidence_iteration() {
        let store = GraphStore::new();
        let a = store.add_vertex(Some(VertexId::new("A"))).unwrap();
        store.add_vertex(Some(VertexId::new("B"))).unwrap();
        store.add_vertex(Some(VertexId::new("C"))).unwrap();
        store
            .add_edge(None, &VertexId::new("A"), &VertexId::new("B"), Label::new("knows"))
            .unwrap();
        store
            .add_edge(None, &VertexId::new("A"), &VertexId::new("C"), Label::new("knows"))
            .unwrap();
        store
            .add_edge(None, &VertexId::new("B"), &VertexId::new("A"), Label::new("follows"))
            .unwrap();

        let out: Vec<VertexId> = a.out_edges().map(|e| e.target().id()).collect();
        assert_eq!(out, vec![VertexId::new("B"), VertexId::new("C")]);

        let inc: Vec<VertexId> = a.in_edges().map(|e| e.source().id()).collect();
        assert_eq!(inc, vec![VertexId::new("B")]);
    }

    #[test]
    fn test_remove_vertex_cascades_to_edges() {
        let store = GraphStore::new();
        store.add_vertex(Some(VertexId::new("A"))).unwrap();
        store.add_vertex(Some(VertexId::new("B"))).unwrap();
        store
            .add_edge(None, &VertexId::new("A"), &VertexId::new("B"), Label::new("knows"))
            .unwrap();
        // Self-loop must be removed exactly once.
        store
            .add_edge(None, &VertexId::new("A"), &VertexId::new("A"), Label::new("self"))
            .unwrap();

        store.remove_vertex(&VertexId::new("A")).unwrap();
        assert_eq!(store.vertex_count(), 1);
        assert_eq!(store.edge_count(), 0);

        let b = store.vertex(&VertexId::new("B")).unwrap();
        assert_eq!(b.in_edges().count(), 0);
    }

    #[test]
    fn test_remove_missing_elements() {
        let store = GraphStore::new();
        assert_eq!(
            store.remove_vertex(&VertexId::new("A")).unwrap_err(),
            GraphError::VertexNotFound(VertexId::new("A"))
        );
        assert_eq!(
            store.remove_edge(&EdgeId::new("e")).unwrap_err(),
            GraphError::EdgeNotFound(EdgeId::new("e"))
        );
    }

    #[test]
    fn test_enumeration_is_insertion_ordered() {
        let store = GraphStore::new();
        for id in ["C", "A", "B"] {
            store.add_vertex(Some(VertexId::new(id))).unwrap();
        }
        let ids: Vec<String> = store.vertices().map(|v| v.id().to_string()).collect();
        assert_eq!(ids, vec!["C", "A", "B"]);

        // Removal keeps the order of the survivors.
        store.remove_vertex(&VertexId::new("A")).unwrap();
        let ids: Vec<String> = store.vertices().map(|v| v.id().to_string()).collect();
        assert_eq!(ids, vec!["C", "B"]);
    }

    #[test]
    fn test_property_filtered_enumeration() {
        let store = GraphStore::new();
        let a = store.add_vertex(Some(VertexId::new("A"))).unwrap();
        a.set_property("lang", "rust".into()).unwrap();
        let b = store.add_vertex(Some(VertexId::new("B"))).unwrap();
        b.set_property("lang", "java".into()).unwrap();
        store.add_vertex(Some(VertexId::new("C"))).unwrap();

        let matched: Vec<VertexId> = store
            .vertices_with_property("lang", &"rust".into())
            .map(|v| v.id())
            .collect();
        assert_eq!(matched, vec![VertexId::new("A")]);

        store.add_vertex(Some(VertexId::new("D"))).unwrap();
        store
            .add_edge(None, &VertexId::new("A"), &VertexId::new("B"), Label::new("x"))
            .unwrap()
            .set_property("weight", 10i64.into())
            .unwrap();
        store
            .add_edge(None, &VertexId::new("C"), &VertexId::new("D"), Label::new("x"))
            .unwrap();

        let matched: Vec<EdgeId> = store
            .edges_with_property("weight", &10i64.into())
            .map(|e| e.id())
            .collect();
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_duplicate_edges_between_same_vertices() {
        let store = GraphStore::new();
        store.add_vertex(Some(VertexId::new("A"))).unwrap();
        store.add_vertex(Some(VertexId::new("B"))).unwrap();
        store
            .add_edge(None, &VertexId::new("A"), &VertexId::new("B"), Label::new("knows"))
            .unwrap();
        store
            .add_edge(None, &VertexId::new("A"), &VertexId::new("B"), Label::new("knows"))
            .unwrap();
        assert_eq!(store.edge_count(), 2);
    }

    #[test]
    fn test_stale_handle_reads_empty() {
        let store = GraphStore::new();
        let v = store.add_vertex(Some(VertexId::new("A"))).unwrap();
        v.set_property("name", "Alice".into()).unwrap();
        store.remove_vertex(&VertexId::new("A")).unwrap();

        assert!(v.property("name").is_none());
        assert!(v.property_keys().is_empty());
        assert_eq!(
            v.set_property("name", "x".into()).unwrap_err(),
            GraphError::VertexNotFound(VertexId::new("A"))
        );
    }

    #[test]
    fn test_shutdown_blocks_mutation_keeps_reads() {
        let store = GraphStore::new();
        store.add_vertex(Some(VertexId::new("A"))).unwrap();
        store.shutdown().unwrap();
        assert!(store.is_closed());

        assert_eq!(store.add_vertex(None).unwrap_err(), GraphError::Closed);
        assert_eq!(
            store.remove_vertex(&VertexId::new("A")).unwrap_err(),
            GraphError::Closed
        );
        assert!(store.vertex(&VertexId::new("A")).is_some());

        // Idempotent.
        store.shutdown().unwrap();
    }

    #[test]
    fn test_timestamps() {
        let store = GraphStore::new();
        let v = store.add_vertex(Some(VertexId::new("A"))).unwrap();
        let created = v.created_at().unwrap();
        assert!(created > 0);
        assert_eq!(v.updated_at().unwrap(), created);

        std::thread::sleep(std::time::Duration::from_millis(10));
        v.set_property("k", "v".into()).unwrap();
        assert!(v.updated_at().unwrap() > created);
    }

    #[test]
    fn test_display() {
        let store = GraphStore::new();
        store.add_vertex(Some(VertexId::new("A"))).unwrap();
        store.add_vertex(Some(VertexId::new("B"))).unwrap();
        store
            .add_edge(None, &VertexId::new("A"), &VertexId::new("B"), Label::new("knows"))
            .unwrap();
        assert_eq!(format!("{}", store), "graphstore[vertices:2 edges:1]");
    }

    #[test]
    fn test_features() {
        let store = GraphStore::new();
        let features = store.features();
        assert!(!features.is_wrapper);
        assert!(features.supports_vertex_properties);
        assert!(features.supports_duplicate_edges);
        assert!(!features.supports_transactions);
    }

    #[test]
    fn test_concurrent_reads() {
        use std::sync::Arc;

        let store = Arc::new(GraphStore::new());
        for id in ["A", "B", "C"] {
            store.add_vertex(Some(VertexId::new(id))).unwrap();
        }

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.vertices().count())
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 3);
        }
    }
}
