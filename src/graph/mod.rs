//! Property graph data model and the in-memory direct implementation
//!
//! This module implements the property graph model:
//! - Vertices and directed edges addressed by opaque string identifiers
//! - Labels on edges, typed key/value properties on both element kinds
//! - Multiple edges between the same vertex pair, self-loops allowed
//! - In-memory storage with insertion-ordered enumeration

pub mod features;
pub mod property;
pub mod store;
pub mod traits;
pub mod types;

// Re-export main types
pub use features::Features;
pub use property::{PropertyMap, PropertyValue};
pub use store::GraphStore;
pub use traits::{Edge, Graph, GraphError, GraphResult, Vertex};
pub use types::{EdgeId, Label, VertexId};
