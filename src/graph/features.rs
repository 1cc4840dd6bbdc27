//! Capability descriptor for graph implementations

use serde::{Deserialize, Serialize};

/// Describes what a [`Graph`](crate::graph::Graph) implementation supports.
///
/// Implementations return a value copy from
/// [`Graph::features`](crate::graph::Graph::features), so callers may
/// inspect or modify the descriptor without affecting the graph. Wrapper
/// graphs set `is_wrapper` on the copy they return and leave every other
/// flag as the underlying graph reported it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    /// True when the reporting graph decorates another graph.
    pub is_wrapper: bool,
    pub is_persistent: bool,
    pub supports_vertex_properties: bool,
    pub supports_edge_properties: bool,
    pub supports_duplicate_edges: bool,
    pub supports_self_loops: bool,
    pub supports_user_supplied_ids: bool,
    pub supports_vertex_iteration: bool,
    pub supports_edge_iteration: bool,
    pub supports_transactions: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_off() {
        let features = Features::default();
        assert!(!features.is_wrapper);
        assert!(!features.is_persistent);
        assert!(!features.supports_transactions);
    }

    #[test]
    fn test_copy_then_flag() {
        let base = Features {
            supports_vertex_properties: true,
            supports_edge_properties: true,
            ..Features::default()
        };

        let mut copy = base.clone();
        copy.is_wrapper = true;

        assert!(!base.is_wrapper);
        assert!(copy.is_wrapper);
        assert!(copy.supports_vertex_properties);
    }
}
