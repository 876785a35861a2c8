use crate::graph::types::{Adjacency, NodeIndex};
use crate::graph::GraphStore;

/// Read-only view of a link-state database
///
/// The SPF engine only needs name resolution at the two endpoints and
/// index-based neighbor access during relaxation. Reports walk indices
/// `0..node_count()`, which are dense by construction.
pub trait LinkStateDatabase {
    fn node_count(&self) -> usize;
    /// Number of undirected links
    fn edge_count(&self) -> usize;
    fn resolve_index(&self, name: &str) -> Option<NodeIndex>;
    fn name(&self, idx: NodeIndex) -> &str;
    fn neighbors(&self, idx: NodeIndex) -> &[Adjacency];
}

impl LinkStateDatabase for GraphStore {
    fn node_count(&self) -> usize {
        self.node_count()
    }

    fn edge_count(&self) -> usize {
        self.edge_count()
    }

    fn resolve_index(&self, name: &str) -> Option<NodeIndex> {
        self.resolve_index(name)
    }

    fn name(&self, idx: NodeIndex) -> &str {
        self.name(idx)
    }

    fn neighbors(&self, idx: NodeIndex) -> &[Adjacency] {
        self.neighbors(idx)
    }
}
