//! In-memory graph store for the link-state database
//!
//! Routers are appended in insertion order and receive dense indices.
//! Links are undirected: each insertion writes one adjacency entry on both
//! endpoints, preserving insertion order in each record.

use std::collections::HashMap;

use crate::error::{Result, SpfError};
use crate::graph::types::{Adjacency, NodeIndex, Weight};

#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    names: Vec<String>,
    adjacency: Vec<Vec<Adjacency>>,
    by_name: HashMap<String, NodeIndex>,
    edge_count: usize,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a router and return its index.
    ///
    /// Names are unique; re-registering an existing name fails with
    /// `DuplicateNode` and leaves the store untouched.
    pub fn add_node(&mut self, name: &str) -> Result<NodeIndex> {
        if self.by_name.contains_key(name) {
            return Err(SpfError::DuplicateNode {
                name: name.to_string(),
            });
        }

        let idx = NodeIndex::new(self.names.len());
        self.names.push(name.to_string());
        self.adjacency.push(Vec::new());
        self.by_name.insert(name.to_string(), idx);

        tracing::trace!(name, index = idx.index(), "add_node");
        Ok(idx)
    }

    /// Add an undirected link between two registered routers.
    ///
    /// Both names are resolved before anything is written, so a failed call
    /// never leaves a half-inserted link behind.
    pub fn add_edge(&mut self, origin: &str, dest: &str, weight: Weight) -> Result<()> {
        let from = self
            .resolve_index(origin)
            .ok_or_else(|| SpfError::node_not_found(origin))?;
        let to = self
            .resolve_index(dest)
            .ok_or_else(|| SpfError::node_not_found(dest))?;

        self.adjacency[from.index()].push(Adjacency {
            neighbor: to,
            weight,
        });
        self.adjacency[to.index()].push(Adjacency {
            neighbor: from,
            weight,
        });
        self.edge_count += 1;

        tracing::trace!(origin, dest, weight, "add_edge");
        Ok(())
    }

    /// Resolve a router name to its index
    pub fn resolve_index(&self, name: &str) -> Option<NodeIndex> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of undirected links (each counted once)
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of the router at `idx` (panics if out of bounds).
    pub fn name(&self, idx: NodeIndex) -> &str {
        &self.names[idx.index()]
    }

    /// Adjacency record for `idx`, in link insertion order.
    pub fn neighbors(&self, idx: NodeIndex) -> &[Adjacency] {
        self.adjacency
            .get(idx.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate over all routers in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (NodeIndex::new(i), name.as_str()))
    }
}
