//! Topology configuration
//!
//! A topology is the caller-supplied data that populates the link-state
//! database. It is either read from a TOML file:
//!
//! ```toml
//! routers = ["A", "B", "1"]
//!
//! [[links]]
//! from = "A"
//! to = "1"
//! latency_ms = 6
//! ```
//!
//! or taken from the built-in reference network.

pub mod reference;
pub mod report;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpfError};
use crate::graph::{GraphStore, Weight};

pub use report::{render_topology_human, LinkReport, RouterReport, TopologyReport};

/// A single undirected link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkConfig {
    pub from: String,
    pub to: String,
    pub latency_ms: Weight,
}

impl LinkConfig {
    pub fn new(from: &str, to: &str, latency_ms: Weight) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            latency_ms,
        }
    }
}

/// Routers and links, in the order they are inserted into the graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopologyConfig {
    #[serde(default)]
    pub routers: Vec<String>,

    #[serde(default)]
    pub links: Vec<LinkConfig>,
}

/// An entry that could not be inserted while building the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub item: String,
    pub reason: String,
}

/// Result of building a graph from a topology
#[derive(Debug, Clone)]
pub struct BuiltTopology {
    pub graph: GraphStore,
    pub skipped: Vec<SkippedEntry>,
}

impl TopologyConfig {
    /// Parse a topology from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a topology file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| SpfError::io_operation("read topology", path.display(), e))?;

        Self::parse(&content).map_err(|e| SpfError::InvalidTopology {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Populate a graph store: routers first, then links.
    ///
    /// Duplicate routers and links naming unknown routers are skipped and
    /// reported; building carries on with the remaining entries.
    #[tracing::instrument(skip(self), fields(routers = self.routers.len(), links = self.links.len()))]
    pub fn build(&self) -> BuiltTopology {
        let mut graph = GraphStore::new();
        let mut skipped = Vec::new();

        for name in &self.routers {
            if let Err(e) = graph.add_node(name) {
                tracing::warn!(router = %name, error = %e, "skipping router");
                skipped.push(SkippedEntry {
                    item: format!("router {}", name),
                    reason: e.to_string(),
                });
            }
        }

        for link in &self.links {
            if let Err(e) = graph.add_edge(&link.from, &link.to, link.latency_ms) {
                tracing::warn!(from = %link.from, to = %link.to, error = %e, "skipping link");
                skipped.push(SkippedEntry {
                    item: format!("link {}-{}", link.from, link.to),
                    reason: e.to_string(),
                });
            }
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            skipped = skipped.len(),
            "topology_built"
        );

        BuiltTopology { graph, skipped }
    }
}
