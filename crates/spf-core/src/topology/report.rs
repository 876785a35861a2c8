//! Read-only dumps of the link-state database

use serde::Serialize;
use std::fmt::Write;

use crate::graph::{LinkStateDatabase, NodeIndex, Weight};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    pub neighbor: String,
    pub latency_ms: Weight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouterReport {
    pub name: String,
    pub links: Vec<LinkReport>,
}

/// Serializable snapshot of every router and its adjacency record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopologyReport {
    pub router_count: usize,
    pub link_count: usize,
    pub routers: Vec<RouterReport>,
}

/// Routers of `db` in index order
fn routers(db: &dyn LinkStateDatabase) -> impl Iterator<Item = NodeIndex> {
    (0..db.node_count()).map(NodeIndex::new)
}

impl TopologyReport {
    pub fn from_db(db: &dyn LinkStateDatabase) -> Self {
        let routers = routers(db)
            .map(|idx| RouterReport {
                name: db.name(idx).to_string(),
                links: db
                    .neighbors(idx)
                    .iter()
                    .map(|adj| LinkReport {
                        neighbor: db.name(adj.neighbor).to_string(),
                        latency_ms: adj.weight,
                    })
                    .collect(),
            })
            .collect();

        Self {
            router_count: db.node_count(),
            link_count: db.edge_count(),
            routers,
        }
    }
}

/// Render the adjacency dump as console text
pub fn render_topology_human(db: &dyn LinkStateDatabase) -> String {
    let mut out = String::from("--- Network Topology (LSDB) ---\n");

    for idx in routers(db) {
        let _ = write!(out, "Router {:>4} links:", db.name(idx));
        for adj in db.neighbors(idx) {
            let _ = write!(out, " [{} | {}ms]", db.name(adj.neighbor), adj.weight);
        }
        out.push('\n');
    }

    out
}
