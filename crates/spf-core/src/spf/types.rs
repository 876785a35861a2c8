use serde::Serialize;

use crate::graph::Cost;

/// Minimum-cost path between two routers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath {
    pub source: String,
    pub target: String,
    pub total_cost: Cost,
    /// Router names from source to target, both inclusive
    pub path: Vec<String>,
}

impl ShortestPath {
    /// Number of links traversed
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Result of a point-to-point SPF run
///
/// An unreachable target is a valid outcome rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathOutcome {
    Found(ShortestPath),
    NoPath { source: String, target: String },
}

impl PathOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }

    pub fn found(&self) -> Option<&ShortestPath> {
        match self {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::NoPath { .. } => None,
        }
    }
}

/// One row of a routing table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub destination: String,
    pub cost: Cost,
    pub next_hop: String,
    pub path: Vec<String>,
}

/// Full SPF result rooted at one router
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpfTree {
    pub source: String,
    /// Reachable destinations in router insertion order, source excluded
    pub routes: Vec<RouteEntry>,
    pub unreachable: Vec<String>,
}

impl SpfTree {
    pub fn route(&self, destination: &str) -> Option<&RouteEntry> {
        self.routes.iter().find(|r| r.destination == destination)
    }
}
