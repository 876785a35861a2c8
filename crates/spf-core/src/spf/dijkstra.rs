use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Instant;

use crate::bail_endpoint;
use crate::error::Result;
use crate::graph::{Cost, LinkStateDatabase, NodeIndex};
use crate::spf::path::reconstruct_path;
use crate::spf::types::{PathOutcome, RouteEntry, ShortestPath, SpfTree};
use crate::trace_time;

/// Priority queue entry, ordered by tentative cost then router index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub cost: Cost,
    pub node: NodeIndex,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Working state for one SPF run; dropped when the run returns
struct DijkstraState {
    /// `None` means not reached (yet)
    distances: Vec<Option<Cost>>,
    predecessors: Vec<Option<NodeIndex>>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    settled: usize,
    stale: usize,
}

impl DijkstraState {
    fn new(node_count: usize, source: NodeIndex) -> Self {
        let mut state = Self {
            distances: vec![None; node_count],
            predecessors: vec![None; node_count],
            heap: BinaryHeap::new(),
            settled: 0,
            stale: 0,
        };
        state.distances[source.index()] = Some(0);
        state.heap.push(Reverse(HeapEntry {
            cost: 0,
            node: source,
        }));
        state
    }

    fn distance(&self, node: NodeIndex) -> Option<Cost> {
        self.distances[node.index()]
    }

    /// Relax every link of `node`, settled at `cost`
    fn relax_neighbors(&mut self, db: &dyn LinkStateDatabase, node: NodeIndex, cost: Cost) {
        for adj in db.neighbors(node) {
            let candidate = cost + Cost::from(adj.weight);
            let slot = &mut self.distances[adj.neighbor.index()];

            if slot.is_none_or(|current| candidate < current) {
                *slot = Some(candidate);
                self.predecessors[adj.neighbor.index()] = Some(node);
                self.heap.push(Reverse(HeapEntry {
                    cost: candidate,
                    node: adj.neighbor,
                }));
            }
        }
    }

    /// Main Dijkstra loop. With a `target`, stops as soon as it is settled;
    /// distances of routers not yet settled are then incomplete.
    fn run(&mut self, db: &dyn LinkStateDatabase, target: Option<NodeIndex>) {
        while let Some(Reverse(HeapEntry { cost, node })) = self.heap.pop() {
            // A cheaper entry for this router was already processed
            if self.distance(node).is_some_and(|best| cost > best) {
                self.stale += 1;
                continue;
            }
            self.settled += 1;

            if Some(node) == target {
                break;
            }

            self.relax_neighbors(db, node, cost);
        }
    }
}

fn resolve_endpoint(db: &dyn LinkStateDatabase, name: &str) -> Result<NodeIndex> {
    match db.resolve_index(name) {
        Some(idx) => Ok(idx),
        None => bail_endpoint!(name),
    }
}

/// Compute the minimum-cost path from `source` to `target`.
///
/// Both names must be registered, otherwise `InvalidEndpoint` is returned and
/// no computation runs. An unreachable target yields `PathOutcome::NoPath`.
#[tracing::instrument(skip(db), fields(nodes = db.node_count()))]
pub fn shortest_path(
    db: &dyn LinkStateDatabase,
    source: &str,
    target: &str,
) -> Result<PathOutcome> {
    let start = Instant::now();
    let source_idx = resolve_endpoint(db, source)?;
    let target_idx = resolve_endpoint(db, target)?;

    let mut state = DijkstraState::new(db.node_count(), source_idx);
    state.run(db, Some(target_idx));

    tracing::debug!(
        settled = state.settled,
        stale = state.stale,
        "spf_complete"
    );
    trace_time!(start, "shortest_path", settled = state.settled);

    let Some(total_cost) = state.distance(target_idx) else {
        return Ok(PathOutcome::NoPath {
            source: source.to_string(),
            target: target.to_string(),
        });
    };

    Ok(PathOutcome::Found(ShortestPath {
        source: source.to_string(),
        target: target.to_string(),
        total_cost,
        path: reconstruct_path(db, &state.predecessors, target_idx),
    }))
}

/// Compute the full shortest path tree rooted at `source`.
///
/// Every router reachable from `source` gets a route; the rest are listed as
/// unreachable. Routes come out in router insertion order.
#[tracing::instrument(skip(db), fields(nodes = db.node_count()))]
pub fn shortest_path_tree(db: &dyn LinkStateDatabase, source: &str) -> Result<SpfTree> {
    let start = Instant::now();
    let source_idx = resolve_endpoint(db, source)?;

    let mut state = DijkstraState::new(db.node_count(), source_idx);
    state.run(db, None);

    let mut routes = Vec::new();
    let mut unreachable = Vec::new();

    for i in 0..db.node_count() {
        let node = NodeIndex::new(i);
        if node == source_idx {
            continue;
        }

        match state.distance(node) {
            Some(cost) => {
                let path = reconstruct_path(db, &state.predecessors, node);
                // path[0] is the source; a reached destination has at least one hop
                let next_hop = path.get(1).cloned().unwrap_or_default();
                routes.push(RouteEntry {
                    destination: db.name(node).to_string(),
                    cost,
                    next_hop,
                    path,
                });
            }
            None => unreachable.push(db.name(node).to_string()),
        }
    }

    tracing::debug!(
        settled = state.settled,
        stale = state.stale,
        routes = routes.len(),
        unreachable = unreachable.len(),
        "spf_tree_complete"
    );
    trace_time!(start, "shortest_path_tree", routes = routes.len());

    Ok(SpfTree {
        source: source.to_string(),
        routes,
        unreachable,
    })
}
