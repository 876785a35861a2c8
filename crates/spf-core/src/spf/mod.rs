//! Shortest path first (SPF) calculation
//!
//! Runs Dijkstra's algorithm over a `LinkStateDatabase`:
//! - `shortest_path`: single source to single target, stops once the target
//!   is settled
//! - `shortest_path_tree`: full SPF from one source, yielding a routing table
//! - `path`: predecessor walk used by both

pub mod dijkstra;
pub mod path;
pub mod types;

pub use dijkstra::{shortest_path, shortest_path_tree};
pub use types::{PathOutcome, RouteEntry, ShortestPath, SpfTree};
