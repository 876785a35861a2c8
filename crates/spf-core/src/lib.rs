//! SPF Core Library
//!
//! Link-state graph store and shortest path first (Dijkstra) engine, plus the
//! topology configuration and reporting used by the `spf` binary.

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod spf;
pub mod topology;
