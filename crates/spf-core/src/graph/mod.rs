//! Link-state graph storage
//!
//! Holds the routers (named nodes) and weighted undirected links that make up
//! the link-state database:
//! - `GraphStore`: insertion-ordered node table with per-node adjacency
//! - `LinkStateDatabase`: read-only provider trait consumed by the SPF engine

pub mod lsdb;
pub mod store;
pub mod types;

pub use lsdb::LinkStateDatabase;
pub use store::GraphStore;
pub use types::{Adjacency, Cost, NodeIndex, Weight};
