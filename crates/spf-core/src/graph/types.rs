use serde::Serialize;
use std::fmt;

/// Link weight (latency in milliseconds)
pub type Weight = u32;

/// Accumulated path cost
///
/// Wider than `Weight` so that summing weights along any simple path cannot
/// overflow.
pub type Cost = u64;

/// Dense index of a router, assigned in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub fn new(index: usize) -> Self {
        NodeIndex(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One entry of a router's adjacency record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacency {
    pub neighbor: NodeIndex,
    pub weight: Weight,
}
