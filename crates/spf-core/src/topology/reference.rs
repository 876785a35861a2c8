//! Built-in reference network: twelve routers between edge sites A and B.

use super::{LinkConfig, TopologyConfig};

/// Routers in insertion order
const ROUTERS: &[&str] = &["A", "B", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10"];

/// (from, to, latency in ms)
const LINKS: &[(&str, &str, u32)] = &[
    ("A", "1", 6),
    ("A", "2", 11),
    ("A", "3", 10),
    ("A", "4", 12),
    ("1", "2", 30),
    ("1", "5", 35),
    ("1", "6", 125),
    ("2", "3", 21),
    ("2", "6", 50),
    ("2", "7", 90),
    ("3", "7", 70),
    ("3", "8", 80),
    ("4", "8", 75),
    ("5", "6", 91),
    ("5", "9", 24),
    ("6", "10", 50),
    ("7", "10", 10),
    ("7", "B", 40),
    ("8", "B", 40),
    ("9", "10", 35),
    ("10", "B", 40),
];

/// Default source and target of the reference run
pub const DEFAULT_SOURCE: &str = "A";
pub const DEFAULT_TARGET: &str = "B";

impl TopologyConfig {
    /// The built-in reference topology
    pub fn reference() -> Self {
        Self {
            routers: ROUTERS.iter().map(|r| r.to_string()).collect(),
            links: LINKS
                .iter()
                .map(|&(from, to, latency)| LinkConfig::new(from, to, latency))
                .collect(),
        }
    }
}
