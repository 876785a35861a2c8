use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for spf with a clean environment
pub fn spf() -> Command {
    let mut cmd = cargo_bin_cmd!("spf");
    cmd.env_remove("SPF_TOPOLOGY")
        .env_remove("SPF_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Two islands: A-B-C (with a detour) and X-Y
pub const ISLANDS: &str = r#"
routers = ["A", "B", "C", "X", "Y"]

[[links]]
from = "A"
to = "B"
latency_ms = 5

[[links]]
from = "B"
to = "C"
latency_ms = 3

[[links]]
from = "A"
to = "C"
latency_ms = 10

[[links]]
from = "X"
to = "Y"
latency_ms = 1
"#;

/// Write a topology file into `dir` and return its path
pub fn write_topology(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("topology.toml");
    fs::write(&path, content).unwrap();
    path
}
