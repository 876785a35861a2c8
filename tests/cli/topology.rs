use crate::cli::support::{spf, write_topology, ISLANDS};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_topology_reference() {
    spf()
        .arg("topology")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Network Topology (LSDB) ---"))
        .stdout(predicate::str::contains(
            "Router    A links: [1 | 6ms] [2 | 11ms] [3 | 10ms] [4 | 12ms]",
        ))
        .stdout(predicate::str::contains(
            "Router   10 links: [6 | 50ms] [7 | 10ms] [9 | 35ms] [B | 40ms]",
        ))
        .stdout(predicate::str::contains("12 routers, 21 links"));
}

#[test]
fn test_topology_quiet_omits_summary() {
    spf()
        .args(["--quiet", "topology"])
        .assert()
        .success()
        .stdout(predicate::str::contains("routers,").not());
}

#[test]
fn test_topology_json() {
    let dir = tempdir().unwrap();
    let topology = write_topology(dir.path(), ISLANDS);

    let output = spf()
        .arg("--topology")
        .arg(&topology)
        .args(["--format", "json", "topology"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["router_count"], 5);
    assert_eq!(json["link_count"], 4);
    assert_eq!(json["routers"][0]["name"], "A");
    assert_eq!(json["routers"][0]["links"][1]["neighbor"], "C");
}

#[test]
fn test_topology_skips_bad_links_with_warning() {
    let dir = tempdir().unwrap();
    let content = format!(
        "{}\n[[links]]\nfrom = \"A\"\nto = \"ghost\"\nlatency_ms = 2\n",
        ISLANDS
    );
    let topology = write_topology(dir.path(), &content);

    spf()
        .arg("--topology")
        .arg(&topology)
        .arg("topology")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "warning: skipped link A-ghost: node not found: ghost",
        ))
        .stdout(predicate::str::contains("5 routers, 4 links"));
}
