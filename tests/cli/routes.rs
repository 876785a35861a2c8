use crate::cli::support::{spf, write_topology, ISLANDS};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_routes_reference() {
    spf()
        .args(["routes", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Routing table for A ---"))
        .stdout(predicate::str::is_match(r"(?m)^B\s+120\s+3\s+A -> 3 -> 7 -> B$").unwrap())
        .stdout(predicate::str::is_match(r"(?m)^9\s+65\s+1\s+A -> 1 -> 5 -> 9$").unwrap())
        .stdout(predicate::str::contains("Unreachable").not());
}

#[test]
fn test_routes_lists_unreachable() {
    let dir = tempdir().unwrap();
    let topology = write_topology(dir.path(), ISLANDS);

    spf()
        .arg("--topology")
        .arg(&topology)
        .args(["routes", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unreachable: X, Y"));
}

#[test]
fn test_routes_json() {
    let dir = tempdir().unwrap();
    let topology = write_topology(dir.path(), ISLANDS);

    let output = spf()
        .arg("--topology")
        .arg(&topology)
        .args(["--format", "json", "routes", "C"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["source"], "C");
    assert_eq!(json["routes"][0]["destination"], "A");
    assert_eq!(json["routes"][0]["cost"], 8);
    assert_eq!(json["routes"][0]["next_hop"], "B");
    assert_eq!(json["unreachable"], serde_json::json!(["X", "Y"]));
}
