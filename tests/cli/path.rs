use crate::cli::support::{spf, write_topology, ISLANDS};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_reference_path_a_to_b() {
    spf()
        .args(["path", "A", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "--- SPF calculation (Dijkstra) from A ---",
        ))
        .stdout(predicate::str::contains("Shortest path found"))
        .stdout(predicate::str::contains("Total cost (latency): 120 ms"))
        .stdout(predicate::str::contains("Path: A -> 3 -> 7 -> B"))
        .stdout(predicate::str::contains("Hops: 3 links"));
}

#[test]
fn test_path_to_self() {
    spf()
        .args(["path", "7", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total cost (latency): 0 ms"))
        .stdout(predicate::str::contains("Path: 7\n"));
}

#[test]
fn test_path_from_topology_file() {
    let dir = tempdir().unwrap();
    let topology = write_topology(dir.path(), ISLANDS);

    spf()
        .arg("--topology")
        .arg(&topology)
        .args(["path", "A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total cost (latency): 8 ms"))
        .stdout(predicate::str::contains("Path: A -> B -> C"));
}

#[test]
fn test_topology_from_env() {
    let dir = tempdir().unwrap();
    let topology = write_topology(dir.path(), ISLANDS);

    spf()
        .env("SPF_TOPOLOGY", &topology)
        .args(["path", "X", "Y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: X -> Y"));
}

#[test]
fn test_no_path_is_not_an_error() {
    let dir = tempdir().unwrap();
    let topology = write_topology(dir.path(), ISLANDS);

    spf()
        .arg("--topology")
        .arg(&topology)
        .args(["path", "A", "Y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path exists between A and Y"));
}

#[test]
fn test_path_json() {
    let output = spf()
        .args(["--format", "json", "path", "A", "B"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "found");
    assert_eq!(json["total_cost"], 120);
    assert_eq!(json["path"], serde_json::json!(["A", "3", "7", "B"]));
}

#[test]
fn test_no_path_json() {
    let dir = tempdir().unwrap();
    let topology = write_topology(dir.path(), ISLANDS);

    let output = spf()
        .arg("--topology")
        .arg(&topology)
        .args(["--format", "json", "path", "Y", "C"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "no_path");
    assert_eq!(json["source"], "Y");
    assert_eq!(json["target"], "C");
}

#[test]
fn test_reference_run_without_subcommand() {
    spf()
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Network Topology (LSDB) ---"))
        .stdout(predicate::str::contains("Path: A -> 3 -> 7 -> B"));
}

#[test]
fn test_reference_run_json() {
    let output = spf().args(["--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["topology"]["router_count"], 12);
    assert_eq!(json["topology"]["link_count"], 21);
    assert_eq!(json["path"]["total_cost"], 120);
}

#[test]
fn test_reference_run_without_default_routers_still_succeeds() {
    let dir = tempdir().unwrap();
    let topology = write_topology(dir.path(), "routers = [\"X\"]\n");

    spf()
        .arg("--topology")
        .arg(&topology)
        .assert()
        .success()
        .stdout(predicate::str::contains("Router    X links:"))
        .stdout(predicate::str::contains(
            "Invalid source or target router (invalid endpoint: A); expected A and B",
        ));
}

#[test]
fn test_reference_run_json_without_default_routers() {
    let dir = tempdir().unwrap();
    let topology = write_topology(dir.path(), "routers = [\"A\", \"X\"]\n");

    let output = spf()
        .arg("--topology")
        .arg(&topology)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["topology"]["router_count"], 2);
    assert!(json.get("path").is_none());
    assert_eq!(json["error"]["type"], "invalid_endpoint");
    assert_eq!(json["error"]["message"], "invalid endpoint: B");
}
