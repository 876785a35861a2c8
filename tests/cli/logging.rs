use crate::cli::support::spf;
use predicates::prelude::*;

#[test]
fn test_log_level_debug_shows_debug_messages() {
    spf()
        .args(["--log-level", "debug", "path", "A", "B"])
        .assert()
        .success()
        .stderr(predicate::str::contains("spf_complete"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    spf()
        .args(["path", "A", "B"])
        .assert()
        .success()
        .stderr(predicate::str::contains("spf_complete").not());
}

#[test]
fn test_verbose_shows_timings() {
    spf()
        .args(["--verbose", "topology"])
        .assert()
        .success()
        .stderr(predicate::str::contains("load_topology"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let output = spf()
        .args(["--log-level", "debug", "--log-json", "path", "A", "B"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr
        .lines()
        .find(|l| l.contains("spf_complete"))
        .expect("debug event present");
    let json: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(json["fields"]["message"], "spf_complete");
}
