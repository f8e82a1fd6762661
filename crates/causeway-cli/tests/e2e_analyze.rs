//! E2E coverage for `cwy analyze`, `cwy batch`, and `cwy generate`.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cwy_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cwy"));
    cmd.current_dir(dir);
    cmd.env("CAUSEWAY_LOG", "error");
    cmd
}

fn write_document(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write document");
}

const DIVERGING_CHAIN: &str = r#"{
    "directed": true,
    "n": 4,
    "weight_model": "edge",
    "edges": [
        { "u": 0, "v": 1, "w": 2 },
        { "u": 1, "v": 2, "w": 3 },
        { "u": 0, "v": 2, "w": 10 },
        { "u": 2, "v": 3, "w": 1 }
    ],
    "source": 0
}"#;

const BRIDGED_CYCLES: &str = r#"{
    "directed": true,
    "n": 6,
    "edges": [
        { "u": 0, "v": 1, "w": 1 },
        { "u": 1, "v": 2, "w": 1 },
        { "u": 2, "v": 0, "w": 1 },
        { "u": 3, "v": 4, "w": 1 },
        { "u": 4, "v": 5, "w": 1 },
        { "u": 5, "v": 3, "w": 1 },
        { "u": 2, "v": 3, "w": 2 }
    ],
    "source": 0
}"#;

// ---------------------------------------------------------------------------
// analyze
// ---------------------------------------------------------------------------

#[test]
fn analyze_human_output_has_every_section() {
    let dir = TempDir::new().expect("temp dir");
    write_document(dir.path(), "chain.json", DIVERGING_CHAIN);

    cwy_cmd(dir.path())
        .args(["analyze", "chain.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph loaded: 4 nodes, 4 edges"))
        .stdout(predicate::str::contains("Strongly Connected Components"))
        .stdout(predicate::str::contains("Condensation"))
        .stdout(predicate::str::contains("Topological Order"))
        .stdout(predicate::str::contains("Shortest Distances"))
        .stdout(predicate::str::contains("Critical Path"))
        .stdout(predicate::str::contains("0 -> 2 -> 3"));
}

#[test]
fn analyze_json_reports_distances_and_critical_path() {
    let dir = TempDir::new().expect("temp dir");
    write_document(dir.path(), "chain.json", DIVERGING_CHAIN);

    let output = cwy_cmd(dir.path())
        .args(["analyze", "chain.json", "--json"])
        .output()
        .expect("analyze should not crash");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(report["node_count"], 4);
    assert_eq!(report["scc"]["components"].as_array().expect("components").len(), 4);
    assert_eq!(report["topo"]["is_acyclic"], true);
    assert_eq!(report["shortest"]["is_valid"], true);
    assert_eq!(report["shortest"]["dist"], serde_json::json!([0, 2, 5, 6]));
    assert_eq!(report["critical"]["length"], 11);
    assert_eq!(report["critical"]["path"], serde_json::json!([0, 2, 3]));
    assert_eq!(report["critical"]["source"], 0);
}

#[test]
fn analyze_flags_cyclic_documents_without_failing() {
    let dir = TempDir::new().expect("temp dir");
    write_document(dir.path(), "cycles.json", BRIDGED_CYCLES);

    let output = cwy_cmd(dir.path())
        .args(["analyze", "cycles.json", "--json"])
        .output()
        .expect("analyze should not crash");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(report["scc"]["components"].as_array().expect("components").len(), 2);
    assert_eq!(report["condensation"]["condensed_nodes"], 2);
    assert_eq!(report["condensation"]["condensed_edges"], 1);
    assert_eq!(report["topo"]["is_acyclic"], true, "condensation is a DAG");
    assert_eq!(report["shortest"]["is_valid"], false, "raw graph is cyclic");
    assert_eq!(report["critical"]["path"], serde_json::json!([0]));
    assert_eq!(report["critical"]["length"], 0);
}

#[test]
fn analyze_missing_file_fails() {
    let dir = TempDir::new().expect("temp dir");

    cwy_cmd(dir.path())
        .args(["analyze", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn analyze_rejects_out_of_range_endpoints() {
    let dir = TempDir::new().expect("temp dir");
    write_document(
        dir.path(),
        "bad.json",
        r#"{ "n": 2, "edges": [{ "u": 0, "v": 9, "w": 1 }] }"#,
    );

    cwy_cmd(dir.path())
        .args(["analyze", "bad.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

// ---------------------------------------------------------------------------
// generate + batch
// ---------------------------------------------------------------------------

#[test]
fn generate_writes_nine_documents() {
    let dir = TempDir::new().expect("temp dir");

    cwy_cmd(dir.path())
        .args(["generate", "--out", "data"])
        .assert()
        .success()
        .stdout(predicate::str::contains("small_1.json"));

    let documents: Vec<_> = fs::read_dir(dir.path().join("data"))
        .expect("data dir")
        .filter_map(Result::ok)
        .collect();
    assert_eq!(documents.len(), 9);
}

#[test]
fn batch_analyzes_generated_documents() {
    let dir = TempDir::new().expect("temp dir");

    cwy_cmd(dir.path())
        .args(["generate", "--out", "data", "--quiet"])
        .assert()
        .success();

    cwy_cmd(dir.path())
        .args(["batch", "data"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RUNNING: data/large_3.json"))
        .stdout(predicate::str::contains("Critical Path"));
}

#[test]
fn batch_continues_past_broken_documents() {
    let dir = TempDir::new().expect("temp dir");
    let data = dir.path().join("data");
    fs::create_dir_all(&data).expect("data dir");
    write_document(&data, "a_broken.json", "{ not json");
    write_document(&data, "b_chain.json", DIVERGING_CHAIN);

    cwy_cmd(dir.path())
        .args(["batch", "data"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Critical Path"))
        .stderr(predicate::str::contains("a_broken.json"));
}

#[test]
fn batch_of_empty_directory_suggests_generate() {
    let dir = TempDir::new().expect("temp dir");
    fs::create_dir_all(dir.path().join("data")).expect("data dir");

    cwy_cmd(dir.path())
        .args(["batch", "data"])
        .assert()
        .success()
        .stderr(predicate::str::contains("cwy generate"));
}
