//! Integration tests for the waypath CLI
//!
//! These tests run the waypath binary and verify exit codes, output formats
//! and the behavior of each subcommand.

mod common;

use common::{waypath, write_graph, DIAMOND, NEGATIVE_CYCLE};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_flag() {
    waypath()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: waypath"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("matrix"));
}

#[test]
fn test_version_flag() {
    waypath()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("waypath"));
}

#[test]
fn test_subcommand_help() {
    waypath()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Run a single search strategy"));
}

// ============================================================================
// Exit code tests
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    waypath().args(["--format", "xml", "cases"]).assert().code(2);
}

#[test]
fn test_unknown_algorithm_exit_code_2() {
    waypath()
        .args(["run", "-a", "prim", "--case", "simple"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    waypath()
        .args(["--format", "json", "compare", "--case", "simple", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_missing_graph_file_exit_code_3() {
    waypath()
        .args([
            "run", "-a", "dijkstra", "--graph", "/nonexistent/graph.json", "--from", "0", "--to",
            "1",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph file not found"));
}

#[test]
fn test_missing_graph_file_json_envelope() {
    waypath()
        .args([
            "--format",
            "json",
            "run",
            "-a",
            "dijkstra",
            "--graph",
            "/nonexistent/graph.json",
            "--from",
            "0",
            "--to",
            "1",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"graph_not_found\""));
}

#[test]
fn test_unknown_node_exit_code_3() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), DIAMOND);

    waypath()
        .args(["run", "-a", "bfs", "--graph"])
        .arg(&graph)
        .args(["--from", "0", "--to", "99"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found in graph: 99"));
}

#[test]
fn test_invalid_document_exit_code_3() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        r#"{"nodes": [{"id": 0, "x": 0, "y": 0}], "edges": [{"from": 0, "to": 7}]}"#,
    );

    waypath()
        .args(["run", "-a", "bfs", "--graph"])
        .arg(&graph)
        .args(["--from", "0", "--to", "0"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("undeclared node 7"));
}

// ============================================================================
// Run command
// ============================================================================

#[test]
fn test_run_dijkstra_human() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), DIAMOND);

    waypath()
        .args(["run", "-a", "dijkstra", "--graph"])
        .arg(&graph)
        .args(["--from", "0", "--to", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dijkstra: 0 -> 1 -> 3 (distance 11"));
}

#[test]
fn test_run_dijkstra_json() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), DIAMOND);

    let output = waypath()
        .args(["--format", "json", "run", "-a", "dijkstra", "--graph"])
        .arg(&graph)
        .args(["--from", "0", "--to", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["algorithm"], "dijkstra");
    assert_eq!(result["found"], true);
    assert_eq!(result["distance"], 11.0);
    assert_eq!(result["path"], serde_json::json!([0, 1, 3]));
}

#[test]
fn test_run_bfs_reports_hops_not_weight() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), DIAMOND);

    let output = waypath()
        .args(["--format", "json", "run", "-a", "bfs", "--graph"])
        .arg(&graph)
        .args(["--from", "0", "--to", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["distance"], 2.0);
}

#[test]
fn test_run_with_builtin_case() {
    waypath()
        .args(["run", "-a", "dijkstra", "--case", "weighted"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 1 -> 3 -> 4 (distance 52"));
}

#[test]
fn test_run_case_with_endpoint_override() {
    let output = waypath()
        .args([
            "--format", "json", "run", "-a", "bfs", "--case", "simple", "--from", "2", "--to", "2",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["path"], serde_json::json!([2]));
    assert_eq!(result["distance"], 0.0);
}

#[test]
fn test_run_unreachable_distance_is_null_in_json() {
    let output = waypath()
        .args(["--format", "json", "run", "-a", "a-star", "--case", "no-path"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["found"], false);
    assert!(result["distance"].is_null());
    assert_eq!(result["path"], serde_json::json!([]));
}

// ============================================================================
// Compare command
// ============================================================================

#[test]
fn test_compare_lists_every_strategy() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), DIAMOND);

    waypath()
        .args(["compare", "--graph"])
        .arg(&graph)
        .args(["--from", "0", "--to", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dijkstra:"))
        .stdout(predicate::str::contains("bellman-ford:"))
        .stdout(predicate::str::contains("bfs:"))
        .stdout(predicate::str::contains("dfs:"))
        .stdout(predicate::str::contains("a-star:"))
        .stdout(predicate::str::contains("floyd-warshall:"));
}

#[test]
fn test_compare_json_agreement() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), DIAMOND);

    let output = waypath()
        .args(["--format", "json", "compare", "--graph"])
        .arg(&graph)
        .args(["--from", "0", "--to", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 6);

    // The weighted strategies agree on the least-weight distance
    for name in ["dijkstra", "bellman-ford", "a-star", "floyd-warshall"] {
        let entry = entries
            .iter()
            .find(|e| e["algorithm"] == *name)
            .unwrap_or_else(|| panic!("missing entry for {name}"));
        assert_eq!(entry["result"]["distance"], 11.0, "{name}");
    }
}

#[test]
fn test_compare_negative_cycle_does_not_abort_run() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), NEGATIVE_CYCLE);

    waypath()
        .args(["compare", "--graph"])
        .arg(&graph)
        .args(["--from", "0", "--to", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bellman-ford: error: negative cycle"))
        .stdout(predicate::str::contains("bfs:"));
}

// ============================================================================
// Matrix command
// ============================================================================

#[test]
fn test_matrix_human_marks_unreachable() {
    waypath()
        .args(["matrix", "--case", "no-path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-"));
}

#[test]
fn test_matrix_json() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), DIAMOND);

    let output = waypath()
        .args(["--format", "json", "matrix", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["nodes"], serde_json::json!([0, 1, 2, 3]));
    // dist[0][3] = 11 over the undirected diamond
    assert_eq!(result["dist"][0][3], 11.0);
    assert_eq!(result["dist"][1][1], 0.0);
}

// ============================================================================
// Cases command
// ============================================================================

#[test]
fn test_cases_lists_builtins() {
    waypath()
        .arg("cases")
        .assert()
        .success()
        .stdout(predicate::str::contains("simple"))
        .stdout(predicate::str::contains("multiple-paths"))
        .stdout(predicate::str::contains("dense-graph"))
        .stdout(predicate::str::contains("no-path"))
        .stdout(predicate::str::contains("weighted"))
        .stdout(predicate::str::contains("long-chain"));
}

#[test]
fn test_cases_emits_loadable_document() {
    let dir = tempdir().unwrap();

    let output = waypath().args(["cases", "weighted"]).output().unwrap();
    assert!(output.status.success());

    // The emitted document round-trips through --graph
    let graph = write_graph(dir.path(), &String::from_utf8_lossy(&output.stdout));
    waypath()
        .args(["run", "-a", "dijkstra", "--graph"])
        .arg(&graph)
        .args(["--from", "0", "--to", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("distance 52"));
}

#[test]
fn test_cases_unknown_id_exit_code_3() {
    waypath()
        .args(["cases", "nonexistent"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown built-in case"));
}
