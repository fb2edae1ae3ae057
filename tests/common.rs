use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn waypath() -> Command {
    cargo_bin_cmd!("waypath")
}

/// 4 nodes: two routes to 3; least weight is 0 -> 1 -> 3 (11), fewest hops
/// is 2 either way
#[allow(dead_code)]
pub const DIAMOND: &str = r#"{
    "nodes": [
        {"id": 0, "x": 0, "y": 0},
        {"id": 1, "x": 100, "y": 0},
        {"id": 2, "x": 0, "y": 100},
        {"id": 3, "x": 100, "y": 100}
    ],
    "edges": [
        {"from": 0, "to": 1, "weight": 10},
        {"from": 0, "to": 2, "weight": 2},
        {"from": 1, "to": 3, "weight": 1},
        {"from": 2, "to": 3, "weight": 10}
    ],
    "directed": false
}"#;

/// Contains the negative cycle 1 -> 2 -> 1 on the way to 3
#[allow(dead_code)]
pub const NEGATIVE_CYCLE: &str = r#"{
    "nodes": [
        {"id": 0, "x": 0, "y": 0},
        {"id": 1, "x": 1, "y": 0},
        {"id": 2, "x": 2, "y": 0},
        {"id": 3, "x": 3, "y": 0}
    ],
    "edges": [
        {"from": 0, "to": 1, "weight": 1},
        {"from": 1, "to": 2, "weight": -2},
        {"from": 2, "to": 1, "weight": 1},
        {"from": 2, "to": 3, "weight": 1}
    ],
    "directed": true
}"#;

#[allow(dead_code)]
pub fn write_graph(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("graph.json");
    fs::write(&path, contents).expect("failed to write graph document");
    path
}
