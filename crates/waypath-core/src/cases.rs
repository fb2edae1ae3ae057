//! Built-in fixture graphs
//!
//! A small gallery of named graph scenarios, each chosen to expose a
//! strength or weakness of one of the strategies. Usable from the CLI via
//! `--case` and as fixtures in tests. Gallery graphs are directed: edges are
//! inserted exactly as listed.

use serde::Serialize;

use crate::document::{EdgeSpec, GraphDocument};
use crate::error::{Result, WaypathError};
use crate::graph::types::{Node, NodeId, Weight};

/// A named scenario with a suggested start/end pair
#[derive(Debug, Clone, Serialize)]
pub struct TestCase {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub start: NodeId,
    pub end: NodeId,
    pub document: GraphDocument,
}

fn document(coords: &[(f64, f64)], edges: &[(NodeId, NodeId, Weight)]) -> GraphDocument {
    GraphDocument {
        nodes: coords
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Node { id, x, y })
            .collect(),
        edges: edges
            .iter()
            .map(|&(from, to, weight)| EdgeSpec { from, to, weight })
            .collect(),
        directed: true,
    }
}

fn simple() -> TestCase {
    TestCase {
        id: "simple",
        name: "Simple Linear Graph",
        description:
            "Linear graph to demonstrate basic pathfinding. All algorithms find the same path.",
        start: 0,
        end: 4,
        document: document(
            &[(50.0, 200.0), (150.0, 200.0), (250.0, 200.0), (350.0, 200.0), (450.0, 200.0)],
            &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0)],
        ),
    }
}

fn multiple_paths() -> TestCase {
    TestCase {
        id: "multiple-paths",
        name: "Multiple Paths (Dijkstra Advantage)",
        description: "Multiple paths exist. Dijkstra finds the truly shortest path. \
                      DFS/BFS may find longer paths due to exploration order.",
        start: 0,
        end: 4,
        document: document(
            &[(100.0, 100.0), (100.0, 300.0), (300.0, 100.0), (300.0, 300.0), (500.0, 200.0)],
            &[
                (0, 1, 5.0),
                (0, 2, 1.0),
                (1, 3, 1.0),
                (2, 3, 5.0),
                (2, 4, 1.0),
                (3, 4, 1.0),
            ],
        ),
    }
}

fn dense_graph() -> TestCase {
    TestCase {
        id: "dense-graph",
        name: "Dense Graph (A* Advantage)",
        description: "Dense grid graph. A* uses its heuristic to explore fewer nodes than \
                      Dijkstra. DFS/BFS explore many unnecessary nodes.",
        start: 0,
        end: 9,
        document: document(
            &[
                (50.0, 50.0),
                (150.0, 50.0),
                (250.0, 50.0),
                (50.0, 150.0),
                (150.0, 150.0),
                (250.0, 150.0),
                (50.0, 250.0),
                (150.0, 250.0),
                (250.0, 250.0),
                (450.0, 150.0),
            ],
            &[
                (0, 1, 1.0),
                (0, 3, 1.0),
                (1, 0, 1.0),
                (1, 2, 1.0),
                (1, 4, 1.0),
                (2, 1, 1.0),
                (2, 5, 1.0),
                (3, 0, 1.0),
                (3, 4, 1.0),
                (3, 6, 1.0),
                (4, 1, 1.0),
                (4, 3, 1.0),
                (4, 5, 1.0),
                (4, 7, 1.0),
                (5, 2, 1.0),
                (5, 4, 1.0),
                (5, 8, 1.0),
                (6, 3, 1.0),
                (6, 7, 1.0),
                (7, 4, 1.0),
                (7, 6, 1.0),
                (7, 8, 1.0),
                (8, 5, 1.0),
                (8, 7, 1.0),
                (8, 9, 1.0),
                (9, 8, 1.0),
            ],
        ),
    }
}

fn no_path() -> TestCase {
    TestCase {
        id: "no-path",
        name: "Disconnected Graph (No Path)",
        description: "Two disconnected components. No algorithm can find a path. Shows how \
                      algorithms handle impossible cases.",
        start: 0,
        end: 5,
        document: document(
            &[
                (100.0, 100.0),
                (150.0, 100.0),
                (200.0, 100.0),
                (350.0, 100.0),
                (400.0, 100.0),
                (450.0, 100.0),
            ],
            &[(0, 1, 1.0), (1, 2, 1.0), (3, 4, 1.0), (4, 5, 1.0)],
        ),
    }
}

fn weighted() -> TestCase {
    TestCase {
        id: "weighted",
        name: "Heavily Weighted Graph",
        description: "Heavy weights change path preferences. Dijkstra takes the cheap detour; \
                      BFS/DFS may pick an expensive route because they ignore weights.",
        start: 0,
        end: 4,
        document: document(
            &[(100.0, 150.0), (200.0, 100.0), (200.0, 200.0), (300.0, 150.0), (400.0, 150.0)],
            &[
                (0, 1, 1.0),
                (0, 2, 100.0),
                (1, 3, 50.0),
                (2, 3, 1.0),
                (3, 4, 1.0),
            ],
        ),
    }
}

fn long_chain() -> TestCase {
    TestCase {
        id: "long-chain",
        name: "Long Chain (Memory & Time)",
        description: "Long linear path. Shows how algorithm performance scales with graph \
                      size. All find the same path.",
        start: 0,
        end: 9,
        document: document(
            &[
                (50.0, 200.0),
                (100.0, 200.0),
                (150.0, 200.0),
                (200.0, 200.0),
                (250.0, 200.0),
                (300.0, 200.0),
                (350.0, 200.0),
                (400.0, 200.0),
                (450.0, 200.0),
                (500.0, 200.0),
            ],
            &[
                (0, 1, 1.0),
                (1, 2, 1.0),
                (2, 3, 1.0),
                (3, 4, 1.0),
                (4, 5, 1.0),
                (5, 6, 1.0),
                (6, 7, 1.0),
                (7, 8, 1.0),
                (8, 9, 1.0),
            ],
        ),
    }
}

/// Every built-in case, in gallery order
pub fn builtin() -> Vec<TestCase> {
    vec![
        simple(),
        multiple_paths(),
        dense_graph(),
        no_path(),
        weighted(),
        long_chain(),
    ]
}

/// Look up a built-in case by id
pub fn find(id: &str) -> Result<TestCase> {
    builtin()
        .into_iter()
        .find(|case| case.id == id)
        .ok_or_else(|| WaypathError::UnknownCase { id: id.to_string() })
}
