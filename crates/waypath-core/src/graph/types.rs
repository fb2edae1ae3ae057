//! Core graph model and result contract shared by every search strategy

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::WaypathError;

/// Dense non-negative node identifier
pub type NodeId = usize;

/// Edge weight. Negative weights are only meaningful to Bellman-Ford and
/// Floyd-Warshall; Dijkstra and A* assume non-negativity and make no promise
/// about their output when that assumption is violated.
pub type Weight = f64;

/// A node with planar coordinates. The coordinates are consumed only by the
/// A* heuristic; every other algorithm ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
}

/// Coordinate lookup table for the A* heuristic
#[derive(Debug, Clone, Default)]
pub struct NodeTable {
    nodes: HashMap<NodeId, Node>,
}

impl NodeTable {
    pub fn from_nodes(nodes: impl IntoIterator<Item = Node>) -> Self {
        NodeTable {
            nodes: nodes.into_iter().map(|n| (n.id, n)).collect(),
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Euclidean distance between two nodes, if both have coordinates
    pub fn distance_between(&self, a: NodeId, b: NodeId) -> Option<f64> {
        let a = self.get(a)?;
        let b = self.get(b)?;
        Some(((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Adjacency-list graph. Read-only for the duration of any algorithm call.
///
/// Node iteration is in ascending id order (BTreeMap), which pins every
/// "first encountered" tie-break to the smallest node id. Neighbor order is
/// the insertion order of `add_edge` calls and is followed as stored; it
/// decides which equally-good path wins in BFS/DFS.
///
/// Directionality is caller-determined: an undirected edge is represented by
/// inserting both directions. The graph itself only ever follows listed
/// edges.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, Vec<(NodeId, Weight)>>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Ensure a node has an (possibly empty) adjacency entry
    pub fn add_node(&mut self, id: NodeId) {
        self.adjacency.entry(id).or_default();
    }

    /// Insert a directed edge. Both endpoints get adjacency entries so that
    /// a node with no outgoing edges is still distinguishable from an id the
    /// graph has never seen.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        self.adjacency.entry(to).or_default();
        self.adjacency.entry(from).or_default().push((to, weight));
    }

    /// Insert an undirected edge as two directed entries
    pub fn add_undirected_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
    }

    /// Outgoing edges of a node in stored order. An id the graph has never
    /// seen yields an empty slice ("no outgoing edges"), never a fault.
    pub fn neighbors(&self, id: NodeId) -> &[(NodeId, Weight)] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// All node ids in ascending order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// All directed edges, grouped by source in ascending id order
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Weight)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&from, targets)| targets.iter().map(move |&(to, w)| (from, to, w)))
    }
}

/// The closed set of search strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Dijkstra,
    BellmanFord,
    Bfs,
    Dfs,
    AStar,
    FloydWarshall,
}

impl Algorithm {
    /// Every strategy, in comparison-run order
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Dijkstra,
        Algorithm::BellmanFord,
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::AStar,
        Algorithm::FloydWarshall,
    ];
}

impl FromStr for Algorithm {
    type Err = WaypathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bellman-ford" => Ok(Algorithm::BellmanFord),
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "a-star" | "astar" => Ok(Algorithm::AStar),
            "floyd-warshall" => Ok(Algorithm::FloydWarshall),
            other => Err(WaypathError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => write!(f, "dijkstra"),
            Algorithm::BellmanFord => write!(f, "bellman-ford"),
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dfs => write!(f, "dfs"),
            Algorithm::AStar => write!(f, "a-star"),
            Algorithm::FloydWarshall => write!(f, "floyd-warshall"),
        }
    }
}

/// Common output shape populated by every single-source strategy.
///
/// Invariants:
/// - `path` is either empty (no path) or runs from `start` to `end`
///   inclusive; an incomplete predecessor reconstruction is discarded, never
///   returned.
/// - `visited` lists nodes in the order they were dequeued/finalized, with
///   no duplicates, so callers can replay the exploration. Bellman-Ford has
///   no finalization order and reports finite-distance nodes in ascending id
///   order instead.
/// - `distance` is the total path cost — or the edge count for BFS/DFS,
///   which answer "fewest hops" / "first found", not "least weight". It is
///   `f64::INFINITY` when `end` is unreachable (JSON output shows `null`).
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    pub start: NodeId,
    pub end: NodeId,
    pub found: bool,
    pub visited: Vec<NodeId>,
    pub path: Vec<NodeId>,
    pub distance: Weight,
    pub elapsed: Duration,
}
