//! Search strategy implementations sharing the common result contract

pub mod astar;
pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod floyd_warshall;

use std::collections::HashMap;

use crate::error::{Result, WaypathError};
use crate::graph::types::{Algorithm, Graph, NodeId, NodeTable, SearchResult};

/// Run a single strategy against (graph, start, end).
///
/// The one dispatch point for the closed strategy set; callers never name a
/// concrete implementation. `coords` feeds the A* heuristic and is ignored
/// by every other strategy. Floyd-Warshall computes the full all-pairs
/// matrix and projects the requested pair onto the common result shape.
#[tracing::instrument(skip(graph, coords), fields(algorithm = %algorithm, start = start, end = end))]
pub fn shortest_path(
    algorithm: Algorithm,
    graph: &Graph,
    start: NodeId,
    end: NodeId,
    coords: Option<&NodeTable>,
) -> Result<SearchResult> {
    match algorithm {
        Algorithm::Dijkstra => dijkstra::dijkstra(graph, start, end),
        Algorithm::BellmanFord => bellman_ford::bellman_ford(graph, start, end),
        Algorithm::Bfs => bfs::bfs(graph, start, end),
        Algorithm::Dfs => dfs::dfs(graph, start, end),
        Algorithm::AStar => astar::astar(graph, start, end, coords),
        Algorithm::FloydWarshall => {
            ensure_endpoints(graph, start, end)?;
            floyd_warshall::all_pairs(graph).to_search_result(start, end)
        }
    }
}

/// Fail fast on a start/end id the graph has never seen, so a caller bug is
/// not masked as an empty "unreachable" result.
pub(crate) fn ensure_endpoints(graph: &Graph, start: NodeId, end: NodeId) -> Result<()> {
    if !graph.contains(start) {
        return Err(WaypathError::UnknownNode { id: start });
    }
    if !graph.contains(end) {
        return Err(WaypathError::UnknownNode { id: end });
    }
    Ok(())
}

/// Rebuild the start..=end path by walking predecessor links backward.
/// A chain that does not reach back to `start` (or is longer than the
/// predecessor map, i.e. cyclic) is discarded, never returned.
pub(crate) fn reconstruct_path(
    predecessors: &HashMap<NodeId, NodeId>,
    start: NodeId,
    end: NodeId,
) -> Vec<NodeId> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        if path.len() > predecessors.len() + 1 {
            return Vec::new();
        }
        match predecessors.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}
