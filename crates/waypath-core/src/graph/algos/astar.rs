use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

use crate::error::Result;
use crate::graph::algos::dijkstra::HeapEntry;
use crate::graph::algos::{ensure_endpoints, reconstruct_path};
use crate::graph::types::{Algorithm, Graph, NodeId, NodeTable, SearchResult, Weight};

/// Heuristic-guided best-first search toward `end`.
///
/// The heuristic is the Euclidean distance from a node's coordinates to
/// `end`'s; a node missing from `coords` (or `coords` absent entirely)
/// contributes 0, which degrades the search toward Dijkstra. Optimality
/// holds when edge weights are at least the straight-line distance between
/// their endpoints (the heuristic is then admissible and consistent); for
/// graphs that violate this the returned path may be suboptimal, which is
/// inherent to the heuristic, not checked or repaired here.
///
/// The open set is a min-heap ordered by fScore with ties broken toward the
/// smaller node id. A node is marked visited when extracted; extracting
/// `end` stops the search.
#[tracing::instrument(skip(graph, coords), fields(start = start, end = end))]
pub fn astar(
    graph: &Graph,
    start: NodeId,
    end: NodeId,
    coords: Option<&NodeTable>,
) -> Result<SearchResult> {
    let started = Instant::now();
    ensure_endpoints(graph, start, end)?;

    let h = |node: NodeId| -> Weight {
        coords
            .and_then(|table| table.distance_between(node, end))
            .unwrap_or(0.0)
    };

    let mut g_score: HashMap<NodeId, Weight> = HashMap::from([(start, 0.0)]);
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
    let mut closed: HashSet<NodeId> = HashSet::new();
    let mut visited: Vec<NodeId> = Vec::new();
    let mut open: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    open.push(Reverse(HeapEntry {
        node: start,
        cost: h(start),
    }));

    while let Some(Reverse(HeapEntry { node, .. })) = open.pop() {
        // Stale lazy-deletion entry
        if !closed.insert(node) {
            continue;
        }
        visited.push(node);

        if node == end {
            break;
        }

        let g = g_score.get(&node).copied().unwrap_or(Weight::INFINITY);
        for &(neighbor, weight) in graph.neighbors(node) {
            if closed.contains(&neighbor) {
                continue;
            }
            let tentative = g + weight;
            if g_score
                .get(&neighbor)
                .is_none_or(|&current| tentative < current)
            {
                g_score.insert(neighbor, tentative);
                predecessors.insert(neighbor, node);
                open.push(Reverse(HeapEntry {
                    node: neighbor,
                    cost: tentative + h(neighbor),
                }));
            }
        }
    }

    let distance = g_score.get(&end).copied().unwrap_or(Weight::INFINITY);
    let path = if closed.contains(&end) {
        reconstruct_path(&predecessors, start, end)
    } else {
        Vec::new()
    };
    let found = !path.is_empty();

    crate::trace_time!(started, "astar", visited = visited.len());

    Ok(SearchResult {
        algorithm: Algorithm::AStar,
        start,
        end,
        found,
        visited,
        path,
        distance,
        elapsed: started.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::Node;

    fn grid_coords() -> NodeTable {
        // 2x3 grid, 100 apart:
        //   0 - 1 - 2
        //   |   |   |
        //   3 - 4 - 5
        NodeTable::from_nodes([
            Node { id: 0, x: 0.0, y: 0.0 },
            Node { id: 1, x: 100.0, y: 0.0 },
            Node { id: 2, x: 200.0, y: 0.0 },
            Node { id: 3, x: 0.0, y: 100.0 },
            Node { id: 4, x: 100.0, y: 100.0 },
            Node { id: 5, x: 200.0, y: 100.0 },
        ])
    }

    fn grid_graph() -> Graph {
        let mut graph = Graph::new();
        for (a, b) in [(0, 1), (1, 2), (3, 4), (4, 5), (0, 3), (1, 4), (2, 5)] {
            graph.add_undirected_edge(a, b, 100.0);
        }
        graph
    }

    #[test]
    fn test_heuristic_narrows_exploration() {
        let graph = grid_graph();
        let coords = grid_coords();

        let guided = astar(&graph, 0, 2, Some(&coords)).unwrap();
        let blind = astar(&graph, 0, 2, None).unwrap();

        assert_eq!(guided.path, vec![0, 1, 2]);
        assert_eq!(guided.distance, 200.0);
        // With h = 0 the search degrades to Dijkstra and settles more nodes
        assert!(guided.visited.len() <= blind.visited.len());
    }

    #[test]
    fn test_without_coords_matches_dijkstra() {
        let graph = grid_graph();
        let result = astar(&graph, 0, 5, None).unwrap();
        let dij = crate::graph::algos::dijkstra::dijkstra(&graph, 0, 5).unwrap();
        assert_eq!(result.distance, dij.distance);
        assert_eq!(result.path, dij.path);
    }

    #[test]
    fn test_end_is_recorded_as_visited() {
        let graph = grid_graph();
        let result = astar(&graph, 0, 2, Some(&grid_coords())).unwrap();
        assert_eq!(result.visited.last(), Some(&2));
    }

    #[test]
    fn test_reopened_route_wins() {
        // The direct edge to 2 is expensive; the detour found later is
        // cheaper and must replace it before 2 is extracted.
        let mut graph = Graph::new();
        graph.add_edge(0, 2, 100.0);
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(1, 2, 1.0);

        let result = astar(&graph, 0, 2, None).unwrap();
        assert_eq!(result.path, vec![0, 1, 2]);
        assert_eq!(result.distance, 2.0);
    }
}
