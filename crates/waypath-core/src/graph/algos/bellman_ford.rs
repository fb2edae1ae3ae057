use std::collections::HashMap;
use std::time::Instant;

use crate::error::{Result, WaypathError};
use crate::graph::algos::{ensure_endpoints, reconstruct_path};
use crate::graph::types::{Algorithm, Graph, NodeId, SearchResult, Weight};

/// Single-source shortest path tolerant of negative edge weights.
///
/// Performs up to `|V| - 1` full relaxation passes over the edge list
/// (stopping early once a pass changes nothing), then one extra pass: any
/// edge still relaxable means a negative-weight cycle is reachable from
/// `start`, which is surfaced as [`WaypathError::NegativeCycle`] rather than
/// a silently wrong finite distance.
///
/// Bellman-Ford has no finalization order, so `visited` reports every node
/// with a finite distance after convergence, in ascending id order.
#[tracing::instrument(skip(graph), fields(start = start, end = end))]
pub fn bellman_ford(graph: &Graph, start: NodeId, end: NodeId) -> Result<SearchResult> {
    let started = Instant::now();
    ensure_endpoints(graph, start, end)?;

    let mut dist: HashMap<NodeId, Weight> = HashMap::from([(start, 0.0)]);
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();

    for _ in 1..graph.node_count() {
        let mut changed = false;
        for (from, to, weight) in graph.edges() {
            let Some(&from_dist) = dist.get(&from) else {
                continue;
            };
            let next = from_dist + weight;
            if dist.get(&to).is_none_or(|&current| next < current) {
                dist.insert(to, next);
                predecessors.insert(to, from);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    // Extra pass: a still-relaxable edge proves a negative cycle
    for (from, to, weight) in graph.edges() {
        if let Some(&from_dist) = dist.get(&from) {
            if dist.get(&to).is_none_or(|&current| from_dist + weight < current) {
                return Err(WaypathError::NegativeCycle { start });
            }
        }
    }

    let mut visited: Vec<NodeId> = dist.keys().copied().collect();
    visited.sort_unstable();

    let distance = dist.get(&end).copied().unwrap_or(Weight::INFINITY);
    let path = if dist.contains_key(&end) {
        reconstruct_path(&predecessors, start, end)
    } else {
        Vec::new()
    };
    let found = !path.is_empty();

    crate::trace_time!(started, "bellman_ford", visited = visited.len());

    Ok(SearchResult {
        algorithm: Algorithm::BellmanFord,
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

    #[test]
    fn test_negative_edge_changes_the_winner() {
        // Without the negative edge the direct hop 0 -> 3 (cost 4) wins;
        // with it, 0 -> 1 -> 2 -> 3 costs 2 - 3 + 2 = 1.
        let mut graph = Graph::new();
        graph.add_edge(0, 3, 4.0);
        graph.add_edge(0, 1, 2.0);
        graph.add_edge(1, 2, -3.0);
        graph.add_edge(2, 3, 2.0);

        let result = bellman_ford(&graph, 0, 3).unwrap();
        assert_eq!(result.path, vec![0, 1, 2, 3]);
        assert_eq!(result.distance, 1.0);
    }

    #[test]
    fn test_negative_cycle_is_flagged() {
        let mut graph = Graph::new();
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(1, 2, -2.0);
        graph.add_edge(2, 1, 1.0);
        graph.add_edge(2, 3, 1.0);

        let err = bellman_ford(&graph, 0, 3).unwrap_err();
        assert!(matches!(err, WaypathError::NegativeCycle { start: 0 }));
    }

    #[test]
    fn test_negative_cycle_in_other_component_is_ignored() {
        // The cycle 3 <-> 4 is unreachable from 0, so 0 -> 1 is still
        // well-defined.
        let mut graph = Graph::new();
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(3, 4, -2.0);
        graph.add_edge(4, 3, 1.0);

        let result = bellman_ford(&graph, 0, 1).unwrap();
        assert_eq!(result.path, vec![0, 1]);
        assert_eq!(result.distance, 1.0);
    }

    #[test]
    fn test_visited_is_finite_distance_set_ascending() {
        let mut graph = Graph::new();
        graph.add_edge(2, 0, 1.0);
        graph.add_edge(2, 1, 1.0);
        graph.add_node(5);

        let result = bellman_ford(&graph, 2, 1).unwrap();
        assert_eq!(result.visited, vec![0, 1, 2]);
    }
}
