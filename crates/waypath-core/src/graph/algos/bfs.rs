use std::collections::{HashMap, HashSet, VecDeque};
use std::time::Instant;

use crate::error::Result;
use crate::graph::algos::{ensure_endpoints, reconstruct_path};
use crate::graph::types::{Algorithm, Graph, NodeId, SearchResult, Weight};

/// Unweighted shortest path by level-order exploration.
///
/// Every edge counts as one hop regardless of its stored weight, so
/// `distance` is always `path.len() - 1` — BFS answers "fewest hops", not
/// "least weight". Nodes are deduplicated when discovered but enter
/// `visited` in dequeue order; the search stops when `end` is dequeued.
/// Which equally-short path wins on ties follows the stored adjacency order.
#[tracing::instrument(skip(graph), fields(start = start, end = end))]
pub fn bfs(graph: &Graph, start: NodeId, end: NodeId) -> Result<SearchResult> {
    let started = Instant::now();
    ensure_endpoints(graph, start, end)?;

    let mut discovered: HashSet<NodeId> = HashSet::from([start]);
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
    let mut visited: Vec<NodeId> = Vec::new();
    let mut queue: VecDeque<NodeId> = VecDeque::from([start]);
    let mut reached_end = false;

    while let Some(current) = queue.pop_front() {
        visited.push(current);

        if current == end {
            reached_end = true;
            break;
        }

        for &(neighbor, _) in graph.neighbors(current) {
            if discovered.insert(neighbor) {
                predecessors.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    let path = if reached_end {
        reconstruct_path(&predecessors, start, end)
    } else {
        Vec::new()
    };
    let found = !path.is_empty();
    let distance = if found {
        (path.len() - 1) as Weight
    } else {
        Weight::INFINITY
    };

    crate::trace_time!(started, "bfs", visited = visited.len());

    Ok(SearchResult {
        algorithm: Algorithm::Bfs,
        start,
        end,
        found,
        visited,
        path,
        distance,
        elapsed: started.elapsed(),
    })
}
