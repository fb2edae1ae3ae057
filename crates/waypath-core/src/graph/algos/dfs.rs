use std::collections::{HashMap, HashSet};
use std::time::Instant;

use crate::error::Result;
use crate::graph::algos::{ensure_endpoints, reconstruct_path};
use crate::graph::types::{Algorithm, Graph, NodeId, SearchResult, Weight};

/// First-found path by stack-based exploration.
///
/// No optimality guarantee: whatever path the depth-first walk stumbles on
/// first is returned, with `distance` as its edge count. That weakness is
/// the point — it is what a comparison run demonstrates. `found`
/// distinguishes "stack exhausted" from a successful reconstruction.
///
/// Neighbors are pushed from a reversed iterator view so exploration visits
/// them in stored left-to-right order despite stack semantics; the caller's
/// adjacency list is never touched.
#[tracing::instrument(skip(graph), fields(start = start, end = end))]
pub fn dfs(graph: &Graph, start: NodeId, end: NodeId) -> Result<SearchResult> {
    let started = Instant::now();
    ensure_endpoints(graph, start, end)?;

    let mut explored: HashSet<NodeId> = HashSet::new();
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
    let mut visited: Vec<NodeId> = Vec::new();
    let mut stack: Vec<NodeId> = vec![start];
    let mut reached_end = false;

    while let Some(current) = stack.pop() {
        if !explored.insert(current) {
            continue;
        }
        visited.push(current);

        if current == end {
            reached_end = true;
            break;
        }

        for &(neighbor, _) in graph.neighbors(current).iter().rev() {
            if !explored.contains(&neighbor) {
                predecessors.insert(neighbor, current);
                stack.push(neighbor);
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

    crate::trace_time!(started, "dfs", visited = visited.len());

    Ok(SearchResult {
        algorithm: Algorithm::Dfs,
        start,
        end,
        found,
        visited,
        path,
        distance,
        elapsed: started.elapsed(),
    })
}
