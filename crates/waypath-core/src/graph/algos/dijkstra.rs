use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

use crate::error::Result;
use crate::graph::algos::{ensure_endpoints, reconstruct_path};
use crate::graph::types::{Algorithm, Graph, NodeId, SearchResult, Weight};

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost,
/// ties broken toward the smaller node id for reproducible runs)
#[derive(Debug, Clone)]
pub(crate) struct HeapEntry {
    pub node: NodeId,
    pub cost: Weight,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && self.cost == other.cost
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost
            .partial_cmp(&other.cost)
            .unwrap()
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Single-source shortest path by greedy relaxation.
///
/// Assumes non-negative edge weights; the output is undefined when that
/// assumption is violated (use Bellman-Ford for negative weights). Stops as
/// soon as `end` is finalized, so `visited` is exactly the prefix explored up
/// to and including `end` — or the full reachable set when `end` cannot be
/// reached.
#[tracing::instrument(skip(graph), fields(start = start, end = end))]
pub fn dijkstra(graph: &Graph, start: NodeId, end: NodeId) -> Result<SearchResult> {
    let started = Instant::now();
    ensure_endpoints(graph, start, end)?;

    let mut dist: HashMap<NodeId, Weight> = HashMap::from([(start, 0.0)]);
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
    let mut settled: HashSet<NodeId> = HashSet::new();
    let mut visited: Vec<NodeId> = Vec::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    heap.push(Reverse(HeapEntry {
        node: start,
        cost: 0.0,
    }));

    while let Some(Reverse(HeapEntry { node, cost })) = heap.pop() {
        // Stale lazy-deletion entry
        if !settled.insert(node) {
            continue;
        }
        visited.push(node);

        if node == end {
            break;
        }

        for &(neighbor, weight) in graph.neighbors(node) {
            if settled.contains(&neighbor) {
                continue;
            }
            let next_cost = cost + weight;
            if dist.get(&neighbor).is_none_or(|&current| next_cost < current) {
                dist.insert(neighbor, next_cost);
                predecessors.insert(neighbor, node);
                heap.push(Reverse(HeapEntry {
                    node: neighbor,
                    cost: next_cost,
                }));
            }
        }
    }

    let distance = dist.get(&end).copied().unwrap_or(Weight::INFINITY);
    let path = if settled.contains(&end) {
        reconstruct_path(&predecessors, start, end)
    } else {
        Vec::new()
    };
    let found = !path.is_empty();

    crate::trace_time!(started, "dijkstra", visited = visited.len());

    Ok(SearchResult {
        algorithm: Algorithm::Dijkstra,
        start,
        end,
        found,
        visited,
        path,
        distance,
        elapsed: started.elapsed(),
    })
}
