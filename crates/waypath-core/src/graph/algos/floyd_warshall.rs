use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::{Result, WaypathError};
use crate::graph::types::{Algorithm, Graph, NodeId, SearchResult, Weight};

/// All-pairs shortest paths and first hops.
///
/// Rows and columns are indexed by position in `nodes` (ascending id
/// order). `dist[i][j]` is `f64::INFINITY` when no path exists;
/// `next[i][j]` is the first hop on the best known path from `nodes[i]`
/// to `nodes[j]`. This is deliberately not a [`SearchResult`]: the matrix
/// shape has no per-pair exploration to report, so pair queries go through
/// [`AllPairsResult::to_search_result`] instead.
#[derive(Debug, Clone, Serialize)]
pub struct AllPairsResult {
    /// Vertex set in ascending id order
    pub nodes: Vec<NodeId>,
    pub dist: Vec<Vec<Weight>>,
    pub next: Vec<Vec<Option<NodeId>>>,
    pub elapsed: Duration,
    #[serde(skip)]
    index: HashMap<NodeId, usize>,
}

/// Dynamic programming over intermediate vertices.
///
/// O(|V|³) time and O(|V|²) space — the scalability ceiling that sets this
/// apart from the single-source strategies; fine for comparison-sized
/// graphs, unsuitable for large ones. Tolerates negative edge weights, but
/// negative cycles are out of contract here — Bellman-Ford is the
/// designated detector. Parallel edges collapse to the cheapest.
#[tracing::instrument(skip(graph), fields(node_count = graph.node_count()))]
pub fn all_pairs(graph: &Graph) -> AllPairsResult {
    let started = Instant::now();

    let nodes: Vec<NodeId> = graph.node_ids().collect();
    let index: HashMap<NodeId, usize> = nodes.iter().enumerate().map(|(i, &id)| (id, i)).collect();
    let n = nodes.len();

    let mut dist = vec![vec![Weight::INFINITY; n]; n];
    let mut next: Vec<Vec<Option<NodeId>>> = vec![vec![None; n]; n];

    for (i, &id) in nodes.iter().enumerate() {
        dist[i][i] = 0.0;
        next[i][i] = Some(id);
    }
    for (from, to, weight) in graph.edges() {
        let (i, j) = (index[&from], index[&to]);
        if weight < dist[i][j] {
            dist[i][j] = weight;
            next[i][j] = Some(to);
        }
    }

    for k in 0..n {
        for i in 0..n {
            if dist[i][k].is_infinite() {
                continue;
            }
            for j in 0..n {
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                    next[i][j] = next[i][k];
                }
            }
        }
    }

    crate::trace_time!(started, "floyd_warshall", node_count = n);

    AllPairsResult {
        nodes,
        dist,
        next,
        elapsed: started.elapsed(),
        index,
    }
}

impl AllPairsResult {
    fn idx(&self, id: NodeId) -> Result<usize> {
        self.index
            .get(&id)
            .copied()
            .ok_or(WaypathError::UnknownNode { id })
    }

    /// Cost of the best start -> end path (`INFINITY` when unreachable)
    pub fn distance(&self, start: NodeId, end: NodeId) -> Result<Weight> {
        Ok(self.dist[self.idx(start)?][self.idx(end)?])
    }

    /// Reconstruct the start..=end path by walking first hops
    pub fn path(&self, start: NodeId, end: NodeId) -> Result<Vec<NodeId>> {
        let j = self.idx(end)?;
        if self.dist[self.idx(start)?][j].is_infinite() {
            return Ok(Vec::new());
        }

        let mut path = vec![start];
        let mut current = start;
        for _ in 0..self.nodes.len() {
            if current == end {
                return Ok(path);
            }
            match self.next[self.idx(current)?][j] {
                Some(hop) => {
                    path.push(hop);
                    current = hop;
                }
                None => return Ok(Vec::new()),
            }
        }
        Ok(if current == end { path } else { Vec::new() })
    }

    /// Project a single pair onto the common result shape.
    ///
    /// Floyd-Warshall has no per-pair exploration, so `visited` reports the
    /// full vertex set — a known mismatch with the single-source contract,
    /// accepted so comparison runs can include this strategy. `elapsed`
    /// covers the whole matrix computation, not just the lookup.
    pub fn to_search_result(&self, start: NodeId, end: NodeId) -> Result<SearchResult> {
        let distance = self.distance(start, end)?;
        let path = self.path(start, end)?;
        let found = !path.is_empty();
        Ok(SearchResult {
            algorithm: Algorithm::FloydWarshall,
            start,
            end,
            found,
            visited: self.nodes.clone(),
            path,
            distance,
            elapsed: self.elapsed,
        })
    }
}
