//! On-disk graph document
//!
//! Graph construction is the caller's responsibility; this module gives it a
//! concrete serialized form: a JSON document listing nodes with coordinates,
//! an edge list, and whether that list is directed.

use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WaypathError};
use crate::graph::types::{Graph, Node, NodeId, NodeTable, Weight};

fn default_weight() -> Weight {
    1.0
}

/// A single edge entry; weight defaults to 1
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default = "default_weight")]
    pub weight: Weight,
}

/// Serialized graph document.
///
/// With `directed: false` (the default) every edge is inserted in both
/// directions; with `directed: true` edges are inserted exactly as listed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<Node>,
    pub edges: Vec<EdgeSpec>,
    #[serde(default)]
    pub directed: bool,
}

impl GraphDocument {
    /// Parse and validate a document from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(WaypathError::GraphNotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = fs::read_to_string(path)?;
        Self::from_str_validated(&raw)
    }

    /// Parse and validate a document from any reader (e.g. stdin)
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Self::from_str_validated(&raw)
    }

    fn from_str_validated(raw: &str) -> Result<Self> {
        let doc: GraphDocument = serde_json::from_str(raw)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Reject documents that would mask caller bugs downstream: duplicate
    /// node ids and edges referencing undeclared nodes.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<NodeId> = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.id) {
                return Err(WaypathError::InvalidGraph {
                    reason: format!("duplicate node id {}", node.id),
                });
            }
        }
        for edge in &self.edges {
            for id in [edge.from, edge.to] {
                if !seen.contains(&id) {
                    return Err(WaypathError::InvalidGraph {
                        reason: format!(
                            "edge {} -> {} references undeclared node {}",
                            edge.from, edge.to, id
                        ),
                    });
                }
            }
        }
        Ok(())
    }

    /// Materialize the adjacency graph and coordinate table
    pub fn build(&self) -> (Graph, NodeTable) {
        let mut graph = Graph::new();
        for node in &self.nodes {
            graph.add_node(node.id);
        }
        for edge in &self.edges {
            if self.directed {
                graph.add_edge(edge.from, edge.to, edge.weight);
            } else {
                graph.add_undirected_edge(edge.from, edge.to, edge.weight);
            }
        }
        (graph, NodeTable::from_nodes(self.nodes.iter().copied()))
    }
}
