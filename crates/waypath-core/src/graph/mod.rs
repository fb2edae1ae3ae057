//! Graph model and path-finding strategies
//!
//! Provides the comparison kernel consumed by the CLI:
//! - adjacency-list graph model and coordinate table
//! - six interchangeable search strategies behind one dispatch point
//! - all-pairs matrices with a single-pair projection

pub mod algos;
pub mod types;

pub use algos::floyd_warshall::{all_pairs, AllPairsResult};
pub use algos::shortest_path;
pub use types::{Algorithm, Graph, Node, NodeId, NodeTable, SearchResult, Weight};
