//! Waypath Core Library
//!
//! Core graph-search kernel for the waypath comparison tool: one adjacency
//! graph model, six interchangeable search strategies sharing a common
//! result contract, and the graph document / fixture plumbing around them.

pub mod cases;
pub mod document;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
