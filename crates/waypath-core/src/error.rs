//! Error types and exit codes for waypath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing graph file, invalid document, unknown node)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the waypath binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing graph, invalid document, unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during waypath operations
#[derive(Error, Debug)]
pub enum WaypathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: dijkstra, bellman-ford, bfs, dfs, a-star, or floyd-warshall)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("graph file not found: {path:?}")]
    GraphNotFound { path: PathBuf },

    #[error("invalid graph document: {reason}")]
    InvalidGraph { reason: String },

    #[error("node not found in graph: {id}")]
    UnknownNode { id: usize },

    #[error("unknown built-in case: {id}")]
    UnknownCase { id: String },

    #[error("negative cycle reachable from node {start}; shortest path is undefined")]
    NegativeCycle { start: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl WaypathError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            WaypathError::UnknownFormat(_)
            | WaypathError::UnknownAlgorithm(_)
            | WaypathError::UsageError(_) => ExitCode::Usage,

            // Data errors
            WaypathError::GraphNotFound { .. }
            | WaypathError::InvalidGraph { .. }
            | WaypathError::UnknownNode { .. }
            | WaypathError::UnknownCase { .. }
            | WaypathError::NegativeCycle { .. } => ExitCode::Data,

            // Generic failures
            WaypathError::Io(_) | WaypathError::Json(_) | WaypathError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Stable machine-readable identifier for this error variant
    pub fn error_type(&self) -> &'static str {
        match self {
            WaypathError::UnknownFormat(_) => "unknown_format",
            WaypathError::UnknownAlgorithm(_) => "unknown_algorithm",
            WaypathError::UsageError(_) => "usage_error",
            WaypathError::GraphNotFound { .. } => "graph_not_found",
            WaypathError::InvalidGraph { .. } => "invalid_graph",
            WaypathError::UnknownNode { .. } => "unknown_node",
            WaypathError::UnknownCase { .. } => "unknown_case",
            WaypathError::NegativeCycle { .. } => "negative_cycle",
            WaypathError::Io(_) => "io_error",
            WaypathError::Json(_) => "json_error",
            WaypathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        })
    }
}

/// Result type alias for waypath operations
pub type Result<T> = std::result::Result<T, WaypathError>;
