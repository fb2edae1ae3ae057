//! CLI argument parsing for waypath
//!
//! Uses clap for argument parsing. Global flags: --format, --quiet,
//! --verbose, --log-level, --log-json. Every graph-consuming subcommand
//! accepts either --graph (a JSON document) or --case (a built-in fixture).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use waypath_core::format::OutputFormat;
use waypath_core::graph::{Algorithm, NodeId};

/// Waypath - comparative shortest-path search CLI
#[derive(Parser, Debug)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a single search strategy over a graph
    Run {
        /// Search strategy
        #[arg(long, short = 'a', value_parser = parse_algorithm)]
        algorithm: Algorithm,

        #[command(flatten)]
        source: GraphSource,

        #[command(flatten)]
        endpoints: Endpoints,
    },

    /// Run every strategy over the same graph and report all results
    Compare {
        #[command(flatten)]
        source: GraphSource,

        #[command(flatten)]
        endpoints: Endpoints,
    },

    /// Compute the all-pairs distance and next-hop matrices
    Matrix {
        #[command(flatten)]
        source: GraphSource,
    },

    /// List built-in cases, or emit one as a graph document
    Cases {
        /// Case id to emit as JSON (omit to list all)
        id: Option<String>,
    },
}

/// Where the graph comes from
#[derive(Args, Debug)]
pub struct GraphSource {
    /// Path to a graph document (JSON)
    #[arg(long, short = 'g', conflicts_with = "case", required_unless_present = "case")]
    pub graph: Option<PathBuf>,

    /// Built-in case id (see `waypath cases`)
    #[arg(long)]
    pub case: Option<String>,
}

/// Start and end node ids. Optional with --case, which carries its own
/// suggested pair; explicit flags always win.
#[derive(Args, Debug)]
pub struct Endpoints {
    /// Start node id
    #[arg(long, required_unless_present = "case")]
    pub from: Option<NodeId>,

    /// End node id
    #[arg(long, required_unless_present = "case")]
    pub to: Option<NodeId>,
}

/// Parse an algorithm name from string
fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

/// Parse an output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
