//! Run command: execute a single strategy over a graph

use std::time::Instant;

use crate::cli::{Cli, Endpoints, GraphSource, OutputFormat};
use waypath_core::error::Result;
use waypath_core::graph::{shortest_path, Algorithm};

use super::{load_source, resolve_endpoints, result_line};

/// Execute the run command
pub fn execute(
    cli: &Cli,
    algorithm: Algorithm,
    source: &GraphSource,
    endpoints: &Endpoints,
) -> Result<()> {
    let start = Instant::now();

    let (document, case_pair) = load_source(source)?;
    let (graph, coords) = document.build();

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "load_graph");
    }

    let (from, to) = resolve_endpoints(endpoints.from, endpoints.to, case_pair)?;
    let result = shortest_path(algorithm, &graph, from, to, Some(&coords))?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => println!("{}", result_line(&result)),
    }

    Ok(())
}
