//! Compare command: run every strategy over the same graph

use std::time::Instant;

use serde::Serialize;

use crate::cli::{Cli, Endpoints, GraphSource, OutputFormat};
use waypath_core::error::{Result, WaypathError};
use waypath_core::graph::{shortest_path, Algorithm, SearchResult};

use super::{load_source, resolve_endpoints, result_line};

/// One row of a comparison run. Exactly one of `result`/`error` is set.
#[derive(Debug, Serialize)]
struct ComparisonEntry {
    algorithm: Algorithm,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<SearchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Execute the compare command
pub fn execute(cli: &Cli, source: &GraphSource, endpoints: &Endpoints) -> Result<()> {
    let start = Instant::now();

    let (document, case_pair) = load_source(source)?;
    let (graph, coords) = document.build();
    let (from, to) = resolve_endpoints(endpoints.from, endpoints.to, case_pair)?;

    // A bad endpoint would fail all six strategies identically; reject it
    // once up front instead.
    for id in [from, to] {
        if !graph.contains(id) {
            return Err(WaypathError::UnknownNode { id });
        }
    }

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "load_graph");
    }

    let mut entries = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        match shortest_path(algorithm, &graph, from, to, Some(&coords)) {
            Ok(result) => entries.push(ComparisonEntry {
                algorithm,
                result: Some(result),
                error: None,
            }),
            // A per-strategy failure (e.g. a negative cycle under
            // Bellman-Ford) is reported inline; the comparison run goes on.
            Err(err) => entries.push(ComparisonEntry {
                algorithm,
                result: None,
                error: Some(err.to_string()),
            }),
        }
    }

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Human => output_human(cli, from, to, &entries),
    }

    Ok(())
}

fn output_human(cli: &Cli, from: usize, to: usize, entries: &[ComparisonEntry]) {
    if !cli.quiet {
        println!("comparing {} strategies from {} to {}", entries.len(), from, to);
    }
    for entry in entries {
        match (&entry.result, &entry.error) {
            (Some(result), _) => println!("{}", result_line(result)),
            (None, Some(error)) => println!("{}: error: {}", entry.algorithm, error),
            (None, None) => {}
        }
    }
}
