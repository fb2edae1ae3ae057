//! Command dispatch and shared helpers for waypath

mod cases;
mod compare;
mod matrix;
mod run;

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands, GraphSource};
use waypath_core::cases as builtin_cases;
use waypath_core::document::GraphDocument;
use waypath_core::error::{Result, WaypathError};
use waypath_core::graph::{NodeId, SearchResult};

pub fn dispatch(cli: &Cli, start: Instant) -> Result<()> {
    let result = match &cli.command {
        Commands::Run {
            algorithm,
            source,
            endpoints,
        } => run::execute(cli, *algorithm, source, endpoints),
        Commands::Compare { source, endpoints } => compare::execute(cli, source, endpoints),
        Commands::Matrix { source } => matrix::execute(cli, source),
        Commands::Cases { id } => cases::execute(cli, id.as_deref()),
    };

    debug!(elapsed = ?start.elapsed(), "dispatch");
    result
}

/// Resolve a graph source to its document, plus the case's suggested
/// start/end pair when a built-in case was named.
pub(crate) fn load_source(source: &GraphSource) -> Result<(GraphDocument, Option<(NodeId, NodeId)>)> {
    if let Some(id) = &source.case {
        let case = builtin_cases::find(id)?;
        Ok((case.document, Some((case.start, case.end))))
    } else if let Some(path) = &source.graph {
        Ok((GraphDocument::from_path(path)?, None))
    } else {
        // clap enforces one of the two; kept for direct callers
        Err(WaypathError::UsageError(
            "either --graph or --case is required".to_string(),
        ))
    }
}

/// Explicit --from/--to win; a named case fills in whatever was omitted
pub(crate) fn resolve_endpoints(
    from: Option<NodeId>,
    to: Option<NodeId>,
    case_pair: Option<(NodeId, NodeId)>,
) -> Result<(NodeId, NodeId)> {
    match (from, to, case_pair) {
        (Some(from), Some(to), _) => Ok((from, to)),
        (from, to, Some((case_from, case_to))) => {
            Ok((from.unwrap_or(case_from), to.unwrap_or(case_to)))
        }
        _ => Err(WaypathError::UsageError(
            "--from and --to are required with --graph".to_string(),
        )),
    }
}

/// One human-readable line per result, shared by `run` and `compare`
pub(crate) fn result_line(result: &SearchResult) -> String {
    if !result.found {
        return format!(
            "{}: no path from {} to {} (visited {}, {:.1?})",
            result.algorithm,
            result.start,
            result.end,
            result.visited.len(),
            result.elapsed
        );
    }
    let path = result
        .path
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ");
    format!(
        "{}: {} (distance {}, visited {}, {:.1?})",
        result.algorithm,
        path,
        format_weight(result.distance),
        result.visited.len(),
        result.elapsed
    )
}

/// Render a weight without a trailing ".0" for whole numbers
pub(crate) fn format_weight(weight: f64) -> String {
    if weight.is_infinite() {
        "inf".to_string()
    } else if weight.fract() == 0.0 {
        format!("{}", weight as i64)
    } else {
        format!("{:.2}", weight)
    }
}
