//! Matrix command: all-pairs distance and next-hop matrices

use std::time::Instant;

use crate::cli::{Cli, GraphSource, OutputFormat};
use waypath_core::error::Result;
use waypath_core::graph::{all_pairs, AllPairsResult};

use super::{format_weight, load_source};

/// Execute the matrix command
pub fn execute(cli: &Cli, source: &GraphSource) -> Result<()> {
    let start = Instant::now();

    let (document, _) = load_source(source)?;
    let (graph, _) = document.build();

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "load_graph");
    }

    let result = all_pairs(&graph);

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => output_human(&result),
    }

    Ok(())
}

fn output_human(result: &AllPairsResult) {
    print!("{:>8}", "");
    for id in &result.nodes {
        print!("{:>8}", id);
    }
    println!();

    for (i, id) in result.nodes.iter().enumerate() {
        print!("{:>8}", id);
        for &value in &result.dist[i] {
            if value.is_infinite() {
                print!("{:>8}", "-");
            } else {
                print!("{:>8}", format_weight(value));
            }
        }
        println!();
    }
}
