//! Path command
use spf_core::error::Result;
use spf_core::format::OutputFormat;
use spf_core::graph::GraphStore;
use spf_core::spf::{shortest_path, PathOutcome};

use crate::cli::Cli;

/// Execute the path command
pub fn execute(cli: &Cli, graph: &GraphStore, from: &str, to: &str) -> Result<()> {
    let outcome = shortest_path(graph, from, to)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        OutputFormat::Human => output_path_human(cli, from, &outcome),
    }

    Ok(())
}

pub fn output_path_human(cli: &Cli, from: &str, outcome: &PathOutcome) {
    if !cli.quiet {
        println!("--- SPF calculation (Dijkstra) from {} ---", from);
    }

    match outcome {
        PathOutcome::Found(found) => {
            println!("Shortest path found");
            println!("Total cost (latency): {} ms", found.total_cost);
            println!("Path: {}", found.path.join(" -> "));
            if !cli.quiet {
                let hops = found.hops();
                println!("Hops: {} {}", hops, if hops == 1 { "link" } else { "links" });
            }
        }
        PathOutcome::NoPath { source, target } => {
            println!("No path exists between {} and {}", source, target);
        }
    }
}
