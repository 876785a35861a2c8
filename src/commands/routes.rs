//! Routes command: full SPF routing table from one router
use spf_core::error::Result;
use spf_core::format::OutputFormat;
use spf_core::graph::GraphStore;
use spf_core::spf::{shortest_path_tree, SpfTree};

use crate::cli::Cli;

/// Execute the routes command
pub fn execute(cli: &Cli, graph: &GraphStore, from: &str) -> Result<()> {
    let tree = shortest_path_tree(graph, from)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&tree)?);
        }
        OutputFormat::Human => output_routes_human(cli, &tree),
    }

    Ok(())
}

fn output_routes_human(cli: &Cli, tree: &SpfTree) {
    if !cli.quiet {
        println!("--- Routing table for {} ---", tree.source);
    }
    println!(
        "{:<12} {:>8} {:<10} Path",
        "Destination", "Cost(ms)", "Next hop"
    );

    for route in &tree.routes {
        println!(
            "{:<12} {:>8} {:<10} {}",
            route.destination,
            route.cost,
            route.next_hop,
            route.path.join(" -> ")
        );
    }

    if !tree.unreachable.is_empty() {
        println!("Unreachable: {}", tree.unreachable.join(", "));
    }
}
