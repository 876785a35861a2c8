//! Topology command
use spf_core::error::Result;
use spf_core::format::OutputFormat;
use spf_core::graph::GraphStore;
use spf_core::topology::{render_topology_human, TopologyReport};

use crate::cli::Cli;

/// Execute the topology command
pub fn execute(cli: &Cli, graph: &GraphStore) -> Result<()> {
    match cli.format {
        OutputFormat::Human => {
            print!("{}", render_topology_human(graph));
            if !cli.quiet {
                println!(
                    "{} routers, {} links",
                    graph.node_count(),
                    graph.edge_count()
                );
            }
        }
        OutputFormat::Json => {
            let report = TopologyReport::from_db(graph);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
