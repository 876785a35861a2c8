//! Command dispatch logic for spf
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use spf_core::error::{Result, SpfError};
use spf_core::format::OutputFormat;
use spf_core::spf::{shortest_path, PathOutcome};
use spf_core::topology::reference::{DEFAULT_SOURCE, DEFAULT_TARGET};
use spf_core::topology::{BuiltTopology, TopologyConfig, TopologyReport};

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let built = load_topology(cli)?;

    if cli.verbose {
        debug!(elapsed = ?start.elapsed(), "load_topology");
    }

    let result = match &cli.command {
        None => handle_reference_run(cli, &built),

        Some(Commands::Topology) => commands::topology::execute(cli, &built.graph),

        Some(Commands::Path { from, to }) => commands::path::execute(cli, &built.graph, from, to),

        Some(Commands::Routes { from }) => commands::routes::execute(cli, &built.graph, from),
    };

    if cli.verbose {
        debug!(elapsed = ?start.elapsed(), "execute_command");
    }

    result
}

/// Load the configured topology (or the reference one) and build the graph.
///
/// Entries that cannot be inserted are reported and skipped.
fn load_topology(cli: &Cli) -> Result<BuiltTopology> {
    let config = match &cli.topology {
        Some(path) => TopologyConfig::load(path)?,
        None => TopologyConfig::reference(),
    };

    let built = config.build();

    if !cli.quiet {
        for entry in &built.skipped {
            eprintln!("warning: skipped {}: {}", entry.item, entry.reason);
        }
    }

    Ok(built)
}

#[derive(Serialize)]
struct ReferenceRun<'a> {
    topology: TopologyReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a PathOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<serde_json::Value>,
}

/// No subcommand: dump the topology, then compute the default A to B path.
///
/// A topology without the default routers is reported on the console only;
/// this run never fails on the computation itself.
fn handle_reference_run(cli: &Cli, built: &BuiltTopology) -> Result<()> {
    let outcome = match shortest_path(&built.graph, DEFAULT_SOURCE, DEFAULT_TARGET) {
        Ok(outcome) => Ok(outcome),
        Err(e @ SpfError::InvalidEndpoint { .. }) => {
            tracing::warn!(error = %e, "reference run skipped");
            Err(e)
        }
        Err(e) => return Err(e),
    };

    match cli.format {
        OutputFormat::Human => {
            commands::topology::execute(cli, &built.graph)?;
            println!();
            match &outcome {
                Ok(outcome) => commands::path::output_path_human(cli, DEFAULT_SOURCE, outcome),
                Err(e) => println!(
                    "Invalid source or target router ({}); expected {} and {}",
                    e, DEFAULT_SOURCE, DEFAULT_TARGET
                ),
            }
        }
        OutputFormat::Json => {
            let run = ReferenceRun {
                topology: TopologyReport::from_db(&built.graph),
                path: outcome.as_ref().ok(),
                error: outcome.as_ref().err().map(|e| e.to_json()["error"].clone()),
            };
            println!("{}", serde_json::to_string_pretty(&run)?);
        }
    }

    Ok(())
}
