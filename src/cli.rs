//! CLI argument parsing for spf
//!
//! Global flags: --topology, --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use spf_core::format::OutputFormat;

/// spf - link-state shortest path first calculator
#[derive(Parser, Debug)]
#[command(name = "spf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Topology file (TOML); the built-in reference network is used if omitted
    #[arg(long, global = true, env = "SPF_TOPOLOGY")]
    pub topology: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, spf_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every router and its links (the link-state database)
    Topology,

    /// Compute the minimum-latency path between two routers
    Path {
        /// Source router
        from: String,

        /// Target router
        to: String,
    },

    /// Compute the full SPF routing table from one router
    Routes {
        /// Source router
        from: String,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
