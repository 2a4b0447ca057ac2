use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "toposort")]
#[command(about = "Randomized topological sort over edge-list graphs")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sort a graph given as a JSON list of [from, to] edge pairs
    Sort {
        /// Path to the edge list file (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Seed the tie-break generator for a reproducible order
        #[arg(long)]
        seed: Option<u64>,
        /// Print the order as JSON instead of one node per line
        #[arg(long)]
        json: bool,
    },

    /// Start MCP server
    Mcp,
}
