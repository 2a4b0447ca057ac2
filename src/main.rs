use clap::Parser;
use std::process;
use toposort::cli::{Cli, Commands};
use toposort::cli_handlers;
use toposort::mcp::run_mcp_server;

#[tokio::main]
async fn main() {
    // Initialize tracing for MCP
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sort { file, seed, json } => {
            cli_handlers::handle_sort(file.as_deref(), seed, json)
        }
        Commands::Mcp => {
            if let Err(e) = run_mcp_server().await {
                eprintln!("MCP server error: {e}");
                process::exit(1);
            }
            return;
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
