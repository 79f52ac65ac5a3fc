//! FinLab MCP server entry point
//!
//! Serves the documentation tools, install script and feedback API over
//! HTTP.

use clap::Parser;
use finlab_mcp::cli::{run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
