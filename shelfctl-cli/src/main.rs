//! shelfctl CLI - product inventory service control
//!
//! This is the main entry point for the shelfctl command-line tool, which
//! currently provides:
//! - HTTP API server for the product store (`serve` subcommand)

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "shelfctl",
    author,
    version,
    about = "Product inventory service over PostgreSQL",
    long_about = "Run the shelfctl HTTP API: product create/read/delete over a \
                  PostgreSQL-backed store."
)]
struct Cli {
    /// Enable debug logging (equivalent to RUST_LOG=debug)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap resolves env-backed arguments
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
    }
}
