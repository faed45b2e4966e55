//! rolodex CLI - serve the name/email register or administer it directly
//!
//! Usage:
//!   rolodex serve                      # run the web UI on 127.0.0.1:8080
//!   rolodex add Alice a@x.com          # insert one account
//!   rolodex list                       # print accounts, newest first
//!   rolodex remove Alice               # delete every account named Alice
//!
//! Environment variables:
//!   RUST_LOG          # log filter (default: info)
//!   ROLODEX_DB        # database file (default: ./rolodex.db)
//!   ROLODEX_ADDR      # serve bind address (default: 127.0.0.1:8080)
//!   ROLODEX_ASSETS    # directory served under /css/ (default: ./assets/css)

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "rolodex",
    version,
    about = "Name/email register with a server-rendered web UI"
)]
struct Cli {
    /// Enable debug logging (unless RUST_LOG is explicitly set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::ServeArgs),
    /// Insert one account
    Add(commands::AddArgs),
    /// List accounts, newest first
    List(commands::ListArgs),
    /// Delete every account with the given name
    Remove(commands::RemoveArgs),
}

fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Add(args) => commands::run_add(args).await,
        Commands::List(args) => commands::run_list(args).await,
        Commands::Remove(args) => commands::run_remove(args).await,
    }
}
