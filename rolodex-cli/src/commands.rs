//! Subcommand arguments and runners
//!
//! Every subcommand opens the store itself; `serve` hands it to the
//! server, the admin commands drive it directly.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use rolodex_server::{run_server, Account, ServerConfig, Store};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "ROLODEX_ADDR", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// SQLite database file (created if absent)
    #[arg(long, env = "ROLODEX_DB", default_value = "./rolodex.db")]
    pub database: PathBuf,

    /// Directory served under /css/
    #[arg(long, env = "ROLODEX_ASSETS", default_value = "./assets/css")]
    pub assets: PathBuf,
}

/// Run the HTTP server (blocks until shutdown).
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind_addr: args.bind,
        database: args.database,
        assets_dir: args.assets,
    };

    let store = Store::open(&config.database)
        .await
        .with_context(|| format!("failed to open store at {}", config.database.display()))?;

    tracing::info!(database = %config.database.display(), "store opened");

    run_server(store, config).await.context("server error")
}

/// Arguments for the add command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Account name
    pub name: String,

    /// Account email
    pub email: String,

    /// SQLite database file (created if absent)
    #[arg(long, env = "ROLODEX_DB", default_value = "./rolodex.db")]
    pub database: PathBuf,
}

pub async fn run_add(args: AddArgs) -> Result<()> {
    let store = open_store(&args.database).await?;
    let account = Account {
        name: args.name,
        email: args.email,
    };
    store
        .insert(&account)
        .await
        .context("failed to insert account")?;

    println!("added '{}' <{}>", account.name, account.email);
    Ok(())
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Maximum number of accounts to print
    #[arg(long, default_value_t = 100)]
    pub limit: i64,

    /// Number of accounts to skip
    #[arg(long, default_value_t = 0)]
    pub offset: i64,

    /// SQLite database file (created if absent)
    #[arg(long, env = "ROLODEX_DB", default_value = "./rolodex.db")]
    pub database: PathBuf,
}

pub async fn run_list(args: ListArgs) -> Result<()> {
    let store = open_store(&args.database).await?;
    let accounts = store
        .retrieve_list(args.limit, args.offset)
        .await
        .context("failed to list accounts")?;

    if accounts.is_empty() {
        println!("no accounts");
        return Ok(());
    }
    for account in accounts {
        println!("{} <{}>", account.name, account.email);
    }
    Ok(())
}

/// Arguments for the remove command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Account name to delete (removes every match)
    pub name: String,

    /// SQLite database file (created if absent)
    #[arg(long, env = "ROLODEX_DB", default_value = "./rolodex.db")]
    pub database: PathBuf,
}

pub async fn run_remove(args: RemoveArgs) -> Result<()> {
    let store = open_store(&args.database).await?;
    let removed = store
        .delete(&args.name)
        .await
        .context("failed to delete account")?;

    println!("removed {removed} account(s) named '{}'", args.name);
    Ok(())
}

async fn open_store(database: &Path) -> Result<Store> {
    Store::open(database)
        .await
        .with_context(|| format!("failed to open store at {}", database.display()))
}
