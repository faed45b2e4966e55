//! Server configuration
//!
//! The original deployment hard-coded the listen address and database
//! path; here all three knobs are externalized. The CLI fills them in
//! from flags or environment variables (`ROLODEX_ADDR`, `ROLODEX_DB`,
//! `ROLODEX_ASSETS`).

use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8080)
    pub bind_addr: SocketAddr,

    /// SQLite database file, created if absent (default: ./rolodex.db)
    pub database: PathBuf,

    /// Directory served under `/css/` (default: ./assets/css)
    pub assets_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            database: PathBuf::from("./rolodex.db"),
            assets_dir: PathBuf::from("./assets/css"),
        }
    }
}

impl ServerConfig {
    /// Config with an explicit database path (for testing).
    pub fn with_database(database: PathBuf) -> Self {
        Self {
            database,
            ..Self::default()
        }
    }
}
