//! rolodex-server: a server-rendered name/email register
//!
//! A web form posts a name/email pair, which is persisted to a single
//! SQLite table and later listed, viewed, or deleted through HTML pages.
//!
//! The crate is split into:
//! - [`store`] - the SQLite record store (insert, retrieve, list, delete)
//! - [`http`] - axum router, handlers, and error mapping
//! - [`models`] - the `Account` entity and path-parameter validation
//! - [`pages`] - plain string-building HTML renderers
//! - [`config`] - server configuration (bind address, database, assets)

pub mod config;
pub mod http;
pub mod models;
pub mod pages;
pub mod store;

pub use config::ServerConfig;
pub use http::{run_server, ApiError};
pub use models::{Account, AccountName};
pub use store::{Store, StoreError};
