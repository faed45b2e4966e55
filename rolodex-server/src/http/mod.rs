//! HTTP layer
//!
//! Axum server with:
//! - Request tracing
//! - 10 second per-request timeout
//! - Static assets under `/css/`
//! - Graceful shutdown
//! - Errors logged server-side, never leaked to the client

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState};
