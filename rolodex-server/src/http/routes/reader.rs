//! Single-account view - `/reader/{name}`

use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::Router;

use crate::http::error::ApiError;
use crate::http::extractors::ValidAccountName;
use crate::http::server::AppState;
use crate::pages;

/// GET /reader/{name} - look up the account and render it
async fn show(
    State(state): State<Arc<AppState>>,
    ValidAccountName(name): ValidAccountName,
) -> Result<Html<String>, ApiError> {
    tracing::debug!(name = %name, "reader GET");
    let account = state.store.retrieve(name.as_str()).await?;
    Ok(Html(pages::view(&account)))
}

/// POST /reader/{name} - back to the listing
async fn back() -> Redirect {
    tracing::debug!("reader POST");
    Redirect::to("/views/")
}

/// Reader routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/reader/{name}", get(show).post(back))
}
