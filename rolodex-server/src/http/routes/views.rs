//! Listing and delete - `/views/`

use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::pages;

/// How many accounts the listing shows.
const LISTING_LIMIT: i64 = 100;

/// Delete form: the `submit` field carries the name to delete.
#[derive(Deserialize)]
pub struct DeleteForm {
    submit: String,
}

/// GET /views/ - render the newest accounts
async fn show(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    tracing::debug!("views GET");
    let accounts = state.store.retrieve_list(LISTING_LIMIT, 0).await?;
    Ok(Html(pages::listing(&accounts)))
}

/// POST /views/ - delete every account with the posted name, then
/// redirect to the confirmation page. Zero matches is still a success.
async fn remove(
    State(state): State<Arc<AppState>>,
    Form(form): Form<DeleteForm>,
) -> Result<Redirect, ApiError> {
    let removed = state.store.delete(&form.submit).await?;
    tracing::debug!(name = %form.submit, removed, "views POST");
    Ok(Redirect::to("/deleted/"))
}

/// Views routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/views/", get(show).post(remove))
}
