//! Landing page - `/`

use std::sync::Arc;

use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;

use crate::http::server::AppState;
use crate::models::AccountName;
use crate::pages;

/// Optional name carried from the landing form to the edit form.
#[derive(Deserialize)]
pub struct IndexForm {
    #[serde(rename = "Name")]
    name: Option<String>,
}

/// GET / - render the landing page
async fn show() -> Html<String> {
    tracing::debug!("index GET");
    Html(pages::index())
}

/// POST / - redirect to the writer form, carrying the optional name
async fn forward(Form(form): Form<IndexForm>) -> Redirect {
    tracing::debug!("index POST");
    // Only token-shaped names are forwarded; anything else would need
    // query encoding and is dropped rather than mangled.
    match form.name.as_deref().and_then(|n| AccountName::new(n).ok()) {
        Some(name) => Redirect::to(&format!("/writer/?name={name}")),
        None => Redirect::to("/writer/"),
    }
}

/// Index routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(show).post(forward))
}
