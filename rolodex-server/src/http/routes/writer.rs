//! Edit form - `/writer/`

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Account, AccountName};
use crate::pages;

/// Optional pre-fill carried over from the landing form.
#[derive(Deserialize)]
pub struct EditQuery {
    name: Option<String>,
}

/// Form fields posted by the edit page. Field names are part of the
/// wire contract with the rendered form.
#[derive(Deserialize)]
pub struct WriterForm {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Email")]
    email: String,
}

/// GET /writer/ - render the edit form
async fn show(Query(query): Query<EditQuery>) -> Html<String> {
    tracing::debug!("writer GET");
    Html(pages::edit(query.name.as_deref()))
}

/// POST /writer/ - insert an account, then redirect to its view.
///
/// The name becomes a path segment of the redirect target, so it is
/// validated up front; the store itself accepts anything.
async fn create(
    State(state): State<Arc<AppState>>,
    Form(form): Form<WriterForm>,
) -> Result<Redirect, ApiError> {
    tracing::debug!("writer POST");
    let name = AccountName::new(&form.name)?;

    let account = Account {
        name: name.as_str().to_owned(),
        email: form.email,
    };
    state.store.insert(&account).await?;

    Ok(Redirect::to(&format!("/reader/{name}")))
}

/// Writer routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/writer/", get(show).post(create))
}
