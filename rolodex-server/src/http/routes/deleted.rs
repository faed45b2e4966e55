//! Deletion confirmation - `/deleted/`

use std::sync::Arc;

use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;

use crate::http::server::AppState;
use crate::pages;

/// The confirmation form posts exactly one of these buttons.
#[derive(Deserialize)]
pub struct DeletedForm {
    view: Option<String>,
    #[serde(rename = "return")]
    ret: Option<String>,
}

/// GET /deleted/ - render the confirmation page
async fn show() -> Html<String> {
    tracing::debug!("deleted GET");
    Html(pages::deleted())
}

/// POST /deleted/ - branch on which button was pressed.
///
/// `view` wins over `return`; neither falls back to the root, the safe
/// default for a hand-built request.
async fn branch(Form(form): Form<DeletedForm>) -> Redirect {
    tracing::debug!("deleted POST");
    match (form.view.is_some(), form.ret.is_some()) {
        (true, _) => Redirect::to("/views/"),
        (false, _) => Redirect::to("/"),
    }
}

/// Deleted routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/deleted/", get(show).post(branch))
}
