use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::error;

use crate::page::PageSnapshot;
use crate::web::AppState;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub page: PageSnapshot,
}

/// Both the sign-up form and the per-participant removal forms post these.
#[derive(Debug, Deserialize)]
pub struct ParticipantForm {
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub email: String,
}

pub async fn index_handler(State(state): State<AppState>) -> Response {
    let template = IndexTemplate {
        page: state.page.snapshot(),
    };
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Rendering index failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn signup_handler(
    State(state): State<AppState>,
    Form(form): Form<ParticipantForm>,
) -> Redirect {
    state.page.fill_signup_form(&form.activity, &form.email);
    state.client.sign_up(&form.activity, &form.email).await;
    Redirect::to("/")
}

pub async fn unregister_handler(
    State(state): State<AppState>,
    Form(form): Form<ParticipantForm>,
) -> Redirect {
    state.client.unregister(&form.activity, &form.email).await;
    Redirect::to("/")
}

pub async fn refresh_handler(State(state): State<AppState>) -> Redirect {
    state.client.refresh().await;
    Redirect::to("/")
}
