use askama::Template;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse};
use axum_extra::extract::SignedCookieJar;

use crate::flash;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {}

#[derive(Template)]
#[template(path = "todo.html")]
struct TodoTemplate {
    messages: Vec<String>,
}

#[derive(Template)]
#[template(path = "success.html")]
struct SuccessTemplate {}

pub async fn index() -> impl IntoResponse {
    Html(IndexTemplate {}.render().unwrap_or_default())
}

/// The to-do form. Any queued flash messages are shown once.
pub async fn todo(State(state): State<SharedState>, headers: HeaderMap) -> impl IntoResponse {
    let jar = SignedCookieJar::from_headers(&headers, state.cookie_key.clone());
    let (jar, messages) = flash::take(jar);

    let template = TodoTemplate { messages };
    (jar, Html(template.render().unwrap_or_default()))
}

pub async fn success() -> impl IntoResponse {
    Html(SuccessTemplate {}.render().unwrap_or_default())
}
