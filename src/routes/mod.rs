pub mod listing;
pub mod submit;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api", get(listing::list))
        .route("/submit", post(submit::submit))
        .route("/submittodoitem", post(submit::submit_todo_item))
}
