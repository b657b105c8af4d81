pub mod pages;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub const TODO_PATH: &str = "/todo";
pub const SUCCESS_PATH: &str = "/success";

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(pages::index))
        .route(TODO_PATH, get(pages::todo))
        .route(SUCCESS_PATH, get(pages::success))
}
