pub mod config;
pub mod crypto;
pub mod error;
pub mod flash;
pub mod negotiate;
pub mod routes;
pub mod state;
pub mod store;
pub mod submission;
pub mod views;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::{AppState, SharedState};
use crate::store::StoreManager;

pub fn build_app(store: StoreManager, config: Config) -> Router {
    if store.config().is_configured() {
        tracing::info!(
            "Submissions go to {}/{}",
            store.config().database,
            store.config().collection
        );
    } else {
        tracing::warn!("MONGODB_URI is not set; submissions will be rejected");
    }

    let cookie_key = crypto::derive_cookie_key(&config.secret_key);
    let static_dir = config.static_dir.clone();
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        config,
        store,
        cookie_key,
    });

    Router::new()
        .merge(routes::api_routes())
        .merge(views::view_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .route("/health", axum::routing::get(health))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
