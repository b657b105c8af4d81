use std::sync::Arc;

use axum_extra::extract::cookie::Key;

use crate::config::Config;
use crate::store::StoreManager;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub store: StoreManager,
    pub cookie_key: Key,
}
