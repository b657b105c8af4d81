use std::io::ErrorKind;

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::error::AppError;
use crate::state::SharedState;

/// Serve the static data file. It is read and parsed on every request.
pub async fn list(State(state): State<SharedState>) -> Result<Json<Value>, AppError> {
    let path = &state.config.data_file;

    let raw = tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            tracing::warn!("Data file {} not found", path.display());
            AppError::ResourceMissing
        } else {
            AppError::ResourceUnreadable(format!("Failed to read {}: {e}", path.display()))
        }
    })?;

    let data: Value = serde_json::from_slice(&raw).map_err(|e| {
        AppError::ResourceUnreadable(format!("Failed to parse {}: {e}", path.display()))
    })?;

    Ok(Json(data))
}
