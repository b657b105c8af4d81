use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::store::StoreError;

pub const STORE_NOT_CONFIGURED: &str = "MongoDB is not configured";

#[derive(Debug)]
pub enum AppError {
    EmptyPayload,
    MissingFields(&'static str),
    StoreUnavailable,
    StoreWriteFailed(StoreError),
    ResourceMissing,
    ResourceUnreadable(String),
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyPayload | AppError::MissingFields(_) => StatusCode::BAD_REQUEST,
            AppError::ResourceMissing => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable
            | AppError::StoreWriteFailed(_)
            | AppError::ResourceUnreadable(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message echoed to the caller in the `error` field.
    pub fn message(&self) -> String {
        match self {
            AppError::EmptyPayload => "Empty payload".to_string(),
            AppError::MissingFields(msg) => (*msg).to_string(),
            AppError::StoreUnavailable => STORE_NOT_CONFIGURED.to_string(),
            AppError::StoreWriteFailed(err) => err.to_string(),
            AppError::ResourceMissing => "Data file not found".to_string(),
            // Read/parse detail stays in the log
            AppError::ResourceUnreadable(_) => "Something went wrong".to_string(),
            AppError::Internal(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::EmptyPayload => write!(f, "Bad Request: empty payload"),
            AppError::MissingFields(msg) => write!(f, "Bad Request: {msg}"),
            AppError::StoreUnavailable => write!(f, "Store Unavailable: {STORE_NOT_CONFIGURED}"),
            AppError::StoreWriteFailed(err) => write!(f, "Store Write Failed: {err}"),
            AppError::ResourceMissing => write!(f, "Not Found: data file"),
            AppError::ResourceUnreadable(msg) => write!(f, "Resource Unreadable: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{self}");
        }

        let body = json!({ "success": false, "error": self.message() });
        (status, axum::Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::StoreWriteFailed(err)
    }
}
