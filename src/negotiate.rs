use axum::Json;
use axum::http::HeaderMap;
use axum::http::header::ACCEPT;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::SignedCookieJar;

use crate::error::AppError;
use crate::flash;
use crate::routes::submit::SubmitResponse;
use crate::views::{SUCCESS_PATH, TODO_PATH};

pub const FLASH_FIELDS_REQUIRED: &str = "Please provide both an item name and a description.";
pub const FLASH_STORE_NOT_CONFIGURED: &str =
    "The database is not configured, so the item could not be saved.";

/// How a response should be represented to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// HTML client: redirects and flash messages.
    Browser,
    /// Everything else: JSON bodies with status codes.
    Api,
}

impl ResponseShape {
    pub fn from_accept(accept: Option<&str>) -> Self {
        match accept {
            Some(value) if value.contains("text/html") => ResponseShape::Browser,
            _ => ResponseShape::Api,
        }
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self::from_accept(headers.get(ACCEPT).and_then(|v| v.to_str().ok()))
    }

    /// Turn the result of a to-do submission into a response.
    ///
    /// Browsers are redirected on the expected outcomes. Unexpected
    /// failures are reported as JSON whatever the shape.
    pub fn todo_outcome(self, result: Result<String, AppError>, jar: SignedCookieJar) -> Response {
        match (self, result) {
            (ResponseShape::Browser, Ok(_)) => Redirect::to(SUCCESS_PATH).into_response(),
            (ResponseShape::Api, Ok(id)) => Json(SubmitResponse::stored(id)).into_response(),
            (ResponseShape::Browser, Err(AppError::MissingFields(_))) => {
                flash_redirect(jar, FLASH_FIELDS_REQUIRED)
            }
            (ResponseShape::Browser, Err(AppError::StoreUnavailable)) => {
                tracing::warn!("To-do item rejected: store is not configured");
                flash_redirect(jar, FLASH_STORE_NOT_CONFIGURED)
            }
            (_, Err(err)) => err.into_response(),
        }
    }
}

fn flash_redirect(jar: SignedCookieJar, message: &str) -> Response {
    (flash::push(jar, message), Redirect::to(TODO_PATH)).into_response()
}
