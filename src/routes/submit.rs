use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;
use axum::Json;
use axum_extra::extract::SignedCookieJar;
use serde::Serialize;
use serde_json::Map;

use crate::error::AppError;
use crate::negotiate::ResponseShape;
use crate::state::SharedState;
use crate::submission::fields::{TodoFields, ITEM_NAME};
use crate::submission::{parser, pipeline};

pub const UNSUPPORTED_MEDIA_TYPE: &str =
    "Unsupported Media Type: the request body must be application/json";

#[derive(Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub inserted_id: String,
}

impl SubmitResponse {
    pub fn stored(inserted_id: String) -> Self {
        SubmitResponse {
            success: true,
            inserted_id,
        }
    }
}

/// Store an arbitrary JSON object that carries `name` and `email`.
///
/// Bodies that are not declared as JSON or fail to parse are server errors
/// with the failure echoed, like any other unexpected failure.
pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SubmitResponse>, AppError> {
    if !parser::is_json(parser::mimetype(&headers).as_deref()) {
        return Err(AppError::Internal(UNSUPPORTED_MEDIA_TYPE.to_string()));
    }
    let payload = parser::parse_json(&body).map_err(AppError::Internal)?;
    let id = pipeline::submit_payload(&state.store, payload).await?;

    Ok(Json(SubmitResponse::stored(id)))
}

/// Store a to-do item sent as a form or as JSON. Browsers get redirects,
/// API callers get JSON.
pub async fn submit_todo_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let shape = ResponseShape::from_headers(&headers);
    let jar = SignedCookieJar::from_headers(&headers, state.cookie_key.clone());

    let result = match extract_todo_fields(&headers, body).await {
        Ok(extracted) => pipeline::submit_todo_item(&state.store, extracted).await,
        Err(e) => Err(e),
    };

    shape.todo_outcome(result, jar)
}

async fn extract_todo_fields(headers: &HeaderMap, body: Bytes) -> Result<TodoFields, AppError> {
    let mimetype = parser::mimetype(headers);
    let mimetype = mimetype.as_deref();

    let form = if parser::is_form(mimetype) {
        parser::parse_form_urlencoded(&body)
    } else if parser::is_multipart(mimetype) {
        parser::parse_multipart(headers, body.clone())
            .await
            .map_err(AppError::Internal)?
    } else {
        Map::new()
    };

    let json = if !form.contains_key(ITEM_NAME) && parser::is_json(mimetype) {
        parser::parse_json(&body).map_err(AppError::Internal)?
    } else {
        None
    };

    Ok(TodoFields::extract(&form, json.as_ref()))
}
