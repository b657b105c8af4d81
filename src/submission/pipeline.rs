use serde_json::Value;

use crate::error::AppError;
use crate::store::{Document, StoreManager};

use super::fields::{self, TodoFields};

pub const NAME_AND_EMAIL_REQUIRED: &str = "Name and Email required";
pub const TODO_FIELDS_REQUIRED: &str = "itemName and itemDescription are required";
pub const PAYLOAD_NOT_OBJECT: &str = "Payload must be a JSON object";

/// Check a generic submission payload. Every key of an accepted payload is
/// kept as-is.
pub fn validate_payload(payload: Option<Value>) -> Result<Document, AppError> {
    let payload = match payload {
        Some(value) if !fields::is_blank(&value) => value,
        _ => return Err(AppError::EmptyPayload),
    };

    let Value::Object(doc) = payload else {
        return Err(AppError::Internal(PAYLOAD_NOT_OBJECT.to_string()));
    };

    if fields::non_empty_str(&doc, "name").is_none() || fields::non_empty_str(&doc, "email").is_none() {
        return Err(AppError::MissingFields(NAME_AND_EMAIL_REQUIRED));
    }

    Ok(doc)
}

/// Persist a generic submission. Returns the generated document id.
pub async fn submit_payload(store: &StoreManager, payload: Option<Value>) -> Result<String, AppError> {
    let doc = validate_payload(payload)?;
    persist(store, doc).await
}

/// Persist a to-do item. Returns the generated document id.
pub async fn submit_todo_item(store: &StoreManager, extracted: TodoFields) -> Result<String, AppError> {
    let item = extracted
        .validate()
        .ok_or(AppError::MissingFields(TODO_FIELDS_REQUIRED))?;
    persist(store, item.into_document()).await
}

async fn persist(store: &StoreManager, doc: Document) -> Result<String, AppError> {
    let collection = store.collection().await?.ok_or(AppError::StoreUnavailable)?;
    let id = collection.insert_one(doc).await?;
    tracing::debug!("Stored document {id}");
    Ok(id)
}
