use serde_json::{Map, Value};

use crate::store::Document;

pub const ITEM_NAME: &str = "itemName";
pub const ITEM_DESCRIPTION: &str = "itemDescription";

/// A field counts as present only when it holds a non-empty string.
pub fn non_empty_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    match obj.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

/// Mirrors JSON truthiness: null, false, zero and empty containers are
/// treated the same as no payload at all.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// The two fields of a to-do submission, as extracted from the request.
/// Either may be missing until validated.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TodoFields {
    pub item_name: Option<String>,
    pub item_description: Option<String>,
}

impl TodoFields {
    pub fn from_map(obj: &Map<String, Value>) -> Self {
        TodoFields {
            item_name: non_empty_str(obj, ITEM_NAME).map(str::to_string),
            item_description: non_empty_str(obj, ITEM_DESCRIPTION).map(str::to_string),
        }
    }

    /// Form fields win; the JSON body is consulted only when the form
    /// carries no `itemName` at all.
    pub fn extract(form: &Map<String, Value>, json: Option<&Value>) -> Self {
        if form.contains_key(ITEM_NAME) {
            return Self::from_map(form);
        }
        match json.and_then(Value::as_object) {
            Some(obj) => Self::from_map(obj),
            None => Self::from_map(form),
        }
    }

    /// Both fields, or `None` if either is missing.
    pub fn validate(self) -> Option<TodoItem> {
        Some(TodoItem {
            item_name: self.item_name?,
            item_description: self.item_description?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    pub item_name: String,
    pub item_description: String,
}

impl TodoItem {
    /// Only the two known fields are persisted.
    pub fn into_document(self) -> Document {
        let mut doc = Map::new();
        doc.insert(ITEM_NAME.to_string(), Value::String(self.item_name));
        doc.insert(ITEM_DESCRIPTION.to_string(), Value::String(self.item_description));
        doc
    }
}
