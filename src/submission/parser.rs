use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use serde_json::{Map, Value};

/// The request's declared mimetype, lowercased and without parameters.
pub fn mimetype(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
}

/// `application/json` or any `+json` structured syntax suffix.
pub fn is_json(mimetype: Option<&str>) -> bool {
    mimetype.is_some_and(|mt| mt == "application/json" || (mt.starts_with("application/") && mt.ends_with("+json")))
}

pub fn is_form(mimetype: Option<&str>) -> bool {
    mimetype == Some("application/x-www-form-urlencoded")
}

pub fn is_multipart(mimetype: Option<&str>) -> bool {
    mimetype == Some("multipart/form-data")
}

/// Parse a JSON body. An empty body yields `None`.
pub fn parse_json(body: &[u8]) -> Result<Option<Value>, String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(|e| format!("Invalid JSON: {e}"))
}

/// Parse a url-encoded form body. Repeated keys keep their first value.
pub fn parse_form_urlencoded(body: &[u8]) -> Map<String, Value> {
    let mut map = Map::new();
    for (k, v) in form_urlencoded::parse(body) {
        map.entry(k.into_owned())
            .or_insert_with(|| Value::String(v.into_owned()));
    }
    map
}

/// Parse the text fields of a multipart body using multer.
pub async fn parse_multipart(headers: &HeaderMap, body: bytes::Bytes) -> Result<Map<String, Value>, String> {
    let boundary = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| "Missing multipart boundary".to_string())?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut map = Map::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Multipart error: {e}"))?
    {
        // File uploads are not form fields
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| format!("Field read error: {e}"))?;
        map.entry(name).or_insert(Value::String(value));
    }

    Ok(map)
}
