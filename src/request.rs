// src/request.rs
use astra::Request;
use percent_encoding::percent_decode_str;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::io::Read;

use crate::errors::ServerError;

/// Request bodies are small forms or JSON objects.
pub const MAX_BODY_BYTES: u64 = 8 * 1024;

pub fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| parse_urlencoded(q.as_bytes()))
        .unwrap_or_default()
}

fn parse_urlencoded(bytes: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(bytes).into_owned().collect()
}

/// Path split on `/`, each segment percent-decoded. Empty segments dropped.
pub fn path_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
        .collect()
}

pub fn read_body(req: Request) -> Result<Vec<u8>, ServerError> {
    let mut body = req.into_body();
    let mut buf = Vec::new();
    body.reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("could not read body: {e}")))?;

    if buf.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::BadRequest("request body too large".into()));
    }
    Ok(buf)
}

pub fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    Ok(parse_urlencoded(&read_body(req)?))
}

pub fn read_json<T: DeserializeOwned>(req: Request) -> Result<T, ServerError> {
    let bytes = read_body(req)?;
    serde_json::from_slice(&bytes).map_err(|e| ServerError::BadRequest(format!("invalid JSON: {e}")))
}

/// Required, non-blank form field.
pub fn required_field(form: &HashMap<String, String>, name: &str) -> Result<String, ServerError> {
    form.get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ServerError::BadRequest(format!("missing field: {name}")))
}

/// Optional numeric query parameter; present-but-invalid is a bad request.
pub fn query_f64(query: &HashMap<String, String>, name: &str) -> Result<Option<f64>, ServerError> {
    match query.get(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ServerError::BadRequest(format!("invalid number for {name}"))),
    }
}
