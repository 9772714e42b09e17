// responses/json.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde::Serialize;

/// Shared caches may keep list responses for a minute.
pub const LIST_CACHE: &str = "s-maxage=60";
pub const NO_STORE: &str = "no-store, max-age=0";

pub fn json_response<T: Serialize>(status: u16, value: &T, cache_control: &str) -> ResultResp {
    let body = serde_json::to_vec(value).map_err(|_| ServerError::InternalError)?;

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .header("Cache-Control", cache_control)
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
