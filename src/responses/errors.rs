use crate::errors::ServerError;
use crate::responses::json::NO_STORE;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;
use tracing::{error, warn};

pub use crate::errors::ResultResp;

fn log_error(err: &ServerError) {
    match err {
        ServerError::DbError(_)
        | ServerError::SetupError(_)
        | ServerError::InternalError
        | ServerError::MailerError(_) => {
            error!(error = %err, "request failed")
        }
        ServerError::TooManyRequests { .. } => warn!(error = %err, "rate limited"),
        ServerError::NotFound | ServerError::BadRequest(_) => {}
    }
}

fn with_retry_after(builder: astra::ResponseBuilder, err: &ServerError) -> astra::ResponseBuilder {
    match err {
        ServerError::TooManyRequests { retry_after } => {
            builder.header("Retry-After", retry_after.to_string())
        }
        _ => builder,
    }
}

/// Convert a ServerError into a JSON body `{ "error": ... }`.
pub fn json_error_response(err: ServerError) -> Response {
    log_error(&err);

    let mut payload = json!({ "error": err.public_message() });
    if let ServerError::TooManyRequests { retry_after } = &err {
        payload["retryAfter"] = json!(retry_after);
    }

    with_retry_after(ResponseBuilder::new(), &err)
        .status(err.status_code())
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .header("Cache-Control", NO_STORE)
        .body(Body::from(payload.to_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

/// Convert a ServerError into a proper HTML response page.
pub fn html_error_response(err: ServerError) -> Response {
    log_error(&err);

    let status = err.status_code();
    let body = error_page(status, &err.public_message()).into_string();

    with_retry_after(ResponseBuilder::new(), &err)
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
