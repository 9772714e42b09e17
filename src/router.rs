use crate::api;
use crate::errors::ServerError;
use crate::request::path_segments;
use crate::responses::{html_error_response, json_error_response, ResultResp};
use crate::site;
use crate::state::AppState;
use astra::{Request, Response};

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let segments = path_segments(req.uri().path());
    let path: Vec<&str> = segments.iter().map(String::as_str).collect();

    match (method.as_str(), path.as_slice()) {
        // JSON API
        ("GET", ["api", "locations"]) => api::list_locations(&req, state),
        ("GET", ["api", "machine", id]) => api::machine(state, id),
        ("GET", ["api", "stad", city]) => api::city(state, city),
        ("GET", ["api", "keten", retailer]) => api::retailer(state, retailer),
        ("GET", ["api", "stats"]) => api::stats(state),
        ("POST", ["api", "reports"]) => api::create_report(req, state),
        ("POST", ["api", "suggestions"]) => api::create_suggestion(req, state),

        // Pages
        ("GET", []) => site::home(state),
        ("GET", ["machine", "nieuw"]) => site::add_machine(),
        ("POST", ["machine", "nieuw"]) => site::submit_suggestion(req, state),
        ("GET", ["machine", id]) => site::machine(state, id),
        ("POST", ["machine", id, "melden"]) => site::submit_report(req, state, id),
        ("GET", ["stad", city]) => site::city(state, city),
        ("GET", ["keten", retailer]) => site::retailer(state, retailer),
        ("GET", ["stats"]) => site::stats(state),
        ("GET", ["contact"]) => site::contact(),
        ("POST", ["contact"]) => site::submit_contact(req, state),
        ("GET", ["sitemap.xml"]) => site::sitemap(state),

        _ => Err(ServerError::NotFound),
    }
}

/// Run `handle` and render any error in the shape the caller expects:
/// JSON under `/api/`, an HTML page everywhere else.
pub fn respond(req: Request, state: &AppState) -> Response {
    let wants_json = req.uri().path().starts_with("/api/");

    match handle(req, state) {
        Ok(resp) => resp,
        Err(err) if wants_json => json_error_response(err),
        Err(err) => html_error_response(err),
    }
}
