// src/api/reports.rs
use astra::Request;

use crate::api::dto::{Accepted, ReportCreated, ReportDto, ReportRequest, SuggestionRequest};
use crate::request::read_json;
use crate::responses::json::NO_STORE;
use crate::responses::{json_response, ResultResp};
use crate::security::client_ip;
use crate::services::submissions::{self, ReportSubmission, SuggestionInput};
use crate::state::AppState;

/// `POST /api/reports`
pub fn create_report(req: Request, state: &AppState) -> ResultResp {
    let ip = client_ip(&req);
    let body: ReportRequest = read_json(req)?;

    let submitted = submissions::submit_report(
        state,
        &ReportSubmission {
            location_id: body.location_id,
            status: body.status,
            note: body.note,
        },
        &ip,
    )?;

    let created = ReportCreated {
        report: ReportDto::from(&submitted.report),
        current_status: submitted.current_status,
    };
    json_response(201, &created, NO_STORE)
}

/// `POST /api/suggestions`
pub fn create_suggestion(req: Request, state: &AppState) -> ResultResp {
    let ip = client_ip(&req);
    let body: SuggestionRequest = read_json(req)?;

    submissions::submit_suggestion(
        state,
        &SuggestionInput {
            name: body.name,
            retailer: body.retailer,
            address: body.address,
            city: body.city,
            note: body.note,
        },
        &ip,
    )?;

    json_response(202, &Accepted { ok: true }, NO_STORE)
}
