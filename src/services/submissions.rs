// src/services/submissions.rs
//! Write path: reports, machine suggestions and contact messages.

use tracing::info;

use crate::db::locations::location_exists;
use crate::db::reports::{insert_report, recent_reports, NewReport};
use crate::domain::{derive_status, Report, Status};
use crate::errors::ServerError;
use crate::mailer::{ContactMessage, MachineSuggestion};
use crate::security::{generate_id_default, ip_hash};
use crate::services::catalog::DETAIL_REPORTS;
use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct ReportSubmission {
    pub location_id: String,
    pub status: Status,
    pub note: Option<String>,
}

#[derive(Debug)]
pub struct SubmittedReport {
    pub report: Report,
    pub current_status: Option<Status>,
}

fn hashed_ip(state: &AppState, client_ip: &str) -> Result<String, ServerError> {
    ip_hash(client_ip, &state.ip_hash_secret).ok_or(ServerError::InternalError)
}

/// Validate, throttle and store one report, then re-derive the location's
/// status including it.
pub fn submit_report(
    state: &AppState,
    submission: &ReportSubmission,
    client_ip: &str,
) -> Result<SubmittedReport, ServerError> {
    let location_id = submission.location_id.trim();
    if location_id.is_empty() {
        return Err(ServerError::BadRequest("locationId is required".into()));
    }

    let ip_hash = hashed_ip(state, client_ip)?;
    state.throttle(&format!("report:{ip_hash}"))?;

    let note = state.sanitizer.sanitize_optional(submission.note.as_deref());
    let now = state.now();
    let id = generate_id_default();

    let (report, recent) = state.db.with_conn(|conn| {
        if !location_exists(conn, location_id)? {
            return Err(ServerError::NotFound);
        }
        let report = insert_report(
            conn,
            &NewReport {
                id: &id,
                location_id,
                status: submission.status,
                note: note.as_deref(),
                ip_hash: &ip_hash,
                created_at: now,
            },
        )?;
        let recent = recent_reports(conn, location_id, DETAIL_REPORTS)?;
        Ok((report, recent))
    })?;

    info!(
        location_id,
        status = %report.status,
        has_note = report.note.is_some(),
        "report stored"
    );

    Ok(SubmittedReport {
        current_status: derive_status(&recent, now),
        report,
    })
}

/// Raw "add machine" form input.
#[derive(Debug, Clone, Default)]
pub struct SuggestionInput {
    pub name: String,
    pub retailer: String,
    pub address: String,
    pub city: String,
    pub note: Option<String>,
}

pub fn submit_suggestion(
    state: &AppState,
    input: &SuggestionInput,
    client_ip: &str,
) -> Result<MachineSuggestion, ServerError> {
    let suggestion = MachineSuggestion {
        name: required(&input.name, "name")?,
        retailer: required(&input.retailer, "retailer")?,
        address: required(&input.address, "address")?,
        city: required(&input.city, "city")?,
        note: state.sanitizer.sanitize_optional(input.note.as_deref()),
    };

    let ip_hash = hashed_ip(state, client_ip)?;
    state.throttle(&format!("suggest:{ip_hash}"))?;
    state.deliver(&suggestion)?;

    info!(city = %suggestion.city, retailer = %suggestion.retailer, "machine suggested");
    Ok(suggestion)
}

pub fn submit_contact(
    state: &AppState,
    name: &str,
    email: &str,
    message: &str,
    client_ip: &str,
) -> Result<ContactMessage, ServerError> {
    let email = required(email, "email")?;
    if !looks_like_email(&email) {
        return Err(ServerError::BadRequest("invalid email".into()));
    }
    let message = state.sanitizer.sanitize(&required(message, "message")?);
    let contact = ContactMessage {
        name: required(name, "name")?,
        email,
        message,
    };

    let ip_hash = hashed_ip(state, client_ip)?;
    state.throttle(&format!("contact:{ip_hash}"))?;
    state.deliver(&contact)?;

    info!("contact message received");
    Ok(contact)
}

fn required(value: &str, field: &str) -> Result<String, ServerError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(ServerError::BadRequest(format!("missing field: {field}")));
    }
    Ok(v.to_string())
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}
