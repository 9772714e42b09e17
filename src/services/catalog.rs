// src/services/catalog.rs
//! Read path: load locations with a bounded slice of their reports.

use crate::db::locations::{self, LocationFilter};
use crate::domain::stats::{summarize, Overview, StatusSnapshot};
use crate::domain::LocationWithReports;
use crate::errors::ServerError;
use crate::state::AppState;

/// Reports fetched per location for list views.
pub const LIST_REPORTS: usize = 3;
/// Reports fetched per location on city and retailer pages.
pub const GROUP_REPORTS: usize = 10;
/// Reports fetched for a single machine.
pub const DETAIL_REPORTS: usize = 50;

pub fn list(state: &AppState, filter: &LocationFilter) -> Result<Vec<LocationWithReports>, ServerError> {
    state
        .db
        .with_conn(|conn| locations::list_locations(conn, filter, LIST_REPORTS))
}

pub fn detail(state: &AppState, id: &str) -> Result<LocationWithReports, ServerError> {
    state
        .db
        .with_conn(|conn| locations::find_location(conn, id, DETAIL_REPORTS))?
        .ok_or(ServerError::NotFound)
}

/// Locations in `city`; an unknown city is a 404.
pub fn in_city(state: &AppState, city: &str) -> Result<Vec<LocationWithReports>, ServerError> {
    let found = state
        .db
        .with_conn(|conn| locations::locations_in_city(conn, city, GROUP_REPORTS))?;
    non_empty(found)
}

/// Locations of `retailer`; an unknown retailer is a 404.
pub fn of_retailer(
    state: &AppState,
    retailer: &str,
) -> Result<Vec<LocationWithReports>, ServerError> {
    let found = state
        .db
        .with_conn(|conn| locations::locations_of_retailer(conn, retailer, GROUP_REPORTS))?;
    non_empty(found)
}

pub fn overview(state: &AppState) -> Result<Overview, ServerError> {
    let now = state.now();
    let snapshots: Vec<StatusSnapshot> = list(state, &LocationFilter::default())?
        .into_iter()
        .map(|l| StatusSnapshot {
            current_status: l.current_status(now),
            last_report_at: l.last_report_at(),
            city: l.location.city,
        })
        .collect();

    Ok(summarize(&snapshots))
}

fn non_empty(found: Vec<LocationWithReports>) -> Result<Vec<LocationWithReports>, ServerError> {
    if found.is_empty() {
        Err(ServerError::NotFound)
    } else {
        Ok(found)
    }
}
