// src/domain/location.rs

use chrono::{DateTime, Utc};

use crate::domain::derive::derive_status;
use crate::domain::status::Status;

/// A physical return-machine site.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub retailer: String,
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
}

/// A single anonymous status observation. Immutable once stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: String,
    pub location_id: String,
    pub status: Status,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A location together with the bounded, newest-first slice of its reports
/// that the read path fetched for it.
#[derive(Debug, Clone)]
pub struct LocationWithReports {
    pub location: Location,
    pub recent_reports: Vec<Report>,
    pub total_reports: i64,
}

impl LocationWithReports {
    pub fn last_report_at(&self) -> Option<DateTime<Utc>> {
        self.recent_reports.iter().map(|r| r.created_at).max()
    }

    pub fn current_status(&self, now: DateTime<Utc>) -> Option<Status> {
        derive_status(&self.recent_reports, now)
    }
}
