// src/api/dto.rs
//! JSON shapes of the public API. Field names are camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::stats::Overview;
use crate::domain::{derive_confidence, Confidence, LocationWithReports, Report, Status};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDto {
    pub id: String,
    pub status: Status,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Report> for ReportDto {
    fn from(r: &Report) -> Self {
        Self {
            id: r.id.clone(),
            status: r.status,
            note: r.note.clone(),
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationListItem {
    pub id: String,
    pub name: String,
    pub retailer: String,
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    pub city: String,
    pub current_status: Option<Status>,
    pub last_report_at: Option<DateTime<Utc>>,
    pub total_reports: i64,
    pub last_reports: Vec<ReportDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl LocationListItem {
    pub fn new(l: &LocationWithReports, now: DateTime<Utc>) -> Self {
        Self {
            id: l.location.id.clone(),
            name: l.location.name.clone(),
            retailer: l.location.retailer.clone(),
            lat: l.location.lat,
            lng: l.location.lng,
            address: l.location.address.clone(),
            city: l.location.city.clone(),
            current_status: l.current_status(now),
            last_report_at: l.last_report_at(),
            total_reports: l.total_reports,
            last_reports: l.recent_reports.iter().map(ReportDto::from).collect(),
            distance_km: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub locations: Vec<LocationListItem>,
}

/// Compact entry used on city and retailer listings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupItem {
    pub id: String,
    pub name: String,
    pub retailer: String,
    pub city: String,
    pub address: String,
    pub current_status: Option<Status>,
}

impl GroupItem {
    pub fn new(l: &LocationWithReports, now: DateTime<Utc>) -> Self {
        Self {
            id: l.location.id.clone(),
            name: l.location.name.clone(),
            retailer: l.location.retailer.clone(),
            city: l.location.city.clone(),
            address: l.location.address.clone(),
            current_status: l.current_status(now),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CityResponse {
    pub city: String,
    pub locations: Vec<GroupItem>,
}

#[derive(Debug, Serialize)]
pub struct RetailerResponse {
    pub retailer: String,
    pub locations: Vec<GroupItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineDetail {
    pub id: String,
    pub name: String,
    pub retailer: String,
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
    pub reports: Vec<ReportDto>,
    pub current_status: Option<Status>,
    pub confidence: Confidence,
}

impl MachineDetail {
    pub fn new(l: &LocationWithReports, now: DateTime<Utc>) -> Self {
        Self {
            id: l.location.id.clone(),
            name: l.location.name.clone(),
            retailer: l.location.retailer.clone(),
            lat: l.location.lat,
            lng: l.location.lng,
            address: l.location.address.clone(),
            city: l.location.city.clone(),
            created_at: l.location.created_at,
            reports: l.recent_reports.iter().map(ReportDto::from).collect(),
            current_status: l.current_status(now),
            confidence: derive_confidence(&l.recent_reports, now),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MachineResponse {
    pub location: MachineDetail,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub location_id: String,
    pub status: Status,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCreated {
    pub report: ReportDto,
    pub current_status: Option<Status>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    pub name: String,
    pub retailer: String,
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Accepted {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct CityCount {
    pub city: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total: usize,
    pub working: usize,
    pub issues: usize,
    pub broken: usize,
    pub unknown: usize,
    pub broken_pct: u32,
    pub top_cities: Vec<CityCount>,
    pub latest_report_at: Option<DateTime<Utc>>,
}

impl From<Overview> for StatsResponse {
    fn from(o: Overview) -> Self {
        Self {
            total: o.total,
            working: o.working,
            issues: o.issues,
            broken: o.broken,
            unknown: o.unknown,
            broken_pct: o.broken_pct,
            top_cities: o
                .top_cities
                .into_iter()
                .map(|(city, count)| CityCount { city, count })
                .collect(),
            latest_report_at: o.latest_report_at,
        }
    }
}
