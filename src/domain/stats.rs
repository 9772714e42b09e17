// src/domain/stats.rs

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::domain::status::Status;

pub const TOP_CITIES: usize = 8;

const UNKNOWN_CITY: &str = "Onbekend";

/// One location as the stats overview sees it.
#[derive(Debug, Clone)]
pub struct StatusSnapshot {
    pub city: String,
    pub current_status: Option<Status>,
    pub last_report_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub total: usize,
    pub working: usize,
    pub issues: usize,
    pub broken: usize,
    pub unknown: usize,
    pub broken_pct: u32,
    pub top_cities: Vec<(String, usize)>,
    pub latest_report_at: Option<DateTime<Utc>>,
}

pub fn summarize(snapshots: &[StatusSnapshot]) -> Overview {
    let total = snapshots.len();
    let count = |s: Status| {
        snapshots
            .iter()
            .filter(|l| l.current_status == Some(s))
            .count()
    };
    let working = count(Status::Working);
    let issues = count(Status::Issues);
    let broken = count(Status::OutOfOrder);
    let unknown = total - working - issues - broken;

    let broken_pct = if total == 0 {
        0
    } else {
        ((broken as f64 / total as f64) * 100.0).round() as u32
    };

    let mut by_city: HashMap<&str, usize> = HashMap::new();
    for snap in snapshots {
        let key = if snap.city.trim().is_empty() {
            UNKNOWN_CITY
        } else {
            snap.city.as_str()
        };
        *by_city.entry(key).or_default() += 1;
    }
    let mut top_cities: Vec<(String, usize)> = by_city
        .into_iter()
        .map(|(city, n)| (city.to_string(), n))
        .collect();
    top_cities.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    top_cities.truncate(TOP_CITIES);

    let latest_report_at = snapshots.iter().filter_map(|s| s.last_report_at).max();

    Overview {
        total,
        working,
        issues,
        broken,
        unknown,
        broken_pct,
        top_cities,
        latest_report_at,
    }
}
