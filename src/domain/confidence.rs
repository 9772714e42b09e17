// src/domain/confidence.rs

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::domain::location::Report;

/// How much the derived status can be trusted, judged by report volume only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn label(self) -> &'static str {
        match self {
            Confidence::High => "Hoge betrouwbaarheid",
            Confidence::Medium => "Redelijke betrouwbaarheid",
            Confidence::Low => "Lage betrouwbaarheid",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Confidence::High => "confidence confidence-high",
            Confidence::Medium => "confidence confidence-medium",
            Confidence::Low => "confidence confidence-low",
        }
    }
}

pub fn derive_confidence(reports: &[Report], now: DateTime<Utc>) -> Confidence {
    if reports.is_empty() {
        return Confidence::Low;
    }

    let day_ago = now - TimeDelta::hours(24);
    let week_ago = now - TimeDelta::days(7);

    let last_24h = reports.iter().filter(|r| r.created_at >= day_ago).count();
    let last_7d = reports.iter().filter(|r| r.created_at >= week_ago).count();
    let total = reports.len();

    if last_24h >= 3 || last_7d >= 5 || total >= 20 {
        Confidence::High
    } else if last_24h >= 1 || last_7d >= 2 || total >= 5 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}
