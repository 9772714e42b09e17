use chrono::{DateTime, Utc};
use maud::{html, Markup};

use crate::domain::{Confidence, Status};

fn status_class(status: Option<Status>) -> &'static str {
    match status {
        Some(Status::Working) => "badge badge-working",
        Some(Status::Issues) => "badge badge-issues",
        Some(Status::OutOfOrder) => "badge badge-broken",
        None => "badge badge-unknown",
    }
}

pub fn status_badge(status: Option<Status>) -> Markup {
    html! {
        span class=(status_class(status)) data-status=[status.map(Status::as_str)] {
            (status.map_or("Onbekend", Status::label))
        }
    }
}

pub fn confidence_badge(confidence: Confidence) -> Markup {
    html! {
        span class=(confidence.css_class()) {
            (confidence.label())
        }
    }
}

pub fn format_time(at: DateTime<Utc>) -> String {
    at.format("%d-%m-%Y %H:%M UTC").to_string()
}
