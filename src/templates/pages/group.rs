// templates/pages/group.rs
//! City and retailer listings.

use chrono::{DateTime, Utc};
use maud::{html, Markup};

use crate::domain::LocationWithReports;
use crate::templates::{components::location_table, desktop_layout};

fn group_page(
    title: &str,
    intro: &str,
    locations: &[LocationWithReports],
    now: DateTime<Utc>,
) -> Markup {
    desktop_layout(
        title,
        html! {
            h1 { (title) }
            p { (intro) }
            (location_table(locations, now))
        },
    )
}

pub fn city_page(city: &str, locations: &[LocationWithReports], now: DateTime<Utc>) -> Markup {
    group_page(
        &format!("Statiegeldautomaten in {city}"),
        &format!("{} machines in {city}.", locations.len()),
        locations,
        now,
    )
}

pub fn retailer_page(
    retailer: &str,
    locations: &[LocationWithReports],
    now: DateTime<Utc>,
) -> Markup {
    group_page(
        &format!("Statiegeldautomaten bij {retailer}"),
        &format!("{} machines bij {retailer}.", locations.len()),
        locations,
        now,
    )
}
