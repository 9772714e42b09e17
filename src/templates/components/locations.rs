use chrono::{DateTime, Utc};
use maud::{html, Markup};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::domain::LocationWithReports;
use crate::templates::components::{format_time, status_badge};

const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn machine_href(id: &str) -> String {
    format!("/machine/{}", utf8_percent_encode(id, SEGMENT))
}

pub fn city_href(city: &str) -> String {
    format!("/stad/{}", utf8_percent_encode(city, SEGMENT))
}

pub fn retailer_href(retailer: &str) -> String {
    format!("/keten/{}", utf8_percent_encode(retailer, SEGMENT))
}

pub fn location_table(locations: &[LocationWithReports], now: DateTime<Utc>) -> Markup {
    html! {
        table class="locations" {
            thead {
                tr {
                    th { "Locatie" }
                    th { "Keten" }
                    th { "Plaats" }
                    th { "Status" }
                    th { "Laatste melding" }
                }
            }
            tbody {
                @for l in locations {
                    tr data-id=(l.location.id) {
                        td { a href=(machine_href(&l.location.id)) { (l.location.name) } }
                        td { a href=(retailer_href(&l.location.retailer)) { (l.location.retailer) } }
                        td { a href=(city_href(&l.location.city)) { (l.location.city) } }
                        td { (status_badge(l.current_status(now))) }
                        td {
                            @match l.last_report_at() {
                                Some(at) => { (format_time(at)) }
                                None => { "Nog geen meldingen" }
                            }
                        }
                    }
                }
            }
        }
    }
}
