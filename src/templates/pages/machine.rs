// templates/pages/machine.rs

use chrono::{DateTime, Utc};
use maud::{html, Markup};

use crate::domain::{derive_confidence, LocationWithReports, Status};
use crate::templates::components::locations::{city_href, machine_href, retailer_href};
use crate::templates::components::{card, confidence_badge, format_time, status_badge};
use crate::templates::desktop_layout;

pub fn machine_page(l: &LocationWithReports, now: DateTime<Utc>) -> Markup {
    let loc = &l.location;
    let action = format!("{}/melden", machine_href(&loc.id));

    desktop_layout(
        &loc.name,
        html! {
            h1 { (loc.name) }
            p class="address" {
                (loc.address) ", "
                a href=(city_href(&loc.city)) { (loc.city) }
                " · "
                a href=(retailer_href(&loc.retailer)) { (loc.retailer) }
            }

            div class="current" {
                (status_badge(l.current_status(now)))
                " "
                (confidence_badge(derive_confidence(&l.recent_reports, now)))
            }

            (card("Hoe is het nu?", html! {
                form method="post" action=(action) class="report-form" {
                    fieldset {
                        legend { "Status" }
                        @for status in Status::ALL {
                            label {
                                input type="radio" name="status" value=(status.as_str()) required;
                                " " (status.label())
                            }
                        }
                    }
                    label for="note" { "Opmerking (optioneel)" }
                    textarea id="note" name="note" maxlength="280" rows="3" {}
                    button type="submit" class="primary" { "Melden" }
                }
            }))

            h2 { "Meldingen (" (l.total_reports) ")" }
            @if l.recent_reports.is_empty() {
                p { "Nog geen meldingen voor deze machine." }
            } @else {
                ul class="reports" {
                    @for r in &l.recent_reports {
                        li {
                            (status_badge(Some(r.status)))
                            " "
                            time datetime=(r.created_at.to_rfc3339()) { (format_time(r.created_at)) }
                            @if let Some(note) = &r.note {
                                p class="note" { (note) }
                            }
                        }
                    }
                }
            }
        },
    )
}
