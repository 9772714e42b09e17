// templates/pages/stats.rs

use maud::{html, Markup};

use crate::domain::stats::Overview;
use crate::templates::components::locations::city_href;
use crate::templates::components::{card, format_time};
use crate::templates::desktop_layout;

pub fn stats_page(o: &Overview) -> Markup {
    desktop_layout(
        "Statistieken",
        html! {
            h1 { "Statistieken" }

            (card("Overzicht", html! {
                dl class="stats" {
                    dt { "Machines" } dd id="total" { (o.total) }
                    dt { "Werkend" } dd id="working" { (o.working) }
                    dt { "Problemen" } dd id="issues" { (o.issues) }
                    dt { "Stuk" } dd id="broken" { (o.broken) " (" (o.broken_pct) "%)" }
                    dt { "Onbekend" } dd id="unknown" { (o.unknown) }
                }
                @if let Some(at) = o.latest_report_at {
                    p { "Laatste melding: " (format_time(at)) }
                }
            }))

            (card("Steden met de meeste machines", html! {
                ol class="top-cities" {
                    @for (city, count) in &o.top_cities {
                        li { a href=(city_href(city)) { (city) } " (" (count) ")" }
                    }
                }
            }))
        },
    )
}
