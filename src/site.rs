// src/site.rs
//! Server-rendered pages and their form posts.

use astra::Request;
use std::collections::HashMap;

use crate::db::locations::LocationFilter;
use crate::domain::Status;
use crate::errors::ServerError;
use crate::request::{read_form, required_field};
use crate::responses::{html_response, see_other, xml_response, ResultResp};
use crate::security::client_ip;
use crate::services::catalog;
use crate::services::submissions::{self, ReportSubmission, SuggestionInput};
use crate::state::AppState;
use crate::templates::components::locations::machine_href;
use crate::templates::pages;

pub fn home(state: &AppState) -> ResultResp {
    let locations = catalog::list(state, &LocationFilter::default())?;
    html_response(pages::home_page(&locations, state.now()))
}

pub fn machine(state: &AppState, id: &str) -> ResultResp {
    let found = catalog::detail(state, id)?;
    html_response(pages::machine_page(&found, state.now()))
}

pub fn city(state: &AppState, city: &str) -> ResultResp {
    let found = catalog::in_city(state, city)?;
    let name = found.first().map_or(city, |l| l.location.city.as_str());
    html_response(pages::city_page(name, &found, state.now()))
}

pub fn retailer(state: &AppState, retailer: &str) -> ResultResp {
    let found = catalog::of_retailer(state, retailer)?;
    let name = found
        .first()
        .map_or(retailer, |l| l.location.retailer.as_str());
    html_response(pages::retailer_page(name, &found, state.now()))
}

pub fn stats(state: &AppState) -> ResultResp {
    html_response(pages::stats_page(&catalog::overview(state)?))
}

pub fn add_machine() -> ResultResp {
    html_response(pages::add_machine_page())
}

pub fn contact() -> ResultResp {
    html_response(pages::contact_page())
}

/// `POST /machine/{id}/melden`, redirects back to the machine page.
pub fn submit_report(req: Request, state: &AppState, id: &str) -> ResultResp {
    let ip = client_ip(&req);
    let form = read_form(req)?;
    let status = required_field(&form, "status")?
        .parse::<Status>()
        .map_err(|e| ServerError::BadRequest(e.to_string()))?;

    submissions::submit_report(
        state,
        &ReportSubmission {
            location_id: id.to_string(),
            status,
            note: optional_field(&form, "note"),
        },
        &ip,
    )?;

    see_other(&machine_href(id))
}

pub fn submit_suggestion(req: Request, state: &AppState) -> ResultResp {
    let ip = client_ip(&req);
    let form = read_form(req)?;
    let field = |name: &str| form.get(name).cloned().unwrap_or_default();

    submissions::submit_suggestion(
        state,
        &SuggestionInput {
            name: field("name"),
            retailer: field("retailer"),
            address: field("address"),
            city: field("city"),
            note: optional_field(&form, "note"),
        },
        &ip,
    )?;

    html_response(pages::thanks_page(
        "We bekijken je suggestie en zetten de machine zo snel mogelijk op de kaart.",
    ))
}

pub fn submit_contact(req: Request, state: &AppState) -> ResultResp {
    let ip = client_ip(&req);
    let form = read_form(req)?;
    let field = |name: &str| form.get(name).map(String::as_str).unwrap_or_default();

    submissions::submit_contact(state, field("name"), field("email"), field("message"), &ip)?;

    html_response(pages::thanks_page("Je bericht is verstuurd."))
}

pub fn sitemap(state: &AppState) -> ResultResp {
    let base = xml_escape(&state.site_url);
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for path in ["/", "/stats"] {
        xml.push_str(&format!("  <url><loc>{base}{path}</loc></url>\n"));
    }
    xml.push_str("</urlset>\n");
    xml_response(xml)
}

fn optional_field(form: &HashMap<String, String>, name: &str) -> Option<String> {
    form.get(name).cloned()
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
