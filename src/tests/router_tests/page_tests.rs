// src/tests/router_tests/page_tests.rs
use scraper::{Html, Selector};

use crate::domain::Status;
use crate::router::{handle, respond};
use crate::tests::utils::{add_locations, add_report, body_json, body_string, get, header, post_form, test_state};

fn select_texts(html: &str, selector: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel)
        .map(|e| e.text().collect::<String>().trim().to_string())
        .collect()
}

#[test]
fn home_lists_every_machine() {
    let state = test_state();
    add_report(&state, "jumbo-damrak", Status::Issues, 3);

    let resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        header(&resp, "Content-Type").as_deref(),
        Some("text/html; charset=utf-8")
    );

    let html = body_string(resp);
    assert_eq!(select_texts(&html, "table.locations tbody tr").len(), 3);
    assert_eq!(
        select_texts(&html, "tr[data-id=\"jumbo-damrak\"] .badge"),
        vec!["Problemen"]
    );
    assert_eq!(
        select_texts(&html, "tr[data-id=\"lidl-de-pijp\"] .badge"),
        vec!["Onbekend"]
    );
}

#[test]
fn home_is_not_truncated() {
    let state = test_state();
    add_locations(&state, 600);

    let html = body_string(handle(get("/"), &state).unwrap());
    assert_eq!(select_texts(&html, "table.locations tbody tr").len(), 603);
}

#[test]
fn machine_page_shows_reports_escaped() {
    let state = test_state();
    let resp = respond(
        post_form(
            "/machine/lidl-de-pijp/melden",
            "status=OUT_OF_ORDER&note=%3Cscript%3Ealert(1)%3C%2Fscript%3E",
        ),
        &state,
    );
    assert_eq!(resp.status(), 303);
    assert_eq!(
        header(&resp, "Location").as_deref(),
        Some("/machine/lidl-de-pijp")
    );

    let html = body_string(handle(get("/machine/lidl-de-pijp"), &state).unwrap());
    assert!(!html.contains("<script>alert(1)</script>"));
    assert_eq!(
        select_texts(&html, ".current .badge"),
        vec!["Stuk"]
    );
    assert_eq!(
        select_texts(&html, "ul.reports .note"),
        vec!["<script>alert(1)</script>"]
    );
    assert_eq!(select_texts(&html, "form.report-form input[type=radio]").len(), 3);
}

#[test]
fn report_form_rejects_unknown_status() {
    let state = test_state();
    let resp = respond(post_form("/machine/lidl-de-pijp/melden", "status=KAPOT"), &state);

    assert_eq!(resp.status(), 400);
    let html = body_string(resp);
    assert_eq!(select_texts(&html, "h1.error-title"), vec!["Ongeldige invoer"]);
}

#[test]
fn unknown_page_is_html_404() {
    let state = test_state();
    let resp = respond(get("/machine/bestaat-niet"), &state);

    assert_eq!(resp.status(), 404);
    let html = body_string(resp);
    assert_eq!(select_texts(&html, "h1.error-title"), vec!["Niet gevonden"]);

    let resp = respond(get("/nergens/heen"), &state);
    assert_eq!(resp.status(), 404);
}

#[test]
fn city_and_retailer_pages_render() {
    let state = test_state();

    let html = body_string(handle(get("/stad/AMSTERDAM"), &state).unwrap());
    assert_eq!(select_texts(&html, "h1"), vec!["Statiegeldautomaten in Amsterdam"]);

    let html = body_string(handle(get("/keten/Jumbo"), &state).unwrap());
    assert_eq!(select_texts(&html, "table.locations tbody tr").len(), 1);
}

#[test]
fn stats_page_matches_api() {
    let state = test_state();
    add_report(&state, "ah-gelderlandplein", Status::Working, 1);

    let api = body_json(handle(get("/api/stats"), &state).unwrap());
    let html = body_string(handle(get("/stats"), &state).unwrap());

    assert_eq!(select_texts(&html, "dd#total"), vec![api["total"].to_string()]);
    assert_eq!(select_texts(&html, "dd#working"), vec!["1"]);
    assert_eq!(select_texts(&html, "ol.top-cities li a"), vec!["Amsterdam"]);
}

#[test]
fn contact_form_validates_email() {
    let state = test_state();

    let resp = respond(
        post_form("/contact", "name=Sanne&email=geen-adres&message=Hoi"),
        &state,
    );
    assert_eq!(resp.status(), 400);

    let resp = respond(
        post_form("/contact", "name=Sanne&email=sanne%40example.nl&message=Hoi"),
        &state,
    );
    assert_eq!(resp.status(), 200);
    assert_eq!(select_texts(&body_string(resp), "h1"), vec!["Bedankt!"]);
}

#[test]
fn add_machine_form_round_trip() {
    let state = test_state();

    let html = body_string(handle(get("/machine/nieuw"), &state).unwrap());
    assert_eq!(select_texts(&html, "form[action=\"/machine/nieuw\"] input[required]").len(), 4);

    let resp = respond(
        post_form(
            "/machine/nieuw",
            "name=Dirk+Centrum&retailer=Dirk&address=Markt+1&city=Delft",
        ),
        &state,
    );
    assert_eq!(resp.status(), 200);
}

#[test]
fn sitemap_lists_public_pages() {
    let state = test_state();
    let resp = handle(get("/sitemap.xml"), &state).unwrap();

    assert_eq!(
        header(&resp, "Content-Type").as_deref(),
        Some("application/xml; charset=utf-8")
    );
    let xml = body_string(resp);
    assert!(xml.contains("<loc>https://www.statiestatus.nl/</loc>"));
    assert!(xml.contains("<loc>https://www.statiestatus.nl/stats</loc>"));
}
