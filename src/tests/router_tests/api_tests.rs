// src/tests/router_tests/api_tests.rs
use crate::db::locations::MAX_LIST_LIMIT;
use crate::domain::Status;
use crate::router::{handle, respond};
use crate::tests::utils::{add_locations, add_report, body_json, get, header, post_json, test_state};

#[test]
fn locations_carry_derived_status() {
    let state = test_state();
    // Two stale WORKING reports lose to one fresh OUT_OF_ORDER report.
    add_report(&state, "jumbo-damrak", Status::Working, 60);
    add_report(&state, "jumbo-damrak", Status::Working, 70);
    add_report(&state, "jumbo-damrak", Status::OutOfOrder, 1);

    let resp = handle(get("/api/locations"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Cache-Control").as_deref(), Some("s-maxage=60"));

    let json = body_json(resp);
    let locations = json["locations"].as_array().unwrap();
    assert_eq!(locations.len(), 3);

    let jumbo = locations.iter().find(|l| l["id"] == "jumbo-damrak").unwrap();
    assert_eq!(jumbo["currentStatus"], "OUT_OF_ORDER");
    assert_eq!(jumbo["totalReports"], 3);
    assert_eq!(jumbo["lastReports"].as_array().unwrap().len(), 3);
    assert_eq!(jumbo["lastReports"][0]["status"], "OUT_OF_ORDER");

    let lidl = locations.iter().find(|l| l["id"] == "lidl-de-pijp").unwrap();
    assert!(lidl["currentStatus"].is_null());
    assert!(lidl["lastReportAt"].is_null());
    assert!(lidl.get("distanceKm").is_none());
}

#[test]
fn locations_sort_by_distance_when_origin_given() {
    let state = test_state();
    // Right next to Jumbo Damrak.
    let resp = handle(get("/api/locations?lat=52.3741&lng=4.8967"), &state).unwrap();
    let json = body_json(resp);
    let locations = json["locations"].as_array().unwrap();

    assert_eq!(locations[0]["id"], "jumbo-damrak");
    let distances: Vec<f64> = locations
        .iter()
        .map(|l| l["distanceKm"].as_f64().unwrap())
        .collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn locations_respect_bounds_and_limit() {
    let state = test_state();
    // Box around the Gelderlandplein only.
    let resp = handle(
        get("/api/locations?n=52.34&s=52.33&e=4.89&w=4.88"),
        &state,
    )
    .unwrap();
    let json = body_json(resp);
    let ids: Vec<&str> = json["locations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["ah-gelderlandplein"]);

    let resp = handle(get("/api/locations?limit=2"), &state).unwrap();
    assert_eq!(body_json(resp)["locations"].as_array().unwrap().len(), 2);

    let resp = respond(get("/api/locations?n=53"), &state);
    assert_eq!(resp.status(), 400);
}

#[test]
fn unknown_machine_is_json_404() {
    let state = test_state();
    let resp = respond(get("/api/machine/bestaat-niet"), &state);

    assert_eq!(resp.status(), 404);
    assert_eq!(
        header(&resp, "Content-Type").as_deref(),
        Some("application/json")
    );
    assert_eq!(body_json(resp)["error"], "Not Found");
}

#[test]
fn machine_detail_includes_confidence() {
    let state = test_state();
    for hours in [1, 2, 3] {
        add_report(&state, "lidl-de-pijp", Status::Issues, hours);
    }

    let resp = handle(get("/api/machine/lidl-de-pijp"), &state).unwrap();
    let json = body_json(resp);
    let location = &json["location"];

    assert_eq!(location["name"], "Lidl De Pijp");
    assert_eq!(location["currentStatus"], "ISSUES");
    assert_eq!(location["confidence"], "high");
    assert_eq!(location["reports"].as_array().unwrap().len(), 3);
}

#[test]
fn report_is_created_then_rate_limited() {
    let state = test_state();
    let body = r#"{"locationId":"ah-gelderlandplein","status":"WORKING","note":"  prima  "}"#;

    for _ in 0..3 {
        let resp = respond(post_json("/api/reports", body), &state);
        assert_eq!(resp.status(), 201);
        let json = body_json(resp);
        assert_eq!(json["report"]["note"], "prima");
        assert_eq!(json["currentStatus"], "WORKING");
    }

    let resp = respond(post_json("/api/reports", body), &state);
    assert_eq!(resp.status(), 429);
    assert_eq!(header(&resp, "Retry-After").as_deref(), Some("300"));
    let json = body_json(resp);
    assert_eq!(json["retryAfter"], 300);
    assert!(json["error"].is_string());
}

#[test]
fn report_note_is_masked() {
    let state = test_state();
    let body = r#"{"locationId":"jumbo-damrak","status":"ISSUES","note":"Wat een KANKER machine"}"#;

    let resp = handle(post_json("/api/reports", body), &state).unwrap();
    assert_eq!(body_json(resp)["report"]["note"], "Wat een *** machine");
}

#[test]
fn report_validation_errors() {
    let state = test_state();

    let resp = respond(
        post_json("/api/reports", r#"{"locationId":"jumbo-damrak","status":"KAPOT"}"#),
        &state,
    );
    assert_eq!(resp.status(), 400);

    let resp = respond(post_json("/api/reports", "niet json"), &state);
    assert_eq!(resp.status(), 400);

    let resp = respond(
        post_json("/api/reports", r#"{"locationId":"nergens","status":"WORKING"}"#),
        &state,
    );
    assert_eq!(resp.status(), 404);
}

#[test]
fn city_lookup_ignores_case() {
    let state = test_state();

    let resp = handle(get("/api/stad/amsterdam"), &state).unwrap();
    let json = body_json(resp);
    assert_eq!(json["city"], "Amsterdam");
    assert_eq!(json["locations"].as_array().unwrap().len(), 3);

    let resp = respond(get("/api/stad/Rotterdam"), &state);
    assert_eq!(resp.status(), 404);
}

#[test]
fn retailer_lookup_decodes_path() {
    let state = test_state();

    let resp = handle(get("/api/keten/albert%20heijn"), &state).unwrap();
    let json = body_json(resp);
    assert_eq!(json["retailer"], "Albert Heijn");
    assert_eq!(json["locations"][0]["id"], "ah-gelderlandplein");
}

#[test]
fn stats_count_derived_statuses() {
    let state = test_state();
    add_report(&state, "jumbo-damrak", Status::OutOfOrder, 2);
    add_report(&state, "lidl-de-pijp", Status::Working, 5);

    let json = body_json(handle(get("/api/stats"), &state).unwrap());
    assert_eq!(json["total"], 3);
    assert_eq!(json["working"], 1);
    assert_eq!(json["broken"], 1);
    assert_eq!(json["unknown"], 1);
    assert_eq!(json["brokenPct"], 33);
    assert_eq!(json["topCities"][0]["city"], "Amsterdam");
    assert_eq!(json["topCities"][0]["count"], 3);
}

#[test]
fn suggestion_is_accepted_without_mailer() {
    let state = test_state();
    let body = r#"{"name":"Dirk Centrum","retailer":"Dirk","address":"Markt 1","city":"Delft"}"#;

    let resp = respond(post_json("/api/suggestions", body), &state);
    assert_eq!(resp.status(), 202);
    assert_eq!(body_json(resp)["ok"], true);

    let resp = respond(
        post_json("/api/suggestions", r#"{"name":"","retailer":"Dirk","address":"x","city":"y"}"#),
        &state,
    );
    assert_eq!(resp.status(), 400);
}

#[test]
fn stats_and_list_see_every_location() {
    let state = test_state();
    add_locations(&state, MAX_LIST_LIMIT + 100);
    let expected = MAX_LIST_LIMIT + 103;

    let json = body_json(handle(get("/api/stats"), &state).unwrap());
    assert_eq!(json["total"], expected);
    assert_eq!(json["unknown"], expected);
    assert_eq!(json["topCities"][0]["city"], "Utrecht");
    assert_eq!(json["topCities"][0]["count"], MAX_LIST_LIMIT + 100);

    let json = body_json(handle(get("/api/locations"), &state).unwrap());
    assert_eq!(json["locations"].as_array().unwrap().len(), expected);

    // An explicit limit is still capped.
    let json = body_json(handle(get("/api/locations?limit=999999"), &state).unwrap());
    assert_eq!(json["locations"].as_array().unwrap().len(), MAX_LIST_LIMIT);
}
