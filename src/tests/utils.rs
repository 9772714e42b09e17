// src/tests/utils.rs
use astra::{Body, Request, Response};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use http::Method;
use std::io::Read;
use std::ops::Deref;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

use crate::antispam::{NoteSanitizer, RateLimiter};
use crate::db::locations::{insert_location, NewLocation};
use crate::db::reports::{insert_report, NewReport};
use crate::db::{init_db, seed_demo_data, Database};
use crate::domain::geo::LatLng;
use crate::domain::Status;
use crate::state::AppState;

/// Every test sees the same "now": 2025-06-01 12:00 UTC.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Application state over a throwaway SQLite file. The file goes away with
/// the value.
pub struct TestApp {
    state: AppState,
    _dir: TempDir,
}

impl Deref for TestApp {
    type Target = AppState;

    fn deref(&self) -> &AppState {
        &self.state
    }
}

/// Fresh file-backed DB with the production schema and the demo locations.
pub fn init_test_db() -> (Database, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("statiestatus.sqlite3");

    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    seed_demo_data(&db).unwrap_or_else(|e| panic!("Seeding failed: {e}"));
    (db, dir)
}

pub fn test_state() -> TestApp {
    let (db, dir) = init_test_db();
    TestApp {
        state: AppState {
            db,
            limiter: RateLimiter::new(300, 3),
            sanitizer: NoteSanitizer::new().unwrap(),
            ip_hash_secret: "test-secret".to_string(),
            site_url: "https://www.statiestatus.nl".to_string(),
            mailer: None,
            clock: fixed_now,
        },
        _dir: dir,
    }
}

/// Insert `count` extra locations in Utrecht in one transaction.
pub fn add_locations(state: &AppState, count: usize) {
    state
        .db
        .with_conn(|conn| {
            let tx = conn.transaction()?;
            for i in 0..count {
                let id = format!("plus-utrecht-{i}");
                insert_location(
                    &tx,
                    &NewLocation {
                        id: &id,
                        name: &id,
                        retailer: "Plus",
                        position: LatLng::new(52.09, 5.12).unwrap(),
                        address: "Vredenburg 1",
                        city: "Utrecht",
                        created_at: fixed_now() - TimeDelta::days(1),
                    },
                )?;
            }
            tx.commit()?;
            Ok(())
        })
        .unwrap();
}

/// Store a report `hours_ago` hours before the fixed clock.
pub fn add_report(state: &AppState, location_id: &str, status: Status, hours_ago: i64) {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let id = format!("seeded-{}", COUNTER.fetch_add(1, Ordering::SeqCst));
    state
        .db
        .with_conn(|conn| {
            insert_report(
                conn,
                &NewReport {
                    id: &id,
                    location_id,
                    status,
                    note: None,
                    ip_hash: "seed",
                    created_at: fixed_now() - TimeDelta::hours(hours_ago),
                },
            )
        })
        .unwrap();
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, json: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .header("X-Forwarded-For", "203.0.113.7")
        .body(Body::from(json.to_string()))
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("X-Forwarded-For", "203.0.113.8")
        .body(Body::from(form.to_string()))
        .unwrap()
}

pub fn body_string(mut resp: Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}

pub fn body_json(resp: Response) -> serde_json::Value {
    serde_json::from_str(&body_string(resp)).unwrap()
}

pub fn header(resp: &Response, name: &str) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
