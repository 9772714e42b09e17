// src/api/locations.rs
use astra::Request;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::api::dto::{
    CityResponse, GroupItem, LocationListItem, LocationsResponse, MachineDetail, MachineResponse,
    RetailerResponse, StatsResponse,
};
use crate::db::locations::{LocationFilter, MAX_LIST_LIMIT};
use crate::domain::geo::{distance_km, Bounds, LatLng};
use crate::errors::ServerError;
use crate::request::{parse_query, query_f64};
use crate::responses::json::{LIST_CACHE, NO_STORE};
use crate::responses::{json_response, ResultResp};
use crate::services::catalog;
use crate::state::AppState;

/// `GET /api/locations?limit=&n=&s=&e=&w=&lat=&lng=`
pub fn list_locations(req: &Request, state: &AppState) -> ResultResp {
    let query = parse_query(req);
    let filter = LocationFilter {
        bounds: bounds_param(&query)?,
        limit: limit_param(&query)?,
    };
    let origin = origin_param(&query)?;

    let now = state.now();
    let mut items: Vec<LocationListItem> = catalog::list(state, &filter)?
        .iter()
        .map(|l| LocationListItem::new(l, now))
        .collect();

    if let Some(origin) = origin {
        for item in &mut items {
            item.distance_km = Some(distance_km(
                origin,
                LatLng {
                    lat: item.lat,
                    lng: item.lng,
                },
            ));
        }
        items.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(Ordering::Equal)
        });
    }

    json_response(200, &LocationsResponse { locations: items }, LIST_CACHE)
}

/// `GET /api/machine/{id}`
pub fn machine(state: &AppState, id: &str) -> ResultResp {
    let found = catalog::detail(state, id)?;
    let body = MachineResponse {
        location: MachineDetail::new(&found, state.now()),
    };
    json_response(200, &body, NO_STORE)
}

/// `GET /api/stad/{city}`
pub fn city(state: &AppState, city: &str) -> ResultResp {
    let now = state.now();
    let found = catalog::in_city(state, city)?;
    let body = CityResponse {
        // Stored spelling, not the one from the URL.
        city: found
            .first()
            .map(|l| l.location.city.clone())
            .unwrap_or_else(|| city.to_string()),
        locations: found.iter().map(|l| GroupItem::new(l, now)).collect(),
    };
    json_response(200, &body, LIST_CACHE)
}

/// `GET /api/keten/{retailer}`
pub fn retailer(state: &AppState, retailer: &str) -> ResultResp {
    let now = state.now();
    let found = catalog::of_retailer(state, retailer)?;
    let body = RetailerResponse {
        retailer: found
            .first()
            .map(|l| l.location.retailer.clone())
            .unwrap_or_else(|| retailer.to_string()),
        locations: found.iter().map(|l| GroupItem::new(l, now)).collect(),
    };
    json_response(200, &body, LIST_CACHE)
}

/// `GET /api/stats`
pub fn stats(state: &AppState) -> ResultResp {
    let overview = catalog::overview(state)?;
    json_response(200, &StatsResponse::from(overview), LIST_CACHE)
}

/// No `limit` means every location.
fn limit_param(query: &HashMap<String, String>) -> Result<Option<usize>, ServerError> {
    match query.get("limit") {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .map(|n| Some(n.min(MAX_LIST_LIMIT)))
            .ok_or_else(|| ServerError::BadRequest("invalid limit".into())),
    }
}

/// All four edges or none.
fn bounds_param(query: &HashMap<String, String>) -> Result<Option<Bounds>, ServerError> {
    let edges = (
        query_f64(query, "n")?,
        query_f64(query, "s")?,
        query_f64(query, "e")?,
        query_f64(query, "w")?,
    );
    match edges {
        (None, None, None, None) => Ok(None),
        (Some(n), Some(s), Some(e), Some(w)) => Bounds::new(n, s, e, w)
            .map(Some)
            .ok_or_else(|| ServerError::BadRequest("invalid bounds".into())),
        _ => Err(ServerError::BadRequest(
            "bounds need n, s, e and w".into(),
        )),
    }
}

fn origin_param(query: &HashMap<String, String>) -> Result<Option<LatLng>, ServerError> {
    match (query_f64(query, "lat")?, query_f64(query, "lng")?) {
        (None, None) => Ok(None),
        (Some(lat), Some(lng)) => LatLng::new(lat, lng)
            .map(Some)
            .ok_or_else(|| ServerError::BadRequest("invalid lat/lng".into())),
        _ => Err(ServerError::BadRequest("lat and lng go together".into())),
    }
}
