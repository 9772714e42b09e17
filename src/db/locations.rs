// src/db/locations.rs
#[cfg(test)]
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row, ToSql};

use crate::db::reports::recent_reports;
use crate::db::timestamp_from_row;
use crate::domain::geo::Bounds;
#[cfg(test)]
use crate::domain::geo::LatLng;
use crate::domain::{Location, LocationWithReports};
use crate::errors::ServerError;

/// Upper bound for a client-chosen `limit`.
pub const MAX_LIST_LIMIT: usize = 2_000;

const LOCATION_COLUMNS: &str =
    "l.id, l.name, l.retailer, l.lat, l.lng, l.address, l.city, l.created_at";

/// `limit: None` returns every matching location.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationFilter {
    pub bounds: Option<Bounds>,
    pub limit: Option<usize>,
}

#[cfg(test)]
pub struct NewLocation<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub retailer: &'a str,
    pub position: LatLng,
    pub address: &'a str,
    pub city: &'a str,
    pub created_at: DateTime<Utc>,
}

fn map_location(row: &Row<'_>) -> rusqlite::Result<Location> {
    Ok(Location {
        id: row.get(0)?,
        name: row.get(1)?,
        retailer: row.get(2)?,
        lat: row.get(3)?,
        lng: row.get(4)?,
        address: row.get(5)?,
        city: row.get(6)?,
        created_at: timestamp_from_row(row, 7)?,
    })
}

fn query_locations(
    conn: &Connection,
    sql: &str,
    params: &[&dyn ToSql],
) -> Result<Vec<Location>, ServerError> {
    let mut stmt = conn
        .prepare_cached(sql)
        .map_err(|e| ServerError::DbError(format!("prepare locations failed: {e}")))?;

    let rows = stmt
        .query_map(params, map_location)
        .map_err(|e| ServerError::DbError(format!("query locations failed: {e}")))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(format!("read location failed: {e}")))?);
    }
    Ok(out)
}

/// Attach the newest `reports_per_location` reports and the total count to
/// every location, one location at a time.
fn with_reports(
    conn: &Connection,
    locations: Vec<Location>,
    reports_per_location: usize,
) -> Result<Vec<LocationWithReports>, ServerError> {
    locations
        .into_iter()
        .map(|location| {
            let recent_reports = recent_reports(conn, &location.id, reports_per_location)?;
            let total_reports = crate::db::reports::count_reports(conn, &location.id)?;
            Ok(LocationWithReports {
                location,
                recent_reports,
                total_reports,
            })
        })
        .collect()
}

/// Newest locations first, optionally restricted to a map viewport.
pub fn list_locations(
    conn: &Connection,
    filter: &LocationFilter,
    reports_per_location: usize,
) -> Result<Vec<LocationWithReports>, ServerError> {
    // A negative LIMIT means no limit in SQLite.
    let limit = filter
        .limit
        .map_or(-1, |n| i64::try_from(n.min(MAX_LIST_LIMIT)).unwrap_or(0));

    let locations = match filter.bounds {
        Some(b) => query_locations(
            conn,
            &format!(
                "select {LOCATION_COLUMNS} from locations l
                 where l.lat between ? and ? and l.lng between ? and ?
                 order by l.created_at desc, l.name asc
                 limit ?"
            ),
            &[&b.south, &b.north, &b.west, &b.east, &limit],
        )?,
        None => query_locations(
            conn,
            &format!(
                "select {LOCATION_COLUMNS} from locations l
                 order by l.created_at desc, l.name asc
                 limit ?"
            ),
            &[&limit],
        )?,
    };

    with_reports(conn, locations, reports_per_location)
}

pub fn find_location(
    conn: &Connection,
    id: &str,
    reports_per_location: usize,
) -> Result<Option<LocationWithReports>, ServerError> {
    let location = conn
        .query_row(
            &format!("select {LOCATION_COLUMNS} from locations l where l.id = ?"),
            params![id],
            map_location,
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("find location failed: {e}")))?;

    match location {
        Some(location) => Ok(with_reports(conn, vec![location], reports_per_location)?.pop()),
        None => Ok(None),
    }
}

pub fn location_exists(conn: &Connection, id: &str) -> Result<bool, ServerError> {
    conn.query_row(
        "select exists(select 1 from locations where id = ?)",
        params![id],
        |r| r.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("location lookup failed: {e}")))
}

/// Case-insensitive city match, ordered by name.
pub fn locations_in_city(
    conn: &Connection,
    city: &str,
    reports_per_location: usize,
) -> Result<Vec<LocationWithReports>, ServerError> {
    let locations = query_locations(
        conn,
        &format!(
            "select {LOCATION_COLUMNS} from locations l
             where l.city = ? collate nocase
             order by l.name asc"
        ),
        &[&city.trim()],
    )?;
    with_reports(conn, locations, reports_per_location)
}

/// Case-insensitive retailer match, ordered by city then name.
pub fn locations_of_retailer(
    conn: &Connection,
    retailer: &str,
    reports_per_location: usize,
) -> Result<Vec<LocationWithReports>, ServerError> {
    let locations = query_locations(
        conn,
        &format!(
            "select {LOCATION_COLUMNS} from locations l
             where l.retailer = ? collate nocase
             order by l.city asc, l.name asc"
        ),
        &[&retailer.trim()],
    )?;
    with_reports(conn, locations, reports_per_location)
}

#[cfg(test)]
pub fn insert_location(conn: &Connection, new: &NewLocation<'_>) -> Result<Location, ServerError> {
    conn.execute(
        "insert into locations (id, name, retailer, lat, lng, address, city, created_at)
         values (?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            new.id,
            new.name,
            new.retailer,
            new.position.lat,
            new.position.lng,
            new.address,
            new.city,
            new.created_at.timestamp()
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert location failed: {e}")))?;

    Ok(Location {
        id: new.id.to_string(),
        name: new.name.to_string(),
        retailer: new.retailer.to_string(),
        lat: new.position.lat,
        lng: new.position.lng,
        address: new.address.to_string(),
        city: new.city.to_string(),
        created_at: new.created_at,
    })
}
