// src/db/reports.rs
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

use crate::db::timestamp_from_row;
use crate::domain::{Report, Status};
use crate::errors::ServerError;

pub struct NewReport<'a> {
    pub id: &'a str,
    pub location_id: &'a str,
    pub status: Status,
    pub note: Option<&'a str>,
    pub ip_hash: &'a str,
    pub created_at: DateTime<Utc>,
}

const REPORT_COLUMNS: &str = "id, location_id, status, note, created_at";

fn map_report(row: &Row<'_>) -> rusqlite::Result<Report> {
    Ok(Report {
        id: row.get(0)?,
        location_id: row.get(1)?,
        status: row.get(2)?,
        note: row.get(3)?,
        created_at: timestamp_from_row(row, 4)?,
    })
}

/// Newest-first slice of one location's reports.
pub fn recent_reports(
    conn: &Connection,
    location_id: &str,
    limit: usize,
) -> Result<Vec<Report>, ServerError> {
    let sql = format!(
        "select {REPORT_COLUMNS} from reports
         where location_id = ?
         order by created_at desc, rowid desc
         limit ?"
    );
    let mut stmt = conn
        .prepare_cached(&sql)
        .map_err(|e| ServerError::DbError(format!("prepare recent reports failed: {e}")))?;

    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let rows = stmt
        .query_map(params![location_id, limit], map_report)
        .map_err(|e| ServerError::DbError(format!("query recent reports failed: {e}")))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| {
            tracing::error!(location_id, error = %e, "unreadable report row");
            ServerError::DbError(format!("read report failed: {e}"))
        })?);
    }
    Ok(out)
}

pub fn count_reports(conn: &Connection, location_id: &str) -> Result<i64, ServerError> {
    conn.query_row(
        "select count(*) from reports where location_id = ?",
        params![location_id],
        |r| r.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("count reports failed: {e}")))
}

/// Stores a report. Reports are never updated afterwards.
pub fn insert_report(conn: &Connection, new: &NewReport<'_>) -> Result<Report, ServerError> {
    conn.execute(
        "insert into reports (id, location_id, status, note, created_at, ip_hash)
         values (?, ?, ?, ?, ?, ?)",
        params![
            new.id,
            new.location_id,
            new.status,
            new.note,
            new.created_at.timestamp(),
            new.ip_hash
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert report failed: {e}")))?;

    Ok(Report {
        id: new.id.to_string(),
        location_id: new.location_id.to_string(),
        status: new.status,
        note: new.note.map(str::to_string),
        created_at: new.created_at,
    })
}
