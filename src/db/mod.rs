pub mod connection;
pub mod locations;
pub mod reports;

pub use connection::{init_db, seed_demo_data, Database};

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::Row;

/// Timestamps are stored as UNIX seconds.
pub(crate) fn timestamp_from_row(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let secs: i64 = row.get(idx)?;
    DateTime::from_timestamp(secs, 0).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Integer,
            format!("timestamp out of range: {secs}").into(),
        )
    })
}

/// In-memory database with the production schema and demo locations.
#[cfg(test)]
pub(crate) fn test_conn() -> rusqlite::Connection {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch(include_str!("../../sql/schema.sql")).unwrap();
    conn.execute_batch(include_str!("../../sql/seed.sql")).unwrap();
    conn
}
